//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Shell as Target, generate};

use crate::cli::{Cli, CompletionsArgs, Shell};

/// Write the completion script for the requested shell to stdout.
pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    let target = match args.shell {
        Shell::Bash => Target::Bash,
        Shell::Zsh => Target::Zsh,
        Shell::Fish => Target::Fish,
        Shell::PowerShell => Target::PowerShell,
        Shell::Elvish => Target::Elvish,
    };

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(target, &mut cmd, bin_name, &mut std::io::stdout());
    Ok(())
}
