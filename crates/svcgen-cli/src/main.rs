//! # svcgen
//!
//! Generates service stubs and interface definitions, rebuilds the endpoint
//! registries and runs the protobuf generation script.
//!
//! Startup: load `.env`, parse arguments, install logging, load
//! configuration, then dispatch. Every failure funnels through
//! [`report_error`], which owns user-facing error output.
//!
//! ## Exit codes
//!
//! | Code | Meaning                  |
//! |------|--------------------------|
//! |  0   | Success                  |
//! |  1   | Internal / I/O / template|
//! |  2   | User / input error       |
//! |  3   | Workspace not initialised|
//! |  4   | Configuration error      |
//! |  5   | Generation script failed |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is fine.
    let _ = dotenvy::dotenv();

    // --help and --version come back as "errors" printed to stdout; real
    // argument-parse failures go to stderr and exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }
    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        format = ?cli.global.output_format,
        "CLI started"
    );

    let verbose = cli.global.is_verbose();
    match run(cli) {
        Ok(()) => {
            info!("svcgen completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => report_error(&e, verbose),
    }
}

/// Load configuration and dispatch to the command handler.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| {
        CliError::ConfigError {
            message: format!("{e:#}"),
            source: None,
        }
    })?;
    let output = OutputManager::new(&cli.global, &config);

    match cli.command {
        Commands::Create(args) => commands::create::execute(args, config, output),
        Commands::Remove(args) => commands::remove::execute(args, config, output),
        Commands::List(args) => commands::list::execute(args, config, output),
        Commands::Init(args) => commands::init::execute(args, config, output),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Log `err`, print it to stderr and pick the exit code.
fn report_error(err: &CliError, verbose: bool) -> ExitCode {
    err.log();
    eprint!("{}", err.render(verbose, std::io::stderr().is_terminal()));
    ExitCode::from(err.exit_code())
}
