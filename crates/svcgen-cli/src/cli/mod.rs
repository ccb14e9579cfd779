//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "svcgen",
    bin_name = "svcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Service scaffolding for gRPC gateways",
    long_about = "svcgen generates API and service stubs plus protobuf definitions \
                  for new services, keeps the endpoint registries in sync with the \
                  services on disk and runs the protobuf generation script.",
    after_help = "EXAMPLES:\n\
        \x20 svcgen init\n\
        \x20 svcgen create users orders\n\
        \x20 svcgen create billing --dry-run\n\
        \x20 svcgen list --format json\n\
        \x20 svcgen completions bash > /usr/share/bash-completion/completions/svcgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate one or more services.
    #[command(
        visible_alias = "create-service",
        about = "Generate services and rebuild the registries",
        after_help = "EXAMPLES:\n\
            \x20 svcgen create users\n\
            \x20 svcgen create userAccount orders --dry-run"
    )]
    Create(CreateArgs),

    /// Remove generated services.
    #[command(
        visible_alias = "rm",
        about = "Remove services and rebuild the registries",
        after_help = "EXAMPLES:\n\
            \x20 svcgen remove orders"
    )]
    Remove(RemoveArgs),

    /// List known services and registry entries.
    #[command(
        visible_alias = "ls",
        about = "List services and registry drift",
        after_help = "EXAMPLES:\n\
            \x20 svcgen list\n\
            \x20 svcgen list --format json"
    )]
    List(ListArgs),

    /// Initialise a workspace.
    #[command(
        about = "Write config, templates and empty registries",
        after_help = "EXAMPLES:\n\
            \x20 svcgen init\n\
            \x20 svcgen init --force  # restore built-in templates"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 svcgen completions bash > ~/.local/share/bash-completion/completions/svcgen\n\
            \x20 svcgen completions zsh  > ~/.zfunc/_svcgen\n\
            \x20 svcgen completions fish > ~/.config/fish/completions/svcgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 svcgen config get paths.script\n\
            \x20 svcgen config list"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `svcgen create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Service names, used verbatim as directory and file names.
    #[arg(value_name = "NAME", help = "Service names to generate")]
    pub names: Vec<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── remove ────────────────────────────────────────────────────────────────────

/// Arguments for `svcgen remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    #[arg(value_name = "NAME", required = true, help = "Service names to remove")]
    pub names: Vec<String>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `svcgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON object.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `svcgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite existing config, templates and registries.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `svcgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `svcgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.script`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the user configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
