//! Tracing subscriber initialisation.
//!
//! Only the binary installs a subscriber; `svcgen-core` and
//! `svcgen-adapters` just emit spans and events. `RUST_LOG` replaces the
//! level derived from `-v`/`-q` (see [`GlobalArgs::log_level`]).

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Targets that share the CLI's verbosity.
const TARGETS: [&str; 3] = ["svcgen", "svcgen_core", "svcgen_adapters"];

/// Install the global subscriber. Call once, before any event fires.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(args)));

    // Events go to stderr; stdout is reserved for command results.
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `svcgen=warn,svcgen_core=warn,...` for the requested level.
fn directives(args: &GlobalArgs) -> String {
    let level = args.log_level().to_string().to_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
