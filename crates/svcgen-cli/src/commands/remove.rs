//! `svcgen remove`: delete generated services and rebuild the registries.

use serde_json::json;
use tracing::{instrument, warn};

use crate::{
    cli::RemoveArgs,
    commands::{build_pipeline, require_initialized},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(services = args.names.len()))]
pub fn execute(args: RemoveArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let pipeline = build_pipeline(&config)?;
    pipeline.plan(&args.names)?;
    require_initialized(&config)?;
    let report = pipeline.remove(&args.names)?;

    if output.is_json() {
        let rollbacks: Vec<_> = report
            .rollbacks
            .iter()
            .map(|r| {
                json!({
                    "service": r.service,
                    "removed": r.removed,
                    "failures": r.failures.iter().map(ToString::to_string).collect::<Vec<_>>(),
                })
            })
            .collect();
        output.json(&json!({
            "removed": rollbacks,
            "services": report.services,
            "registries": report.registries,
        }))?;
        return Ok(());
    }

    for rollback in &report.rollbacks {
        if rollback.removed.is_empty() && rollback.is_complete() {
            output.warning(&format!("'{}' had nothing to remove", rollback.service))?;
            continue;
        }
        for failure in &rollback.failures {
            warn!(service = %rollback.service, "{failure}");
            output.error(&failure.to_string())?;
        }
        output.success(&format!(
            "Removed '{}' ({} paths)",
            rollback.service,
            rollback.removed.len()
        ))?;
    }
    output.success(&format!(
        "Registries rebuilt with {} service(s)",
        report.services.len()
    ))?;
    Ok(())
}
