//! `svcgen create`: generate services and rebuild the registries.
//!
//! Responsibility: hand the names to the core pipeline and display what it
//! did. Validation, rollback and ordering all happen in the core.

use serde_json::json;
use tracing::{info, instrument};

use svcgen_core::{
    application::PipelineReport,
    domain::{ArtifactPaths, RegistryKind},
};

use crate::{
    cli::CreateArgs,
    commands::{build_pipeline, require_initialized},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(services = args.names.len(), dry_run = args.dry_run))]
pub fn execute(args: CreateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let pipeline = build_pipeline(&config)?;

    if args.dry_run {
        let plan = pipeline.plan(&args.names)?;
        let registries: Vec<_> = RegistryKind::ALL
            .iter()
            .map(|k| pipeline.settings().registry.path(*k))
            .collect();
        return show_plan(&plan, &registries, &output);
    }

    // Bad names are a usage error even in an uninitialised workspace.
    pipeline.plan(&args.names)?;
    require_initialized(&config)?;
    let report = pipeline.run(&args.names)?;
    info!(files = report.files_written(), "Generation finished");
    show_report(&report, &output)
}

fn show_plan(
    plan: &[ArtifactPaths],
    registries: &[std::path::PathBuf],
    output: &OutputManager,
) -> CliResult<()> {
    if output.is_json() {
        let services: Vec<_> = plan
            .iter()
            .map(|paths| {
                let files: serde_json::Map<_, _> = paths
                    .iter()
                    .map(|(kind, path)| (kind.to_string(), json!(path)))
                    .collect();
                json!({ "service": paths.service().raw_name(), "files": files })
            })
            .collect();
        output.json(&json!({
            "dry_run": true,
            "services": services,
            "registries": registries,
        }))?;
        return Ok(());
    }

    output.info("Dry run: no files will be written")?;
    for paths in plan {
        output.header(&format!("\n{}", paths.service().raw_name()))?;
        for (kind, path) in paths.iter() {
            output.row(kind.as_str(), &path.display().to_string(), 17)?;
        }
    }
    output.header("\nRegistries to rebuild")?;
    for path in registries {
        output.print(&format!("  {}", path.display()))?;
    }
    Ok(())
}

fn show_report(report: &PipelineReport, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        let generated: Vec<_> = report
            .outcomes
            .iter()
            .map(|o| json!({ "service": o.service.raw_name(), "files": o.succeeded }))
            .collect();
        output.json(&json!({
            "generated": generated,
            "services": report.services,
            "registries": report.registries,
            "stage": report.stage,
        }))?;
        return Ok(());
    }

    for outcome in &report.outcomes {
        output.success(&format!(
            "Generated '{}' ({} files)",
            outcome.service.raw_name(),
            outcome.succeeded.len()
        ))?;
    }
    output.success(&format!(
        "Registries rebuilt with {} service(s)",
        report.services.len()
    ))?;
    output.success("Generation script finished")?;
    Ok(())
}
