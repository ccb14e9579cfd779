//! Implementation of the `svcgen list` command.
//!
//! Shows the services found in the interface directory and how each
//! registry file compares to that set.

use serde_json::json;

use svcgen_core::domain::EndpointRegistry;

use crate::{
    cli::{ListArgs, ListFormat},
    commands::{build_pipeline, require_initialized},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// How one registry differs from the services on disk.
struct Drift<'a> {
    registry: &'a EndpointRegistry,
    /// On disk but not registered.
    missing: Vec<&'a str>,
    /// Registered but without an interface definition.
    stale: Vec<&'a str>,
}

impl<'a> Drift<'a> {
    fn new(registry: &'a EndpointRegistry, services: &'a [String]) -> Self {
        let stale = registry
            .entries()
            .iter()
            .filter(|e| !services.contains(*e))
            .map(String::as_str)
            .collect();
        Self {
            registry,
            missing: registry.missing(services),
            stale,
        }
    }

    fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.stale.is_empty()
    }
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    require_initialized(&config)?;
    let pipeline = build_pipeline(&config)?;
    let services = pipeline.known_services()?;
    let registries = pipeline.registries()?;
    let drift: Vec<_> = registries
        .iter()
        .map(|r| Drift::new(r, &services))
        .collect();

    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!("Services ({}):", services.len()))?;
            for service in &services {
                let registered: Vec<_> = registries
                    .iter()
                    .filter(|r| r.contains(service))
                    .map(|r| r.kind().as_str())
                    .collect();
                output.row(service, &registered.join(", "), 24)?;
            }

            output.header("\nRegistries:")?;
            for d in &drift {
                if d.is_clean() {
                    output.success(&format!(
                        "{}: {} entries, in sync",
                        d.registry.kind(),
                        d.registry.len()
                    ))?;
                    continue;
                }
                if !d.missing.is_empty() {
                    output.warning(&format!(
                        "{}: not registered: {}",
                        d.registry.kind(),
                        d.missing.join(", ")
                    ))?;
                }
                if !d.stale.is_empty() {
                    output.warning(&format!(
                        "{}: registered without a definition: {}",
                        d.registry.kind(),
                        d.stale.join(", ")
                    ))?;
                }
            }
            if drift.iter().any(|d| !d.is_clean()) {
                output.info("Run 'svcgen create' or 'svcgen remove' to rebuild the registries")?;
            }
        }

        ListFormat::List => {
            for service in &services {
                output.print(service)?;
            }
        }

        ListFormat::Json => {
            let registries: Vec<_> = drift
                .iter()
                .map(|d| {
                    json!({
                        "kind": d.registry.kind(),
                        "entries": d.registry.entries(),
                        "missing": d.missing,
                        "stale": d.stale,
                    })
                })
                .collect();
            output.json(&json!({
                "services": services,
                "registries": registries,
            }))?;
        }
    }

    Ok(())
}
