//! `svcgen init`: prepare a gateway workspace.
//!
//! Writes the local config file, the built-in templates, the interface
//! directories and the two registry files. Existing files are kept unless
//! `--force` is given.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use svcgen_adapters::builtin_templates;

use crate::{
    cli::InitArgs,
    commands::build_pipeline,
    config::{AppConfig, LOCAL_CONFIG_FILE},
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(force = args.force))]
pub fn execute(args: InitArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    output.info(&format!(
        "Initialising workspace in {}",
        config.layout.base_dir.display()
    ))?;

    let config_path = PathBuf::from(LOCAL_CONFIG_FILE);
    if write_config(&config, &config_path, args.force)? {
        output.success(&format!("Wrote {}", config_path.display()))?;
    } else {
        output.warning(&format!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        ))?;
    }

    let templates = write_templates(&config.template_root(), args.force)?;
    output.success(&format!(
        "{} template(s) written to {}",
        templates.len(),
        config.template_root().display()
    ))?;

    let pipeline = build_pipeline(&config)?;
    let layout = &pipeline.settings().layout;
    for dir in [layout.api_interface_dir(), layout.service_interface_dir()] {
        std::fs::create_dir_all(&dir).map_err(|e| CliError::IoError {
            message: format!("Failed to create '{}'", dir.display()),
            source: e,
        })?;
    }

    let registries = pipeline.initialize_registries(args.force)?;
    for path in &registries {
        output.success(&format!("Wrote {}", path.display()))?;
    }

    let script = &pipeline.settings().script;
    if !script.exists() {
        output.warning(&format!(
            "Generation script {} not found; 'svcgen create' runs it after every batch",
            script.display()
        ))?;
    }

    output.print("")?;
    output.print("Next: svcgen create <NAME>...")?;
    Ok(())
}

/// Serialise `config` to `path`. Returns `false` if the file was kept.
fn write_config(config: &AppConfig, path: &Path, force: bool) -> CliResult<bool> {
    if path.exists() && !force {
        return Ok(false);
    }

    let toml = toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;

    std::fs::write(path, toml).map_err(|e| CliError::IoError {
        message: format!("Failed to write config to '{}'", path.display()),
        source: e,
    })?;
    Ok(true)
}

/// Copy the built-in templates into `root`, skipping files that already
/// exist unless `force` is set.
pub fn write_templates(root: &Path, force: bool) -> CliResult<Vec<PathBuf>> {
    std::fs::create_dir_all(root).map_err(|e| CliError::IoError {
        message: format!("Failed to create template directory '{}'", root.display()),
        source: e,
    })?;

    let mut written = Vec::new();
    for (id, source) in builtin_templates::all() {
        let path = root.join(builtin_templates::file_name(id));
        if path.exists() && !force {
            debug!(template = id, "Template exists, keeping it");
            continue;
        }
        std::fs::write(&path, source).map_err(|e| CliError::IoError {
            message: format!("Failed to write template '{}'", path.display()),
            source: e,
        })?;
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn templates_are_written_once() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("templates");

        let first = write_templates(&root, false).unwrap();
        assert_eq!(first.len(), builtin_templates::all().len());
        assert!(root.join("api_stub.tmpl").is_file());

        std::fs::write(root.join("api_stub.tmpl"), "custom").unwrap();
        assert!(write_templates(&root, false).unwrap().is_empty());
        assert_eq!(
            std::fs::read_to_string(root.join("api_stub.tmpl")).unwrap(),
            "custom"
        );
    }

    #[test]
    fn force_restores_templates() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("templates");
        write_templates(&root, false).unwrap();
        std::fs::write(root.join("api_stub.tmpl"), "custom").unwrap();

        let written = write_templates(&root, true).unwrap();

        assert_eq!(written.len(), builtin_templates::all().len());
        assert_eq!(
            std::fs::read_to_string(root.join("api_stub.tmpl")).unwrap(),
            builtin_templates::API_STUB
        );
    }

    #[test]
    fn config_file_is_kept_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(LOCAL_CONFIG_FILE);
        std::fs::write(&path, "# mine").unwrap();

        assert!(!write_config(&AppConfig::default(), &path, false).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        assert!(write_config(&AppConfig::default(), &path, true).unwrap());
        assert!(std::fs::read_to_string(&path).unwrap().contains("[layout]"));
    }
}
