//! Command handlers.
//!
//! Each handler translates parsed arguments into calls on the core
//! [`GenerationPipeline`] and renders the result. No generation logic lives
//! here.

pub mod completions;
pub mod config;
pub mod create;
pub mod init;
pub mod list;
pub mod remove;

use svcgen_adapters::{FileTemplateRenderer, LocalFilesystem, ShellScriptRunner};
use svcgen_core::application::GenerationPipeline;
use svcgen_core::domain::RegistryKind;
use tracing::debug;

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Wire the production adapters into a pipeline.
///
/// The script path is made absolute because the runner executes it from
/// `layout.base_dir`.
pub fn build_pipeline(config: &AppConfig) -> CliResult<GenerationPipeline> {
    let mut settings = config.pipeline_settings();
    settings.script = std::path::absolute(&settings.script).map_err(|e| CliError::IoError {
        message: format!("Cannot resolve script path '{}'", settings.script.display()),
        source: e,
    })?;

    debug!(
        base = %config.layout.base_dir.display(),
        templates = %config.template_root().display(),
        script = %settings.script.display(),
        "Building pipeline"
    );

    Ok(GenerationPipeline::new(
        Box::new(LocalFilesystem::new()),
        Box::new(FileTemplateRenderer::new(config.template_root())),
        Box::new(ShellScriptRunner::new().with_working_dir(&config.layout.base_dir)),
        settings,
    ))
}

/// Fail with [`CliError::NotInitialized`] unless `svcgen init` has created
/// the interface directory and both registry files.
pub fn require_initialized(config: &AppConfig) -> CliResult<()> {
    let settings = config.pipeline_settings();
    let required = std::iter::once(settings.interface_dir())
        .chain(RegistryKind::ALL.iter().map(|k| settings.registry.path(*k)));

    for path in required {
        if !path.exists() {
            return Err(CliError::NotInitialized { path });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> AppConfig {
        let mut config = AppConfig::default();
        config.layout.base_dir = dir.path().to_path_buf();
        config
    }

    #[test]
    fn fresh_directory_is_not_initialized() {
        let dir = TempDir::new().unwrap();
        let err = require_initialized(&config_in(&dir)).unwrap_err();
        assert!(matches!(err, CliError::NotInitialized { .. }));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn initialized_after_registries_exist() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        init::write_templates(&config.template_root(), false).unwrap();
        let pipeline = build_pipeline(&config).unwrap();
        pipeline.initialize_registries(false).unwrap();

        require_initialized(&config).unwrap();
    }

    #[test]
    fn script_path_is_absolute() {
        let pipeline = build_pipeline(&AppConfig::default()).unwrap();
        assert!(pipeline.settings().script.is_absolute());
    }
}
