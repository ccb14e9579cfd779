//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `svcgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{RenderContext, ScriptStatus};
use crate::error::SvcgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `svcgen_adapters::filesystem::LocalFilesystem` (production)
/// - `svcgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()>;

    /// Write content to a file, creating or truncating it.
    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()>;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &Path) -> SvcgenResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> SvcgenResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> SvcgenResult<()>;

    /// Regular files directly inside `dir`. Order is unspecified.
    fn list_files(&self, dir: &Path) -> SvcgenResult<Vec<PathBuf>>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `svcgen_adapters::renderer::FileTemplateRenderer` (template root on disk)
/// - `svcgen_adapters::renderer::InMemoryTemplates` (built-in templates)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the template registered under `template_id`.
    ///
    /// A missing template, a malformed one, and a reference to a variable
    /// absent from `context` all fail with `ApplicationError::RenderingFailed`.
    fn render(&self, template_id: &str, context: &RenderContext) -> SvcgenResult<String>;
}

/// Port for running the external generation script.
///
/// Implemented by:
/// - `svcgen_adapters::script::ShellScriptRunner` (production)
/// - `svcgen_adapters::script::StaticScriptRunner` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait ScriptRunner: Send + Sync {
    /// Run `script` to completion and report how it ended.
    ///
    /// Only a failure to launch is an error; a non-zero exit is reported
    /// through the returned status.
    fn run(&self, script: &Path) -> SvcgenResult<ScriptStatus>;
}
