//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// Validation failed (application-level, not domain).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Template missing, malformed, or rendered with incomplete data.
    #[error("Template '{template}' failed: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// External script could not run or exited unsuccessfully.
    #[error("Script {script} failed: {reason}")]
    ScriptFailed { script: PathBuf, reason: String },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },

    /// Shared in-memory state was poisoned by a panicking writer.
    #[error("Lock poisoned: {resource}")]
    LockPoisoned { resource: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed(reason) => vec![
                format!("Check your input: {}", reason),
                "Example: svcgen create users orders".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Run 'svcgen init' to create the expected layout".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Template '{}' could not be rendered", template),
                "Check that the template root contains it".into(),
                "Run 'svcgen init --force' to restore the built-in templates".into(),
            ],
            Self::ScriptFailed { script, .. } => vec![
                format!("The generation script {} did not succeed", script.display()),
                "Generated files and registries were kept".into(),
                "Fix the script output above and re-run the same command".into(),
            ],
            Self::RollbackFailed { path, .. } => vec![
                format!("Leftover files may remain at {}", path.display()),
                format!("Remove them manually: rm -rf {}", path.display()),
            ],
            Self::LockPoisoned { .. } => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ValidationFailed(_) => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Io,
            Self::RenderingFailed { .. } => ErrorCategory::Template,
            Self::ScriptFailed { .. } => ErrorCategory::Script,
            Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}
