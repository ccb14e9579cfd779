//! CLI errors: user-facing messages, suggestions and exit codes.
//!
//! Core errors are wrapped, not re-described; their category decides the
//! exit code.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use svcgen_core::error::{ErrorCategory as CoreCategory, SvcgenError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything a command can fail with.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed before reaching the core).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The workspace has not been initialised.
    #[error("Not initialised: {path} does not exist")]
    NotInitialized { path: PathBuf },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `svcgen-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("Generation failed: {0}")]
    Core(#[from] SvcgenError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {}", message),
                "Use --help for usage information".into(),
            ],

            Self::NotInitialized { path } => vec![
                format!("Expected {} to exist", path.display()),
                "Run 'svcgen init' in the gateway root".into(),
                "Or point layout.base_dir at an initialised workspace".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!(
                    "Check {} and ./.svcgen.toml",
                    crate::config::AppConfig::config_path().display()
                ),
                "Use 'svcgen config list' to see the effective values".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check that layout.base_dir points at the gateway root".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::NotInitialized { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Script => ErrorCategory::Script,
                CoreCategory::Io | CoreCategory::Template | CoreCategory::Internal => {
                    ErrorCategory::Internal
                }
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Script        |  5   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Script => 5,
            ErrorCategory::Internal => 1,
        }
    }

    /// Message, cause chain (when `verbose`) and suggestions, ready for
    /// stderr. `color` adds ANSI styling.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("\u{2717} Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {}\n",
                    paint(&format!("Caused by: {err}"), |t| t.dimmed().to_string())
                ));
                cause = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!(
                "\n{}\n",
                paint("Suggestions:", |t| t.yellow().bold().to_string())
            ));
            for suggestion in &suggestions {
                out.push_str(&format!("  - {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{}\n",
                paint("Use -v / --verbose for more details.", |t| t.dimmed().to_string())
            ));
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Script => tracing::error!("Script error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// The external generation script failed.
    Script,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use svcgen_core::application::ApplicationError;

    fn core(err: ApplicationError) -> CliError {
        CliError::Core(err.into())
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
            }
            .exit_code(),
            2
        );
        assert_eq!(core(ApplicationError::ValidationFailed("empty".into())).exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(
            CliError::NotInitialized {
                path: PathBuf::from("server")
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_script() {
        let err = core(ApplicationError::ScriptFailed {
            script: PathBuf::from("proto-gen.sh"),
            reason: "exit status 1".into(),
        });
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn exit_code_internal_for_io_and_template() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
        let template = core(ApplicationError::RenderingFailed {
            template: "api_stub".into(),
            reason: "missing".into(),
        });
        assert_eq!(template.exit_code(), 1);
    }

    // ── suggestions / format ──────────────────────────────────────────────

    #[test]
    fn not_initialized_suggests_init() {
        let err = CliError::NotInitialized {
            path: PathBuf::from("server"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("svcgen init")));
    }

    #[test]
    fn plain_render_has_header_and_no_ansi() {
        let err = CliError::NotInitialized {
            path: PathBuf::from("/tmp/x"),
        };
        let s = err.render(false, false);
        assert!(s.contains("Error: Not initialised"));
        assert!(s.contains("Suggestions:"));
        assert!(!s.contains('\x1b'));
    }

    #[test]
    fn verbose_render_shows_cause() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.render(true, false);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }
}
