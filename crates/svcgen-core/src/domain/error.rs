// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside outcomes and reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Service name cannot be empty")]
    EmptyServiceName,

    #[error("Invalid service name '{name}': {reason}")]
    InvalidServiceName { name: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Illegal pipeline transition from '{from}' to '{to}'")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyServiceName => vec![
                "Provide at least one non-empty service name".into(),
                "Example: svcgen create users orders".into(),
            ],
            Self::InvalidServiceName { name, reason } => vec![
                format!("Service name '{}' is invalid: {}", name, reason),
                "Use letters, digits, '_' and '-' only".into(),
                "Examples: users, userAccount, billing_v2".into(),
            ],
            Self::InvalidTransition { .. } => vec![
                "The generation pipeline reached an impossible state".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyServiceName | Self::InvalidServiceName { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidTransition { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
