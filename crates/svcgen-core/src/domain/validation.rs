use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// A service name that is safe to use as a path segment.
    ///
    /// Stricter than [`ServiceDescriptor::new`](crate::domain::ServiceDescriptor::new):
    /// a name that escapes its directory would make rollback delete the
    /// wrong tree.
    pub fn validate_service_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyServiceName);
        }
        // Also covers `..` and hidden names. A dot would split the
        // `<service>.<RegisterFn>` registry entry.
        if name.contains('.') {
            return Err(invalid(name, "name cannot contain '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid(name, "name cannot contain path separators"));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(invalid(name, "name cannot contain whitespace"));
        }
        Ok(())
    }

    /// Validate every name of a batch, reporting the first bad one.
    pub fn validate_batch<S: AsRef<str>>(names: &[S]) -> Result<(), DomainError> {
        names
            .iter()
            .try_for_each(|name| Self::validate_service_name(name.as_ref()))
    }
}

fn invalid(name: &str, reason: &str) -> DomainError {
    DomainError::InvalidServiceName {
        name: name.into(),
        reason: reason.into(),
    }
}
