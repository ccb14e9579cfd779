use std::fmt;

use serde::Serialize;

use crate::domain::{error::DomainError, naming};

/// Identity of one service being scaffolded.
///
/// Built fresh for every generation call and never mutated afterwards;
/// every derived name is computed once here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    raw_name: String,
    title_cased_name: String,
    pascal_name: String,
    resource_segment: String,
}

impl ServiceDescriptor {
    /// Derive every naming variant from the caller-supplied name.
    ///
    /// Fails only when the name is empty (or whitespace).
    pub fn new(raw_name: impl Into<String>) -> Result<Self, DomainError> {
        let raw_name = raw_name.into();
        if raw_name.trim().is_empty() {
            return Err(DomainError::EmptyServiceName);
        }

        Ok(Self {
            title_cased_name: naming::titleize(&raw_name),
            pascal_name: naming::pascalize(&raw_name),
            resource_segment: naming::resource_segment(&raw_name),
            raw_name,
        })
    }

    /// Name as given, used verbatim in paths.
    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// `userAccount` → `User Account`.
    pub fn title_cased_name(&self) -> &str {
        &self.title_cased_name
    }

    /// `userAccount` → `UserAccount`.
    pub fn pascal_name(&self) -> &str {
        &self.pascal_name
    }

    /// `userAccount` → `user`.
    pub fn resource_segment(&self) -> &str {
        &self.resource_segment
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_name)
    }
}
