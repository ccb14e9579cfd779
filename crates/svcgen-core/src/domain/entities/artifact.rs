use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{
    entities::service::ServiceDescriptor, layout::ServiceLayout, value_objects::ArtifactKind,
};

/// Built-in template variables.
///
/// All built-ins are `SCREAMING_SNAKE_CASE`; templates reference them as
/// `{{ SERVICE_NAME }}`.
pub mod vars {
    /// Raw service name, e.g. `userAccount`.
    pub const SERVICE_NAME: &str = "SERVICE_NAME";
    /// Title-cased name, e.g. `User Account`.
    pub const SERVICE_TITLE: &str = "SERVICE_TITLE";
    /// Identifier-friendly name, e.g. `UserAccount`.
    pub const SERVICE_PASCAL: &str = "SERVICE_PASCAL";
    /// First camel-case segment, e.g. `user`.
    pub const RESOURCE_SEGMENT: &str = "RESOURCE_SEGMENT";
    /// Every known service (registry templates only).
    pub const SERVICES: &str = "SERVICES";
}

/// A single context value: plain text or a list of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ContextValue {
    Text(String),
    List(Vec<String>),
}

impl ContextValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            Self::Text(_) => None,
        }
    }
}

/// Data bag handed to a template renderer.
///
/// Ordered (`BTreeMap`) so that serialising the same context twice always
/// produces the same structure, which keeps rendering deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RenderContext {
    variables: BTreeMap<String, ContextValue>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for the per-service templates.
    pub fn for_service(service: &ServiceDescriptor) -> Self {
        Self::new()
            .with_text(vars::SERVICE_NAME, service.raw_name())
            .with_text(vars::SERVICE_TITLE, service.title_cased_name())
            .with_text(vars::SERVICE_PASCAL, service.pascal_name())
            .with_text(vars::RESOURCE_SEGMENT, service.resource_segment())
    }

    /// Context for the registry templates: the service list is the only
    /// variable.
    pub fn for_registry(services: &[String]) -> Self {
        Self::new().with_list(vars::SERVICES, services.to_vec())
    }

    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables
            .insert(key.into(), ContextValue::Text(value.into()));
        self
    }

    pub fn with_list(mut self, key: impl Into<String>, items: Vec<String>) -> Self {
        self.variables.insert(key.into(), ContextValue::List(items));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.variables.get(key)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ContextValue::as_text)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.variables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// One file to be produced for a service.
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    kind: ArtifactKind,
    destination: PathBuf,
    context: RenderContext,
}

impl ArtifactSpec {
    pub fn new(kind: ArtifactKind, destination: impl Into<PathBuf>, context: RenderContext) -> Self {
        Self {
            kind,
            destination: destination.into(),
            context,
        }
    }

    /// Resolve destination and context for `kind` of `service`.
    pub fn for_service(
        layout: &ServiceLayout,
        service: &ServiceDescriptor,
        kind: ArtifactKind,
    ) -> Self {
        Self::new(
            kind,
            layout.path_for(kind, service.raw_name()),
            RenderContext::for_service(service),
        )
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn template_id(&self) -> &'static str {
        self.kind.template_id()
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }
}
