pub mod artifact;
pub mod registry;
pub mod service;

pub use crate::domain::DomainError;
pub use artifact::{ArtifactSpec, ContextValue, RenderContext};
pub use registry::EndpointRegistry;
pub use service::ServiceDescriptor;
