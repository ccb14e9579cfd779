// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for svcgen.
//!
//! This module contains pure business logic with ZERO I/O.
//! Filesystem, templating and process concerns are handled via ports
//! (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod layout;
pub mod naming;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    artifact::{ArtifactSpec, ContextValue, RenderContext, vars},
    registry::EndpointRegistry,
    service::ServiceDescriptor,
};

pub use error::{DomainError, ErrorCategory};

pub use layout::{ArtifactPaths, RegistryFiles, ServiceLayout};

pub use value_objects::{ArtifactKind, PipelineStage, RegistryKind, ScriptStatus};

pub use validation::DomainValidator;
