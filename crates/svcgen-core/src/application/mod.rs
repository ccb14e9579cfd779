//! Application layer for svcgen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationPipeline and its stages)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod report;
pub mod services;

// Re-export main services
pub use services::{
    ArtifactGenerator, ExternalToolInvoker, GenerationPipeline, PipelineSettings,
    RegistryReader, RegistryScanner, RegistryUpdater, RollbackManager,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ScriptRunner, TemplateRenderer};

pub use report::{
    ArtifactFailure, GenerationOutcome, PipelineReport, RemovalReport, RollbackReport,
};

pub use error::ApplicationError;
