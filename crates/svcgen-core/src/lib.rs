//! svcgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the svcgen
//! service scaffolding generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           svcgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (GenerationPipeline and its stages)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: Filesystem, Render, Script)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    svcgen-adapters (Infrastructure)     │
//! │ (LocalFilesystem, renderers, runners)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ServiceLayout, ServiceDescriptor, ...) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use svcgen_core::{
//!     application::{GenerationPipeline, PipelineSettings},
//!     domain::ServiceLayout,
//! };
//!
//! // 1. Describe where things live
//! let settings = PipelineSettings::new(ServiceLayout::new("."));
//!
//! // 2. Use the pipeline (with injected adapters)
//! let pipeline = GenerationPipeline::new(filesystem, renderer, runner, settings);
//! pipeline.run(&["users", "orders"]).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationPipeline, PipelineReport, PipelineSettings, RemovalReport,
        ports::{Filesystem, ScriptRunner, TemplateRenderer},
    };
    pub use crate::domain::{
        ArtifactKind, ArtifactPaths, EndpointRegistry, RegistryFiles, RegistryKind,
        RenderContext, ScriptStatus, ServiceDescriptor, ServiceLayout,
    };
    pub use crate::error::{ErrorCategory, SvcgenError, SvcgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
