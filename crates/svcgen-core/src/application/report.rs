//! Result types handed back by the application services.

use std::path::PathBuf;

use crate::application::ApplicationError;
use crate::domain::{ArtifactKind, PipelineStage, ServiceDescriptor};
use crate::error::SvcgenError;

/// The artifact that stopped a service's generation.
#[derive(Debug, Clone)]
pub struct ArtifactFailure {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub error: SvcgenError,
}

/// What one [`ArtifactGenerator`](super::ArtifactGenerator) call produced.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub service: ServiceDescriptor,
    /// Destinations actually written, in generation order.
    pub succeeded: Vec<PathBuf>,
    pub failure: Option<ArtifactFailure>,
}

impl GenerationOutcome {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}

/// Best-effort cleanup result for one service.
#[derive(Debug, Clone, Default)]
pub struct RollbackReport {
    pub service: String,
    pub removed: Vec<PathBuf>,
    pub failures: Vec<ApplicationError>,
}

impl RollbackReport {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..Self::default()
        }
    }

    /// True when every existing path was removed.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Aggregate result of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub outcomes: Vec<GenerationOutcome>,
    /// Service set recovered by the registry scan, sorted.
    pub services: Vec<String>,
    /// Registry files rewritten, HTTP first.
    pub registries: Vec<PathBuf>,
    pub stage: PipelineStage,
}

impl PipelineReport {
    pub fn files_written(&self) -> usize {
        self.outcomes.iter().map(|o| o.succeeded.len()).sum()
    }
}

/// Result of removing services and rebuilding the registries.
#[derive(Debug, Clone)]
pub struct RemovalReport {
    pub rollbacks: Vec<RollbackReport>,
    pub services: Vec<String>,
    pub registries: Vec<PathBuf>,
}
