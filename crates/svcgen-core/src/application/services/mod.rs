//! Application services - use case orchestration.
//!
//! Services coordinate domain objects and ports to fulfill use cases.
//! They contain no business logic; that lives in the domain.

mod artifact_generator;
mod pipeline;
mod registry_reader;
mod registry_scanner;
mod registry_updater;
mod rollback;
mod script_invoker;

pub use artifact_generator::ArtifactGenerator;
pub use pipeline::{GenerationPipeline, PipelineSettings};
pub use registry_reader::RegistryReader;
pub use registry_scanner::RegistryScanner;
pub use registry_updater::RegistryUpdater;
pub use rollback::RollbackManager;
pub use script_invoker::ExternalToolInvoker;
