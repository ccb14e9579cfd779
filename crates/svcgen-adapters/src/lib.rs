//! Infrastructure adapters for svcgen.
//!
//! This crate implements the ports defined in `svcgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod script;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{FileTemplateRenderer, InMemoryTemplates};
pub use script::{ShellScriptRunner, StaticScriptRunner};
