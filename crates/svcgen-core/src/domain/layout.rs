//! Path resolution for generated artifacts and registry files.
//!
//! ```text
//! <base>/api/<name>/<name>.<ext>
//! <base>/services/<name>/<name>.<ext>
//! <base>/protos/api/<name>.<ext2>
//! <base>/protos/services/<name>.<ext2>
//! ```
//!
//! Everything here is a pure function of its inputs.

use std::path::{Path, PathBuf};

use crate::domain::{
    entities::service::ServiceDescriptor,
    error::DomainError,
    value_objects::{ArtifactKind, RegistryKind},
};

pub const DEFAULT_SOURCE_EXTENSION: &str = "go";
pub const DEFAULT_INTERFACE_EXTENSION: &str = "proto";

/// Directory convention for per-service artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceLayout {
    base: PathBuf,
    source_extension: String,
    interface_extension: String,
}

impl ServiceLayout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            source_extension: DEFAULT_SOURCE_EXTENSION.into(),
            interface_extension: DEFAULT_INTERFACE_EXTENSION.into(),
        }
    }

    pub fn with_source_extension(mut self, ext: impl Into<String>) -> Self {
        self.source_extension = trim_dot(ext.into());
        self
    }

    pub fn with_interface_extension(mut self, ext: impl Into<String>) -> Self {
        self.interface_extension = trim_dot(ext.into());
        self
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn source_extension(&self) -> &str {
        &self.source_extension
    }

    pub fn interface_extension(&self) -> &str {
        &self.interface_extension
    }

    /// `<base>/api/<name>`
    pub fn api_dir(&self, name: &str) -> PathBuf {
        self.base.join("api").join(name)
    }

    /// `<base>/services/<name>`
    pub fn service_dir(&self, name: &str) -> PathBuf {
        self.base.join("services").join(name)
    }

    /// `<base>/protos/api`
    pub fn api_interface_dir(&self) -> PathBuf {
        self.base.join("protos").join("api")
    }

    /// `<base>/protos/services`
    pub fn service_interface_dir(&self) -> PathBuf {
        self.base.join("protos").join("services")
    }

    /// Destination of one artifact. Does not validate `name`.
    pub fn path_for(&self, kind: ArtifactKind, name: &str) -> PathBuf {
        match kind {
            ArtifactKind::ApiStub => self
                .api_dir(name)
                .join(format!("{name}.{}", self.source_extension)),
            ArtifactKind::ServiceStub => self
                .service_dir(name)
                .join(format!("{name}.{}", self.source_extension)),
            ArtifactKind::ApiInterface => self
                .api_interface_dir()
                .join(format!("{name}.{}", self.interface_extension)),
            ArtifactKind::ServiceInterface => self
                .service_interface_dir()
                .join(format!("{name}.{}", self.interface_extension)),
        }
    }

    /// All four destinations plus the naming variants for `raw_name`.
    pub fn resolve(&self, raw_name: &str) -> Result<ArtifactPaths, DomainError> {
        let service = ServiceDescriptor::new(raw_name)?;
        let paths = ArtifactKind::ALL.map(|kind| self.path_for(kind, service.raw_name()));
        Ok(ArtifactPaths { service, paths })
    }
}

fn trim_dot(ext: String) -> String {
    ext.trim_start_matches('.').to_string()
}

/// Resolved destinations of one service, indexed by [`ArtifactKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    service: ServiceDescriptor,
    paths: [PathBuf; 4],
}

impl ArtifactPaths {
    pub fn service(&self) -> &ServiceDescriptor {
        &self.service
    }

    pub fn get(&self, kind: ArtifactKind) -> &Path {
        let index = ArtifactKind::ALL
            .iter()
            .position(|k| *k == kind)
            .unwrap_or_default();
        &self.paths[index]
    }

    /// `(kind, path)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (ArtifactKind, &Path)> {
        ArtifactKind::ALL
            .into_iter()
            .zip(self.paths.iter().map(PathBuf::as_path))
    }
}

/// Location of the two aggregator registry files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryFiles {
    dir: PathBuf,
    http_file: String,
    rpc_file: String,
}

impl RegistryFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            http_file: RegistryKind::Http.default_file_name().into(),
            rpc_file: RegistryKind::Rpc.default_file_name().into(),
        }
    }

    pub fn with_file_name(mut self, kind: RegistryKind, name: impl Into<String>) -> Self {
        match kind {
            RegistryKind::Http => self.http_file = name.into(),
            RegistryKind::Rpc => self.rpc_file = name.into(),
        }
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, kind: RegistryKind) -> PathBuf {
        match kind {
            RegistryKind::Http => self.dir.join(&self.http_file),
            RegistryKind::Rpc => self.dir.join(&self.rpc_file),
        }
    }
}
