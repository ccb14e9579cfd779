//! Reads the registry files back into [`EndpointRegistry`] values.

use tracing::instrument;

use crate::{
    application::ports::Filesystem,
    domain::{EndpointRegistry, RegistryFiles, RegistryKind},
    error::SvcgenResult,
};

pub struct RegistryReader<'a> {
    filesystem: &'a dyn Filesystem,
    files: &'a RegistryFiles,
}

impl<'a> RegistryReader<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, files: &'a RegistryFiles) -> Self {
        Self { filesystem, files }
    }

    #[instrument(skip(self))]
    pub fn read(&self, kind: RegistryKind) -> SvcgenResult<EndpointRegistry> {
        let content = self.filesystem.read_file(&self.files.path(kind))?;
        Ok(EndpointRegistry::parse(kind, &content))
    }

    /// Both registries, HTTP first.
    pub fn read_all(&self) -> SvcgenResult<Vec<EndpointRegistry>> {
        RegistryKind::ALL
            .into_iter()
            .map(|kind| self.read(kind))
            .collect()
    }
}
