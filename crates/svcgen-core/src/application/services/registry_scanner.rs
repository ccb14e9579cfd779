//! Registry Scanner - recovers the known service set from disk.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    error::SvcgenResult,
};

/// Lists interface-definition files and strips their extension.
pub struct RegistryScanner<'a> {
    filesystem: &'a dyn Filesystem,
    extension: &'a str,
}

impl<'a> RegistryScanner<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, extension: &'a str) -> Self {
        Self {
            filesystem,
            extension,
        }
    }

    /// Service names found directly inside `dir`, sorted and de-duplicated.
    ///
    /// Files with another extension are ignored. A missing directory is an
    /// error, not an empty set.
    #[instrument(skip(self), fields(dir = %dir.display(), extension = %self.extension))]
    pub fn scan(&self, dir: &Path) -> SvcgenResult<Vec<String>> {
        if !self.filesystem.exists(dir) {
            return Err(ApplicationError::FilesystemError {
                path: dir.to_path_buf(),
                reason: "interface directory does not exist".into(),
            }
            .into());
        }

        let services: BTreeSet<String> = self
            .filesystem
            .list_files(dir)?
            .iter()
            .filter(|path| path.extension().and_then(OsStr::to_str) == Some(self.extension))
            .filter_map(|path| path.file_stem().and_then(OsStr::to_str))
            .map(str::to_owned)
            .collect();

        debug!(count = services.len(), "Scanned services");
        Ok(services.into_iter().collect())
    }
}
