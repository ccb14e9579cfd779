//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use svcgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SvcgenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle while the pipeline
/// owns another.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    writes: usize,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// A file's content, if present (testing helper).
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.read().ok()?.files.get(path).cloned()
    }

    /// All files, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }

    /// Number of `write_file` and `create_dir_all` calls so far.
    pub fn write_count(&self) -> usize {
        self.read().map(|inner| inner.writes).unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut inner) = self.write() {
            inner.files.clear();
            inner.directories.clear();
            inner.writes = 0;
        }
    }

    fn read(&self) -> SvcgenResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write(&self) -> SvcgenResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> svcgen_core::error::SvcgenError {
    ApplicationError::LockPoisoned {
        resource: "memory filesystem",
    }
    .into()
}

fn not_found(path: &Path, what: &str) -> svcgen_core::error::SvcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("{} does not exist", what),
    }
    .into()
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        let mut inner = self.write()?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "A file exists where a directory is needed".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        inner.writes += 1;
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()> {
        let mut inner = self.write()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }
        if inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Is a directory".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.writes += 1;
        Ok(())
    }

    fn read_file(&self, path: &Path) -> SvcgenResult<String> {
        self.read()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path, "File"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        let mut inner = self.write()?;
        if !inner.directories.contains(path) {
            return Err(not_found(path, "Directory"));
        }

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> SvcgenResult<()> {
        self.write()?
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path, "File"))
    }

    fn list_files(&self, dir: &Path) -> SvcgenResult<Vec<PathBuf>> {
        let inner = self.read()?;
        if !inner.directories.contains(dir) {
            return Err(not_found(dir, "Directory"));
        }

        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect())
    }
}
