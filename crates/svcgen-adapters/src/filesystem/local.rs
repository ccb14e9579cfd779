//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use svcgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SvcgenError, SvcgenResult},
};
use walkdir::WalkDir;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SvcgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn read_file(&self, path: &Path) -> SvcgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> SvcgenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn remove_file(&self, path: &Path) -> SvcgenResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn list_files(&self, dir: &Path) -> SvcgenResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                let reason = format!("Failed to list directory: {}", e);
                SvcgenError::from(ApplicationError::FilesystemError { path, reason })
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SvcgenError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn list_files_returns_direct_regular_files_only() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        fs.write_file(&dir.path().join("a.proto"), "").unwrap();
        fs.write_file(&dir.path().join("b.txt"), "").unwrap();
        fs.create_dir_all(&dir.path().join("nested.proto")).unwrap();
        fs.write_file(&dir.path().join("nested.proto").join("c.proto"), "")
            .unwrap();

        let mut files = fs.list_files(dir.path()).unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![dir.path().join("a.proto"), dir.path().join("b.txt")]
        );
    }

    #[test]
    fn list_files_on_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();

        assert!(fs.list_files(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn write_then_read_and_remove() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("registry.go");

        fs.write_file(&path, "first").unwrap();
        fs.write_file(&path, "second").unwrap();
        assert_eq!(fs.read_file(&path).unwrap(), "second");

        fs.remove_file(&path).unwrap();
        assert!(!fs.exists(&path));
    }

    #[test]
    fn errors_carry_the_path() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("absent.go");

        let err = fs.read_file(&path).unwrap_err();
        assert!(err.to_string().contains("absent.go"));
    }
}
