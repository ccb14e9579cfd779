//! Rollback Manager - removes everything generated for one service.

use std::path::PathBuf;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem, report::RollbackReport},
    domain::{ArtifactKind, DomainValidator, ServiceLayout},
};

/// Best-effort deletion of a service's directories and interface files.
pub struct RollbackManager<'a> {
    filesystem: &'a dyn Filesystem,
    layout: &'a ServiceLayout,
}

enum Target {
    Dir(PathBuf),
    File(PathBuf),
}

impl<'a> RollbackManager<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, layout: &'a ServiceLayout) -> Self {
        Self { filesystem, layout }
    }

    /// Remove `api/<name>`, `services/<name>` and both interface files.
    ///
    /// Idempotent: paths that do not exist are skipped. Failures are logged
    /// and collected, never returned as an error.
    #[instrument(skip(self))]
    pub fn rollback(&self, raw_name: &str) -> RollbackReport {
        let mut report = RollbackReport::new(raw_name);

        // An unsafe name could point the directory removals outside the layout.
        if let Err(e) = DomainValidator::validate_service_name(raw_name) {
            warn!(error = %e, "Refusing to roll back invalid service name");
            report.failures.push(ApplicationError::RollbackFailed {
                path: self.layout.base().to_path_buf(),
                reason: e.to_string(),
            });
            return report;
        }

        for target in self.targets(raw_name) {
            let (path, result) = match target {
                Target::Dir(path) => {
                    if !self.filesystem.exists(&path) {
                        continue;
                    }
                    let result = self.filesystem.remove_dir_all(&path);
                    (path, result)
                }
                Target::File(path) => {
                    if !self.filesystem.exists(&path) {
                        continue;
                    }
                    let result = self.filesystem.remove_file(&path);
                    (path, result)
                }
            };

            match result {
                Ok(()) => {
                    debug!(path = %path.display(), "Removed");
                    report.removed.push(path);
                }
                Err(e) => {
                    warn!(error = %e, path = %path.display(), "Rollback failed");
                    report.failures.push(ApplicationError::RollbackFailed {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if report.is_complete() {
            info!(removed = report.removed.len(), "Rollback successful");
        }
        report
    }

    fn targets(&self, name: &str) -> [Target; 4] {
        [
            Target::Dir(self.layout.api_dir(name)),
            Target::Dir(self.layout.service_dir(name)),
            Target::File(self.layout.path_for(ArtifactKind::ApiInterface, name)),
            Target::File(self.layout.path_for(ArtifactKind::ServiceInterface, name)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use std::path::Path;

    #[test]
    fn removes_existing_paths_only() {
        let layout = ServiceLayout::new("/base");
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/base/api/users") || p.ends_with("protos/api/users.proto"));
        fs.expect_remove_dir_all()
            .times(1)
            .withf(|p| p == Path::new("/base/api/users"))
            .returning(|_| Ok(()));
        fs.expect_remove_file()
            .times(1)
            .withf(|p| p == Path::new("/base/protos/api/users.proto"))
            .returning(|_| Ok(()));

        let report = RollbackManager::new(&fs, &layout).rollback("users");

        assert!(report.is_complete());
        assert_eq!(report.removed.len(), 2);
    }

    #[test]
    fn nothing_to_remove_is_a_complete_rollback() {
        let layout = ServiceLayout::new("/base");
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(4).return_const(false);

        let report = RollbackManager::new(&fs, &layout).rollback("users");

        assert!(report.is_complete());
        assert!(report.removed.is_empty());
    }

    #[test]
    fn failures_are_collected_and_remaining_paths_still_attempted() {
        let layout = ServiceLayout::new("/base");
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_remove_dir_all().times(2).returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "busy".into(),
            }
            .into())
        });
        fs.expect_remove_file().times(2).returning(|_| Ok(()));

        let report = RollbackManager::new(&fs, &layout).rollback("users");

        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.removed.len(), 2);
        assert!(!report.is_complete());
    }

    #[test]
    fn invalid_name_touches_nothing() {
        let layout = ServiceLayout::new("/base");
        let fs = MockFilesystem::new();

        let report = RollbackManager::new(&fs, &layout).rollback("../..");

        assert_eq!(report.failures.len(), 1);
        assert!(report.removed.is_empty());
    }
}
