//! Registry Updater - rebuilds the aggregator registry files.

use std::path::PathBuf;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{RegistryFiles, RegistryKind, RenderContext},
    error::SvcgenResult,
};

/// Re-renders both registry files from a full service list.
pub struct RegistryUpdater<'a> {
    filesystem: &'a dyn Filesystem,
    renderer: &'a dyn TemplateRenderer,
    files: &'a RegistryFiles,
}

impl<'a> RegistryUpdater<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        renderer: &'a dyn TemplateRenderer,
        files: &'a RegistryFiles,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            files,
        }
    }

    /// Overwrite the HTTP then the RPC registry with `services`.
    ///
    /// Both files must already exist and both templates must render before
    /// either file is written, so the two registries never disagree after a
    /// check or template failure.
    #[instrument(skip_all, fields(services = services.len()))]
    pub fn update(&self, services: &[String]) -> SvcgenResult<Vec<PathBuf>> {
        let context = RenderContext::for_registry(services);

        for kind in RegistryKind::ALL {
            let path = self.files.path(kind);
            if !self.filesystem.exists(&path) {
                return Err(ApplicationError::FilesystemError {
                    path,
                    reason: format!("{kind} registry file does not exist"),
                }
                .into());
            }
        }

        let rendered = RegistryKind::ALL
            .into_iter()
            .map(|kind| -> SvcgenResult<_> {
                Ok((kind, self.renderer.render(kind.template_id(), &context)?))
            })
            .collect::<SvcgenResult<Vec<_>>>()?;

        let written = rendered
            .into_iter()
            .map(|(kind, content)| self.write(kind, self.files.path(kind), &content))
            .collect::<SvcgenResult<Vec<_>>>()?;

        info!("Registries rebuilt");
        Ok(written)
    }

    /// Create the registry directory and any missing registry file.
    ///
    /// Existing files are kept unless `overwrite` is set.
    #[instrument(skip_all, fields(dir = %self.files.dir().display(), overwrite))]
    pub fn initialize(&self, services: &[String], overwrite: bool) -> SvcgenResult<Vec<PathBuf>> {
        self.filesystem.create_dir_all(self.files.dir())?;
        let context = RenderContext::for_registry(services);

        let mut written = Vec::new();
        for kind in RegistryKind::ALL {
            let path = self.files.path(kind);
            if self.filesystem.exists(&path) && !overwrite {
                debug!(path = %path.display(), "Registry exists, keeping it");
                continue;
            }
            let content = self.renderer.render(kind.template_id(), &context)?;
            written.push(self.write(kind, path, &content)?);
        }
        Ok(written)
    }

    fn write(&self, kind: RegistryKind, path: PathBuf, content: &str) -> SvcgenResult<PathBuf> {
        self.filesystem.write_file(&path, content)?;
        debug!(kind = %kind, path = %path.display(), "Registry written");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateRenderer};
    use crate::domain::vars;
    use std::path::Path;

    fn services() -> Vec<String> {
        vec!["billing".into(), "users".into()]
    }

    #[test]
    fn rewrites_http_then_rpc_with_full_list() {
        let files = RegistryFiles::new("/srv");
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().times(2).returning(|id, ctx| {
            let list = ctx.get(vars::SERVICES).and_then(|v| v.as_list()).unwrap();
            assert_eq!(ctx.len(), 1);
            Ok(format!("{id}:{}", list.join(",")))
        });
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().times(2).returning(|_, content| {
            assert!(content.ends_with(":billing,users"));
            Ok(())
        });

        let written = RegistryUpdater::new(&fs, &renderer, &files)
            .update(&services())
            .unwrap();

        assert_eq!(
            written,
            vec![
                Path::new("/srv/registeredHTTPEndpoints.go"),
                Path::new("/srv/registeredGRPCEndpoints.go"),
            ]
        );
    }

    #[test]
    fn missing_registry_file_fails_without_writing() {
        let files = RegistryFiles::new("/srv");
        let renderer = MockTemplateRenderer::new();
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let err = RegistryUpdater::new(&fs, &renderer, &files)
            .update(&services())
            .unwrap_err();

        assert_eq!(err.category(), crate::error::ErrorCategory::Io);
    }

    #[test]
    fn render_failure_leaves_file_untouched() {
        let files = RegistryFiles::new("/srv");
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|id, _| {
            Err(ApplicationError::RenderingFailed {
                template: id.into(),
                reason: "syntax error".into(),
            }
            .into())
        });
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();

        let err = RegistryUpdater::new(&fs, &renderer, &files)
            .update(&services())
            .unwrap_err();

        assert_eq!(err.category(), crate::error::ErrorCategory::Template);
    }

    #[test]
    fn rpc_render_failure_writes_neither_registry() {
        let files = RegistryFiles::new("/srv");
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().returning(|id, _| {
            if id == RegistryKind::Rpc.template_id() {
                Err(ApplicationError::RenderingFailed {
                    template: id.into(),
                    reason: "undefined value".into(),
                }
                .into())
            } else {
                Ok(String::from("http"))
            }
        });
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_write_file().never();

        let err = RegistryUpdater::new(&fs, &renderer, &files)
            .update(&services())
            .unwrap_err();

        assert_eq!(err.category(), crate::error::ErrorCategory::Template);
    }

    #[test]
    fn missing_rpc_file_writes_neither_registry() {
        let files = RegistryFiles::new("/srv");
        let renderer = MockTemplateRenderer::new();
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.ends_with("registeredHTTPEndpoints.go"));
        fs.expect_write_file().never();

        let err = RegistryUpdater::new(&fs, &renderer, &files)
            .update(&services())
            .unwrap_err();

        assert_eq!(err.category(), crate::error::ErrorCategory::Io);
    }

    #[test]
    fn initialize_keeps_existing_files() {
        let files = RegistryFiles::new("/srv");
        let mut renderer = MockTemplateRenderer::new();
        renderer.expect_render().times(1).returning(|_, _| Ok(String::new()));
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_exists()
            .returning(|p| p.ends_with("registeredHTTPEndpoints.go"));
        fs.expect_write_file()
            .times(1)
            .withf(|p, _| p.ends_with("registeredGRPCEndpoints.go"))
            .returning(|_, _| Ok(()));

        let written = RegistryUpdater::new(&fs, &renderer, &files)
            .initialize(&[], false)
            .unwrap();

        assert_eq!(written.len(), 1);
    }
}
