//! Artifact Generator - writes the four per-service files.

use tracing::{debug, instrument, warn};

use crate::{
    application::{
        ports::{Filesystem, TemplateRenderer},
        report::{ArtifactFailure, GenerationOutcome},
    },
    domain::{ArtifactKind, ArtifactSpec, ServiceDescriptor, ServiceLayout},
    error::SvcgenResult,
};

/// Renders and writes every [`ArtifactKind`] of one service.
pub struct ArtifactGenerator<'a> {
    filesystem: &'a dyn Filesystem,
    renderer: &'a dyn TemplateRenderer,
    layout: &'a ServiceLayout,
}

impl<'a> ArtifactGenerator<'a> {
    pub fn new(
        filesystem: &'a dyn Filesystem,
        renderer: &'a dyn TemplateRenderer,
        layout: &'a ServiceLayout,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            layout,
        }
    }

    /// Generate all artifacts of `raw_name`, stopping at the first failure.
    ///
    /// Only an invalid name is returned as `Err`. Artifact failures are
    /// recorded in the outcome together with the paths already written so
    /// the caller can decide about rollback.
    #[instrument(skip(self), fields(base = %self.layout.base().display()))]
    pub fn generate(&self, raw_name: &str) -> SvcgenResult<GenerationOutcome> {
        let service = ServiceDescriptor::new(raw_name)?;
        let mut succeeded = Vec::with_capacity(ArtifactKind::ALL.len());

        for kind in ArtifactKind::ALL {
            let spec = ArtifactSpec::for_service(self.layout, &service, kind);

            if let Err(error) = self.write_artifact(&spec) {
                warn!(
                    kind = %kind,
                    path = %spec.destination().display(),
                    error = %error,
                    "Artifact generation failed"
                );
                return Ok(GenerationOutcome {
                    service,
                    succeeded,
                    failure: Some(ArtifactFailure {
                        kind,
                        path: spec.destination().to_path_buf(),
                        error,
                    }),
                });
            }

            debug!(kind = %kind, path = %spec.destination().display(), "Artifact written");
            succeeded.push(spec.destination().to_path_buf());
        }

        Ok(GenerationOutcome {
            service,
            succeeded,
            failure: None,
        })
    }

    // Render first so a template error never leaves an empty directory behind.
    fn write_artifact(&self, spec: &ArtifactSpec) -> SvcgenResult<()> {
        let content = self.renderer.render(spec.template_id(), spec.context())?;

        if let Some(parent) = spec.destination().parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        self.filesystem.write_file(spec.destination(), &content)
    }
}
