//! Renderer reading templates from a directory on disk.

use std::path::{Path, PathBuf};

use svcgen_core::{
    application::ports::TemplateRenderer, domain::RenderContext, error::SvcgenResult,
};
use tracing::{debug, instrument};

use super::{render_source, rendering_failed};
use crate::builtin_templates;

/// Loads `<root>/<template_id>.tmpl` on every render.
///
/// Nothing is cached, so edits to the template root are picked up by the
/// next run without restarting anything.
#[derive(Debug, Clone)]
pub struct FileTemplateRenderer {
    root: PathBuf,
}

impl FileTemplateRenderer {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `template_id` is expected to live.
    pub fn template_path(&self, template_id: &str) -> PathBuf {
        self.root.join(builtin_templates::file_name(template_id))
    }
}

impl TemplateRenderer for FileTemplateRenderer {
    #[instrument(skip(self, context), fields(root = %self.root.display()))]
    fn render(&self, template_id: &str, context: &RenderContext) -> SvcgenResult<String> {
        let path = self.template_path(template_id);
        let source = std::fs::read_to_string(&path).map_err(|e| {
            rendering_failed(
                template_id,
                format!("Failed to read {}: {}", path.display(), e),
            )
        })?;

        debug!(path = %path.display(), "Template loaded");
        render_source(template_id, &source, context)
    }
}
