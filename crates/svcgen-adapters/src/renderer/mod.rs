//! Template renderers backed by minijinja.
//!
//! Both adapters share one rendering routine: strict undefined handling, so
//! a variable missing from the context is an error instead of an empty
//! string, and the template's trailing newline is kept.

mod file;
mod memory;

pub use file::FileTemplateRenderer;
pub use memory::InMemoryTemplates;

use minijinja::{Environment, UndefinedBehavior};
use svcgen_core::{
    application::ApplicationError,
    domain::RenderContext,
    error::{SvcgenError, SvcgenResult},
};

pub(crate) fn render_source(
    template_id: &str,
    source: &str,
    context: &RenderContext,
) -> SvcgenResult<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);

    env.add_template(template_id, source)
        .map_err(|e| rendering_failed(template_id, format!("Failed to parse: {}", e)))?;

    env.get_template(template_id)
        .map_err(|e| rendering_failed(template_id, format!("Failed to load: {}", e)))?
        .render(context)
        .map_err(|e| rendering_failed(template_id, format!("Failed to render: {}", e)))
}

pub(crate) fn rendering_failed(template_id: &str, reason: String) -> SvcgenError {
    ApplicationError::RenderingFailed {
        template: template_id.to_string(),
        reason,
    }
    .into()
}
