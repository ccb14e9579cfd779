//! Renderer over an in-memory template set.

use std::collections::BTreeMap;

use svcgen_core::{
    application::ports::TemplateRenderer, domain::RenderContext, error::SvcgenResult,
};
use tracing::instrument;

use super::{render_source, rendering_failed};
use crate::builtin_templates;

/// Template sources keyed by id.
///
/// Used for the built-in defaults and by tests that need a template set
/// with entries missing or broken on purpose.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    templates: BTreeMap<String, String>,
}

impl InMemoryTemplates {
    /// Create an empty template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The six templates shipped with svcgen.
    pub fn builtin() -> Self {
        builtin_templates::all()
            .into_iter()
            .fold(Self::new(), |set, (id, source)| set.with_template(id, source))
    }

    pub fn with_template(mut self, id: impl Into<String>, source: impl Into<String>) -> Self {
        self.templates.insert(id.into(), source.into());
        self
    }

    pub fn without_template(mut self, id: &str) -> Self {
        self.templates.remove(id);
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.templates.get(id).map(String::as_str)
    }
}

impl TemplateRenderer for InMemoryTemplates {
    #[instrument(skip(self, context))]
    fn render(&self, template_id: &str, context: &RenderContext) -> SvcgenResult<String> {
        let source = self
            .get(template_id)
            .ok_or_else(|| rendering_failed(template_id, "Template not found".into()))?;
        render_source(template_id, source, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svcgen_core::domain::{
        ArtifactKind, EndpointRegistry, RegistryKind, ServiceDescriptor,
    };

    fn services() -> Vec<String> {
        vec!["orders".into(), "users".into()]
    }

    #[test]
    fn builtin_service_templates_render_for_every_kind() {
        let templates = InMemoryTemplates::builtin();
        let ctx = RenderContext::for_service(&ServiceDescriptor::new("userAccount").unwrap());

        for kind in ArtifactKind::ALL {
            let out = templates.render(kind.template_id(), &ctx).unwrap();
            assert!(out.contains("userAccount"), "{kind}");
            assert!(out.ends_with('\n'), "{kind}");
        }
    }

    #[test]
    fn api_proto_uses_resource_segment() {
        let templates = InMemoryTemplates::builtin();
        let ctx = RenderContext::for_service(&ServiceDescriptor::new("userAccount").unwrap());

        let out = templates.render("api_proto", &ctx).unwrap();

        assert!(out.contains("get: \"/v1/user\""));
        assert!(out.contains("service UserAccountAPI"));
    }

    #[test]
    fn builtin_registries_round_trip_through_parser() {
        let templates = InMemoryTemplates::builtin();
        let ctx = RenderContext::for_registry(&services());

        for kind in RegistryKind::ALL {
            let out = templates.render(kind.template_id(), &ctx).unwrap();
            let parsed = EndpointRegistry::parse(kind, &out);
            assert_eq!(parsed.entries(), services().as_slice(), "{kind}");
        }
    }

    #[test]
    fn empty_registry_renders_empty_list() {
        let templates = InMemoryTemplates::builtin();
        let out = templates
            .render("http_registry", &RenderContext::for_registry(&[]))
            .unwrap();

        assert!(out.ends_with("[]registerHTTPEndpoint{\n}\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let templates = InMemoryTemplates::builtin();
        let ctx = RenderContext::for_registry(&services());

        assert_eq!(
            templates.render("rpc_registry", &ctx).unwrap(),
            templates.render("rpc_registry", &ctx).unwrap()
        );
    }

    #[test]
    fn missing_template_is_rendering_error() {
        let templates = InMemoryTemplates::builtin().without_template("api_proto");
        let ctx = RenderContext::for_service(&ServiceDescriptor::new("users").unwrap());

        assert!(templates.render("api_proto", &ctx).is_err());
        assert!(templates.render("api_stub", &ctx).is_ok());
    }

    #[test]
    fn registry_template_rejects_service_context() {
        let templates = InMemoryTemplates::builtin();
        let ctx = RenderContext::for_service(&ServiceDescriptor::new("users").unwrap());

        assert!(templates.render("http_registry", &ctx).is_err());
    }
}
