use serde::Serialize;

use crate::domain::value_objects::RegistryKind;

/// The services a registry file declares, as an immutable value.
///
/// A server bootstrap builds one of these per registry file at startup and
/// receives it explicitly; nothing mutates it after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointRegistry {
    kind: RegistryKind,
    entries: Vec<String>,
}

impl EndpointRegistry {
    /// Build from a known entry list. Duplicates are dropped, first one wins.
    pub fn new(kind: RegistryKind, entries: impl IntoIterator<Item = String>) -> Self {
        let mut unique: Vec<String> = Vec::new();
        for entry in entries {
            if !unique.contains(&entry) {
                unique.push(entry);
            }
        }
        Self {
            kind,
            entries: unique,
        }
    }

    /// Extract declared entries from a rendered registry file.
    ///
    /// An entry is a line of the form `<service>.<RegisterFn>` with an
    /// optional trailing comma, where `<RegisterFn>` is the kind's register
    /// function. Line comments are ignored.
    pub fn parse(kind: RegistryKind, content: &str) -> Self {
        let entries = content.lines().filter_map(|line| {
            let line = line.trim();
            if line.starts_with("//") {
                return None;
            }
            let (service, function) = line.trim_end_matches(',').trim_end().split_once('.')?;
            let valid_service = !service.is_empty()
                && service
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
            (valid_service && function == kind.register_function()).then(|| service.to_string())
        });
        Self::new(kind, entries)
    }

    pub fn kind(&self) -> RegistryKind {
        self.kind
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, service: &str) -> bool {
        self.entries.iter().any(|e| e == service)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Services present in `known` but not declared here.
    pub fn missing<'a>(&self, known: &'a [String]) -> Vec<&'a str> {
        known
            .iter()
            .filter(|s| !self.contains(s))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTTP_FILE: &str = r#"package server

var registeredHTTPEndpoints = []registerHTTPEndpoint{
	users.RegisterHTTPEndpoint,
	// legacy.RegisterHTTPEndpoint,
	orders.RegisterHTTPEndpoint,
	orders.RegisterGRPCEndpoint,
}
"#;

    #[test]
    fn parses_declared_entries() {
        let registry = EndpointRegistry::parse(RegistryKind::Http, HTTP_FILE);
        assert_eq!(registry.entries(), ["users", "orders"]);
        assert!(!registry.contains("legacy"));
    }

    #[test]
    fn ignores_other_kinds_register_function() {
        let registry = EndpointRegistry::parse(RegistryKind::Rpc, HTTP_FILE);
        assert_eq!(registry.entries(), ["orders"]);
    }

    #[test]
    fn empty_file_gives_empty_registry() {
        assert!(EndpointRegistry::parse(RegistryKind::Http, "").is_empty());
    }

    #[test]
    fn duplicates_are_collapsed() {
        let registry = EndpointRegistry::new(
            RegistryKind::Rpc,
            ["a".to_string(), "b".to_string(), "a".to_string()],
        );
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reports_missing_services() {
        let registry = EndpointRegistry::parse(RegistryKind::Http, HTTP_FILE);
        let known = vec!["users".to_string(), "billing".to_string()];
        assert_eq!(registry.missing(&known), vec!["billing"]);
    }
}
