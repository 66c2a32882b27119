//! Stored routing definition
//!
//! APIs persist their routing configuration as a serialized JSON document.
//! Only the pieces the console works with are modeled here; unknown fields
//! written by other tools are dropped on a round trip.

use serde::{Deserialize, Serialize};

use super::virtual_host::VirtualHost;

/// The routing definition persisted with each API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDefinition {
    #[serde(default)]
    pub proxy: ProxyDefinition,
}

/// Proxy section of a routing definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyDefinition {
    /// Entry points the API is reachable under
    #[serde(default)]
    pub virtual_hosts: Vec<VirtualHost>,
    /// Whether the context path is stripped before forwarding upstream
    #[serde(default)]
    pub strip_context_path: bool,
    /// Upstream endpoints
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<EndpointDefinition>,
}

/// One upstream endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDefinition {
    pub name: String,
    pub target: String,
}

impl ApiDefinition {
    /// Create a definition exposing the given virtual hosts
    pub fn with_virtual_hosts(virtual_hosts: Vec<VirtualHost>) -> Self {
        Self {
            proxy: ProxyDefinition {
                virtual_hosts,
                ..ProxyDefinition::default()
            },
        }
    }

    /// Parse a serialized routing definition
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serialize this routing definition
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The virtual hosts declared by this definition
    pub fn virtual_hosts(&self) -> &[VirtualHost] {
        &self.proxy.virtual_hosts
    }

    /// Replace the declared virtual hosts
    pub fn set_virtual_hosts(&mut self, virtual_hosts: Vec<VirtualHost>) {
        self.proxy.virtual_hosts = virtual_hosts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let definition = ApiDefinition::with_virtual_hosts(vec![
            VirtualHost::new("api.company.com", "/store/"),
            VirtualHost::path_only("/catalog/"),
        ]);

        let json = definition.to_json().unwrap();
        let parsed = ApiDefinition::from_json(&json).unwrap();

        assert_eq!(parsed, definition);
    }

    #[test]
    fn test_camel_case_field_names() {
        let raw = r#"{
            "proxy": {
                "virtualHosts": [{"host": "api.company.com", "path": "/store/"}],
                "stripContextPath": true,
                "endpoints": [{"name": "primary", "target": "http://backend:8080"}]
            }
        }"#;

        let definition = ApiDefinition::from_json(raw).unwrap();

        assert_eq!(definition.virtual_hosts().len(), 1);
        assert_eq!(definition.virtual_hosts()[0].host(), Some("api.company.com"));
        assert!(definition.proxy.strip_context_path);
        assert_eq!(definition.proxy.endpoints[0].name, "primary");
    }

    #[test]
    fn test_missing_proxy_section_defaults() {
        let definition = ApiDefinition::from_json("{}").unwrap();
        assert!(definition.virtual_hosts().is_empty());
    }

    #[test]
    fn test_malformed_definition_is_an_error() {
        assert!(ApiDefinition::from_json("not json").is_err());
        assert!(ApiDefinition::from_json(r#"{"proxy": 42}"#).is_err());
    }
}
