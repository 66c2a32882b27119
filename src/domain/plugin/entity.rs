//! Plugin descriptors

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// The capability a plugin contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    /// Request/response policies applied by gateways
    Policy,
    /// Shared resources (cache, auth servers) referenced by policies
    Resource,
    /// Channels used to deliver notifications
    Notifier,
}

impl std::fmt::Display for PluginKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Policy => write!(f, "policy"),
            Self::Resource => write!(f, "resource"),
            Self::Notifier => write!(f, "notifier"),
        }
    }
}

/// Descriptor of an installed plugin
///
/// The console only lists and looks up descriptors; loading and running
/// plugin code happens elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Unique identifier
    id: String,
    /// Contributed capability
    kind: PluginKind,
    /// Display name
    name: String,
    /// Version string
    version: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl PluginDescriptor {
    /// Create a new plugin descriptor
    pub fn new(
        id: impl Into<String>,
        kind: PluginKind,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("Plugin ID cannot be empty"));
        }

        Ok(Self {
            id,
            kind,
            name: name.into(),
            version: version.into(),
            description: None,
        })
    }

    /// Set description (builder pattern)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> PluginKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
