//! Environment entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    EnvironmentValidationError, validate_environment_id, validate_environment_name,
};
use crate::domain::organization::OrganizationId;

/// Environment identifier - lowercase alphanumeric + hyphens, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnvironmentId(String);

impl EnvironmentId {
    /// The ID of the built-in default environment
    pub const DEFAULT: &'static str = "default";

    /// Create a new EnvironmentId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, EnvironmentValidationError> {
        let id = id.into();
        validate_environment_id(&id)?;
        Ok(Self(id))
    }

    /// Create the default environment ID
    pub fn default_environment() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EnvironmentId {
    type Error = EnvironmentValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EnvironmentId> for String {
    fn from(id: EnvironmentId) -> Self {
        id.0
    }
}

impl std::fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Environment entity
///
/// An environment belongs to an organization and scopes APIs, tenants and
/// console parameter overrides. Its `domain_restrictions` limit the hosts
/// an API virtual host may declare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// Unique identifier
    id: EnvironmentId,
    /// Owning organization
    organization_id: OrganizationId,
    /// Display name
    name: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Allowed host domains for API virtual hosts; empty means unrestricted
    #[serde(default)]
    domain_restrictions: Vec<String>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Environment {
    /// Create a new environment
    pub fn new(
        id: EnvironmentId,
        organization_id: OrganizationId,
        name: impl Into<String>,
    ) -> Result<Self, EnvironmentValidationError> {
        let name = name.into();
        validate_environment_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id,
            organization_id,
            name,
            description: None,
            domain_restrictions: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Create the built-in default environment of an organization
    pub fn default_environment(organization_id: OrganizationId) -> Self {
        let now = Utc::now();

        Self {
            id: EnvironmentId::default_environment(),
            organization_id,
            name: "Default environment".to_string(),
            description: Some("Built-in default environment".to_string()),
            domain_restrictions: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set description (builder pattern)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set domain restrictions (builder pattern)
    pub fn with_domain_restrictions(mut self, restrictions: Vec<String>) -> Self {
        self.domain_restrictions = restrictions;
        self
    }

    // Getters

    pub fn id(&self) -> &EnvironmentId {
        &self.id
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn domain_restrictions(&self) -> &[String] {
        &self.domain_restrictions
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), EnvironmentValidationError> {
        let name = name.into();
        validate_environment_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Update the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    /// Replace the domain restrictions
    pub fn set_domain_restrictions(&mut self, restrictions: Vec<String>) {
        self.domain_restrictions = restrictions;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organization() -> OrganizationId {
        OrganizationId::default_organization()
    }

    #[test]
    fn test_environment_id_valid() {
        let id = EnvironmentId::new("prod-eu").unwrap();
        assert_eq!(id.as_str(), "prod-eu");
    }

    #[test]
    fn test_environment_id_invalid() {
        assert!(EnvironmentId::new("").is_err());
        assert!(EnvironmentId::new("Prod").is_err());
        assert!(EnvironmentId::new("-prod").is_err());
    }

    #[test]
    fn test_environment_creation() {
        let id = EnvironmentId::new("prod").unwrap();
        let environment = Environment::new(id, organization(), "Production").unwrap();

        assert_eq!(environment.name(), "Production");
        assert_eq!(environment.organization_id().as_str(), "default");
        assert!(environment.domain_restrictions().is_empty());
    }

    #[test]
    fn test_environment_with_domain_restrictions() {
        let id = EnvironmentId::new("prod").unwrap();
        let environment = Environment::new(id, organization(), "Production")
            .unwrap()
            .with_domain_restrictions(vec!["company.com".to_string()]);

        assert_eq!(environment.domain_restrictions(), ["company.com"]);
    }

    #[test]
    fn test_environment_default() {
        let environment = Environment::default_environment(organization());
        assert_eq!(environment.id().as_str(), EnvironmentId::DEFAULT);
        assert!(environment.description().is_some());
    }

    #[test]
    fn test_environment_invalid_name() {
        let id = EnvironmentId::new("prod").unwrap();
        assert!(Environment::new(id, organization(), "").is_err());
    }

    #[test]
    fn test_environment_set_domain_restrictions() {
        let id = EnvironmentId::new("prod").unwrap();
        let mut environment = Environment::new(id, organization(), "Production").unwrap();

        environment.set_domain_restrictions(vec!["a.com".to_string(), "b.com".to_string()]);
        assert_eq!(environment.domain_restrictions().len(), 2);
    }
}
