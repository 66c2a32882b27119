//! Organization entity and related types

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

const MAX_ORGANIZATION_ID_LENGTH: usize = 50;
const MAX_ORGANIZATION_NAME_LENGTH: usize = 100;

static ORGANIZATION_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Organization identifier - lowercase alphanumeric + hyphens, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrganizationId(String);

impl OrganizationId {
    /// The ID of the built-in default organization
    pub const DEFAULT: &'static str = "default";

    /// Create a new OrganizationId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if id.is_empty() {
            return Err(DomainError::invalid_id("Organization ID cannot be empty"));
        }

        if id.len() > MAX_ORGANIZATION_ID_LENGTH {
            return Err(DomainError::invalid_id(format!(
                "Organization ID cannot exceed {} characters",
                MAX_ORGANIZATION_ID_LENGTH
            )));
        }

        if !ORGANIZATION_ID_PATTERN.is_match(&id) {
            return Err(DomainError::invalid_id(format!(
                "Invalid organization ID '{}': must be lowercase alphanumeric with hyphens",
                id
            )));
        }

        Ok(Self(id))
    }

    /// Create the default organization ID
    pub fn default_organization() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrganizationId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrganizationId> for String {
    fn from(id: OrganizationId) -> Self {
        id.0
    }
}

impl std::fmt::Display for OrganizationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Organization entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier
    id: OrganizationId,
    /// Display name
    name: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Organization {
    /// Create a new organization
    pub fn new(id: OrganizationId, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_organization_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id,
            name,
            description: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Create the built-in default organization
    pub fn default_organization() -> Self {
        let now = Utc::now();

        Self {
            id: OrganizationId::default_organization(),
            name: "Default organization".to_string(),
            description: Some("Built-in default organization".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Set description (builder pattern)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // Getters

    pub fn id(&self) -> &OrganizationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        let name = name.into();
        validate_organization_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Update the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_organization_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::validation("Organization name cannot be empty"));
    }

    if name.len() > MAX_ORGANIZATION_NAME_LENGTH {
        return Err(DomainError::validation(format!(
            "Organization name cannot exceed {} characters",
            MAX_ORGANIZATION_NAME_LENGTH
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_organization_id_valid() {
        let id = OrganizationId::new("my-org").unwrap();
        assert_eq!(id.as_str(), "my-org");
    }

    #[test]
    fn test_organization_id_invalid() {
        assert!(OrganizationId::new("").is_err());
        assert!(OrganizationId::new("-org").is_err());
        assert!(OrganizationId::new("org-").is_err());
        assert!(OrganizationId::new("My Org").is_err());
        assert!(OrganizationId::new("a".repeat(51)).is_err());
    }

    #[test]
    fn test_organization_id_default() {
        let id = OrganizationId::default_organization();
        assert_eq!(id.as_str(), "default");
    }

    #[test]
    fn test_organization_creation() {
        let id = OrganizationId::new("my-org").unwrap();
        let organization = Organization::new(id, "My Organization").unwrap();

        assert_eq!(organization.name(), "My Organization");
        assert!(organization.description().is_none());
    }

    #[test]
    fn test_organization_invalid_name() {
        let id = OrganizationId::new("my-org").unwrap();
        assert!(Organization::new(id.clone(), "").is_err());
        assert!(Organization::new(id, "a".repeat(101)).is_err());
    }

    #[test]
    fn test_organization_default() {
        let organization = Organization::default_organization();
        assert_eq!(organization.id().as_str(), OrganizationId::DEFAULT);
        assert_eq!(organization.name(), "Default organization");
    }

    #[test]
    fn test_organization_update_name() {
        let id = OrganizationId::new("my-org").unwrap();
        let mut organization = Organization::new(id, "My Organization").unwrap();

        organization.set_name("Renamed").unwrap();
        assert_eq!(organization.name(), "Renamed");
    }
}
