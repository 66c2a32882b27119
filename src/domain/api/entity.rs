//! API entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{ApiValidationError, validate_api_name, validate_api_version};
use crate::domain::environment::EnvironmentId;

/// API identifier - a UUID in canonical hyphenated form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ApiId(String);

impl ApiId {
    /// Generate a fresh random identifier
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse an identifier from its string form
    pub fn parse(id: impl AsRef<str>) -> Result<Self, ApiValidationError> {
        let raw = id.as_ref();

        let uuid = Uuid::parse_str(raw).map_err(|_| ApiValidationError::InvalidId {
            id: raw.to_string(),
        })?;

        Ok(Self(uuid.to_string()))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ApiId {
    type Error = ApiValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ApiId> for String {
    fn from(id: ApiId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ApiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// API entity
///
/// The routing definition is kept in its serialized form; callers parse it
/// on demand through [`super::ApiDefinition`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Api {
    /// Unique identifier
    id: ApiId,
    /// Environment this API belongs to
    environment_id: EnvironmentId,
    /// Display name
    name: String,
    /// Functional version
    version: String,
    /// Description
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Serialized routing definition
    definition: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Api {
    /// Create a new API
    pub fn new(
        id: ApiId,
        environment_id: EnvironmentId,
        name: impl Into<String>,
        version: impl Into<String>,
        definition: impl Into<String>,
    ) -> Result<Self, ApiValidationError> {
        let name = name.into();
        validate_api_name(&name)?;

        let version = version.into();
        validate_api_version(&version)?;

        let now = Utc::now();

        Ok(Self {
            id,
            environment_id,
            name,
            version,
            description: None,
            definition: definition.into(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Set description (builder pattern)
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    // Getters

    pub fn id(&self) -> &ApiId {
        &self.id
    }

    pub fn environment_id(&self) -> &EnvironmentId {
        &self.environment_id
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

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ApiValidationError> {
        let name = name.into();
        validate_api_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Update the version
    pub fn set_version(&mut self, version: impl Into<String>) -> Result<(), ApiValidationError> {
        let version = version.into();
        validate_api_version(&version)?;
        self.version = version;
        self.touch();
        Ok(())
    }

    /// Update the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.touch();
    }

    /// Replace the serialized routing definition
    pub fn set_definition(&mut self, definition: impl Into<String>) {
        self.definition = definition.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
