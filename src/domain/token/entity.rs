//! Personal access token entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::DomainError;

const MAX_TOKEN_NAME_LENGTH: usize = 64;

/// Token identifier - a UUID in canonical hyphenated form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenId(String);

impl TokenId {
    /// Generate a fresh random identifier
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Parse an identifier from its string form
    pub fn parse(id: impl AsRef<str>) -> Result<Self, DomainError> {
        let raw = id.as_ref();

        let uuid = Uuid::parse_str(raw)
            .map_err(|_| DomainError::invalid_id(format!("Invalid token ID '{}'", raw)))?;

        Ok(Self(uuid.to_string()))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TokenId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<TokenId> for String {
    fn from(id: TokenId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Personal access token
///
/// Only a digest of the secret is stored; the plaintext is returned once at
/// creation and cannot be recovered afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalToken {
    /// Unique identifier
    id: TokenId,
    /// Owning user
    user: String,
    /// Display name
    name: String,
    /// Digest of the secret
    digest: String,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last successful verification
    #[serde(skip_serializing_if = "Option::is_none")]
    last_used_at: Option<DateTime<Utc>>,
}

impl PersonalToken {
    /// Create a new token entity from an already-hashed secret
    pub fn new(
        id: TokenId,
        user: impl Into<String>,
        name: impl Into<String>,
        digest: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let user = user.into();
        if user.trim().is_empty() {
            return Err(DomainError::validation("Token user cannot be empty"));
        }

        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Token name cannot be empty"));
        }
        if name.len() > MAX_TOKEN_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Token name cannot exceed {} characters",
                MAX_TOKEN_NAME_LENGTH
            )));
        }

        Ok(Self {
            id,
            user,
            name,
            digest: digest.into(),
            created_at: Utc::now(),
            last_used_at: None,
        })
    }

    pub fn id(&self) -> &TokenId {
        &self.id
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn digest(&self) -> &str {
        &self.digest
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_used_at(&self) -> Option<DateTime<Utc>> {
        self.last_used_at
    }

    /// Record a successful verification
    pub fn mark_used(&mut self) {
        self.last_used_at = Some(Utc::now());
    }
}
