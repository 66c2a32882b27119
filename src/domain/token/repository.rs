//! Personal token repository trait

use async_trait::async_trait;

use super::entity::{PersonalToken, TokenId};
use crate::domain::DomainError;

/// Repository for managing personal access tokens
#[async_trait]
pub trait TokenRepository: Send + Sync + std::fmt::Debug {
    /// Get a token by ID
    async fn find_by_id(&self, id: &TokenId) -> Result<Option<PersonalToken>, DomainError>;

    /// Find the token matching a secret digest
    async fn find_by_digest(&self, digest: &str) -> Result<Option<PersonalToken>, DomainError>;

    /// List the tokens of a user
    async fn find_by_user(&self, user: &str) -> Result<Vec<PersonalToken>, DomainError>;

    /// Create a new token
    async fn create(&self, token: PersonalToken) -> Result<PersonalToken, DomainError>;

    /// Update an existing token
    async fn update(&self, token: PersonalToken) -> Result<PersonalToken, DomainError>;

    /// Delete a token by ID
    async fn delete(&self, id: &TokenId) -> Result<bool, DomainError>;
}
