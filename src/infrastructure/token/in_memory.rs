//! In-memory personal token repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::token::{PersonalToken, TokenId, TokenRepository};

/// Thread-safe in-memory token repository
#[derive(Debug, Default)]
pub struct InMemoryTokenRepository {
    tokens: RwLock<HashMap<String, PersonalToken>>,
}

impl InMemoryTokenRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenRepository for InMemoryTokenRepository {
    async fn find_by_id(&self, id: &TokenId) -> Result<Option<PersonalToken>, DomainError> {
        let tokens = self
            .tokens
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(tokens.get(id.as_str()).cloned())
    }

    async fn find_by_digest(&self, digest: &str) -> Result<Option<PersonalToken>, DomainError> {
        let tokens = self
            .tokens
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(tokens
            .values()
            .find(|token| token.digest() == digest)
            .cloned())
    }

    async fn find_by_user(&self, user: &str) -> Result<Vec<PersonalToken>, DomainError> {
        let tokens = self
            .tokens
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<PersonalToken> = tokens
            .values()
            .filter(|token| token.user() == user)
            .cloned()
            .collect();

        result.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(result)
    }

    async fn create(&self, token: PersonalToken) -> Result<PersonalToken, DomainError> {
        let key = token.id().as_str().to_string();
        let mut tokens = self
            .tokens
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if tokens.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Token '{}' already exists",
                key
            )));
        }

        tokens.insert(key, token.clone());
        Ok(token)
    }

    async fn update(&self, token: PersonalToken) -> Result<PersonalToken, DomainError> {
        let key = token.id().as_str().to_string();
        let mut tokens = self
            .tokens
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !tokens.contains_key(&key) {
            return Err(DomainError::not_found(format!("Token '{}' not found", key)));
        }

        tokens.insert(key, token.clone());
        Ok(token)
    }

    async fn delete(&self, id: &TokenId) -> Result<bool, DomainError> {
        let mut tokens = self
            .tokens
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(tokens.remove(id.as_str()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(user: &str, name: &str, digest: &str) -> PersonalToken {
        PersonalToken::new(TokenId::random(), user, name, digest).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find_by_digest() {
        let repo = InMemoryTokenRepository::new();
        repo.create(token("alice", "ci", "sha256$one")).await.unwrap();

        let fetched = repo.find_by_digest("sha256$one").await.unwrap();
        assert_eq!(fetched.unwrap().name(), "ci");

        assert!(repo.find_by_digest("sha256$other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_user() {
        let repo = InMemoryTokenRepository::new();
        repo.create(token("alice", "ci", "sha256$one")).await.unwrap();
        repo.create(token("alice", "backup", "sha256$two"))
            .await
            .unwrap();
        repo.create(token("bob", "ci", "sha256$three")).await.unwrap();

        let tokens = repo.find_by_user("alice").await.unwrap();
        assert_eq!(tokens.len(), 2);
        // Sorted by name
        assert_eq!(tokens[0].name(), "backup");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryTokenRepository::new();
        let created = repo.create(token("alice", "ci", "sha256$one")).await.unwrap();

        assert!(repo.delete(created.id()).await.unwrap());
        assert!(!repo.delete(created.id()).await.unwrap());
    }
}
