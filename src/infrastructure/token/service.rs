//! Personal token service

use std::sync::Arc;

use tracing::{debug, info};

use super::generator::TokenGenerator;
use crate::domain::DomainError;
use crate::domain::token::{PersonalToken, TokenId, TokenRepository};

/// A newly created token together with its plaintext secret
///
/// The secret is only available here; it is not stored and cannot be
/// retrieved again.
#[derive(Debug)]
pub struct CreatedToken {
    pub token: PersonalToken,
    pub secret: String,
}

/// Personal token service
#[derive(Debug)]
pub struct TokenService<R: TokenRepository> {
    repository: Arc<R>,
    generator: TokenGenerator,
}

impl<R: TokenRepository> TokenService<R> {
    /// Create a new token service
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            generator: TokenGenerator::default(),
        }
    }

    /// Use a custom generator (builder pattern)
    pub fn with_generator(mut self, generator: TokenGenerator) -> Self {
        self.generator = generator;
        self
    }

    /// Create a new token for a user
    ///
    /// A user cannot have two tokens with the same name.
    pub async fn create(&self, user: &str, name: &str) -> Result<CreatedToken, DomainError> {
        info!(user = %user, name = %name, "Creating personal token");

        let existing = self.repository.find_by_user(user).await?;
        if existing.iter().any(|token| token.name() == name) {
            return Err(DomainError::conflict(format!(
                "Token '{}' already exists for user '{}'",
                name, user
            )));
        }

        let generated = self.generator.generate();
        let token = PersonalToken::new(TokenId::random(), user, name, generated.digest)?;

        let token = self.repository.create(token).await?;

        Ok(CreatedToken {
            token,
            secret: generated.secret,
        })
    }

    /// List the tokens of a user
    pub async fn list(&self, user: &str) -> Result<Vec<PersonalToken>, DomainError> {
        self.repository.find_by_user(user).await
    }

    /// Revoke a token owned by a user
    pub async fn revoke(&self, user: &str, id: &str) -> Result<bool, DomainError> {
        info!(user = %user, id = %id, "Revoking personal token");

        let token_id = TokenId::parse(id)?;

        match self.repository.find_by_id(&token_id).await? {
            Some(token) if token.user() == user => self.repository.delete(&token_id).await,
            _ => Ok(false),
        }
    }

    /// Resolve a presented secret to its token
    ///
    /// Returns the token and records the use, or `None` when the secret
    /// matches nothing.
    pub async fn verify(&self, secret: &str) -> Result<Option<PersonalToken>, DomainError> {
        let digest = self.generator.hash_secret(secret);

        let Some(mut token) = self.repository.find_by_digest(&digest).await? else {
            debug!("Presented token secret matches no stored token");
            return Ok(None);
        };

        // Digest lookup already matched; the comparison guards digest
        // collisions on the lookup path.
        if !self.generator.verify_secret(secret, token.digest()) {
            return Ok(None);
        }

        token.mark_used();
        let token = self.repository.update(token).await?;

        Ok(Some(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::token::InMemoryTokenRepository;

    fn create_service() -> TokenService<InMemoryTokenRepository> {
        TokenService::new(Arc::new(InMemoryTokenRepository::new()))
    }

    #[tokio::test]
    async fn test_create_returns_secret_once() {
        let service = create_service();

        let created = service.create("alice", "ci-deploy").await.unwrap();

        assert!(created.secret.starts_with("apim_"));
        // Only the digest is stored
        assert_ne!(created.token.digest(), created.secret);
        assert!(created.token.digest().starts_with("sha256$"));
    }

    #[tokio::test]
    async fn test_create_duplicate_name_conflicts() {
        let service = create_service();

        service.create("alice", "ci-deploy").await.unwrap();

        let result = service.create("alice", "ci-deploy").await;
        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));

        // Same name for another user is fine
        assert!(service.create("bob", "ci-deploy").await.is_ok());
    }

    #[tokio::test]
    async fn test_verify_round_trip() {
        let service = create_service();

        let created = service.create("alice", "ci-deploy").await.unwrap();

        let verified = service.verify(&created.secret).await.unwrap().unwrap();
        assert_eq!(verified.id(), created.token.id());
        assert!(verified.last_used_at().is_some());

        assert!(service.verify("apim_wrong").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_revoke() {
        let service = create_service();

        let created = service.create("alice", "ci-deploy").await.unwrap();
        let id = created.token.id().as_str().to_string();

        // Another user cannot revoke it
        assert!(!service.revoke("bob", &id).await.unwrap());

        assert!(service.revoke("alice", &id).await.unwrap());
        assert!(service.verify(&created.secret).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list() {
        let service = create_service();

        service.create("alice", "ci-deploy").await.unwrap();
        service.create("alice", "backup").await.unwrap();
        service.create("bob", "other").await.unwrap();

        let tokens = service.list("alice").await.unwrap();
        assert_eq!(tokens.len(), 2);
    }
}
