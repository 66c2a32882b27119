//! Environment repository trait

use async_trait::async_trait;

use super::entity::{Environment, EnvironmentId};
use crate::domain::DomainError;
use crate::domain::organization::OrganizationId;

/// Repository for managing environments
#[async_trait]
pub trait EnvironmentRepository: Send + Sync + std::fmt::Debug {
    /// Get an environment by ID
    async fn find_by_id(&self, id: &EnvironmentId) -> Result<Option<Environment>, DomainError>;

    /// Create a new environment
    async fn create(&self, environment: Environment) -> Result<Environment, DomainError>;

    /// Update an existing environment
    async fn update(&self, environment: Environment) -> Result<Environment, DomainError>;

    /// Delete an environment by ID
    async fn delete(&self, id: &EnvironmentId) -> Result<bool, DomainError>;

    /// List the environments of an organization
    async fn find_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Environment>, DomainError>;

    /// Check if an environment exists
    async fn exists(&self, id: &EnvironmentId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
