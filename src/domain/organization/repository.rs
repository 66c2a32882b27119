//! Organization repository trait

use async_trait::async_trait;

use super::entity::{Organization, OrganizationId};
use crate::domain::DomainError;

/// Repository for managing organizations
#[async_trait]
pub trait OrganizationRepository: Send + Sync + std::fmt::Debug {
    /// Get an organization by ID
    async fn find_by_id(&self, id: &OrganizationId) -> Result<Option<Organization>, DomainError>;

    /// Create a new organization
    async fn create(&self, organization: Organization) -> Result<Organization, DomainError>;

    /// Update an existing organization
    async fn update(&self, organization: Organization) -> Result<Organization, DomainError>;

    /// Delete an organization by ID
    async fn delete(&self, id: &OrganizationId) -> Result<bool, DomainError>;

    /// List all organizations
    async fn list(&self) -> Result<Vec<Organization>, DomainError>;

    /// Check if an organization exists
    async fn exists(&self, id: &OrganizationId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}
