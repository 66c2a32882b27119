//! In-memory organization repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::organization::{Organization, OrganizationId, OrganizationRepository};

/// Thread-safe in-memory organization repository
#[derive(Debug, Default)]
pub struct InMemoryOrganizationRepository {
    organizations: RwLock<HashMap<String, Organization>>,
}

impl InMemoryOrganizationRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with organizations
    pub fn with_organizations(organizations: Vec<Organization>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.organizations.write().unwrap();

            for organization in organizations {
                map.insert(organization.id().as_str().to_string(), organization);
            }
        }
        repository
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn find_by_id(&self, id: &OrganizationId) -> Result<Option<Organization>, DomainError> {
        let organizations = self
            .organizations
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(organizations.get(id.as_str()).cloned())
    }

    async fn create(&self, organization: Organization) -> Result<Organization, DomainError> {
        let key = organization.id().as_str().to_string();
        let mut organizations = self
            .organizations
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if organizations.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Organization '{}' already exists",
                key
            )));
        }

        organizations.insert(key, organization.clone());
        Ok(organization)
    }

    async fn update(&self, organization: Organization) -> Result<Organization, DomainError> {
        let key = organization.id().as_str().to_string();
        let mut organizations = self
            .organizations
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !organizations.contains_key(&key) {
            return Err(DomainError::not_found(format!(
                "Organization '{}' not found",
                key
            )));
        }

        organizations.insert(key, organization.clone());
        Ok(organization)
    }

    async fn delete(&self, id: &OrganizationId) -> Result<bool, DomainError> {
        let mut organizations = self
            .organizations
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(organizations.remove(id.as_str()).is_some())
    }

    async fn list(&self) -> Result<Vec<Organization>, DomainError> {
        let organizations = self
            .organizations
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<Organization> = organizations.values().cloned().collect();
        result.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryOrganizationRepository::new();
        let organization = Organization::default_organization();

        repo.create(organization.clone()).await.unwrap();

        let fetched = repo.find_by_id(organization.id()).await.unwrap();
        assert_eq!(fetched.unwrap().name(), "Default organization");
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let repo = InMemoryOrganizationRepository::new();
        let organization = Organization::default_organization();

        repo.create(organization.clone()).await.unwrap();
        assert!(repo.create(organization).await.is_err());
    }

    #[tokio::test]
    async fn test_list_sorted_by_name() {
        let repo = InMemoryOrganizationRepository::new();

        repo.create(
            Organization::new(OrganizationId::new("zeta").unwrap(), "Zeta Corp").unwrap(),
        )
        .await
        .unwrap();
        repo.create(
            Organization::new(OrganizationId::new("acme").unwrap(), "Acme Corp").unwrap(),
        )
        .await
        .unwrap();

        let organizations = repo.list().await.unwrap();
        assert_eq!(organizations[0].name(), "Acme Corp");
        assert_eq!(organizations[1].name(), "Zeta Corp");
    }
}
