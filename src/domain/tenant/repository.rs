//! Tenant repository trait

use async_trait::async_trait;

use super::entity::{Tenant, TenantId};
use crate::domain::DomainError;
use crate::domain::environment::EnvironmentId;

/// Repository for managing tenants
#[async_trait]
pub trait TenantRepository: Send + Sync + std::fmt::Debug {
    /// Get a tenant by ID
    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, DomainError>;

    /// Create a new tenant
    async fn create(&self, tenant: Tenant) -> Result<Tenant, DomainError>;

    /// Update an existing tenant
    async fn update(&self, tenant: Tenant) -> Result<Tenant, DomainError>;

    /// Delete a tenant by ID
    async fn delete(&self, id: &TenantId) -> Result<bool, DomainError>;

    /// List the tenants of an environment
    async fn find_by_environment(
        &self,
        environment_id: &EnvironmentId,
    ) -> Result<Vec<Tenant>, DomainError>;

    /// Check if a tenant exists
    async fn exists(&self, id: &TenantId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use super::*;

    /// Mock implementation for testing
    #[derive(Debug, Default)]
    pub struct MockTenantRepository {
        tenants: RwLock<HashMap<String, Tenant>>,
    }

    impl MockTenantRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl TenantRepository for MockTenantRepository {
        async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, DomainError> {
            let tenants = self.tenants.read().unwrap();
            Ok(tenants.get(id.as_str()).cloned())
        }

        async fn create(&self, tenant: Tenant) -> Result<Tenant, DomainError> {
            let mut tenants = self.tenants.write().unwrap();

            if tenants.contains_key(tenant.id().as_str()) {
                return Err(DomainError::conflict(format!(
                    "Tenant '{}' already exists",
                    tenant.id()
                )));
            }

            tenants.insert(tenant.id().as_str().to_string(), tenant.clone());
            Ok(tenant)
        }

        async fn update(&self, tenant: Tenant) -> Result<Tenant, DomainError> {
            let mut tenants = self.tenants.write().unwrap();

            if !tenants.contains_key(tenant.id().as_str()) {
                return Err(DomainError::not_found(format!(
                    "Tenant '{}' not found",
                    tenant.id()
                )));
            }

            tenants.insert(tenant.id().as_str().to_string(), tenant.clone());
            Ok(tenant)
        }

        async fn delete(&self, id: &TenantId) -> Result<bool, DomainError> {
            let mut tenants = self.tenants.write().unwrap();
            Ok(tenants.remove(id.as_str()).is_some())
        }

        async fn find_by_environment(
            &self,
            environment_id: &EnvironmentId,
        ) -> Result<Vec<Tenant>, DomainError> {
            let tenants = self.tenants.read().unwrap();
            let mut result: Vec<Tenant> = tenants
                .values()
                .filter(|t| t.environment_id() == environment_id)
                .cloned()
                .collect();

            result.sort_by(|a, b| a.name().cmp(b.name()));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockTenantRepository;
    use super::*;

    fn environment() -> EnvironmentId {
        EnvironmentId::default_environment()
    }

    #[tokio::test]
    async fn test_mock_create_and_find() {
        let repo = MockTenantRepository::new();
        let id = TenantId::new("europe").unwrap();
        let tenant = Tenant::new(id.clone(), environment(), "Europe").unwrap();

        repo.create(tenant).await.unwrap();

        let fetched = repo.find_by_id(&id).await.unwrap();
        assert_eq!(fetched.unwrap().name(), "Europe");
    }

    #[tokio::test]
    async fn test_mock_create_duplicate() {
        let repo = MockTenantRepository::new();
        let id = TenantId::new("europe").unwrap();

        let tenant1 = Tenant::new(id.clone(), environment(), "Europe").unwrap();
        let tenant2 = Tenant::new(id, environment(), "Europe again").unwrap();

        repo.create(tenant1).await.unwrap();
        assert!(repo.create(tenant2).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_delete() {
        let repo = MockTenantRepository::new();
        let id = TenantId::new("europe").unwrap();
        let tenant = Tenant::new(id.clone(), environment(), "Europe").unwrap();

        repo.create(tenant).await.unwrap();
        assert!(repo.exists(&id).await.unwrap());

        let deleted = repo.delete(&id).await.unwrap();
        assert!(deleted);
        assert!(!repo.exists(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_mock_find_by_environment() {
        let repo = MockTenantRepository::new();
        let other_env = EnvironmentId::new("prod").unwrap();

        let tenant1 =
            Tenant::new(TenantId::new("europe").unwrap(), environment(), "Europe").unwrap();
        let tenant2 =
            Tenant::new(TenantId::new("asia").unwrap(), other_env.clone(), "Asia").unwrap();

        repo.create(tenant1).await.unwrap();
        repo.create(tenant2).await.unwrap();

        let tenants = repo.find_by_environment(&environment()).await.unwrap();
        assert_eq!(tenants.len(), 1);
        assert_eq!(tenants[0].name(), "Europe");

        let tenants = repo.find_by_environment(&other_env).await.unwrap();
        assert_eq!(tenants.len(), 1);
    }
}
