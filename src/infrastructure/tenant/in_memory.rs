//! In-memory tenant repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::environment::EnvironmentId;
use crate::domain::tenant::{Tenant, TenantId, TenantRepository};

/// Thread-safe in-memory tenant repository
#[derive(Debug, Default)]
pub struct InMemoryTenantRepository {
    tenants: RwLock<HashMap<String, Tenant>>,
}

impl InMemoryTenantRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn find_by_id(&self, id: &TenantId) -> Result<Option<Tenant>, DomainError> {
        let tenants = self
            .tenants
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(tenants.get(id.as_str()).cloned())
    }

    async fn create(&self, tenant: Tenant) -> Result<Tenant, DomainError> {
        let key = tenant.id().as_str().to_string();
        let mut tenants = self
            .tenants
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if tenants.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Tenant '{}' already exists",
                key
            )));
        }

        tenants.insert(key, tenant.clone());
        Ok(tenant)
    }

    async fn update(&self, tenant: Tenant) -> Result<Tenant, DomainError> {
        let key = tenant.id().as_str().to_string();
        let mut tenants = self
            .tenants
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !tenants.contains_key(&key) {
            return Err(DomainError::not_found(format!(
                "Tenant '{}' not found",
                key
            )));
        }

        tenants.insert(key, tenant.clone());
        Ok(tenant)
    }

    async fn delete(&self, id: &TenantId) -> Result<bool, DomainError> {
        let mut tenants = self
            .tenants
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(tenants.remove(id.as_str()).is_some())
    }

    async fn find_by_environment(
        &self,
        environment_id: &EnvironmentId,
    ) -> Result<Vec<Tenant>, DomainError> {
        let tenants = self
            .tenants
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<Tenant> = tenants
            .values()
            .filter(|tenant| tenant.environment_id() == environment_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenant(id: &str, name: &str) -> Tenant {
        Tenant::new(
            TenantId::new(id).unwrap(),
            EnvironmentId::default_environment(),
            name,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryTenantRepository::new();
        repo.create(tenant("europe", "Europe")).await.unwrap();

        let fetched = repo
            .find_by_id(&TenantId::new("europe").unwrap())
            .await
            .unwrap();
        assert_eq!(fetched.unwrap().name(), "Europe");
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let repo = InMemoryTenantRepository::new();
        repo.create(tenant("europe", "Europe")).await.unwrap();

        let result = repo.create(tenant("europe", "Europe bis")).await;
        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_find_by_environment_sorted() {
        let repo = InMemoryTenantRepository::new();
        repo.create(tenant("zone-b", "Zone B")).await.unwrap();
        repo.create(tenant("zone-a", "Zone A")).await.unwrap();

        let tenants = repo
            .find_by_environment(&EnvironmentId::default_environment())
            .await
            .unwrap();
        assert_eq!(tenants.len(), 2);
        assert_eq!(tenants[0].name(), "Zone A");
    }
}
