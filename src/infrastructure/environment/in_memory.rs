//! In-memory environment repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::environment::{Environment, EnvironmentId, EnvironmentRepository};
use crate::domain::organization::OrganizationId;

/// Thread-safe in-memory environment repository
#[derive(Debug, Default)]
pub struct InMemoryEnvironmentRepository {
    environments: RwLock<HashMap<String, Environment>>,
}

impl InMemoryEnvironmentRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with environments
    pub fn with_environments(environments: Vec<Environment>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.environments.write().unwrap();

            for environment in environments {
                map.insert(environment.id().as_str().to_string(), environment);
            }
        }
        repository
    }
}

#[async_trait]
impl EnvironmentRepository for InMemoryEnvironmentRepository {
    async fn find_by_id(&self, id: &EnvironmentId) -> Result<Option<Environment>, DomainError> {
        let environments = self
            .environments
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(environments.get(id.as_str()).cloned())
    }

    async fn create(&self, environment: Environment) -> Result<Environment, DomainError> {
        let key = environment.id().as_str().to_string();
        let mut environments = self
            .environments
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if environments.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Environment '{}' already exists",
                key
            )));
        }

        environments.insert(key, environment.clone());
        Ok(environment)
    }

    async fn update(&self, environment: Environment) -> Result<Environment, DomainError> {
        let key = environment.id().as_str().to_string();
        let mut environments = self
            .environments
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !environments.contains_key(&key) {
            return Err(DomainError::not_found(format!(
                "Environment '{}' not found",
                key
            )));
        }

        environments.insert(key, environment.clone());
        Ok(environment)
    }

    async fn delete(&self, id: &EnvironmentId) -> Result<bool, DomainError> {
        let mut environments = self
            .environments
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(environments.remove(id.as_str()).is_some())
    }

    async fn find_by_organization(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Environment>, DomainError> {
        let environments = self
            .environments
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<Environment> = environments
            .values()
            .filter(|environment| environment.organization_id() == organization_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn environment(id: &str, name: &str) -> Environment {
        Environment::new(
            EnvironmentId::new(id).unwrap(),
            OrganizationId::default_organization(),
            name,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryEnvironmentRepository::new();
        repo.create(environment("prod", "Production")).await.unwrap();

        let fetched = repo
            .find_by_id(&EnvironmentId::new("prod").unwrap())
            .await
            .unwrap();
        assert_eq!(fetched.unwrap().name(), "Production");
    }

    #[tokio::test]
    async fn test_create_duplicate() {
        let repo = InMemoryEnvironmentRepository::new();
        repo.create(environment("prod", "Production")).await.unwrap();

        let result = repo.create(environment("prod", "Production again")).await;
        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_find_by_organization() {
        let repo = InMemoryEnvironmentRepository::new();
        repo.create(environment("dev", "Development")).await.unwrap();
        repo.create(environment("prod", "Production")).await.unwrap();

        let environments = repo
            .find_by_organization(&OrganizationId::default_organization())
            .await
            .unwrap();
        assert_eq!(environments.len(), 2);
        // Sorted by name
        assert_eq!(environments[0].name(), "Development");
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryEnvironmentRepository::new();
        repo.create(environment("prod", "Production")).await.unwrap();

        let id = EnvironmentId::new("prod").unwrap();
        assert!(repo.delete(&id).await.unwrap());
        assert!(!repo.exists(&id).await.unwrap());
    }
}
