//! In-memory API repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::api::{Api, ApiId, ApiRecord, ApiRepository};
use crate::domain::environment::EnvironmentId;

/// Thread-safe in-memory API repository
///
/// Useful for testing and development. Data is lost when the process
/// terminates.
#[derive(Debug, Default)]
pub struct InMemoryApiRepository {
    apis: RwLock<HashMap<String, Api>>,
}

impl InMemoryApiRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with APIs
    pub fn with_apis(apis: Vec<Api>) -> Self {
        let repository = Self::new();
        {
            let mut map = repository.apis.write().unwrap();

            for api in apis {
                map.insert(api.id().as_str().to_string(), api);
            }
        }
        repository
    }
}

#[async_trait]
impl ApiRepository for InMemoryApiRepository {
    async fn find_by_id(&self, id: &ApiId) -> Result<Option<Api>, DomainError> {
        let apis = self
            .apis
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(apis.get(id.as_str()).cloned())
    }

    async fn find_by_environment(
        &self,
        environment_id: &EnvironmentId,
    ) -> Result<Vec<Api>, DomainError> {
        let apis = self
            .apis
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<Api> = apis
            .values()
            .filter(|api| api.environment_id() == environment_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(result)
    }

    async fn create(&self, api: Api) -> Result<Api, DomainError> {
        let key = api.id().as_str().to_string();
        let mut apis = self
            .apis
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if apis.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "API '{}' already exists",
                key
            )));
        }

        apis.insert(key, api.clone());
        Ok(api)
    }

    async fn update(&self, api: Api) -> Result<Api, DomainError> {
        let key = api.id().as_str().to_string();
        let mut apis = self
            .apis
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !apis.contains_key(&key) {
            return Err(DomainError::not_found(format!("API '{}' not found", key)));
        }

        apis.insert(key, api.clone());
        Ok(api)
    }

    async fn delete(&self, id: &ApiId) -> Result<bool, DomainError> {
        let mut apis = self
            .apis
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(apis.remove(id.as_str()).is_some())
    }

    async fn search_all(&self) -> Result<Vec<ApiRecord>, DomainError> {
        let apis = self
            .apis
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(apis
            .values()
            .map(|api| ApiRecord {
                id: api.id().clone(),
                definition: api.definition().to_string(),
            })
            .collect())
    }
}
