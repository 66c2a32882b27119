//! In-memory parameter override repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::environment::EnvironmentId;
use crate::domain::parameter::{ParameterOverride, ParameterRepository};

/// Thread-safe in-memory parameter override repository
#[derive(Debug, Default)]
pub struct InMemoryParameterRepository {
    overrides: RwLock<HashMap<String, ParameterOverride>>,
}

impl InMemoryParameterRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    fn storage_key(environment_id: &EnvironmentId, key: &str) -> String {
        format!("{}:{}", environment_id, key)
    }
}

#[async_trait]
impl ParameterRepository for InMemoryParameterRepository {
    async fn find(
        &self,
        environment_id: &EnvironmentId,
        key: &str,
    ) -> Result<Option<ParameterOverride>, DomainError> {
        let overrides = self
            .overrides
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(overrides
            .get(&Self::storage_key(environment_id, key))
            .cloned())
    }

    async fn save(&self, parameter: ParameterOverride) -> Result<ParameterOverride, DomainError> {
        let key = Self::storage_key(parameter.environment_id(), parameter.key());
        let mut overrides = self
            .overrides
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        overrides.insert(key, parameter.clone());
        Ok(parameter)
    }

    async fn delete(
        &self,
        environment_id: &EnvironmentId,
        key: &str,
    ) -> Result<bool, DomainError> {
        let mut overrides = self
            .overrides
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(overrides
            .remove(&Self::storage_key(environment_id, key))
            .is_some())
    }

    async fn find_by_environment(
        &self,
        environment_id: &EnvironmentId,
    ) -> Result<Vec<ParameterOverride>, DomainError> {
        let overrides = self
            .overrides
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<ParameterOverride> = overrides
            .values()
            .filter(|parameter| parameter.environment_id() == environment_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| a.key().cmp(b.key()));
        Ok(result)
    }
}
