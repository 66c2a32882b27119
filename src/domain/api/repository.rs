//! API repository trait

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use super::entity::{Api, ApiId};
use crate::domain::DomainError;
use crate::domain::environment::EnvironmentId;

/// Row returned by the bulk read used for virtual host checking
///
/// Carries the raw serialized routing definition; callers deserialize it
/// and decide how to handle unreadable records.
#[derive(Debug, Clone)]
pub struct ApiRecord {
    pub id: ApiId,
    pub definition: String,
}

/// Repository for managing APIs
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApiRepository: Send + Sync {
    /// Get an API by ID
    async fn find_by_id(&self, id: &ApiId) -> Result<Option<Api>, DomainError>;

    /// List the APIs of an environment
    async fn find_by_environment(
        &self,
        environment_id: &EnvironmentId,
    ) -> Result<Vec<Api>, DomainError>;

    /// Create a new API
    async fn create(&self, api: Api) -> Result<Api, DomainError>;

    /// Update an existing API
    async fn update(&self, api: Api) -> Result<Api, DomainError>;

    /// Delete an API by ID
    async fn delete(&self, id: &ApiId) -> Result<bool, DomainError>;

    /// Bulk read of every stored API and its serialized routing definition
    async fn search_all(&self) -> Result<Vec<ApiRecord>, DomainError>;
}
