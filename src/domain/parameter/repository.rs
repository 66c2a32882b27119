//! Parameter override repository trait

use async_trait::async_trait;

use super::entity::ParameterOverride;
use crate::domain::DomainError;
use crate::domain::environment::EnvironmentId;

/// Repository for stored per-environment parameter overrides
#[async_trait]
pub trait ParameterRepository: Send + Sync + std::fmt::Debug {
    /// Get the stored override for a key in an environment
    async fn find(
        &self,
        environment_id: &EnvironmentId,
        key: &str,
    ) -> Result<Option<ParameterOverride>, DomainError>;

    /// Store an override, replacing any previous value
    async fn save(&self, parameter: ParameterOverride) -> Result<ParameterOverride, DomainError>;

    /// Remove an override; returns true if one was stored
    async fn delete(
        &self,
        environment_id: &EnvironmentId,
        key: &str,
    ) -> Result<bool, DomainError>;

    /// List every override stored for an environment
    async fn find_by_environment(
        &self,
        environment_id: &EnvironmentId,
    ) -> Result<Vec<ParameterOverride>, DomainError>;
}
