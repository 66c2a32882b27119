//! Execution context for environment-scoped operations
//!
//! Every service call that operates within an organization/environment pair
//! receives an explicit [`ExecutionContext`] parameter. There is no ambient
//! or thread-local current context.

use serde::{Deserialize, Serialize};

use crate::domain::environment::EnvironmentId;
use crate::domain::organization::OrganizationId;

/// The organization and environment an operation runs against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionContext {
    organization_id: OrganizationId,
    environment_id: EnvironmentId,
}

impl ExecutionContext {
    /// Create a new execution context
    pub fn new(organization_id: OrganizationId, environment_id: EnvironmentId) -> Self {
        Self {
            organization_id,
            environment_id,
        }
    }

    /// Context for the built-in default organization and environment
    pub fn default_context() -> Self {
        Self {
            organization_id: OrganizationId::default_organization(),
            environment_id: EnvironmentId::default_environment(),
        }
    }

    pub fn organization_id(&self) -> &OrganizationId {
        &self.organization_id
    }

    pub fn environment_id(&self) -> &EnvironmentId {
        &self.environment_id
    }
}

impl std::fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.organization_id, self.environment_id)
    }
}
