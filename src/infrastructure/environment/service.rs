//! Environment service

use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::api::validate_host;
use crate::domain::environment::{Environment, EnvironmentId, EnvironmentRepository};
use crate::domain::organization::{OrganizationId, OrganizationRepository};

/// Request for creating a new environment
#[derive(Debug, Clone)]
pub struct CreateEnvironmentRequest {
    pub id: String,
    pub organization_id: OrganizationId,
    pub name: String,
    pub description: Option<String>,
    pub domain_restrictions: Vec<String>,
}

/// Request for updating an environment
#[derive(Debug, Clone, Default)]
pub struct UpdateEnvironmentRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub domain_restrictions: Option<Vec<String>>,
}

/// Environment service
#[derive(Debug)]
pub struct EnvironmentService<E: EnvironmentRepository, O: OrganizationRepository> {
    repository: Arc<E>,
    organizations: Arc<O>,
}

impl<E: EnvironmentRepository, O: OrganizationRepository> EnvironmentService<E, O> {
    /// Create a new environment service
    pub fn new(repository: Arc<E>, organizations: Arc<O>) -> Self {
        Self {
            repository,
            organizations,
        }
    }

    /// Create a new environment
    pub async fn create(
        &self,
        request: CreateEnvironmentRequest,
    ) -> Result<Environment, DomainError> {
        info!(id = %request.id, organization = %request.organization_id, "Creating environment");

        let environment_id = EnvironmentId::new(&request.id)
            .map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if !self.organizations.exists(&request.organization_id).await? {
            return Err(DomainError::not_found(format!(
                "Organization '{}' not found",
                request.organization_id
            )));
        }

        if self.repository.exists(&environment_id).await? {
            return Err(DomainError::conflict(format!(
                "Environment '{}' already exists",
                request.id
            )));
        }

        validate_domain_restrictions(&request.domain_restrictions)?;

        let mut environment =
            Environment::new(environment_id, request.organization_id, &request.name)
                .map_err(|e| DomainError::validation(e.to_string()))?
                .with_domain_restrictions(request.domain_restrictions);

        if let Some(description) = request.description {
            environment.set_description(Some(description));
        }

        self.repository.create(environment).await
    }

    /// Get an environment by ID
    pub async fn get(&self, id: &str) -> Result<Option<Environment>, DomainError> {
        let environment_id =
            EnvironmentId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.find_by_id(&environment_id).await
    }

    /// List the environments of an organization
    pub async fn list(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Vec<Environment>, DomainError> {
        self.repository.find_by_organization(organization_id).await
    }

    /// Update an environment
    pub async fn update(
        &self,
        id: &str,
        request: UpdateEnvironmentRequest,
    ) -> Result<Environment, DomainError> {
        info!(id = %id, "Updating environment");

        let environment_id =
            EnvironmentId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let mut environment = self
            .repository
            .find_by_id(&environment_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Environment '{}' not found", id)))?;

        if let Some(name) = request.name {
            environment
                .set_name(&name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(description) = request.description {
            environment.set_description(Some(description));
        }

        if let Some(restrictions) = request.domain_restrictions {
            validate_domain_restrictions(&restrictions)?;
            environment.set_domain_restrictions(restrictions);
        }

        self.repository.update(environment).await
    }

    /// Delete an environment
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        info!(id = %id, "Deleting environment");

        let environment_id =
            EnvironmentId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if environment_id.as_str() == EnvironmentId::DEFAULT {
            return Err(DomainError::validation(
                "Cannot delete the default environment",
            ));
        }

        self.repository.delete(&environment_id).await
    }

    /// Ensure the default environment of an organization exists
    pub async fn ensure_default_environment(
        &self,
        organization_id: &OrganizationId,
    ) -> Result<Environment, DomainError> {
        let default_id = EnvironmentId::default_environment();

        if let Some(environment) = self.repository.find_by_id(&default_id).await? {
            return Ok(environment);
        }

        info!(organization = %organization_id, "Creating default environment");
        self.repository
            .create(Environment::default_environment(organization_id.clone()))
            .await
    }
}

/// Domain restrictions must themselves be valid hostnames
fn validate_domain_restrictions(restrictions: &[String]) -> Result<(), DomainError> {
    for restriction in restrictions {
        validate_host(restriction).map_err(|_| {
            DomainError::validation(format!(
                "Invalid domain restriction '{}': must be a valid hostname",
                restriction
            ))
        })?;
    }

    Ok(())
}
