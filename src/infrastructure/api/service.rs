//! API service
//!
//! Orchestrates API create/update/delete for one environment. Candidate
//! virtual hosts go through host format validation, the environment's
//! domain restrictions, and the collision check before anything is
//! persisted.

use std::sync::Arc;

use tracing::info;

use super::verifier::VirtualHostVerifier;
use crate::domain::DomainError;
use crate::domain::api::{
    Api, ApiDefinition, ApiId, ApiRepository, EndpointDefinition, VirtualHost,
    check_domain_restrictions, validate_host,
};
use crate::domain::context::ExecutionContext;
use crate::domain::environment::EnvironmentRepository;

/// Request for creating a new API
#[derive(Debug, Clone)]
pub struct CreateApiRequest {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub virtual_hosts: Vec<VirtualHost>,
    pub endpoints: Vec<EndpointDefinition>,
}

/// Request for updating an API
#[derive(Debug, Clone, Default)]
pub struct UpdateApiRequest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    pub virtual_hosts: Option<Vec<VirtualHost>>,
}

/// API service
pub struct ApiService<A: ApiRepository, E: EnvironmentRepository> {
    repository: Arc<A>,
    environments: Arc<E>,
    verifier: VirtualHostVerifier<A>,
}

impl<A: ApiRepository, E: EnvironmentRepository> ApiService<A, E> {
    /// Create a new API service
    pub fn new(repository: Arc<A>, environments: Arc<E>) -> Self {
        let verifier = VirtualHostVerifier::new(repository.clone());

        Self {
            repository,
            environments,
            verifier,
        }
    }

    /// Create a new API
    pub async fn create(
        &self,
        ctx: &ExecutionContext,
        request: CreateApiRequest,
    ) -> Result<Api, DomainError> {
        info!(context = %ctx, name = %request.name, "Creating API");

        let virtual_hosts = self
            .checked_virtual_hosts(ctx, None, request.virtual_hosts)
            .await?;

        let mut definition = ApiDefinition::with_virtual_hosts(virtual_hosts);
        definition.proxy.endpoints = request.endpoints;

        let definition = definition
            .to_json()
            .map_err(|e| DomainError::internal(format!("Failed to serialize definition: {}", e)))?;

        let mut api = Api::new(
            ApiId::random(),
            ctx.environment_id().clone(),
            &request.name,
            &request.version,
            definition,
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(description) = request.description {
            api.set_description(Some(description));
        }

        self.repository.create(api).await
    }

    /// Get an API by ID, scoped to the context's environment
    pub async fn get(&self, ctx: &ExecutionContext, id: &str) -> Result<Option<Api>, DomainError> {
        let api_id = ApiId::parse(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        Ok(self
            .repository
            .find_by_id(&api_id)
            .await?
            .filter(|api| api.environment_id() == ctx.environment_id()))
    }

    /// List the APIs of the context's environment
    pub async fn list(&self, ctx: &ExecutionContext) -> Result<Vec<Api>, DomainError> {
        self.repository.find_by_environment(ctx.environment_id()).await
    }

    /// Update an API
    pub async fn update(
        &self,
        ctx: &ExecutionContext,
        id: &str,
        request: UpdateApiRequest,
    ) -> Result<Api, DomainError> {
        info!(context = %ctx, id = %id, "Updating API");

        let mut api = self
            .get(ctx, id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("API '{}' not found", id)))?;

        if let Some(name) = request.name {
            api.set_name(&name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(version) = request.version {
            api.set_version(&version)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(description) = request.description {
            api.set_description(Some(description));
        }

        if let Some(virtual_hosts) = request.virtual_hosts {
            let checked = self
                .checked_virtual_hosts(ctx, Some(api.id()), virtual_hosts)
                .await?;

            let mut definition =
                ApiDefinition::from_json(api.definition()).unwrap_or_default();
            definition.set_virtual_hosts(checked);

            let definition = definition.to_json().map_err(|e| {
                DomainError::internal(format!("Failed to serialize definition: {}", e))
            })?;
            api.set_definition(definition);
        }

        self.repository.update(api).await
    }

    /// Delete an API
    pub async fn delete(&self, ctx: &ExecutionContext, id: &str) -> Result<bool, DomainError> {
        info!(context = %ctx, id = %id, "Deleting API");

        match self.get(ctx, id).await? {
            Some(api) => self.repository.delete(api.id()).await,
            None => Ok(false),
        }
    }

    /// Validate candidate virtual hosts and return their sanitized form
    async fn checked_virtual_hosts(
        &self,
        ctx: &ExecutionContext,
        api_id: Option<&ApiId>,
        virtual_hosts: Vec<VirtualHost>,
    ) -> Result<Vec<VirtualHost>, DomainError> {
        if virtual_hosts.is_empty() {
            return Err(DomainError::validation(
                "An API requires at least one virtual host",
            ));
        }

        for virtual_host in &virtual_hosts {
            if let Some(host) = virtual_host.host() {
                validate_host(host).map_err(|e| DomainError::validation(e.to_string()))?;
            }
        }

        let environment = self
            .environments
            .find_by_id(ctx.environment_id())
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Environment '{}' not found",
                    ctx.environment_id()
                ))
            })?;

        check_domain_restrictions(&virtual_hosts, environment.domain_restrictions())
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.verifier.sanitize_and_check(api_id, virtual_hosts).await
    }
}
