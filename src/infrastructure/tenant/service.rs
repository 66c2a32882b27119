//! Tenant service

use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::context::ExecutionContext;
use crate::domain::tenant::{Tenant, TenantId, TenantRepository, validate_tenant_name};

/// Request for creating a new tenant
#[derive(Debug, Clone)]
pub struct CreateTenantRequest {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Request for updating a tenant
#[derive(Debug, Clone, Default)]
pub struct UpdateTenantRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Tenant service
#[derive(Debug)]
pub struct TenantService<R: TenantRepository> {
    repository: Arc<R>,
}

impl<R: TenantRepository> TenantService<R> {
    /// Create a new tenant service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new tenant in the context's environment
    pub async fn create(
        &self,
        ctx: &ExecutionContext,
        request: CreateTenantRequest,
    ) -> Result<Tenant, DomainError> {
        info!(context = %ctx, id = %request.id, "Creating tenant");

        validate_tenant_name(&request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let tenant_id =
            TenantId::new(&request.id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if self.repository.exists(&tenant_id).await? {
            return Err(DomainError::conflict(format!(
                "Tenant '{}' already exists",
                request.id
            )));
        }

        let mut tenant = Tenant::new(tenant_id, ctx.environment_id().clone(), &request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(description) = request.description {
            tenant.set_description(Some(description));
        }

        self.repository.create(tenant).await
    }

    /// Get a tenant by ID, scoped to the context's environment
    pub async fn get(
        &self,
        ctx: &ExecutionContext,
        id: &str,
    ) -> Result<Option<Tenant>, DomainError> {
        let tenant_id = TenantId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        Ok(self
            .repository
            .find_by_id(&tenant_id)
            .await?
            .filter(|tenant| tenant.environment_id() == ctx.environment_id()))
    }

    /// List the tenants of the context's environment
    pub async fn list(&self, ctx: &ExecutionContext) -> Result<Vec<Tenant>, DomainError> {
        self.repository.find_by_environment(ctx.environment_id()).await
    }

    /// Update a tenant
    pub async fn update(
        &self,
        ctx: &ExecutionContext,
        id: &str,
        request: UpdateTenantRequest,
    ) -> Result<Tenant, DomainError> {
        info!(context = %ctx, id = %id, "Updating tenant");

        let mut tenant = self
            .get(ctx, id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Tenant '{}' not found", id)))?;

        if let Some(name) = request.name {
            tenant
                .set_name(&name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(description) = request.description {
            tenant.set_description(Some(description));
        }

        self.repository.update(tenant).await
    }

    /// Delete a tenant
    pub async fn delete(&self, ctx: &ExecutionContext, id: &str) -> Result<bool, DomainError> {
        info!(context = %ctx, id = %id, "Deleting tenant");

        match self.get(ctx, id).await? {
            Some(tenant) => self.repository.delete(tenant.id()).await,
            None => Ok(false),
        }
    }
}
