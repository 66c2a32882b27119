//! Organization service

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::DomainError;
use crate::domain::organization::{Organization, OrganizationId, OrganizationRepository};

/// Request for creating a new organization
#[derive(Debug, Clone)]
pub struct CreateOrganizationRequest {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

/// Organization service
#[derive(Debug)]
pub struct OrganizationService<R: OrganizationRepository> {
    repository: Arc<R>,
}

impl<R: OrganizationRepository> OrganizationService<R> {
    /// Create a new organization service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new organization
    pub async fn create(
        &self,
        request: CreateOrganizationRequest,
    ) -> Result<Organization, DomainError> {
        info!(id = %request.id, "Creating organization");

        let organization_id = OrganizationId::new(&request.id)?;

        if self.repository.exists(&organization_id).await? {
            return Err(DomainError::conflict(format!(
                "Organization '{}' already exists",
                request.id
            )));
        }

        let mut organization = Organization::new(organization_id, &request.name)?;

        if let Some(description) = request.description {
            organization.set_description(Some(description));
        }

        self.repository.create(organization).await
    }

    /// Get an organization by ID
    pub async fn get(&self, id: &str) -> Result<Option<Organization>, DomainError> {
        let organization_id = OrganizationId::new(id)?;
        self.repository.find_by_id(&organization_id).await
    }

    /// List all organizations
    pub async fn list(&self) -> Result<Vec<Organization>, DomainError> {
        self.repository.list().await
    }

    /// Rename an organization
    pub async fn rename(&self, id: &str, name: &str) -> Result<Organization, DomainError> {
        info!(id = %id, "Renaming organization");

        let organization_id = OrganizationId::new(id)?;

        let mut organization = self
            .repository
            .find_by_id(&organization_id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Organization '{}' not found", id)))?;

        organization.set_name(name)?;
        self.repository.update(organization).await
    }

    /// Delete an organization
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        info!(id = %id, "Deleting organization");

        let organization_id = OrganizationId::new(id)?;

        if organization_id.as_str() == OrganizationId::DEFAULT {
            return Err(DomainError::validation(
                "Cannot delete the default organization",
            ));
        }

        self.repository.delete(&organization_id).await
    }

    /// Ensure the default organization exists
    pub async fn ensure_default_organization(&self) -> Result<Organization, DomainError> {
        let default_id = OrganizationId::default_organization();

        if let Some(organization) = self.repository.find_by_id(&default_id).await? {
            debug!("Default organization already exists");
            return Ok(organization);
        }

        info!("Creating default organization");
        self.repository
            .create(Organization::default_organization())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::organization::InMemoryOrganizationRepository;

    fn create_service() -> OrganizationService<InMemoryOrganizationRepository> {
        OrganizationService::new(Arc::new(InMemoryOrganizationRepository::new()))
    }

    #[tokio::test]
    async fn test_create_organization() {
        let service = create_service();

        let organization = service
            .create(CreateOrganizationRequest {
                id: "acme".to_string(),
                name: "Acme Corp".to_string(),
                description: Some("Partner organization".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(organization.id().as_str(), "acme");
        assert_eq!(organization.description(), Some("Partner organization"));
    }

    #[tokio::test]
    async fn test_create_duplicate_organization() {
        let service = create_service();

        let request = CreateOrganizationRequest {
            id: "acme".to_string(),
            name: "Acme Corp".to_string(),
            description: None,
        };

        service.create(request.clone()).await.unwrap();

        let result = service.create(request).await;
        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_rename_organization() {
        let service = create_service();

        service
            .create(CreateOrganizationRequest {
                id: "acme".to_string(),
                name: "Acme Corp".to_string(),
                description: None,
            })
            .await
            .unwrap();

        let renamed = service.rename("acme", "Acme Corporation").await.unwrap();
        assert_eq!(renamed.name(), "Acme Corporation");
    }

    #[tokio::test]
    async fn test_cannot_delete_default_organization() {
        let service = create_service();
        service.ensure_default_organization().await.unwrap();

        let result = service.delete(OrganizationId::DEFAULT).await;
        assert!(matches!(result.unwrap_err(), DomainError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_ensure_default_organization_is_idempotent() {
        let service = create_service();

        let first = service.ensure_default_organization().await.unwrap();
        let second = service.ensure_default_organization().await.unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(service.list().await.unwrap().len(), 1);
    }
}
