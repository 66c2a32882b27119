//! APIM Console
//!
//! Service layer of an API-management console:
//! - API lifecycle with virtual host and context path collision checking
//! - Organizations, environments and tenants
//! - Typed console parameters with environment overrides
//! - Personal access tokens and API ratings
//! - Plugin descriptor registry (policies, resources, notifiers)

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use domain::context::ExecutionContext;
use domain::environment::EnvironmentId;
use domain::organization::OrganizationId;
use domain::plugin::{PluginDescriptor, PluginKind};
use infrastructure::api::{ApiService, InMemoryApiRepository};
use infrastructure::environment::{
    CreateEnvironmentRequest, EnvironmentService, InMemoryEnvironmentRepository,
};
use infrastructure::organization::{
    CreateOrganizationRequest, InMemoryOrganizationRepository, OrganizationService,
};
use infrastructure::parameter::{InMemoryParameterRepository, ParameterService};
use infrastructure::plugin::PluginRegistry;
use infrastructure::rating::{InMemoryRatingRepository, RatingService};
use infrastructure::tenant::{InMemoryTenantRepository, TenantService};
use infrastructure::token::{InMemoryTokenRepository, TokenService};

/// All console services, wired against in-memory repositories
pub struct ServiceRegistry {
    pub organizations: Arc<OrganizationService<InMemoryOrganizationRepository>>,
    pub environments:
        Arc<EnvironmentService<InMemoryEnvironmentRepository, InMemoryOrganizationRepository>>,
    pub apis: Arc<ApiService<InMemoryApiRepository, InMemoryEnvironmentRepository>>,
    pub tenants: Arc<TenantService<InMemoryTenantRepository>>,
    pub parameters: Arc<ParameterService<InMemoryParameterRepository>>,
    pub tokens: Arc<TokenService<InMemoryTokenRepository>>,
    pub ratings: Arc<RatingService<InMemoryRatingRepository, InMemoryParameterRepository>>,
    pub plugins: Arc<PluginRegistry>,
    default_context: ExecutionContext,
}

impl ServiceRegistry {
    /// Context for the organization and environment seeded at startup
    pub fn default_context(&self) -> &ExecutionContext {
        &self.default_context
    }
}

/// Create the service registry with the default configuration
pub async fn create_default_services() -> anyhow::Result<ServiceRegistry> {
    create_services(&AppConfig::default()).await
}

/// Create the service registry with a custom configuration
pub async fn create_services(config: &AppConfig) -> anyhow::Result<ServiceRegistry> {
    let organization_repository = Arc::new(InMemoryOrganizationRepository::new());
    let environment_repository = Arc::new(InMemoryEnvironmentRepository::new());
    let api_repository = Arc::new(InMemoryApiRepository::new());
    let tenant_repository = Arc::new(InMemoryTenantRepository::new());
    let parameter_repository = Arc::new(InMemoryParameterRepository::new());
    let token_repository = Arc::new(InMemoryTokenRepository::new());
    let rating_repository = Arc::new(InMemoryRatingRepository::new());

    let organizations = Arc::new(OrganizationService::new(organization_repository.clone()));
    let environments = Arc::new(EnvironmentService::new(
        environment_repository.clone(),
        organization_repository,
    ));
    let apis = Arc::new(ApiService::new(api_repository, environment_repository));
    let tenants = Arc::new(TenantService::new(tenant_repository));
    let parameters = Arc::new(ParameterService::new(parameter_repository));
    let tokens = Arc::new(TokenService::new(token_repository));
    let ratings = Arc::new(RatingService::new(rating_repository, parameters.clone()));

    let plugins = Arc::new(PluginRegistry::new());
    register_builtin_plugins(&plugins).await?;

    let default_context =
        seed_default_context(config, &organizations, &environments).await?;

    info!(context = %default_context, "Console services initialized");

    Ok(ServiceRegistry {
        organizations,
        environments,
        apis,
        tenants,
        parameters,
        tokens,
        ratings,
        plugins,
        default_context,
    })
}

/// Ensure the configured default organization and environment exist
async fn seed_default_context(
    config: &AppConfig,
    organizations: &OrganizationService<InMemoryOrganizationRepository>,
    environments: &EnvironmentService<
        InMemoryEnvironmentRepository,
        InMemoryOrganizationRepository,
    >,
) -> anyhow::Result<ExecutionContext> {
    let organization_id = OrganizationId::new(&config.console.default_organization)?;

    if organizations.get(organization_id.as_str()).await?.is_none() {
        info!(id = %organization_id, "Seeding default organization");
        organizations
            .create(CreateOrganizationRequest {
                id: organization_id.as_str().to_string(),
                name: "Default organization".to_string(),
                description: Some("Created at startup".to_string()),
            })
            .await?;
    }

    let environment_id = EnvironmentId::new(&config.console.default_environment)?;

    if environments.get(environment_id.as_str()).await?.is_none() {
        info!(id = %environment_id, "Seeding default environment");
        environments
            .create(CreateEnvironmentRequest {
                id: environment_id.as_str().to_string(),
                organization_id: organization_id.clone(),
                name: "Default environment".to_string(),
                description: Some("Created at startup".to_string()),
                domain_restrictions: Vec::new(),
            })
            .await?;
    }

    Ok(ExecutionContext::new(organization_id, environment_id))
}

/// Register the descriptors of the built-in plugins
async fn register_builtin_plugins(registry: &PluginRegistry) -> anyhow::Result<()> {
    let descriptors = vec![
        PluginDescriptor::new("api-key", PluginKind::Policy, "API Key", "2.0.0")?
            .with_description("Enforces API key authentication"),
        PluginDescriptor::new("rate-limit", PluginKind::Policy, "Rate Limit", "2.1.0")?
            .with_description("Limits request rates per consumer"),
        PluginDescriptor::new(
            "transform-headers",
            PluginKind::Policy,
            "Transform Headers",
            "1.4.0",
        )?
        .with_description("Adds, renames or removes HTTP headers"),
        PluginDescriptor::new("cache-memory", PluginKind::Resource, "In-Memory Cache", "1.0.0")?
            .with_description("Response cache held in gateway memory"),
        PluginDescriptor::new(
            "oauth2-server",
            PluginKind::Resource,
            "OAuth2 Authorization Server",
            "3.2.1",
        )?
        .with_description("Token introspection against an OAuth2 server"),
        PluginDescriptor::new("notifier-email", PluginKind::Notifier, "Email Notifier", "1.2.0")?
            .with_description("Delivers notifications by email"),
        PluginDescriptor::new(
            "notifier-webhook",
            PluginKind::Notifier,
            "Webhook Notifier",
            "1.1.0",
        )?
        .with_description("Delivers notifications to an HTTP endpoint"),
    ];

    for descriptor in descriptors {
        registry.register(descriptor).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::api::VirtualHost;
    use crate::infrastructure::api::CreateApiRequest;

    #[tokio::test]
    async fn test_create_default_services_seeds_context() {
        let registry = create_default_services().await.unwrap();
        let ctx = registry.default_context();

        assert_eq!(ctx.organization_id().as_str(), "default");
        assert_eq!(ctx.environment_id().as_str(), "default");

        let organization = registry.organizations.get("default").await.unwrap();
        assert!(organization.is_some());

        let environment = registry.environments.get("default").await.unwrap();
        assert!(environment.is_some());
    }

    #[tokio::test]
    async fn test_builtin_plugins_are_registered() {
        let registry = create_default_services().await.unwrap();

        let policies = registry.plugins.list_by_kind(PluginKind::Policy).await;
        assert_eq!(policies.len(), 3);

        let notifiers = registry.plugins.list_by_kind(PluginKind::Notifier).await;
        assert_eq!(notifiers.len(), 2);

        assert!(registry.plugins.find("rate-limit").await.is_some());
    }

    #[tokio::test]
    async fn test_custom_default_context() {
        let mut config = AppConfig::default();
        config.console.default_organization = "acme".to_string();
        config.console.default_environment = "staging".to_string();

        let registry = create_services(&config).await.unwrap();
        let ctx = registry.default_context();

        assert_eq!(ctx.organization_id().as_str(), "acme");
        assert_eq!(ctx.environment_id().as_str(), "staging");
        assert!(registry.environments.get("staging").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_api_creation_through_registry() {
        let registry = create_default_services().await.unwrap();
        let ctx = registry.default_context().clone();

        let api = registry
            .apis
            .create(
                &ctx,
                CreateApiRequest {
                    name: "Store API".to_string(),
                    version: "1.0.0".to_string(),
                    description: None,
                    virtual_hosts: vec![VirtualHost::path_only("/store")],
                    endpoints: Vec::new(),
                },
            )
            .await
            .unwrap();

        // A second API on an overlapping path is rejected
        let conflict = registry
            .apis
            .create(
                &ctx,
                CreateApiRequest {
                    name: "Other API".to_string(),
                    version: "1.0.0".to_string(),
                    description: None,
                    virtual_hosts: vec![VirtualHost::path_only("/store/v2")],
                    endpoints: Vec::new(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(conflict.conflicting_path(), Some("/store/v2/"));
        assert!(
            registry
                .apis
                .get(&ctx, api.id().as_str())
                .await
                .unwrap()
                .is_some()
        );
    }
}
