//! Domain layer - Core business entities and validation

pub mod api;
pub mod context;
pub mod environment;
pub mod error;
pub mod organization;
pub mod parameter;
pub mod plugin;
pub mod rating;
pub mod tenant;
pub mod token;

pub use api::{
    Api, ApiDefinition, ApiId, ApiRecord, ApiRepository, ApiValidationError, VirtualHost,
    check_domain_restrictions, normalize_path, validate_host,
};
pub use context::ExecutionContext;
pub use environment::{Environment, EnvironmentId, EnvironmentRepository};
pub use error::DomainError;
pub use organization::{Organization, OrganizationId, OrganizationRepository};
pub use parameter::{ParameterKey, ParameterOverride, ParameterRepository, ParameterType};
pub use plugin::{PluginDescriptor, PluginKind};
pub use rating::{Rating, RatingId, RatingRepository, RatingValidationError};
pub use tenant::{Tenant, TenantId, TenantRepository, TenantValidationError};
pub use token::{PersonalToken, TokenId, TokenRepository};
