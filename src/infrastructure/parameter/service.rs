//! Parameter service
//!
//! Resolves console parameters with the precedence: process environment
//! variable, stored per-environment override, declared default.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::context::ExecutionContext;
use crate::domain::parameter::{
    ParameterKey, ParameterOverride, ParameterRepository, ParameterType,
};

/// Parameter service
#[derive(Debug)]
pub struct ParameterService<R: ParameterRepository> {
    repository: Arc<R>,
}

impl<R: ParameterRepository> ParameterService<R> {
    /// Create a new parameter service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolve the raw value of a parameter
    pub async fn find(
        &self,
        ctx: &ExecutionContext,
        key: ParameterKey,
    ) -> Result<String, DomainError> {
        let stored = self
            .repository
            .find(ctx.environment_id(), key.key())
            .await?
            .map(|parameter| parameter.value().to_string());

        Ok(resolve(std::env::var(key.env_var()).ok(), stored, key))
    }

    /// Resolve a boolean parameter
    pub async fn find_as_bool(
        &self,
        ctx: &ExecutionContext,
        key: ParameterKey,
    ) -> Result<bool, DomainError> {
        let value = self.find(ctx, key).await?;
        parse_bool(&value)
            .ok_or_else(|| coercion_error(key, &value, "a boolean"))
    }

    /// Resolve an integer parameter
    pub async fn find_as_int(
        &self,
        ctx: &ExecutionContext,
        key: ParameterKey,
    ) -> Result<i64, DomainError> {
        let value = self.find(ctx, key).await?;
        value
            .trim()
            .parse()
            .map_err(|_| coercion_error(key, &value, "an integer"))
    }

    /// Resolve a list parameter (comma-separated values)
    pub async fn find_as_list(
        &self,
        ctx: &ExecutionContext,
        key: ParameterKey,
    ) -> Result<Vec<String>, DomainError> {
        let value = self.find(ctx, key).await?;
        Ok(parse_list(&value))
    }

    /// Resolve a map parameter (comma-separated `key=value` pairs)
    pub async fn find_as_map(
        &self,
        ctx: &ExecutionContext,
        key: ParameterKey,
    ) -> Result<HashMap<String, String>, DomainError> {
        let value = self.find(ctx, key).await?;
        parse_map(&value).ok_or_else(|| coercion_error(key, &value, "a key=value map"))
    }

    /// Store a per-environment override
    ///
    /// The value must already be coercible to the parameter's declared
    /// type; a malformed value is rejected instead of failing every
    /// subsequent read.
    pub async fn save(
        &self,
        ctx: &ExecutionContext,
        key: ParameterKey,
        value: &str,
    ) -> Result<ParameterOverride, DomainError> {
        info!(context = %ctx, key = %key, "Saving parameter override");

        check_value_type(key, value)?;

        self.repository
            .save(ParameterOverride::new(
                ctx.environment_id().clone(),
                key,
                value,
            ))
            .await
    }

    /// Remove a per-environment override, falling back to the default
    pub async fn reset(
        &self,
        ctx: &ExecutionContext,
        key: ParameterKey,
    ) -> Result<bool, DomainError> {
        info!(context = %ctx, key = %key, "Resetting parameter override");
        self.repository.delete(ctx.environment_id(), key.key()).await
    }

    /// List the overrides stored for the context's environment
    pub async fn list_overrides(
        &self,
        ctx: &ExecutionContext,
    ) -> Result<Vec<ParameterOverride>, DomainError> {
        self.repository.find_by_environment(ctx.environment_id()).await
    }
}

/// Precedence: environment variable, stored override, declared default
fn resolve(env_override: Option<String>, stored: Option<String>, key: ParameterKey) -> String {
    env_override
        .or(stored)
        .unwrap_or_else(|| key.default_value().to_string())
}

fn check_value_type(key: ParameterKey, value: &str) -> Result<(), DomainError> {
    match key.value_type() {
        ParameterType::Bool => {
            parse_bool(value).ok_or_else(|| coercion_error(key, value, "a boolean"))?;
        }
        ParameterType::Int => {
            value
                .trim()
                .parse::<i64>()
                .map_err(|_| coercion_error(key, value, "an integer"))?;
        }
        ParameterType::Map => {
            parse_map(value).ok_or_else(|| coercion_error(key, value, "a key=value map"))?;
        }
        ParameterType::Str | ParameterType::List => {}
    }

    Ok(())
}

fn coercion_error(key: ParameterKey, value: &str, expected: &str) -> DomainError {
    DomainError::configuration(format!(
        "Parameter '{}' is not {}: '{}'",
        key, expected, value
    ))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_map(value: &str) -> Option<HashMap<String, String>> {
    let mut map = HashMap::new();

    for pair in value.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let (key, val) = pair.split_once('=')?;
        map.insert(key.trim().to_string(), val.trim().to_string());
    }

    Some(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::parameter::InMemoryParameterRepository;

    fn create_service() -> (ParameterService<InMemoryParameterRepository>, ExecutionContext) {
        (
            ParameterService::new(Arc::new(InMemoryParameterRepository::new())),
            ExecutionContext::default_context(),
        )
    }

    #[tokio::test]
    async fn test_find_returns_default_without_override() {
        let (service, ctx) = create_service();

        let value = service.find(&ctx, ParameterKey::ConsoleTitle).await.unwrap();
        assert_eq!(value, "API Management");
    }

    #[tokio::test]
    async fn test_stored_override_wins_over_default() {
        let (service, ctx) = create_service();

        service
            .save(&ctx, ParameterKey::ConsoleTitle, "Partner console")
            .await
            .unwrap();

        let value = service.find(&ctx, ParameterKey::ConsoleTitle).await.unwrap();
        assert_eq!(value, "Partner console");
    }

    #[test]
    fn test_resolution_precedence() {
        let key = ParameterKey::ConsoleTitle;

        assert_eq!(
            resolve(Some("from env".into()), Some("stored".into()), key),
            "from env"
        );
        assert_eq!(resolve(None, Some("stored".into()), key), "stored");
        assert_eq!(resolve(None, None, key), key.default_value());
    }

    #[tokio::test]
    async fn test_find_as_bool() {
        let (service, ctx) = create_service();

        assert!(
            service
                .find_as_bool(&ctx, ParameterKey::RatingEnabled)
                .await
                .unwrap()
        );

        service
            .save(&ctx, ParameterKey::RatingEnabled, "false")
            .await
            .unwrap();

        assert!(
            !service
                .find_as_bool(&ctx, ParameterKey::RatingEnabled)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_find_as_int() {
        let (service, ctx) = create_service();

        let value = service
            .find_as_int(&ctx, ParameterKey::PortalPageSize)
            .await
            .unwrap();
        assert_eq!(value, 10);

        service
            .save(&ctx, ParameterKey::PortalPageSize, "25")
            .await
            .unwrap();

        let value = service
            .find_as_int(&ctx, ParameterKey::PortalPageSize)
            .await
            .unwrap();
        assert_eq!(value, 25);
    }

    #[tokio::test]
    async fn test_find_as_list() {
        let (service, ctx) = create_service();

        service
            .save(
                &ctx,
                ParameterKey::ConsoleAllowedOrigins,
                "https://a.com, https://b.com,",
            )
            .await
            .unwrap();

        let origins = service
            .find_as_list(&ctx, ParameterKey::ConsoleAllowedOrigins)
            .await
            .unwrap();
        assert_eq!(origins, ["https://a.com", "https://b.com"]);
    }

    #[tokio::test]
    async fn test_find_as_map() {
        let (service, ctx) = create_service();

        let weights = service
            .find_as_map(&ctx, ParameterKey::ApiQualityWeights)
            .await
            .unwrap();

        assert_eq!(weights.get("description"), Some(&"25".to_string()));
        assert_eq!(weights.get("labels"), Some(&"10".to_string()));
    }

    #[tokio::test]
    async fn test_save_rejects_mistyped_value() {
        let (service, ctx) = create_service();

        let result = service
            .save(&ctx, ParameterKey::MaintenanceMode, "maybe")
            .await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Configuration { .. }
        ));

        let result = service
            .save(&ctx, ParameterKey::PortalPageSize, "lots")
            .await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::Configuration { .. }
        ));
    }

    #[tokio::test]
    async fn test_reset_restores_default() {
        let (service, ctx) = create_service();

        service
            .save(&ctx, ParameterKey::ConsoleTitle, "Temporary")
            .await
            .unwrap();
        assert!(service.reset(&ctx, ParameterKey::ConsoleTitle).await.unwrap());

        let value = service.find(&ctx, ParameterKey::ConsoleTitle).await.unwrap();
        assert_eq!(value, "API Management");
    }

    #[tokio::test]
    async fn test_overrides_are_environment_scoped() {
        let (service, ctx) = create_service();

        service
            .save(&ctx, ParameterKey::ConsoleTitle, "Default env console")
            .await
            .unwrap();

        let other_ctx = ExecutionContext::new(
            ctx.organization_id().clone(),
            crate::domain::environment::EnvironmentId::new("prod").unwrap(),
        );

        let value = service
            .find(&other_ctx, ParameterKey::ConsoleTitle)
            .await
            .unwrap();
        assert_eq!(value, "API Management");
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" FALSE "), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn test_parse_map_malformed() {
        assert!(parse_map("a=1,b").is_none());
        assert!(parse_map("a=1,b=2").is_some());
    }
}
