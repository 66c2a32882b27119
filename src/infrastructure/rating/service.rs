//! Rating service

use std::sync::Arc;

use tracing::info;

use crate::domain::DomainError;
use crate::domain::api::ApiId;
use crate::domain::context::ExecutionContext;
use crate::domain::parameter::{ParameterKey, ParameterRepository};
use crate::domain::rating::{Rating, RatingRepository};
use crate::infrastructure::parameter::ParameterService;

/// Request for rating an API
#[derive(Debug, Clone)]
pub struct CreateRatingRequest {
    pub api_id: String,
    pub rate: u8,
    pub title: Option<String>,
    pub comment: Option<String>,
}

/// Rating service
///
/// The whole feature can be switched off with the `portal.rating.enabled`
/// console parameter.
#[derive(Debug)]
pub struct RatingService<R: RatingRepository, P: ParameterRepository> {
    repository: Arc<R>,
    parameters: Arc<ParameterService<P>>,
}

impl<R: RatingRepository, P: ParameterRepository> RatingService<R, P> {
    /// Create a new rating service
    pub fn new(repository: Arc<R>, parameters: Arc<ParameterService<P>>) -> Self {
        Self {
            repository,
            parameters,
        }
    }

    /// Rate an API on behalf of a user
    ///
    /// A user can rate a given API only once.
    pub async fn create(
        &self,
        ctx: &ExecutionContext,
        user: &str,
        request: CreateRatingRequest,
    ) -> Result<Rating, DomainError> {
        info!(context = %ctx, user = %user, api = %request.api_id, "Creating rating");

        self.check_enabled(ctx).await?;

        let api_id = ApiId::parse(&request.api_id)
            .map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if self
            .repository
            .find_by_api_and_user(&api_id, user)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict(format!(
                "User '{}' has already rated API '{}'",
                user, request.api_id
            )));
        }

        let mut rating = Rating::new(api_id, user, request.rate)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(title) = request.title {
            rating = rating
                .with_title(title)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(comment) = request.comment {
            rating = rating
                .with_comment(comment)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        self.repository.create(rating).await
    }

    /// List the ratings of an API, newest first
    pub async fn list(
        &self,
        ctx: &ExecutionContext,
        api_id: &str,
    ) -> Result<Vec<Rating>, DomainError> {
        self.check_enabled(ctx).await?;

        let api_id =
            ApiId::parse(api_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.repository.find_by_api(&api_id).await
    }

    /// Change the rate a user gave to an API
    pub async fn update_rate(
        &self,
        ctx: &ExecutionContext,
        user: &str,
        api_id: &str,
        rate: u8,
    ) -> Result<Rating, DomainError> {
        info!(context = %ctx, user = %user, api = %api_id, "Updating rating");

        self.check_enabled(ctx).await?;

        let api_id =
            ApiId::parse(api_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let mut rating = self
            .repository
            .find_by_api_and_user(&api_id, user)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!("User '{}' has not rated this API", user))
            })?;

        rating
            .set_rate(rate)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.update(rating).await
    }

    /// Delete the rating a user gave to an API
    pub async fn delete(
        &self,
        ctx: &ExecutionContext,
        user: &str,
        api_id: &str,
    ) -> Result<bool, DomainError> {
        info!(context = %ctx, user = %user, api = %api_id, "Deleting rating");

        self.check_enabled(ctx).await?;

        let api_id =
            ApiId::parse(api_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        match self.repository.find_by_api_and_user(&api_id, user).await? {
            Some(rating) => self.repository.delete(rating.id()).await,
            None => Ok(false),
        }
    }

    /// Average rate of an API, or `None` when it has no ratings
    pub async fn average(
        &self,
        ctx: &ExecutionContext,
        api_id: &str,
    ) -> Result<Option<f64>, DomainError> {
        self.check_enabled(ctx).await?;

        let api_id =
            ApiId::parse(api_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        let ratings = self.repository.find_by_api(&api_id).await?;

        if ratings.is_empty() {
            return Ok(None);
        }

        let sum: u32 = ratings.iter().map(|rating| u32::from(rating.rate())).sum();
        Ok(Some(f64::from(sum) / ratings.len() as f64))
    }

    async fn check_enabled(&self, ctx: &ExecutionContext) -> Result<(), DomainError> {
        let enabled = self
            .parameters
            .find_as_bool(ctx, ParameterKey::RatingEnabled)
            .await?;

        if !enabled {
            return Err(DomainError::validation(
                "The rating feature is disabled on this environment",
            ));
        }

        Ok(())
    }
}
