//! Rating repository trait

use async_trait::async_trait;

use super::entity::{Rating, RatingId};
use crate::domain::DomainError;
use crate::domain::api::ApiId;

/// Repository for managing API ratings
#[async_trait]
pub trait RatingRepository: Send + Sync + std::fmt::Debug {
    /// Get a rating by ID
    async fn find_by_id(&self, id: &RatingId) -> Result<Option<Rating>, DomainError>;

    /// List the ratings of an API
    async fn find_by_api(&self, api_id: &ApiId) -> Result<Vec<Rating>, DomainError>;

    /// Get the rating a user gave to an API, if any
    async fn find_by_api_and_user(
        &self,
        api_id: &ApiId,
        user: &str,
    ) -> Result<Option<Rating>, DomainError>;

    /// Create a new rating
    async fn create(&self, rating: Rating) -> Result<Rating, DomainError>;

    /// Update an existing rating
    async fn update(&self, rating: Rating) -> Result<Rating, DomainError>;

    /// Delete a rating by ID
    async fn delete(&self, id: &RatingId) -> Result<bool, DomainError>;
}
