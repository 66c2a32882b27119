//! In-memory rating repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::DomainError;
use crate::domain::api::ApiId;
use crate::domain::rating::{Rating, RatingId, RatingRepository};

/// Thread-safe in-memory rating repository
#[derive(Debug, Default)]
pub struct InMemoryRatingRepository {
    ratings: RwLock<HashMap<String, Rating>>,
}

impl InMemoryRatingRepository {
    /// Creates a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn find_by_id(&self, id: &RatingId) -> Result<Option<Rating>, DomainError> {
        let ratings = self
            .ratings
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(ratings.get(id.as_str()).cloned())
    }

    async fn find_by_api(&self, api_id: &ApiId) -> Result<Vec<Rating>, DomainError> {
        let ratings = self
            .ratings
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut result: Vec<Rating> = ratings
            .values()
            .filter(|rating| rating.api_id() == api_id)
            .cloned()
            .collect();

        result.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(result)
    }

    async fn find_by_api_and_user(
        &self,
        api_id: &ApiId,
        user: &str,
    ) -> Result<Option<Rating>, DomainError> {
        let ratings = self
            .ratings
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(ratings
            .values()
            .find(|rating| rating.api_id() == api_id && rating.user() == user)
            .cloned())
    }

    async fn create(&self, rating: Rating) -> Result<Rating, DomainError> {
        let key = rating.id().as_str().to_string();
        let mut ratings = self
            .ratings
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if ratings.contains_key(&key) {
            return Err(DomainError::conflict(format!(
                "Rating '{}' already exists",
                key
            )));
        }

        ratings.insert(key, rating.clone());
        Ok(rating)
    }

    async fn update(&self, rating: Rating) -> Result<Rating, DomainError> {
        let key = rating.id().as_str().to_string();
        let mut ratings = self
            .ratings
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !ratings.contains_key(&key) {
            return Err(DomainError::not_found(format!(
                "Rating '{}' not found",
                key
            )));
        }

        ratings.insert(key, rating.clone());
        Ok(rating)
    }

    async fn delete(&self, id: &RatingId) -> Result<bool, DomainError> {
        let mut ratings = self
            .ratings
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(ratings.remove(id.as_str()).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find_by_api_and_user() {
        let repo = InMemoryRatingRepository::new();
        let api_id = ApiId::random();

        repo.create(Rating::new(api_id.clone(), "alice", 4).unwrap())
            .await
            .unwrap();

        let rating = repo.find_by_api_and_user(&api_id, "alice").await.unwrap();
        assert_eq!(rating.unwrap().rate(), 4);

        assert!(
            repo.find_by_api_and_user(&api_id, "bob")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_find_by_api() {
        let repo = InMemoryRatingRepository::new();
        let api_id = ApiId::random();
        let other_api = ApiId::random();

        repo.create(Rating::new(api_id.clone(), "alice", 4).unwrap())
            .await
            .unwrap();
        repo.create(Rating::new(api_id.clone(), "bob", 2).unwrap())
            .await
            .unwrap();
        repo.create(Rating::new(other_api, "alice", 5).unwrap())
            .await
            .unwrap();

        let ratings = repo.find_by_api(&api_id).await.unwrap();
        assert_eq!(ratings.len(), 2);
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryRatingRepository::new();
        let rating = repo
            .create(Rating::new(ApiId::random(), "alice", 4).unwrap())
            .await
            .unwrap();

        assert!(repo.delete(rating.id()).await.unwrap());
        assert!(repo.find_by_id(rating.id()).await.unwrap().is_none());
    }
}
