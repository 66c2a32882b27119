//! Rating entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{
    RatingValidationError, validate_rate, validate_rating_comment, validate_rating_title,
};
use crate::domain::api::ApiId;

/// Rating identifier - a UUID in canonical hyphenated form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RatingId(String);

impl RatingId {
    /// Generate a fresh random identifier
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RatingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user's rating of an API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rating {
    /// Unique identifier
    id: RatingId,
    /// Rated API
    api_id: ApiId,
    /// Rating author
    user: String,
    /// Rate between 1 and 5
    rate: u8,
    /// Optional title
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    /// Optional comment
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Rating {
    /// Create a new rating
    pub fn new(
        api_id: ApiId,
        user: impl Into<String>,
        rate: u8,
    ) -> Result<Self, RatingValidationError> {
        let user = user.into();
        if user.trim().is_empty() {
            return Err(RatingValidationError::EmptyUser);
        }

        validate_rate(rate)?;
        let now = Utc::now();

        Ok(Self {
            id: RatingId::random(),
            api_id,
            user,
            rate,
            title: None,
            comment: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set title (builder pattern)
    pub fn with_title(mut self, title: impl Into<String>) -> Result<Self, RatingValidationError> {
        let title = title.into();
        validate_rating_title(&title)?;
        self.title = Some(title);
        Ok(self)
    }

    /// Set comment (builder pattern)
    pub fn with_comment(
        mut self,
        comment: impl Into<String>,
    ) -> Result<Self, RatingValidationError> {
        let comment = comment.into();
        validate_rating_comment(&comment)?;
        self.comment = Some(comment);
        Ok(self)
    }

    // Getters

    pub fn id(&self) -> &RatingId {
        &self.id
    }

    pub fn api_id(&self) -> &ApiId {
        &self.api_id
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn rate(&self) -> u8 {
        self.rate
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Update the rate
    pub fn set_rate(&mut self, rate: u8) -> Result<(), RatingValidationError> {
        validate_rate(rate)?;
        self.rate = rate;
        self.touch();
        Ok(())
    }

    /// Update the comment
    pub fn set_comment(&mut self, comment: Option<String>) -> Result<(), RatingValidationError> {
        if let Some(ref comment) = comment {
            validate_rating_comment(comment)?;
        }
        self.comment = comment;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
