//! Rating validation utilities

use std::fmt;

/// Minimum allowed rate value
pub const MIN_RATE: u8 = 1;
/// Maximum allowed rate value
pub const MAX_RATE: u8 = 5;
/// Maximum length for rating titles
pub const MAX_RATING_TITLE_LENGTH: usize = 100;
/// Maximum length for rating comments
pub const MAX_RATING_COMMENT_LENGTH: usize = 2000;

/// Rating validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum RatingValidationError {
    /// Rate outside the allowed range
    RateOutOfRange { value: u8 },
    /// User field is empty
    EmptyUser,
    /// Title exceeds maximum length
    TitleTooLong { length: usize, max: usize },
    /// Comment exceeds maximum length
    CommentTooLong { length: usize, max: usize },
}

impl fmt::Display for RatingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateOutOfRange { value } => {
                write!(
                    f,
                    "Rate {} out of range: must be between {} and {}",
                    value, MIN_RATE, MAX_RATE
                )
            }
            Self::EmptyUser => write!(f, "Rating user cannot be empty"),
            Self::TitleTooLong { length, max } => {
                write!(f, "Rating title too long: {} characters (max {})", length, max)
            }
            Self::CommentTooLong { length, max } => {
                write!(
                    f,
                    "Rating comment too long: {} characters (max {})",
                    length, max
                )
            }
        }
    }
}

impl std::error::Error for RatingValidationError {}

/// Validate a rate value
pub fn validate_rate(value: u8) -> Result<(), RatingValidationError> {
    if !(MIN_RATE..=MAX_RATE).contains(&value) {
        return Err(RatingValidationError::RateOutOfRange { value });
    }

    Ok(())
}

/// Validate an optional rating title
pub fn validate_rating_title(title: &str) -> Result<(), RatingValidationError> {
    if title.len() > MAX_RATING_TITLE_LENGTH {
        return Err(RatingValidationError::TitleTooLong {
            length: title.len(),
            max: MAX_RATING_TITLE_LENGTH,
        });
    }

    Ok(())
}

/// Validate an optional rating comment
pub fn validate_rating_comment(comment: &str) -> Result<(), RatingValidationError> {
    if comment.len() > MAX_RATING_COMMENT_LENGTH {
        return Err(RatingValidationError::CommentTooLong {
            length: comment.len(),
            max: MAX_RATING_COMMENT_LENGTH,
        });
    }

    Ok(())
}
