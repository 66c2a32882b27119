//! Rating domain

mod entity;
mod repository;
mod validation;

pub use entity::{Rating, RatingId};
pub use repository::RatingRepository;
pub use validation::{
    MAX_RATE, MIN_RATE, RatingValidationError, validate_rate, validate_rating_comment,
    validate_rating_title,
};
