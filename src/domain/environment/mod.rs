//! Environment domain

mod entity;
mod repository;
mod validation;

pub use entity::{Environment, EnvironmentId};
pub use repository::EnvironmentRepository;
pub use validation::{
    EnvironmentValidationError, validate_environment_id, validate_environment_name,
};
