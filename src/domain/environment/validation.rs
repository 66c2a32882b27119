//! Environment validation

use thiserror::Error;

/// Errors that can occur during environment validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvironmentValidationError {
    #[error("Environment ID cannot be empty")]
    EmptyId,

    #[error("Environment ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Environment ID can only contain lowercase alphanumeric characters and hyphens")]
    InvalidIdCharacters,

    #[error("Environment ID cannot start or end with a hyphen")]
    InvalidIdFormat,

    #[error("Environment name cannot be empty")]
    EmptyName,

    #[error("Environment name cannot exceed {0} characters")]
    NameTooLong(usize),
}

const MAX_ENVIRONMENT_ID_LENGTH: usize = 50;
const MAX_ENVIRONMENT_NAME_LENGTH: usize = 100;

/// Validate an environment ID
pub fn validate_environment_id(id: &str) -> Result<(), EnvironmentValidationError> {
    if id.is_empty() {
        return Err(EnvironmentValidationError::EmptyId);
    }

    if id.len() > MAX_ENVIRONMENT_ID_LENGTH {
        return Err(EnvironmentValidationError::IdTooLong(
            MAX_ENVIRONMENT_ID_LENGTH,
        ));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(EnvironmentValidationError::InvalidIdCharacters);
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(EnvironmentValidationError::InvalidIdFormat);
    }

    Ok(())
}

/// Validate an environment name
pub fn validate_environment_name(name: &str) -> Result<(), EnvironmentValidationError> {
    if name.is_empty() {
        return Err(EnvironmentValidationError::EmptyName);
    }

    if name.len() > MAX_ENVIRONMENT_NAME_LENGTH {
        return Err(EnvironmentValidationError::NameTooLong(
            MAX_ENVIRONMENT_NAME_LENGTH,
        ));
    }

    Ok(())
}
