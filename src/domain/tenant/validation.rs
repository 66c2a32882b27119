//! Tenant validation

use thiserror::Error;

/// Errors that can occur during tenant validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TenantValidationError {
    #[error("Tenant ID cannot be empty")]
    EmptyId,

    #[error("Tenant ID cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Tenant ID can only contain alphanumeric characters and hyphens")]
    InvalidIdCharacters,

    #[error("Tenant ID cannot start or end with a hyphen")]
    InvalidIdFormat,

    #[error("Tenant name cannot be empty")]
    EmptyName,

    #[error("Tenant name cannot exceed {0} characters")]
    NameTooLong(usize),
}

const MAX_TENANT_ID_LENGTH: usize = 50;
const MAX_TENANT_NAME_LENGTH: usize = 100;

/// Validate a tenant ID
pub fn validate_tenant_id(id: &str) -> Result<(), TenantValidationError> {
    if id.is_empty() {
        return Err(TenantValidationError::EmptyId);
    }

    if id.len() > MAX_TENANT_ID_LENGTH {
        return Err(TenantValidationError::IdTooLong(MAX_TENANT_ID_LENGTH));
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(TenantValidationError::InvalidIdCharacters);
    }

    if id.starts_with('-') || id.ends_with('-') {
        return Err(TenantValidationError::InvalidIdFormat);
    }

    Ok(())
}

/// Validate a tenant name
pub fn validate_tenant_name(name: &str) -> Result<(), TenantValidationError> {
    if name.is_empty() {
        return Err(TenantValidationError::EmptyName);
    }

    if name.len() > MAX_TENANT_NAME_LENGTH {
        return Err(TenantValidationError::NameTooLong(MAX_TENANT_NAME_LENGTH));
    }

    Ok(())
}
