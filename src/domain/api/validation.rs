//! API validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Maximum length for API names
pub const MAX_API_NAME_LENGTH: usize = 100;

static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9._-]{0,31}$").unwrap());

/// Hostname, optionally with a port
static HOST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]*[a-zA-Z0-9])?)*(:[0-9]{1,5})?$",
    )
    .unwrap()
});

/// Errors that can occur during API validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiValidationError {
    #[error("API name cannot be empty")]
    EmptyName,

    #[error("API name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("API version cannot be empty")]
    EmptyVersion,

    #[error("Invalid API version '{version}': must be alphanumeric with dots, dashes or underscores")]
    InvalidVersion { version: String },

    #[error("Invalid API ID '{id}': must be a UUID")]
    InvalidId { id: String },

    #[error("Invalid virtual host '{host}': must be a valid hostname")]
    InvalidHost { host: String },

    #[error("Host '{host}' must end with one of the environment domain restrictions")]
    HostNotAllowed { host: String },
}

/// Validate an API display name
pub fn validate_api_name(name: &str) -> Result<(), ApiValidationError> {
    if name.trim().is_empty() {
        return Err(ApiValidationError::EmptyName);
    }

    if name.len() > MAX_API_NAME_LENGTH {
        return Err(ApiValidationError::NameTooLong(MAX_API_NAME_LENGTH));
    }

    Ok(())
}

/// Validate an API version string
pub fn validate_api_version(version: &str) -> Result<(), ApiValidationError> {
    if version.is_empty() {
        return Err(ApiValidationError::EmptyVersion);
    }

    if !VERSION_PATTERN.is_match(version) {
        return Err(ApiValidationError::InvalidVersion {
            version: version.to_string(),
        });
    }

    Ok(())
}

/// Validate the host part of a virtual host
pub fn validate_host(host: &str) -> Result<(), ApiValidationError> {
    if !HOST_PATTERN.is_match(host) {
        return Err(ApiValidationError::InvalidHost {
            host: host.to_string(),
        });
    }

    Ok(())
}
