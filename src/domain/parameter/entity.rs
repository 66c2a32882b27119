//! Console parameters
//!
//! Every tunable console setting is declared in the static [`ParameterKey`]
//! table together with its storage key, value type and default. Values are
//! resolved with the precedence: process environment variable override,
//! then per-environment stored override, then the declared default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::environment::EnvironmentId;

/// The declared type of a parameter value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    Bool,
    Int,
    Str,
    /// Comma-separated values
    List,
    /// Comma-separated `key=value` pairs
    Map,
}

/// A console parameter known to the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKey {
    /// Public URL of the developer portal
    PortalUrl,
    /// Title shown in the console header
    ConsoleTitle,
    /// Whether the console is in maintenance mode
    MaintenanceMode,
    /// Whether API ratings are enabled
    RatingEnabled,
    /// Whether APIs must be reviewed before publication
    ApiReviewEnabled,
    /// Page size for portal API listings
    PortalPageSize,
    /// Origins allowed to call the console
    ConsoleAllowedOrigins,
    /// Weights used to score API documentation quality
    ApiQualityWeights,
}

impl ParameterKey {
    /// Every declared parameter
    pub const ALL: &'static [ParameterKey] = &[
        Self::PortalUrl,
        Self::ConsoleTitle,
        Self::MaintenanceMode,
        Self::RatingEnabled,
        Self::ApiReviewEnabled,
        Self::PortalPageSize,
        Self::ConsoleAllowedOrigins,
        Self::ApiQualityWeights,
    ];

    /// The storage key of this parameter
    pub const fn key(self) -> &'static str {
        match self {
            Self::PortalUrl => "portal.url",
            Self::ConsoleTitle => "console.title",
            Self::MaintenanceMode => "maintenance.mode",
            Self::RatingEnabled => "portal.rating.enabled",
            Self::ApiReviewEnabled => "api.review.enabled",
            Self::PortalPageSize => "portal.pagesize",
            Self::ConsoleAllowedOrigins => "console.allowed-origins",
            Self::ApiQualityWeights => "api.quality.weights",
        }
    }

    /// The declared value type of this parameter
    pub const fn value_type(self) -> ParameterType {
        match self {
            Self::PortalUrl | Self::ConsoleTitle => ParameterType::Str,
            Self::MaintenanceMode | Self::RatingEnabled | Self::ApiReviewEnabled => {
                ParameterType::Bool
            }
            Self::PortalPageSize => ParameterType::Int,
            Self::ConsoleAllowedOrigins => ParameterType::List,
            Self::ApiQualityWeights => ParameterType::Map,
        }
    }

    /// The default value used when no override is stored
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::PortalUrl => "http://localhost:4100",
            Self::ConsoleTitle => "API Management",
            Self::MaintenanceMode => "false",
            Self::RatingEnabled => "true",
            Self::ApiReviewEnabled => "false",
            Self::PortalPageSize => "10",
            Self::ConsoleAllowedOrigins => "*",
            Self::ApiQualityWeights => "description=25,labels=10,logo=5,views=15",
        }
    }

    /// The process environment variable overriding this parameter
    pub fn env_var(self) -> String {
        let mut name = String::from("APIM_");

        for ch in self.key().chars() {
            match ch {
                '.' | '-' => name.push('_'),
                _ => name.push(ch.to_ascii_uppercase()),
            }
        }

        name
    }

    /// Look up a declared parameter by its storage key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.key() == key)
    }
}

impl std::fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A stored per-environment parameter override
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterOverride {
    /// Environment the override applies to
    environment_id: EnvironmentId,
    /// Storage key of the overridden parameter
    key: String,
    /// Raw value; coercion happens at read time
    value: String,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl ParameterOverride {
    /// Create a new override
    pub fn new(
        environment_id: EnvironmentId,
        key: ParameterKey,
        value: impl Into<String>,
    ) -> Self {
        Self {
            environment_id,
            key: key.key().to_string(),
            value: value.into(),
            updated_at: Utc::now(),
        }
    }

    pub fn environment_id(&self) -> &EnvironmentId {
        &self.environment_id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Replace the raw value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_parameter_is_declared_once() {
        for parameter in ParameterKey::ALL {
            assert_eq!(ParameterKey::from_key(parameter.key()), Some(*parameter));
        }
    }

    #[test]
    fn test_from_key_unknown() {
        assert_eq!(ParameterKey::from_key("no.such.parameter"), None);
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(ParameterKey::PortalUrl.env_var(), "APIM_PORTAL_URL");
        assert_eq!(
            ParameterKey::RatingEnabled.env_var(),
            "APIM_PORTAL_RATING_ENABLED"
        );
        assert_eq!(
            ParameterKey::ConsoleAllowedOrigins.env_var(),
            "APIM_CONSOLE_ALLOWED_ORIGINS"
        );
    }

    #[test]
    fn test_defaults_match_declared_types() {
        for parameter in ParameterKey::ALL {
            let default = parameter.default_value();

            match parameter.value_type() {
                ParameterType::Bool => {
                    assert!(default == "true" || default == "false");
                }
                ParameterType::Int => {
                    assert!(default.parse::<i64>().is_ok());
                }
                ParameterType::Map => {
                    for pair in default.split(',') {
                        assert!(pair.contains('='), "malformed map default: {}", default);
                    }
                }
                ParameterType::Str | ParameterType::List => {
                    assert!(!default.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_override_round_trip() {
        let mut parameter = ParameterOverride::new(
            EnvironmentId::default_environment(),
            ParameterKey::ConsoleTitle,
            "Partner console",
        );

        assert_eq!(parameter.key(), "console.title");
        assert_eq!(parameter.value(), "Partner console");

        parameter.set_value("Internal console");
        assert_eq!(parameter.value(), "Internal console");
    }
}
