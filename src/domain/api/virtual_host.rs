//! Virtual hosts and context path normalization
//!
//! A virtual host is an optional hostname plus a context path. An absent
//! host means the API answers on its path whatever the inbound host is;
//! a present host scopes the path to that host.

use serde::{Deserialize, Serialize};

use super::validation::ApiValidationError;

/// One entry point under which an API is reachable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualHost {
    /// Optional hostname; absent means path-only routing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Context path
    #[serde(default = "root_path")]
    pub path: String,
}

fn root_path() -> String {
    "/".to_string()
}

impl VirtualHost {
    /// Create a virtual host scoped to a hostname
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            path: path.into(),
        }
    }

    /// Create a host-less (path-only) virtual host
    pub fn path_only(path: impl Into<String>) -> Self {
        Self {
            host: None,
            path: path.into(),
        }
    }

    /// The host, with empty or blank values treated as absent
    pub fn host(&self) -> Option<&str> {
        self.host
            .as_deref()
            .map(str::trim)
            .filter(|host| !host.is_empty())
    }

    /// Returns this virtual host with its path normalized
    ///
    /// The host is carried over unchanged; blank hosts become absent.
    pub fn sanitized(self) -> Self {
        let host = self
            .host
            .filter(|host| !host.trim().is_empty());

        Self {
            host,
            path: normalize_path(&self.path),
        }
    }
}

impl std::fmt::Display for VirtualHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.host() {
            Some(host) => write!(f, "{}{}", host, self.path),
            None => write!(f, "{}", self.path),
        }
    }
}

/// Normalize a context path for comparison
///
/// The result is `/` for an empty input, always starts and ends with a
/// single `/`, and never contains consecutive slashes.
pub fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return root_path();
    }

    let mut path = String::with_capacity(trimmed.len() + 2);
    path.push('/');

    for ch in trimmed.chars() {
        if ch == '/' && path.ends_with('/') {
            continue;
        }
        path.push(ch);
    }

    if !path.ends_with('/') {
        path.push('/');
    }

    path
}

/// Check candidate hosts against an environment's domain restrictions
///
/// With no restrictions configured every host is accepted. Otherwise each
/// candidate host (port excluded) must equal one of the restricted domains
/// or be a subdomain of one. Host-less virtual hosts are not constrained.
pub fn check_domain_restrictions(
    virtual_hosts: &[VirtualHost],
    restrictions: &[String],
) -> Result<(), ApiValidationError> {
    if restrictions.is_empty() {
        return Ok(());
    }

    for virtual_host in virtual_hosts {
        if let Some(host) = virtual_host.host() {
            let bare_host = host.split(':').next().unwrap_or(host);

            let allowed = restrictions.iter().any(|restriction| {
                bare_host == restriction || bare_host.ends_with(&format!(".{}", restriction))
            });

            if !allowed {
                return Err(ApiValidationError::HostNotAllowed {
                    host: host.to_string(),
                });
            }
        }
    }

    Ok(())
}
