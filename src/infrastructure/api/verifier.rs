//! Virtual host collision checking
//!
//! Before an API is created or updated, its candidate virtual hosts are
//! checked against the virtual hosts every other API already declares.
//! Two entries collide when they resolve to the same host (or are both
//! host-less) and one normalized path is a string prefix of the other.
//!
//! The check reads the repository once and compares in memory. It is not
//! atomic with the write that follows: two concurrent creates with
//! colliding paths can both pass and both be persisted. Known limitation.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::DomainError;
use crate::domain::api::{ApiDefinition, ApiId, ApiRepository, VirtualHost};

/// Checks candidate virtual hosts for collisions with other APIs
pub struct VirtualHostVerifier<R: ApiRepository> {
    repository: Arc<R>,
}

impl<R: ApiRepository> VirtualHostVerifier<R> {
    /// Create a new verifier
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Sanitize candidates and fail on any collision with another API
    ///
    /// `api_id` identifies the API being updated; its own registered
    /// virtual hosts are excluded from the comparison. Pass `None` for a
    /// new API. Returns the sanitized candidates on success.
    pub async fn sanitize_and_check(
        &self,
        api_id: Option<&ApiId>,
        virtual_hosts: Vec<VirtualHost>,
    ) -> Result<Vec<VirtualHost>, DomainError> {
        let candidates: Vec<VirtualHost> = virtual_hosts
            .into_iter()
            .map(VirtualHost::sanitized)
            .collect();

        let records = self.repository.search_all().await?;
        debug!(candidates = candidates.len(), apis = records.len(), "Checking virtual hosts");

        // Registered virtual hosts of every other API, partitioned into
        // per-host path lists and a host-less path list.
        let mut paths_by_host: HashMap<String, Vec<String>> = HashMap::new();
        let mut host_less_paths: Vec<String> = Vec::new();

        for record in records {
            if api_id.is_some_and(|id| *id == record.id) {
                continue;
            }

            let definition = match ApiDefinition::from_json(&record.definition) {
                Ok(definition) => definition,
                Err(err) => {
                    error!(
                        api_id = %record.id,
                        error = %err,
                        "Skipping API with unreadable routing definition"
                    );
                    continue;
                }
            };

            for virtual_host in definition.proxy.virtual_hosts {
                let virtual_host = virtual_host.sanitized();

                match virtual_host.host() {
                    Some(host) => paths_by_host
                        .entry(host.to_string())
                        .or_default()
                        .push(virtual_host.path),
                    None => host_less_paths.push(virtual_host.path),
                }
            }
        }

        for candidate in &candidates {
            let registered = match candidate.host() {
                Some(host) => paths_by_host
                    .get(host)
                    .map(Vec::as_slice)
                    .unwrap_or_default(),
                None => host_less_paths.as_slice(),
            };

            for path in registered {
                if paths_overlap(path, &candidate.path) {
                    return Err(DomainError::context_path_conflict(&candidate.path));
                }
            }
        }

        Ok(candidates)
    }
}

/// Two normalized paths overlap when either is a string prefix of the other
///
/// Deliberately not segment-aware: `/fo/` does not overlap `/foo/`, but
/// `/store/` overlaps `/store/v2/`.
fn paths_overlap(a: &str, b: &str) -> bool {
    a.starts_with(b) || b.starts_with(a)
}
