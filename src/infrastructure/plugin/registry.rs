//! Plugin registry
//!
//! Central lookup for installed plugin descriptors, indexed by ID and by
//! kind. Loading plugin code is out of scope; the console only needs to
//! list what is installed and resolve references by ID.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::info;

use crate::domain::DomainError;
use crate::domain::plugin::{PluginDescriptor, PluginKind};

/// Registry of installed plugin descriptors
#[derive(Debug, Default)]
pub struct PluginRegistry {
    /// Descriptors indexed by their ID
    descriptors: RwLock<HashMap<String, PluginDescriptor>>,
}

impl PluginRegistry {
    /// Create a new empty plugin registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plugin descriptor
    pub async fn register(&self, descriptor: PluginDescriptor) -> Result<(), DomainError> {
        let mut descriptors = self.descriptors.write().await;

        if descriptors.contains_key(descriptor.id()) {
            return Err(DomainError::conflict(format!(
                "Plugin '{}' is already registered",
                descriptor.id()
            )));
        }

        info!(
            plugin_id = %descriptor.id(),
            plugin_kind = %descriptor.kind(),
            plugin_version = %descriptor.version(),
            "Registering plugin"
        );

        descriptors.insert(descriptor.id().to_string(), descriptor);
        Ok(())
    }

    /// Get a descriptor by plugin ID
    pub async fn find(&self, plugin_id: &str) -> Option<PluginDescriptor> {
        let descriptors = self.descriptors.read().await;
        descriptors.get(plugin_id).cloned()
    }

    /// List every registered descriptor, sorted by ID
    pub async fn list(&self) -> Vec<PluginDescriptor> {
        let descriptors = self.descriptors.read().await;

        let mut result: Vec<PluginDescriptor> = descriptors.values().cloned().collect();
        result.sort_by(|a, b| a.id().cmp(b.id()));
        result
    }

    /// List the descriptors of one plugin kind, sorted by ID
    pub async fn list_by_kind(&self, kind: PluginKind) -> Vec<PluginDescriptor> {
        let descriptors = self.descriptors.read().await;

        let mut result: Vec<PluginDescriptor> = descriptors
            .values()
            .filter(|descriptor| descriptor.kind() == kind)
            .cloned()
            .collect();

        result.sort_by(|a, b| a.id().cmp(b.id()));
        result
    }

    /// Check whether a plugin is registered
    pub async fn contains(&self, plugin_id: &str) -> bool {
        let descriptors = self.descriptors.read().await;
        descriptors.contains_key(plugin_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(id: &str) -> PluginDescriptor {
        PluginDescriptor::new(id, PluginKind::Policy, format!("Policy {}", id), "1.0.0").unwrap()
    }

    #[tokio::test]
    async fn test_register_and_find() {
        let registry = PluginRegistry::new();

        registry.register(policy("rate-limit")).await.unwrap();

        let descriptor = registry.find("rate-limit").await.unwrap();
        assert_eq!(descriptor.id(), "rate-limit");
        assert!(registry.contains("rate-limit").await);
    }

    #[tokio::test]
    async fn test_find_unknown() {
        let registry = PluginRegistry::new();
        assert!(registry.find("ghost").await.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_registration() {
        let registry = PluginRegistry::new();

        registry.register(policy("rate-limit")).await.unwrap();
        let result = registry.register(policy("rate-limit")).await;

        assert!(matches!(result.unwrap_err(), DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_list_sorted() {
        let registry = PluginRegistry::new();

        registry.register(policy("transform-headers")).await.unwrap();
        registry.register(policy("rate-limit")).await.unwrap();

        let descriptors = registry.list().await;
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].id(), "rate-limit");
    }

    #[tokio::test]
    async fn test_list_by_kind() {
        let registry = PluginRegistry::new();

        registry.register(policy("rate-limit")).await.unwrap();
        registry
            .register(
                PluginDescriptor::new("cache-redis", PluginKind::Resource, "Redis Cache", "3.0.1")
                    .unwrap(),
            )
            .await
            .unwrap();
        registry
            .register(
                PluginDescriptor::new("notifier-email", PluginKind::Notifier, "Email", "1.2.0")
                    .unwrap(),
            )
            .await
            .unwrap();

        let policies = registry.list_by_kind(PluginKind::Policy).await;
        assert_eq!(policies.len(), 1);
        assert_eq!(policies[0].id(), "rate-limit");

        let notifiers = registry.list_by_kind(PluginKind::Notifier).await;
        assert_eq!(notifiers.len(), 1);
        assert_eq!(notifiers[0].id(), "notifier-email");
    }
}
