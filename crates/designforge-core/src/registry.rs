//! Registry mapping each provider to its adapter.

use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

use designforge_protocols::{DesignProvider, ModelDescriptor, ProviderError, ProviderId};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Provider already registered: {0}")]
    AlreadyRegistered(ProviderId),

    #[error("Provider not registered: {0}")]
    NotFound(ProviderId),
}

/// Registry for managing design providers.
pub struct ProviderRegistry {
    providers: DashMap<ProviderId, Arc<dyn DesignProvider>>,
}

impl ProviderRegistry {
    /// Create a new provider registry.
    pub fn new() -> Self {
        Self {
            providers: DashMap::new(),
        }
    }

    /// Register a provider.
    pub fn register(&self, provider: Arc<dyn DesignProvider>) -> Result<(), RegistryError> {
        let id = provider.id();

        if self.providers.contains_key(&id) {
            return Err(RegistryError::AlreadyRegistered(id));
        }

        self.providers.insert(id, provider);
        Ok(())
    }

    /// Unregister a provider.
    pub fn unregister(&self, id: ProviderId) -> Result<(), RegistryError> {
        self.providers
            .remove(&id)
            .ok_or(RegistryError::NotFound(id))?;
        Ok(())
    }

    /// Get a provider by ID.
    pub fn get(&self, id: ProviderId) -> Option<Arc<dyn DesignProvider>> {
        self.providers.get(&id).map(|p| p.clone())
    }

    /// Get a provider, treating absence as unsupported.
    pub fn require(&self, id: ProviderId) -> Result<Arc<dyn DesignProvider>, ProviderError> {
        self.get(id).ok_or(ProviderError::NotSupported(id))
    }

    /// List registered provider IDs in catalog order.
    pub fn list_ids(&self) -> Vec<ProviderId> {
        let mut ids: Vec<ProviderId> = self.providers.iter().map(|p| *p.key()).collect();
        ids.sort();
        ids
    }

    /// List every model with its owning provider, grouped by provider.
    pub fn list_models(&self) -> Vec<(ProviderId, ModelDescriptor)> {
        let mut result = Vec::new();
        for id in self.list_ids() {
            if let Some(provider) = self.get(id) {
                for model in provider.models() {
                    result.push((id, model.clone()));
                }
            }
        }
        result
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
