//! Disease catalog use case.
//!
//! Lookups by id are cached. Only found names are stored: catalog entries are
//! never renamed or removed, so a cached name cannot go stale and a newly
//! added id is visible to the very next lookup.

use super::cache_aside::cache_aside;
use crate::config::CachePolicy;
use crate::ports::response_cache::ResponseCache;
use crate::state::ServiceState;
use derma_domain::{CatalogError, DiseaseId};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

pub struct CatalogUseCase {
    state: Arc<ServiceState>,
    cache: Arc<dyn ResponseCache>,
    policy: CachePolicy,
}

impl Clone for CatalogUseCase {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            cache: self.cache.clone(),
            policy: self.policy.clone(),
        }
    }
}

impl CatalogUseCase {
    pub fn new(
        state: Arc<ServiceState>,
        cache: Arc<dyn ResponseCache>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            state,
            cache,
            policy,
        }
    }

    /// Every entry in ascending id order
    pub async fn list(&self) -> Result<BTreeMap<DiseaseId, String>, CatalogError> {
        let catalog = self.state.catalog.read().await;
        catalog.list().cloned()
    }

    pub async fn get(&self, id: DiseaseId) -> Result<String, CatalogError> {
        let key = self.policy.disease_key(id);
        let state = &self.state;
        cache_aside(
            self.cache.as_ref(),
            &key,
            self.policy.disease_ttl,
            move || async move {
                let catalog = state.catalog.read().await;
                catalog.get(id).map(str::to_string)
            },
        )
        .await
    }

    pub async fn add(&self, id: DiseaseId, name: impl Into<String>) -> Result<(), CatalogError> {
        let name = name.into();
        self.state.catalog.write().await.add(id, name.clone())?;
        info!(disease_id = %id, disease_name = %name, "Added disease to catalog");
        Ok(())
    }
}
