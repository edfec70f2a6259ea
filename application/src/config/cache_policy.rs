//! Cache policy: which read operations are memoized and for how long.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time-to-live and key namespace for cached read responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachePolicy {
    /// Prefix prepended to every cache key.
    pub prefix: String,
    /// TTL for single disease lookups.
    pub disease_ttl: Duration,
    /// TTL for the statistics snapshot.
    pub stats_ttl: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            prefix: "derma-cache".to_string(),
            disease_ttl: Duration::from_secs(30),
            stats_ttl: Duration::from_secs(60),
        }
    }
}

impl CachePolicy {
    // ==================== Builder Methods ====================

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_disease_ttl(mut self, ttl: Duration) -> Self {
        self.disease_ttl = ttl;
        self
    }

    pub fn with_stats_ttl(mut self, ttl: Duration) -> Self {
        self.stats_ttl = ttl;
        self
    }

    // ==================== Keys ====================

    pub fn disease_key(&self, id: derma_domain::DiseaseId) -> String {
        format!("{}:disease:{}", self.prefix, id)
    }

    pub fn stats_key(&self) -> String {
        format!("{}:stats", self.prefix)
    }
}
