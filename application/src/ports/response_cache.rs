//! Response cache port
//!
//! Key-value store used to memoize read operations. Values are JSON strings;
//! a backend that fails or is absent only costs a recomputation.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Errors a cache backend may report
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache backend unavailable: {0}")]
    Unavailable(String),

    #[error("Cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Fetch a live entry, `None` if absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError>;
}

/// Backend that never stores anything, so every read recomputes
#[derive(Debug, Clone, Copy, Default)]
pub struct NoResponseCache;

#[async_trait]
impl ResponseCache for NoResponseCache {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _key: &str, _value: String, _ttl: Duration) -> Result<(), CacheError> {
        Ok(())
    }
}
