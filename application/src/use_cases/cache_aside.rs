//! Cache-aside helper shared by the cached read use cases.

use crate::ports::response_cache::ResponseCache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Read `key` from the cache, or run `compute` and store its `Ok` value.
///
/// Errors from `compute` are returned without being cached. Cache backend
/// and (de)serialization failures are logged and fall back to `compute`.
pub(crate) async fn cache_aside<T, E, F, Fut>(
    cache: &dyn ResponseCache,
    key: &str,
    ttl: Duration,
    compute: F,
) -> Result<T, E>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if ttl.is_zero() {
        return compute().await;
    }

    match cache.get(key).await {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, "cache hit");
                return Ok(value);
            }
            Err(e) => warn!(key, "Discarding unreadable cache entry: {}", e),
        },
        Ok(None) => debug!(key, "cache miss"),
        Err(e) => warn!(key, "Cache read failed, recomputing: {}", e),
    }

    let value = compute().await?;

    match serde_json::to_string(&value) {
        Ok(raw) => {
            if let Err(e) = cache.set(key, raw, ttl).await {
                warn!(key, "Cache write failed: {}", e);
            }
        }
        Err(e) => warn!(key, "Could not serialize value for cache: {}", e),
    }

    Ok(value)
}
