//! Redis-backed response cache.
//!
//! Entries are plain `GET`/`SET EX` string keys, so several service
//! instances can share one store. The multiplexed connection is opened on
//! first use and dropped after a failed command; the next call reconnects.

use async_trait::async_trait;
use derma_application::{CacheError, ResponseCache};
use redis::AsyncCommands;
use redis::aio::MultiplexedConnection;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::debug;

const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// [`ResponseCache`] over a Redis server
pub struct RedisResponseCache {
    client: redis::Client,
    connect_timeout: Duration,
    connection: Mutex<Option<MultiplexedConnection>>,
}

impl RedisResponseCache {
    /// Parse `url` (e.g. `redis://127.0.0.1:6379/0`). No connection is made yet.
    pub fn open(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url).map_err(unavailable)?;
        Ok(Self {
            client,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            connection: Mutex::new(None),
        })
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    async fn connection(&self) -> Result<MultiplexedConnection, CacheError> {
        let mut slot = self.connection.lock().await;
        if let Some(connection) = slot.as_ref() {
            return Ok(connection.clone());
        }
        let connection = tokio::time::timeout(
            self.connect_timeout,
            self.client.get_multiplexed_async_connection(),
        )
        .await
        .map_err(|_| {
            CacheError::Unavailable(format!(
                "connection timed out after {:?}",
                self.connect_timeout
            ))
        })?
        .map_err(unavailable)?;
        debug!("Connected to Redis cache");
        *slot = Some(connection.clone());
        Ok(connection)
    }

    async fn reset(&self) {
        self.connection.lock().await.take();
    }
}

fn unavailable(error: redis::RedisError) -> CacheError {
    CacheError::Unavailable(error.to_string())
}

/// `SET EX` needs a whole number of seconds, at least one
fn expiry_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

#[async_trait]
impl ResponseCache for RedisResponseCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut connection = self.connection().await?;
        match connection.get::<_, Option<String>>(key).await {
            Ok(value) => Ok(value),
            Err(e) => {
                self.reset().await;
                Err(unavailable(e))
            }
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<(), CacheError> {
        let mut connection = self.connection().await?;
        match connection
            .set_ex::<_, _, ()>(key, value, expiry_seconds(ttl))
            .await
        {
            Ok(()) => Ok(()),
            Err(e) => {
                self.reset().await;
                Err(unavailable(e))
            }
        }
    }
}
