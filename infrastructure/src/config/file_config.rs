//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! where needed.

use derma_application::CachePolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("model.artifact_path cannot be empty")]
    EmptyArtifactPath,

    #[error("server.body_limit_bytes cannot be 0")]
    InvalidBodyLimit,

    #[error("server.host cannot be empty")]
    EmptyHost,

    #[error("cache.url is required when cache.backend = \"redis\"")]
    MissingCacheUrl,
}

/// Raw HTTP server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Maximum request body size (uploads)
    pub body_limit_bytes: usize,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            body_limit_bytes: 16 * 1024 * 1024,
        }
    }
}

/// Raw model configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Path to the classifier artifact
    pub artifact_path: PathBuf,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            artifact_path: PathBuf::from("model.json"),
        }
    }
}

/// Cache backend selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileCacheBackend {
    /// In-process map with per-entry expiry
    #[default]
    Memory,
    /// Shared Redis server at `cache.url`
    Redis,
    /// Always recompute
    None,
}

/// Raw cache configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCacheConfig {
    pub backend: FileCacheBackend,
    /// Server URL for the `redis` backend, e.g. `redis://127.0.0.1:6379`
    pub url: Option<String>,
    /// Prefix for every cache key
    pub prefix: String,
    /// TTL for `GET /diseases/{id}` (0 disables caching)
    pub disease_ttl_seconds: u64,
    /// TTL for `GET /stats` (0 disables caching)
    pub stats_ttl_seconds: u64,
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        let policy = CachePolicy::default();
        Self {
            backend: FileCacheBackend::default(),
            url: None,
            prefix: policy.prefix,
            disease_ttl_seconds: policy.disease_ttl.as_secs(),
            stats_ttl_seconds: policy.stats_ttl.as_secs(),
        }
    }
}

impl FileCacheConfig {
    /// Convert into the application-level cache policy
    pub fn to_policy(&self) -> CachePolicy {
        CachePolicy::default()
            .with_prefix(self.prefix.clone())
            .with_disease_ttl(Duration::from_secs(self.disease_ttl_seconds))
            .with_stats_ttl(Duration::from_secs(self.stats_ttl_seconds))
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily rolling log files (stderr only when unset)
    pub directory: Option<PathBuf>,
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Classifier artifact settings
    pub model: FileModelConfig,
    /// Response cache settings
    pub cache: FileCacheConfig,
    /// Log output settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.model.artifact_path.as_os_str().is_empty() {
            return Err(ConfigValidationError::EmptyArtifactPath);
        }

        if self.server.body_limit_bytes == 0 {
            return Err(ConfigValidationError::InvalidBodyLimit);
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyHost);
        }

        if self.cache.backend == FileCacheBackend::Redis
            && self.cache.url.as_deref().is_none_or(|url| url.trim().is_empty())
        {
            return Err(ConfigValidationError::MissingCacheUrl);
        }

        Ok(())
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
