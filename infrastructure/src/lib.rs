//! Infrastructure layer for derma
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cache;
pub mod classifier;
pub mod config;
pub mod imaging;

// Re-export commonly used types
pub use cache::{InMemoryResponseCache, RedisResponseCache};
pub use classifier::{ArtifactClassifier, ArtifactError};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCacheBackend, FileCacheConfig, FileConfig,
    FileLoggingConfig, FileModelConfig, FileServerConfig,
};
pub use imaging::ImagePipeline;
