//! Configuration file loading for derma
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DERMA_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./derma.toml` or `./.derma.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/derma/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCacheBackend, FileCacheConfig, FileConfig, FileLoggingConfig,
    FileModelConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
