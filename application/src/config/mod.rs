//! Application-level configuration.
//!
//! - [`CachePolicy`]: TTLs and key namespace for cached read operations

pub mod cache_policy;

pub use cache_policy::CachePolicy;
