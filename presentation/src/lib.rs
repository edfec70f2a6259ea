//! Presentation layer for derma
//!
//! This crate contains the CLI definition and the HTTP API
//! (routes, handlers and JSON envelopes).

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiState, router};
