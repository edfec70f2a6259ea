//! HTTP API: router, handlers and response envelopes

pub mod handlers;
pub mod response;
pub mod router;
pub mod state;

pub use router::router;
pub use state::ApiState;
