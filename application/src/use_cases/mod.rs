//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub(crate) mod cache_aside;
pub mod catalog;
pub mod predict;
pub mod review;
pub mod stats;
