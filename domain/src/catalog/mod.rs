//! Disease catalog subdomain.
//!
//! - [`DiseaseId`]: identifier the classifier emits for a disease
//! - [`DiseaseCatalog`]: id → human-readable name mapping, append-only
//! - [`CatalogError`]: empty / not found / conflict outcomes

pub mod entities;
pub mod error;
pub mod seed;
pub mod value_objects;
