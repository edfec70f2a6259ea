//! Domain layer for derma
//!
//! This crate contains the core entities and value objects of the
//! skin-lesion classification service. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Catalog**: the identifier → name mapping of disease labels
//! - **Review log**: user ratings in `1..=5`, append-only
//! - **Usage counter**: successful classifications since start
//! - **Feature vector**: the flattened image representation the classifier consumes

pub mod catalog;
pub mod inference;
pub mod review;
pub mod stats;

// Re-export commonly used types
pub use catalog::{
    entities::DiseaseCatalog, error::CatalogError, seed::SEEDED_DISEASES,
    value_objects::DiseaseId,
};
pub use inference::{FeatureVector, IMAGE_SIDE, PCA_COMPONENTS, Prediction, UsageCounter};
pub use review::{Rating, RatingError, ReviewLog};
pub use stats::ServiceStats;
