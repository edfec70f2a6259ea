//! Classifier artifact adapter

pub mod artifact;

pub use artifact::{ArtifactClassifier, ArtifactError};
