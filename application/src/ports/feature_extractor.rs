//! Feature extractor port
//!
//! Turns raw upload bytes into the feature vector the classifier consumes.

use derma_domain::FeatureVector;
use thiserror::Error;

/// Errors raised while turning an upload into features
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Could not decode uploaded image: {0}")]
    Decode(String),

    #[error("Dimensionality reduction failed: {0}")]
    Reduction(String),
}

impl ExtractError {
    /// Check if the failure was caused by the uploaded bytes
    pub fn is_client_error(&self) -> bool {
        matches!(self, ExtractError::Decode(_))
    }
}

/// Image preprocessing pipeline.
///
/// CPU-bound; callers run it on a blocking worker thread.
pub trait FeatureExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> Result<FeatureVector, ExtractError>;
}
