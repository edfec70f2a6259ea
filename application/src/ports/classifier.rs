//! Classifier port
//!
//! Defines the interface to the pre-trained model artifact.

use derma_domain::{DiseaseId, FeatureVector};
use thiserror::Error;

/// Errors a classifier can report for a single prediction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Feature vector has {actual} values, model expects {expected}")]
    FeatureLengthMismatch { expected: usize, actual: usize },

    #[error("Model produced no prediction")]
    NoPrediction,
}

/// Pre-trained predictor mapping a feature vector to a disease id.
///
/// Implementations are immutable after load and shared across requests;
/// `predict` is CPU-bound and is called from a blocking worker thread.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<DiseaseId, ClassifierError>;

    /// Number of features the model was trained on, if known
    fn expected_features(&self) -> Option<usize> {
        None
    }
}
