//! Predict disease use case.
//!
//! Runs an uploaded image through the fixed preprocessing pipeline and the
//! pre-loaded classifier, then resolves the predicted id through the catalog.
//!
//! # Flow
//!
//! 1. **Extract** - decode, grayscale, resize, reduce (blocking worker)
//! 2. **Classify** - feature vector → [`DiseaseId`] (same blocking worker)
//! 3. **Resolve** - look the id up in the live catalog
//! 4. **Count** - bump the usage counter, only once everything succeeded
//!
//! No shared lock is held while steps 1 and 2 run.

use crate::ports::classifier::{Classifier, ClassifierError};
use crate::ports::feature_extractor::{ExtractError, FeatureExtractor};
use crate::state::ServiceState;
use derma_domain::{DiseaseId, Prediction};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while predicting
#[derive(Error, Debug)]
pub enum PredictError {
    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// The classifier emitted an id the catalog does not know about
    #[error("Predicted disease_id {0} has no entry in the list of diseases")]
    MissingLabel(DiseaseId),

    #[error("Prediction worker failed: {0}")]
    Worker(String),
}

impl PredictError {
    /// Check if the failure was caused by the uploaded bytes
    pub fn is_client_error(&self) -> bool {
        matches!(self, PredictError::Extract(e) if e.is_client_error())
    }
}

/// Input for the [`PredictDiseaseUseCase`].
#[derive(Debug, Clone)]
pub struct PredictInput {
    /// Name of the uploaded file as sent by the client
    pub filename: Option<String>,
    /// Raw image bytes
    pub bytes: Vec<u8>,
}

impl PredictInput {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            filename: None,
            bytes,
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }
}

pub struct PredictDiseaseUseCase {
    state: Arc<ServiceState>,
    extractor: Arc<dyn FeatureExtractor>,
    classifier: Arc<dyn Classifier>,
}

impl Clone for PredictDiseaseUseCase {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            extractor: self.extractor.clone(),
            classifier: self.classifier.clone(),
        }
    }
}

impl PredictDiseaseUseCase {
    pub fn new(
        state: Arc<ServiceState>,
        extractor: Arc<dyn FeatureExtractor>,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        Self {
            state,
            extractor,
            classifier,
        }
    }

    pub async fn execute(&self, input: PredictInput) -> Result<Prediction, PredictError> {
        let PredictInput { filename, bytes } = input;
        debug!(filename = ?filename, size = bytes.len(), "Running prediction");

        let extractor = self.extractor.clone();
        let classifier = self.classifier.clone();
        let label = tokio::task::spawn_blocking(move || -> Result<DiseaseId, PredictError> {
            let features = extractor.extract(&bytes)?;
            Ok(classifier.predict(&features)?)
        })
        .await
        .map_err(|e| PredictError::Worker(e.to_string()))?
        .inspect_err(|e| warn!(filename = ?filename, "Prediction failed: {}", e))?;

        let disease = {
            let catalog = self.state.catalog.read().await;
            match catalog.get(label) {
                Ok(name) => name.to_string(),
                Err(_) => {
                    warn!(disease_id = %label, "Classifier output has no catalog entry");
                    return Err(PredictError::MissingLabel(label));
                }
            }
        };

        let images_loaded = self.state.usage.increment();
        info!(filename = ?filename, disease = %disease, images_loaded, "Image classified");

        Ok(Prediction { filename, disease })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use derma_domain::{DiseaseCatalog, FeatureVector};

    // === Stub implementations ===

    /// Accepts anything that starts with the PNG signature
    struct SignatureExtractor;

    impl FeatureExtractor for SignatureExtractor {
        fn extract(&self, bytes: &[u8]) -> Result<FeatureVector, ExtractError> {
            if bytes.starts_with(b"\x89PNG") {
                Ok(FeatureVector::new(vec![0.0; 4]))
            } else {
                Err(ExtractError::Decode("unsupported image format".to_string()))
            }
        }
    }

    struct FixedClassifier(DiseaseId);

    impl Classifier for FixedClassifier {
        fn predict(&self, _features: &FeatureVector) -> Result<DiseaseId, ClassifierError> {
            Ok(self.0)
        }
    }

    struct StrictClassifier;

    impl Classifier for StrictClassifier {
        fn predict(&self, features: &FeatureVector) -> Result<DiseaseId, ClassifierError> {
            Err(ClassifierError::FeatureLengthMismatch {
                expected: 19_200,
                actual: features.len(),
            })
        }
    }

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\nrest";

    fn use_case(state: Arc<ServiceState>, predicted: i64) -> PredictDiseaseUseCase {
        PredictDiseaseUseCase::new(
            state,
            Arc::new(SignatureExtractor),
            Arc::new(FixedClassifier(DiseaseId::new(predicted))),
        )
    }

    #[tokio::test]
    async fn test_successful_prediction_counts_once() {
        let state = Arc::new(ServiceState::new());
        let use_case = use_case(state.clone(), 5);

        let prediction = use_case
            .execute(PredictInput::new(PNG.to_vec()).with_filename("arm.png"))
            .await
            .unwrap();

        assert_eq!(prediction.filename.as_deref(), Some("arm.png"));
        assert_eq!(prediction.disease, "Eczema");
        assert_eq!(prediction.sentence(), "Your disease is Eczema");
        assert_eq!(state.usage.read(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_bytes_do_not_count() {
        let state = Arc::new(ServiceState::new());
        let use_case = use_case(state.clone(), 5);

        let err = use_case
            .execute(PredictInput::new(b"garbage".to_vec()))
            .await
            .unwrap_err();

        assert!(matches!(err, PredictError::Extract(ExtractError::Decode(_))));
        assert!(err.is_client_error());
        assert_eq!(state.usage.read(), 0);
    }

    #[tokio::test]
    async fn test_counter_tracks_only_successes() {
        let state = Arc::new(ServiceState::new());
        let use_case = use_case(state.clone(), 0);

        for i in 0..7 {
            let bytes = if i % 2 == 0 { PNG.to_vec() } else { vec![0u8; 3] };
            let _ = use_case.execute(PredictInput::new(bytes)).await;
        }
        assert_eq!(state.usage.read(), 4);
    }

    #[tokio::test]
    async fn test_missing_label_is_reported() {
        let state = Arc::new(ServiceState::new());
        let use_case = use_case(state.clone(), 99);

        let err = use_case.execute(PredictInput::new(PNG.to_vec())).await.unwrap_err();

        assert!(matches!(err, PredictError::MissingLabel(id) if id == DiseaseId::new(99)));
        assert!(!err.is_client_error());
        assert_eq!(state.usage.read(), 0);
    }

    #[tokio::test]
    async fn test_label_added_at_runtime_resolves() {
        let state = Arc::new(ServiceState::with_catalog(DiseaseCatalog::empty()));
        state
            .catalog
            .write()
            .await
            .add(DiseaseId::new(99), "Added Later")
            .unwrap();
        let use_case = use_case(state.clone(), 99);

        let prediction = use_case.execute(PredictInput::new(PNG.to_vec())).await.unwrap();
        assert_eq!(prediction.disease, "Added Later");
    }

    #[tokio::test]
    async fn test_classifier_error_is_propagated() {
        let state = Arc::new(ServiceState::new());
        let use_case = PredictDiseaseUseCase::new(
            state.clone(),
            Arc::new(SignatureExtractor),
            Arc::new(StrictClassifier),
        );

        let err = use_case.execute(PredictInput::new(PNG.to_vec())).await.unwrap_err();
        assert!(matches!(
            err,
            PredictError::Classifier(ClassifierError::FeatureLengthMismatch { actual: 4, .. })
        ));
        assert_eq!(state.usage.read(), 0);
    }
}
