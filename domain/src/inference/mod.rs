//! Inference value objects.
//!
//! The preprocessing geometry is fixed: the classifier artifact was trained
//! on 256×256 grayscale images reduced to 75 principal components per image.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Side length, in pixels, images are resized to before reduction
pub const IMAGE_SIDE: u32 = 256;

/// Number of principal components kept per image
pub const PCA_COMPONENTS: usize = 75;

/// Flattened numeric representation of one image
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Result of a successful prediction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Name of the uploaded file, as sent by the client
    pub filename: Option<String>,
    /// Resolved disease name
    pub disease: String,
}

impl Prediction {
    /// Sentence reported to the user
    pub fn sentence(&self) -> String {
        format!("Your disease is {}", self.disease)
    }
}

/// Number of images successfully classified since start
#[derive(Debug, Default)]
pub struct UsageCounter(AtomicU64);

impl UsageCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn read(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_sentence() {
        let prediction = Prediction {
            filename: Some("arm.png".to_string()),
            disease: "Eczema".to_string(),
        };
        assert_eq!(prediction.sentence(), "Your disease is Eczema");
    }

    #[test]
    fn test_usage_counter() {
        let counter = UsageCounter::new();
        assert_eq!(counter.read(), 0);
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.read(), 2);
    }
}
