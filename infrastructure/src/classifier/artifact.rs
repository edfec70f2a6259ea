//! Serialized classifier artifacts.
//!
//! An artifact is a JSON document tagged by `kind`:
//!
//! ```json
//! { "kind": "linear", "classes": [0, 1], "coefficients": [[...], [...]], "intercepts": [0.1, -0.2] }
//! { "kind": "nearest_centroid", "classes": [0, 1], "centroids": [[...], [...]] }
//! ```
//!
//! Shapes are checked once at load time so that `predict` only has to
//! compare the incoming feature length.

use derma_application::{Classifier, ClassifierError};
use derma_domain::{DiseaseId, FeatureVector};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading an artifact. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("Could not read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Model artifact {path} is not valid: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Model artifact has no classes")]
    NoClasses,

    #[error("Model artifact has {classes} classes but {rows} {what}")]
    ShapeMismatch {
        classes: usize,
        rows: usize,
        what: &'static str,
    },

    #[error("Model artifact rows have inconsistent lengths ({first} vs {other})")]
    RaggedRows { first: usize, other: usize },

    #[error("Model artifact has zero features")]
    NoFeatures,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ArtifactFile {
    Linear {
        classes: Vec<DiseaseId>,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    },
    NearestCentroid {
        classes: Vec<DiseaseId>,
        centroids: Vec<Vec<f64>>,
    },
}

#[derive(Debug, Clone)]
enum Decision {
    /// One-vs-rest linear decision function, highest score wins
    Linear {
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    },
    /// Closest centroid by squared Euclidean distance wins
    NearestCentroid { centroids: Vec<Vec<f64>> },
}

/// Classifier loaded from a JSON artifact
#[derive(Debug, Clone)]
pub struct ArtifactClassifier {
    classes: Vec<DiseaseId>,
    n_features: usize,
    decision: Decision,
}

impl ArtifactClassifier {
    /// Load and validate an artifact file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ArtifactFile =
            serde_json::from_slice(&raw).map_err(|source| ArtifactError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        let classifier = Self::from_file(file)?;
        info!(
            path = %path.display(),
            classes = classifier.classes.len(),
            features = classifier.n_features,
            "Loaded model artifact"
        );
        Ok(classifier)
    }

    fn from_file(file: ArtifactFile) -> Result<Self, ArtifactError> {
        match file {
            ArtifactFile::Linear {
                classes,
                coefficients,
                intercepts,
            } => {
                let n_features = validate_rows(&classes, &coefficients, "coefficient rows")?;
                if intercepts.len() != classes.len() {
                    return Err(ArtifactError::ShapeMismatch {
                        classes: classes.len(),
                        rows: intercepts.len(),
                        what: "intercepts",
                    });
                }
                Ok(Self {
                    classes,
                    n_features,
                    decision: Decision::Linear {
                        coefficients,
                        intercepts,
                    },
                })
            }
            ArtifactFile::NearestCentroid { classes, centroids } => {
                let n_features = validate_rows(&classes, &centroids, "centroids")?;
                Ok(Self {
                    classes,
                    n_features,
                    decision: Decision::NearestCentroid { centroids },
                })
            }
        }
    }

    pub fn classes(&self) -> &[DiseaseId] {
        &self.classes
    }
}

fn validate_rows(
    classes: &[DiseaseId],
    rows: &[Vec<f64>],
    what: &'static str,
) -> Result<usize, ArtifactError> {
    if classes.is_empty() {
        return Err(ArtifactError::NoClasses);
    }
    if rows.len() != classes.len() {
        return Err(ArtifactError::ShapeMismatch {
            classes: classes.len(),
            rows: rows.len(),
            what,
        });
    }
    let first = rows[0].len();
    if first == 0 {
        return Err(ArtifactError::NoFeatures);
    }
    if let Some(other) = rows.iter().map(Vec::len).find(|len| *len != first) {
        return Err(ArtifactError::RaggedRows { first, other });
    }
    Ok(first)
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Index of the first maximum, ignoring NaN scores
fn argmax(scores: impl Iterator<Item = f64>) -> Option<usize> {
    scores
        .enumerate()
        .filter(|(_, s)| !s.is_nan())
        .fold(None, |best: Option<(usize, f64)>, (i, s)| match best {
            Some((_, b)) if b >= s => best,
            _ => Some((i, s)),
        })
        .map(|(i, _)| i)
}

impl Classifier for ArtifactClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<DiseaseId, ClassifierError> {
        if features.len() != self.n_features {
            return Err(ClassifierError::FeatureLengthMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }
        let x = features.as_slice();
        let best = match &self.decision {
            Decision::Linear {
                coefficients,
                intercepts,
            } => argmax(
                coefficients
                    .iter()
                    .zip(intercepts)
                    .map(|(w, b)| dot(w, x) + b),
            ),
            Decision::NearestCentroid { centroids } => {
                argmax(centroids.iter().map(|c| -squared_distance(c, x)))
            }
        };
        best.map(|i| self.classes[i])
            .ok_or(ClassifierError::NoPrediction)
    }

    fn expected_features(&self) -> Option<usize> {
        Some(self.n_features)
    }
}
