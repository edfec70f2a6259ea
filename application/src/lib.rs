//! Application layer for derma
//!
//! This crate contains use cases, port definitions, the shared service
//! state and application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod state;
pub mod use_cases;

// Re-export commonly used types
pub use config::CachePolicy;
pub use ports::{
    classifier::{Classifier, ClassifierError},
    feature_extractor::{ExtractError, FeatureExtractor},
    response_cache::{CacheError, NoResponseCache, ResponseCache},
};
pub use state::{STARTED_AT_FORMAT, ServiceState};
pub use use_cases::catalog::CatalogUseCase;
pub use use_cases::predict::{PredictDiseaseUseCase, PredictError, PredictInput};
pub use use_cases::review::SubmitReviewUseCase;
pub use use_cases::stats::ServiceStatsUseCase;
