//! Shared state handed to every HTTP handler

use derma_application::{
    CachePolicy, CatalogUseCase, Classifier, FeatureExtractor, PredictDiseaseUseCase,
    ResponseCache, ServiceState, ServiceStatsUseCase, SubmitReviewUseCase,
};
use std::sync::Arc;

/// Use cases wired against one [`ServiceState`]
#[derive(Clone)]
pub struct ApiState {
    pub catalog: CatalogUseCase,
    pub reviews: SubmitReviewUseCase,
    pub predict: PredictDiseaseUseCase,
    pub stats: ServiceStatsUseCase,
}

impl ApiState {
    pub fn new(
        state: Arc<ServiceState>,
        extractor: Arc<dyn FeatureExtractor>,
        classifier: Arc<dyn Classifier>,
        cache: Arc<dyn ResponseCache>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            catalog: CatalogUseCase::new(state.clone(), cache.clone(), policy.clone()),
            reviews: SubmitReviewUseCase::new(state.clone()),
            predict: PredictDiseaseUseCase::new(state.clone(), extractor, classifier),
            stats: ServiceStatsUseCase::new(state, cache, policy),
        }
    }
}
