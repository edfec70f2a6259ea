//! Submit review use case.
//!
//! Ratings arrive already validated as [`Rating`] values; range checking
//! happens where the raw integer enters the system.

use crate::state::ServiceState;
use derma_domain::Rating;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct SubmitReviewUseCase {
    state: Arc<ServiceState>,
}

impl SubmitReviewUseCase {
    pub fn new(state: Arc<ServiceState>) -> Self {
        Self { state }
    }

    pub async fn submit(&self, rating: Rating) {
        let total = {
            let mut reviews = self.state.reviews.lock().await;
            reviews.submit(rating);
            reviews.len()
        };
        info!(rating = rating.value(), total, "Review recorded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_three_reviews() {
        let state = Arc::new(ServiceState::new());
        let use_case = SubmitReviewUseCase::new(state.clone());
        for r in [3, 4, 5] {
            use_case.submit(Rating::new(r).unwrap()).await;
        }
        assert_eq!(state.reviews.lock().await.len(), 3);
        assert_eq!(state.snapshot().await.rating, Some(4.0));
    }
}
