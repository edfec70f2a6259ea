//! Service statistics use case.
//!
//! The snapshot is cached for [`CachePolicy::stats_ttl`], so counts reported
//! here may lag behind the live counters by up to that interval.

use super::cache_aside::cache_aside;
use crate::config::CachePolicy;
use crate::ports::response_cache::ResponseCache;
use crate::state::ServiceState;
use derma_domain::ServiceStats;
use std::convert::Infallible;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceStatsUseCase {
    state: Arc<ServiceState>,
    cache: Arc<dyn ResponseCache>,
    policy: CachePolicy,
}

impl ServiceStatsUseCase {
    pub fn new(
        state: Arc<ServiceState>,
        cache: Arc<dyn ResponseCache>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            state,
            cache,
            policy,
        }
    }

    pub async fn execute(&self) -> ServiceStats {
        let state = &self.state;
        let result: Result<ServiceStats, Infallible> = cache_aside(
            self.cache.as_ref(),
            &self.policy.stats_key(),
            self.policy.stats_ttl,
            move || async move { Ok(state.snapshot().await) },
        )
        .await;
        match result {
            Ok(stats) => stats,
            Err(never) => match never {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::response_cache::NoResponseCache;
    use crate::use_cases::cache_aside::test_support::{FailingCache, MockCache};
    use derma_domain::Rating;

    #[tokio::test]
    async fn test_uncached_stats_follow_state() {
        let state = Arc::new(ServiceState::new().with_started_at("2026-10-19 08:00"));
        let use_case =
            ServiceStatsUseCase::new(state.clone(), Arc::new(NoResponseCache), CachePolicy::default());

        let stats = use_case.execute().await;
        assert_eq!(stats.started_at, "2026-10-19 08:00");
        assert_eq!(stats.images_loaded, 0);
        assert_eq!(stats.rating, None);

        state.usage.increment();
        state.reviews.lock().await.submit(Rating::new(5).unwrap());
        let stats = use_case.execute().await;
        assert_eq!(stats.images_loaded, 1);
        assert_eq!(stats.rating, Some(5.0));
    }

    #[tokio::test]
    async fn test_cached_stats_are_reused_within_ttl() {
        let state = Arc::new(ServiceState::new());
        let use_case = ServiceStatsUseCase::new(
            state.clone(),
            Arc::new(MockCache::default()),
            CachePolicy::default(),
        );

        let first = use_case.execute().await;
        state.usage.increment();
        let second = use_case.execute().await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_failing_cache_still_reports() {
        let state = Arc::new(ServiceState::new());
        state.usage.increment();
        let use_case =
            ServiceStatsUseCase::new(state, Arc::new(FailingCache), CachePolicy::default());
        assert_eq!(use_case.execute().await.images_loaded, 1);
    }
}
