//! Shared mutable service state.
//!
//! One [`ServiceState`] is created at startup and shared behind an `Arc` by
//! every use case. Each mutable structure has its own guard so that catalog
//! reads never wait on review submissions.

use chrono::Local;
use derma_domain::{DiseaseCatalog, ReviewLog, ServiceStats, UsageCounter};
use tokio::sync::{Mutex, RwLock};

/// Format of the reported start timestamp
pub const STARTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// In-memory state of a running service. Nothing here is persisted.
#[derive(Debug)]
pub struct ServiceState {
    pub catalog: RwLock<DiseaseCatalog>,
    pub reviews: Mutex<ReviewLog>,
    pub usage: UsageCounter,
    started_at: String,
}

impl ServiceState {
    /// Fresh state with the seeded catalog, stamped with the current local time
    pub fn new() -> Self {
        Self::with_catalog(DiseaseCatalog::seeded())
    }

    pub fn with_catalog(catalog: DiseaseCatalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
            reviews: Mutex::new(ReviewLog::new()),
            usage: UsageCounter::new(),
            started_at: Local::now().format(STARTED_AT_FORMAT).to_string(),
        }
    }

    pub fn with_started_at(mut self, started_at: impl Into<String>) -> Self {
        self.started_at = started_at.into();
        self
    }

    pub fn started_at(&self) -> &str {
        &self.started_at
    }

    /// Uncached snapshot of the current statistics
    pub async fn snapshot(&self) -> ServiceStats {
        let rating = self.reviews.lock().await.average();
        ServiceStats {
            started_at: self.started_at.clone(),
            images_loaded: self.usage.read(),
            rating,
        }
    }
}

impl Default for ServiceState {
    fn default() -> Self {
        Self::new()
    }
}
