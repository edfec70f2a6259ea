//! Service statistics snapshot

use serde::{Deserialize, Serialize};

/// Point-in-time summary of service usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStats {
    /// Local start time, `YYYY-MM-DD HH:MM`
    pub started_at: String,
    /// Images successfully classified since start
    pub images_loaded: u64,
    /// Mean rating rounded to two decimals, `None` before the first review
    pub rating: Option<f64>,
}
