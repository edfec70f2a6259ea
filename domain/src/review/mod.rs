//! User ratings of the service.
//!
//! A [`Rating`] can only be built from a value in `1..=5`, so the
//! [`ReviewLog`] never has to validate what it stores.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rating validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("Rating must be between {min} and {max}, got {value}", min = Rating::MIN, max = Rating::MAX)]
    OutOfRange { value: i64 },
}

/// A single user mark in `1..=5` (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Validate a raw mark
    pub fn new(value: i64) -> Result<Self, RatingError> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(RatingError::OutOfRange { value })
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = RatingError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Append-only log of submitted ratings
#[derive(Debug, Clone, Default)]
pub struct ReviewLog {
    ratings: Vec<Rating>,
}

impl ReviewLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Mean of all ratings rounded to two decimals (ties to even), `None` when
    /// nothing was submitted
    pub fn average(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let total: u64 = self.ratings.iter().map(|r| u64::from(r.value())).sum();
        let mean = total as f64 / self.ratings.len() as f64;
        Some((mean * 100.0).round_ties_even() / 100.0)
    }
}
