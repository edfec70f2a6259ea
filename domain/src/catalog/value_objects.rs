//! Catalog value objects

use serde::{Deserialize, Serialize};

/// Identifier of a disease category (Value Object)
///
/// Ids are not required to be dense or sorted; the classifier artifact and
/// the catalog only have to agree on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseId(i64);

impl DiseaseId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for DiseaseId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
