//! Catalog error types

use super::value_objects::DiseaseId;
use thiserror::Error;

/// Outcomes of catalog operations that are reported to callers rather than
/// treated as faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("The list of diseases is empty!")]
    Empty,

    #[error("There is no disease with disease_id {0}!")]
    NotFound(DiseaseId),

    #[error("Disease_id {0} is busy!")]
    Conflict(DiseaseId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CatalogError::Empty.to_string(), "The list of diseases is empty!");
        assert_eq!(
            CatalogError::NotFound(DiseaseId::new(99)).to_string(),
            "There is no disease with disease_id 99!"
        );
        assert_eq!(
            CatalogError::Conflict(DiseaseId::new(3)).to_string(),
            "Disease_id 3 is busy!"
        );
    }
}
