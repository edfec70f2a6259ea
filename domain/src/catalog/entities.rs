//! Disease catalog entity

use super::error::CatalogError;
use super::seed::SEEDED_DISEASES;
use super::value_objects::DiseaseId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from [`DiseaseId`] to a human-readable disease name.
///
/// Entries can be added but never renamed or removed. Iteration order is
/// ascending by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseCatalog {
    entries: BTreeMap<DiseaseId, String>,
}

impl DiseaseCatalog {
    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create the catalog every process starts with
    pub fn seeded() -> Self {
        let entries = SEEDED_DISEASES
            .iter()
            .map(|(id, name)| (DiseaseId::new(*id), (*name).to_string()))
            .collect();
        Self { entries }
    }

    /// All entries, or [`CatalogError::Empty`] when there are none
    pub fn list(&self) -> Result<&BTreeMap<DiseaseId, String>, CatalogError> {
        if self.entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(&self.entries)
    }

    pub fn get(&self, id: DiseaseId) -> Result<&str, CatalogError> {
        self.entries
            .get(&id)
            .map(String::as_str)
            .ok_or(CatalogError::NotFound(id))
    }

    /// Insert a new entry. Any name is accepted; an existing id is left untouched.
    pub fn add(&mut self, id: DiseaseId, name: impl Into<String>) -> Result<(), CatalogError> {
        if self.entries.contains_key(&id) {
            return Err(CatalogError::Conflict(id));
        }
        self.entries.insert(id, name.into());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog() {
        let catalog = DiseaseCatalog::seeded();
        assert_eq!(catalog.len(), 23);
        assert_eq!(catalog.get(DiseaseId::new(0)).unwrap(), "Acne and Rosacea");
        assert_eq!(catalog.get(DiseaseId::new(19)).unwrap(), "Urticaria Hives");
        assert_eq!(
            catalog.get(DiseaseId::new(22)).unwrap(),
            "Warts Molluscum and other Viral Infections"
        );
    }

    #[test]
    fn test_add_then_get() {
        let mut catalog = DiseaseCatalog::seeded();
        for (id, name) in [(23, "Rosacea Variant"), (-1, "Unknown"), (1000, "Rare")] {
            catalog.add(DiseaseId::new(id), name).unwrap();
            assert_eq!(catalog.get(DiseaseId::new(id)).unwrap(), name);
        }
    }

    #[test]
    fn test_add_conflict_keeps_prior_name() {
        let mut catalog = DiseaseCatalog::seeded();
        let result = catalog.add(DiseaseId::new(5), "Not Eczema");
        assert_eq!(result, Err(CatalogError::Conflict(DiseaseId::new(5))));
        assert_eq!(catalog.get(DiseaseId::new(5)).unwrap(), "Eczema");
        assert_eq!(catalog.len(), 23);
    }

    #[test]
    fn test_add_accepts_empty_name() {
        let mut catalog = DiseaseCatalog::empty();
        assert!(catalog.add(DiseaseId::new(1), "").is_ok());
        assert!(catalog.add(DiseaseId::new(2), "   ").is_ok());
        assert_eq!(catalog.get(DiseaseId::new(1)).unwrap(), "");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_get_missing() {
        let catalog = DiseaseCatalog::seeded();
        assert_eq!(
            catalog.get(DiseaseId::new(404)),
            Err(CatalogError::NotFound(DiseaseId::new(404)))
        );
    }

    #[test]
    fn test_list_empty() {
        let catalog = DiseaseCatalog::empty();
        assert_eq!(catalog.list(), Err(CatalogError::Empty));
    }

    #[test]
    fn test_list_returns_each_entry_once() {
        let mut catalog = DiseaseCatalog::empty();
        catalog.add(DiseaseId::new(3), "c").unwrap();
        catalog.add(DiseaseId::new(1), "a").unwrap();
        catalog.add(DiseaseId::new(2), "b").unwrap();

        let listed: Vec<_> = catalog
            .list()
            .unwrap()
            .iter()
            .map(|(id, name)| (id.value(), name.as_str()))
            .collect();
        assert_eq!(listed, vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_serializes_as_object_keyed_by_id() {
        let mut catalog = DiseaseCatalog::empty();
        catalog.add(DiseaseId::new(2), "Atopic Dermatitis").unwrap();
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json, serde_json::json!({"2": "Atopic Dermatitis"}));
    }
}
