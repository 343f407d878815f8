//! Document-wide correction list, keyed by page index

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, Result};
use crate::models::Correction;

/// All user corrections of one document
///
/// Corrections live in per-page buckets in insertion order. Lookups by
/// position are a linear scan over one page's bucket, which stays small at
/// real chord densities.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectionStore {
    pages: BTreeMap<usize, Vec<Correction>>,
}

impl CorrectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from a persisted flat list
    pub fn from_corrections(corrections: impl IntoIterator<Item = Correction>) -> Self {
        let mut store = Self::new();
        for correction in corrections {
            store.insert(correction);
        }
        store
    }

    /// Append a correction to its page; a correction with an existing id replaces it
    pub fn insert(&mut self, correction: Correction) {
        for list in self.pages.values_mut() {
            list.retain(|c| c.id != correction.id);
        }
        self.pages.retain(|_, list| !list.is_empty());
        self.pages.entry(correction.page_index).or_default().push(correction);
    }

    /// Delete a correction by id and return it
    pub fn remove(&mut self, id: Uuid) -> Result<Correction> {
        let (page, pos) = self
            .pages
            .iter()
            .find_map(|(page, list)| list.iter().position(|c| c.id == id).map(|pos| (*page, pos)))
            .ok_or(EngineError::CorrectionNotFound(id))?;

        let list = self.pages.entry(page).or_default();
        let removed = list.remove(pos);
        if list.is_empty() {
            self.pages.remove(&page);
        }
        Ok(removed)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: Uuid) -> Option<&Correction> {
        self.pages.values().flatten().find(|c| c.id == id)
    }

    /// Corrections of one page, in insertion order
    pub fn for_page(&self, page_index: usize) -> &[Correction] {
        self.pages.get(&page_index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every correction, ordered by page then insertion
    pub fn all(&self) -> Vec<Correction> {
        self.pages.values().flatten().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_filter_by_page() {
        let mut store = CorrectionStore::new();
        store.insert(Correction::add(0, 1.0, 1.0, "G"));
        store.insert(Correction::add(2, 1.0, 1.0, "C"));
        store.insert(Correction::remove(0, 5.0, 5.0, "D"));

        assert_eq!(store.len(), 3);
        assert_eq!(store.for_page(0).len(), 2);
        assert_eq!(store.for_page(2)[0].text, "C");
        assert!(store.for_page(1).is_empty());
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = CorrectionStore::new();
        let keep = Correction::add(0, 1.0, 1.0, "G");
        let drop = Correction::add(1, 1.0, 1.0, "C");
        store.insert(keep.clone());
        store.insert(drop.clone());

        assert_eq!(store.remove(drop.id).unwrap(), drop);
        assert_eq!(store.all(), vec![keep]);
        assert!(store.for_page(1).is_empty());
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut store = CorrectionStore::new();
        let id = Uuid::new_v4();
        assert_eq!(store.remove(id), Err(EngineError::CorrectionNotFound(id)));
    }

    #[test]
    fn test_reinsert_same_id_replaces() {
        let mut store = CorrectionStore::new();
        let mut correction = Correction::add(0, 1.0, 1.0, "G");
        store.insert(correction.clone());
        correction.text = "G7".to_string();
        store.insert(correction.clone());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(correction.id).unwrap().text, "G7");
    }

    #[test]
    fn test_reinsert_can_move_page() {
        let mut store = CorrectionStore::new();
        let mut correction = Correction::add(0, 1.0, 1.0, "G");
        store.insert(correction.clone());
        correction.page_index = 2;
        store.insert(correction.clone());

        assert_eq!(store.len(), 1);
        assert!(store.for_page(0).is_empty());
        assert_eq!(store.for_page(2), &[correction][..]);
        assert!(!store.is_empty());
    }

    #[test]
    fn test_round_trip_through_flat_list() {
        let corrections = vec![
            Correction::add(3, 1.0, 1.0, "Am"),
            Correction::remove(0, 2.0, 2.0, "A"),
        ];
        let store = CorrectionStore::from_corrections(corrections.clone());
        let all = store.all();
        // Page order, not input order
        assert_eq!(all[0], corrections[1]);
        assert_eq!(all[1], corrections[0]);
    }
}
