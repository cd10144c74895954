//! In-session record store.

use crate::errors::{AppError, AppResult};
use crate::models::entry::Entry;
use std::collections::BTreeSet;

/// Ordered entries of one session. Insertion order is display and export order.
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    entries: Vec<Entry>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entries at `indices`.
    ///
    /// Positions refer to the store as it was before the call. If any
    /// position is out of range nothing is removed. Removed entries are
    /// returned in their original order.
    pub fn delete_at(&mut self, indices: &BTreeSet<usize>) -> AppResult<Vec<Entry>> {
        if indices.is_empty() {
            return Ok(Vec::new());
        }

        let len = self.entries.len();
        if let Some(&bad) = indices.iter().find(|&&i| i >= len) {
            return Err(AppError::InvalidIndex { index: bad, len });
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .enumerate()
            .partition(|(i, _)| indices.contains(i));

        self.entries = kept.into_iter().map(|(_, e)| e).collect();
        Ok(removed.into_iter().map(|(_, e)| e).collect())
    }

    /// Drop every entry, returning how many were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.entries.len();
        self.entries.clear();
        n
    }

    pub fn all(&self) -> &[Entry] {
        &self.entries
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
    use crate::core::validator::EntryValidator;
    use crate::models::entry::EntryInput;
    use chrono::NaiveDate;

    fn entry(name: &str) -> Entry {
        let d = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        EntryValidator::validate(&EntryInput::new(name, "walked", "reading", 120), d).unwrap()
    }

    fn store_of(names: &[&str]) -> RecordStore {
        let mut s = RecordStore::new();
        for n in names {
            s.append(entry(n));
        }
        s
    }

    fn names(s: &RecordStore) -> Vec<&str> {
        s.all().iter().map(|e| e.name()).collect()
    }

    #[test]
    fn append_keeps_order() {
        let s = store_of(&["A", "B", "C"]);
        assert_eq!(names(&s), vec!["A", "B", "C"]);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn delete_uses_snapshot_positions() {
        let mut s = store_of(&["A", "B", "C"]);
        let removed = s.delete_at(&BTreeSet::from([0, 2])).unwrap();
        assert_eq!(names(&s), vec!["B"]);
        let removed: Vec<&str> = removed.iter().map(|e| e.name()).collect();
        assert_eq!(removed, vec!["A", "C"]);
    }

    #[test]
    fn delete_adjacent_positions() {
        let mut s = store_of(&["A", "B", "C", "D"]);
        s.delete_at(&BTreeSet::from([1, 2])).unwrap();
        assert_eq!(names(&s), vec!["A", "D"]);
    }

    #[test]
    fn delete_empty_selection_is_noop() {
        let mut s = store_of(&["A", "B"]);
        let removed = s.delete_at(&BTreeSet::new()).unwrap();
        assert!(removed.is_empty());
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn delete_out_of_range_changes_nothing() {
        let mut s = store_of(&["A", "B"]);
        let err = s.delete_at(&BTreeSet::from([0, 5])).unwrap_err();
        assert!(matches!(err, AppError::InvalidIndex { index: 5, len: 2 }));
        assert_eq!(names(&s), vec!["A", "B"]);
    }

    #[test]
    fn clear_empties_store() {
        let mut s = store_of(&["A", "B", "C"]);
        assert_eq!(s.clear(), 3);
        assert!(s.all().is_empty());
        assert_eq!(s.clear(), 0);
    }
}
