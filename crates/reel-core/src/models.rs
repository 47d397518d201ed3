//! Data models for reel
//!
//! Defines the two core data structures: `Entry` and `Collection`.
//! A collection is persisted as a whole and its order is significant.

use std::collections::HashSet;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// A single playlist item
///
/// Field order is the serialized key order (`id`, `title`, `url`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    /// Handle used for edit and delete, derived from creation time
    pub id: i64,
    /// Display title
    pub title: String,
    /// Media URL
    pub url: String,
}

impl Entry {
    /// Create an entry with a specific ID (for loading or importing)
    pub fn with_id(id: i64, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            url: url.into(),
        }
    }

    /// Replace title and URL
    pub fn set_fields(&mut self, title: impl Into<String>, url: impl Into<String>) {
        self.title = title.into();
        self.url = url.into();
    }
}

/// The ordered sequence of all entries
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Collection(Vec<Entry>);

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }

    /// Append an entry at the end
    pub fn push(&mut self, entry: Entry) {
        self.0.push(entry);
    }

    /// First entry with the given ID
    pub fn find(&self, id: i64) -> Option<&Entry> {
        self.0.iter().find(|e| e.id == id)
    }

    /// First entry with the given ID, mutably
    pub fn find_mut(&mut self, id: i64) -> Option<&mut Entry> {
        self.0.iter_mut().find(|e| e.id == id)
    }

    /// Keep only entries matching the predicate, returning how many were dropped
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&Entry) -> bool,
    {
        let before = self.0.len();
        self.0.retain(keep);
        before - self.0.len()
    }

    /// Generate an ID for a new entry
    ///
    /// Starts from the current Unix time in seconds and moves forward
    /// until it does not collide with an existing entry.
    pub fn next_id(&self) -> i64 {
        let mut id = Utc::now().timestamp().max(1);
        while self.find(id).is_some() {
            id += 1;
        }
        id
    }

    /// IDs that appear more than once, in order of first repetition
    pub fn duplicate_ids(&self) -> Vec<i64> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for entry in &self.0 {
            if !seen.insert(entry.id) && !duplicates.contains(&entry.id) {
                duplicates.push(entry.id);
            }
        }
        duplicates
    }

    /// Borrow the entries as a slice
    pub fn as_slice(&self) -> &[Entry] {
        &self.0
    }
}

impl From<Vec<Entry>> for Collection {
    fn from(entries: Vec<Entry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<Entry> for Collection {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Collection {
    type Item = Entry;
    type IntoIter = std::vec::IntoIter<Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Collection {
        vec![
            Entry::with_id(5, "Five", "http://example.com/5"),
            Entry::with_id(6, "Six", "http://example.com/6"),
        ]
        .into()
    }

    #[test]
    fn test_entry_with_id() {
        let entry = Entry::with_id(42, "Movie", "http://example.com/video");
        assert_eq!(entry.id, 42);
        assert_eq!(entry.title, "Movie");
        assert_eq!(entry.url, "http://example.com/video");
    }

    #[test]
    fn test_entry_set_fields() {
        let mut entry = Entry::with_id(1, "Old", "http://old");
        entry.set_fields("New", "http://new");
        assert_eq!(entry.title, "New");
        assert_eq!(entry.url, "http://new");
        assert_eq!(entry.id, 1);
    }

    #[test]
    fn test_find() {
        let collection = sample();
        assert_eq!(collection.find(6).map(|e| e.title.as_str()), Some("Six"));
        assert!(collection.find(7).is_none());
    }

    #[test]
    fn test_retain_reports_removed() {
        let mut collection = sample();
        let removed = collection.retain(|e| e.id != 5);
        assert_eq!(removed, 1);
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.as_slice()[0].id, 6);
    }

    #[test]
    fn test_next_id_is_positive_and_unused() {
        let mut collection = Collection::new();
        let first = collection.next_id();
        assert!(first > 0);

        collection.push(Entry::with_id(first, "A", "http://a"));
        let second = collection.next_id();
        assert_ne!(first, second);
        assert!(collection.find(second).is_none());
    }

    #[test]
    fn test_duplicate_ids() {
        let collection: Collection = vec![
            Entry::with_id(1, "A", "http://a"),
            Entry::with_id(2, "B", "http://b"),
            Entry::with_id(1, "C", "http://c"),
            Entry::with_id(1, "D", "http://d"),
        ]
        .into();
        assert_eq!(collection.duplicate_ids(), vec![1]);
        assert!(sample().duplicate_ids().is_empty());
    }

    #[test]
    fn test_serialization_key_order() {
        let entry = Entry::with_id(7, "T", "U");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"id":7,"title":"T","url":"U"}"#);
    }

    #[test]
    fn test_collection_serializes_as_array() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['));
        let back: Collection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
