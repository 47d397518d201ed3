//! In-memory persistence
//!
//! Stands in for the JSON file in tests and embedders that do not want a
//! file on disk. Every load hands out a fresh clone, just like re-reading
//! the file would.

use std::cell::{Cell, RefCell};

use super::error::StorageResult;
use super::Persistence;
use crate::models::Collection;

#[derive(Debug, Default)]
pub struct MemoryPersistence {
    collection: RefCell<Option<Collection>>,
    saves: Cell<usize>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing collection, as if the file already held it
    pub fn with_collection(collection: Collection) -> Self {
        Self {
            collection: RefCell::new(Some(collection)),
            saves: Cell::new(0),
        }
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl Persistence for MemoryPersistence {
    fn initialize(&self) -> StorageResult<()> {
        let mut slot = self.collection.borrow_mut();
        if slot.is_none() {
            *slot = Some(Collection::new());
        }
        Ok(())
    }

    fn load(&self) -> Collection {
        self.collection.borrow().clone().unwrap_or_default()
    }

    fn save(&self, collection: &Collection) -> StorageResult<()> {
        *self.collection.borrow_mut() = Some(collection.clone());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    #[test]
    fn test_initialize_keeps_existing() {
        let existing: Collection = vec![Entry::with_id(1, "A", "http://a")].into();
        let persistence = MemoryPersistence::with_collection(existing.clone());

        persistence.initialize().unwrap();
        assert_eq!(persistence.load(), existing);
    }

    #[test]
    fn test_save_replaces_and_counts() {
        let persistence = MemoryPersistence::new();
        persistence.initialize().unwrap();
        assert!(persistence.load().is_empty());
        assert_eq!(persistence.save_count(), 0);

        let next: Collection = vec![Entry::with_id(2, "B", "http://b")].into();
        persistence.save(&next).unwrap();
        assert_eq!(persistence.load(), next);
        assert_eq!(persistence.save_count(), 1);
    }
}
