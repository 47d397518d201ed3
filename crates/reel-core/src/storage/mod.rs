//! Storage layer
//!
//! The collection is persisted as one document and always read and written
//! whole. `Persistence` is the seam: the JSON file is the real backend and
//! `MemoryPersistence` substitutes for it in tests.
//!
//! There is no locking. Two writers racing on the same file means the last
//! save wins.

pub mod error;
pub mod memory;
pub mod persistence;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryPersistence;
pub use persistence::JsonFilePersistence;

use crate::models::Collection;

/// Whole-document storage for a collection
pub trait Persistence {
    /// Create an empty document if none exists yet
    ///
    /// Must be safe to call on every startup; existing data is never touched.
    fn initialize(&self) -> StorageResult<()>;

    /// Read the current document
    ///
    /// Never fails: anything unreadable degrades to an empty collection.
    fn load(&self) -> Collection;

    /// Replace the stored document
    fn save(&self, collection: &Collection) -> StorageResult<()>;

    /// Human-readable description of where data lives
    fn location(&self) -> String;
}
