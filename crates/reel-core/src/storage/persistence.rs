//! JSON file persistence
//!
//! The whole collection lives in one pretty-printed JSON file that is
//! rewritten in full on every save. Writes are staged in a uniquely named
//! sibling file and renamed over the target, so a crash never leaves half a
//! file and no other file in the directory is touched.
//!
//! Reads never fail: a missing, unreadable or malformed file loads as an
//! empty collection.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::error::{StorageError, StorageResult};
use super::Persistence;
use crate::codec::native;
use crate::models::Collection;

/// Persistence backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    /// Create a handler for the given data file
    ///
    /// Nothing is touched on disk until `initialize` or `save` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Persistence for JsonFilePersistence {
    fn initialize(&self) -> StorageResult<()> {
        if self.exists() {
            debug!("Data file {:?} already present", self.path);
            return Ok(());
        }

        debug!("Creating empty data file {:?}", self.path);
        let bytes = native::encode(&Collection::new())?;
        atomic_write(&self.path, &bytes)
    }

    fn load(&self) -> Collection {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Data file {:?} not found, starting empty", self.path);
                return Collection::new();
            }
            Err(e) => {
                warn!("Could not read {:?}, treating as empty: {}", self.path, e);
                return Collection::new();
            }
        };

        match native::try_decode(&bytes) {
            Some(collection) => {
                debug!("Loaded {} entries from {:?}", collection.len(), self.path);
                collection
            }
            None => {
                warn!(
                    "Data file {:?} does not hold a list of entries, treating as empty",
                    self.path
                );
                Collection::new()
            }
        }
    }

    fn save(&self, collection: &Collection) -> StorageResult<()> {
        let bytes = native::encode(collection)?;
        atomic_write(&self.path, &bytes)?;
        debug!("Saved {} entries to {:?}", collection.len(), self.path);
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Replace `path` with `data` in one step
///
/// The bytes are staged in a uniquely named file beside the target, synced,
/// and renamed over it. The staged file removes itself if anything fails.
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|source| StorageError::CreateDirectory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut staged =
        NamedTempFile::new_in(dir).map_err(|e| StorageError::from_io(e, path.to_path_buf()))?;
    staged
        .write_all(data)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| StorageError::from_io(e, path.to_path_buf()))?;

    staged
        .persist(path)
        .map_err(|e| StorageError::Replace {
            path: path.to_path_buf(),
            source: e.error,
        })?;

    Ok(())
}
