//! Playlist operations
//!
//! The `Store` is the value every caller goes through. Each operation reads
//! the collection fresh from persistence, applies one change, and writes the
//! whole collection back. Nothing is cached between calls, so changes made by
//! another process show up on the next read.
//!
//! Invalid input (blank fields, non-positive IDs, unparseable imports) is a
//! silent no-op rather than an error. Only failed writes are reported.
//!
//! ## Usage
//!
//! ```ignore
//! let store = Store::open(&config)?;
//!
//! store.add("Movie", "http://example.com/video")?;
//! let doc = store.export("m3u")?;
//! ```

use tracing::{debug, info, warn};

use crate::codec::{self, native, ExportDocument, ExportError, ExportFormat};
use crate::config::Config;
use crate::locale::Locale;
use crate::models::{Collection, Entry};
use crate::storage::{JsonFilePersistence, Persistence, StorageResult};

/// Entry point for reading, changing and exporting the playlist
pub struct Store<P: Persistence = JsonFilePersistence> {
    persistence: P,
    locale: Locale,
}

impl Store<JsonFilePersistence> {
    /// Open the JSON file named by the configuration
    ///
    /// Creates an empty data file on first run.
    pub fn open(config: &Config) -> StorageResult<Self> {
        let store = Self::new(JsonFilePersistence::new(&config.data_file))?;
        Ok(store.with_locale(config.locale))
    }
}

impl<P: Persistence> Store<P> {
    /// Wrap a persistence backend, initializing it
    pub fn new(persistence: P) -> StorageResult<Self> {
        persistence.initialize()?;
        Ok(Self {
            persistence,
            locale: Locale::default(),
        })
    }

    /// Use a different language for user-visible messages
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Where the playlist is stored
    pub fn location(&self) -> String {
        self.persistence.location()
    }

    /// Current collection
    pub fn entries(&self) -> Collection {
        self.persistence.load()
    }

    /// Append a new entry
    ///
    /// Title and URL are trimmed. Returns `None` without writing when
    /// either is blank.
    pub fn add(&self, title: &str, url: &str) -> StorageResult<Option<Entry>> {
        let (title, url) = (title.trim(), url.trim());
        if title.is_empty() || url.is_empty() {
            debug!("Ignoring add with blank title or url");
            return Ok(None);
        }

        let mut collection = self.persistence.load();
        let entry = Entry::with_id(collection.next_id(), title, url);
        collection.push(entry.clone());
        self.persistence.save(&collection)?;

        info!("Added entry {}", entry.id);
        Ok(Some(entry))
    }

    /// Replace title and URL of the first entry with `id`
    ///
    /// Returns `false` without writing when `id` is not positive, a field is
    /// blank, or no entry matches.
    pub fn edit(&self, id: i64, title: &str, url: &str) -> StorageResult<bool> {
        let (title, url) = (title.trim(), url.trim());
        if id <= 0 || title.is_empty() || url.is_empty() {
            debug!("Ignoring edit of {} with invalid input", id);
            return Ok(false);
        }

        let mut collection = self.persistence.load();
        let Some(entry) = collection.find_mut(id) else {
            debug!("No entry {} to edit", id);
            return Ok(false);
        };
        entry.set_fields(title, url);
        self.persistence.save(&collection)?;

        info!("Edited entry {}", id);
        Ok(true)
    }

    /// Remove every entry with `id`
    ///
    /// Returns how many entries were removed. Nothing is written when `id` is
    /// not positive or nothing matched.
    pub fn delete(&self, id: i64) -> StorageResult<usize> {
        if id <= 0 {
            debug!("Ignoring delete of non-positive id {}", id);
            return Ok(0);
        }

        let mut collection = self.persistence.load();
        let removed = collection.retain(|e| e.id != id);
        if removed > 0 {
            self.persistence.save(&collection)?;
            info!("Deleted {} entries with id {}", removed, id);
        }
        Ok(removed)
    }

    /// Replace the whole collection with a JSON payload
    ///
    /// Returns the number of imported entries, or `None` when the payload
    /// does not parse to a list of entries (the current collection is kept).
    /// Duplicate IDs in the payload are accepted and logged.
    pub fn import(&self, payload: &str) -> StorageResult<Option<usize>> {
        let Some(collection) = native::decode_import(payload) else {
            warn!("Import payload is not a list of entries, keeping current playlist");
            return Ok(None);
        };

        let duplicates = collection.duplicate_ids();
        if !duplicates.is_empty() {
            warn!("Imported playlist repeats ids {:?}", duplicates);
        }

        self.persistence.save(&collection)?;
        info!("Imported {} entries", collection.len());
        Ok(Some(collection.len()))
    }

    /// Render the current collection in the format named by `selector`
    ///
    /// An unknown selector yields `ExportError::Unsupported`, whose message is
    /// meant to be shown to the user as-is.
    pub fn export(&self, selector: &str) -> Result<ExportDocument, ExportError> {
        let format = ExportFormat::parse(selector, self.locale)?;
        let collection = self.persistence.load();
        debug!("Exporting {} entries as {}", collection.len(), format);
        Ok(codec::render(&collection, format)?)
    }
}
