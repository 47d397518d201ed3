//! reel core library
//!
//! This crate provides the core of reel, a small playlist manager that keeps
//! an ordered list of media entries (title + URL) in a flat JSON file and
//! exports it as JSON, M3U, M3U8, CSV or a SQL script.
//!
//! # Quick Start
//!
//! ```text
//! let store = Store::open(&Config::load()?)?;
//!
//! store.add("Movie", "http://example.com/video")?;
//! let doc = store.export("m3u8")?;
//! ```
//!
//! # Modules
//!
//! - `store`: Playlist operations (main entry point)
//! - `models`: `Entry` and `Collection`
//! - `codec`: Format encoders and the native decoder
//! - `storage`: Whole-document persistence
//! - `config`: Application configuration
//! - `locale`: User-visible messages

pub mod codec;
pub mod config;
pub mod locale;
pub mod models;
pub mod storage;
pub mod store;

pub use codec::{ExportDocument, ExportError, ExportFormat, PlaylistVariant};
pub use config::Config;
pub use locale::Locale;
pub use models::{Collection, Entry};
pub use storage::{
    JsonFilePersistence, MemoryPersistence, Persistence, StorageError, StorageResult,
};
pub use store::Store;
