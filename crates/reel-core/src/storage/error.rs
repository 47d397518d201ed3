//! Storage error handling
//!
//! Loading never fails, so every variant here comes from a save: preparing
//! the data directory, writing the staged copy, or swapping it into place.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::codec::CodecError;

/// A failed playlist save
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Permission denied writing playlist to '{path}'")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No space left to write playlist to '{path}'")]
    DiskFull {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Staging the new contents failed; the old file is untouched
    #[error("Failed to write playlist next to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The staged copy could not be moved over the data file
    #[error("Failed to replace '{path}' with the new playlist: {source}")]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl StorageError {
    /// Classify an I/O error hit while staging a save of `path`
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        if error.kind() == io::ErrorKind::PermissionDenied {
            StorageError::PermissionDenied {
                path,
                source: error,
            }
        } else if is_out_of_space(&error) {
            StorageError::DiskFull {
                path,
                source: error,
            }
        } else {
            StorageError::Write {
                path,
                source: error,
            }
        }
    }

    /// What the user can do about it, when there is something to do
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            StorageError::DiskFull { .. } => Some("Free up disk space and try again."),
            StorageError::PermissionDenied { .. } => {
                Some("Check file permissions, or point data_file somewhere writable.")
            }
            StorageError::CreateDirectory { .. } => {
                Some("Check that the data_file directory can be created.")
            }
            StorageError::Replace { .. } => {
                Some("Check that data_file names a regular file, not a directory.")
            }
            StorageError::Write { .. } | StorageError::Codec(_) => None,
        }
    }
}

fn is_out_of_space(error: &io::Error) -> bool {
    let msg = error.to_string().to_lowercase();
    ["no space left", "disk full", "quota exceeded", "not enough space"]
        .iter()
        .any(|needle| msg.contains(needle))
}

pub type StorageResult<T> = Result<T, StorageError>;
