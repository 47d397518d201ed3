//! Playlist codecs
//!
//! Pure functions converting a `Collection` to and from external
//! representations. None of them touch the filesystem.
//!
//! - `native`: pretty JSON, the storage format, readable and writable
//! - `playlist`: extended M3U (`.m3u` and `.m3u8`), write-only
//! - `tabular`: CSV, write-only
//! - `relational`: SQL script, write-only

pub mod native;
pub mod playlist;
pub mod relational;
pub mod tabular;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::locale::Locale;
use crate::models::Collection;

pub use playlist::PlaylistVariant;

/// Errors produced while encoding
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Failed to encode playlist as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CodecResult<T> = Result<T, CodecError>;

/// Errors returned by an export request
#[derive(Error, Debug)]
pub enum ExportError {
    /// The selector does not name a known format
    ///
    /// The display text is the localized message meant for the user.
    #[error("{}", .locale.unsupported_format())]
    Unsupported { selector: String, locale: Locale },

    #[error(transparent)]
    Codec(#[from] CodecError),
}

impl ExportError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, ExportError::Unsupported { .. })
    }
}

/// Every format a collection can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    M3u,
    M3u8,
    Csv,
    Sql,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::Json,
        ExportFormat::M3u,
        ExportFormat::M3u8,
        ExportFormat::Csv,
        ExportFormat::Sql,
    ];

    /// Resolve a selector, reporting failure in the given locale
    pub fn parse(selector: &str, locale: Locale) -> Result<Self, ExportError> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "m3u" => Ok(ExportFormat::M3u),
            "m3u8" => Ok(ExportFormat::M3u8),
            "csv" => Ok(ExportFormat::Csv),
            "sql" => Ok(ExportFormat::Sql),
            _ => Err(ExportError::Unsupported {
                selector: selector.to_string(),
                locale,
            }),
        }
    }

    /// Selector and file extension
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::M3u => PlaylistVariant::M3u.extension(),
            ExportFormat::M3u8 => PlaylistVariant::M3u8.extension(),
            ExportFormat::Csv => "csv",
            ExportFormat::Sql => "sql",
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::M3u => PlaylistVariant::M3u.media_type(),
            ExportFormat::M3u8 => PlaylistVariant::M3u8.media_type(),
            ExportFormat::Csv => "text/csv",
            ExportFormat::Sql => "text/sql",
        }
    }

    /// Filename suggested to whoever receives the export
    pub fn file_name(self) -> String {
        format!("playlist.{}", self.extension())
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, Locale::default())
    }
}

/// A rendered export ready to be streamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub format: ExportFormat,
    pub media_type: &'static str,
    pub file_name: String,
    pub body: Vec<u8>,
}

/// Render a collection in the requested format
pub fn render(collection: &Collection, format: ExportFormat) -> CodecResult<ExportDocument> {
    let body = match format {
        ExportFormat::Json => native::encode(collection)?,
        ExportFormat::M3u => playlist::encode(collection, PlaylistVariant::M3u).into_bytes(),
        ExportFormat::M3u8 => playlist::encode(collection, PlaylistVariant::M3u8).into_bytes(),
        ExportFormat::Csv => tabular::encode(collection).into_bytes(),
        ExportFormat::Sql => relational::encode(collection).into_bytes(),
    };

    Ok(ExportDocument {
        format,
        media_type: format.media_type(),
        file_name: format.file_name(),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entry;

    #[test]
    fn test_parse_selectors() {
        for format in ExportFormat::ALL {
            let parsed: ExportFormat = format.extension().parse().unwrap();
            assert_eq!(parsed, format);
        }
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    }

    #[test]
    fn test_unsupported_selector_message() {
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "Export format not supported.");

        let err = ExportFormat::parse("pdf", Locale::It).unwrap_err();
        assert_eq!(err.to_string(), "Formato di esportazione non supportato.");
    }

    #[test]
    fn test_metadata_table() {
        let expected = [
            (ExportFormat::Json, "application/json", "playlist.json"),
            (ExportFormat::M3u, "audio/x-mpegurl", "playlist.m3u"),
            (ExportFormat::M3u8, "application/vnd.apple.mpegurl", "playlist.m3u8"),
            (ExportFormat::Csv, "text/csv", "playlist.csv"),
            (ExportFormat::Sql, "text/sql", "playlist.sql"),
        ];
        for (format, media_type, file_name) in expected {
            assert_eq!(format.media_type(), media_type);
            assert_eq!(format.file_name(), file_name);
        }
    }

    #[test]
    fn test_render_dispatch() {
        let collection: Collection = vec![Entry::with_id(1, "Movie", "http://a")].into();

        let doc = render(&collection, ExportFormat::M3u8).unwrap();
        assert_eq!(doc.media_type, "application/vnd.apple.mpegurl");
        assert_eq!(doc.file_name, "playlist.m3u8");
        assert!(doc.body.starts_with(b"#EXTM3U\n"));

        let doc = render(&collection, ExportFormat::Json).unwrap();
        assert_eq!(native::decode(&doc.body), collection);

        let doc = render(&collection, ExportFormat::Sql).unwrap();
        assert!(doc.body.starts_with(b"CREATE TABLE IF NOT EXISTS playlist"));
    }
}
