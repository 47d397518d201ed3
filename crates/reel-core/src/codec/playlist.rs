//! Extended M3U playlists
//!
//! Both variants share one layout: an `#EXTM3U` header, then an `#EXTINF`
//! line and a URL line per entry. Titles and URLs are written verbatim.

use std::fmt::Write;

use crate::models::Collection;

/// Header line of an extended M3U file
pub const HEADER: &str = "#EXTM3U";

/// Duration marker for streams of unknown length
const UNKNOWN_DURATION: &str = "-1";

/// Which playlist flavour is being produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistVariant {
    /// Classic `.m3u`
    M3u,
    /// UTF-8 `.m3u8`
    M3u8,
}

impl PlaylistVariant {
    pub fn media_type(self) -> &'static str {
        match self {
            PlaylistVariant::M3u => "audio/x-mpegurl",
            PlaylistVariant::M3u8 => "application/vnd.apple.mpegurl",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            PlaylistVariant::M3u => "m3u",
            PlaylistVariant::M3u8 => "m3u8",
        }
    }
}

/// Render a collection as an extended M3U playlist
///
/// The variant does not affect the content.
pub fn encode(collection: &Collection, _variant: PlaylistVariant) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + collection.len() * 64);
    out.push_str(HEADER);
    out.push('\n');
    for entry in collection {
        // Writing into a String never fails
        let _ = writeln!(out, "#EXTINF:{}, {}", UNKNOWN_DURATION, entry.title);
        let _ = writeln!(out, "{}", entry.url);
    }
    out
}
