//! User-visible messages
//!
//! reel ships English and Italian text for the few messages that reach
//! the user directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language used for user-visible messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    It,
}

impl Locale {
    /// Shown when an export is requested in an unknown format
    pub fn unsupported_format(self) -> &'static str {
        match self {
            Locale::En => "Export format not supported.",
            Locale::It => "Formato di esportazione non supportato.",
        }
    }

    /// Shown when the playlist has no entries
    pub fn empty_playlist(self) -> &'static str {
        match self {
            Locale::En => "No items found.",
            Locale::It => "Nessun elemento presente.",
        }
    }

    /// Asked before deleting an entry
    pub fn confirm_delete(self) -> &'static str {
        match self {
            Locale::En => "Are you sure you want to delete this item?",
            Locale::It => "Sei sicuro di voler eliminare questo elemento?",
        }
    }

    /// Choices shown after a yes/no question, default last
    pub fn yes_no_hint(self) -> &'static str {
        match self {
            Locale::En => "[y/N]",
            Locale::It => "[s/N]",
        }
    }

    /// Whether a typed answer means yes; anything else is no
    pub fn is_yes(self, answer: &str) -> bool {
        let answer = answer.trim().to_lowercase();
        match self {
            Locale::En => matches!(answer.as_str(), "y" | "yes"),
            Locale::It => matches!(answer.as_str(), "s" | "si" | "sì"),
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::It => "it",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "it" => Ok(Locale::It),
            other => Err(format!("Unknown locale '{}'. Use 'en' or 'it'.", other)),
        }
    }
}
