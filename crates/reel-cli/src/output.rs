//! Output formatting for CLI
//!
//! Provides consistent output formatting across all commands:
//! - Human-readable default output
//! - JSON output (--json flag)
//! - Quiet mode for scripting (--quiet flag)

use reel_core::{Collection, Entry, ExportFormat, Locale};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output
    Json,
    /// Quiet mode - minimal output
    Quiet,
}

impl OutputFormat {
    /// Create format from CLI flags
    pub fn from_flags(json: bool, quiet: bool) -> Self {
        if quiet {
            OutputFormat::Quiet
        } else if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Output helper for consistent formatting
pub struct Output {
    /// The output format
    pub format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print a single entry
    pub fn print_entry(&self, entry: &Entry) {
        match self.format {
            OutputFormat::Human => {
                println!("ID:    {}", entry.id);
                println!("Title: {}", entry.title);
                println!("URL:   {}", entry.url);
            }
            OutputFormat::Json => {
                println!("{}", to_json(entry));
            }
            OutputFormat::Quiet => {
                println!("{}", entry.id);
            }
        }
    }

    /// Print the whole playlist
    pub fn print_entries(&self, entries: &Collection, locale: Locale) {
        match self.format {
            OutputFormat::Human => {
                if entries.is_empty() {
                    println!("{}", locale.empty_playlist());
                    return;
                }
                let id_width = entries
                    .iter()
                    .map(|e| e.id.to_string().len())
                    .max()
                    .unwrap_or(2)
                    .max(2);
                println!("{:>width$} | {:<35} | URL", "ID", "Title", width = id_width);
                for entry in entries {
                    println!(
                        "{:>width$} | {:<35} | {}",
                        entry.id,
                        truncate(&entry.title, 35),
                        truncate(&entry.url, 45),
                        width = id_width
                    );
                }
                println!("\n{} entr{}", entries.len(), plural_y(entries.len()));
            }
            OutputFormat::Json => {
                println!("{}", to_json(entries));
            }
            OutputFormat::Quiet => {
                for entry in entries {
                    println!("{}", entry.id);
                }
            }
        }
    }

    /// Print the supported export formats
    pub fn print_formats(&self, formats: &[ExportFormat]) {
        match self.format {
            OutputFormat::Human => {
                for format in formats {
                    println!(
                        "{:<5} {:<32} {}",
                        format.extension(),
                        format.media_type(),
                        format.file_name()
                    );
                }
            }
            OutputFormat::Json => {
                let json_formats: Vec<_> = formats
                    .iter()
                    .map(|f| {
                        serde_json::json!({
                            "format": f.extension(),
                            "media_type": f.media_type(),
                            "file_name": f.file_name(),
                        })
                    })
                    .collect();
                println!("{}", to_json(&json_formats));
            }
            OutputFormat::Quiet => {
                for format in formats {
                    println!("{}", format.extension());
                }
            }
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        match self.format {
            OutputFormat::Human => println!("✓ {}", message),
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::json!({"status": "success", "message": message})
                );
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Check if we should prompt for confirmation
    pub fn should_prompt(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Print an informational message
    pub fn message(&self, msg: &str) {
        match self.format {
            OutputFormat::Human => println!("{}", msg),
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"message": msg}));
            }
            OutputFormat::Quiet => {}
        }
    }

    /// Print a message the user must see, even in quiet mode
    pub fn notice(&self, msg: &str) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({"status": "error", "message": msg}));
            }
            OutputFormat::Human | OutputFormat::Quiet => println!("{}", msg),
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

fn plural_y(count: usize) -> &'static str {
    if count == 1 {
        "y"
    } else {
        "ies"
    }
}

/// Truncate a string to max characters, adding "..." if truncated
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Human);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Quiet);
        // Quiet takes precedence
        assert_eq!(OutputFormat::from_flags(true, true), OutputFormat::Quiet);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("this is a long string", 10), "this is...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("caffè caffè caffè", 8), "caffè...");
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural_y(1), "y");
        assert_eq!(plural_y(0), "ies");
        assert_eq!(plural_y(3), "ies");
    }

    #[test]
    fn test_should_prompt_only_for_humans() {
        assert!(Output::new(OutputFormat::Human).should_prompt());
        assert!(!Output::new(OutputFormat::Json).should_prompt());
        assert!(!Output::new(OutputFormat::Quiet).should_prompt());
    }
}
