//! CSV export
//!
//! Minimal quoting: text fields are always wrapped in double quotes and any
//! embedded double quote is doubled. Newlines and commas are left as-is
//! inside the quotes.

use crate::models::Collection;

pub const HEADER: &str = "id,title,url";

/// Render a collection as CSV
pub fn encode(collection: &Collection) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + collection.len() * 64);
    out.push_str(HEADER);
    out.push('\n');
    for entry in collection {
        out.push_str(&entry.id.to_string());
        out.push(',');
        out.push_str(&quote(&entry.title));
        out.push(',');
        out.push_str(&quote(&entry.url));
        out.push('\n');
    }
    out
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
