//! SQL script export
//!
//! Emits a `CREATE TABLE IF NOT EXISTS` statement followed by one `INSERT`
//! per entry. String literals are single-quoted with embedded single quotes
//! doubled. The script has no transaction wrapping.

use std::fmt::Write;

use crate::models::Collection;

/// Table the script creates and fills
pub const TABLE: &str = "playlist";

/// Render a collection as a SQL script
pub fn encode(collection: &Collection) -> String {
    let mut out = String::new();
    // Writing into a String never fails
    let _ = writeln!(
        out,
        "CREATE TABLE IF NOT EXISTS {} (\n  id INTEGER PRIMARY KEY,\n  title TEXT,\n  url TEXT\n);",
        TABLE
    );
    for entry in collection {
        let _ = writeln!(
            out,
            "INSERT INTO {} (id, title, url) VALUES ({}, {}, {});",
            TABLE,
            entry.id,
            literal(&entry.title),
            literal(&entry.url)
        );
    }
    out
}

fn literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
