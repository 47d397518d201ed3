//! Entry command handlers

use anyhow::{Context, Result};

use reel_core::{Persistence, Store};

use crate::editor::{confirm_delete, prompt_with_default};
use crate::output::Output;

/// Add a new entry
pub fn add<P: Persistence>(store: &Store<P>, title: String, url: String, output: &Output) -> Result<()> {
    match store.add(&title, &url).context("Failed to add entry")? {
        Some(entry) => {
            output.success(&format!("Added entry: {}", entry.id));
            output.print_entry(&entry);
        }
        None => output.message("Nothing added: title and URL must not be blank."),
    }
    Ok(())
}

/// List all entries in order
pub fn list<P: Persistence>(store: &Store<P>, output: &Output) -> Result<()> {
    output.print_entries(&store.entries(), store.locale());
    Ok(())
}

/// Edit an entry's title and URL
///
/// Fields not given on the command line are prompted for in human mode,
/// with the current value as default, and kept as-is otherwise.
pub fn edit<P: Persistence>(
    store: &Store<P>,
    id: i64,
    title: Option<String>,
    url: Option<String>,
    output: &Output,
) -> Result<()> {
    if !check_id(id, output) {
        return Ok(());
    }
    let Some(current) = store.entries().find(id).cloned() else {
        output.message(&format!("No entry with id {}", id));
        return Ok(());
    };

    let interactive = output.should_prompt() && (title.is_none() || url.is_none());
    if interactive {
        println!("Editing entry: {}", current.id);
        println!("Press Enter to keep current value, or type new value.\n");
    }

    let title = resolve_field(title, "Title", &current.title, interactive)?;
    let url = resolve_field(url, "URL", &current.url, interactive)?;

    if store.edit(id, &title, &url).context("Failed to update entry")? {
        output.success("Entry updated");
        if let Some(updated) = store.entries().find(id) {
            output.print_entry(updated);
        }
    } else {
        output.message("Nothing changed: title and URL must not be blank.");
    }

    Ok(())
}

/// Delete every entry with the given id
pub fn delete<P: Persistence>(store: &Store<P>, id: i64, yes: bool, output: &Output) -> Result<()> {
    if !check_id(id, output) {
        return Ok(());
    }
    let Some(entry) = store.entries().find(id).cloned() else {
        output.message(&format!("No entry with id {}", id));
        return Ok(());
    };

    if output.should_prompt() && !yes {
        println!("Delete entry: {} - {}", entry.id, entry.title);
        if !confirm_delete(store.locale())? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = store.delete(id).context("Failed to delete entry")?;
    if removed == 0 {
        output.message(&format!("No entry with id {}", id));
    } else {
        output.success(&format!("Deleted entry: {}", id));
    }

    Ok(())
}

/// The store leaves entries with a zero or negative id alone, even imported ones
fn check_id(id: i64, output: &Output) -> bool {
    if id > 0 {
        return true;
    }
    output.message(&format!(
        "Entry {} cannot be changed: only positive ids can be edited or deleted.",
        id
    ));
    false
}

fn resolve_field(given: Option<String>, label: &str, current: &str, interactive: bool) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None if interactive => prompt_with_default(label, current),
        None => Ok(current.to_string()),
    }
}
