//! Init command handler

use anyhow::Result;

use reel_core::{Persistence, Store};

use crate::output::{Output, OutputFormat};

/// Report where the playlist lives
///
/// Opening the store already created the data file if it was missing.
pub fn init<P: Persistence>(store: &Store<P>, output: &Output) -> Result<()> {
    let location = store.location();
    let count = store.entries().len();

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_file": location,
                    "entries": count
                })
            );
        }
        OutputFormat::Quiet => println!("{}", location),
        OutputFormat::Human => {
            output.success(&format!("Playlist ready at {}", location));
            println!("{} entries", count);
        }
    }

    Ok(())
}
