//! Import and export command handlers

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use reel_core::codec::native;
use reel_core::{ExportDocument, ExportFormat, Persistence, Store};

use crate::editor::{edit_text, stdin_is_tty};
use crate::output::Output;

/// Replace the playlist with a JSON payload
///
/// The payload comes from a file, from stdin (`-` or piped input), or from
/// the user's editor prefilled with the current playlist.
pub fn import<P: Persistence>(
    store: &Store<P>,
    file: Option<PathBuf>,
    edit: bool,
    output: &Output,
) -> Result<()> {
    let payload = if edit {
        let current = native::encode(&store.entries()).context("Failed to encode playlist")?;
        edit_text(&String::from_utf8_lossy(&current))?
    } else {
        read_payload(file.as_deref())?
    };

    match store.import(&payload).context("Failed to save imported playlist")? {
        Some(count) => output.success(&format!("Imported {} entries", count)),
        None => output.message("Nothing imported: input is not a JSON list of entries."),
    }

    Ok(())
}

/// Export the playlist to stdout or a file
///
/// An unknown format is reported to the user and is not an error.
pub fn export<P: Persistence>(
    store: &Store<P>,
    format: &str,
    destination: Option<PathBuf>,
    output: &Output,
) -> Result<()> {
    let doc = match store.export(format) {
        Ok(doc) => doc,
        Err(e) if e.is_unsupported() => {
            output.notice(&e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e).context("Failed to render export"),
    };

    match destination {
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&doc.body)?;
            stdout.flush()?;
        }
        Some(path) => {
            let target = export_target(&path, &doc);
            fs::write(&target, &doc.body)
                .with_context(|| format!("Failed to write export to {:?}", target))?;
            output.success(&format!(
                "Exported {} ({}) to {}",
                doc.format,
                doc.media_type,
                target.display()
            ));
        }
    }

    Ok(())
}

/// List the formats `export` accepts
pub fn formats(output: &Output) -> Result<()> {
    output.print_formats(&ExportFormat::ALL);
    Ok(())
}

fn read_payload(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file {:?}", path)),
        None if stdin_is_tty() => {
            bail!("No input given. Pass a FILE, '-' to read stdin, or --edit to open an editor.")
        }
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String> {
    let mut payload = String::new();
    io::stdin()
        .read_to_string(&mut payload)
        .context("Failed to read import payload from stdin")?;
    Ok(payload)
}

/// A directory gets the suggested filename appended
fn export_target(path: &Path, doc: &ExportDocument) -> PathBuf {
    if path.is_dir() {
        path.join(&doc.file_name)
    } else {
        path.to_path_buf()
    }
}
