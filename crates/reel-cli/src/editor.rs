//! Terminal interaction
//!
//! `import --edit` round-trips the payload through the user's editor, and
//! `edit`/`delete` read short answers from the terminal.

use std::env;
use std::fs;
use std::io::{self, BufRead, Write};
use std::process::Command;

use anyhow::{bail, Context, Result};
use reel_core::Locale;
use tempfile::Builder;

/// Let the user rewrite `initial` in $VISUAL or $EDITOR and return the result
///
/// The draft is a `.json` file so editors pick the right syntax mode. It is
/// removed once read back.
pub fn edit_text(initial: &str) -> Result<String> {
    let (program, args) = editor_command()?;

    let draft = Builder::new()
        .prefix("reel-import-")
        .suffix(".json")
        .tempfile()
        .context("Failed to create import draft")?;
    fs::write(draft.path(), initial)
        .with_context(|| format!("Failed to write import draft {:?}", draft.path()))?;

    let status = Command::new(&program)
        .args(&args)
        .arg(draft.path())
        .status()
        .with_context(|| format!("Failed to start editor '{}'", program))?;
    if !status.success() {
        bail!("Editor '{}' exited with {}, nothing imported", program, status);
    }

    fs::read_to_string(draft.path())
        .with_context(|| format!("Failed to read import draft {:?}", draft.path()))
}

/// $VISUAL wins over $EDITOR; either may carry arguments (`code --wait`)
fn editor_command() -> Result<(String, Vec<String>)> {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find_map(|value| split_command(&value))
        .context("No editor configured. Set $VISUAL or $EDITOR (e.g. export EDITOR=nano)")
}

fn split_command(value: &str) -> Option<(String, Vec<String>)> {
    let mut parts = value.split_whitespace().map(str::to_string);
    let program = parts.next()?;
    Some((program, parts.collect()))
}

pub fn stdin_is_tty() -> bool {
    atty::is(atty::Stream::Stdin)
}

/// Ask the localized delete question
///
/// Without a terminal there is nobody to answer, so the answer is no.
pub fn confirm_delete(locale: Locale) -> Result<bool> {
    if !stdin_is_tty() {
        return Ok(false);
    }
    let answer = ask(&format!("{} {} ", locale.confirm_delete(), locale.yes_no_hint()))?;
    Ok(locale.is_yes(&answer))
}

/// Ask for a field value; an empty answer keeps `current`
pub fn prompt_with_default(label: &str, current: &str) -> Result<String> {
    let answer = ask(&format!("{} [{}]: ", label, current))?;
    Ok(keep_or_replace(&answer, current))
}

fn ask(prompt: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;
    read_answer(&mut io::stdin().lock())
}

fn read_answer(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read answer from terminal")?;
    Ok(line)
}

fn keep_or_replace(answer: &str, current: &str) -> String {
    match answer.trim() {
        "" => current.to_string(),
        typed => typed.to_string(),
    }
}
