//! Flat-file output for fetched Wordle data

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// File name of the solution output
pub const ANSWER_FILE: &str = "answer.txt";

/// File name of the valid-guess output
pub const VALID_GUESSES_FILE: &str = "valid_guesses.txt";

/// Writes the solution word to `answer.txt` in `dir`, overwriting it
///
/// The file holds the bare word with no trailing newline.
///
/// # Errors
/// Returns `Io` if the file cannot be written
pub fn write_answer(dir: &Path, answer: &str) -> Result<PathBuf> {
    let path = dir.join(ANSWER_FILE);
    fs::write(&path, answer)?;
    info!(path = %path.display(), "Wrote answer");
    Ok(path)
}

/// Writes the guess list to `valid_guesses.txt` in `dir`, overwriting it
///
/// Words are sorted lexicographically and written one per line, each line
/// newline-terminated. Duplicates are kept.
///
/// # Errors
/// Returns `Io` if the file cannot be written
pub fn write_valid_guesses(dir: &Path, words: &[String]) -> Result<PathBuf> {
    let path = dir.join(VALID_GUESSES_FILE);
    fs::write(&path, render_sorted_lines(words))?;
    info!(path = %path.display(), count = words.len(), "Wrote valid guesses");
    Ok(path)
}

/// Renders words sorted, one per line
fn render_sorted_lines(words: &[String]) -> String {
    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_unstable();

    let mut out = String::with_capacity(words.iter().map(|w| w.len() + 1).sum());
    for word in sorted {
        out.push_str(word);
        out.push('\n');
    }
    out
}
