//! Word list loading utilities
//!
//! Reads newline-delimited dictionaries. Lines are trimmed and lowercased, blank lines
//! are skipped. De-duplication happens when the words land in a `WordGraph`.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Parse newline-delimited text into normalized words
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines().filter_map(normalize).collect()
}
