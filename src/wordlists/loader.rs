//! Word list loading utilities
//!
//! Loads alternative curated lists from plain text files, one word per line.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, skipping blank lines and invalid entries
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use pitwall::wordlists::{WORDS, loader::words_from_slice};
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
