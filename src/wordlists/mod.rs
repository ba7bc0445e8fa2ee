//! Curated word lists for the daily puzzle
//!
//! Provides the embedded F1 list plus a loader for custom lists, and the
//! `WordList` wrapper that enforces the one fatal configuration rule: the
//! list must not be empty, or no target word can ever be selected.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use std::fmt;

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// No valid words; the game cannot produce a target
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {}

/// A non-empty ordered list of candidate target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Wrap a vector of words, rejecting the empty case
    ///
    /// # Errors
    /// Returns `WordListError::Empty` for an empty vector.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The embedded curated F1 list
    ///
    /// # Panics
    /// Will not panic: the embedded list is non-empty and every entry is
    /// validated by tests.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(WORDS)).expect("embedded word list is non-empty")
    }

    /// Number of words in rotation
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects the empty list
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at a rotation index
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> &Word {
        &self.words[index]
    }

    /// All words, in rotation order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}
