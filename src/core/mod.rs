//! Core domain types for the daily word game
//!
//! This module contains the fundamental domain types. All types here are
//! pure, testable, and free of I/O.

mod hints;
mod verdict;
mod word;

pub use hints::LetterHints;
pub use verdict::{LetterScore, ScoreError, Verdict};
pub use word::{Word, WordError};
