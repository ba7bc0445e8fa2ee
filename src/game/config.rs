//! Session configuration
//!
//! Everything the original read from ambient environment (query parameters,
//! module globals) arrives here as explicit inputs instead, so sessions are
//! fully reproducible under test.

use super::selector;
use crate::core::Word;
use chrono::NaiveDate;

/// Explicit inputs for starting a session
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Rotation epoch for word-of-day selection
    pub epoch: NaiveDate,

    /// Diagnostic override: play this word instead of today's selection.
    /// Validated up front; never offered as a gameplay mechanic.
    pub forced_word: Option<Word>,

    /// Discard any stored session and start fresh
    pub reset: bool,

    /// Master guess token: an always-winning guess exempt from length
    /// checking. Off unless explicitly supplied; diagnostics only.
    pub master_guess: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            epoch: selector::default_epoch(),
            forced_word: None,
            reset: false,
            master_guess: None,
        }
    }
}

impl GameConfig {
    /// Normalized master guess, if configured
    #[must_use]
    pub fn master_guess(&self) -> Option<String> {
        self.master_guess.as_ref().map(|t| t.trim().to_uppercase())
    }
}
