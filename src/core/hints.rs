//! Keyboard hint aggregation
//!
//! Folds the verdicts of every guess so far into one best-known status per
//! letter, for coloring input affordances. Hints only ever upgrade
//! (Absent → Present → Correct); a letter locked in as Correct stays Correct
//! even when a later guess places it somewhere it scores Absent.
//!
//! The map is pure derived state: it can always be rebuilt by re-folding the
//! stored guesses against the target, which is exactly what session
//! resumption does instead of trusting a persisted copy.

use super::{LetterScore, Verdict, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Best-known status per letter across all guesses in a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    map: FxHashMap<u8, LetterScore>,
}

impl LetterHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one scored guess into the map
    ///
    /// Each position may only upgrade its letter's entry; `LetterScore`'s
    /// ordering makes that a `max` per letter.
    pub fn fold(&mut self, guess: &Word, verdict: &Verdict) {
        debug_assert_eq!(guess.len(), verdict.len());

        for (i, score) in verdict.iter().enumerate() {
            let letter = guess.letter_at(i);
            let entry = self.map.entry(letter).or_insert(score);
            *entry = (*entry).max(score);
        }
    }

    /// Rebuild the map from scratch by re-scoring every guess against the
    /// target in order
    ///
    /// Guesses the scorer rejects (a master-guess token of a different
    /// length) contribute nothing, so rebuilding is total over any stored
    /// guess history.
    #[must_use]
    pub fn rebuild<'a, I>(target: &Word, guesses: I) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut hints = Self::new();
        for guess in guesses {
            if let Ok(verdict) = Verdict::score(guess, target) {
                hints.fold(guess, &verdict);
            }
        }
        hints
    }

    /// Current status of a letter, or None if no guess has used it
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<LetterScore> {
        self.map.get(&letter).copied()
    }

    /// Number of letters with a known status
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Sorted `char → score` view, as persisted in the session record
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<char, LetterScore> {
        self.map
            .iter()
            .map(|(&letter, &score)| (letter as char, score))
            .collect()
    }
}
