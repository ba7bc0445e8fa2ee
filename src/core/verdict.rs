//! Guess verdict calculation and representation
//!
//! A verdict records the per-position feedback for one guess against one
//! target word:
//! - `Correct` — right letter, right position (green)
//! - `Present` — letter is in the word, wrong position (yellow)
//! - `Absent` — letter is not in the word, or all its copies are used up
//!
//! Duplicate letters follow Wordle's exact rules: a letter is only marked
//! Present while unmatched copies of it remain in the target.

use super::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-position feedback for a single letter
///
/// The derived ordering (`Absent < Present < Correct`) is what makes the
/// keyboard hint map's monotonic-upgrade rule a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterScore {
    Absent,
    Present,
    Correct,
}

/// Error type for unscorable guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// Guess length does not match the target length
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => {
                write!(f, "Guess must be {target} letters, got {guess}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

/// Feedback for one guess: one `LetterScore` per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict(Vec<LetterScore>);

impl Verdict {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and remove each
    ///    matched letter from the target's remaining-letter pool
    /// 2. Second pass: for every other position, mark Present only while the
    ///    pool still holds a copy of that letter, consuming one per mark
    ///
    /// The two-pass order matters: checking "does the target contain this
    /// letter" per position would over-count repeats (EERIE against ELITE
    /// must not flag three E's when the target only has two).
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` when the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use pitwall::core::{LetterScore, Verdict, Word};
    ///
    /// let target = Word::new("APEX").unwrap();
    /// let guess = Word::new("EXAP").unwrap();
    /// let verdict = Verdict::score(&guess, &target).unwrap();
    ///
    /// assert!(verdict.scores().iter().all(|&s| s == LetterScore::Present));
    /// ```
    pub fn score(guess: &Word, target: &Word) -> Result<Self, ScoreError> {
        if guess.len() != target.len() {
            return Err(ScoreError::LengthMismatch {
                guess: guess.len(),
                target: target.len(),
            });
        }

        let len = target.len();
        let mut scores = vec![LetterScore::Absent; len];
        let mut remaining = target.letter_counts();

        // First pass: exact matches
        for i in 0..len {
            if guess.letter_at(i) == target.letter_at(i) {
                scores[i] = LetterScore::Correct;

                if let Some(count) = remaining.get_mut(&guess.letter_at(i)) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present-but-misplaced, bounded by the remaining pool
        for i in 0..len {
            if scores[i] == LetterScore::Absent
                && let Some(count) = remaining.get_mut(&guess.letter_at(i))
                && *count > 0
            {
                scores[i] = LetterScore::Present;
                *count -= 1;
            }
        }

        Ok(Self(scores))
    }

    /// Per-position scores, in guess order
    #[inline]
    #[must_use]
    pub fn scores(&self) -> &[LetterScore] {
        &self.0
    }

    /// Number of positions (the target length)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is Correct (a winning guess)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::Correct)
    }

    /// Iterate over `(position, score)` pairs
    pub fn iter(&self) -> impl Iterator<Item = LetterScore> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn verdict(guess: &str, target: &str) -> Verdict {
        Verdict::score(&word(guess), &word(target)).unwrap()
    }

    use LetterScore::{Absent, Correct, Present};

    #[test]
    fn verdict_all_absent() {
        let v = verdict("DRS", "HAM");
        assert_eq!(v.scores(), &[Absent, Absent, Absent]);
        assert!(!v.is_win());
    }

    #[test]
    fn verdict_all_correct_is_win() {
        let v = verdict("PODIUM", "PODIUM");
        assert!(v.scores().iter().all(|&s| s == Correct));
        assert!(v.is_win());
    }

    #[test]
    fn verdict_length_mismatch() {
        let err = Verdict::score(&word("HALO"), &word("PODIUM")).unwrap_err();
        assert_eq!(
            err,
            ScoreError::LengthMismatch {
                guess: 4,
                target: 6
            }
        );
    }

    #[test]
    fn verdict_all_letters_misplaced() {
        // Every letter of APEX appears exactly once in the guess, all in the
        // wrong position
        let v = verdict("EXAP", "APEX");
        assert_eq!(v.scores(), &[Present, Present, Present, Present]);
    }

    #[test]
    fn verdict_repeated_letters_bounded_by_target_count() {
        // ELITE has two E's; EERIE guesses three. Exactly two of the three
        // E-positions may score, never more.
        let v = verdict("EERIE", "ELITE");

        // Both E's of ELITE are exact matches (positions 0 and 4), so the
        // middle E of EERIE finds an empty pool and scores Absent
        assert_eq!(v.scores(), &[Correct, Absent, Absent, Present, Correct]);

        let e_tags = v
            .scores()
            .iter()
            .zip(b"EERIE")
            .filter(|&(&s, &ch)| ch == b'E' && s != Absent)
            .count();
        assert_eq!(e_tags, 2);
    }

    #[test]
    fn verdict_exact_match_consumes_pool_first() {
        // Target FERRARI has three R's; guess RRRRRRR (7 R's) must score
        // exactly three of them, all as exact matches (positions 2, 3, 5)
        let v = verdict("RRRRRRR", "FERRARI");

        let correct = v.scores().iter().filter(|&&s| s == Correct).count();
        let present = v.scores().iter().filter(|&&s| s == Present).count();
        assert_eq!(correct, 3);
        assert_eq!(present, 0);
    }

    #[test]
    fn verdict_letter_tags_never_exceed_target_count() {
        let cases = [
            ("EERIE", "ELITE"),
            ("RRRRRRR", "FERRARI"),
            ("BOXBOX", "PODIUM"),
            ("PITSTOP", "PITWALL"),
            ("GEARBOX", "PADDOCK"),
        ];

        for (guess, target) in cases {
            let (g, t) = (word(guess), word(target));
            if g.len() != t.len() {
                continue;
            }
            let v = Verdict::score(&g, &t).unwrap();

            for letter in b'A'..=b'Z' {
                let tagged = v
                    .scores()
                    .iter()
                    .zip(g.bytes())
                    .filter(|&(&s, &ch)| ch == letter && s != Absent)
                    .count();
                let in_target = t.bytes().iter().filter(|&&ch| ch == letter).count();
                assert!(
                    tagged <= in_target,
                    "{guess} vs {target}: letter {} tagged {tagged}x but target has {in_target}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn verdict_correct_iff_positions_equal() {
        let (g, t) = (word("PITSTOP"), word("PITWALL"));
        let v = Verdict::score(&g, &t).unwrap();

        for (i, score) in v.iter().enumerate() {
            assert_eq!(score == Correct, g.letter_at(i) == t.letter_at(i));
        }
    }

    #[test]
    fn verdict_idempotent() {
        let first = verdict("EERIE", "ELITE");
        for _ in 0..5 {
            assert_eq!(verdict("EERIE", "ELITE"), first);
        }
    }

    #[test]
    fn letter_score_ordering() {
        assert!(Absent < Present);
        assert!(Present < Correct);
    }
}
