//! Game session state machine
//!
//! Owns the day's target, the guess history, the lifecycle status, and the
//! elapsed-play clock, and keeps the persisted record in sync. All mutation
//! goes through `&mut self`, so submissions and ticks are serialized by
//! ownership — there is no way to interleave two submissions against the
//! same session.
//!
//! Persistence is best-effort: a failed load starts a fresh session, a
//! failed save is logged and the in-memory state stays authoritative.

use super::clock::Clock;
use super::config::GameConfig;
use super::selector;
use crate::core::{LetterHints, LetterScore, Verdict, Word, WordError};
use crate::store::{SESSION_KEY, SessionRecord, SessionStore};
use crate::wordlists::WordList;
use chrono::{Duration, NaiveDate};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of guesses per day
pub const MAX_GUESSES: usize = 6;

/// Session lifecycle status
///
/// `Won` and `Lost` are terminal: nothing moves a finished session back to
/// `InProgress` for the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Error type for rejected guess submissions
///
/// A rejected submission changes nothing: no guess is recorded, nothing is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Not a usable word (empty, non-ASCII, non-alphabetic)
    Invalid(WordError),
    /// Guess length does not match the target length
    LengthMismatch { expected: usize, actual: usize },
    /// The session has already finished
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{e}"),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Enter a {expected}-letter word (got {actual} letters)")
            }
            Self::GameOver => write!(f, "Today's game is already finished"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One submitted guess with its feedback
///
/// `verdict` is `None` only for a master-guess row, which wins without
/// being scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub text: String,
    pub verdict: Option<Verdict>,
}

/// One day's game: target word, guesses, status, elapsed time
#[derive(Debug)]
pub struct GameSession<S: SessionStore> {
    store: S,
    date: NaiveDate,
    target: Word,
    rows: Vec<GuessRow>,
    status: GameStatus,
    elapsed_seconds: u64,
    hints: LetterHints,
    master_guess: Option<String>,
}

impl<S: SessionStore> GameSession<S> {
    /// Start today's session: resume a matching stored record or create and
    /// immediately persist a fresh one
    ///
    /// A stored record is resumed only when both its date and its word match
    /// today's computed target; anything else (including a load failure or
    /// the `reset` flag) falls back to a fresh session. Resumption re-derives
    /// the hint map and verdict rows from the stored guesses rather than
    /// trusting persisted derived state.
    pub fn start(config: &GameConfig, list: &WordList, clock: &impl Clock, store: S) -> Self {
        let date = clock.today();
        let target = match &config.forced_word {
            Some(word) => word.clone(),
            None => selector::word_of_day(date, list, config.epoch).clone(),
        };

        let stored = if config.reset {
            None
        } else {
            match store.load(SESSION_KEY) {
                Ok(stored) => stored,
                Err(e) => {
                    warn!("Could not load stored session, starting fresh: {e}");
                    None
                }
            }
        };

        match stored {
            Some(record) if record.date == date && record.word == target.text() => {
                debug!(
                    "Resuming {date} session: {} guesses, {:?}",
                    record.guesses.len(),
                    record.status
                );
                Self::resume(record, date, target, config.master_guess(), store)
            }
            stored => {
                if stored.is_some() {
                    debug!("Stored session is for another day or word, starting fresh");
                }
                let mut session = Self {
                    store,
                    date,
                    target,
                    rows: Vec::new(),
                    status: GameStatus::InProgress,
                    elapsed_seconds: 0,
                    hints: LetterHints::new(),
                    master_guess: config.master_guess(),
                };
                session.persist();
                session
            }
        }
    }

    fn resume(
        record: SessionRecord,
        date: NaiveDate,
        target: Word,
        master_guess: Option<String>,
        store: S,
    ) -> Self {
        let mut rows = Vec::with_capacity(record.guesses.len());
        let mut scored = Vec::new();

        for text in record.guesses {
            let mut verdict = None;
            if let Ok(word) = Word::new(text.as_str())
                && let Ok(v) = Verdict::score(&word, &target)
            {
                scored.push(word);
                verdict = Some(v);
            }
            rows.push(GuessRow { text, verdict });
        }

        Self {
            store,
            date,
            target: target.clone(),
            rows,
            status: record.status,
            elapsed_seconds: record.elapsed_seconds,
            hints: LetterHints::rebuild(&target, &scored),
            master_guess,
        }
    }

    /// Submit a guess
    ///
    /// Rejected submissions (wrong length, invalid characters, finished
    /// session) change no state. An accepted guess is scored, folded into
    /// the hint map, appended, and the updated record is persisted before
    /// returning. Winning (by matching the target, or the master-guess
    /// token at any length) or missing on the sixth guess ends the session.
    ///
    /// # Errors
    /// Returns `GuessError` describing why the submission was rejected.
    pub fn submit_guess(&mut self, raw: &str) -> Result<GameStatus, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::GameOver);
        }

        let text = raw.trim().to_uppercase();

        if self.master_guess.as_deref() == Some(text.as_str()) {
            debug!("Master guess accepted");
            self.rows.push(GuessRow {
                text,
                verdict: None,
            });
            self.status = GameStatus::Won;
            self.persist();
            return Ok(self.status);
        }

        let word = Word::new(text).map_err(GuessError::Invalid)?;
        if word.len() != self.target.len() {
            return Err(GuessError::LengthMismatch {
                expected: self.target.len(),
                actual: word.len(),
            });
        }

        let verdict =
            Verdict::score(&word, &self.target).expect("guess length checked against target");
        self.hints.fold(&word, &verdict);

        let won = verdict.is_win();
        self.rows.push(GuessRow {
            text: word.text().to_string(),
            verdict: Some(verdict),
        });

        if won {
            self.status = GameStatus::Won;
            debug!("Session won in {} guesses", self.rows.len());
        } else if self.rows.len() == MAX_GUESSES {
            self.status = GameStatus::Lost;
            debug!("Session lost after {MAX_GUESSES} guesses");
        }

        self.persist();
        Ok(self.status)
    }

    /// Advance the elapsed-play clock by one second
    ///
    /// Persists the updated count while in progress; a no-op once the
    /// session has finished, so the clock stops exactly at the terminal
    /// transition.
    pub fn tick(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.elapsed_seconds += 1;
        self.persist();
    }

    fn persist(&mut self) {
        let record = self.to_record();
        if let Err(e) = self.store.save(SESSION_KEY, &record, Duration::days(1)) {
            warn!("Could not persist session, continuing in memory: {e}");
        }
    }

    fn to_record(&self) -> SessionRecord {
        SessionRecord {
            date: self.date,
            word: self.target.text().to_string(),
            guesses: self.rows.iter().map(|row| row.text.clone()).collect(),
            status: self.status,
            elapsed_seconds: self.elapsed_seconds,
            letter_hint_map: self.hints.to_map(),
        }
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The day's answer; renderers reveal it only after a loss
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// Length of the day's target word
    #[inline]
    #[must_use]
    pub fn word_len(&self) -> usize {
        self.target.len()
    }

    /// Submitted guesses with their verdicts, in order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    /// Guesses still available
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.rows.len())
    }

    /// Best-known status per letter, for keyboard coloring
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &LetterHints {
        &self.hints
    }

    /// Hint for a single letter, for renderers iterating A–Z
    #[inline]
    #[must_use]
    pub fn letter_hint(&self, letter: u8) -> Option<LetterScore> {
        self.hints.get(letter)
    }

    #[inline]
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Consume the session and return its store
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
