//! Deterministic word-of-day selection
//!
//! Maps a calendar date to an index into the word list: whole days since a
//! fixed epoch, modulo the list length. Pure and total — the `WordList` type
//! guarantees a non-empty list, and `rem_euclid` keeps pre-epoch dates
//! (negative day counts) in range.

use crate::core::Word;
use crate::wordlists::WordList;
use chrono::NaiveDate;

/// The rotation epoch: the date the first word in the list was the answer
///
/// # Panics
/// Will not panic: 2023-01-01 is a valid calendar date.
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid epoch date")
}

/// Whole days between the epoch and `date` (negative before the epoch)
#[must_use]
pub fn puzzle_number(date: NaiveDate, epoch: NaiveDate) -> i64 {
    date.signed_duration_since(epoch).num_days()
}

/// Select the target word for `date`
#[must_use]
pub fn word_of_day<'a>(date: NaiveDate, list: &'a WordList, epoch: NaiveDate) -> &'a Word {
    let days = puzzle_number(date, epoch);
    let index = days.rem_euclid(list.len() as i64) as usize;
    list.get(index)
}
