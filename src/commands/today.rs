//! Today's puzzle summary
//!
//! Prints the puzzle number and word length without revealing the answer.

use crate::game::{Clock, GameConfig, selector};
use crate::wordlists::WordList;

/// Summary of today's puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayInfo {
    pub date: chrono::NaiveDate,
    pub puzzle_number: i64,
    pub word_len: usize,
}

/// Compute today's puzzle summary
#[must_use]
pub fn today_info(list: &WordList, config: &GameConfig, clock: &impl Clock) -> TodayInfo {
    let date = clock.today();
    let word = match &config.forced_word {
        Some(word) => word,
        None => selector::word_of_day(date, list, config.epoch),
    };

    TodayInfo {
        date,
        puzzle_number: selector::puzzle_number(date, config.epoch),
        word_len: word.len(),
    }
}

/// Print today's puzzle summary
pub fn run_today(list: &WordList, config: &GameConfig, clock: &impl Clock) {
    let info = today_info(list, config, clock);

    println!("Puzzle #{} — {}", info.puzzle_number, info.date);
    println!("Today's word has {} letters.", info.word_len);
}
