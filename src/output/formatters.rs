//! Plain-text formatting utilities
//!
//! Everything here is color-free and deterministic, so results can be
//! shared, logged, or asserted on directly.

use crate::core::{LetterScore, Verdict};
use crate::game::{GameStatus, GuessRow, MAX_GUESSES};

/// Format a verdict as an emoji square row
#[must_use]
pub fn verdict_emoji(verdict: &Verdict) -> String {
    verdict
        .iter()
        .map(|score| match score {
            LetterScore::Correct => '🟩',
            LetterScore::Present => '🟨',
            LetterScore::Absent => '⬛',
        })
        .collect()
}

/// Build the shareable result text for a finished game
///
/// An emoji grid with a one-line header and verdict-free rows (the
/// master-guess diagnostic) left out:
///
/// ```text
/// Pitwall #42
/// ⬛🟨🟨⬛⬛🟩🟩
/// 🟩🟩🟩🟩🟩🟩🟩
/// Solved in 2/6 guesses!
/// ```
#[must_use]
pub fn share_text(puzzle_number: i64, rows: &[GuessRow], status: GameStatus) -> String {
    let grid: Vec<String> = rows
        .iter()
        .filter_map(|row| row.verdict.as_ref().map(verdict_emoji))
        .collect();

    let footer = match status {
        GameStatus::Won => format!("Solved in {}/{MAX_GUESSES} guesses!", rows.len()),
        _ => "Better luck tomorrow!".to_string(),
    };

    format!("Pitwall #{puzzle_number}\n{}\n{footer}", grid.join("\n"))
}

/// Format elapsed play time as m:ss
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
