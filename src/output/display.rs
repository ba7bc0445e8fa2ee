//! Colored terminal rendering of the grid and keyboard
//!
//! Consumes only the core's read interfaces (guess rows, per-letter hints).
//! Absent cells render on red to match the F1 theme rather than Wordle's
//! gray.

use crate::core::{LetterHints, LetterScore};
use crate::game::{GuessRow, MAX_GUESSES};
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn cell(letter: char, score: LetterScore) -> String {
    let text = format!(" {letter} ");
    match score {
        LetterScore::Correct => text.black().on_green().to_string(),
        LetterScore::Present => text.black().on_yellow().to_string(),
        LetterScore::Absent => text.white().on_red().to_string(),
    }
}

/// Render one submitted guess as a row of colored cells
///
/// A verdict-free row (the master-guess diagnostic) renders uncolored.
#[must_use]
pub fn format_guess_row(row: &GuessRow) -> String {
    match &row.verdict {
        Some(verdict) => row
            .text
            .chars()
            .zip(verdict.iter())
            .map(|(letter, score)| cell(letter, score))
            .collect(),
        None => row.text.clone(),
    }
}

/// Render an empty row of placeholder cells
#[must_use]
pub fn format_empty_row(word_len: usize) -> String {
    " · ".dimmed().to_string().repeat(word_len)
}

/// Render the full grid: submitted rows followed by empty rows up to the
/// guess limit
#[must_use]
pub fn format_grid(rows: &[GuessRow], word_len: usize) -> String {
    let mut lines: Vec<String> = rows.iter().map(format_guess_row).collect();
    for _ in rows.len()..MAX_GUESSES {
        lines.push(format_empty_row(word_len));
    }
    lines.join("\n")
}

/// Render the keyboard with each letter colored by its best-known status
///
/// Letters with no hint yet render plain; Absent letters render dimmed so
/// the eye skips them.
#[must_use]
pub fn format_keyboard(hints: &LetterHints) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .chars()
                .map(|letter| match hints.get(letter as u8) {
                    Some(LetterScore::Correct) => format!("{letter} ").black().on_green().to_string(),
                    Some(LetterScore::Present) => {
                        format!("{letter} ").black().on_yellow().to_string()
                    }
                    Some(LetterScore::Absent) => format!("{letter} ").bright_black().to_string(),
                    None => format!("{letter} "),
                })
                .collect();
            format!("{}{keys}", " ".repeat(i))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
