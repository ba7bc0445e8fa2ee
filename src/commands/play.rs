//! Interactive daily game loop
//!
//! Line-oriented front end over the session's public interfaces: renders
//! the grid and keyboard between prompts, feeds elapsed wall-clock seconds
//! to the session as ticks, and prints the share grid once the game ends.

use crate::game::{GameSession, GameStatus, intro};
use crate::output::{format_elapsed, format_grid, format_keyboard, share_text};
use crate::store::SessionStore;
use colored::Colorize;
use std::io::{self, Write};
use std::thread;
use std::time::Instant;

/// Run the interactive daily game
///
/// # Errors
///
/// Returns an error if reading user input fails.
pub fn run_play<S: SessionStore>(
    session: &mut GameSession<S>,
    puzzle_number: i64,
) -> Result<(), String> {
    println!();
    println!("{}", "  P I T W A L L".bright_red().bold());
    println!("  Daily F1 word  ·  Puzzle #{puzzle_number}");
    println!();

    if session.status() == GameStatus::InProgress && session.rows().is_empty() {
        play_intro();
    }

    let mut last_tick = Instant::now();

    while session.status() == GameStatus::InProgress {
        println!("{}", format_grid(session.rows(), session.word_len()));
        println!();
        println!("{}", format_keyboard(session.hints()));
        println!();

        let prompt = format!(
            "Guess {} of 6 — enter a {}-letter word ('quit' to exit)",
            session.rows().len() + 1,
            session.word_len()
        );
        let input = get_user_input(&prompt)?;

        // Credit the seconds spent thinking to the session clock
        let thinking = last_tick.elapsed().as_secs();
        for _ in 0..thinking {
            session.tick();
        }
        last_tick = Instant::now();

        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            println!("\nSee you at the next lights out!\n");
            return Ok(());
        }

        if let Err(e) = session.submit_guess(&input) {
            println!("\n{}\n", e.to_string().yellow());
        } else {
            println!();
        }
    }

    println!("{}", format_grid(session.rows(), session.word_len()));
    println!();

    match session.status() {
        GameStatus::Won => {
            println!(
                "{} Solved in {} guesses, {} on the clock.",
                "🏁 You won!".bright_green().bold(),
                session.rows().len(),
                format_elapsed(session.elapsed_seconds())
            );
        }
        GameStatus::Lost => {
            println!(
                "{} The word was {}.",
                "🔴 Game over!".bright_red().bold(),
                session.target().text().bright_white().bold()
            );
        }
        GameStatus::InProgress => unreachable!("loop exits only on terminal status"),
    }

    println!();
    println!("{}", share_text(puzzle_number, session.rows(), session.status()));
    println!();

    Ok(())
}

/// Play the pre-game countdown at one state per schedule offset
fn play_intro() {
    let schedule = intro::schedule();
    let start = Instant::now();

    for (offset, state) in schedule {
        if let Some(wait) = offset.checked_sub(start.elapsed()) {
            thread::sleep(wait);
        }
        match state {
            intro::IntroState::Countdown(n) => println!("  {}", format!("● {n}").bright_red()),
            intro::IntroState::Reveal => println!("  {}", "It's lights out...".bright_white()),
            intro::IntroState::Ready => println!("  {}\n", "...and away we go!".bright_green()),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
