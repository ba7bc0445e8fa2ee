//! Pitwall
//!
//! A daily Formula 1 themed word-guessing game. The target word is selected
//! deterministically from a curated list by calendar date, guesses are scored
//! with exact multiset handling of repeated letters, and the day's progress
//! survives restarts through a day-scoped session store.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pitwall::game::{FixedClock, GameConfig, GameSession};
//! use pitwall::store::MemoryStore;
//! use pitwall::wordlists::WordList;
//!
//! let clock = FixedClock(chrono::NaiveDate::from_ymd_opt(2026, 8, 26).unwrap());
//! let mut session = GameSession::start(
//!     &GameConfig::default(),
//!     &WordList::embedded(),
//!     &clock,
//!     MemoryStore::new(),
//! );
//! let status = session.submit_guess("CHICANE");
//! println!("{status:?}");
//! ```

// Core domain types
pub mod core;

// Session state machine, word selection, clock
pub mod game;

// Day-scoped persistence
pub mod store;

// Curated word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
