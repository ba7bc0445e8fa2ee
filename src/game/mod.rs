//! Game orchestration: word selection, session lifecycle, clock, intro

pub mod clock;
pub mod config;
pub mod intro;
pub mod selector;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::GameConfig;
pub use intro::IntroState;
pub use session::{GameSession, GameStatus, GuessError, GuessRow, MAX_GUESSES};
