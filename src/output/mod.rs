//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{format_grid, format_guess_row, format_keyboard};
pub use formatters::{format_elapsed, share_text, verdict_emoji};
