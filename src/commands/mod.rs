//! Command implementations

pub mod play;
pub mod today;

pub use play::run_play;
pub use today::{TodayInfo, run_today, today_info};
