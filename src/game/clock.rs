//! Calendar-day clock capability
//!
//! The session never reads wall-clock time ambiently; it asks an injected
//! `Clock` for "today". The production clock uses UTC midnight as the day
//! boundary, so every player worldwide sees the same word on the same date.

use chrono::{NaiveDate, Utc};

/// Supplies the current calendar day
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Production clock: the current UTC calendar day
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock pinned to one date, for tests and replaying past puzzles
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2023, 6, 4).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn system_clock_is_stable_within_a_call() {
        let clock = SystemClock;
        // Two immediate reads land on the same calendar day outside of a
        // midnight race, which is close enough for a smoke test
        assert_eq!(clock.today(), clock.today());
    }
}
