//! Pre-game presentation schedule
//!
//! The intro is modeled as a pure sequence of timed presentation states
//! rather than anything that touches a render tree. A renderer plays the
//! schedule back at its own pace; the core only defines the order and
//! offsets. Styled after a race start: three countdown beats, lights out,
//! then the board is ready for input.

use std::time::Duration;

/// One state in the pre-game sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroState {
    /// Countdown beat, 3 down to 1
    Countdown(u8),
    /// Reveal the board (lights out)
    Reveal,
    /// Input is open
    Ready,
}

/// The full intro schedule as `(offset from start, state)` pairs
///
/// Offsets are strictly increasing and the sequence always ends with
/// `Ready`.
#[must_use]
pub fn schedule() -> Vec<(Duration, IntroState)> {
    vec![
        (Duration::from_secs(0), IntroState::Countdown(3)),
        (Duration::from_secs(1), IntroState::Countdown(2)),
        (Duration::from_secs(2), IntroState::Countdown(1)),
        (Duration::from_secs(3), IntroState::Reveal),
        (Duration::from_secs(4), IntroState::Ready),
    ]
}
