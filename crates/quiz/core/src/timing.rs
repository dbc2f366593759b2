//! Fixed delays that pace a session.

use std::time::Duration;

/// Hold on the loading screen before the first question appears.
pub const LOADING_DELAY: Duration = Duration::from_secs(1);

/// Time the verdict stays on screen before the session advances.
pub const REVEAL_DELAY: Duration = Duration::from_millis(2500);

/// Pacing parameters for a session.
///
/// The session machine itself never reads these; the host schedules its
/// timers from them. Tests shrink the delays to keep runs fast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuizTiming {
    pub loading_delay: Duration,
    pub reveal_delay: Duration,
}

impl Default for QuizTiming {
    fn default() -> Self {
        Self {
            loading_delay: LOADING_DELAY,
            reveal_delay: REVEAL_DELAY,
        }
    }
}
