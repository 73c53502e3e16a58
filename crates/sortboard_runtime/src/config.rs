//! Pacing configuration for step playback.

use std::time::Duration;

/// Default delay between rendered steps, in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 200;

/// Delay inserted between rendered steps.
///
/// Purely a presentation parameter: the engine never sees it. Invalid or
/// negative input silently falls back to the default, so the stored value
/// is non-negative by construction. This is a policy decision, not an
/// error path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayConfig {
    millis: u64,
}

impl DelayConfig {
    /// Creates a delay of the given milliseconds.
    #[must_use]
    pub const fn new(millis: u64) -> Self {
        Self { millis }
    }

    /// Parses user input as a delay in milliseconds.
    ///
    /// Non-numeric or negative input yields the default.
    #[must_use]
    pub fn from_input(input: &str) -> Self {
        input
            .trim()
            .parse::<u64>()
            .map_or_else(|_| Self::default(), Self::new)
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub const fn millis(self) -> u64 {
        self.millis
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub const fn duration(self) -> Duration {
        Duration::from_millis(self.millis)
    }
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY_MS)
    }
}
