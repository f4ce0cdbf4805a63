//! Clock: time source for comment timestamps.

use time::OffsetDateTime;

/// Supplies the submission time for new comments.
pub trait Clock: Send {
    /// The current time.
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

/// A clock frozen at one instant. Useful for deterministic rendering.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(OffsetDateTime);

impl FixedClock {
    /// Freeze the clock at `at`.
    pub const fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
