//! Wall-clock source for generated identifiers and record dates.

use chrono::{
    DateTime,
    NaiveDate,
    Utc,
};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the Unix epoch, used for timestamp identifiers.
    fn timestamp_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }

    /// Calendar date of `now`, used for registration dates.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// The system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
