//! Clock sources
//!
//! Engine functions take `now` explicitly. Callers get it from a [`Clock`]:
//! [`SystemClock`] in production, [`ManualClock`] in tests and simulations.

use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Wall-clock source. Readings must not go backwards within a session.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Jump to an absolute time
    pub fn set(&self, time: DateTime<Utc>) {
        self.now.set(time);
    }

    /// Move forward by `by`. Negative durations are ignored.
    pub fn advance(&self, by: Duration) {
        if by > Duration::zero() {
            self.now.set(self.now.get() + by);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}
