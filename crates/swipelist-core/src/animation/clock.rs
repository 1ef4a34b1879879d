//! Frame clocks.
//!
//! [`FrameAnimator`](super::FrameAnimator) is advanced with explicit
//! timestamps. A [`Clock`] is a convenient source of those timestamps:
//! [`SystemClock`] for real hosts, [`ManualClock`] for tests and replays.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A monotonic source of frame times.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// A clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward by `dt` and return the new time.
    pub fn advance(&self, dt: Duration) -> Duration {
        let now = self.now.get() + dt;
        self.now.set(now);
        now
    }

    /// Jump to an absolute time. Moving backwards is ignored.
    pub fn set(&self, now: Duration) {
        if now > self.now.get() {
            self.now.set(now);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}
