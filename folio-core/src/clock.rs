//! Time source abstraction
//!
//! Deadlines are computed from a [`Clock`] so the runtime can be driven by
//! the tokio timer in production and by a [`ManualClock`] in tests and the
//! simulator.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// Tokio-backed clock. Honors paused time in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        tokio::time::Instant::now().into_std()
    }
}

/// Manually advanced clock for deterministic replay.
#[derive(Clone, Debug)]
pub struct ManualClock {
    base: Instant,
    instant: Arc<Mutex<Instant>>,
}

impl ManualClock {
    /// Start a clock at the current instant.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            base: now,
            instant: Arc::new(Mutex::new(now)),
        }
    }

    /// Advance time by a duration.
    pub fn advance(&self, duration: Duration) {
        *self.instant.lock() += duration;
    }

    /// Move to `instant` if it lies in the future; time never goes back.
    pub fn advance_to(&self, instant: Instant) {
        let mut current = self.instant.lock();
        if instant > *current {
            *current = instant;
        }
    }

    /// Time elapsed since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.instant.lock().saturating_duration_since(self.base)
    }

    /// Instant the clock was created at.
    pub fn base(&self) -> Instant {
        self.base
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.instant.lock()
    }
}
