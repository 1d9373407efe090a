//! Fixed-step tick clock.

use std::time::{Duration, Instant};

/// Fires at most once per `interval`.
///
/// After a stall the clock fires once and restarts from the time of the poll;
/// the lost steps are not replayed, so every tick is exactly one grid step.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    last: Instant,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(Duration::from_millis(ms as u64))
    }

    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true if a tick is due at `now`, and consumes it.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// How long to wait for input before the next tick is due.
    pub fn timeout_at(&self, now: Instant) -> Duration {
        self.interval
            .checked_sub(now.saturating_duration_since(self.last))
            .unwrap_or(Duration::ZERO)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout_at(Instant::now())
    }

    /// Restart the interval from `now` (e.g. when resuming).
    pub fn reset_at(&mut self, now: Instant) {
        self.last = now;
    }
}
