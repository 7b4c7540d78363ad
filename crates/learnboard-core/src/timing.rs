//! Simulated-time timers.
//!
//! Nothing in this crate reads a wall clock. Hosts advance components
//! with elapsed milliseconds and the timers here convert that into
//! discrete ticks ([`Timer`]) or a single expiry ([`Countdown`]).

/// A timer that fires at regular intervals.
#[derive(Debug, Clone)]
pub struct Timer {
    /// Interval in milliseconds
    interval_ms: u32,
    /// Elapsed time since the last tick
    elapsed_ms: u32,
    /// Whether the timer is running
    running: bool,
    /// Number of times the timer has fired
    tick_count: u64,
}

impl Timer {
    /// Create a new stopped timer with the given interval.
    #[must_use]
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0,
            running: false,
            tick_count: 0,
        }
    }

    /// Get the interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Start the timer.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop the timer. Elapsed time toward the next tick is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reset elapsed time and the tick count.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
        self.tick_count = 0;
    }

    /// Check if the timer is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Get the number of ticks fired so far.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Advance the timer and return the number of ticks that occurred.
    ///
    /// A stopped timer ignores elapsed time entirely.
    pub fn advance(&mut self, delta_ms: u32) -> u32 {
        if !self.running || self.interval_ms == 0 {
            return 0;
        }

        self.elapsed_ms += delta_ms;
        let ticks = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        self.tick_count += u64::from(ticks);
        ticks
    }

    /// Get progress toward the next tick (0.0 to 1.0).
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.interval_ms == 0 {
            0.0
        } else {
            self.elapsed_ms as f32 / self.interval_ms as f32
        }
    }
}

/// A one-shot countdown that expires after a fixed duration.
#[derive(Debug, Clone)]
pub struct Countdown {
    /// Duration in milliseconds
    duration_ms: u32,
    /// Elapsed time in milliseconds
    elapsed_ms: u32,
}

impl Countdown {
    /// Create a new countdown of the given duration.
    #[must_use]
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0,
        }
    }

    /// Get the total duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Advance the countdown. Returns true once it has expired.
    ///
    /// A zero-duration countdown expires on the first advance.
    pub fn advance(&mut self, delta_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms).min(self.duration_ms);
        self.is_expired()
    }

    /// Check if the countdown has expired.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }

    /// Fraction of the duration still remaining (1.0 down to 0.0).
    #[must_use]
    pub fn remaining_fraction(&self) -> f32 {
        if self.duration_ms == 0 {
            0.0
        } else {
            1.0 - self.elapsed_ms as f32 / self.duration_ms as f32
        }
    }
}
