//! Fundamental timing types.

use serde::{Deserialize, Serialize};

/// A single countable duration, decreased once per tick.
///
/// A freshly constructed timer is already expired; `start` arms it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    remaining: f64,
}

impl Timer {
    /// A timer already armed with `duration`.
    pub fn started(duration: f64) -> Self {
        let mut t = Timer::default();
        t.start(duration);
        t
    }

    /// Reset remaining time to `duration`. Negative durations clamp to 0.
    pub fn start(&mut self, duration: f64) {
        self.remaining = duration.max(0.0);
    }

    /// Count down by `dt`. Negative dt is treated as 0.
    pub fn tick(&mut self, dt: f64) {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
    }

    /// Whether the countdown has finished.
    pub fn expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Time left on the countdown (seconds).
    pub fn remaining(&self) -> f64 {
        self.remaining
    }
}

/// Encounter time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EncounterTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed encounter time in seconds.
    pub elapsed_secs: f64,
}

impl EncounterTime {
    /// Advance by one tick of `dt` seconds. Negative dt is treated as 0.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt.max(0.0);
    }
}
