//! Timed sub-step sequences.
//!
//! Attack patterns and other "wait, then do, then wait again" flows are an
//! explicit list of `(action, hold)` steps plus a cursor and a remaining-time
//! timer, advanced by `tick`. The owning tick function returns every frame;
//! the sequence resumes at the same sub-step on the next call. A sequence is
//! restartable only from its start — there is no mid-sequence checkpoint.

use bossrush_core::types::Timer;

/// One sub-step: fire `action`, then hold for `hold` seconds before the
/// next sub-step becomes eligible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step<A> {
    pub action: A,
    pub hold: f64,
}

impl<A> Step<A> {
    pub fn new(action: A, hold: f64) -> Self {
        Self { action, hold }
    }
}

/// A sequence of timed sub-steps with an explicit cursor.
#[derive(Debug, Clone)]
pub struct Sequence<A> {
    steps: Vec<Step<A>>,
    cursor: usize,
    wait: Timer,
}

impl<A: Copy> Sequence<A> {
    /// A sequence positioned before its first sub-step. The first call to
    /// `tick` fires it immediately.
    pub fn new(steps: Vec<Step<A>>) -> Self {
        Self {
            steps,
            cursor: 0,
            wait: Timer::default(),
        }
    }

    /// Advance by `dt` and fire at most one sub-step, at its suspension
    /// boundary. Returns the fired action, if any.
    pub fn tick(&mut self, dt: f64) -> Option<A> {
        self.wait.tick(dt);
        if !self.wait.expired() || self.cursor >= self.steps.len() {
            return None;
        }
        let step = self.steps[self.cursor];
        self.wait.start(step.hold);
        self.cursor += 1;
        Some(step.action)
    }

    /// Whether every sub-step has fired and the final hold has elapsed.
    pub fn done(&self) -> bool {
        self.cursor >= self.steps.len() && self.wait.expired()
    }

    /// Index of the next sub-step to fire.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Lower bound on the wall time from first to last suspension point.
    pub fn min_duration(&self) -> f64 {
        self.steps.iter().map(|s| s.hold.max(0.0)).sum()
    }
}
