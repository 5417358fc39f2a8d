//! Encounter behavior machinery for bossrush.
//!
//! Implements the generic phase state machine, timed sub-step sequences,
//! and tier-driven behavior profiles. Operates on plain data — no host
//! engine dependency.

pub mod fsm;
pub mod profiles;
pub mod sequence;

pub use bossrush_core as core;

#[cfg(test)]
mod tests;
