//! Core types and definitions for the bossrush encounter core.
//!
//! This crate defines the vocabulary shared across all other crates:
//! phases, tiers, gimmick abilities, attack patterns, timers, outward
//! host requests, configuration, and state snapshots.
//! It has no dependency on any host engine or runtime framework.

pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
