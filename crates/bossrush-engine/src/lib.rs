//! The bossrush encounter engine.
//!
//! `Encounter` owns the phase state machine, damage model, attack
//! scheduler, and gimmick manager, and exposes exactly two entry points to
//! the host loop: `tick` and `on_damage`. Completely headless (no engine
//! dependency), enabling deterministic testing.

pub mod damage;
pub mod encounter;
pub mod gimmick;
pub mod phases;
pub mod scheduler;
