//! Encounter snapshot — the visible state handed to the host each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EncounterPhase, GimmickAbility};
use crate::events::HostRequest;
use crate::types::EncounterTime;

/// Complete externally visible encounter state, produced by every tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EncounterSnapshot {
    pub time: EncounterTime,
    pub phase: EncounterPhase,
    pub health: i64,
    pub max_health: i64,
    /// health / max_health, in [0, 1].
    pub health_fraction: f64,
    pub invulnerable: bool,
    /// Configured gimmick variant.
    pub gimmick: GimmickAbility,
    /// Whether a gimmick effect window is currently open.
    pub gimmick_active: bool,
    /// Tick-rate scale the host should apply to the target. 1.0 unless a
    /// time-dilation window is open.
    pub time_scale: f64,
    /// Arena position of the encounter.
    pub position: DVec2,
    /// Resolved movement speed for the host's locomotion layer.
    pub speed: f64,
    /// Terminal defeat flag. Never clears once set.
    pub defeated: bool,
    /// Fire-and-forget side-effect requests accumulated this tick.
    pub requests: Vec<HostRequest>,
}
