//! Outward requests emitted by the encounter for the host engine.
//!
//! All variants are fire-and-forget: the core never consumes a return
//! value, and a host that drops a request on the floor cannot corrupt
//! encounter state.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{AnimationCue, SoundCue};

/// Side-effect requests drained into each tick's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostRequest {
    /// Play an animation on the encounter entity.
    PlayAnimation { cue: AnimationCue },
    /// Play a sound event.
    PlaySound { cue: SoundCue },
    /// Shake or flash the screen.
    ScreenShake { intensity: f64, duration: f64 },
    /// Emit particles at a position.
    EmitParticles { position: DVec2, count: u32 },
    /// Brief visual feedback for a landed hit.
    HitFlash,
    /// The encounter moved itself (teleport gimmick).
    Relocate { position: DVec2 },
    /// Defeat record for the host save layer. Emitted exactly once;
    /// a host that persists it should reconstruct the next run with
    /// `skip_intro` set.
    EncounterDefeated,
}
