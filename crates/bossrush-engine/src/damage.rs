//! Damage model — the sole writer of encounter health.

use bossrush_core::constants::HIT_PARTICLE_COUNT;
use bossrush_core::enums::{EncounterPhase, SoundCue};
use bossrush_core::events::HostRequest;

use crate::encounter::EncounterState;

/// What a delivered hit amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// No observable effect: invulnerable phase, terminal phase, or a
    /// non-positive amount (caller contract violation, silently dropped).
    Ignored,
    /// Health was reduced but the encounter stands.
    Applied,
    /// Health reached zero from a combat phase; the caller must route to
    /// Defeated immediately.
    Lethal,
}

/// Apply a hit to the encounter.
///
/// Intro and Defeated shrug damage off entirely. Hits landed during
/// Transition still count — the settle window's exit re-evaluation is what
/// routes a mid-window kill-shot to Defeated — but they produce no hit
/// feedback and never shorten the window, so lethality is reported as
/// `Applied` and resolved at exit.
pub fn apply_damage(
    state: &mut EncounterState,
    phase: EncounterPhase,
    amount: i64,
) -> DamageOutcome {
    if amount <= 0 {
        return DamageOutcome::Ignored;
    }
    if matches!(phase, EncounterPhase::Intro | EncounterPhase::Defeated) {
        return DamageOutcome::Ignored;
    }

    state.health = (state.health - amount).max(0);

    if phase != EncounterPhase::Transition {
        state.requests.push(HostRequest::HitFlash);
        state.requests.push(HostRequest::PlaySound { cue: SoundCue::Hit });
        state.requests.push(HostRequest::EmitParticles {
            position: state.position,
            count: HIT_PARTICLE_COUNT,
        });
    }

    if state.health == 0 && phase != EncounterPhase::Transition {
        DamageOutcome::Lethal
    } else {
        DamageOutcome::Applied
    }
}
