//! Gimmick ability manager — the independent, lower-frequency ability
//! slot.
//!
//! One cooldown-gated activation at a time; the effect window closes on
//! its own timer, on damage, or on defeat. Global side effects (time
//! dilation's tick-rate scaling) are held through an effect token that is
//! released exactly once, so a damage-triggered early close and the
//! natural timeout cannot both unwind it.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bossrush_core::constants::*;
use bossrush_core::enums::{AnimationCue, EncounterPhase, GimmickAbility, SoundCue};
use bossrush_core::events::HostRequest;
use bossrush_core::types::Timer;

use crate::encounter::EncounterState;

/// Ownership marker for the global tick-rate side effect. The token, not
/// the scale value, is the source of truth for whether the effect is
/// currently applied.
#[derive(Debug, Default)]
struct EffectToken {
    applied: bool,
}

impl EffectToken {
    fn apply(&mut self, state: &mut EncounterState) {
        if !self.applied {
            self.applied = true;
            state.time_scale = TIME_DILATION_FACTOR;
        }
    }

    fn release(&mut self, state: &mut EncounterState) {
        if self.applied {
            self.applied = false;
            state.time_scale = 1.0;
        }
    }
}

/// Cooldown-gated special-ability slot, mutually exclusive with itself.
pub struct GimmickManager {
    variant: GimmickAbility,
    chance: f64,
    cooldown_value: f64,
    cooldown: Timer,
    window: Timer,
    active: bool,
    token: EffectToken,
}

impl GimmickManager {
    pub fn new(variant: GimmickAbility, cooldown_value: f64, chance: f64) -> Self {
        Self {
            variant,
            chance,
            cooldown_value,
            cooldown: Timer::started(cooldown_value),
            window: Timer::default(),
            active: false,
            token: EffectToken::default(),
        }
    }

    /// Advance the open window, or roll for a new activation while idle,
    /// eligible, and in a combat phase.
    pub fn tick(&mut self, state: &mut EncounterState, phase: EncounterPhase, rng: &mut ChaCha8Rng) {
        if self.active {
            self.window.tick(state.dt);
            if self.window.expired() || phase == EncounterPhase::Defeated {
                self.close(state);
            }
            return;
        }

        if self.variant == GimmickAbility::None || !phase.is_combat() {
            return;
        }

        self.cooldown.tick(state.dt);
        if !self.cooldown.expired() {
            return;
        }
        if self.variant == GimmickAbility::Teleport && state.target.is_none() {
            // Teleport needs somewhere to go. Retry next eligible tick
            // without resetting the cooldown.
            return;
        }
        if !rng.gen_bool(self.chance) {
            return;
        }
        self.activate(state, rng);
    }

    /// Damage interrupt: close the open window early. For time dilation
    /// this unwinds the global scaling immediately rather than letting it
    /// outlive the hit.
    pub fn interrupt(&mut self, state: &mut EncounterState) {
        if self.active {
            self.close(state);
        }
    }

    /// Whether an effect window is currently open.
    pub fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, state: &mut EncounterState, rng: &mut ChaCha8Rng) {
        self.active = true;
        self.window.start(GIMMICK_EFFECT_DURATION);
        self.cooldown.start(self.cooldown_value);

        state.requests.push(HostRequest::PlayAnimation {
            cue: AnimationCue::GimmickCast,
        });
        state.requests.push(HostRequest::PlaySound {
            cue: SoundCue::GimmickActivate,
        });

        match self.variant {
            GimmickAbility::Teleport => {
                // Guarded above: a target exists when we get here.
                if let Some(target) = state.target {
                    let angle = rng.gen_range(0.0..std::f64::consts::TAU);
                    let range =
                        rng.gen_range(TELEPORT_MIN_RANGE..state.arena_radius.max(TELEPORT_MIN_RANGE * 2.0));
                    let mut dest =
                        target + glam::DVec2::new(angle.cos(), angle.sin()) * range;
                    let len = dest.length();
                    if len > state.arena_radius {
                        dest *= state.arena_radius / len;
                    }
                    state.position = dest;
                    state.requests.push(HostRequest::Relocate { position: dest });
                    state.requests.push(HostRequest::EmitParticles {
                        position: dest,
                        count: TRANSITION_PARTICLE_COUNT,
                    });
                }
            }
            GimmickAbility::TimeDilation => {
                self.token.apply(state);
            }
            // Effect-only variants: their payloads are host-side visuals.
            GimmickAbility::ShieldBreak
            | GimmickAbility::ElementalFusion
            | GimmickAbility::GravityControl
            | GimmickAbility::DimensionRift => {
                state.requests.push(HostRequest::EmitParticles {
                    position: state.position,
                    count: TRANSITION_PARTICLE_COUNT,
                });
            }
            GimmickAbility::None => {}
        }
    }

    /// Close the window and unwind any global effect. Idempotent: a second
    /// call (natural timeout after a damage interrupt) is a no-op.
    fn close(&mut self, state: &mut EncounterState) {
        if !self.active {
            return;
        }
        self.active = false;
        self.token.release(state);
        state.requests.push(HostRequest::PlaySound {
            cue: SoundCue::GimmickExpire,
        });
    }
}
