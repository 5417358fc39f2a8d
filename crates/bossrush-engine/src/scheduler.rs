//! Attack scheduler — cooldown-gated selection and execution of one
//! attack pattern at a time.
//!
//! Each combat phase layers its repertoire on top of the previous one:
//! Phase1 draws from the basic pool, Phase2 adds the advanced pool behind
//! the bonus-chance gate, Phase3 adds the ultimate pool behind the same
//! gate. Higher phases also shrink the cooldown, so later phases behave
//! like earlier ones plus more.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bossrush_ai::sequence::{Sequence, Step};
use bossrush_core::constants::*;
use bossrush_core::enums::{AnimationCue, AttackAction, AttackPattern, EncounterPhase, SoundCue};
use bossrush_core::events::HostRequest;
use bossrush_core::types::Timer;

use crate::encounter::EncounterState;

const BASIC_POOL: [AttackPattern; 2] = [AttackPattern::TripleStrike, AttackPattern::ChargedSlam];
const ADVANCED_POOL: [AttackPattern; 2] = [AttackPattern::VolleyBarrage, AttackPattern::ArenaSweep];
const PHASE3_BONUS_POOL: [AttackPattern; 3] = [
    AttackPattern::VolleyBarrage,
    AttackPattern::ArenaSweep,
    AttackPattern::Cataclysm,
];

/// An attack pattern currently holding exclusivity.
struct RunningAttack {
    pattern: AttackPattern,
    seq: Sequence<AttackAction>,
}

/// Per-phase attack selection plus the cooldown between patterns.
pub struct AttackScheduler {
    base_cooldown: f64,
    bonus_chance: f64,
    cooldown: Timer,
    active: Option<RunningAttack>,
}

impl AttackScheduler {
    /// The cooldown starts armed, so the first attack lands one full
    /// Phase1 cooldown after combat begins.
    pub fn new(base_cooldown: f64, bonus_chance: f64) -> Self {
        Self {
            base_cooldown,
            bonus_chance,
            cooldown: Timer::started(base_cooldown),
            active: None,
        }
    }

    /// Advance the running pattern or, when idle and eligible, select the
    /// next one. Runs after the phase step of the same tick, so a death
    /// settled this tick is already visible here.
    pub fn tick(&mut self, state: &mut EncounterState, rng: &mut ChaCha8Rng, phase: EncounterPhase) {
        if phase == EncounterPhase::Defeated {
            // Hard cancel. Only death interrupts a pattern mid-flight.
            self.active = None;
            return;
        }

        if let Some(run) = &mut self.active {
            // A soft phase change into Transition does not interrupt the
            // sequence; it runs to completion before the next selection.
            if let Some(action) = run.seq.tick(state.dt) {
                emit_action(state, action);
            }
            if run.seq.done() {
                self.active = None;
                self.cooldown
                    .start(self.base_cooldown * cooldown_factor(phase));
            }
            return;
        }

        if !phase.is_combat() {
            return;
        }

        self.cooldown.tick(state.dt);
        if !self.cooldown.expired() {
            return;
        }

        let pattern = select_pattern(phase, self.bonus_chance, rng);
        if pattern.requires_target() && state.target.is_none() {
            // No target to aim at: skip without resetting the cooldown so
            // the same attempt retries next eligible tick.
            return;
        }
        self.active = Some(RunningAttack {
            pattern,
            seq: build_sequence(pattern),
        });
    }

    /// Pattern currently holding exclusivity, if any.
    pub fn active_pattern(&self) -> Option<AttackPattern> {
        self.active.as_ref().map(|run| run.pattern)
    }
}

/// Cooldown multiplier for a combat phase.
fn cooldown_factor(phase: EncounterPhase) -> f64 {
    match phase {
        EncounterPhase::Phase2 => PHASE2_COOLDOWN_FACTOR,
        EncounterPhase::Phase3 => PHASE3_COOLDOWN_FACTOR,
        _ => PHASE1_COOLDOWN_FACTOR,
    }
}

/// Pick a pattern from the phase's repertoire: uniform over the base pool,
/// with the bonus pool reachable once the phase's chance gate passes.
fn select_pattern(phase: EncounterPhase, bonus_chance: f64, rng: &mut ChaCha8Rng) -> AttackPattern {
    let bonus_pool: &[AttackPattern] = match phase {
        EncounterPhase::Phase2 => &ADVANCED_POOL,
        EncounterPhase::Phase3 => &PHASE3_BONUS_POOL,
        _ => &[],
    };
    if !bonus_pool.is_empty() && rng.gen_bool(bonus_chance) {
        bonus_pool[rng.gen_range(0..bonus_pool.len())]
    } else {
        BASIC_POOL[rng.gen_range(0..BASIC_POOL.len())]
    }
}

/// Expand a pattern into its timed sub-step sequence.
fn build_sequence(pattern: AttackPattern) -> Sequence<AttackAction> {
    let steps = match pattern {
        AttackPattern::TripleStrike => vec![
            Step::new(AttackAction::Strike, STRIKE_SPACING),
            Step::new(AttackAction::Strike, STRIKE_SPACING),
            Step::new(AttackAction::Strike, STRIKE_SPACING),
        ],
        AttackPattern::ChargedSlam => vec![
            Step::new(AttackAction::Windup, WINDUP_HOLD),
            Step::new(AttackAction::Release, RECOVER_HOLD),
        ],
        AttackPattern::VolleyBarrage => vec![
            Step::new(AttackAction::Strike, VOLLEY_SPACING),
            Step::new(AttackAction::Strike, VOLLEY_SPACING),
            Step::new(AttackAction::Strike, VOLLEY_SPACING),
            Step::new(AttackAction::Strike, VOLLEY_SPACING),
            Step::new(AttackAction::Strike, VOLLEY_SPACING),
            Step::new(AttackAction::Strike, VOLLEY_SPACING),
        ],
        AttackPattern::ArenaSweep => vec![
            Step::new(AttackAction::Windup, WINDUP_HOLD),
            Step::new(AttackAction::Sweep, SWEEP_HOLD),
            Step::new(AttackAction::Recover, RECOVER_HOLD),
        ],
        AttackPattern::Cataclysm => vec![
            Step::new(AttackAction::Windup, WINDUP_HOLD),
            Step::new(AttackAction::Release, VOLLEY_SPACING),
            Step::new(AttackAction::Release, VOLLEY_SPACING),
            Step::new(AttackAction::Release, VOLLEY_SPACING),
            Step::new(AttackAction::Recover, RECOVER_HOLD),
        ],
    };
    Sequence::new(steps)
}

/// Turn a fired sub-step into its outward feedback requests.
fn emit_action(state: &mut EncounterState, action: AttackAction) {
    match action {
        AttackAction::Windup => {
            state.requests.push(HostRequest::PlayAnimation {
                cue: AnimationCue::Windup,
            });
            state.requests.push(HostRequest::PlaySound {
                cue: SoundCue::ChargeUp,
            });
        }
        AttackAction::Strike => {
            state.requests.push(HostRequest::PlayAnimation {
                cue: AnimationCue::Strike,
            });
            state.requests.push(HostRequest::PlaySound {
                cue: SoundCue::AttackImpact,
            });
            // Aimed strikes land their effects at the target when known.
            let anchor = state.target.unwrap_or(state.position);
            state.requests.push(HostRequest::EmitParticles {
                position: anchor,
                count: HIT_PARTICLE_COUNT,
            });
        }
        AttackAction::Release => {
            state.requests.push(HostRequest::PlayAnimation {
                cue: AnimationCue::Release,
            });
            state.requests.push(HostRequest::PlaySound {
                cue: SoundCue::AttackImpact,
            });
            state.requests.push(HostRequest::ScreenShake {
                intensity: 0.3,
                duration: 0.2,
            });
        }
        AttackAction::Sweep => {
            state.requests.push(HostRequest::PlayAnimation {
                cue: AnimationCue::Sweep,
            });
            state.requests.push(HostRequest::PlaySound {
                cue: SoundCue::AttackImpact,
            });
        }
        AttackAction::Recover => {
            state.requests.push(HostRequest::PlayAnimation {
                cue: AnimationCue::Recover,
            });
        }
    }
}
