//! The encounter aggregate — the root of the control core.
//!
//! `Encounter` owns all mutable encounter state and advances it from one
//! external `tick` call per frame. Within a tick the order is fixed: damage
//! effects are settled first (in `on_damage`, before any phase logic reads
//! health), then the state machine step (where the phase controller runs),
//! then the attack scheduler, then the gimmick manager. The snapshot built
//! at the end drains all outward host requests.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bossrush_ai::fsm::StateMachine;
use bossrush_ai::profiles::get_profile;
use bossrush_core::config::EncounterConfig;
use bossrush_core::enums::{EncounterPhase, GimmickAbility};
use bossrush_core::events::HostRequest;
use bossrush_core::state::EncounterSnapshot;
use bossrush_core::types::{EncounterTime, Timer};

use crate::damage::{self, DamageOutcome};
use crate::gimmick::GimmickManager;
use crate::phases;
use crate::scheduler::AttackScheduler;

/// Mutable encounter state shared by the phase callbacks and systems.
///
/// `health`, `invulnerable`, and the timers are written only by the damage
/// model and phase controller; the scheduler and gimmick manager read them
/// and append to `requests`.
pub struct EncounterState {
    pub health: i64,
    pub max_health: i64,
    pub invulnerable: bool,
    /// Arena position, origin at the arena center.
    pub position: DVec2,
    pub speed: f64,
    pub arena_radius: f64,
    /// Configured gimmick variant (resolved from config or tier).
    pub gimmick: GimmickAbility,
    /// Transition hold length for this encounter.
    pub settle_duration: f64,
    /// Clamped frame delta for the tick currently being processed.
    pub dt: f64,
    /// Nearest target position supplied by the host this tick, if any.
    pub target: Option<DVec2>,
    /// Tick-rate scale the host applies to the target. 1.0 unless a
    /// time-dilation window is open.
    pub time_scale: f64,
    pub intro: Timer,
    pub settle: Timer,
    /// Set once on entering Defeated; never clears.
    pub defeated: bool,
    /// Outward side-effect requests, drained into each snapshot.
    pub requests: Vec<HostRequest>,
}

impl EncounterState {
    /// health / max_health in [0, 1].
    pub fn health_fraction(&self) -> f64 {
        self.health as f64 / self.max_health as f64
    }
}

/// A boss encounter driven by host callbacks.
pub struct Encounter {
    state: EncounterState,
    machine: StateMachine<EncounterState, EncounterPhase>,
    scheduler: AttackScheduler,
    gimmick: GimmickManager,
    rng: ChaCha8Rng,
    time: EncounterTime,
}

impl Encounter {
    /// Create an encounter from a flat configuration. Invalid fields are
    /// repaired against the tier defaults — construction never fails.
    pub fn new(config: EncounterConfig) -> Self {
        let mut config = config;
        config.sanitize();

        let profile = get_profile(config.tier);
        let max_health = config.max_health_override.unwrap_or(profile.max_health);
        let speed = config.speed_override.unwrap_or(profile.speed);
        let gimmick = config.gimmick.unwrap_or(profile.gimmick);
        let attack_cooldown = if config.attack_cooldown_base > 0.0 {
            config.attack_cooldown_base
        } else {
            profile.attack_cooldown
        };

        let mut state = EncounterState {
            health: max_health,
            max_health,
            invulnerable: !config.skip_intro,
            position: DVec2::ZERO,
            speed,
            arena_radius: config.arena_radius,
            gimmick,
            settle_duration: profile.settle_duration,
            dt: 0.0,
            target: None,
            time_scale: 1.0,
            intro: Timer::default(),
            settle: Timer::default(),
            defeated: false,
            requests: Vec::new(),
        };

        let initial = if config.skip_intro {
            EncounterPhase::Phase1
        } else {
            EncounterPhase::Intro
        };
        let machine = phases::build_machine(initial);
        machine.start(&mut state);

        Self {
            state,
            machine,
            scheduler: AttackScheduler::new(attack_cooldown, config.bonus_pattern_chance),
            gimmick: GimmickManager::new(gimmick, profile.gimmick_cooldown, config.gimmick_chance),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: EncounterTime::default(),
        }
    }

    /// Advance the encounter by one frame. `target` is the host's answer
    /// to the nearest-target query for this tick; negative `dt` is treated
    /// as 0. Must be called exactly once per frame.
    pub fn tick(&mut self, dt: f64, target: Option<DVec2>) -> EncounterSnapshot {
        self.state.dt = dt.max(0.0);
        self.state.target = target;

        self.machine.tick(&mut self.state);
        let phase = self.machine.current();
        self.scheduler.tick(&mut self.state, &mut self.rng, phase);
        self.gimmick.tick(&mut self.state, phase, &mut self.rng);

        self.time.advance(self.state.dt);
        self.snapshot()
    }

    /// Deliver a hit. Safe to call any number of times between ticks,
    /// including zero; non-positive amounts are ignored.
    pub fn on_damage(&mut self, amount: i64) {
        let phase = self.machine.current();
        match damage::apply_damage(&mut self.state, phase, amount) {
            DamageOutcome::Ignored => {}
            DamageOutcome::Applied => {
                self.gimmick.interrupt(&mut self.state);
            }
            DamageOutcome::Lethal => {
                self.gimmick.interrupt(&mut self.state);
                // Death is not eased: straight to Defeated, no Transition.
                self.machine
                    .set_state(&mut self.state, EncounterPhase::Defeated);
            }
        }
    }

    /// The active phase.
    pub fn phase(&self) -> EncounterPhase {
        self.machine.current()
    }

    /// Current health.
    pub fn health(&self) -> i64 {
        self.state.health
    }

    /// Whether damage is currently shrugged off.
    pub fn invulnerable(&self) -> bool {
        self.state.invulnerable
    }

    /// Tick-rate scale the host should apply to the target.
    pub fn time_scale(&self) -> f64 {
        self.state.time_scale
    }

    /// Whether a gimmick effect window is open.
    pub fn gimmick_active(&self) -> bool {
        self.gimmick.is_active()
    }

    /// Attack pattern currently holding exclusivity, if any.
    pub fn active_attack(&self) -> Option<bossrush_core::enums::AttackPattern> {
        self.scheduler.active_pattern()
    }

    fn snapshot(&mut self) -> EncounterSnapshot {
        let requests = std::mem::take(&mut self.state.requests);
        EncounterSnapshot {
            time: self.time,
            phase: self.machine.current(),
            health: self.state.health,
            max_health: self.state.max_health,
            health_fraction: self.state.health_fraction(),
            invulnerable: self.state.invulnerable,
            gimmick: self.state.gimmick,
            gimmick_active: self.gimmick.is_active(),
            time_scale: self.state.time_scale,
            position: self.state.position,
            speed: self.state.speed,
            defeated: self.state.defeated,
            requests,
        }
    }
}
