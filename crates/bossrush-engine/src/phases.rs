//! Phase controller — the registration table driving the encounter
//! state machine.
//!
//! Maps health fraction to a target phase and routes every between-phase
//! change through the Transition settle window. The next phase after a
//! transition is computed from the health fraction at exit time, never
//! cached at entry, so a kill-shot landed during the window routes to
//! Defeated instead of the next combat phase.

use bossrush_ai::fsm::{StateHandlers, StateMachine};
use bossrush_core::constants::*;
use bossrush_core::enums::{AnimationCue, EncounterPhase, SoundCue};
use bossrush_core::events::HostRequest;

use crate::encounter::EncounterState;

/// The phase a given health fraction calls for.
pub fn phase_for_fraction(fraction: f64) -> EncounterPhase {
    if fraction <= 0.0 {
        EncounterPhase::Defeated
    } else if fraction > PHASE1_FLOOR {
        EncounterPhase::Phase1
    } else if fraction > PHASE2_FLOOR {
        EncounterPhase::Phase2
    } else {
        EncounterPhase::Phase3
    }
}

/// Build the fully registered encounter machine, positioned at `initial`.
/// The caller fires `start` once the context is ready.
pub fn build_machine(initial: EncounterPhase) -> StateMachine<EncounterState, EncounterPhase> {
    let mut machine = StateMachine::new(initial);
    machine.register(
        EncounterPhase::Intro,
        StateHandlers {
            on_update: intro_update,
            on_enter: Some(intro_enter),
            on_exit: Some(intro_exit),
        },
    );
    machine.register(
        EncounterPhase::Phase1,
        StateHandlers {
            on_update: |state| combat_update(state, EncounterPhase::Phase1, PHASE1_FLOOR),
            on_enter: None,
            on_exit: None,
        },
    );
    machine.register(
        EncounterPhase::Phase2,
        StateHandlers {
            on_update: |state| combat_update(state, EncounterPhase::Phase2, PHASE2_FLOOR),
            on_enter: None,
            on_exit: None,
        },
    );
    machine.register(
        EncounterPhase::Phase3,
        StateHandlers {
            on_update: |state| combat_update(state, EncounterPhase::Phase3, 0.0),
            on_enter: None,
            on_exit: None,
        },
    );
    machine.register(
        EncounterPhase::Transition,
        StateHandlers {
            on_update: transition_update,
            on_enter: Some(transition_enter),
            on_exit: Some(transition_exit),
        },
    );
    machine.register(
        EncounterPhase::Defeated,
        StateHandlers {
            on_update: |_state| EncounterPhase::Defeated,
            on_enter: Some(defeated_enter),
            on_exit: None,
        },
    );
    machine
}

fn intro_enter(state: &mut EncounterState) {
    state.invulnerable = true;
    state.intro.start(INTRO_DURATION);
    state.requests.push(HostRequest::PlayAnimation {
        cue: AnimationCue::IntroRoar,
    });
    state.requests.push(HostRequest::PlaySound {
        cue: SoundCue::IntroRoar,
    });
}

fn intro_update(state: &mut EncounterState) -> EncounterPhase {
    state.intro.tick(state.dt);
    if state.intro.expired() {
        EncounterPhase::Phase1
    } else {
        EncounterPhase::Intro
    }
}

fn intro_exit(state: &mut EncounterState) {
    state.invulnerable = false;
}

/// Shared update for the three combat phases: stay put while the health
/// fraction is above the phase's floor, otherwise request Transition.
/// Health at zero goes straight to Defeated — death is not eased.
fn combat_update(state: &mut EncounterState, phase: EncounterPhase, floor: f64) -> EncounterPhase {
    if state.health == 0 {
        return EncounterPhase::Defeated;
    }
    if state.health_fraction() > floor {
        phase
    } else {
        EncounterPhase::Transition
    }
}

fn transition_enter(state: &mut EncounterState) {
    state.invulnerable = true;
    state.settle.start(state.settle_duration);
    state.requests.push(HostRequest::PlayAnimation {
        cue: AnimationCue::PhaseShift,
    });
    state.requests.push(HostRequest::PlaySound {
        cue: SoundCue::PhaseShift,
    });
    state.requests.push(HostRequest::ScreenShake {
        intensity: TRANSITION_SHAKE,
        duration: 0.4,
    });
    state.requests.push(HostRequest::EmitParticles {
        position: state.position,
        count: TRANSITION_PARTICLE_COUNT,
    });
}

/// Hold for the settle duration, then resolve the next phase from the
/// health fraction as it stands now. Threshold crossings while already
/// transitioning are inherently ignored: this state only ever leaves
/// through its own timer.
fn transition_update(state: &mut EncounterState) -> EncounterPhase {
    state.settle.tick(state.dt);
    if state.settle.expired() {
        phase_for_fraction(state.health_fraction())
    } else {
        EncounterPhase::Transition
    }
}

fn transition_exit(state: &mut EncounterState) {
    // Defeated's entry hook re-raises this when death is the exit target.
    state.invulnerable = false;
}

fn defeated_enter(state: &mut EncounterState) {
    state.invulnerable = true;
    state.defeated = true;
    state.requests.push(HostRequest::PlayAnimation {
        cue: AnimationCue::Collapse,
    });
    state.requests.push(HostRequest::PlaySound {
        cue: SoundCue::Defeat,
    });
    state.requests.push(HostRequest::ScreenShake {
        intensity: DEFEAT_SHAKE,
        duration: 0.8,
    });
    state.requests.push(HostRequest::EmitParticles {
        position: state.position,
        count: DEFEAT_PARTICLE_COUNT,
    });
    // The one-shot defeat record for the host save layer.
    state.requests.push(HostRequest::EncounterDefeated);
}
