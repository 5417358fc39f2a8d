//! Tests for the state machine, timed sequences, and tier profiles.

use bossrush_core::enums::{EncounterPhase, GimmickAbility, Tier};

use crate::fsm::{StateHandlers, StateKey, StateMachine};
use crate::profiles::get_profile;
use crate::sequence::{Sequence, Step};

/// Shared context for machine tests: a trace of hook firings plus the
/// key the active update should return next.
#[derive(Default)]
struct Trace {
    log: Vec<&'static str>,
    next: Option<EncounterPhase>,
}

fn scripted_update(trace: &mut Trace) -> EncounterPhase {
    trace.log.push("update");
    trace.next.take().unwrap_or(EncounterPhase::Intro)
}

fn hold_phase1(trace: &mut Trace) -> EncounterPhase {
    trace.log.push("p1_update");
    EncounterPhase::Phase1
}

fn build_machine() -> StateMachine<Trace, EncounterPhase> {
    let mut machine = StateMachine::new(EncounterPhase::Intro);
    machine.register(
        EncounterPhase::Intro,
        StateHandlers {
            on_update: scripted_update,
            on_enter: Some(|t: &mut Trace| t.log.push("intro_enter")),
            on_exit: Some(|t: &mut Trace| t.log.push("intro_exit")),
        },
    );
    machine.register(
        EncounterPhase::Phase1,
        StateHandlers {
            on_update: hold_phase1,
            on_enter: Some(|t: &mut Trace| t.log.push("p1_enter")),
            on_exit: None,
        },
    );
    machine
}

// ---- StateMachine ----

#[test]
fn test_machine_start_fires_initial_enter_once() {
    let machine = build_machine();
    let mut trace = Trace::default();
    machine.start(&mut trace);
    assert_eq!(trace.log, vec!["intro_enter"]);
}

#[test]
fn test_machine_exit_then_enter_order() {
    let mut machine = build_machine();
    let mut trace = Trace::default();
    trace.next = Some(EncounterPhase::Phase1);
    machine.tick(&mut trace);
    assert_eq!(machine.current(), EncounterPhase::Phase1);
    assert_eq!(trace.log, vec!["update", "intro_exit", "p1_enter"]);
}

#[test]
fn test_machine_one_transition_per_tick() {
    // The target state's update must not run in the tick that entered
    // it, even though Phase1's update would immediately hold.
    let mut machine = build_machine();
    let mut trace = Trace::default();
    trace.next = Some(EncounterPhase::Phase1);
    machine.tick(&mut trace);
    assert!(!trace.log.contains(&"p1_update"));
    machine.tick(&mut trace);
    assert!(trace.log.contains(&"p1_update"));
}

#[test]
fn test_machine_self_transition_is_noop() {
    let mut machine = build_machine();
    let mut trace = Trace::default();
    // Scripted update returns Intro (its own key) when `next` is unset.
    machine.tick(&mut trace);
    machine.tick(&mut trace);
    assert_eq!(machine.current(), EncounterPhase::Intro);
    assert_eq!(trace.log, vec!["update", "update"]);
}

#[test]
fn test_machine_set_state_same_key_fires_no_hooks() {
    let mut machine = build_machine();
    let mut trace = Trace::default();
    machine.set_state(&mut trace, EncounterPhase::Intro);
    assert!(trace.log.is_empty());
}

#[test]
fn test_machine_unregistered_state_holds() {
    let mut machine = build_machine();
    let mut trace = Trace::default();
    machine.set_state(&mut trace, EncounterPhase::Defeated);
    trace.log.clear();
    machine.tick(&mut trace);
    assert_eq!(machine.current(), EncounterPhase::Defeated);
    assert!(trace.log.is_empty());
}

#[test]
fn test_phase_key_indices_are_dense_and_unique() {
    let phases = [
        EncounterPhase::Intro,
        EncounterPhase::Phase1,
        EncounterPhase::Phase2,
        EncounterPhase::Phase3,
        EncounterPhase::Transition,
        EncounterPhase::Defeated,
    ];
    let mut seen = [false; EncounterPhase::COUNT];
    for phase in phases {
        let idx = phase.index();
        assert!(idx < EncounterPhase::COUNT);
        assert!(!seen[idx], "duplicate index for {:?}", phase);
        seen[idx] = true;
    }
}

// ---- Sequence ----

#[test]
fn test_sequence_fires_first_step_immediately() {
    let mut seq = Sequence::new(vec![Step::new('a', 0.5), Step::new('b', 0.5)]);
    assert_eq!(seq.tick(0.0), Some('a'));
    assert_eq!(seq.cursor(), 1);
}

#[test]
fn test_sequence_holds_between_steps() {
    // Dyadic holds and ticks, so the countdown reaches zero exactly.
    let mut seq = Sequence::new(vec![Step::new('a', 0.5), Step::new('b', 0.25)]);
    assert_eq!(seq.tick(0.125), Some('a'));
    assert_eq!(seq.tick(0.125), None);
    assert_eq!(seq.tick(0.25), None);
    // 0.5s hold elapsed after this tick.
    assert_eq!(seq.tick(0.125), Some('b'));
    assert!(!seq.done(), "final hold still pending");
    seq.tick(0.25);
    assert!(seq.done());
}

#[test]
fn test_sequence_fires_at_most_one_step_per_tick() {
    // A huge dt still only advances one suspension point.
    let mut seq = Sequence::new(vec![Step::new(1, 0.1), Step::new(2, 0.1), Step::new(3, 0.1)]);
    assert_eq!(seq.tick(100.0), Some(1));
    assert_eq!(seq.tick(100.0), Some(2));
    assert_eq!(seq.tick(100.0), Some(3));
    assert_eq!(seq.tick(100.0), None);
    assert!(seq.done());
}

#[test]
fn test_sequence_min_duration() {
    let seq = Sequence::new(vec![Step::new('a', 0.5), Step::new('b', 0.25)]);
    assert!((seq.min_duration() - 0.75).abs() < 1e-9);
}

#[test]
fn test_empty_sequence_is_done() {
    let mut seq: Sequence<char> = Sequence::new(Vec::new());
    assert!(seq.done());
    assert_eq!(seq.tick(1.0), None);
}

// ---- Profiles ----

#[test]
fn test_profiles_monotonic_across_tiers() {
    let tiers = [Tier::T1, Tier::T2, Tier::T3, Tier::T4, Tier::T5, Tier::T6];
    for pair in tiers.windows(2) {
        let lower = get_profile(pair[0]);
        let higher = get_profile(pair[1]);
        assert!(higher.max_health > lower.max_health);
        assert!(higher.speed > lower.speed);
        // Higher tiers attack and gimmick more often.
        assert!(higher.attack_cooldown < lower.attack_cooldown);
        assert!(higher.gimmick_cooldown < lower.gimmick_cooldown);
        // Lower tiers settle faster.
        assert!(higher.settle_duration > lower.settle_duration);
    }
}

#[test]
fn test_profiles_are_valid() {
    for i in 1..=6u8 {
        let profile = get_profile(Tier::from_index(i));
        assert!(profile.max_health > 0);
        assert!(profile.speed > 0.0);
        assert!(profile.attack_cooldown > 0.0);
        assert!(profile.gimmick_cooldown > 0.0);
        assert!(profile.settle_duration > 0.0);
    }
}

#[test]
fn test_t1_has_no_default_gimmick() {
    assert_eq!(get_profile(Tier::T1).gimmick, GimmickAbility::None);
    assert_ne!(get_profile(Tier::T6).gimmick, GimmickAbility::None);
}
