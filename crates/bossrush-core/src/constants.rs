//! Encounter tuning parameters.

// --- Phase thresholds ---

/// Health fraction above which Phase1 remains active.
pub const PHASE1_FLOOR: f64 = 2.0 / 3.0;

/// Health fraction above which Phase2 remains active.
pub const PHASE2_FLOOR: f64 = 1.0 / 3.0;

/// Intro hold before the first combat phase (seconds).
pub const INTRO_DURATION: f64 = 2.0;

// --- Attacks ---

/// Cooldown multiplier per combat phase. Higher phases attack more often.
pub const PHASE1_COOLDOWN_FACTOR: f64 = 1.0;
pub const PHASE2_COOLDOWN_FACTOR: f64 = 0.75;
pub const PHASE3_COOLDOWN_FACTOR: f64 = 0.55;

/// Chance per selection that a higher phase reaches past its base
/// repertoire into the advanced/ultimate pool. Configurable; this is
/// only the default.
pub const DEFAULT_BONUS_PATTERN_CHANCE: f64 = 0.30;

/// Spacing between aimed strikes (seconds).
pub const STRIKE_SPACING: f64 = 0.4;

/// Tighter spacing used by the volley barrage.
pub const VOLLEY_SPACING: f64 = 0.25;

/// Windup hold before a charged release (seconds).
pub const WINDUP_HOLD: f64 = 0.9;

/// Hold for the travelling part of an arena sweep (seconds).
pub const SWEEP_HOLD: f64 = 0.8;

/// Recovery hold closing a sweep or ultimate (seconds).
pub const RECOVER_HOLD: f64 = 0.6;

// --- Gimmicks ---

/// Effect window length, independent of the gimmick cooldown (seconds).
pub const GIMMICK_EFFECT_DURATION: f64 = 3.0;

/// Default per-tick activation chance while eligible.
pub const DEFAULT_GIMMICK_CHANCE: f64 = 0.30;

/// Tick-rate scale applied to the target while time dilation is open.
pub const TIME_DILATION_FACTOR: f64 = 0.5;

/// Minimum teleport offset from the target (arena units).
pub const TELEPORT_MIN_RANGE: f64 = 2.0;

// --- Feedback ---

/// Particles requested for a landed hit.
pub const HIT_PARTICLE_COUNT: u32 = 6;

/// Particles requested for a phase transition burst.
pub const TRANSITION_PARTICLE_COUNT: u32 = 24;

/// Particles requested on defeat.
pub const DEFEAT_PARTICLE_COUNT: u32 = 40;

/// Screen shake intensity for a phase transition.
pub const TRANSITION_SHAKE: f64 = 0.6;

/// Screen shake intensity on defeat.
pub const DEFEAT_SHAKE: f64 = 1.0;
