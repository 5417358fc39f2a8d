//! Enumeration types used throughout the encounter core.

use serde::{Deserialize, Serialize};

/// Discrete combat state of an encounter. Exactly one is active at a time;
/// the embedded state machine is the authoritative owner of this value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncounterPhase {
    /// Entrance sequence, invulnerable, no attacks.
    #[default]
    Intro,
    /// First combat phase (health above two thirds).
    Phase1,
    /// Second combat phase (health above one third).
    Phase2,
    /// Final combat phase (health above zero).
    Phase3,
    /// Between-phase settle window, invulnerable to feedback.
    Transition,
    /// Terminal state. Once entered it is never left.
    Defeated,
}

impl EncounterPhase {
    /// Whether attacks and gimmicks may be scheduled in this phase.
    pub fn is_combat(&self) -> bool {
        matches!(
            self,
            EncounterPhase::Phase1 | EncounterPhase::Phase2 | EncounterPhase::Phase3
        )
    }

    /// Whether this phase can never be left.
    pub fn is_terminal(&self) -> bool {
        *self == EncounterPhase::Defeated
    }
}

/// Coarse difficulty class supplying default health, speed, and cooldowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    #[default]
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
}

impl Tier {
    /// Resolve a 1-based tier index. Out-of-range indices fall back to T1
    /// so an encounter is always constructible from bad level data.
    pub fn from_index(index: u8) -> Self {
        match index {
            2 => Tier::T2,
            3 => Tier::T3,
            4 => Tier::T4,
            5 => Tier::T5,
            6 => Tier::T6,
            _ => Tier::T1,
        }
    }

    /// 1-based index of this tier.
    pub fn index(&self) -> u8 {
        match self {
            Tier::T1 => 1,
            Tier::T2 => 2,
            Tier::T3 => 3,
            Tier::T4 => 4,
            Tier::T5 => 5,
            Tier::T6 => 6,
        }
    }
}

/// Encounter-specific special power, independent of normal attacks and
/// gated by its own cooldown. Fixed per encounter at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GimmickAbility {
    /// No gimmick slot for this encounter.
    #[default]
    None,
    /// Relocate relative to the target.
    Teleport,
    /// Scale the tick rate seen by the target for the effect window.
    TimeDilation,
    /// Effect-only variants: payloads are host-side rendering/audio.
    ShieldBreak,
    ElementalFusion,
    GravityControl,
    DimensionRift,
}

impl GimmickAbility {
    /// Whether the variant carries a global side effect that must be
    /// unwound when the effect window closes.
    pub fn has_global_effect(&self) -> bool {
        *self == GimmickAbility::TimeDilation
    }
}

/// One selectable timed attack sequence. Executed exclusively: no overlap
/// with another pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackPattern {
    /// Three aimed strikes at fixed spacing.
    TripleStrike,
    /// One long windup followed by one release.
    ChargedSlam,
    /// Six aimed strikes at tighter spacing.
    VolleyBarrage,
    /// Windup, full-arena sweep, recovery.
    ArenaSweep,
    /// Long windup, triple release, recovery.
    Cataclysm,
}

impl AttackPattern {
    /// Whether selection needs a target position from the host. Patterns
    /// that aim are skipped (without resetting the cooldown) when no
    /// target is available that tick.
    pub fn requires_target(&self) -> bool {
        matches!(self, AttackPattern::TripleStrike | AttackPattern::VolleyBarrage)
    }
}

/// Sub-step payload fired by a running attack sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackAction {
    Windup,
    Strike,
    Release,
    Sweep,
    Recover,
}

/// Animation identifiers requested from the host. Playback is outside
/// the core; these are names only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationCue {
    IntroRoar,
    Windup,
    Strike,
    Release,
    Sweep,
    Recover,
    PhaseShift,
    GimmickCast,
    Collapse,
}

/// Sound event identifiers requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    IntroRoar,
    AttackImpact,
    ChargeUp,
    PhaseShift,
    GimmickActivate,
    GimmickExpire,
    Hit,
    Defeat,
}
