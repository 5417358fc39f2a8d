//! Tier-specific encounter profiles.
//!
//! Consolidates the defaults a tier supplies for every stat the host did
//! not override explicitly.

use bossrush_core::enums::{GimmickAbility, Tier};

/// Default stat block for a tier.
pub struct TierProfile {
    /// Maximum health.
    pub max_health: i64,
    /// Movement speed (arena units per second).
    pub speed: f64,
    /// Base attack cooldown in Phase1 (seconds). Higher phases scale it
    /// down.
    pub attack_cooldown: f64,
    /// Gimmick slot cooldown (seconds). Lower tiers cool down slower.
    pub gimmick_cooldown: f64,
    /// Hold time spent in Transition before the next phase resolves
    /// (seconds). Lower tiers settle faster.
    pub settle_duration: f64,
    /// Default gimmick variant for the tier.
    pub gimmick: GimmickAbility,
}

/// Get the default profile for a given tier.
pub fn get_profile(tier: Tier) -> TierProfile {
    match tier {
        Tier::T1 => TierProfile {
            max_health: 100,
            speed: 40.0,
            attack_cooldown: 2.8,
            gimmick_cooldown: 14.0,
            settle_duration: 0.8,
            gimmick: GimmickAbility::None,
        },
        Tier::T2 => TierProfile {
            max_health: 160,
            speed: 48.0,
            attack_cooldown: 2.5,
            gimmick_cooldown: 12.0,
            settle_duration: 1.0,
            gimmick: GimmickAbility::Teleport,
        },
        Tier::T3 => TierProfile {
            max_health: 240,
            speed: 56.0,
            attack_cooldown: 2.2,
            gimmick_cooldown: 10.0,
            settle_duration: 1.2,
            gimmick: GimmickAbility::TimeDilation,
        },
        Tier::T4 => TierProfile {
            max_health: 340,
            speed: 64.0,
            attack_cooldown: 1.9,
            gimmick_cooldown: 9.0,
            settle_duration: 1.4,
            gimmick: GimmickAbility::ShieldBreak,
        },
        Tier::T5 => TierProfile {
            max_health: 460,
            speed: 72.0,
            attack_cooldown: 1.7,
            gimmick_cooldown: 8.0,
            settle_duration: 1.6,
            gimmick: GimmickAbility::GravityControl,
        },
        Tier::T6 => TierProfile {
            max_health: 600,
            speed: 80.0,
            attack_cooldown: 1.5,
            gimmick_cooldown: 6.0,
            settle_duration: 1.8,
            gimmick: GimmickAbility::DimensionRift,
        },
    }
}
