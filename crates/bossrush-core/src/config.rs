//! Encounter construction configuration.
//!
//! The only input surface besides `tick` and `on_damage`. Every field the
//! host leaves out falls back to the tier default; invalid values are
//! repaired rather than rejected, so an encounter is always constructible
//! and tickable from whatever the level data supplies.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BONUS_PATTERN_CHANCE, DEFAULT_GIMMICK_CHANCE};
use crate::enums::{GimmickAbility, Tier};

/// Flat configuration consumed once at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// Difficulty tier supplying defaults for everything not overridden.
    pub tier: Tier,
    /// Explicit max health, overriding the tier default. Non-positive
    /// values are treated as absent.
    pub max_health_override: Option<i64>,
    /// Explicit movement speed, overriding the tier default.
    pub speed_override: Option<f64>,
    /// Gimmick slot for this encounter. Absent means the tier default;
    /// an explicit `GimmickAbility::None` disables the slot entirely.
    pub gimmick: Option<GimmickAbility>,
    /// Arena radius used to clamp teleport destinations.
    pub arena_radius: f64,
    /// Base attack cooldown, scaled down in higher phases. Non-positive
    /// values fall back to the tier default.
    pub attack_cooldown_base: f64,
    /// Chance per selection that a higher phase draws from its bonus
    /// (advanced/ultimate) pool.
    pub bonus_pattern_chance: f64,
    /// Per-tick activation chance for the gimmick slot while eligible.
    pub gimmick_chance: f64,
    /// Start directly in combat, skipping the intro sequence. Set by
    /// hosts that already recorded this encounter's defeat once.
    pub skip_intro: bool,
    /// RNG seed for attack/gimmick selection. Same seed, same target
    /// stream, same damage stream = same encounter.
    pub seed: u64,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            tier: Tier::T1,
            max_health_override: None,
            speed_override: None,
            gimmick: None,
            arena_radius: 40.0,
            attack_cooldown_base: 0.0,
            bonus_pattern_chance: DEFAULT_BONUS_PATTERN_CHANCE,
            gimmick_chance: DEFAULT_GIMMICK_CHANCE,
            skip_intro: false,
            seed: 42,
        }
    }
}

impl EncounterConfig {
    /// Repair invalid fields in place. Non-positive overrides become
    /// absent, chances clamp to [0, 1], and a degenerate arena radius
    /// falls back to the default.
    pub fn sanitize(&mut self) {
        if matches!(self.max_health_override, Some(h) if h <= 0) {
            self.max_health_override = None;
        }
        if matches!(self.speed_override, Some(s) if s <= 0.0) {
            self.speed_override = None;
        }
        if self.arena_radius <= 0.0 {
            self.arena_radius = EncounterConfig::default().arena_radius;
        }
        if self.attack_cooldown_base < 0.0 {
            self.attack_cooldown_base = 0.0;
        }
        self.bonus_pattern_chance = self.bonus_pattern_chance.clamp(0.0, 1.0);
        self.gimmick_chance = self.gimmick_chance.clamp(0.0, 1.0);
    }
}
