//! Data definitions for the progression RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The RewardCatalog provides the lookups.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Survivor traits (survivor_traits.ron)
// ============================================================================

/// Survivor trait tier. Higher tiers need a longer survival streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Reflect)]
pub enum TraitTier {
    One,
    Two,
}

impl TraitTier {
    pub const ALL: [TraitTier; 2] = [TraitTier::One, TraitTier::Two];

    /// Get the tier number (1-2)
    pub fn level(&self) -> u8 {
        match self {
            TraitTier::One => 1,
            TraitTier::Two => 2,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(TraitTier::One),
            2 => Some(TraitTier::Two),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub struct SurvivorTrait {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: TraitTier,
    /// Streak needed before this trait is offered
    pub requirement: u32,
}

// ============================================================================
// Milestones (milestones.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub struct Milestone {
    pub level: u32,
    pub name: String,
    pub description: String,
}

// ============================================================================
// Streak thresholds (streak_thresholds.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct StreakBonusThreshold {
    pub min_streak: u32,
    pub xp_multiplier: f32,
    pub gold_multiplier: f32,
    pub title: Option<String>,
}

// ============================================================================
// Progression rules (progression_rules.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct ProgressionRules {
    pub schema_version: u32,
    pub level_up: LevelUpRules,
    pub survivor_tiers: SurvivorTierRules,
}

impl Default for ProgressionRules {
    fn default() -> Self {
        Self {
            schema_version: 1,
            level_up: LevelUpRules::default(),
            survivor_tiers: SurvivorTierRules::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
pub struct LevelUpRules {
    /// First level at which skill masteries are offered
    pub mastery_unlock_level: u32,
    /// First level at which attack and defense dice are offered
    pub dice_unlock_level: u32,
    pub action_point_rule: ActionPointRule,
    pub increments: StatIncrements,
}

impl Default for LevelUpRules {
    fn default() -> Self {
        Self {
            mastery_unlock_level: 2,
            dice_unlock_level: 4,
            action_point_rule: ActionPointRule::Always,
            increments: StatIncrements::default(),
        }
    }
}

/// Cadence at which the action point bonus shows up in level-up options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub enum ActionPointRule {
    Always,
    Never,
    /// Offered at this level and every level after
    FromLevel(u32),
    /// Offered on levels divisible by this value
    EveryLevels(u32),
}

impl ActionPointRule {
    pub fn offers_at(&self, level: u32) -> bool {
        match *self {
            ActionPointRule::Always => true,
            ActionPointRule::Never => false,
            ActionPointRule::FromLevel(first) => level >= first,
            ActionPointRule::EveryLevels(step) => step > 0 && level % step == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub struct StatIncrements {
    pub attribute: i32,
    pub max_hp: u32,
    pub max_sanity: u32,
    pub action_points: u32,
    pub attack_dice: u32,
    pub defense_dice: u32,
}

impl Default for StatIncrements {
    fn default() -> Self {
        Self {
            attribute: 1,
            max_hp: 2,
            max_sanity: 1,
            action_points: 1,
            attack_dice: 1,
            defense_dice: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub struct SurvivorTierRules {
    pub tier_one_streak: u32,
    pub tier_two_streak: u32,
}

impl Default for SurvivorTierRules {
    fn default() -> Self {
        Self {
            tier_one_streak: 3,
            tier_two_streak: 6,
        }
    }
}
