//! Progression domain: reward variants, streak bonuses and committed deltas.

use serde::{Deserialize, Serialize};

use crate::content::StreakBonusThreshold;
use crate::hero::{Attribute, HeroStat, Skill};

/// One level-up reward option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LevelUpBonus {
    Attribute(Attribute),
    MaxHp,
    MaxSanity,
    ActionPoint,
    AttackDie,
    DefenseDie,
    SkillMastery(Skill),
}

impl LevelUpBonus {
    pub fn name(&self) -> String {
        match self {
            LevelUpBonus::Attribute(attribute) => attribute.name().to_string(),
            LevelUpBonus::MaxHp => "Max Health".to_string(),
            LevelUpBonus::MaxSanity => "Max Sanity".to_string(),
            LevelUpBonus::ActionPoint => "Action Point".to_string(),
            LevelUpBonus::AttackDie => "Attack Die".to_string(),
            LevelUpBonus::DefenseDie => "Defense Die".to_string(),
            LevelUpBonus::SkillMastery(skill) => format!("{} Mastery", skill.name()),
        }
    }

    /// Masteries can be taken once; every other bonus can be picked again on later levels.
    pub fn is_repeatable(&self) -> bool {
        !matches!(self, LevelUpBonus::SkillMastery(_))
    }
}

/// Multipliers earned by a survival streak.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StreakBonus {
    pub xp_multiplier: f32,
    pub gold_multiplier: f32,
    pub title: Option<String>,
}

impl StreakBonus {
    pub const NEUTRAL: StreakBonus = StreakBonus {
        xp_multiplier: 1.0,
        gold_multiplier: 1.0,
        title: None,
    };

    /// Scale a scenario XP reward, rounding down.
    pub fn scale_xp(&self, base: u32) -> u32 {
        scale_reward(base, self.xp_multiplier)
    }

    /// Scale a scenario gold reward, rounding down.
    pub fn scale_gold(&self, base: u32) -> u32 {
        scale_reward(base, self.gold_multiplier)
    }
}

/// Multipliers are authored with a few decimals; scaling works in whole
/// millionths so the round-down is exact for any `u32` base.
fn scale_reward(base: u32, multiplier: f32) -> u32 {
    let millionths = (f64::from(multiplier) * 1_000_000.0).round().max(0.0) as u64;
    let scaled = u64::from(base) * millionths / 1_000_000;
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

impl Default for StreakBonus {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl From<&StreakBonusThreshold> for StreakBonus {
    fn from(threshold: &StreakBonusThreshold) -> Self {
        Self {
            xp_multiplier: threshold.xp_multiplier,
            gold_multiplier: threshold.gold_multiplier,
            title: threshold.title.clone(),
        }
    }
}

/// What happened to the hero that may earn a reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AdvancementTrigger {
    LevelReached { level: u32 },
    StreakAdvanced { streak: u32 },
}

impl AdvancementTrigger {
    pub fn track(&self) -> AdvancementTrack {
        match self {
            AdvancementTrigger::LevelReached { .. } => AdvancementTrack::LevelUp,
            AdvancementTrigger::StreakAdvanced { .. } => AdvancementTrack::SurvivorTrait,
        }
    }
}

/// The two independent reward tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AdvancementTrack {
    LevelUp,
    SurvivorTrait,
}

/// The single field change committed to a hero.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum HeroDelta {
    AttributeRaised {
        attribute: Attribute,
        amount: i32,
        new_score: i32,
    },
    StatRaised {
        stat: HeroStat,
        amount: u32,
        new_value: u32,
    },
    MasteryGained(Skill),
    TraitGained(String),
}

impl HeroDelta {
    pub fn describe(&self) -> String {
        match self {
            HeroDelta::AttributeRaised {
                attribute,
                amount,
                new_score,
            } => format!("{} +{} (now {})", attribute.name(), amount, new_score),
            HeroDelta::StatRaised {
                stat,
                amount,
                new_value,
            } => format!("{} +{} (now {})", stat.name(), amount, new_value),
            HeroDelta::MasteryGained(skill) => format!("Mastered {}", skill.name()),
            HeroDelta::TraitGained(trait_id) => format!("Gained survivor trait '{}'", trait_id),
        }
    }
}
