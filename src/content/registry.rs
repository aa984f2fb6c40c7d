//! RewardCatalog resource holding the static progression content.

use bevy::prelude::*;

use super::data::*;
use crate::hero::Attribute;

/// Central catalog for all reward content.
/// Populated once at startup and read-only afterwards.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct RewardCatalog {
    pub survivor_traits: Vec<SurvivorTrait>,
    pub milestones: Vec<Milestone>,
    /// Ascending by min_streak
    pub streak_thresholds: Vec<StreakBonusThreshold>,
    pub rules: ProgressionRules,
}

impl RewardCatalog {
    /// Attributes offered on every level-up.
    pub fn attribute_bonuses(&self) -> &'static [Attribute] {
        &Attribute::ALL
    }

    /// Traits of one tier in catalog order.
    pub fn survivor_traits_tier(&self, tier: TraitTier) -> Vec<&SurvivorTrait> {
        self.survivor_traits
            .iter()
            .filter(|t| t.tier == tier)
            .collect()
    }

    pub fn find_survivor_trait(&self, trait_id: &str) -> Option<&SurvivorTrait> {
        self.survivor_traits.iter().find(|t| t.id == trait_id)
    }

    pub fn milestone_for_level(&self, level: u32) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.level == level)
    }

    pub fn streak_thresholds(&self) -> &[StreakBonusThreshold] {
        &self.streak_thresholds
    }

    pub fn level_up_rules(&self) -> &LevelUpRules {
        &self.rules.level_up
    }

    /// Streak at which a tier's traits start being offered
    pub fn tier_unlock_streak(&self, tier: TraitTier) -> u32 {
        match tier {
            TraitTier::One => self.rules.survivor_tiers.tier_one_streak,
            TraitTier::Two => self.rules.survivor_tiers.tier_two_streak,
        }
    }

    /// True when reaching `streak` unlocks at least one survivor trait
    pub fn unlocks_traits_at(&self, streak: u32) -> bool {
        self.survivor_traits.iter().any(|survivor_trait| {
            streak == survivor_trait.requirement.max(self.tier_unlock_streak(survivor_trait.tier))
        })
    }

    /// Returns a summary of loaded content counts for logging.
    pub fn summary(&self) -> String {
        format!(
            "RewardCatalog loaded:\n\
             - Survivor Traits: {} (tier 1: {}, tier 2: {})\n\
             - Milestones: {}\n\
             - Streak Thresholds: {}\n\
             - Mastery unlock level: {}\n\
             - Dice unlock level: {}\n\
             - Action point rule: {:?}",
            self.survivor_traits.len(),
            self.survivor_traits_tier(TraitTier::One).len(),
            self.survivor_traits_tier(TraitTier::Two).len(),
            self.milestones.len(),
            self.streak_thresholds.len(),
            self.rules.level_up.mastery_unlock_level,
            self.rules.level_up.dice_unlock_level,
            self.rules.level_up.action_point_rule,
        )
    }
}

impl Default for RewardCatalog {
    fn default() -> Self {
        Self {
            survivor_traits: vec![
                // Tier one
                SurvivorTrait {
                    id: "hardened".to_string(),
                    name: "Hardened".to_string(),
                    description: "The first terror of each scenario costs 1 less sanity"
                        .to_string(),
                    tier: TraitTier::One,
                    requirement: 3,
                },
                SurvivorTrait {
                    id: "scavenger".to_string(),
                    name: "Scavenger".to_string(),
                    description: "Once per scenario, a search turns up an extra item".to_string(),
                    tier: TraitTier::One,
                    requirement: 3,
                },
                SurvivorTrait {
                    id: "wary".to_string(),
                    name: "Wary".to_string(),
                    description: "Cannot be ambushed in the first round of a scenario"
                        .to_string(),
                    tier: TraitTier::One,
                    requirement: 3,
                },
                // Tier two
                SurvivorTrait {
                    id: "unbreakable".to_string(),
                    name: "Unbreakable".to_string(),
                    description: "Once per scenario, survive a killing blow with 1 health"
                        .to_string(),
                    tier: TraitTier::Two,
                    requirement: 6,
                },
                SurvivorTrait {
                    id: "grim_resolve".to_string(),
                    name: "Grim Resolve".to_string(),
                    description: "Roll one extra die on willpower checks".to_string(),
                    tier: TraitTier::Two,
                    requirement: 6,
                },
                SurvivorTrait {
                    id: "death_cheater".to_string(),
                    name: "Death Cheater".to_string(),
                    description: "Begin every scenario with an extra action point".to_string(),
                    tier: TraitTier::Two,
                    requirement: 6,
                },
            ],
            milestones: vec![
                Milestone {
                    level: 3,
                    name: "Seasoned Investigator".to_string(),
                    description: "Start each scenario with one clue token".to_string(),
                },
                Milestone {
                    level: 5,
                    name: "Veteran of the Unknown".to_string(),
                    description: "Reroll one failed horror check per scenario".to_string(),
                },
                Milestone {
                    level: 7,
                    name: "Keeper of Secrets".to_string(),
                    description: "Reveal the first hidden tile of every map".to_string(),
                },
                Milestone {
                    level: 10,
                    name: "Legend of the Old Roads".to_string(),
                    description: "Allies in your party gain +1 max sanity".to_string(),
                },
            ],
            streak_thresholds: vec![
                StreakBonusThreshold {
                    min_streak: 0,
                    xp_multiplier: 1.0,
                    gold_multiplier: 1.0,
                    title: None,
                },
                StreakBonusThreshold {
                    min_streak: 3,
                    xp_multiplier: 1.1,
                    gold_multiplier: 1.1,
                    title: Some("Survivor".to_string()),
                },
                StreakBonusThreshold {
                    min_streak: 5,
                    xp_multiplier: 1.25,
                    gold_multiplier: 1.2,
                    title: Some("Hardened Survivor".to_string()),
                },
                StreakBonusThreshold {
                    min_streak: 7,
                    xp_multiplier: 1.35,
                    gold_multiplier: 1.3,
                    title: None,
                },
                StreakBonusThreshold {
                    min_streak: 10,
                    xp_multiplier: 1.5,
                    gold_multiplier: 1.5,
                    title: Some("Unkillable".to_string()),
                },
            ],
            rules: ProgressionRules::default(),
        }
    }
}
