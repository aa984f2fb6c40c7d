//! Validation for internal consistency of the reward catalog.

use std::collections::HashSet;

use super::data::*;
use super::registry::RewardCatalog;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub problem: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.problem
        )
    }
}

/// Helper macro for recording a failed check
macro_rules! check {
    ($errors:expr, $ok:expr, $source_type:expr, $source_id:expr, $field:expr, $($problem:tt)+) => {
        if !$ok {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: $field,
                problem: format!($($problem)+),
            });
        }
    };
}

/// Validate the catalog.
/// Returns a list of validation errors, empty if the content is consistent.
pub fn validate_catalog(catalog: &RewardCatalog) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Survivor traits
    let mut seen_traits = HashSet::new();
    for survivor_trait in &catalog.survivor_traits {
        check!(
            errors,
            seen_traits.insert(survivor_trait.id.as_str()),
            "SurvivorTrait",
            survivor_trait.id,
            "id",
            "duplicate trait id"
        );
        let unlock = catalog.tier_unlock_streak(survivor_trait.tier);
        check!(
            errors,
            survivor_trait.requirement >= unlock,
            "SurvivorTrait",
            survivor_trait.id,
            "requirement",
            "requirement {} is below the tier {} unlock streak {}",
            survivor_trait.requirement,
            survivor_trait.tier.level(),
            unlock
        );
    }

    let tiers = &catalog.rules.survivor_tiers;
    check!(
        errors,
        tiers.tier_one_streak <= tiers.tier_two_streak,
        "ProgressionRules",
        "survivor_tiers",
        "tier_two_streak",
        "tier two unlocks at {} before tier one at {}",
        tiers.tier_two_streak,
        tiers.tier_one_streak
    );

    // Milestones
    let mut seen_levels = HashSet::new();
    for milestone in &catalog.milestones {
        check!(
            errors,
            milestone.level >= 1,
            "Milestone",
            milestone.name,
            "level",
            "levels start at 1"
        );
        check!(
            errors,
            seen_levels.insert(milestone.level),
            "Milestone",
            milestone.name,
            "level",
            "another milestone already uses level {}",
            milestone.level
        );
    }

    // Streak thresholds
    match catalog.streak_thresholds.first() {
        Some(floor) => {
            check!(
                errors,
                floor.min_streak == 0
                    && floor.xp_multiplier == 1.0
                    && floor.gold_multiplier == 1.0
                    && floor.title.is_none(),
                "StreakBonusThreshold",
                floor.min_streak,
                "min_streak",
                "first threshold must be the neutral floor (0, 1.0, 1.0, no title)"
            );
        }
        None => {
            errors.push(ValidationError {
                source_type: "StreakBonusThreshold",
                source_id: "-".to_string(),
                field: "items",
                problem: "no thresholds defined".to_string(),
            });
        }
    }

    for pair in catalog.streak_thresholds.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        check!(
            errors,
            lower.min_streak < upper.min_streak,
            "StreakBonusThreshold",
            upper.min_streak,
            "min_streak",
            "thresholds must be strictly ascending (follows {})",
            lower.min_streak
        );
        check!(
            errors,
            upper.xp_multiplier >= lower.xp_multiplier,
            "StreakBonusThreshold",
            upper.min_streak,
            "xp_multiplier",
            "{} is lower than the previous threshold's {}",
            upper.xp_multiplier,
            lower.xp_multiplier
        );
        check!(
            errors,
            upper.gold_multiplier >= lower.gold_multiplier,
            "StreakBonusThreshold",
            upper.min_streak,
            "gold_multiplier",
            "{} is lower than the previous threshold's {}",
            upper.gold_multiplier,
            lower.gold_multiplier
        );
    }

    // Level-up rules
    let level_up = &catalog.rules.level_up;
    check!(
        errors,
        level_up.mastery_unlock_level >= 1,
        "ProgressionRules",
        "level_up",
        "mastery_unlock_level",
        "levels start at 1"
    );
    check!(
        errors,
        level_up.dice_unlock_level >= 1,
        "ProgressionRules",
        "level_up",
        "dice_unlock_level",
        "levels start at 1"
    );
    let increments = &level_up.increments;
    check!(
        errors,
        increments.attribute > 0,
        "ProgressionRules",
        "increments",
        "attribute",
        "increment {} must raise the attribute",
        increments.attribute
    );
    for (field, amount) in [
        ("max_hp", increments.max_hp),
        ("max_sanity", increments.max_sanity),
        ("action_points", increments.action_points),
        ("attack_dice", increments.attack_dice),
        ("defense_dice", increments.defense_dice),
    ] {
        check!(
            errors,
            amount > 0,
            "ProgressionRules",
            "increments",
            field,
            "increment must be above 0"
        );
    }

    if let ActionPointRule::EveryLevels(step) = level_up.action_point_rule {
        check!(
            errors,
            step > 0,
            "ProgressionRules",
            "level_up",
            "action_point_rule",
            "EveryLevels needs a step above 0"
        );
    }

    errors
}
