//! Progression domain: candidate generation for both reward tracks.

use crate::content::{RewardCatalog, SurvivorTrait, TraitTier};
use crate::hero::{Hero, Skill};
use crate::progression::types::LevelUpBonus;

/// Every level-up option the catalog allows at `level`, before looking at the hero.
///
/// Order is fixed: attributes, stat bonuses, masteries, dice.
pub fn generate_level_up_options(catalog: &RewardCatalog, level: u32) -> Vec<LevelUpBonus> {
    let rules = catalog.level_up_rules();

    let mut options: Vec<LevelUpBonus> = catalog
        .attribute_bonuses()
        .iter()
        .map(|attribute| LevelUpBonus::Attribute(*attribute))
        .collect();

    options.push(LevelUpBonus::MaxHp);
    options.push(LevelUpBonus::MaxSanity);
    if rules.action_point_rule.offers_at(level) {
        options.push(LevelUpBonus::ActionPoint);
    }

    if level >= rules.mastery_unlock_level {
        options.extend(Skill::ALL.iter().map(|skill| LevelUpBonus::SkillMastery(*skill)));
    }

    if level >= rules.dice_unlock_level {
        options.push(LevelUpBonus::AttackDie);
        options.push(LevelUpBonus::DefenseDie);
    }

    options
}

/// Drop masteries the hero already holds. Order is preserved.
pub fn filter_available(options: &[LevelUpBonus], hero: &Hero) -> Vec<LevelUpBonus> {
    options
        .iter()
        .filter(|option| match option {
            LevelUpBonus::SkillMastery(skill) => !hero.has_mastery(*skill),
            _ => true,
        })
        .copied()
        .collect()
}

/// Survivor traits the hero may pick now: traits of every unlocked tier whose
/// own requirement is met, minus traits already held. Heroes without
/// permadeath are never offered traits.
pub fn generate_survivor_trait_options(catalog: &RewardCatalog, hero: &Hero) -> Vec<SurvivorTrait> {
    if !hero.is_permadeath() {
        return Vec::new();
    }

    let streak = hero.scenarios_survived_streak;
    TraitTier::ALL
        .iter()
        .filter(|tier| streak >= catalog.tier_unlock_streak(**tier))
        .flat_map(|tier| catalog.survivor_traits_tier(*tier))
        .filter(|survivor_trait| streak >= survivor_trait.requirement)
        .filter(|survivor_trait| !hero.has_trait(&survivor_trait.id))
        .cloned()
        .collect()
}
