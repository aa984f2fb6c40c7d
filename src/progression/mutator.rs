//! Progression domain: committing a validated reward to the hero.

use crate::content::{RewardCatalog, SurvivorTrait};
use crate::hero::{Hero, HeroStat};
use crate::progression::error::ProgressionError;
use crate::progression::types::{HeroDelta, LevelUpBonus};

/// Apply one level-up bonus. Exactly one hero field changes; on error the
/// hero is untouched.
pub fn apply_level_up_bonus(
    catalog: &RewardCatalog,
    hero: &mut Hero,
    bonus: LevelUpBonus,
) -> Result<HeroDelta, ProgressionError> {
    let increments = &catalog.level_up_rules().increments;

    let delta = match bonus {
        LevelUpBonus::Attribute(attribute) => {
            let score = hero.attributes.get_mut(attribute);
            *score = score.saturating_add(increments.attribute);
            HeroDelta::AttributeRaised {
                attribute,
                amount: increments.attribute,
                new_score: *score,
            }
        }
        LevelUpBonus::MaxHp => raise_stat(hero, HeroStat::MaxHp, increments.max_hp),
        LevelUpBonus::MaxSanity => raise_stat(hero, HeroStat::MaxSanity, increments.max_sanity),
        LevelUpBonus::ActionPoint => {
            raise_stat(hero, HeroStat::ActionPoints, increments.action_points)
        }
        LevelUpBonus::AttackDie => raise_stat(hero, HeroStat::AttackDice, increments.attack_dice),
        LevelUpBonus::DefenseDie => {
            raise_stat(hero, HeroStat::DefenseDice, increments.defense_dice)
        }
        LevelUpBonus::SkillMastery(skill) => {
            if hero.has_mastery(skill) {
                return Err(ProgressionError::DuplicateMastery(skill));
            }
            hero.skill_masteries.push(skill);
            HeroDelta::MasteryGained(skill)
        }
    };

    Ok(delta)
}

/// Record a survivor trait. The streak is left alone; it belongs to the
/// scenario outcome layer.
pub fn apply_survivor_trait(
    hero: &mut Hero,
    survivor_trait: &SurvivorTrait,
) -> Result<HeroDelta, ProgressionError> {
    if hero.has_trait(&survivor_trait.id) {
        return Err(ProgressionError::DuplicateTrait(survivor_trait.id.clone()));
    }

    hero.survivor_traits.push(survivor_trait.id.clone());
    Ok(HeroDelta::TraitGained(survivor_trait.id.clone()))
}

fn raise_stat(hero: &mut Hero, stat: HeroStat, amount: u32) -> HeroDelta {
    let value = hero.stat_mut(stat);
    *value = value.saturating_add(amount);
    HeroDelta::StatRaised {
        stat,
        amount,
        new_value: *value,
    }
}
