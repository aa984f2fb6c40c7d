//! Progression domain: validating a chosen option against fresh candidates.
//!
//! Candidates are always recomputed from the hero as it is now. A client
//! holding an old option list (or a forged one) cannot slip in a choice that
//! is no longer legal, e.g. a second copy of a mastery.

use bevy::prelude::*;

use crate::content::{RewardCatalog, SurvivorTrait};
use crate::hero::Hero;
use crate::progression::error::ProgressionError;
use crate::progression::options::{
    filter_available, generate_level_up_options, generate_survivor_trait_options,
};
use crate::progression::types::LevelUpBonus;

pub fn resolve_level_up_choice(
    catalog: &RewardCatalog,
    hero: &Hero,
    level: u32,
    chosen: LevelUpBonus,
) -> Result<LevelUpBonus, ProgressionError> {
    let candidates = filter_available(&generate_level_up_options(catalog, level), hero);

    if candidates.is_empty() {
        return Err(ProgressionError::NoOptionsAvailable);
    }

    if !candidates.contains(&chosen) {
        debug!(
            "Rejected level {} choice {:?}: not among {} candidates",
            level,
            chosen,
            candidates.len()
        );
        return Err(ProgressionError::NotOffered);
    }

    Ok(chosen)
}

pub fn resolve_survivor_trait_choice(
    catalog: &RewardCatalog,
    hero: &Hero,
    chosen_id: &str,
) -> Result<SurvivorTrait, ProgressionError> {
    let candidates = generate_survivor_trait_options(catalog, hero);

    if candidates.is_empty() {
        return Err(ProgressionError::NoOptionsAvailable);
    }

    candidates
        .into_iter()
        .find(|survivor_trait| survivor_trait.id == chosen_id)
        .ok_or_else(|| {
            debug!(
                "Rejected survivor trait '{}' at streak {}",
                chosen_id, hero.scenarios_survived_streak
            );
            ProgressionError::NotOffered
        })
}
