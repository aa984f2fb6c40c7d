//! Progression domain: building offers and walking one advancement cycle.
//!
//! A cycle goes `Offered -> Chosen -> Validated -> Applied`. A failed
//! validation or apply drops back to `Offered` without touching the hero.

use serde::{Deserialize, Serialize};

use crate::content::{Milestone, RewardCatalog, SurvivorTrait};
use crate::hero::Hero;
use crate::progression::error::ProgressionError;
use crate::progression::mutator::{apply_level_up_bonus, apply_survivor_trait};
use crate::progression::options::{
    filter_available, generate_level_up_options, generate_survivor_trait_options,
};
use crate::progression::selection::{resolve_level_up_choice, resolve_survivor_trait_choice};
use crate::progression::streak::compute_streak_bonus;
use crate::progression::types::{
    AdvancementTrack, AdvancementTrigger, HeroDelta, LevelUpBonus, StreakBonus,
};

/// Options handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Candidates {
    LevelUp(Vec<LevelUpBonus>),
    SurvivorTraits(Vec<SurvivorTrait>),
    /// Valid "nothing to pick" state, not a failure
    NoOptionsAvailable,
}

impl Candidates {
    pub fn len(&self) -> usize {
        match self {
            Candidates::LevelUp(options) => options.len(),
            Candidates::SurvivorTraits(options) => options.len(),
            Candidates::NoOptionsAvailable => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdvancementOffer {
    pub trigger: AdvancementTrigger,
    pub candidates: Candidates,
    /// Shown next to a level-up choice; does not consume it
    pub milestone: Option<Milestone>,
    /// Present for streak triggers
    pub streak_bonus: Option<StreakBonus>,
}

/// Build the full offer for a trigger from the hero as it is now.
pub fn build_offer(
    catalog: &RewardCatalog,
    hero: &Hero,
    trigger: AdvancementTrigger,
) -> AdvancementOffer {
    match trigger {
        AdvancementTrigger::LevelReached { level } => {
            let options = filter_available(&generate_level_up_options(catalog, level), hero);
            AdvancementOffer {
                trigger,
                candidates: if options.is_empty() {
                    Candidates::NoOptionsAvailable
                } else {
                    Candidates::LevelUp(options)
                },
                milestone: catalog.milestone_for_level(level).cloned(),
                streak_bonus: None,
            }
        }
        AdvancementTrigger::StreakAdvanced { .. } => {
            let options = generate_survivor_trait_options(catalog, hero);
            AdvancementOffer {
                trigger,
                candidates: if options.is_empty() {
                    Candidates::NoOptionsAvailable
                } else {
                    Candidates::SurvivorTraits(options)
                },
                milestone: None,
                streak_bonus: Some(compute_streak_bonus(
                    catalog,
                    hero.scenarios_survived_streak,
                )),
            }
        }
    }
}

/// A user's pick for one of the two tracks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum AdvancementChoice {
    LevelUp(LevelUpBonus),
    SurvivorTrait(String),
}

impl AdvancementChoice {
    pub fn track(&self) -> AdvancementTrack {
        match self {
            AdvancementChoice::LevelUp(_) => AdvancementTrack::LevelUp,
            AdvancementChoice::SurvivorTrait(_) => AdvancementTrack::SurvivorTrait,
        }
    }
}

/// Validate `choice` against the trigger's fresh candidates and apply it.
pub fn resolve_and_apply(
    catalog: &RewardCatalog,
    hero: &mut Hero,
    trigger: AdvancementTrigger,
    choice: &AdvancementChoice,
) -> Result<HeroDelta, ProgressionError> {
    let mut advancement = Advancement::offered(trigger);
    advancement.choose(choice.clone());
    advancement.commit(catalog, hero)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AdvancementStage {
    Offered,
    Chosen,
    Validated,
    Applied,
}

/// One pending reward for one hero.
#[derive(Debug, Clone, PartialEq)]
pub struct Advancement {
    pub trigger: AdvancementTrigger,
    stage: AdvancementStage,
    choice: Option<AdvancementChoice>,
}

impl Advancement {
    pub fn offered(trigger: AdvancementTrigger) -> Self {
        Self {
            trigger,
            stage: AdvancementStage::Offered,
            choice: None,
        }
    }

    pub fn stage(&self) -> AdvancementStage {
        self.stage
    }

    pub fn choice(&self) -> Option<&AdvancementChoice> {
        self.choice.as_ref()
    }

    /// Record the user's pick. A finished advancement ignores further picks.
    pub fn choose(&mut self, choice: AdvancementChoice) {
        if self.stage == AdvancementStage::Applied {
            return;
        }
        self.choice = Some(choice);
        self.stage = AdvancementStage::Chosen;
    }

    /// Validate and apply the recorded pick exactly once.
    pub fn commit(
        &mut self,
        catalog: &RewardCatalog,
        hero: &mut Hero,
    ) -> Result<HeroDelta, ProgressionError> {
        if self.stage != AdvancementStage::Chosen {
            return Err(ProgressionError::NotOffered);
        }
        let Some(choice) = self.choice.take() else {
            self.stage = AdvancementStage::Offered;
            return Err(ProgressionError::NotOffered);
        };

        let validated = match (self.trigger, &choice) {
            (AdvancementTrigger::LevelReached { level }, AdvancementChoice::LevelUp(bonus)) => {
                resolve_level_up_choice(catalog, hero, level, *bonus).map(ValidatedChoice::LevelUp)
            }
            (AdvancementTrigger::StreakAdvanced { .. }, AdvancementChoice::SurvivorTrait(id)) => {
                resolve_survivor_trait_choice(catalog, hero, id).map(ValidatedChoice::SurvivorTrait)
            }
            _ => Err(ProgressionError::NotOffered),
        };

        let validated = match validated {
            Ok(validated) => validated,
            Err(e) => {
                self.stage = AdvancementStage::Offered;
                return Err(e);
            }
        };
        self.stage = AdvancementStage::Validated;

        let applied = match validated {
            ValidatedChoice::LevelUp(bonus) => apply_level_up_bonus(catalog, hero, bonus),
            ValidatedChoice::SurvivorTrait(survivor_trait) => {
                apply_survivor_trait(hero, &survivor_trait)
            }
        };

        match applied {
            Ok(delta) => {
                self.stage = AdvancementStage::Applied;
                self.choice = Some(choice);
                Ok(delta)
            }
            Err(e) => {
                self.stage = AdvancementStage::Offered;
                Err(e)
            }
        }
    }
}

enum ValidatedChoice {
    LevelUp(LevelUpBonus),
    SurvivorTrait(SurvivorTrait),
}
