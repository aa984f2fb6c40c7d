//! Progression domain: ECS resources and systems driving advancement cycles.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;
use std::collections::{HashMap, VecDeque};

use crate::content::RewardCatalog;
use crate::hero::Hero;
use crate::progression::advancement::{Advancement, AdvancementChoice, Candidates, build_offer};
use crate::progression::error::ProgressionError;
use crate::progression::events::{
    AdvancementAppliedEvent, AdvancementOfferedEvent, AdvancementRejectedEvent,
    LevelReachedEvent, LevelUpChosenEvent, StreakAdvancedEvent, SurvivorTraitChosenEvent,
};
use crate::progression::types::{AdvancementTrack, AdvancementTrigger, HeroDelta};

// ============================================================================
// Resources
// ============================================================================

/// Advancements waiting for a pick, per hero and track, oldest first.
///
/// Only the trigger is kept. Candidates are rebuilt from the hero when the
/// pick arrives.
#[derive(Resource, Debug, Default)]
pub struct PendingAdvancements {
    queues: HashMap<(Entity, AdvancementTrack), VecDeque<Advancement>>,
}

impl PendingAdvancements {
    pub fn push(&mut self, hero: Entity, trigger: AdvancementTrigger) {
        self.queues
            .entry((hero, trigger.track()))
            .or_default()
            .push_back(Advancement::offered(trigger));
    }

    /// The advancement the next pick on this track resolves against
    pub fn front(&self, hero: Entity, track: AdvancementTrack) -> Option<&Advancement> {
        self.queues.get(&(hero, track)).and_then(|queue| queue.front())
    }

    fn front_mut(&mut self, hero: Entity, track: AdvancementTrack) -> Option<&mut Advancement> {
        self.queues
            .get_mut(&(hero, track))
            .and_then(|queue| queue.front_mut())
    }

    fn pop_front(&mut self, hero: Entity, track: AdvancementTrack) -> Option<Advancement> {
        let queue = self.queues.get_mut(&(hero, track))?;
        let advancement = queue.pop_front();
        if queue.is_empty() {
            self.queues.remove(&(hero, track));
        }
        advancement
    }

    pub fn pending_count(&self, hero: Entity) -> usize {
        self.queues
            .iter()
            .filter(|((owner, _), _)| *owner == hero)
            .map(|(_, queue)| queue.len())
            .sum()
    }

    pub fn clear_hero(&mut self, hero: Entity) {
        self.queues.retain(|(owner, _), _| *owner != hero);
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}

/// Committed advancements, in order, for post-run summaries.
#[derive(Resource, Debug, Default)]
pub struct AdvancementHistory {
    pub entries: Vec<AppliedAdvancement>,
}

#[derive(Debug, Clone)]
pub struct AppliedAdvancement {
    pub hero: Entity,
    pub trigger: AdvancementTrigger,
    pub delta: HeroDelta,
}

impl AdvancementHistory {
    pub fn record(&mut self, hero: Entity, trigger: AdvancementTrigger, delta: HeroDelta) {
        self.entries.push(AppliedAdvancement {
            hero,
            trigger,
            delta,
        });
    }

    pub fn for_hero(&self, hero: Entity) -> Vec<&AppliedAdvancement> {
        self.entries.iter().filter(|e| e.hero == hero).collect()
    }
}

// ============================================================================
// Systems
// ============================================================================

pub(crate) fn offer_level_up_advancements(
    mut level_events: MessageReader<LevelReachedEvent>,
    mut offered_events: MessageWriter<AdvancementOfferedEvent>,
    heroes: Query<&Hero>,
    catalog: Res<RewardCatalog>,
    mut pending: ResMut<PendingAdvancements>,
) {
    for event in level_events.read() {
        let Ok(hero) = heroes.get(event.hero) else {
            warn!("Level {} reached by unknown hero {:?}", event.level, event.hero);
            continue;
        };

        let trigger = AdvancementTrigger::LevelReached { level: event.level };
        let offer = build_offer(&catalog, hero, trigger);

        if offer.candidates.is_empty() {
            info!(
                "Hero {:?} reached level {} with nothing to choose",
                event.hero, event.level
            );
        } else {
            pending.push(event.hero, trigger);
            info!(
                "Offering {} level-up option(s) to {:?} at level {}{}",
                offer.candidates.len(),
                event.hero,
                event.level,
                offer
                    .milestone
                    .as_ref()
                    .map(|m| format!(" with milestone '{}'", m.name))
                    .unwrap_or_default()
            );
        }

        offered_events.write(AdvancementOfferedEvent {
            hero: event.hero,
            offer,
        });
    }
}

pub(crate) fn offer_survivor_trait_advancements(
    mut streak_events: MessageReader<StreakAdvancedEvent>,
    mut offered_events: MessageWriter<AdvancementOfferedEvent>,
    heroes: Query<&Hero>,
    catalog: Res<RewardCatalog>,
    mut pending: ResMut<PendingAdvancements>,
) {
    for event in streak_events.read() {
        let Ok(hero) = heroes.get(event.hero) else {
            warn!("Streak {} reported for unknown hero {:?}", event.streak, event.hero);
            continue;
        };

        if hero.scenarios_survived_streak != event.streak {
            warn!(
                "Streak event for {:?} says {} but hero record has {}; using the record",
                event.hero, event.streak, hero.scenarios_survived_streak
            );
        }

        let trigger = AdvancementTrigger::StreakAdvanced {
            streak: hero.scenarios_survived_streak,
        };
        let mut offer = build_offer(&catalog, hero, trigger);

        // Traits are picked at unlock milestones only; other streaks carry the bonus alone
        if !catalog.unlocks_traits_at(hero.scenarios_survived_streak) {
            offer.candidates = Candidates::NoOptionsAvailable;
        }

        if offer.candidates.is_empty() {
            debug!(
                "No survivor trait pick for {:?} at streak {}",
                event.hero, hero.scenarios_survived_streak
            );
        } else {
            pending.push(event.hero, trigger);
            info!(
                "Offering {} survivor trait(s) to {:?} at streak {}",
                offer.candidates.len(),
                event.hero,
                hero.scenarios_survived_streak
            );
        }

        offered_events.write(AdvancementOfferedEvent {
            hero: event.hero,
            offer,
        });
    }
}

pub(crate) fn apply_advancement_choices(
    mut level_up_events: MessageReader<LevelUpChosenEvent>,
    mut trait_events: MessageReader<SurvivorTraitChosenEvent>,
    mut applied_events: MessageWriter<AdvancementAppliedEvent>,
    mut rejected_events: MessageWriter<AdvancementRejectedEvent>,
    mut heroes: Query<&mut Hero>,
    catalog: Res<RewardCatalog>,
    mut pending: ResMut<PendingAdvancements>,
    mut history: ResMut<AdvancementHistory>,
) {
    let choices: Vec<(Entity, AdvancementChoice)> = level_up_events
        .read()
        .map(|e| (e.hero, AdvancementChoice::LevelUp(e.bonus)))
        .chain(
            trait_events
                .read()
                .map(|e| (e.hero, AdvancementChoice::SurvivorTrait(e.trait_id.clone()))),
        )
        .collect();

    for (hero_entity, choice) in choices {
        let track = choice.track();

        let Ok(mut hero) = heroes.get_mut(hero_entity) else {
            warn!("Choice {:?} for unknown hero {:?}", choice, hero_entity);
            pending.clear_hero(hero_entity);
            continue;
        };

        let Some(advancement) = pending.front_mut(hero_entity, track) else {
            warn!("Choice {:?} for {:?} without an open offer", choice, hero_entity);
            rejected_events.write(AdvancementRejectedEvent {
                hero: hero_entity,
                reason: ProgressionError::NotOffered,
            });
            continue;
        };

        let trigger = advancement.trigger;
        advancement.choose(choice);

        match advancement.commit(&catalog, &mut hero) {
            Ok(delta) => {
                pending.pop_front(hero_entity, track);
                info!("Hero {:?}: {}", hero_entity, delta.describe());
                history.record(hero_entity, trigger, delta.clone());
                applied_events.write(AdvancementAppliedEvent {
                    hero: hero_entity,
                    trigger,
                    delta,
                });
            }
            Err(reason) => {
                if reason == ProgressionError::NoOptionsAvailable {
                    pending.pop_front(hero_entity, track);
                }
                warn!("Rejected choice for {:?}: {}", hero_entity, reason);
                rejected_events.write(AdvancementRejectedEvent {
                    hero: hero_entity,
                    reason,
                });
            }
        }
    }
}

/// Drop open offers of heroes whose record went away
pub(crate) fn forget_removed_heroes(
    mut removed: RemovedComponents<Hero>,
    mut pending: ResMut<PendingAdvancements>,
) {
    for hero in removed.read() {
        pending.clear_hero(hero);
    }
}
