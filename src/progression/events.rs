//! Progression domain: messages exchanged with the game-state and presentation layers.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::progression::advancement::AdvancementOffer;
use crate::progression::error::ProgressionError;
use crate::progression::types::{AdvancementTrigger, HeroDelta, LevelUpBonus};

/// Fired by the game-state layer after a hero gains a level
#[derive(Debug)]
pub struct LevelReachedEvent {
    pub hero: Entity,
    pub level: u32,
}

impl Message for LevelReachedEvent {}

/// Fired by the scenario outcome layer after the hero's streak went up
#[derive(Debug)]
pub struct StreakAdvancedEvent {
    pub hero: Entity,
    pub streak: u32,
}

impl Message for StreakAdvancedEvent {}

/// Candidates for the presentation layer to show
#[derive(Debug)]
pub struct AdvancementOfferedEvent {
    pub hero: Entity,
    pub offer: AdvancementOffer,
}

impl Message for AdvancementOfferedEvent {}

/// The user picked a level-up bonus
#[derive(Debug)]
pub struct LevelUpChosenEvent {
    pub hero: Entity,
    pub bonus: LevelUpBonus,
}

impl Message for LevelUpChosenEvent {}

/// The user picked a survivor trait
#[derive(Debug)]
pub struct SurvivorTraitChosenEvent {
    pub hero: Entity,
    pub trait_id: String,
}

impl Message for SurvivorTraitChosenEvent {}

/// A choice was committed; the delta is what the caller persists
#[derive(Debug)]
pub struct AdvancementAppliedEvent {
    pub hero: Entity,
    pub trigger: AdvancementTrigger,
    pub delta: HeroDelta,
}

impl Message for AdvancementAppliedEvent {}

/// A choice was refused; the offer stays open for a new pick
#[derive(Debug)]
pub struct AdvancementRejectedEvent {
    pub hero: Entity,
    pub reason: ProgressionError,
}

impl Message for AdvancementRejectedEvent {}
