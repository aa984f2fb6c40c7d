//! Progression domain: level-up and survivor-trait reward rules.
//!
//! The pure engine (options, streak, selection, mutator, advancement) works on
//! a hero snapshot and the reward catalog. `ProgressionPlugin` wires it into
//! the app through messages.

mod advancement;
#[cfg(feature = "dev-tools")]
mod debug;
mod error;
mod events;
mod mutator;
mod options;
mod selection;
mod streak;
mod systems;
mod types;

pub use advancement::{
    Advancement, AdvancementChoice, AdvancementOffer, AdvancementStage, Candidates, build_offer,
    resolve_and_apply,
};
pub use error::ProgressionError;
pub use events::{
    AdvancementAppliedEvent, AdvancementOfferedEvent, AdvancementRejectedEvent,
    LevelReachedEvent, LevelUpChosenEvent, StreakAdvancedEvent, SurvivorTraitChosenEvent,
};
pub use mutator::{apply_level_up_bonus, apply_survivor_trait};
pub use options::{filter_available, generate_level_up_options, generate_survivor_trait_options};
pub use selection::{resolve_level_up_choice, resolve_survivor_trait_choice};
pub use streak::{compute_streak_bonus, next_streak_threshold};
pub use systems::{AdvancementHistory, AppliedAdvancement, PendingAdvancements};
pub use types::{AdvancementTrack, AdvancementTrigger, HeroDelta, LevelUpBonus, StreakBonus};

use bevy::prelude::*;

use crate::content::RewardCatalog;
use crate::progression::systems::{
    apply_advancement_choices, forget_removed_heroes, offer_level_up_advancements,
    offer_survivor_trait_advancements,
};

pub struct ProgressionPlugin;

impl Plugin for ProgressionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RewardCatalog>()
            .init_resource::<PendingAdvancements>()
            .init_resource::<AdvancementHistory>()
            .add_message::<LevelReachedEvent>()
            .add_message::<StreakAdvancedEvent>()
            .add_message::<AdvancementOfferedEvent>()
            .add_message::<LevelUpChosenEvent>()
            .add_message::<SurvivorTraitChosenEvent>()
            .add_message::<AdvancementAppliedEvent>()
            .add_message::<AdvancementRejectedEvent>()
            .add_systems(
                Update,
                (
                    forget_removed_heroes,
                    offer_level_up_advancements,
                    offer_survivor_trait_advancements,
                    apply_advancement_choices,
                )
                    .chain(),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            debug::trace_advancement_outcomes.after(apply_advancement_choices),
        );
    }
}
