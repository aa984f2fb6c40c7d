pub mod content;
pub mod hero;
pub mod progression;

pub use content::{ContentPlugin, RewardCatalog};
pub use hero::{Attribute, Hero, Skill};
pub use progression::ProgressionPlugin;
