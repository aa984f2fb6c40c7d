//! Hero domain: the record the progression engine reads and mutates.

mod types;

pub use types::{Attribute, AttributeScores, Hero, HeroStat, Skill};
