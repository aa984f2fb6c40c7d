//! Progression domain: rejection reasons for offers and choices.

use crate::hero::Skill;

/// Why a choice was not applied. All of these are recoverable: the caller
/// re-prompts with a freshly generated offer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    /// The choice is not among the options computed from current hero state
    NotOffered,
    /// The hero already holds this mastery
    DuplicateMastery(Skill),
    /// The hero already holds this survivor trait
    DuplicateTrait(String),
    /// There is nothing to choose from
    NoOptionsAvailable,
}

impl std::fmt::Display for ProgressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProgressionError::NotOffered => write!(f, "choice is not among the offered options"),
            ProgressionError::DuplicateMastery(skill) => {
                write!(f, "hero already has {} mastery", skill.name())
            }
            ProgressionError::DuplicateTrait(trait_id) => {
                write!(f, "hero already has survivor trait '{}'", trait_id)
            }
            ProgressionError::NoOptionsAvailable => write!(f, "no options available"),
        }
    }
}

impl std::error::Error for ProgressionError {}
