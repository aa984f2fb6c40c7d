//! Hero domain: the hero record and its attribute/skill vocabulary.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Core attributes a hero can raise on level-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Reflect)]
pub enum Attribute {
    Strength,
    Agility,
    Intellect,
    Willpower,
}

impl Attribute {
    /// All attributes in declaration order
    pub const ALL: [Attribute; 4] = [
        Attribute::Strength,
        Attribute::Agility,
        Attribute::Intellect,
        Attribute::Willpower,
    ];

    pub fn name(&self) -> &str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Agility => "Agility",
            Attribute::Intellect => "Intellect",
            Attribute::Willpower => "Willpower",
        }
    }
}

/// Skills a hero can master. Each can be mastered at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize, Reflect)]
pub enum Skill {
    Investigation,
    Combat,
    Occult,
    Athletics,
}

impl Skill {
    /// All skills in declaration order
    pub const ALL: [Skill; 4] = [
        Skill::Investigation,
        Skill::Combat,
        Skill::Occult,
        Skill::Athletics,
    ];

    pub fn name(&self) -> &str {
        match self {
            Skill::Investigation => "Investigation",
            Skill::Combat => "Combat",
            Skill::Occult => "Occult",
            Skill::Athletics => "Athletics",
        }
    }
}

/// Numeric hero stats raised by level-up bonuses (attributes excluded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum HeroStat {
    MaxHp,
    MaxSanity,
    ActionPoints,
    AttackDice,
    DefenseDice,
}

impl HeroStat {
    pub fn name(&self) -> &str {
        match self {
            HeroStat::MaxHp => "Max Health",
            HeroStat::MaxSanity => "Max Sanity",
            HeroStat::ActionPoints => "Action Points",
            HeroStat::AttackDice => "Attack Dice",
            HeroStat::DefenseDice => "Defense Dice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Reflect)]
pub struct AttributeScores {
    pub strength: i32,
    pub agility: i32,
    pub intellect: i32,
    pub willpower: i32,
}

impl Default for AttributeScores {
    fn default() -> Self {
        Self {
            strength: 3,
            agility: 3,
            intellect: 3,
            willpower: 3,
        }
    }
}

impl AttributeScores {
    pub fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intellect => self.intellect,
            Attribute::Willpower => self.willpower,
        }
    }

    pub fn get_mut(&mut self, attribute: Attribute) -> &mut i32 {
        match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intellect => &mut self.intellect,
            Attribute::Willpower => &mut self.willpower,
        }
    }
}

/// A hero record.
///
/// Owned by the game-state layer. The progression systems only touch it
/// through a validated advancement; everything else (level, streak resets,
/// death) is driven from outside.
#[derive(Component, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Hero {
    /// Current level (starts at 1)
    pub level: u32,
    pub attributes: AttributeScores,
    pub max_hp: u32,
    pub max_sanity: u32,
    pub action_points: u32,
    pub attack_dice: u32,
    pub defense_dice: u32,
    /// Mastered skills in acquisition order, never duplicated
    pub skill_masteries: Vec<Skill>,
    /// Survivor trait ids in the order they were chosen, never duplicated
    pub survivor_traits: Vec<String>,
    /// Consecutive scenarios survived
    pub scenarios_survived_streak: u32,
    is_permadeath: bool,
}

impl Hero {
    /// Create a level 1 hero with starting stats.
    pub fn new(is_permadeath: bool) -> Self {
        Self {
            level: 1,
            attributes: AttributeScores::default(),
            max_hp: 10,
            max_sanity: 10,
            action_points: 2,
            attack_dice: 1,
            defense_dice: 1,
            skill_masteries: Vec::new(),
            survivor_traits: Vec::new(),
            scenarios_survived_streak: 0,
            is_permadeath,
        }
    }

    /// Whether the hero was created in permadeath mode. Fixed at creation.
    pub fn is_permadeath(&self) -> bool {
        self.is_permadeath
    }

    pub fn has_mastery(&self, skill: Skill) -> bool {
        self.skill_masteries.contains(&skill)
    }

    pub fn has_trait(&self, trait_id: &str) -> bool {
        self.survivor_traits.iter().any(|id| id == trait_id)
    }

    pub fn stat(&self, stat: HeroStat) -> u32 {
        match stat {
            HeroStat::MaxHp => self.max_hp,
            HeroStat::MaxSanity => self.max_sanity,
            HeroStat::ActionPoints => self.action_points,
            HeroStat::AttackDice => self.attack_dice,
            HeroStat::DefenseDice => self.defense_dice,
        }
    }

    pub fn stat_mut(&mut self, stat: HeroStat) -> &mut u32 {
        match stat {
            HeroStat::MaxHp => &mut self.max_hp,
            HeroStat::MaxSanity => &mut self.max_sanity,
            HeroStat::ActionPoints => &mut self.action_points,
            HeroStat::AttackDice => &mut self.attack_dice,
            HeroStat::DefenseDice => &mut self.defense_dice,
        }
    }
}
