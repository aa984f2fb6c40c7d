//! Progression domain: survival streak multipliers.

use crate::content::{RewardCatalog, StreakBonusThreshold};
use crate::progression::types::StreakBonus;

/// Richest bonus the streak qualifies for.
pub fn compute_streak_bonus(catalog: &RewardCatalog, streak: u32) -> StreakBonus {
    catalog
        .streak_thresholds()
        .iter()
        .rev()
        .find(|threshold| threshold.min_streak <= streak)
        .map(StreakBonus::from)
        .unwrap_or_default()
}

/// The next threshold above `streak`, if any.
pub fn next_streak_threshold(catalog: &RewardCatalog, streak: u32) -> Option<&StreakBonusThreshold> {
    catalog
        .streak_thresholds()
        .iter()
        .find(|threshold| threshold.min_streak > streak)
}
