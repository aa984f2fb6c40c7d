//! Content domain: tests for the reward catalog, RON loading and validation.

use bevy::prelude::*;
use std::path::Path;

use super::{
    ActionPointRule, ContentPlugin, Milestone, ProgressionRules, RewardCatalog, StreakBonusThreshold,
    SurvivorTrait, TraitTier, load_catalog, parse_data_file, parse_single_file, validate_catalog,
};

fn shipped_data_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/data")
}

fn problem_fields(catalog: &RewardCatalog) -> Vec<&'static str> {
    validate_catalog(catalog).iter().map(|e| e.field).collect()
}

// -----------------------------------------------------------------------------
// Catalog accessors
// -----------------------------------------------------------------------------

#[test]
fn test_reference_catalog_has_four_attribute_bonuses() {
    let catalog = RewardCatalog::default();
    assert_eq!(catalog.attribute_bonuses().len(), 4);
}

#[test]
fn test_survivor_traits_by_tier_keep_catalog_order() {
    let catalog = RewardCatalog::default();
    let tier_one: Vec<&str> = catalog
        .survivor_traits_tier(TraitTier::One)
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    let tier_two: Vec<&str> = catalog
        .survivor_traits_tier(TraitTier::Two)
        .iter()
        .map(|t| t.id.as_str())
        .collect();

    assert_eq!(tier_one, vec!["hardened", "scavenger", "wary"]);
    assert_eq!(tier_two, vec!["unbreakable", "grim_resolve", "death_cheater"]);
}

#[test]
fn test_milestone_lookup() {
    let catalog = RewardCatalog::default();
    assert_eq!(
        catalog.milestone_for_level(5).map(|m| m.name.as_str()),
        Some("Veteran of the Unknown")
    );
    assert!(catalog.milestone_for_level(4).is_none());
    assert!(catalog.milestone_for_level(0).is_none());
}

#[test]
fn test_streak_thresholds_start_with_neutral_floor() {
    let catalog = RewardCatalog::default();
    let floor = &catalog.streak_thresholds()[0];
    assert_eq!(floor.min_streak, 0);
    assert_eq!(floor.xp_multiplier, 1.0);
    assert_eq!(floor.gold_multiplier, 1.0);
    assert!(floor.title.is_none());
}

#[test]
fn test_tier_unlock_streaks() {
    let catalog = RewardCatalog::default();
    assert_eq!(catalog.tier_unlock_streak(TraitTier::One), 3);
    assert_eq!(catalog.tier_unlock_streak(TraitTier::Two), 6);
}

#[test]
fn test_find_survivor_trait() {
    let catalog = RewardCatalog::default();
    assert_eq!(
        catalog.find_survivor_trait("wary").map(|t| t.tier),
        Some(TraitTier::One)
    );
    assert!(catalog.find_survivor_trait("immortal").is_none());
}

#[test]
fn test_trait_tier_levels() {
    assert_eq!(TraitTier::One.level(), 1);
    assert_eq!(TraitTier::from_level(2), Some(TraitTier::Two));
    assert_eq!(TraitTier::from_level(3), None);
}

#[test]
fn test_action_point_rule_cadence() {
    assert!(ActionPointRule::Always.offers_at(1));
    assert!(!ActionPointRule::Never.offers_at(10));
    assert!(!ActionPointRule::FromLevel(3).offers_at(2));
    assert!(ActionPointRule::FromLevel(3).offers_at(3));
    assert!(ActionPointRule::EveryLevels(3).offers_at(6));
    assert!(!ActionPointRule::EveryLevels(3).offers_at(7));
    assert!(!ActionPointRule::EveryLevels(0).offers_at(0));
}

#[test]
fn test_summary_mentions_counts() {
    let summary = RewardCatalog::default().summary();
    assert!(summary.contains("Survivor Traits: 6 (tier 1: 3, tier 2: 3)"));
    assert!(summary.contains("Milestones: 4"));
}

// -----------------------------------------------------------------------------
// Loading
// -----------------------------------------------------------------------------

#[test]
fn test_shipped_content_matches_reference_catalog() {
    let loaded = load_catalog(&shipped_data_dir()).expect("shipped content should load");
    let reference = RewardCatalog::default();

    assert_eq!(loaded.survivor_traits, reference.survivor_traits);
    assert_eq!(loaded.milestones, reference.milestones);
    assert_eq!(loaded.rules, reference.rules);
    assert_eq!(
        loaded.streak_thresholds.len(),
        reference.streak_thresholds.len()
    );
    for (a, b) in loaded
        .streak_thresholds
        .iter()
        .zip(reference.streak_thresholds.iter())
    {
        assert_eq!(a.min_streak, b.min_streak);
        assert_eq!(a.title, b.title);
        assert!((a.xp_multiplier - b.xp_multiplier).abs() < 1e-6);
        assert!((a.gold_multiplier - b.gold_multiplier).abs() < 1e-6);
    }
}

#[test]
fn test_shipped_content_validates() {
    let loaded = load_catalog(&shipped_data_dir()).unwrap();
    assert!(validate_catalog(&loaded).is_empty());
}

#[test]
fn test_missing_directory_reports_every_file() {
    let errors = load_catalog(Path::new("/nonexistent/progression")).unwrap_err();
    assert_eq!(errors.len(), 4);
    assert!(errors[0].to_string().contains("survivor_traits.ron"));
}

#[test]
fn test_parse_trait_with_implicit_some_title() {
    let thresholds: Vec<StreakBonusThreshold> = parse_data_file(
        "inline",
        r#"(schema_version: 1, items: [
            (min_streak: 0, xp_multiplier: 1.0, gold_multiplier: 1.0, title: None),
            (min_streak: 4, xp_multiplier: 2.0, gold_multiplier: 1.5, title: "Lucky"),
        ])"#,
    )
    .unwrap();

    assert_eq!(thresholds.len(), 2);
    assert_eq!(thresholds[1].title.as_deref(), Some("Lucky"));
}

#[test]
fn test_parse_rules_with_configured_action_point_cadence() {
    let rules: ProgressionRules = parse_single_file(
        "inline",
        r#"(
            schema_version: 1,
            level_up: (
                mastery_unlock_level: 2,
                dice_unlock_level: 4,
                action_point_rule: EveryLevels(3),
                increments: (attribute: 1, max_hp: 3, max_sanity: 1, action_points: 1, attack_dice: 1, defense_dice: 1),
            ),
            survivor_tiers: (tier_one_streak: 3, tier_two_streak: 6),
        )"#,
    )
    .unwrap();

    assert_eq!(rules.level_up.action_point_rule, ActionPointRule::EveryLevels(3));
    assert_eq!(rules.level_up.increments.max_hp, 3);
}

#[test]
fn test_parse_error_names_the_file() {
    let result: Result<Vec<Milestone>, _> = parse_data_file("milestones.ron", "(items: oops");
    let error = result.unwrap_err();
    assert_eq!(error.file, "milestones.ron");
    assert!(error.to_string().starts_with("Failed to load milestones.ron"));
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_reference_catalog_validates() {
    assert!(validate_catalog(&RewardCatalog::default()).is_empty());
}

#[test]
fn test_validation_rejects_duplicate_trait_ids() {
    let mut catalog = RewardCatalog::default();
    let duplicate = catalog.survivor_traits[0].clone();
    catalog.survivor_traits.push(duplicate);

    let errors = validate_catalog(&catalog);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_id, "hardened");
    assert_eq!(errors[0].field, "id");
}

#[test]
fn test_validation_rejects_requirement_below_tier_unlock() {
    let mut catalog = RewardCatalog::default();
    catalog.survivor_traits.push(SurvivorTrait {
        id: "too_early".to_string(),
        name: "Too Early".to_string(),
        description: "Offered before its tier unlocks".to_string(),
        tier: TraitTier::Two,
        requirement: 4,
    });

    assert_eq!(problem_fields(&catalog), vec!["requirement"]);
}

#[test]
fn test_validation_rejects_missing_floor() {
    let mut catalog = RewardCatalog::default();
    catalog.streak_thresholds.remove(0);
    assert_eq!(problem_fields(&catalog), vec!["min_streak"]);

    catalog.streak_thresholds.clear();
    assert_eq!(problem_fields(&catalog), vec!["items"]);
}

#[test]
fn test_validation_rejects_unsorted_thresholds() {
    let mut catalog = RewardCatalog::default();
    catalog.streak_thresholds.swap(1, 2);
    assert!(problem_fields(&catalog).contains(&"min_streak"));
}

#[test]
fn test_validation_rejects_decreasing_multipliers() {
    let mut catalog = RewardCatalog::default();
    catalog.streak_thresholds[2].gold_multiplier = 1.05;
    assert_eq!(problem_fields(&catalog), vec!["gold_multiplier"]);
}

#[test]
fn test_validation_rejects_duplicate_milestone_levels() {
    let mut catalog = RewardCatalog::default();
    catalog.milestones.push(Milestone {
        level: 5,
        name: "Echo".to_string(),
        description: "Same level twice".to_string(),
    });

    let errors = validate_catalog(&catalog);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_id, "Echo");
}

#[test]
fn test_validation_rejects_zero_step_action_points() {
    let mut catalog = RewardCatalog::default();
    catalog.rules.level_up.action_point_rule = ActionPointRule::EveryLevels(0);
    assert_eq!(problem_fields(&catalog), vec!["action_point_rule"]);
}

#[test]
fn test_validation_rejects_non_positive_increments() {
    let mut catalog = RewardCatalog::default();
    catalog.rules.level_up.increments.attribute = -1;
    catalog.rules.level_up.increments.max_hp = 0;
    assert_eq!(problem_fields(&catalog), vec!["attribute", "max_hp"]);

    let mut catalog = RewardCatalog::default();
    catalog.rules.level_up.increments.defense_dice = 0;
    assert_eq!(problem_fields(&catalog), vec!["defense_dice"]);
}

#[test]
fn test_validation_rejects_inverted_tier_unlocks() {
    let mut catalog = RewardCatalog::default();
    catalog.rules.survivor_tiers.tier_one_streak = 8;
    let fields = problem_fields(&catalog);
    assert!(fields.contains(&"tier_two_streak"));
}

// -----------------------------------------------------------------------------
// Plugin startup
// -----------------------------------------------------------------------------

fn scratch_data_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "mythos-progression-{}-{}",
        name,
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    for file in [
        "survivor_traits.ron",
        "milestones.ron",
        "streak_thresholds.ron",
        "progression_rules.ron",
    ] {
        std::fs::copy(shipped_data_dir().join(file), dir.join(file)).unwrap();
    }
    dir
}

fn startup_catalog(plugin: ContentPlugin) -> RewardCatalog {
    let mut app = App::new();
    app.add_plugins(plugin);
    app.update();
    app.world().resource::<RewardCatalog>().clone()
}

#[test]
fn test_plugin_keeps_reference_without_directory() {
    let catalog = startup_catalog(ContentPlugin::with_data_dir("/nonexistent/progression"));
    assert_eq!(catalog, RewardCatalog::default());
}

#[test]
fn test_plugin_installs_valid_overrides() {
    let dir = scratch_data_dir("valid");
    std::fs::write(
        dir.join("milestones.ron"),
        r#"(
    schema_version: 1,
    items: [
        (level: 2, name: "First Steps", description: "Survived the first case."),
    ],
)"#,
    )
    .unwrap();

    let catalog = startup_catalog(ContentPlugin::with_data_dir(dir.clone()));
    assert_eq!(catalog.milestones.len(), 1);
    assert_eq!(
        catalog.milestone_for_level(2).map(|m| m.name.as_str()),
        Some("First Steps")
    );
    assert_eq!(catalog.survivor_traits.len(), 6);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_plugin_rejects_invalid_overrides() {
    let dir = scratch_data_dir("invalid");
    std::fs::write(
        dir.join("streak_thresholds.ron"),
        r#"(
    schema_version: 1,
    items: [
        (min_streak: 3, xp_multiplier: 1.1, gold_multiplier: 1.1, title: None),
    ],
)"#,
    )
    .unwrap();

    let catalog = startup_catalog(ContentPlugin::with_data_dir(dir.clone()));
    assert_eq!(catalog, RewardCatalog::default());

    std::fs::remove_dir_all(&dir).unwrap();
}
