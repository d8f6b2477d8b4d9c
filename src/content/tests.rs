//! Content domain: loader, registry, and validation tests.

use std::path::PathBuf;

use super::{
    AiProfile, ArenaDef, ContentRegistry, EnemyTier, FighterStats, load_all_content,
    load_single_file, validate_content, validate_stats,
};

fn asset_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/data")
}

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("duel-core-content-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_bundled_content_loads_and_validates() {
    let registry = load_all_content(&asset_dir()).expect("bundled content should load");

    assert!(registry.character("wanderer").is_some());
    assert_eq!(registry.enemies.len(), 3);
    assert_eq!(registry.arena, ArenaDef::default());

    let problems = validate_content(&registry);
    assert!(problems.is_empty(), "unexpected problems: {:?}", problems);
}

#[test]
fn test_partial_stats_fall_back_to_defaults() {
    let registry = load_all_content(&asset_dir()).unwrap();
    let ronin = registry.character("ronin").unwrap();

    assert_eq!(ronin.stats.attack_damage, 16.0);
    // Not listed in the preset
    assert_eq!(ronin.stats.health_max, FighterStats::default().health_max);
    assert_eq!(ronin.stats.dash_duration, FighterStats::default().dash_duration);
}

#[test]
fn test_enemy_tiers_and_ai_profiles() {
    let registry = load_all_content(&asset_dir()).unwrap();

    let boss = registry.enemy_for_tier(EnemyTier::Boss).unwrap();
    assert_eq!(boss.id, "warlord");
    assert_eq!(boss.stats.health_max, 220.0);
    assert_eq!(boss.ai.combo_chance, 0.6);

    let bandit = registry.enemy("bandit").unwrap();
    // Unlisted AI knobs keep their defaults
    assert_eq!(bandit.ai.jump_chance, AiProfile::default().jump_chance);
}

#[test]
fn test_json_preset_is_accepted() {
    let path = scratch_file(
        "arena.json",
        r#"{ "ground_y": 500.0, "bounds_left": 40.0, "bounds_right": 900.0 }"#,
    );

    let arena: ArenaDef = load_single_file(&path).unwrap();
    assert_eq!(arena.ground_y, 500.0);
    assert_eq!(arena.bounds_right, 900.0);
    assert_eq!(arena.spawn_left_x, ArenaDef::default().spawn_left_x);
}

#[test]
fn test_parse_error_reports_file() {
    let path = scratch_file("broken.ron", "( ground_y: \"nope\" )");

    let err = load_single_file::<ArenaDef>(&path).unwrap_err();
    assert!(err.file.ends_with("broken.ron"));
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_missing_directory_collects_every_error() {
    let errors = load_all_content(&PathBuf::from("/definitely/not/here")).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert!(errors.iter().all(|e| e.message.starts_with("IO error")));
}

#[test]
fn test_builtin_registry_is_valid() {
    let registry = ContentRegistry::builtin();
    assert_eq!(registry.total_count(), 4);
    assert!(validate_content(&registry).is_empty());
}

#[test]
fn test_active_window_outside_swing_is_rejected() {
    let stats = FighterStats {
        attack_duration: 0.2,
        attack_active_start: 0.1,
        attack_active_end: 0.3,
        ..FighterStats::default()
    };

    let errors = validate_stats("Character", "broken", &stats);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "attack_active_start..attack_active_end");
}

#[test]
fn test_negative_durations_are_reported() {
    let stats = FighterStats {
        parry_window: -0.1,
        health_max: 0.0,
        ..FighterStats::default()
    };

    let errors = validate_stats("Enemy", "glitch", &stats);
    let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&"parry_window"));
    assert!(fields.contains(&"health_max"));
}

#[test]
fn test_inverted_arena_bounds_are_reported() {
    let mut registry = ContentRegistry::builtin();
    registry.arena.bounds_left = 1300.0;

    let errors = validate_content(&registry);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_type, "Arena");
}
