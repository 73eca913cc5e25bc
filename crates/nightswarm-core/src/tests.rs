//! Tests for core vocabulary types.

use crate::constants::*;
use crate::enums::{CategoryParseError, EnemyCategory};
use crate::state::WaveScaling;
use crate::templates::template;
use crate::types::{Vec2, WorldBounds};

// ---- Category parsing ----

#[test]
fn test_category_round_trip() {
    for category in EnemyCategory::ALL {
        let parsed: EnemyCategory = category.name().parse().unwrap();
        assert_eq!(parsed, category);
    }
}

#[test]
fn test_unknown_category_is_an_error() {
    let err = "boss".parse::<EnemyCategory>().unwrap_err();
    assert_eq!(err, CategoryParseError("boss".to_string()));
    assert_eq!(err.to_string(), "unknown enemy category `boss`");
}

// ---- Templates ----

#[test]
fn test_template_difficulty_ordering() {
    let basic = template(EnemyCategory::Basic);
    let advanced = template(EnemyCategory::Advanced);
    let epic = template(EnemyCategory::Epic);
    let shooter = template(EnemyCategory::Shooter);

    assert!(basic.max_health < shooter.max_health);
    assert!(shooter.max_health < advanced.max_health);
    assert!(advanced.max_health < epic.max_health);
    assert!(basic.attack_damage < advanced.attack_damage);
    assert!(advanced.attack_damage < epic.attack_damage);
}

#[test]
fn test_template_capability_flags() {
    assert!(template(EnemyCategory::Epic).has_aura);
    assert!(template(EnemyCategory::Epic).drops_bonus_loot);
    assert!(template(EnemyCategory::Shooter).ranged);
    assert!(!template(EnemyCategory::Basic).ranged);
}

// ---- Geometry ----

#[test]
fn test_clamp_with_padding() {
    let bounds = WorldBounds::new(WORLD_WIDTH, WORLD_HEIGHT);
    let clamped = bounds.clamp_with_padding(Vec2::new(-100.0, 5000.0), SPAWN_EDGE_PADDING);
    assert_eq!(clamped.x, SPAWN_EDGE_PADDING);
    assert_eq!(clamped.y, WORLD_HEIGHT - SPAWN_EDGE_PADDING);

    let inside = Vec2::new(300.0, 300.0);
    assert_eq!(bounds.clamp_with_padding(inside, SPAWN_EDGE_PADDING), inside);
}

#[test]
fn test_direction_to_is_unit_length() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(30.0, 40.0);
    let dir = a.direction_to(b);
    assert!((dir.length() - 1.0).abs() < 1e-6);
    assert!(dir.x > 0.0 && dir.y > 0.0);

    // Coincident points degrade to zero, not NaN.
    assert_eq!(a.direction_to(a), Vec2::default());
}

// ---- Scaling ----

#[test]
fn test_scaling_field_wise_max() {
    let a = WaveScaling {
        health_multiplier: 2.0,
        damage_multiplier: 1.0,
        speed_multiplier: 1.5,
        spawn_rate_multiplier: 1.0,
    };
    let b = WaveScaling {
        health_multiplier: 1.0,
        damage_multiplier: 3.0,
        speed_multiplier: 1.2,
        spawn_rate_multiplier: 2.0,
    };
    let m = a.max(&b);
    assert_eq!(m.health_multiplier, 2.0);
    assert_eq!(m.damage_multiplier, 3.0);
    assert_eq!(m.speed_multiplier, 1.5);
    assert_eq!(m.spawn_rate_multiplier, 2.0);
}

// ---- Snapshot contract ----

#[test]
fn test_snapshot_json_round_trip() {
    let snapshot = crate::state::ArenaSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: crate::state::ArenaSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.time.tick, 0);
    assert_eq!(back.phase, crate::enums::GamePhase::MainMenu);
    assert!(back.enemies.is_empty());
}

#[test]
fn test_golden_angle_value() {
    let expected = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());
    assert!((GOLDEN_ANGLE - expected).abs() < 1e-5);
}
