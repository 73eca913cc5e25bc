//! Per-category enemy stat templates.
//!
//! A tagged variant plus a data table replaces a subclass hierarchy:
//! category-specific presentation hooks are capability flags here, not
//! override methods.

use crate::enums::EnemyCategory;

/// Base stats and capability flags for one enemy category.
/// Health and damage are pre-scaling values; the wave multipliers are
/// applied once, at spawn time.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTemplate {
    pub max_health: f32,
    pub attack_damage: f32,
    pub defense: f32,
    /// Attack cadence multiplier (1.0 = baseline).
    pub attack_speed: f32,
    /// Movement speed band (px/s); each instance rolls inside it.
    pub move_speed_min: f32,
    pub move_speed_max: f32,
    /// Renders a pulsing aura (presentation hook, no gameplay effect).
    pub has_aura: bool,
    /// Drops bonus coins on death in addition to the XP gem.
    pub drops_bonus_loot: bool,
    /// Fires projectiles from a standoff distance instead of closing in.
    pub ranged: bool,
}

const BASIC: CategoryTemplate = CategoryTemplate {
    max_health: 100.0,
    attack_damage: 8.0,
    defense: 0.0,
    attack_speed: 1.0,
    move_speed_min: 120.0,
    move_speed_max: 180.0,
    has_aura: false,
    drops_bonus_loot: false,
    ranged: false,
};

const ADVANCED: CategoryTemplate = CategoryTemplate {
    max_health: 200.0,
    attack_damage: 12.0,
    defense: 2.0,
    attack_speed: 1.2,
    move_speed_min: 132.0,
    move_speed_max: 144.0,
    has_aura: false,
    drops_bonus_loot: false,
    ranged: false,
};

const EPIC: CategoryTemplate = CategoryTemplate {
    max_health: 400.0,
    attack_damage: 18.0,
    defense: 4.0,
    attack_speed: 1.4,
    move_speed_min: 144.0,
    move_speed_max: 156.0,
    has_aura: true,
    drops_bonus_loot: true,
    ranged: false,
};

const SHOOTER: CategoryTemplate = CategoryTemplate {
    max_health: 150.0,
    attack_damage: 10.0,
    defense: 1.0,
    attack_speed: 1.0,
    move_speed_min: 110.0,
    move_speed_max: 140.0,
    has_aura: false,
    drops_bonus_loot: false,
    ranged: true,
};

/// Get the stat template for a category.
pub fn template(category: EnemyCategory) -> &'static CategoryTemplate {
    match category {
        EnemyCategory::Basic => &BASIC,
        EnemyCategory::Advanced => &ADVANCED,
        EnemyCategory::Epic => &EPIC,
        EnemyCategory::Shooter => &SHOOTER,
    }
}
