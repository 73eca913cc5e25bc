//! Pooled entity records.
//!
//! Plain data, reinitialized in place on every acquire. Game logic lives
//! in the systems, not here.

use nightswarm_core::enums::{DeathCause, EnemyCategory, PickupKind};
use nightswarm_core::types::Vec2;

/// One pooled enemy.
///
/// `is_dead` is game-level and one-way: a dead enemy is excluded from
/// combat, AI, and population queries, but its slot stays pool-active
/// until the death teardown window elapses.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub category: EnemyCategory,
    pub position: Vec2,
    pub velocity: Vec2,
    pub max_health: f32,
    pub health: f32,
    /// Scaled at spawn time — captured, not recomputed live.
    pub attack_damage: f32,
    pub defense: f32,
    pub attack_speed: f32,
    /// Rolled inside the category's speed band, scaling included.
    pub move_speed: f32,
    pub is_dead: bool,
    pub death_cause: Option<DeathCause>,
    /// Time spent in the death teardown so far.
    pub death_elapsed_secs: f32,
    /// Positive while staggered; blocks movement, never re-triggered
    /// by damage taken mid-stagger.
    pub stagger_remaining_secs: f32,
    /// Remaining time until a ranged unit may fire again.
    pub fire_cooldown_secs: f32,
}

impl Default for Enemy {
    fn default() -> Self {
        Self {
            category: EnemyCategory::Basic,
            position: Vec2::default(),
            velocity: Vec2::default(),
            max_health: 0.0,
            health: 0.0,
            attack_damage: 0.0,
            defense: 0.0,
            attack_speed: 1.0,
            move_speed: 0.0,
            is_dead: false,
            death_cause: None,
            death_elapsed_secs: 0.0,
            stagger_remaining_secs: 0.0,
            fire_cooldown_secs: 0.0,
        }
    }
}

impl Enemy {
    /// Alive for gameplay purposes (combat, AI, population floor).
    pub fn is_live(&self) -> bool {
        !self.is_dead
    }

    pub fn is_staggered(&self) -> bool {
        self.stagger_remaining_secs > 0.0
    }
}

/// One pooled enemy projectile.
#[derive(Debug, Clone, Default)]
pub struct Projectile {
    pub position: Vec2,
    pub velocity: Vec2,
    pub damage: f32,
    pub ttl_secs: f32,
}

/// One pooled pickup.
#[derive(Debug, Clone)]
pub struct Pickup {
    pub position: Vec2,
    pub kind: PickupKind,
    pub value: u32,
    pub ttl_secs: f32,
}

impl Default for Pickup {
    fn default() -> Self {
        Self {
            position: Vec2::default(),
            kind: PickupKind::XpGem,
            value: 0,
            ttl_secs: 0.0,
        }
    }
}
