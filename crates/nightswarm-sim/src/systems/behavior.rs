//! Behavior system: per-enemy decisions with distance-based level of
//! detail.
//!
//! Tiers, from the player outward:
//! - beyond the despawn radius: marked dead on the spot (cheap cull, no
//!   teardown, no kill credit);
//! - within the near radius on both axes: full decision path (chase,
//!   standoff, fire);
//! - otherwise: the cheap off-screen path for categories that support
//!   it, else skipped this tick (the enemy still counts toward the
//!   population floor).
//!
//! Faults are isolated per enemy: a non-finite decision removes that
//! enemy instead of aborting the frame.

use nightswarm_ai::decide::{evaluate, evaluate_offscreen, EnemyContext};
use nightswarm_ai::profiles::get_profile;
use nightswarm_core::constants::*;
use nightswarm_core::enums::DeathCause;
use nightswarm_core::types::Vec2;

use crate::entities::Enemy;
use crate::pool::Pool;

/// A shot requested by a ranged enemy this tick.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileRequest {
    pub origin: Vec2,
    pub velocity: Vec2,
    pub damage: f32,
}

/// Run behavior for every live enemy. Fire requests are collected into
/// `requests` for the engine to turn into pooled projectiles.
pub fn run(
    enemies: &mut Pool<Enemy>,
    player: Vec2,
    dt: f32,
    requests: &mut Vec<ProjectileRequest>,
) {
    for (_slot, enemy) in enemies.iter_mut() {
        if enemy.is_dead {
            continue;
        }

        // Per-enemy clocks run regardless of LOD tier.
        if enemy.stagger_remaining_secs > 0.0 {
            enemy.stagger_remaining_secs = (enemy.stagger_remaining_secs - dt).max(0.0);
        }
        if enemy.fire_cooldown_secs > 0.0 {
            enemy.fire_cooldown_secs = (enemy.fire_cooldown_secs - dt).max(0.0);
        }

        let dx = enemy.position.x - player.x;
        let dy = enemy.position.y - player.y;
        let distance_sq = dx * dx + dy * dy;

        if distance_sq > DESPAWN_RADIUS * DESPAWN_RADIUS {
            enemy.is_dead = true;
            enemy.death_cause = Some(DeathCause::Culled);
            continue;
        }

        let profile = get_profile(enemy.category);
        let on_screen = dx.abs() < NEAR_UPDATE_RADIUS && dy.abs() < NEAR_UPDATE_RADIUS;

        let ctx = EnemyContext {
            category: enemy.category,
            position: enemy.position,
            player,
            move_speed: enemy.move_speed,
            stagger_remaining_secs: enemy.stagger_remaining_secs,
            fire_cooldown_secs: enemy.fire_cooldown_secs,
        };

        let decision = if on_screen {
            evaluate(&ctx)
        } else if profile.offscreen_update {
            evaluate_offscreen(&ctx)
        } else {
            // Skipped this tick; stale velocity must not keep integrating.
            enemy.velocity = Vec2::default();
            continue;
        };

        if !decision.velocity.is_finite() || !enemy.position.is_finite() {
            tracing::warn!(category = ?enemy.category, "non-finite behavior result, removing enemy");
            enemy.is_dead = true;
            enemy.death_cause = Some(DeathCause::Fault);
            continue;
        }

        enemy.velocity = decision.velocity;

        if decision.fire {
            // attack_speed > 1 shortens the cadence.
            let interval = profile.fire_interval_secs.unwrap_or(0.0) / enemy.attack_speed.max(0.1);
            enemy.fire_cooldown_secs = interval;

            let dir = enemy.position.direction_to(player);
            requests.push(ProjectileRequest {
                origin: enemy.position,
                velocity: Vec2::new(dir.x * PROJECTILE_SPEED, dir.y * PROJECTILE_SPEED),
                damage: enemy.attack_damage,
            });
        }
    }
}
