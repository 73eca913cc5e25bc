//! Kinematic integration: `position += velocity * dt`.
//!
//! Enemies are clamped into the arena; projectiles fly free and are
//! reclaimed by the projectile system once out of bounds.

use nightswarm_core::types::WorldBounds;

use crate::entities::{Enemy, Projectile};
use crate::pool::Pool;

pub fn run(
    enemies: &mut Pool<Enemy>,
    projectiles: &mut Pool<Projectile>,
    bounds: WorldBounds,
    dt: f32,
) {
    for (_slot, enemy) in enemies.iter_mut() {
        if enemy.is_dead {
            continue;
        }
        enemy.position.x += enemy.velocity.x * dt;
        enemy.position.y += enemy.velocity.y * dt;
        enemy.position = bounds.clamp_with_padding(enemy.position, 0.0);
    }

    for (_slot, projectile) in projectiles.iter_mut() {
        projectile.position.x += projectile.velocity.x * dt;
        projectile.position.y += projectile.velocity.y * dt;
    }
}
