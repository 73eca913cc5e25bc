//! Projectile system: expiry, bounds, and player contact.

use nightswarm_core::constants::*;
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::{SlotId, Vec2, WorldBounds};

use crate::entities::Projectile;
use crate::pool::Pool;

/// Advance TTLs, detect player hits, and reclaim finished projectiles
/// through the reusable release buffer.
pub fn run(
    projectiles: &mut Pool<Projectile>,
    player: Vec2,
    bounds: WorldBounds,
    dt: f32,
    release_buffer: &mut Vec<SlotId>,
    events: &mut Vec<GameEvent>,
) {
    release_buffer.clear();

    for (slot, projectile) in projectiles.iter_mut() {
        projectile.ttl_secs -= dt;
        if projectile.ttl_secs <= 0.0 || !bounds.contains(projectile.position) {
            release_buffer.push(slot);
            continue;
        }

        let hit_radius_sq = PROJECTILE_HIT_RADIUS * PROJECTILE_HIT_RADIUS;
        if projectile.position.distance_sq_to(player) <= hit_radius_sq {
            events.push(GameEvent::PlayerHit {
                damage: projectile.damage,
            });
            release_buffer.push(slot);
        }
    }

    for slot in release_buffer.drain(..) {
        projectiles.release(slot);
    }
}
