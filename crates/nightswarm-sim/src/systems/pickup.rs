//! Pickup system: magnet drift, collection, and expiry.

use nightswarm_core::constants::*;
use nightswarm_core::enums::PickupKind;
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::{SlotId, Vec2};

use crate::engine::ScoreState;
use crate::entities::Pickup;
use crate::pool::Pool;

pub fn run(
    pickups: &mut Pool<Pickup>,
    player: Vec2,
    dt: f32,
    score: &mut ScoreState,
    release_buffer: &mut Vec<SlotId>,
    events: &mut Vec<GameEvent>,
) {
    release_buffer.clear();

    let collect_sq = PICKUP_COLLECT_RADIUS * PICKUP_COLLECT_RADIUS;
    let magnet_sq = PICKUP_MAGNET_RADIUS * PICKUP_MAGNET_RADIUS;

    for (slot, pickup) in pickups.iter_mut() {
        pickup.ttl_secs -= dt;
        if pickup.ttl_secs <= 0.0 {
            release_buffer.push(slot);
            continue;
        }

        let distance_sq = pickup.position.distance_sq_to(player);

        if distance_sq <= collect_sq {
            match pickup.kind {
                PickupKind::Coin => {
                    score.gold += pickup.value;
                    events.push(GameEvent::CoinCollected {
                        value: pickup.value,
                    });
                }
                PickupKind::XpGem => {
                    score.xp += pickup.value;
                    events.push(GameEvent::XpCollected {
                        value: pickup.value,
                    });
                }
            }
            release_buffer.push(slot);
            continue;
        }

        // Drift toward the player inside the magnet radius.
        if distance_sq <= magnet_sq {
            let dir = pickup.position.direction_to(player);
            pickup.position.x += dir.x * PICKUP_MAGNET_SPEED * dt;
            pickup.position.y += dir.y * PICKUP_MAGNET_SPEED * dt;
        }
    }

    for slot in release_buffer.drain(..) {
        pickups.release(slot);
    }
}
