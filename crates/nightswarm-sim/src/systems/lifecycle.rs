//! Enemy lifecycle system: death clocks and slot reclamation.
//!
//! Killed enemies stay pool-active through the teardown window (the
//! external death animation plays during it) while excluded from all
//! gameplay queries. Culled and faulted enemies are reclaimed on the
//! spot. Their `EnemyDied` event is emitted here; a kill's event was
//! already emitted (with credit and loot) when the damage landed.

use nightswarm_core::constants::DEATH_TEARDOWN_SECS;
use nightswarm_core::enums::DeathCause;
use nightswarm_core::events::GameEvent;
use nightswarm_core::types::SlotId;

use crate::entities::Enemy;
use crate::pool::Pool;

pub fn run(
    enemies: &mut Pool<Enemy>,
    dt: f32,
    release_buffer: &mut Vec<SlotId>,
    events: &mut Vec<GameEvent>,
) {
    release_buffer.clear();

    for (slot, enemy) in enemies.iter_mut() {
        if !enemy.is_dead {
            continue;
        }

        match enemy.death_cause {
            Some(DeathCause::Killed) => {
                enemy.death_elapsed_secs += dt;
                if enemy.death_elapsed_secs >= DEATH_TEARDOWN_SECS {
                    release_buffer.push(slot);
                }
            }
            Some(cause) => {
                events.push(GameEvent::EnemyDied {
                    slot,
                    category: enemy.category,
                    cause,
                });
                release_buffer.push(slot);
            }
            // Dead without a recorded cause has no teardown to wait for.
            None => release_buffer.push(slot),
        }
    }

    for slot in release_buffer.drain(..) {
        enemies.release(slot);
    }
}
