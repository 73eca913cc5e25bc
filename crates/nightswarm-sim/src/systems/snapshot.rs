//! Snapshot building — flattens the pooled state into the view structs
//! the rendering collaborator consumes.

use nightswarm_core::enums::GamePhase;
use nightswarm_core::events::GameEvent;
use nightswarm_core::state::{
    ArenaSnapshot, EnemyView, PickupView, PlayerView, PopulationView, ProjectileView, ScoreView,
    WaveView,
};
use nightswarm_core::types::{GameTime, Vec2};

use crate::engine::ScoreState;
use crate::entities::{Enemy, Pickup, Projectile};
use crate::pool::Pool;
use crate::wave::WaveController;

#[allow(clippy::too_many_arguments)]
pub fn build(
    time: GameTime,
    phase: GamePhase,
    player: Vec2,
    enemies: &Pool<Enemy>,
    projectiles: &Pool<Projectile>,
    pickups: &Pool<Pickup>,
    wave: &WaveController,
    score: &ScoreState,
    events: Vec<GameEvent>,
) -> ArenaSnapshot {
    let enemy_views: Vec<EnemyView> = enemies
        .iter()
        .map(|(slot, enemy)| EnemyView {
            slot,
            category: enemy.category,
            position: enemy.position,
            health: enemy.health,
            max_health: enemy.max_health,
            is_dead: enemy.is_dead,
            staggered: enemy.is_staggered(),
        })
        .collect();

    let live_enemies = enemy_views.iter().filter(|view| !view.is_dead).count() as u32;

    ArenaSnapshot {
        time,
        phase,
        wave: WaveView {
            wave_number: wave.wave_number(),
            enemies_remaining: wave.enemies_remaining(),
            spawn_interval_ms: wave.spawn_interval_ms(),
            max_enemies: wave.max_enemies(),
            scaling: wave.effective_scaling(),
        },
        player: PlayerView { position: player },
        population: PopulationView {
            live_enemies,
            active_enemies: enemies.active_count() as u32,
            enemy_pool_capacity: enemies.capacity() as u32,
        },
        enemies: enemy_views,
        projectiles: projectiles
            .iter()
            .map(|(slot, projectile)| ProjectileView {
                slot,
                position: projectile.position,
                damage: projectile.damage,
            })
            .collect(),
        pickups: pickups
            .iter()
            .map(|(slot, pickup)| PickupView {
                slot,
                position: pickup.position,
                kind: pickup.kind,
                value: pickup.value,
            })
            .collect(),
        score: ScoreView {
            kills: score.kills,
            gold: score.gold,
            xp: score.xp,
            time_alive_secs: time.elapsed_secs,
        },
        events,
    }
}
