//! Arena snapshot — the complete visible state produced each tick for
//! the rendering collaborator.

use serde::{Deserialize, Serialize};

use crate::enums::{EnemyCategory, GamePhase, PickupKind};
use crate::events::GameEvent;
use crate::types::{GameTime, SlotId, Vec2};

/// Complete simulation state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub time: GameTime,
    pub phase: GamePhase,
    pub wave: WaveView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
    pub population: PopulationView,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
}

/// Difficulty multipliers applied to enemies at spawn time.
/// Every field is >= 1 and non-decreasing across a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveScaling {
    pub health_multiplier: f32,
    pub damage_multiplier: f32,
    pub speed_multiplier: f32,
    pub spawn_rate_multiplier: f32,
}

impl Default for WaveScaling {
    fn default() -> Self {
        Self {
            health_multiplier: 1.0,
            damage_multiplier: 1.0,
            speed_multiplier: 1.0,
            spawn_rate_multiplier: 1.0,
        }
    }
}

impl WaveScaling {
    /// Field-wise maximum of two scaling curves.
    pub fn max(&self, other: &WaveScaling) -> WaveScaling {
        WaveScaling {
            health_multiplier: self.health_multiplier.max(other.health_multiplier),
            damage_multiplier: self.damage_multiplier.max(other.damage_multiplier),
            speed_multiplier: self.speed_multiplier.max(other.speed_multiplier),
            spawn_rate_multiplier: self.spawn_rate_multiplier.max(other.spawn_rate_multiplier),
        }
    }
}

/// Wave progress for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave_number: u32,
    pub enemies_remaining: u32,
    /// `None` once the wave quota is exhausted and the timer cancelled.
    pub spawn_interval_ms: Option<f32>,
    pub max_enemies: u32,
    pub scaling: WaveScaling,
}

/// The externally-owned player, as the core sees it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
}

/// A pooled enemy visible this tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub slot: SlotId,
    pub category: EnemyCategory,
    pub position: Vec2,
    pub health: f32,
    pub max_health: f32,
    /// Dead but still pool-active (death teardown in progress).
    pub is_dead: bool,
    pub staggered: bool,
}

/// An in-flight enemy projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub slot: SlotId,
    pub position: Vec2,
    pub damage: f32,
}

/// A dropped pickup awaiting collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub slot: SlotId,
    pub position: Vec2,
    pub kind: PickupKind,
    pub value: u32,
}

/// Pool occupancy for display and diagnostics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopulationView {
    /// Non-dead enemies (what the floor enforcement counts).
    pub live_enemies: u32,
    /// Pool-active enemies, including those in death teardown.
    pub active_enemies: u32,
    pub enemy_pool_capacity: u32,
}

/// Running score for display and the terminal report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub kills: u32,
    pub gold: u32,
    pub xp: u32,
    pub time_alive_secs: f64,
}
