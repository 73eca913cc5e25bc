//! Events emitted by the simulation for the rendering and persistence
//! collaborators. Subscribers consume these instead of the core calling
//! into them.

use serde::{Deserialize, Serialize};

use crate::enums::{DeathCause, EnemyCategory};
use crate::types::SlotId;

/// One-shot notifications drained into each tick's snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new wave began (quota-exhaustion or an explicit advance).
    WaveAdvanced {
        wave_number: u32,
        quota: u32,
        spawn_interval_ms: f32,
    },
    /// The slow difficulty ramp fired (60-second cadence).
    DifficultyRamped {
        wave_number: u32,
        max_enemies: u32,
        spawn_interval_ms: f32,
    },
    /// An enemy was acquired from the pool and entered play.
    EnemySpawned {
        slot: SlotId,
        category: EnemyCategory,
        forced: bool,
    },
    /// An enemy left the living set.
    EnemyDied {
        slot: SlotId,
        category: EnemyCategory,
        cause: DeathCause,
    },
    /// An enemy projectile connected with the player. The player's
    /// health lives outside the core; this is the damage notification.
    PlayerHit { damage: f32 },
    /// A coin pickup was collected.
    CoinCollected { value: u32 },
    /// An XP gem was collected.
    XpCollected { value: u32 },
    /// The player died; the session is over.
    PlayerDied,
    /// The session time limit elapsed with the player alive.
    LevelCleared,
    /// Terminal summary for the persistence collaborator. Emitted
    /// exactly once per session, after `PlayerDied` or `LevelCleared`.
    RunEnded {
        gold: u32,
        kills: u32,
        wave_number: u32,
        time_alive_secs: f64,
        time_alive_ms: u64,
    },
}
