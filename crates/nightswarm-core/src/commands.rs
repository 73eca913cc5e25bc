//! Player and host commands sent into the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::{SlotId, Vec2};

/// All actions the surrounding layers can drive the core with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Start a new session from the main menu.
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,

    // --- Wave control ---
    /// Advance to the next wave.
    AdvanceWave,

    // --- Gameplay input ---
    /// The player moved; the core only tracks the position.
    SetPlayerPosition { x: f32, y: f32 },
    /// A weapon (external) dealt damage to a pooled enemy.
    /// `source` is where the hit came from, for stagger direction.
    DamageEnemy {
        target: SlotId,
        amount: f32,
        source: Option<Vec2>,
    },

    // --- Terminal triggers ---
    /// The external player entity died.
    PlayerDied,
    /// The session clock ran out with the player alive.
    TimeLimitReached,
}
