//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Enemy category — determines the base stat template and spawn-weight tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyCategory {
    /// Baseline melee chaser.
    Basic,
    /// Tougher, faster melee chaser.
    Advanced,
    /// Elite melee unit with an aura and bonus loot.
    Epic,
    /// Ranged unit that holds a standoff distance and fires projectiles.
    Shooter,
}

impl EnemyCategory {
    pub const ALL: [EnemyCategory; 4] = [
        EnemyCategory::Basic,
        EnemyCategory::Advanced,
        EnemyCategory::Epic,
        EnemyCategory::Shooter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EnemyCategory::Basic => "basic",
            EnemyCategory::Advanced => "advanced",
            EnemyCategory::Epic => "epic",
            EnemyCategory::Shooter => "shooter",
        }
    }
}

/// An unknown category name arriving from outside the type system
/// (a config file, a debug console). Inside the core the category is
/// always a typed enum, so this can only surface at a parse boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown enemy category `{0}`")]
pub struct CategoryParseError(pub String);

impl std::str::FromStr for EnemyCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(EnemyCategory::Basic),
            "advanced" => Ok(EnemyCategory::Advanced),
            "epic" => Ok(EnemyCategory::Epic),
            "shooter" => Ok(EnemyCategory::Shooter),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Player died. Terminal.
    GameOver,
    /// Session time limit reached with the player alive. Terminal.
    LevelCleared,
}

impl GamePhase {
    /// Terminal phases permit no further gameplay mutation.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::LevelCleared)
    }
}

/// Why an enemy left the living set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Health depleted by damage. Grants kill credit and loot, and the
    /// slot lingers pool-active through the death teardown window.
    Killed,
    /// Strayed beyond the despawn radius. Reclaimed immediately,
    /// no kill credit, no loot.
    Culled,
    /// Behavior update produced a non-finite result; the enemy is
    /// removed instead of poisoning the frame.
    Fault,
}

/// Pickup flavors dropped by dying enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Coin,
    XpGem,
}
