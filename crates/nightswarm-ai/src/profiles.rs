//! Category-specific behavior profiles.
//!
//! Consolidates per-category movement and attack parameters for the
//! decision function.

use nightswarm_core::enums::EnemyCategory;

/// Behavior parameters for one enemy category.
pub struct BehaviorProfile {
    /// The enemy chases the player only inside this range (px).
    pub chase_range: f32,
    /// Closing deadband: stop once this close to the player (px).
    pub min_distance: f32,
    /// Ranged units hold at this distance instead of closing, None for melee.
    pub standoff_range: Option<f32>,
    /// Maximum firing distance for ranged units (px).
    pub fire_range: f32,
    /// Seconds between shots at attack_speed 1.0, None for melee.
    pub fire_interval_secs: Option<f32>,
    /// Whether this category has a cheap off-screen update path.
    /// Categories without one are skipped entirely while off-screen
    /// (they still count toward the population floor).
    pub offscreen_update: bool,
}

/// Get the behavior profile for a category.
pub fn get_profile(category: EnemyCategory) -> BehaviorProfile {
    match category {
        EnemyCategory::Basic => BehaviorProfile {
            chase_range: 500.0,
            min_distance: 20.0,
            standoff_range: None,
            fire_range: 0.0,
            fire_interval_secs: None,
            offscreen_update: true,
        },
        EnemyCategory::Advanced => BehaviorProfile {
            chase_range: 500.0,
            min_distance: 20.0,
            standoff_range: None,
            fire_range: 0.0,
            fire_interval_secs: None,
            offscreen_update: true,
        },
        EnemyCategory::Epic => BehaviorProfile {
            chase_range: 650.0,
            min_distance: 20.0,
            standoff_range: None,
            fire_range: 0.0,
            fire_interval_secs: None,
            offscreen_update: true,
        },
        // Aim-and-fire only makes sense on screen, so no off-screen path.
        EnemyCategory::Shooter => BehaviorProfile {
            chase_range: 650.0,
            min_distance: 20.0,
            standoff_range: Some(240.0),
            fire_range: 420.0,
            fire_interval_secs: Some(1.6),
            offscreen_update: false,
        },
    }
}
