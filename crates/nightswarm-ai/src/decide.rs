//! Per-enemy behavior decision function.
//!
//! Pure functions that compute the velocity and attack decision for one
//! enemy from its situation. No pool or engine dependency — operates on
//! plain data, so the sim crate can apply decisions however it stores
//! entities.

use nightswarm_core::enums::EnemyCategory;
use nightswarm_core::types::Vec2;

use crate::profiles::get_profile;

/// Input to the decision function for a single enemy.
pub struct EnemyContext {
    pub category: EnemyCategory,
    pub position: Vec2,
    pub player: Vec2,
    /// Rolled movement speed for this instance (px/s), scaling included.
    pub move_speed: f32,
    /// Remaining stagger time; positive blocks movement and fire.
    pub stagger_remaining_secs: f32,
    /// Remaining fire cooldown; a shot is only requested at zero.
    pub fire_cooldown_secs: f32,
}

/// Output of the decision function.
pub struct EnemyDecision {
    pub velocity: Vec2,
    /// Request one projectile at the player this tick.
    pub fire: bool,
}

impl EnemyDecision {
    fn idle() -> Self {
        Self {
            velocity: Vec2::default(),
            fire: false,
        }
    }
}

/// Evaluate the full behavior path for one on-screen enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyDecision {
    // Stagger blocks everything until its clock runs out.
    if ctx.stagger_remaining_secs > 0.0 {
        return EnemyDecision::idle();
    }

    let profile = get_profile(ctx.category);
    let distance = ctx.position.distance_to(ctx.player);

    match profile.standoff_range {
        Some(standoff) => {
            let fire = profile.fire_interval_secs.is_some()
                && ctx.fire_cooldown_secs <= 0.0
                && distance <= profile.fire_range;

            // Hold position once inside the standoff band.
            let velocity = if distance > standoff && distance <= profile.chase_range {
                scaled_chase(ctx)
            } else {
                Vec2::default()
            };

            EnemyDecision { velocity, fire }
        }
        None => {
            let velocity = if distance <= profile.chase_range && distance > profile.min_distance {
                scaled_chase(ctx)
            } else {
                Vec2::default()
            };
            EnemyDecision {
                velocity,
                fire: false,
            }
        }
    }
}

/// Cheap off-screen path: close the distance, never fire, ignore the
/// chase-range limit so stragglers rejoin the fight.
pub fn evaluate_offscreen(ctx: &EnemyContext) -> EnemyDecision {
    if ctx.stagger_remaining_secs > 0.0 {
        return EnemyDecision::idle();
    }

    EnemyDecision {
        velocity: scaled_chase(ctx),
        fire: false,
    }
}

fn scaled_chase(ctx: &EnemyContext) -> Vec2 {
    let dir = ctx.position.direction_to(ctx.player);
    Vec2::new(dir.x * ctx.move_speed, dir.y * ctx.move_speed)
}
