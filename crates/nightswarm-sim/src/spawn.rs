//! Spawn planning: what to spawn, and where.
//!
//! Positions follow a golden-angle distribution around the player so the
//! preferred spawn sector rotates each wave. Categories are drawn from a
//! cumulative threshold table in the fixed order
//! basic -> advanced -> epic -> shooter, with a forced-presence override
//! keeping shooters from starving out of late waves.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use nightswarm_core::constants::*;
use nightswarm_core::enums::EnemyCategory;
use nightswarm_core::state::WaveScaling;
use nightswarm_core::templates::template;
use nightswarm_core::types::{Vec2, WorldBounds};

use crate::entities::Enemy;

/// Sample a spawn position in the ring around the player, clamped into
/// the world with edge padding.
pub fn pick_position(
    rng: &mut ChaCha8Rng,
    player: Vec2,
    wave_number: u32,
    bounds: WorldBounds,
) -> Vec2 {
    let distance: f32 = rng.gen_range(MIN_SPAWN_DISTANCE..=MAX_SPAWN_DISTANCE);

    // The golden-angle base rotates the preferred sector every wave.
    let base_angle = wave_number as f32 * GOLDEN_ANGLE;
    let angle = base_angle + rng.gen_range(0.0..std::f32::consts::TAU);

    let point = Vec2::new(
        player.x + angle.cos() * distance,
        player.y + angle.sin() * distance,
    );
    bounds.clamp_with_padding(point, SPAWN_EDGE_PADDING)
}

/// Map one uniform roll in `[0, 1)` to a category for the given wave.
/// Pure so the threshold tables are testable without an RNG.
pub fn category_for_roll(wave_number: u32, roll: f32) -> EnemyCategory {
    if wave_number <= EARLY_ALL_BASIC_MAX_WAVE {
        return EnemyCategory::Basic;
    }

    if wave_number <= EARLY_REGIME_MAX_WAVE {
        return if roll < EARLY_SHOOTER_THRESHOLD {
            EnemyCategory::Shooter
        } else if roll < EARLY_ADVANCED_THRESHOLD {
            EnemyCategory::Advanced
        } else {
            EnemyCategory::Basic
        };
    }

    // Late regime: chances scale with the wave, remainder is basic.
    let ramp = ((wave_number - EARLY_REGIME_MAX_WAVE - 1) as f32 * LATE_RAMP_PER_WAVE).min(1.0);
    let epic_chance = EPIC_BASE_CHANCE + ramp * EPIC_CHANCE_GROWTH;
    let shooter_chance = SHOOTER_BASE_CHANCE + ramp * SHOOTER_CHANCE_GROWTH;
    let advanced_chance = ADVANCED_BASE_CHANCE + ramp * ADVANCED_CHANCE_GROWTH;

    if roll < 1.0 - (advanced_chance + epic_chance + shooter_chance) {
        EnemyCategory::Basic
    } else if roll < 1.0 - (epic_chance + shooter_chance) {
        EnemyCategory::Advanced
    } else if roll < 1.0 - shooter_chance {
        EnemyCategory::Epic
    } else {
        EnemyCategory::Shooter
    }
}

/// Draw a category for the given wave. In the late regime, a shooter
/// drought triggers an independent 50% override so weighted sampling
/// cannot starve the category.
pub fn pick_category(
    rng: &mut ChaCha8Rng,
    wave_number: u32,
    active_shooters: u32,
) -> EnemyCategory {
    let roll: f32 = rng.gen();
    let category = category_for_roll(wave_number, roll);

    if wave_number > EARLY_REGIME_MAX_WAVE
        && active_shooters == 0
        && rng.gen::<f32>() < FORCED_SHOOTER_CHANCE
    {
        return EnemyCategory::Shooter;
    }

    category
}

/// How many spawn attempts one timer fire makes. Front-loaded so late
/// waves request more per fire rather than relying only on a faster timer.
pub fn spawn_count(wave_number: u32) -> u32 {
    let extra = (wave_number.saturating_sub(1) as f32 * SPAWN_BATCH_GROWTH)
        .min(SPAWN_BATCH_EXTRA_CAP)
        .floor() as u32;
    SPAWN_BATCH_BASE + extra
}

/// Reinitialize a pooled slot as a fresh enemy of `category` at
/// `position`, with the wave multipliers captured into its stats.
pub fn initialize_enemy(
    enemy: &mut Enemy,
    category: EnemyCategory,
    position: Vec2,
    scaling: &WaveScaling,
    rng: &mut ChaCha8Rng,
) {
    let stats = template(category);
    let rolled_speed: f32 = rng.gen_range(stats.move_speed_min..=stats.move_speed_max);

    enemy.category = category;
    enemy.position = position;
    enemy.velocity = Vec2::default();
    enemy.max_health = stats.max_health * scaling.health_multiplier;
    enemy.health = enemy.max_health;
    enemy.attack_damage = stats.attack_damage * scaling.damage_multiplier;
    enemy.defense = stats.defense;
    enemy.attack_speed = stats.attack_speed;
    enemy.move_speed = rolled_speed * scaling.speed_multiplier;
    enemy.is_dead = false;
    enemy.death_cause = None;
    enemy.death_elapsed_secs = 0.0;
    enemy.stagger_remaining_secs = 0.0;
    enemy.fire_cooldown_secs = 0.0;
}
