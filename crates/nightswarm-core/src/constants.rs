//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Milliseconds per tick.
pub const DT_MS: f32 = 1000.0 / TICK_RATE as f32;

// --- World ---

/// Arena width in pixels (2x2 screens).
pub const WORLD_WIDTH: f32 = 1600.0;

/// Arena height in pixels.
pub const WORLD_HEIGHT: f32 = 1200.0;

/// Inset from the arena edge applied to spawn positions.
pub const SPAWN_EDGE_PADDING: f32 = 50.0;

/// Session time limit in seconds (25 minutes). Reaching it with the
/// player alive clears the level.
pub const SESSION_TIME_LIMIT_SECS: f64 = 1500.0;

// --- Population ---

/// Live-enemy ceiling at session start.
pub const INITIAL_MAX_ENEMIES: u32 = 50;

/// Hard ceiling the slow ramp grows toward. Pools are sized for this.
pub const MAX_ENEMIES_CAP: u32 = 100;

/// Minimum live enemies the planner tops the arena up to.
pub const MIN_ENEMIES: u32 = 15;

/// Live count at or below which a forced top-up is triggered.
pub const FORCE_SPAWN_THRESHOLD: u32 = 10;

/// At most this many forced spawns per top-up invocation.
pub const FORCE_SPAWN_BATCH_MAX: u32 = 5;

// --- Spawn cadence ---

/// Spawn timer interval at session start (ms).
pub const INITIAL_SPAWN_INTERVAL_MS: f32 = 2000.0;

/// Base interval divided by the spawn-rate multiplier on wave advance (ms).
pub const BASE_SPAWN_INTERVAL_MS: f32 = 1000.0;

/// Floor for the wave-scaled spawn interval (ms).
pub const MIN_SPAWN_INTERVAL_MS: f32 = 200.0;

/// Enemies spawned per timer fire before wave growth.
pub const SPAWN_BATCH_BASE: u32 = 2;

/// Extra per-fire spawns grow by this much per wave past 1.
pub const SPAWN_BATCH_GROWTH: f32 = 0.35;

/// Cap on the extra per-fire spawns.
pub const SPAWN_BATCH_EXTRA_CAP: f32 = 6.0;

/// Fraction of the new wave's base quota spawned immediately on advance.
pub const INITIAL_BURST_FRACTION: f32 = 0.3;

/// Cap on the immediate burst.
pub const INITIAL_BURST_CAP: u32 = 10;

// --- Per-wave scaling ---

/// Base enemy quota per wave before quantity scaling.
pub const BASE_ENEMIES_PER_WAVE: u32 = 20;

/// Flat bonus enemies per wave number.
pub const WAVE_BONUS_ENEMIES: u32 = 5;

/// Spawn-rate multiplier growth per wave past 1, capped at 4x.
pub const SPAWN_RATE_GROWTH: f32 = 0.2;
pub const SPAWN_RATE_MULTIPLIER_CAP: f32 = 4.0;

/// Quantity multiplier growth per wave past 1, capped at 6x.
pub const QUANTITY_GROWTH: f32 = 0.3;
pub const QUANTITY_MULTIPLIER_CAP: f32 = 6.0;

/// Health multiplier growth per wave past 1.
pub const HEALTH_GROWTH: f32 = 0.2;

/// Overflow guard on the per-wave health multiplier.
pub const HEALTH_MULTIPLIER_CAP: f32 = 10.0;

/// Damage multiplier growth per wave past 1.
pub const DAMAGE_GROWTH: f32 = 0.1;

/// Overflow guard on the per-wave damage multiplier.
pub const DAMAGE_MULTIPLIER_CAP: f32 = 6.0;

// --- Long-run ramp (slow difficulty curve, 60 s cadence) ---

/// Interval between ramp evaluations (ms).
pub const RAMP_INTERVAL_MS: f32 = 60_000.0;

/// Cap on the `log2(wave + 1)` ramp factor.
pub const LONG_RUN_FACTOR_CAP: f32 = 5.0;

/// Per-field weights applied to the ramp factor.
pub const LONG_RUN_HEALTH_WEIGHT: f32 = 0.5;
pub const LONG_RUN_DAMAGE_WEIGHT: f32 = 0.3;
pub const LONG_RUN_SPEED_WEIGHT: f32 = 0.1;
pub const LONG_RUN_SPAWN_RATE_WEIGHT: f32 = 0.2;

/// Inner cap on the speed contribution (speed at most doubles).
pub const LONG_RUN_SPEED_BONUS_CAP: f32 = 1.0;

/// Ramped live-enemy ceiling: `min(cap, base + per_wave * wave)`.
pub const RAMP_MAX_ENEMIES_BASE: u32 = 20;
pub const RAMP_MAX_ENEMIES_PER_WAVE: u32 = 2;

/// Ramped spawn interval: `max(floor, base - step * wave)` (ms).
pub const RAMP_SPAWN_INTERVAL_BASE_MS: f32 = 800.0;
pub const RAMP_SPAWN_INTERVAL_STEP_MS: f32 = 20.0;
pub const RAMP_SPAWN_INTERVAL_FLOOR_MS: f32 = 500.0;

// --- Spawn placement ---

/// Distance band from the player for new spawns (pixels).
pub const MIN_SPAWN_DISTANCE: f32 = 500.0;
pub const MAX_SPAWN_DISTANCE: f32 = 800.0;

/// Golden angle, pi * (3 - sqrt(5)). Rotates the preferred spawn sector
/// each wave so successive waves approach from different directions.
pub const GOLDEN_ANGLE: f32 = 2.399_963_2;

// --- Category selection ---

/// Waves at or below this use the early-regime threshold table.
pub const EARLY_REGIME_MAX_WAVE: u32 = 6;

/// Waves at or below this spawn only Basic enemies.
pub const EARLY_ALL_BASIC_MAX_WAVE: u32 = 2;

/// Early regime (waves 3-6): roll below this yields Shooter.
pub const EARLY_SHOOTER_THRESHOLD: f32 = 0.30;

/// Early regime (waves 3-6): roll below this (and above the shooter
/// threshold) yields Advanced. Remainder is Basic.
pub const EARLY_ADVANCED_THRESHOLD: f32 = 0.70;

/// Late regime ramp per wave past 7, saturating at 1.
pub const LATE_RAMP_PER_WAVE: f32 = 0.05;

/// Late-regime base chances and their growth across the ramp.
pub const EPIC_BASE_CHANCE: f32 = 0.25;
pub const EPIC_CHANCE_GROWTH: f32 = 0.15;
pub const SHOOTER_BASE_CHANCE: f32 = 0.20;
pub const SHOOTER_CHANCE_GROWTH: f32 = 0.10;
pub const ADVANCED_BASE_CHANCE: f32 = 0.35;
pub const ADVANCED_CHANCE_GROWTH: f32 = 0.10;

/// Chance to override the draw with Shooter when none are active
/// (late regime only).
pub const FORCED_SHOOTER_CHANCE: f32 = 0.5;

// --- Update level-of-detail ---

/// Enemies farther than this from the player are culled outright.
pub const DESPAWN_RADIUS: f32 = 1500.0;

/// Per-axis distance inside which enemies get the full update path.
pub const NEAR_UPDATE_RADIUS: f32 = 800.0;

// --- Combat and lifecycle ---

/// Duration of the stagger applied on a hit (seconds). Movement is
/// blocked while staggered; damage during stagger does not re-trigger it.
pub const STAGGER_DURATION_SECS: f32 = 0.5;

/// Window a killed enemy stays pool-active for its death teardown.
pub const DEATH_TEARDOWN_SECS: f32 = 0.8;

/// Every connecting hit deals at least this much after defense.
pub const MIN_DAMAGE: f32 = 1.0;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f32 = 300.0;
pub const PROJECTILE_TTL_SECS: f32 = 2.5;
pub const PROJECTILE_HIT_RADIUS: f32 = 24.0;

// --- Pickups ---

/// Radius inside which a pickup starts drifting toward the player.
pub const PICKUP_MAGNET_RADIUS: f32 = 100.0;

/// Drift speed of a magnetized pickup (px/s).
pub const PICKUP_MAGNET_SPEED: f32 = 240.0;

/// Radius at which a pickup is collected.
pub const PICKUP_COLLECT_RADIUS: f32 = 24.0;

/// Uncollected pickups expire after this long (seconds).
pub const PICKUP_TTL_SECS: f32 = 30.0;

/// Coin value dropped by Epic enemies.
pub const EPIC_COIN_VALUE: u32 = 5;

/// XP granted per gem.
pub const XP_GEM_VALUE: u32 = 1;

// --- Pool capacities ---

/// Sized for the maximum attainable live-enemy ceiling.
pub const ENEMY_POOL_CAPACITY: usize = MAX_ENEMIES_CAP as usize;

pub const PROJECTILE_POOL_CAPACITY: usize = 256;

pub const PICKUP_POOL_CAPACITY: usize = 256;
