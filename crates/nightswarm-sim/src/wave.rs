//! Wave state and difficulty scaling.
//!
//! Two independent difficulty ramps coexist and are never collapsed into
//! one curve:
//!
//! - the **per-wave** curve, recomputed on every wave advance
//!   (quota-exhaustion or an explicit advance), linear in the wave number
//!   with per-field caps;
//! - the **long-run** curve, evaluated on a fixed 60-second cadence,
//!   `log2`-shaped with its own cap, which also raises the live-enemy
//!   ceiling and tightens the spawn interval.
//!
//! The multiplier applied to an enemy at spawn time is the field-wise
//! maximum of the two curves, so each stays monotone under its own cap.

use nightswarm_core::constants::*;
use nightswarm_core::state::WaveScaling;

/// Millisecond accumulator standing in for a platform timer. Holding the
/// spawn timer as `Option<IntervalTimer>` makes "exactly one live spawn
/// timer" structural: replacing it cancels the old one by construction.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval_ms: f32,
    elapsed_ms: f32,
}

impl IntervalTimer {
    pub fn new(interval_ms: f32) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
        }
    }

    pub fn interval_ms(&self) -> f32 {
        self.interval_ms
    }

    /// Advance by `dt_ms`, returning how many whole intervals elapsed.
    pub fn advance(&mut self, dt_ms: f32) -> u32 {
        self.elapsed_ms += dt_ms;
        let mut fires = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            fires += 1;
        }
        fires
    }
}

/// Per-wave scaling curve. Pure in the wave number; every field is >= 1,
/// non-decreasing, and bounded by its cap.
pub fn per_wave_scaling(wave_number: u32) -> WaveScaling {
    let past_first = wave_number.saturating_sub(1) as f32;
    WaveScaling {
        health_multiplier: (1.0 + past_first * HEALTH_GROWTH).min(HEALTH_MULTIPLIER_CAP),
        damage_multiplier: (1.0 + past_first * DAMAGE_GROWTH).min(DAMAGE_MULTIPLIER_CAP),
        speed_multiplier: 1.0,
        spawn_rate_multiplier: (1.0 + past_first * SPAWN_RATE_GROWTH)
            .min(SPAWN_RATE_MULTIPLIER_CAP),
    }
}

/// Quantity multiplier for the wave quota, capped at 6x.
pub fn quantity_multiplier(wave_number: u32) -> f32 {
    let past_first = wave_number.saturating_sub(1) as f32;
    (1.0 + past_first * QUANTITY_GROWTH).min(QUANTITY_MULTIPLIER_CAP)
}

/// Enemy quota for a wave:
/// `floor(base * quantity_multiplier) + wave_number * bonus`.
pub fn wave_quota(wave_number: u32) -> u32 {
    let base = (BASE_ENEMIES_PER_WAVE as f32 * quantity_multiplier(wave_number)).floor() as u32;
    base + wave_number * WAVE_BONUS_ENEMIES
}

/// Long-run scaling curve, `log2`-shaped with a hard factor cap.
pub fn long_run_scaling(wave_number: u32) -> WaveScaling {
    let factor = ((wave_number as f32) + 1.0).log2().min(LONG_RUN_FACTOR_CAP);
    WaveScaling {
        health_multiplier: 1.0 + factor * LONG_RUN_HEALTH_WEIGHT,
        damage_multiplier: 1.0 + factor * LONG_RUN_DAMAGE_WEIGHT,
        speed_multiplier: 1.0 + (factor * LONG_RUN_SPEED_WEIGHT).min(LONG_RUN_SPEED_BONUS_CAP),
        spawn_rate_multiplier: 1.0 + factor * LONG_RUN_SPAWN_RATE_WEIGHT,
    }
}

/// Timer fires observed during one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaveTimerFires {
    pub spawn: u32,
    pub ramp: u32,
}

/// Outcome of a wave advance, consumed by the engine.
#[derive(Debug, Clone, Copy)]
pub struct WaveAdvance {
    pub wave_number: u32,
    pub quota: u32,
    pub spawn_interval_ms: f32,
    /// Immediate single-enemy spawns requested alongside the new timer.
    pub initial_burst: u32,
}

/// Owns the wave number, quota, ceilings, and both difficulty curves.
pub struct WaveController {
    wave_number: u32,
    enemies_remaining: u32,
    spawn_timer: Option<IntervalTimer>,
    ramp_timer: IntervalTimer,
    max_enemies: u32,
    per_wave: WaveScaling,
    long_run: WaveScaling,
}

impl WaveController {
    pub fn new() -> Self {
        Self {
            wave_number: 1,
            enemies_remaining: wave_quota(1),
            spawn_timer: Some(IntervalTimer::new(INITIAL_SPAWN_INTERVAL_MS)),
            ramp_timer: IntervalTimer::new(RAMP_INTERVAL_MS),
            max_enemies: INITIAL_MAX_ENEMIES,
            per_wave: per_wave_scaling(1),
            long_run: WaveScaling::default(),
        }
    }

    pub fn wave_number(&self) -> u32 {
        self.wave_number
    }

    pub fn enemies_remaining(&self) -> u32 {
        self.enemies_remaining
    }

    pub fn max_enemies(&self) -> u32 {
        self.max_enemies
    }

    /// Current spawn interval, `None` once the quota cancelled the timer.
    pub fn spawn_interval_ms(&self) -> Option<f32> {
        self.spawn_timer.as_ref().map(IntervalTimer::interval_ms)
    }

    /// The multiplier set applied to enemies spawning right now.
    pub fn effective_scaling(&self) -> WaveScaling {
        self.per_wave.max(&self.long_run)
    }

    /// Advance both timers by one tick's worth of milliseconds.
    pub fn tick_timers(&mut self, dt_ms: f32) -> WaveTimerFires {
        WaveTimerFires {
            spawn: self
                .spawn_timer
                .as_mut()
                .map_or(0, |timer| timer.advance(dt_ms)),
            ramp: self.ramp_timer.advance(dt_ms),
        }
    }

    /// Begin the next wave: rescale, refill the quota, and replace the
    /// spawn timer (the previous one is dropped, never left running).
    pub fn advance_wave(&mut self) -> WaveAdvance {
        self.wave_number += 1;
        self.per_wave = per_wave_scaling(self.wave_number);
        self.enemies_remaining = wave_quota(self.wave_number);

        let interval_ms = (BASE_SPAWN_INTERVAL_MS / self.per_wave.spawn_rate_multiplier)
            .max(MIN_SPAWN_INTERVAL_MS);
        self.spawn_timer = Some(IntervalTimer::new(interval_ms));

        let initial_burst = ((self.enemies_remaining as f32 * INITIAL_BURST_FRACTION).floor()
            as u32)
            .min(INITIAL_BURST_CAP);

        tracing::info!(
            wave = self.wave_number,
            quota = self.enemies_remaining,
            interval_ms,
            "wave advanced"
        );

        WaveAdvance {
            wave_number: self.wave_number,
            quota: self.enemies_remaining,
            spawn_interval_ms: interval_ms,
            initial_burst,
        }
    }

    /// Apply the slow 60-second ramp: bump the wave number, refresh the
    /// long-run curve, raise the live-enemy ceiling, and tighten the
    /// spawn cadence. The spawn timer is only replaced if one is live —
    /// a quota-cancelled timer stays cancelled.
    pub fn apply_long_run_ramp(&mut self) -> (u32, u32, f32) {
        self.wave_number += 1;
        self.long_run = long_run_scaling(self.wave_number);
        // The ceiling only grows: from the initial 50 toward the cap.
        self.max_enemies = self.max_enemies.max(
            (RAMP_MAX_ENEMIES_BASE + RAMP_MAX_ENEMIES_PER_WAVE * self.wave_number)
                .min(MAX_ENEMIES_CAP),
        );

        let interval_ms = (RAMP_SPAWN_INTERVAL_BASE_MS
            - RAMP_SPAWN_INTERVAL_STEP_MS * self.wave_number as f32)
            .max(RAMP_SPAWN_INTERVAL_FLOOR_MS);
        if self.spawn_timer.is_some() {
            self.spawn_timer = Some(IntervalTimer::new(interval_ms));
        }

        tracing::debug!(
            wave = self.wave_number,
            max_enemies = self.max_enemies,
            interval_ms,
            "long-run difficulty ramp"
        );

        (self.wave_number, self.max_enemies, interval_ms)
    }

    /// Whether timer-driven spawning still has budget this wave.
    pub fn has_quota(&self) -> bool {
        self.enemies_remaining > 0
    }

    /// Account for one successful spawn. Hitting zero cancels the spawn
    /// timer; floor top-ups are unaffected.
    pub fn consume_spawn(&mut self) {
        if self.enemies_remaining == 0 {
            return;
        }
        self.enemies_remaining -= 1;
        if self.enemies_remaining == 0 {
            self.spawn_timer = None;
            tracing::debug!(wave = self.wave_number, "wave quota exhausted, spawn timer cancelled");
        }
    }
}

impl Default for WaveController {
    fn default() -> Self {
        Self::new()
    }
}
