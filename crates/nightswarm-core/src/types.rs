//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

/// 2D point or direction in world space (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Vec2) -> f32 {
        self.distance_sq_to(other).sqrt()
    }

    /// Squared distance — cheaper when only compared against a radius.
    pub fn distance_sq_to(&self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Unit vector pointing from `self` toward `other`.
    /// Returns zero when the points coincide.
    pub fn direction_to(&self, other: Vec2) -> Vec2 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let len = (dx * dx + dy * dy).sqrt();
        if len <= f32::EPSILON {
            Vec2::default()
        } else {
            Vec2::new(dx / len, dy / len)
        }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Both components are finite (no NaN/inf from a bad update).
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned world rectangle, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp a point into the rectangle inset by `padding` on every side.
    pub fn clamp_with_padding(&self, point: Vec2, padding: f32) -> Vec2 {
        Vec2::new(
            point.x.clamp(padding, self.width - padding),
            point.y.clamp(padding, self.height - padding),
        )
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// Handle to a pooled entity slot. The index is stable for the pooled
/// lifetime; the generation distinguishes successive occupants of the
/// same slot, so a stale handle can never touch a reused slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId {
    pub index: u32,
    pub generation: u32,
}

impl SlotId {
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S{}g{}", self.index, self.generation)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl GameTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }

    /// Elapsed simulation time in whole milliseconds.
    pub fn elapsed_ms(&self) -> u64 {
        (self.elapsed_secs * 1000.0) as u64
    }
}
