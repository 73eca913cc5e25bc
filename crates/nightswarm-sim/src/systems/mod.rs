//! Per-tick systems that operate on the pooled entities.
//!
//! Systems are free functions taking the state they mutate — they own
//! nothing. The engine invokes them in a fixed order each tick.

pub mod behavior;
pub mod lifecycle;
pub mod movement;
pub mod pickup;
pub mod projectile;
pub mod snapshot;
