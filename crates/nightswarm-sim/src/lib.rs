//! Simulation engine for NIGHTSWARM.
//!
//! Owns the entity pools, runs the wave controller, spawn planner, and
//! per-tick systems at a fixed tick rate, and produces ArenaSnapshots
//! for the rendering collaborator.

pub mod engine;
pub mod entities;
pub mod pool;
pub mod spawn;
pub mod systems;
pub mod wave;

pub use engine::{EngineConfig, GameEngine};
pub use nightswarm_core as core;
