//! Simulation engine for PITCHGUARD.
//!
//! Owns the hecs ECS world, applies player commands between frames,
//! runs the per-frame systems, and produces `GameSnapshot`s. Completely
//! headless (no rendering or input dependency), enabling deterministic
//! testing.

pub mod engine;
pub mod placement;
pub mod shot;
pub mod systems;
pub mod world_setup;

pub use engine::{EngineConfig, SimulationEngine};
pub use pitchguard_core as core;

#[cfg(test)]
mod tests;
