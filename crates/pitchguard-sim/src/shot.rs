//! Sim-side projectile linkage.
//!
//! Core components carry only serializable ids; the entity handles a
//! shot needs at resolution time live here, next to the ECS runtime.

/// Links a projectile entity to the tower that fired it and, for
/// single-target shots, to the enemy it was aimed at.
#[derive(Debug, Clone, Copy)]
pub struct ShotLink {
    /// The firing tower's entity (credited with statistics on impact).
    pub source: hecs::Entity,
    /// The aimed-at enemy. Splash shots resolve at the recorded impact
    /// point instead and ignore this after launch.
    pub target: hecs::Entity,
}
