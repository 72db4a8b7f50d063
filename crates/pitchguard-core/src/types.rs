//! Fundamental identifier and simulation-time types.

use serde::{Deserialize, Serialize};

/// Identifier assigned to an enemy at spawn, in spawn order.
///
/// Spawn order doubles as the tie-break key for targeting: when two
/// enemies compare equal under a target mode, the lower id wins.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EnemyId(pub u32);

/// Identifier assigned to a tower at placement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TowerId(pub u32);

/// Identifier assigned to a projectile when fired.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ProjectileId(pub u32);

/// Simulation time tracking.
///
/// `elapsed_secs` accumulates scaled frame deltas, so it stays aligned
/// with spawn timers, cooldowns and path progress when the speed
/// multiplier changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed `advance` calls.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
