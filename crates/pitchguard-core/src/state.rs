//! Ledger state and the read-only snapshot sent to the presentation
//! layer.
//!
//! `GameState` is the single owned money/lives/phase struct passed by
//! reference into systems; no component reaches into an ambient
//! singleton. The view structs describe everything a renderer may draw;
//! all collections are id-sorted so repeated snapshots without an
//! intervening mutation are bit-identical.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, GamePhase, SpeedMultiplier, TargetMode, TowerKind};
use crate::types::{EnemyId, ProjectileId, SimTime, TowerId};

/// The player's ledger and the terminal flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub money: u32,
    pub lives: i32,
    pub phase: GamePhase,
}

impl GameState {
    pub fn new(money: u32, lives: i32) -> Self {
        Self {
            money,
            lives,
            phase: GamePhase::Running,
        }
    }
}

/// Complete visible state at a frame boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub speed: SpeedMultiplier,
    pub money: u32,
    pub lives: i32,
    pub wave: WaveView,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
}

/// Wave director progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveView {
    /// Kind currently being spawned.
    pub current_kind: EnemyKind,
    /// Index of that kind in the ascending-strength sequence.
    pub kind_index: usize,
    /// Enemies of the current kind spawned so far.
    pub spawned_in_kind: u32,
    /// Times the sequence has wrapped back to the first kind.
    pub loops_completed: u32,
}

/// A living enemy on the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    /// Current HP-derived tier (color/speed bracket).
    pub tier: EnemyKind,
    /// Kind fixed at spawn; determines the kill reward.
    pub spawn_kind: EnemyKind,
    pub position: DVec2,
    /// Normalized path progress, `0.0..=1.0`.
    pub progress: f64,
    pub hp: f64,
    pub max_hp: u32,
}

/// A placed tower.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub kind: TowerKind,
    pub position: DVec2,
    pub damage: f64,
    pub range: f64,
    pub fire_interval_secs: f64,
    pub cooldown_secs: f64,
    pub target_mode: TargetMode,
    pub upgrade_level: u8,
    /// Cost of the next upgrade; `None` at max level.
    pub upgrade_cost: Option<u32>,
    pub damage_dealt: f64,
    pub kills_by_hp: u32,
    /// Turret orientation (radians); `None` when idle.
    pub aim: Option<f64>,
}

/// A homing shot in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub source: TowerId,
    pub position: DVec2,
    pub target_point: DVec2,
    pub splash_radius: f64,
}
