//! ECS components for simulation entities.
//!
//! Components are plain data structs with no behavior beyond small
//! derivations; game logic lives in systems. Positions are stored as a
//! bare `glam::DVec2` component on enemies and towers.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{EnemyFate, EnemyKind, TargetMode, TowerKind};
use crate::types::{EnemyId, ProjectileId, TowerId};

/// Enemy identity and health.
///
/// `spawn_kind` is fixed for life and determines the kill reward and the
/// life debit ceiling; the current tier (color/speed) is derived from
/// `hp` via [`EnemyKind::from_hp`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyInfo {
    pub id: EnemyId,
    pub spawn_kind: EnemyKind,
    /// Remaining hit points; fractional after hits from upgraded towers.
    pub hp: f64,
    /// Set when the enemy dies; cleared entities are purged at frame end.
    pub fate: Option<EnemyFate>,
}

impl EnemyInfo {
    pub fn new(id: EnemyId, kind: EnemyKind) -> Self {
        Self {
            id,
            spawn_kind: kind,
            hp: kind.hp() as f64,
            fate: None,
        }
    }

    /// Current HP-derived tier.
    pub fn tier(&self) -> EnemyKind {
        EnemyKind::from_hp(self.hp)
    }
}

/// Progress along the path, `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PathFollower {
    pub progress: f64,
}

/// Tower identity, tuning and lifetime statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerInfo {
    pub id: TowerId,
    pub kind: TowerKind,
    /// Damage per hit at the current upgrade level.
    pub damage: f64,
    /// Targeting radius at the current upgrade level.
    pub range: f64,
    /// Seconds between shots at 1x speed.
    pub fire_interval_secs: f64,
    /// Scaled seconds until the tower may fire again.
    pub cooldown_secs: f64,
    pub target_mode: TargetMode,
    pub upgrade_level: u8,
    /// Damage dealt by non-killing hits.
    pub damage_dealt: f64,
    /// Sum of initial max HP of every enemy this tower killed.
    pub kills_by_hp: u32,
    /// Turret orientation toward the current target (radians), `None`
    /// when no enemy is in range.
    pub aim: Option<f64>,
}

impl TowerInfo {
    pub fn new(id: TowerId, kind: TowerKind) -> Self {
        Self {
            id,
            kind,
            damage: kind.base_damage(),
            range: kind.base_range(),
            fire_interval_secs: kind.fire_interval_secs(),
            cooldown_secs: 0.0,
            target_mode: TargetMode::default(),
            upgrade_level: 0,
            damage_dealt: 0.0,
            kills_by_hp: 0,
            aim: None,
        }
    }

    /// Cost of the next upgrade, or `None` at max level.
    pub fn upgrade_cost(&self) -> Option<u32> {
        if self.upgrade_level >= MAX_UPGRADE_LEVEL {
            None
        } else {
            Some(UPGRADE_BASE_COST + UPGRADE_COST_STEP * self.upgrade_level as u32)
        }
    }

    /// Recompute damage and range from base values for the current
    /// level: damage grows 50% of base per level (exact), range 15% of
    /// base per level (rounded to whole units).
    pub fn apply_upgrade_scaling(&mut self) {
        let level = self.upgrade_level as f64;
        self.damage = self.kind.base_damage() * (1.0 + UPGRADE_DAMAGE_STEP * level);
        self.range = (self.kind.base_range() * (1.0 + UPGRADE_RANGE_STEP * level)).round();
    }
}

/// A homing shot in flight.
///
/// The shot flies from `origin` to `target_point` (the target's position
/// at firing time) over a fixed flight time, so its speed is
/// proportional to the distance covered. Burst towers never create one
/// of these; they apply damage instantly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileInfo {
    pub id: ProjectileId,
    /// Tower that fired the shot, for statistics credit.
    pub source: TowerId,
    pub origin: DVec2,
    pub target_point: DVec2,
    pub damage: f64,
    /// Zero for single-target shots.
    pub splash_radius: f64,
    /// Scaled seconds until impact.
    pub remaining_secs: f64,
    pub flight_secs: f64,
    /// Set once resolved; purged at frame end.
    pub spent: bool,
}

impl ProjectileInfo {
    /// Interpolated position along the flight.
    pub fn position(&self) -> DVec2 {
        if self.flight_secs <= f64::EPSILON {
            return self.target_point;
        }
        let s = 1.0 - (self.remaining_secs / self.flight_secs).clamp(0.0, 1.0);
        self.origin.lerp(self.target_point, s)
    }
}
