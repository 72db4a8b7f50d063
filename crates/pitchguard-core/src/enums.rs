//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Enemy kind: fixes max HP, kill reward, and the speed tier associated
/// with that HP bracket. Ordered by ascending strength.
///
/// An enemy's *spawn* kind never changes and determines its reward; its
/// current tier is re-derived from remaining HP after each hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    White,
    Red,
    Blue,
    Yellow,
    Green,
    Black,
    Pink,
    Cyan,
    Orange,
    Purple,
}

impl EnemyKind {
    /// All kinds in ascending-strength order; also the wave sequence.
    pub const SEQUENCE: [EnemyKind; 10] = [
        EnemyKind::White,
        EnemyKind::Red,
        EnemyKind::Blue,
        EnemyKind::Yellow,
        EnemyKind::Green,
        EnemyKind::Black,
        EnemyKind::Pink,
        EnemyKind::Cyan,
        EnemyKind::Orange,
        EnemyKind::Purple,
    ];

    /// Hit points this kind starts with.
    pub fn hp(self) -> u32 {
        match self {
            EnemyKind::White => 1,
            EnemyKind::Red => 2,
            EnemyKind::Blue => 3,
            EnemyKind::Yellow => 4,
            EnemyKind::Green => 5,
            EnemyKind::Black => 6,
            EnemyKind::Pink => 7,
            EnemyKind::Cyan => 8,
            EnemyKind::Orange => 9,
            EnemyKind::Purple => 10,
        }
    }

    /// Money credited when an enemy spawned as this kind is killed.
    pub fn reward(self) -> u32 {
        self.hp()
    }

    /// Speed multiplier applied to the base traversal rate.
    /// Stronger kinds are faster: 1.0 for White up to 1.9 for Purple.
    pub fn speed_factor(self) -> f64 {
        1.0 + 0.1 * (self.hp() - 1) as f64
    }

    /// Tier for a current HP value: the kind whose HP matches exactly,
    /// or the lowest tier when the HP falls between brackets (e.g. after
    /// fractional damage from an upgraded tower).
    pub fn from_hp(hp: f64) -> EnemyKind {
        Self::SEQUENCE
            .iter()
            .copied()
            .find(|kind| (kind.hp() as f64 - hp).abs() < 1e-9)
            .unwrap_or(EnemyKind::White)
    }
}

/// Tower kind. Behavior (range, cadence, delivery) is resolved from the
/// per-variant parameter table below rather than scattered comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Short range, slow, hits every in-range enemy at once.
    Goalkeeper,
    /// Medium range, slow, splash shells.
    Defender,
    /// Long range, fast, single target.
    Midfielder,
    /// Longest range, moderate cadence, single target.
    Forward,
}

impl TowerKind {
    /// Purchase cost.
    pub fn cost(self) -> u32 {
        match self {
            TowerKind::Goalkeeper => GOALKEEPER_COST,
            TowerKind::Defender => DEFENDER_COST,
            TowerKind::Midfielder => MIDFIELDER_COST,
            TowerKind::Forward => FORWARD_COST,
        }
    }

    /// Targeting radius before upgrades.
    pub fn base_range(self) -> f64 {
        match self {
            TowerKind::Goalkeeper => GOALKEEPER_RANGE,
            TowerKind::Defender => DEFENDER_RANGE,
            TowerKind::Midfielder => MIDFIELDER_RANGE,
            TowerKind::Forward => FORWARD_RANGE,
        }
    }

    /// Seconds between shots at 1x speed.
    pub fn fire_interval_secs(self) -> f64 {
        match self {
            TowerKind::Goalkeeper => GOALKEEPER_FIRE_INTERVAL_SECS,
            TowerKind::Defender => DEFENDER_FIRE_INTERVAL_SECS,
            TowerKind::Midfielder => MIDFIELDER_FIRE_INTERVAL_SECS,
            TowerKind::Forward => FORWARD_FIRE_INTERVAL_SECS,
        }
    }

    /// Damage before upgrades.
    pub fn base_damage(self) -> f64 {
        BASE_TOWER_DAMAGE
    }

    /// How this kind delivers damage.
    pub fn fire_style(self) -> FireStyle {
        match self {
            TowerKind::Goalkeeper => FireStyle::Burst,
            TowerKind::Defender => FireStyle::Splash {
                radius: DEFENDER_SPLASH_RADIUS,
            },
            TowerKind::Midfielder => FireStyle::Single,
            TowerKind::Forward => FireStyle::Single,
        }
    }
}

/// Damage delivery style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FireStyle {
    /// Homing shot that damages the original target only.
    Single,
    /// Homing shot that damages every enemy within `radius` of impact.
    Splash { radius: f64 },
    /// Instant application to every in-range enemy; no shot travels and
    /// the target mode is ignored.
    Burst,
}

/// Target selection policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMode {
    /// The enemy furthest along the path (largest t, closest to breach).
    #[default]
    First,
    /// The enemy least far along the path (smallest t).
    Last,
    /// The enemy with the most current HP.
    Strongest,
}

impl TargetMode {
    /// The next mode in the First -> Last -> Strongest cycle.
    pub fn cycled(self) -> TargetMode {
        match self {
            TargetMode::First => TargetMode::Last,
            TargetMode::Last => TargetMode::Strongest,
            TargetMode::Strongest => TargetMode::First,
        }
    }
}

/// Top-level simulation phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Running,
    /// Lives reached zero; the simulation no longer advances and all
    /// commands are rejected.
    GameOver,
}

/// Discrete simulation speed multiplier.
///
/// Applied identically to spawn timers, cooldown decay, path advance and
/// projectile flight; a change takes effect on the next `advance` and
/// only scales future accrual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedMultiplier {
    #[default]
    X1,
    X2,
    X4,
}

impl SpeedMultiplier {
    /// The scaling factor applied to frame deltas.
    pub fn factor(self) -> f64 {
        match self {
            SpeedMultiplier::X1 => 1.0,
            SpeedMultiplier::X2 => 2.0,
            SpeedMultiplier::X4 => 4.0,
        }
    }
}

/// How a dead enemy left the field; kept until end-of-frame purge so all
/// systems see a consistent alive/dead view within one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyFate {
    /// Killed by tower damage; reward was credited.
    Slain,
    /// Reached the end of the path; lives were debited.
    Breached,
}
