//! Events emitted by the simulation, drained by each `advance` call.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyKind;
use crate::types::{EnemyId, TowerId};

/// Everything observable that happened during one frame (plus buffered
/// command effects such as upgrades applied between frames).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FrameEvent {
    /// The wave director released a new enemy onto the path.
    EnemySpawned { enemy: EnemyId, kind: EnemyKind },
    /// An enemy was destroyed by tower damage.
    EnemyKilled {
        enemy: EnemyId,
        tower: TowerId,
        reward: u32,
    },
    /// An enemy reached the end of the path; lives were debited by its
    /// remaining strength. No reward is granted.
    EnemyBreached { enemy: EnemyId, lives_lost: i32 },
    /// A tower fired (a homing shot or an instant burst).
    TowerFired { tower: TowerId },
    /// A tower upgrade was purchased.
    TowerUpgraded { tower: TowerId, level: u8 },
    /// Lives reached zero; the simulation is now terminal.
    GameOver,
}
