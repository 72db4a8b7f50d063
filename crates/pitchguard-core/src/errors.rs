//! Error taxonomy for the command surface.
//!
//! Every failure is recoverable and reported to the caller as a typed
//! result; there is no retry logic inside the simulation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a tower placement request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum PlacementError {
    #[error("position is outside the playfield")]
    OutOfBounds,
    #[error("position is within the clearance radius of an existing tower")]
    OverlapsTower,
    #[error("position is inside the path corridor")]
    OverlapsPath,
    #[error("not enough money for this tower")]
    InsufficientFunds,
}

/// Reasons a tower upgrade request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum UpgradeError {
    #[error("tower is already at the maximum upgrade level")]
    MaxLevelReached,
    #[error("not enough money for this upgrade")]
    InsufficientFunds,
    #[error("no tower with that id exists")]
    UnknownTower,
}

/// Failure of any player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CommandError {
    /// The game is over; no command is accepted anymore.
    #[error("the game is over")]
    Terminal,
    /// A tower id referenced by a non-upgrade command does not exist.
    /// This is a caller bug, reported rather than ignored.
    #[error("no tower with that id exists")]
    UnknownTower,
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Upgrade(#[from] UpgradeError),
}
