//! Placement validation for new towers.

use glam::DVec2;
use hecs::World;

use pitchguard_core::components::TowerInfo;
use pitchguard_core::constants::{
    FIELD_HEIGHT, FIELD_WIDTH, PATH_CORRIDOR_HALF_WIDTH, TOWER_CLEARANCE,
};
use pitchguard_core::enums::TowerKind;
use pitchguard_core::errors::PlacementError;
use pitchguard_core::path::Path;
use pitchguard_core::state::GameState;

/// Check whether a tower of `kind` may be placed at `position`.
///
/// Constraints are checked in a fixed order so the caller always learns
/// the same (first) violation for a given state: bounds, tower
/// clearance, path corridor, affordability.
pub fn validate(
    world: &World,
    path: &Path,
    state: &GameState,
    kind: TowerKind,
    position: DVec2,
) -> Result<(), PlacementError> {
    if position.x <= 0.0
        || position.x >= FIELD_WIDTH
        || position.y <= 0.0
        || position.y >= FIELD_HEIGHT
    {
        return Err(PlacementError::OutOfBounds);
    }

    for (_entity, (_info, tower_pos)) in world.query::<(&TowerInfo, &DVec2)>().iter() {
        if tower_pos.distance(position) < TOWER_CLEARANCE {
            return Err(PlacementError::OverlapsTower);
        }
    }

    if path.min_distance_to(position) < PATH_CORRIDOR_HALF_WIDTH {
        return Err(PlacementError::OverlapsPath);
    }

    if state.money < kind.cost() {
        return Err(PlacementError::InsufficientFunds);
    }

    Ok(())
}
