//! Entity spawn factories.

use glam::DVec2;
use hecs::World;

use pitchguard_core::components::{EnemyInfo, PathFollower, TowerInfo};
use pitchguard_core::enums::{EnemyKind, TowerKind};
use pitchguard_core::path::Path;
use pitchguard_core::types::{EnemyId, TowerId};

/// Spawn an enemy of `kind` at the start of the path.
pub fn spawn_enemy(
    world: &mut World,
    path: &Path,
    kind: EnemyKind,
    next_id: &mut u32,
) -> EnemyId {
    let id = EnemyId(*next_id);
    *next_id += 1;

    world.spawn((
        EnemyInfo::new(id, kind),
        PathFollower::default(),
        path.start(),
    ));
    id
}

/// Spawn a tower of `kind` at `position`. Placement validation is the
/// caller's responsibility.
pub fn spawn_tower(
    world: &mut World,
    kind: TowerKind,
    position: DVec2,
    next_id: &mut u32,
) -> TowerId {
    let id = TowerId(*next_id);
    *next_id += 1;

    world.spawn((TowerInfo::new(id, kind), position));
    id
}
