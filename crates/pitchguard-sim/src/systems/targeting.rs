//! Target surveying and selection.

use glam::DVec2;
use hecs::World;

use pitchguard_core::components::{EnemyInfo, PathFollower};
use pitchguard_core::enums::TargetMode;
use pitchguard_core::types::EnemyId;

/// A living enemy as seen by towers this frame.
#[derive(Debug, Clone, Copy)]
pub struct Sighting {
    pub entity: hecs::Entity,
    pub id: EnemyId,
    pub position: DVec2,
    pub progress: f64,
    pub hp: f64,
}

/// Collect every living enemy, ascending by id (spawn order).
///
/// The fixed ordering makes target-mode tie-breaks reproducible: when
/// two enemies compare equal, the first surveyed (earliest spawned)
/// wins.
pub fn survey(world: &World) -> Vec<Sighting> {
    let mut sightings: Vec<Sighting> = world
        .query::<(&EnemyInfo, &PathFollower, &DVec2)>()
        .iter()
        .filter(|(_, (info, _, _))| info.fate.is_none())
        .map(|(entity, (info, follower, pos))| Sighting {
            entity,
            id: info.id,
            position: *pos,
            progress: follower.progress,
            hp: info.hp,
        })
        .collect();

    sightings.sort_by_key(|s| s.id);
    sightings
}

/// Pick a target among `candidates` per the mode. Strict comparisons
/// keep the first candidate on ties.
pub fn select<'a>(mode: TargetMode, candidates: &'a [Sighting]) -> Option<&'a Sighting> {
    candidates.iter().reduce(|best, current| match mode {
        TargetMode::First => {
            if current.progress > best.progress {
                current
            } else {
                best
            }
        }
        TargetMode::Last => {
            if current.progress < best.progress {
                current
            } else {
                best
            }
        }
        TargetMode::Strongest => {
            if current.hp > best.hp {
                current
            } else {
                best
            }
        }
    })
}
