//! End-of-frame purge of dead enemies and spent projectiles.
//!
//! Entities are only marked during the frame so every system sees a
//! consistent alive/dead view; the single removal pass happens here.
//! Uses a pre-allocated buffer to avoid per-frame allocation.

use hecs::{Entity, World};

use pitchguard_core::components::{EnemyInfo, ProjectileInfo};

pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, info) in world.query_mut::<&EnemyInfo>() {
        if info.fate.is_some() {
            despawn_buffer.push(entity);
        }
    }

    for (entity, info) in world.query_mut::<&ProjectileInfo>() {
        if info.spent {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
