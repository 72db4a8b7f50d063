//! Projectile flight and impact resolution.

use glam::DVec2;
use hecs::World;

use pitchguard_core::components::{EnemyInfo, ProjectileInfo};
use pitchguard_core::events::FrameEvent;
use pitchguard_core::state::GameState;

use crate::shot::ShotLink;
use crate::systems::damage;

/// Advance every shot; resolve those whose flight time elapsed.
///
/// Splash shots detonate at the recorded impact point and damage every
/// living enemy within the radius; a shot whose target died in flight
/// still completes and detonates. Single-target shots only hit their
/// original target, and the hit is skipped when that target is no
/// longer alive.
pub fn run(world: &mut World, state: &mut GameState, dt: f64, events: &mut Vec<FrameEvent>) {
    let mut resolved = Vec::new();

    for (_entity, (info, link)) in world.query_mut::<(&mut ProjectileInfo, &ShotLink)>() {
        if info.spent {
            continue;
        }
        info.remaining_secs -= dt;
        if info.remaining_secs <= 0.0 {
            info.spent = true;
            resolved.push((info.clone(), *link));
        }
    }

    for (info, link) in resolved {
        if info.splash_radius > 0.0 {
            let victims = enemies_within(world, info.target_point, info.splash_radius);
            for victim in victims {
                damage::apply(world, victim, info.damage, link.source, state, events);
            }
        } else {
            // apply() skips targets that died (or despawned) in flight.
            damage::apply(world, link.target, info.damage, link.source, state, events);
        }
    }
}

/// Living enemies within `radius` of `center`, in spawn order.
fn enemies_within(world: &World, center: DVec2, radius: f64) -> Vec<hecs::Entity> {
    let mut hits: Vec<(pitchguard_core::types::EnemyId, hecs::Entity)> = world
        .query::<(&EnemyInfo, &DVec2)>()
        .iter()
        .filter(|(_, (info, pos))| info.fate.is_none() && pos.distance(center) < radius)
        .map(|(entity, (info, _))| (info.id, entity))
        .collect();

    hits.sort_by_key(|(id, _)| *id);
    hits.into_iter().map(|(_, entity)| entity).collect()
}
