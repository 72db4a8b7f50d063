//! Tower scanning, aiming and firing.

use glam::DVec2;
use hecs::World;

use pitchguard_core::components::{ProjectileInfo, TowerInfo};
use pitchguard_core::constants::PROJECTILE_FLIGHT_SECS;
use pitchguard_core::enums::FireStyle;
use pitchguard_core::events::FrameEvent;
use pitchguard_core::state::GameState;
use pitchguard_core::types::{ProjectileId, TowerId};

use crate::shot::ShotLink;
use crate::systems::{damage, targeting};

/// A firing decision taken during the scan pass, applied afterwards
/// (the scan holds a mutable borrow of the tower storage).
enum FireAction {
    Burst {
        tower: hecs::Entity,
        tower_id: TowerId,
        damage: f64,
        targets: Vec<hecs::Entity>,
    },
    Shot {
        tower: hecs::Entity,
        tower_id: TowerId,
        origin: DVec2,
        target: hecs::Entity,
        target_point: DVec2,
        damage: f64,
        splash_radius: f64,
    },
}

/// Per frame: decay cooldowns, select targets, re-aim turrets, and fire
/// where the cooldown has elapsed.
///
/// Burst towers hit every in-range enemy at once and ignore the target
/// mode. Homing towers re-aim at their selected target even on frames
/// where the cooldown blocks firing; with nothing in range the turret
/// resets to neutral.
pub fn run(
    world: &mut World,
    state: &mut GameState,
    next_projectile_id: &mut u32,
    dt: f64,
    events: &mut Vec<FrameEvent>,
) {
    let sightings = targeting::survey(world);
    let mut actions = Vec::new();

    for (tower_entity, (info, pos)) in world.query_mut::<(&mut TowerInfo, &DVec2)>() {
        info.cooldown_secs = (info.cooldown_secs - dt).max(0.0);

        let in_range: Vec<targeting::Sighting> = sightings
            .iter()
            .filter(|s| s.position.distance(*pos) < info.range)
            .copied()
            .collect();

        if in_range.is_empty() {
            info.aim = None;
            continue;
        }

        let ready = info.cooldown_secs <= 0.0;
        match info.kind.fire_style() {
            FireStyle::Burst => {
                info.aim = None;
                if ready {
                    actions.push(FireAction::Burst {
                        tower: tower_entity,
                        tower_id: info.id,
                        damage: info.damage,
                        targets: in_range.iter().map(|s| s.entity).collect(),
                    });
                    info.cooldown_secs = info.fire_interval_secs;
                }
            }
            style => {
                let Some(target) = targeting::select(info.target_mode, &in_range) else {
                    info.aim = None;
                    continue;
                };
                info.aim = Some((target.position - *pos).to_angle());

                if ready {
                    let splash_radius = match style {
                        FireStyle::Splash { radius } => radius,
                        _ => 0.0,
                    };
                    actions.push(FireAction::Shot {
                        tower: tower_entity,
                        tower_id: info.id,
                        origin: *pos,
                        target: target.entity,
                        target_point: target.position,
                        damage: info.damage,
                        splash_radius,
                    });
                    info.cooldown_secs = info.fire_interval_secs;
                }
            }
        }
    }

    for action in actions {
        match action {
            FireAction::Burst {
                tower,
                tower_id,
                damage,
                targets,
            } => {
                events.push(FrameEvent::TowerFired { tower: tower_id });
                for target in targets {
                    damage::apply(world, target, damage, tower, state, events);
                }
            }
            FireAction::Shot {
                tower,
                tower_id,
                origin,
                target,
                target_point,
                damage,
                splash_radius,
            } => {
                events.push(FrameEvent::TowerFired { tower: tower_id });
                let id = ProjectileId(*next_projectile_id);
                *next_projectile_id += 1;
                world.spawn((
                    ProjectileInfo {
                        id,
                        source: tower_id,
                        origin,
                        target_point,
                        damage,
                        splash_radius,
                        remaining_secs: PROJECTILE_FLIGHT_SECS,
                        flight_secs: PROJECTILE_FLIGHT_SECS,
                        spent: false,
                    },
                    ShotLink {
                        source: tower,
                        target,
                    },
                ));
            }
        }
    }
}
