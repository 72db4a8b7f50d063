//! Snapshot system: queries the ECS world and builds a complete
//! `GameSnapshot`.
//!
//! Read-only: it never modifies the world. All collections are sorted
//! by id so two snapshots taken without an intervening mutation are
//! bit-identical.

use glam::DVec2;
use hecs::World;

use pitchguard_core::components::{EnemyInfo, PathFollower, ProjectileInfo, TowerInfo};
use pitchguard_core::enums::SpeedMultiplier;
use pitchguard_core::state::{
    EnemyView, GameSnapshot, GameState, ProjectileView, TowerView, WaveView,
};
use pitchguard_core::types::SimTime;

/// Build a complete snapshot from the current world state.
pub fn build(
    world: &World,
    time: SimTime,
    state: &GameState,
    speed: SpeedMultiplier,
    wave: WaveView,
) -> GameSnapshot {
    GameSnapshot {
        time,
        phase: state.phase,
        speed,
        money: state.money,
        lives: state.lives,
        wave,
        enemies: build_enemies(world),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&EnemyInfo, &PathFollower, &DVec2)>()
        .iter()
        .filter(|(_, (info, _, _))| info.fate.is_none())
        .map(|(_, (info, follower, pos))| EnemyView {
            id: info.id,
            tier: info.tier(),
            spawn_kind: info.spawn_kind,
            position: *pos,
            progress: follower.progress,
            hp: info.hp,
            max_hp: info.spawn_kind.hp(),
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&TowerInfo, &DVec2)>()
        .iter()
        .map(|(_, (info, pos))| TowerView {
            id: info.id,
            kind: info.kind,
            position: *pos,
            damage: info.damage,
            range: info.range,
            fire_interval_secs: info.fire_interval_secs,
            cooldown_secs: info.cooldown_secs,
            target_mode: info.target_mode,
            upgrade_level: info.upgrade_level,
            upgrade_cost: info.upgrade_cost(),
            damage_dealt: info.damage_dealt,
            kills_by_hp: info.kills_by_hp,
            aim: info.aim,
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<&ProjectileInfo>()
        .iter()
        .filter(|(_, info)| !info.spent)
        .map(|(_, info)| ProjectileView {
            id: info.id,
            source: info.source,
            position: info.position(),
            target_point: info.target_point,
            splash_radius: info.splash_radius,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
