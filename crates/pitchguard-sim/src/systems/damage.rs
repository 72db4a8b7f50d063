//! Shared damage application.
//!
//! Every delivery style (burst, single-target, splash) funnels through
//! `apply` so the kill/credit/tier rules live in exactly one place.

use hecs::World;

use pitchguard_core::components::{EnemyInfo, TowerInfo};
use pitchguard_core::enums::EnemyFate;
use pitchguard_core::events::FrameEvent;
use pitchguard_core::state::GameState;

/// Apply `amount` damage from `source` (a tower entity) to `target` (an
/// enemy entity).
///
/// On a kill: the enemy is marked slain, the economy is credited with
/// the reward of its *spawn* kind (tier changes never affect the
/// reward), and the tower's kill counter grows by the victim's initial
/// max HP. On a non-killing hit the tower's damage counter grows by
/// `amount`; the enemy's speed tier is re-derived from its new HP on its
/// next movement step.
///
/// Hits on enemies that are already dead (or despawned) this frame are
/// silently skipped.
pub fn apply(
    world: &mut World,
    target: hecs::Entity,
    amount: f64,
    source: hecs::Entity,
    state: &mut GameState,
    events: &mut Vec<FrameEvent>,
) {
    let (killed, enemy_id, spawn_kind) = {
        let Ok(mut info) = world.get::<&mut EnemyInfo>(target) else {
            return;
        };
        if info.fate.is_some() {
            return;
        }

        info.hp -= amount;
        let killed = info.hp <= 0.0;
        if killed {
            info.fate = Some(EnemyFate::Slain);
        }
        (killed, info.id, info.spawn_kind)
    };

    let Ok(mut tower) = world.get::<&mut TowerInfo>(source) else {
        return;
    };

    if killed {
        tower.kills_by_hp += spawn_kind.hp();
        let tower_id = tower.id;
        drop(tower);

        let reward = spawn_kind.reward();
        state.money += reward;
        events.push(FrameEvent::EnemyKilled {
            enemy: enemy_id,
            tower: tower_id,
            reward,
        });
    } else {
        tower.damage_dealt += amount;
    }
}
