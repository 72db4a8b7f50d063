//! Wave director: releases enemies onto the path on a spawn timer,
//! cycling through the kind sequence in ascending-strength order.

use hecs::World;

use pitchguard_core::constants::{ENEMIES_PER_KIND, SPAWN_INTERVAL_SECS, WAVE_PAUSE_SECS};
use pitchguard_core::enums::EnemyKind;
use pitchguard_core::events::FrameEvent;
use pitchguard_core::path::Path;
use pitchguard_core::state::WaveView;

use crate::world_setup;

/// Spawn schedule state.
///
/// After `ENEMIES_PER_KIND` enemies of one kind the director pauses for
/// the longer wave delay, then moves to the next kind; after the last
/// kind it wraps to the first and the cycle repeats identically
/// (`loops_completed` records the wraps).
#[derive(Debug, Clone)]
pub struct WaveState {
    pub kind_index: usize,
    pub spawned_in_kind: u32,
    /// Scaled seconds until the next spawn; zero or negative means due.
    pub until_next_spawn: f64,
    pub loops_completed: u32,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            kind_index: 0,
            spawned_in_kind: 0,
            // First enemy appears on the first frame.
            until_next_spawn: 0.0,
            loops_completed: 0,
        }
    }
}

impl WaveState {
    /// Kind currently being spawned.
    pub fn current_kind(&self) -> EnemyKind {
        EnemyKind::SEQUENCE[self.kind_index]
    }

    pub fn view(&self) -> WaveView {
        WaveView {
            current_kind: self.current_kind(),
            kind_index: self.kind_index,
            spawned_in_kind: self.spawned_in_kind,
            loops_completed: self.loops_completed,
        }
    }
}

/// Advance the spawn timer by the scaled frame delta and release every
/// enemy that came due (a large delta may release several).
pub fn run(
    world: &mut World,
    wave: &mut WaveState,
    path: &Path,
    next_enemy_id: &mut u32,
    dt: f64,
    events: &mut Vec<FrameEvent>,
) {
    wave.until_next_spawn -= dt;

    while wave.until_next_spawn < 0.0 {
        let kind = wave.current_kind();
        let id = world_setup::spawn_enemy(world, path, kind, next_enemy_id);
        events.push(FrameEvent::EnemySpawned { enemy: id, kind });

        wave.spawned_in_kind += 1;
        if wave.spawned_in_kind >= ENEMIES_PER_KIND {
            wave.spawned_in_kind = 0;
            wave.kind_index = (wave.kind_index + 1) % EnemyKind::SEQUENCE.len();
            if wave.kind_index == 0 {
                wave.loops_completed += 1;
            }
            wave.until_next_spawn += WAVE_PAUSE_SECS;
        } else {
            wave.until_next_spawn += SPAWN_INTERVAL_SECS;
        }
    }
}
