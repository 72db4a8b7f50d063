//! Enemy path-following system.

use glam::DVec2;
use hecs::World;

use pitchguard_core::components::{EnemyInfo, PathFollower};
use pitchguard_core::constants::BASE_TRAVERSAL_RATE;
use pitchguard_core::enums::{EnemyFate, EnemyKind};
use pitchguard_core::events::FrameEvent;
use pitchguard_core::path::Path;
use pitchguard_core::state::GameState;

/// Advance every living enemy along the path by its tier speed.
///
/// Progress clamps to 1.0; reaching it marks the enemy as breached and
/// debits lives by its *remaining* HP, rounded up when fractional. The
/// penalty reflects strength at the breach, and no reward is granted.
pub fn run(
    world: &mut World,
    path: &Path,
    state: &mut GameState,
    dt: f64,
    events: &mut Vec<FrameEvent>,
) {
    let mut breaches = Vec::new();

    for (_entity, (info, follower, pos)) in
        world.query_mut::<(&mut EnemyInfo, &mut PathFollower, &mut DVec2)>()
    {
        if info.fate.is_some() {
            continue;
        }

        let factor = EnemyKind::from_hp(info.hp).speed_factor();
        follower.progress = (follower.progress + BASE_TRAVERSAL_RATE * factor * dt).min(1.0);
        *pos = path.point_at(follower.progress);

        if follower.progress >= 1.0 {
            info.fate = Some(EnemyFate::Breached);
            breaches.push((info.id, info.hp.ceil() as i32));
        }
    }

    for (id, lives_lost) in breaches {
        state.lives -= lives_lost;
        events.push(FrameEvent::EnemyBreached {
            enemy: id,
            lives_lost,
        });
    }
}
