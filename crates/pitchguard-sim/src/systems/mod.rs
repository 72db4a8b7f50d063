//! Systems run by the engine each frame, in pipeline order.
//!
//! Systems are free functions over `&mut World` plus whatever engine
//! state they need, passed explicitly; no system reaches into shared
//! ambient state.

pub mod cleanup;
pub mod damage;
pub mod movement;
pub mod projectiles;
pub mod snapshot;
pub mod targeting;
pub mod tower_combat;
pub mod wave_spawner;
