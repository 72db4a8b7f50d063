//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the ledger, applies
//! player commands, runs the frame pipeline, and produces
//! `GameSnapshot`s. The simulation is seedless and fully deterministic:
//! the same command script over the same frame deltas always yields the
//! same snapshots.
//!
//! Command policy: commands apply immediately between frames and return
//! typed results; `advance` is the only frame mutator. Events caused by
//! commands (e.g. upgrades) are buffered and drained by the next
//! `advance` call.

use glam::DVec2;
use hecs::World;

use pitchguard_core::components::TowerInfo;
use pitchguard_core::constants::{STARTING_LIVES, STARTING_MONEY};
use pitchguard_core::enums::{GamePhase, SpeedMultiplier, TargetMode, TowerKind};
use pitchguard_core::errors::{CommandError, UpgradeError};
use pitchguard_core::events::FrameEvent;
use pitchguard_core::path::Path;
use pitchguard_core::state::{GameSnapshot, GameState};
use pitchguard_core::types::{SimTime, TowerId};

use crate::placement;
use crate::systems;
use crate::systems::wave_spawner::WaveState;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct EngineConfig {
    /// The route enemies follow. Immutable for the session.
    pub path: Path,
    pub starting_money: u32,
    pub starting_lives: i32,
    pub speed: SpeedMultiplier,
    /// Disable for scripted scenarios that spawn their own enemies.
    pub waves_enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            path: Path::default_pitch(),
            starting_money: STARTING_MONEY,
            starting_lives: STARTING_LIVES,
            speed: SpeedMultiplier::default(),
            waves_enabled: true,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    path: Path,
    time: SimTime,
    state: GameState,
    speed: SpeedMultiplier,
    wave: WaveState,
    waves_enabled: bool,
    next_enemy_id: u32,
    next_tower_id: u32,
    next_projectile_id: u32,
    events: Vec<FrameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new simulation with the given config.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            world: World::new(),
            path: config.path,
            time: SimTime::default(),
            state: GameState::new(config.starting_money, config.starting_lives),
            speed: config.speed,
            wave: WaveState::default(),
            waves_enabled: config.waves_enabled,
            next_enemy_id: 0,
            next_tower_id: 0,
            next_projectile_id: 0,
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance the simulation by `dt` seconds of caller time and return
    /// everything observable that happened.
    ///
    /// A no-op returning no events once the game is over.
    pub fn advance(&mut self, dt: f64) -> Vec<FrameEvent> {
        if self.state.phase == GamePhase::GameOver {
            return Vec::new();
        }

        let scaled = dt * self.speed.factor();

        if self.waves_enabled {
            systems::wave_spawner::run(
                &mut self.world,
                &mut self.wave,
                &self.path,
                &mut self.next_enemy_id,
                scaled,
                &mut self.events,
            );
        }
        systems::movement::run(
            &mut self.world,
            &self.path,
            &mut self.state,
            scaled,
            &mut self.events,
        );
        systems::tower_combat::run(
            &mut self.world,
            &mut self.state,
            &mut self.next_projectile_id,
            scaled,
            &mut self.events,
        );
        systems::projectiles::run(&mut self.world, &mut self.state, scaled, &mut self.events);

        // The frame's debits are in; check for the terminal transition
        // before purging so the final events still carry entity ids.
        if self.state.lives <= 0 {
            self.state.phase = GamePhase::GameOver;
            self.events.push(FrameEvent::GameOver);
        }

        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        self.time.advance(scaled);

        std::mem::take(&mut self.events)
    }

    /// Validate and place a tower, debiting its cost.
    pub fn place_tower(
        &mut self,
        kind: TowerKind,
        position: DVec2,
    ) -> Result<TowerId, CommandError> {
        self.reject_if_terminal()?;
        placement::validate(&self.world, &self.path, &self.state, kind, position)?;

        self.state.money -= kind.cost();
        let id = world_setup::spawn_tower(&mut self.world, kind, position, &mut self.next_tower_id);
        Ok(id)
    }

    /// Purchase the next upgrade level for a tower. Returns the new
    /// level.
    pub fn upgrade_tower(&mut self, id: TowerId) -> Result<u8, CommandError> {
        self.reject_if_terminal()?;
        let entity = self
            .find_tower(id)
            .ok_or(CommandError::Upgrade(UpgradeError::UnknownTower))?;

        let mut info = self
            .world
            .get::<&mut TowerInfo>(entity)
            .map_err(|_| CommandError::Upgrade(UpgradeError::UnknownTower))?;

        let cost = info
            .upgrade_cost()
            .ok_or(CommandError::Upgrade(UpgradeError::MaxLevelReached))?;
        if self.state.money < cost {
            return Err(CommandError::Upgrade(UpgradeError::InsufficientFunds));
        }

        self.state.money -= cost;
        info.upgrade_level += 1;
        info.apply_upgrade_scaling();
        let level = info.upgrade_level;
        drop(info);

        self.events.push(FrameEvent::TowerUpgraded { tower: id, level });
        Ok(level)
    }

    /// Set a tower's targeting policy.
    pub fn set_target_mode(&mut self, id: TowerId, mode: TargetMode) -> Result<(), CommandError> {
        self.reject_if_terminal()?;
        let entity = self.find_tower(id).ok_or(CommandError::UnknownTower)?;
        let mut info = self
            .world
            .get::<&mut TowerInfo>(entity)
            .map_err(|_| CommandError::UnknownTower)?;
        info.target_mode = mode;
        Ok(())
    }

    /// Cycle a tower's targeting policy (First -> Last -> Strongest).
    /// Returns the new mode.
    pub fn cycle_target_mode(&mut self, id: TowerId) -> Result<TargetMode, CommandError> {
        self.reject_if_terminal()?;
        let entity = self.find_tower(id).ok_or(CommandError::UnknownTower)?;
        let mut info = self
            .world
            .get::<&mut TowerInfo>(entity)
            .map_err(|_| CommandError::UnknownTower)?;
        info.target_mode = info.target_mode.cycled();
        Ok(info.target_mode)
    }

    /// Change the simulation speed. Takes effect on the next `advance`;
    /// never rewinds already-accrued time.
    pub fn set_speed_multiplier(&mut self, speed: SpeedMultiplier) -> Result<(), CommandError> {
        self.reject_if_terminal()?;
        self.speed = speed;
        Ok(())
    }

    /// Read-only snapshot of the complete visible state.
    pub fn snapshot(&self) -> GameSnapshot {
        systems::snapshot::build(
            &self.world,
            self.time,
            &self.state,
            self.speed,
            self.wave.view(),
        )
    }

    /// Current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Current phase.
    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Current ledger.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> SpeedMultiplier {
        self.speed
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    fn reject_if_terminal(&self) -> Result<(), CommandError> {
        if self.state.phase == GamePhase::GameOver {
            Err(CommandError::Terminal)
        } else {
            Ok(())
        }
    }

    fn find_tower(&self, id: TowerId) -> Option<hecs::Entity> {
        self.world
            .query::<&TowerInfo>()
            .iter()
            .find(|(_, info)| info.id == id)
            .map(|(entity, _)| entity)
    }

    /// Spawn an enemy directly at the path start (for scripted tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: pitchguard_core::enums::EnemyKind,
    ) -> pitchguard_core::types::EnemyId {
        world_setup::spawn_enemy(&mut self.world, &self.path, kind, &mut self.next_enemy_id)
    }

    /// Spawn an enemy at a given path progress (for targeting tests).
    #[cfg(test)]
    pub fn spawn_test_enemy_at(
        &mut self,
        kind: pitchguard_core::enums::EnemyKind,
        progress: f64,
    ) -> pitchguard_core::types::EnemyId {
        use pitchguard_core::components::{EnemyInfo, PathFollower};

        let id = self.spawn_test_enemy(kind);
        for (_entity, (info, follower, pos)) in self
            .world
            .query_mut::<(&EnemyInfo, &mut PathFollower, &mut DVec2)>()
        {
            if info.id == id {
                follower.progress = progress;
                *pos = self.path.point_at(progress);
            }
        }
        id
    }
}
