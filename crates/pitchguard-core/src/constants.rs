//! Simulation constants and tuning parameters.

// --- Playfield ---

/// Playfield width in world units.
pub const FIELD_WIDTH: f64 = 800.0;

/// Playfield height in world units.
pub const FIELD_HEIGHT: f64 = 500.0;

// --- Ledger ---

/// Money the player starts with.
pub const STARTING_MONEY: u32 = 500;

/// Lives the player starts with.
pub const STARTING_LIVES: i32 = 20;

// --- Enemy kinematics ---

/// Path fraction traversed per second at speed factor 1.0.
/// A factor-1.0 enemy crosses the whole path in 30 seconds.
pub const BASE_TRAVERSAL_RATE: f64 = 1.0 / 30.0;

// --- Wave scheduling ---

/// Delay between consecutive enemies of the same kind (seconds).
pub const SPAWN_INTERVAL_SECS: f64 = 1.5;

/// Pause after finishing one kind before the next begins (seconds).
pub const WAVE_PAUSE_SECS: f64 = 3.0;

/// Enemies spawned of each kind before moving to the next.
pub const ENEMIES_PER_KIND: u32 = 10;

// --- Placement ---

/// Minimum center-to-center distance between two towers.
pub const TOWER_CLEARANCE: f64 = 40.0;

/// Minimum distance from a tower to any sampled path point.
pub const PATH_CORRIDOR_HALF_WIDTH: f64 = 20.0;

/// Number of points sampled along the path for the corridor check.
pub const PATH_SAMPLE_COUNT: usize = 100;

// --- Towers ---

/// Base damage shared by every tower kind.
pub const BASE_TOWER_DAMAGE: f64 = 1.0;

pub const GOALKEEPER_COST: u32 = 100;
pub const GOALKEEPER_RANGE: f64 = 80.0;
pub const GOALKEEPER_FIRE_INTERVAL_SECS: f64 = 1.8;

pub const DEFENDER_COST: u32 = 150;
pub const DEFENDER_RANGE: f64 = 130.0;
pub const DEFENDER_FIRE_INTERVAL_SECS: f64 = 1.8;

/// Splash radius of the Defender's shells.
pub const DEFENDER_SPLASH_RADIUS: f64 = 30.0;

pub const MIDFIELDER_COST: u32 = 200;
pub const MIDFIELDER_RANGE: f64 = 180.0;
pub const MIDFIELDER_FIRE_INTERVAL_SECS: f64 = 0.6;

pub const FORWARD_COST: u32 = 250;
pub const FORWARD_RANGE: f64 = 240.0;
pub const FORWARD_FIRE_INTERVAL_SECS: f64 = 0.9;

// --- Upgrades ---

/// Maximum upgrade level.
pub const MAX_UPGRADE_LEVEL: u8 = 3;

/// Cost of the first upgrade.
pub const UPGRADE_BASE_COST: u32 = 100;

/// Additional cost per already-purchased level.
pub const UPGRADE_COST_STEP: u32 = 50;

/// Damage gain per level, relative to base damage.
pub const UPGRADE_DAMAGE_STEP: f64 = 0.5;

/// Range gain per level, relative to base range.
pub const UPGRADE_RANGE_STEP: f64 = 0.15;

// --- Projectiles ---

/// Flight time of a homing shot, independent of distance (seconds).
/// Shot speed is proportional to the distance covered.
pub const PROJECTILE_FLIGHT_SECS: f64 = 0.3;
