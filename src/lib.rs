//! Spaceship Shooter - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (target, projectile, collision, scoring)
//! - `platform`: Browser/native platform abstraction (time, input, storage)
//! - `best_time`: Fastest-run record kept in a key/value store
//! - `game`: Driver tying the simulation to a clock, input and storage
//! - `settings`: Data-driven game rules

pub mod best_time;
pub mod error;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;

pub use best_time::{BestTimes, RecordOutcome};
pub use error::StorageError;
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Hits needed to win a round
    pub const WIN_SCORE: u32 = 5;

    /// Milliseconds per loop time unit (all speeds are pixels per unit)
    pub const LOOP_TIME_UNIT_MS: f64 = 100.0;
    /// Largest frame delta fed to motion (tab-suspend guard)
    pub const MAX_FRAME_DELTA_MS: f64 = 250.0;

    /// Playfield fallbacks for zero or degenerate dimensions
    pub const PLAYFIELD_FALLBACK_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_FALLBACK_HEIGHT: f32 = 400.0;

    /// Player marker defaults (sits at the bottom centre of the playfield)
    pub const PLAYER_WIDTH: f32 = 48.0;
    pub const PLAYER_HEIGHT: f32 = 48.0;
    pub const PLAYER_BOTTOM_MARGIN: f32 = 16.0;

    /// Target defaults
    pub const TARGET_WIDTH: f32 = 60.0;
    pub const TARGET_HEIGHT: f32 = 40.0;
    /// Base speed (pixels per loop unit)
    pub const TARGET_SPEED: f32 = 120.0;
    /// Per-round speed factor band
    pub const TARGET_SPEED_MIN_FACTOR: f32 = 0.8;
    pub const TARGET_SPEED_MAX_FACTOR: f32 = 1.6;
    /// Smallest left offset when centring the target
    pub const TARGET_MIN_OFFSET: f32 = 20.0;
    /// Vertical band for the target, as percent of playfield height
    pub const TARGET_BAND_TOP_PCT: f32 = 8.0;
    pub const TARGET_BAND_BOTTOM_PCT: f32 = 36.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 6.0;
    pub const PROJECTILE_HEIGHT: f32 = 16.0;
    /// Upward speed (pixels per loop unit)
    pub const PROJECTILE_SPEED: f32 = 200.0;
    /// Spawn gap above the player marker
    pub const PROJECTILE_SPAWN_OFFSET: f32 = 8.0;
    /// A projectile whose top passes this far above the playfield is a miss
    pub const PROJECTILE_EXIT_MARGIN: f32 = 50.0;

    /// Hit flash visibility
    pub const BLAST_DURATION_MS: f64 = 100.0;
    /// Win panel countdown before the round restarts
    pub const RELOAD_COUNTDOWN_SECS: u32 = 5;
    pub const COUNTDOWN_PERIOD_MS: f64 = 1000.0;
}

/// Round a duration in seconds to centiseconds
#[inline]
pub fn round_centis(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}
