//! Boss Battle - a single-screen platform brawler
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `render`: Canvas 2D presentation layer
//! - `assets`: Sprite/background/music loading
//! - `audio`: Background music playback
//! - `settings`: Persisted preferences (difficulty, volume)
//! - `highscores`: LocalStorage leaderboard

pub mod highscores;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod render;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep. The physics constants below are tuned in
    /// per-tick units, so the tick rate is pinned at 60 Hz rather than
    /// scaled by measured frame time.
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;
    /// Top of the ground strip
    pub const GROUND_Y: f32 = 550.0;

    /// Physics (per tick / per tick²)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_STRENGTH: f32 = -10.0;
    pub const DOUBLE_JUMP_STRENGTH: f32 = -8.0;
    pub const MOVE_SPEED: f32 = 5.0;
    pub const ACCELERATION: f32 = 0.2;
    pub const MAX_SPEED: f32 = 10.0;
    /// Ticks after a landing before the next primary jump is allowed
    pub const LANDING_TIME: u32 = 30;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 25.0;

    /// Boss defaults
    pub const BOSS_START_X: f32 = 600.0;
    pub const BOSS_SIZE: f32 = 100.0;
    /// Bounce applied to the boss after it stomps the player
    pub const BOSS_JUMP_STRENGTH: f32 = -15.0;

    /// Combat
    pub const MAX_HEALTH: u32 = 100;
    pub const STOMP_DAMAGE: u32 = 10;
    pub const STOMP_SCORE: u64 = 10;

    /// Health gauges
    pub const GAUGE_WIDTH: f32 = 200.0;
    pub const GAUGE_HEIGHT: f32 = 20.0;
    pub const GAUGE_BORDER: f32 = 2.0;
    /// How fast the display gauge drains toward true health, per tick
    pub const GAUGE_ANIMATION_SPEED: u32 = 5;
}
