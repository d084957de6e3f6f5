//! Flappy Core - simulation core for a side-scrolling flap-through-the-gaps game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `config`: Data-driven tuning constants, loadable from JSON
//! - `ui`: Host-side helpers (restart button hit-test, score label)
//! - `autopilot`: Demo controller that plays the game from snapshots

pub mod autopilot;
pub mod config;
pub mod sim;
pub mod ui;

pub use autopilot::Autopilot;
pub use config::{ConfigError, GameConfig};
pub use sim::{GameSession, SessionStatus, Snapshot, TickInput};

/// Game configuration constants (defaults for [`GameConfig`])
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: i32 = 836;
    pub const SCREEN_HEIGHT: i32 = 660;
    /// Top edge of the ground strip; the player dies touching it
    pub const GROUND_Y: i32 = 588;
    /// Top of the playfield; flying above it ends the run
    pub const CEILING_Y: i32 = 0;

    /// Ticks per second the per-tick constants below are tuned for
    pub const TICK_RATE: u32 = 80;

    /// Player physics (per tick)
    pub const GRAVITY: f32 = 0.5;
    pub const JUMP_IMPULSE: f32 = -10.0;
    pub const MAX_FALL_VELOCITY: f32 = 8.0;

    /// Player sprite
    pub const PLAYER_START_X: i32 = 100;
    pub const PLAYER_WIDTH: i32 = 34;
    pub const PLAYER_HEIGHT: i32 = 24;
    pub const ANIMATION_FRAMES: u8 = 3;
    pub const ANIMATION_INTERVAL_MS: u64 = 100;
    /// Degrees of sprite tilt per unit of velocity
    pub const ROTATION_PER_VELOCITY: f32 = -2.0;

    /// World scroll (pixels per tick)
    pub const SCROLL_SPEED: i32 = 5;
    pub const GROUND_WRAP_THRESHOLD: i32 = 35;

    /// Obstacles
    pub const OBSTACLE_WIDTH: i32 = 70;
    pub const OBSTACLE_GAP: i32 = 140;
    pub const SPAWN_INTERVAL_MS: u64 = 1500;
    pub const OFFSET_RANGE: i32 = 100;

    /// Restart button sprite
    pub const RESTART_BUTTON_WIDTH: i32 = 120;
    pub const RESTART_BUTTON_HEIGHT: i32 = 42;
}
