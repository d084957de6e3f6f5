//! Game tuning configuration
//!
//! Every constant the simulation reads lives here. Defaults match [`crate::consts`];
//! partial JSON files only override the fields they name.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file")]
    Io(#[from] std::io::Error),
    #[error("config is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable simulation constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub ground_y: i32,
    pub tick_rate: u32,

    // === Player ===
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_fall_velocity: f32,
    pub player_start_x: i32,
    pub player_width: i32,
    pub player_height: i32,
    pub animation_frames: u8,
    pub animation_interval_ms: u64,

    // === Scrolling ===
    pub scroll_speed: i32,
    pub ground_wrap_threshold: i32,

    // === Obstacles ===
    pub obstacle_width: i32,
    pub gap: i32,
    pub spawn_interval_ms: u64,
    pub offset_range: i32,

    // === UI ===
    pub restart_button_width: i32,
    pub restart_button_height: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_y: GROUND_Y,
            tick_rate: TICK_RATE,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            max_fall_velocity: MAX_FALL_VELOCITY,
            player_start_x: PLAYER_START_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            animation_frames: ANIMATION_FRAMES,
            animation_interval_ms: ANIMATION_INTERVAL_MS,

            scroll_speed: SCROLL_SPEED,
            ground_wrap_threshold: GROUND_WRAP_THRESHOLD,

            obstacle_width: OBSTACLE_WIDTH,
            gap: OBSTACLE_GAP,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            offset_range: OFFSET_RANGE,

            restart_button_width: RESTART_BUTTON_WIDTH,
            restart_button_height: RESTART_BUTTON_HEIGHT,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load a config file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Using default config ({}: {e})", path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), ConfigError> {
            Err(ConfigError::Invalid { field, reason })
        }

        if self.screen_width <= 0 {
            return invalid("screen_width", "must be positive");
        }
        if self.screen_height <= 0 {
            return invalid("screen_height", "must be positive");
        }
        if self.ground_y <= 0 || self.ground_y > self.screen_height {
            return invalid("ground_y", "must lie inside the screen");
        }
        if self.tick_rate == 0 {
            return invalid("tick_rate", "must be positive");
        }
        if self.player_width <= 0 || self.player_height <= 0 {
            return invalid("player_width", "player size must be positive");
        }
        if self.player_height >= self.ground_y {
            return invalid("player_height", "player must fit above the ground");
        }
        if self.max_fall_velocity <= 0.0 {
            return invalid("max_fall_velocity", "must be positive");
        }
        if self.animation_frames == 0 {
            return invalid("animation_frames", "need at least one frame");
        }
        if self.scroll_speed < 0 {
            return invalid("scroll_speed", "must not be negative");
        }
        if self.ground_wrap_threshold < 0 {
            return invalid("ground_wrap_threshold", "must not be negative");
        }
        if self.obstacle_width <= 0 {
            return invalid("obstacle_width", "must be positive");
        }
        if self.gap <= 0 || self.gap >= self.screen_height {
            return invalid("gap", "must be positive and smaller than the screen");
        }
        if self.offset_range < 0 {
            return invalid("offset_range", "must not be negative");
        }
        Ok(())
    }

    /// Nominal milliseconds between ticks
    pub fn frame_ms(&self) -> f64 {
        1000.0 / self.tick_rate as f64
    }

    /// Vertical midpoint obstacle pairs are offset around
    pub fn screen_mid_y(&self) -> i32 {
        self.screen_height / 2
    }

    pub fn half_gap(&self) -> i32 {
        self.gap / 2
    }
}
