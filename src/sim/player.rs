//! The player-controlled sprite
//!
//! Physics, jump input and animation are separate calls so each can be driven
//! (and tested) without the others.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;
use crate::consts::ROTATION_PER_VELOCITY;

/// The flapping player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity in pixels per tick (positive is down)
    pub velocity: f32,
    /// Jump button is being held; blocks repeat impulses until released
    pub clicked: bool,
    /// Current animation frame
    pub frame: u8,
    /// Timestamp of the last frame switch
    pub last_frame_ms: u64,
    // Copied from config so the entity can integrate on its own
    gravity: f32,
    jump_impulse: f32,
    max_fall_velocity: f32,
    ground_y: i32,
    frame_count: u8,
    frame_interval_ms: u64,
}

impl Player {
    /// Player centered at the configured start position
    pub fn new(config: &GameConfig) -> Self {
        let center = IVec2::new(config.player_start_x, config.screen_mid_y());
        Self {
            rect: Rect::from_center(center, IVec2::new(config.player_width, config.player_height)),
            velocity: 0.0,
            clicked: false,
            frame: 0,
            last_frame_ms: 0,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
            max_fall_velocity: config.max_fall_velocity,
            ground_y: config.ground_y,
            frame_count: config.animation_frames.max(1),
            frame_interval_ms: config.animation_interval_ms,
        }
    }

    /// Integrate gravity for one tick. Does nothing until the run has started.
    pub fn apply_physics(&mut self, is_flying: bool) {
        if !is_flying {
            return;
        }
        self.velocity = (self.velocity + self.gravity).min(self.max_fall_velocity);
        if self.rect.bottom() < self.ground_y {
            // Whole pixels only, truncated toward zero
            self.rect.pos.y += self.velocity as i32;
            let max_y = self.ground_y - self.rect.size.y;
            self.rect.pos.y = self.rect.pos.y.min(max_y);
        }
    }

    /// Feed the raw button state; returns true when a new press produced an impulse
    pub fn handle_jump_input(&mut self, pressed: bool) -> bool {
        if pressed && !self.clicked {
            self.clicked = true;
            self.velocity = self.jump_impulse;
            return true;
        }
        if !pressed {
            self.clicked = false;
        }
        false
    }

    /// Advance the animation frame when its interval has elapsed
    pub fn animate(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_frame_ms) > self.frame_interval_ms {
            self.frame = (self.frame + 1) % self.frame_count;
            self.last_frame_ms = now_ms;
        }
    }

    /// Sprite tilt in degrees (counter-clockwise positive). Not used for collision.
    pub fn rotation_degrees(&self) -> f32 {
        self.velocity * ROTATION_PER_VELOCITY
    }
}
