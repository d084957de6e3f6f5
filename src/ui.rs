//! Host-side UI helpers
//!
//! Placement and hit-testing for the overlay elements, so every host draws and
//! reacts to them the same way.

use glam::IVec2;

use crate::config::GameConfig;
use crate::sim::{Rect, SessionStatus};

/// Restart button shown on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartButton {
    pub rect: Rect,
}

impl RestartButton {
    /// Button placed just below the screen center
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                config.screen_width / 2 - 50,
                config.screen_height / 2 + 50,
                config.restart_button_width,
                config.restart_button_height,
            ),
        }
    }

    /// Pointer is over the button with the primary button down
    pub fn is_activated(&self, pointer: IVec2, pressed: bool) -> bool {
        pressed && self.rect.contains_point(pointer)
    }

    /// Value for `TickInput::restart_requested`; only the game-over screen shows the button
    pub fn restart_requested(&self, status: SessionStatus, pointer: IVec2, pressed: bool) -> bool {
        status == SessionStatus::GameOver && self.is_activated(pointer, pressed)
    }
}

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}
