//! Demo autopilot
//!
//! Plays the game from snapshots alone, like a host would. Flaps whenever the
//! player is falling and its bottom edge drops into a safety band above the
//! lower lip of the gap it is steering for.

use crate::config::GameConfig;
use crate::sim::{ObstacleRole, SessionStatus, Snapshot};

/// Pixels above the gap's lower lip where a falling player flaps
const FLAP_MARGIN: i32 = 24;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Button was down last tick; release it so the next press registers
    held: bool,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lower lip of the gap to steer for: the nearest Bottom obstacle not yet
    /// fully behind the player, else where a centered gap would sit.
    pub fn target_floor(snapshot: &Snapshot, config: &GameConfig) -> i32 {
        let player_left = snapshot.player.rect.left();
        snapshot
            .obstacles
            .iter()
            .filter(|o| o.role == ObstacleRole::Bottom && o.rect.right() >= player_left)
            .min_by_key(|o| o.rect.left())
            .map(|o| o.rect.top())
            .unwrap_or(config.screen_mid_y() + config.half_gap())
    }

    /// Jump button state for the next tick
    pub fn decide(&mut self, snapshot: &Snapshot, config: &GameConfig) -> bool {
        if self.held {
            self.held = false;
            return false;
        }

        let press = match snapshot.status {
            SessionStatus::Idle => true,
            SessionStatus::GameOver => false,
            SessionStatus::Flying => {
                let floor = Self::target_floor(snapshot, config);
                snapshot.player.velocity >= 0.0 && snapshot.player.rect.bottom() > floor - FLAP_MARGIN
            }
        };
        self.held = press;
        press
    }
}
