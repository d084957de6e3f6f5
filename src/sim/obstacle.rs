//! Obstacles and the pair spawner
//!
//! Obstacles come in Top/Bottom pairs that share one randomized vertical offset
//! and scroll left together until they leave the screen.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::config::GameConfig;

/// Which half of a gap pair an obstacle occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleRole {
    /// Hangs from above; its bottom edge is the top of the gap
    Top,
    /// Rises from below; its top edge is the bottom of the gap
    Bottom,
}

/// One obstacle segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub role: ObstacleRole,
    pub rect: Rect,
    /// Set once the player's center has moved past this obstacle's center
    pub passed: bool,
}

impl Obstacle {
    /// Build one half of a pair whose gap is centered on `gap_center_y`
    pub fn new(role: ObstacleRole, x: i32, gap_center_y: i32, config: &GameConfig) -> Self {
        let half_gap = config.half_gap();
        let height = config.screen_height;
        let y = match role {
            ObstacleRole::Top => gap_center_y - half_gap - height,
            // Measured from the Top edge so odd gaps keep their full height
            ObstacleRole::Bottom => gap_center_y - half_gap + config.gap,
        };
        Self {
            role,
            rect: Rect::new(x, y, config.obstacle_width, height),
            passed: false,
        }
    }

    /// Scroll left; frozen once the run is over
    pub fn advance(&mut self, scroll_speed: i32, is_game_over: bool) {
        if !is_game_over {
            self.rect.pos.x -= scroll_speed;
        }
    }

    /// Fully scrolled past the left edge of the screen
    pub fn is_expired(&self) -> bool {
        self.rect.right() < 0
    }
}

/// Result of a successful spawn
#[derive(Debug, Clone, PartialEq)]
pub struct Spawn {
    pub top: Obstacle,
    pub bottom: Obstacle,
    /// New value for the session's last-spawn timestamp
    pub spawned_at_ms: u64,
}

/// Decides when new pairs appear and where their gap sits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpawner {
    rng: Pcg32,
    interval_ms: u64,
    offset_range: i32,
}

impl ObstacleSpawner {
    pub fn new(rng: Pcg32, config: &GameConfig) -> Self {
        Self {
            rng,
            interval_ms: config.spawn_interval_ms,
            offset_range: config.offset_range.max(0),
        }
    }

    /// Whether the spawn interval has elapsed. No previous spawn counts as elapsed;
    /// a clock that went backwards does not.
    pub fn interval_elapsed(&self, now_ms: u64, last_spawn_ms: Option<u64>) -> bool {
        match last_spawn_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.interval_ms,
        }
    }

    /// Spawn a pair at the right edge if the run is live and the interval has elapsed
    pub fn maybe_spawn(
        &mut self,
        now_ms: u64,
        last_spawn_ms: Option<u64>,
        is_flying: bool,
        is_game_over: bool,
        config: &GameConfig,
    ) -> Option<Spawn> {
        if !is_flying || is_game_over || !self.interval_elapsed(now_ms, last_spawn_ms) {
            return None;
        }

        let offset = self.rng.random_range(-self.offset_range..=self.offset_range);
        let gap_center_y = config.screen_mid_y() + offset;
        let x = config.screen_width;

        log::debug!("Spawning obstacle pair at t={now_ms}ms, offset {offset}");

        Some(Spawn {
            top: Obstacle::new(ObstacleRole::Top, x, gap_center_y, config),
            bottom: Obstacle::new(ObstacleRole::Bottom, x, gap_center_y, config),
            spawned_at_ms: now_ms,
        })
    }
}
