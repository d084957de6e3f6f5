//! Render-facing view of a session
//!
//! Hosts draw from a [`Snapshot`] and never touch simulation state directly.

use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleRole;
use super::rect::Rect;
use super::state::{GameSession, SessionStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub velocity: f32,
    /// Sprite tilt in degrees
    pub rotation: f32,
    pub frame: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub role: ObstacleRole,
    pub rect: Rect,
    pub passed: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub status: SessionStatus,
    pub player: PlayerView,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub ground_scroll: i32,
}

impl Snapshot {
    pub fn capture(session: &GameSession) -> Self {
        let player = &session.player;
        Self {
            status: session.status(),
            player: PlayerView {
                rect: player.rect,
                velocity: player.velocity,
                rotation: player.rotation_degrees(),
                frame: player.frame,
            },
            obstacles: session
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    role: o.role,
                    rect: o.rect,
                    passed: o.passed,
                })
                .collect(),
            score: session.score,
            ground_scroll: session.ground_scroll,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
