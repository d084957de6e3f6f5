//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, constants tuned per tick
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod rect;
pub mod score;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Collision, check as check_collision, collides};
pub use obstacle::{Obstacle, ObstacleRole, ObstacleSpawner, Spawn};
pub use player::Player;
pub use rect::Rect;
pub use snapshot::{ObstacleView, PlayerView, Snapshot};
pub use state::{GameSession, SessionStatus};
pub use tick::{TickInput, tick};
