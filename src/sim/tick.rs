//! Per-frame simulation tick
//!
//! Core game loop step. The order below matters: the player moves before the
//! world, collisions are judged on the moved state, and scoring only runs while
//! the run is still alive.

use serde::{Deserialize, Serialize};

use super::collision;
use super::score;
use super::snapshot::Snapshot;
use super::state::GameSession;
use crate::consts::CEILING_Y;

/// Input sampled by the host once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Monotonic host clock in milliseconds
    pub now_ms: u64,
    /// Raw jump button state (held counts as pressed)
    pub jump_pressed: bool,
    /// Restart control activated this tick; ignored unless the run is over
    pub restart_requested: bool,
}

/// Advance the session by one tick and return what to draw
pub fn tick(session: &mut GameSession, input: &TickInput) -> Snapshot {
    if session.game_over && input.restart_requested {
        session.reset();
        return Snapshot::capture(session);
    }

    // Player
    session.player.apply_physics(session.flying);
    let flapped = !session.game_over && session.player.handle_jump_input(input.jump_pressed);
    session.player.animate(input.now_ms);

    // World
    session.advance_obstacles();
    session.scroll_ground();
    session.spawn_obstacles(input.now_ms);

    if !session.game_over {
        let hit = collision::check(
            &session.player,
            &session.obstacles,
            session.config.ground_y,
            CEILING_Y,
        );
        if let Some(hit) = hit {
            session.game_over = true;
            log::info!("Game over: hit {hit:?} with score {}", session.score);
        }
    }

    if !session.game_over {
        let passed = score::update(&session.player, &mut session.obstacles);
        if passed > 0 {
            session.score += passed;
            log::debug!("Score {} (+{passed})", session.score);
        }
    }

    if flapped && !session.flying && !session.game_over {
        session.flying = true;
        log::info!("Run started at t={}ms", input.now_ms);
    }

    Snapshot::capture(session)
}

impl GameSession {
    /// Advance one tick; see [`tick`]
    pub fn tick(&mut self, input: &TickInput) -> Snapshot {
        tick(self, input)
    }
}
