//! Session state
//!
//! Everything a run needs lives in [`GameSession`]; there is no global state.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleSpawner};
use super::player::Player;
use crate::config::GameConfig;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Waiting for the first flap; no gravity, no obstacles
    Idle,
    /// Active run
    Flying,
    /// Run ended; waits for a restart
    GameOver,
}

/// Complete game session (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub config: GameConfig,
    /// Seed the obstacle RNG restarts from on every reset
    pub seed: u64,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: ObstacleSpawner,
    pub score: u32,
    pub flying: bool,
    pub game_over: bool,
    /// Horizontal ground offset, wraps back to 0
    pub ground_scroll: i32,
    /// Timestamp of the last pair spawned this run
    pub last_spawn_ms: Option<u64>,
}

impl GameSession {
    /// Create a new session with the given config and obstacle seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        log::info!("New session (seed {seed})");
        Self::fresh(config, seed)
    }

    fn fresh(config: GameConfig, seed: u64) -> Self {
        Self {
            player: Player::new(&config),
            obstacles: Vec::new(),
            spawner: ObstacleSpawner::new(Pcg32::seed_from_u64(seed), &config),
            score: 0,
            flying: false,
            game_over: false,
            ground_scroll: 0,
            last_spawn_ms: None,
            seed,
            config,
        }
    }

    /// Return to the exact state of a freshly constructed session.
    ///
    /// The obstacle RNG restarts from `seed`, so every run after a reset sees the
    /// same obstacle layout. Hosts that want a different layout per run should
    /// build a new session with a new seed instead.
    pub fn reset(&mut self) {
        log::info!("Session reset (previous score {})", self.score);
        let config = std::mem::take(&mut self.config);
        *self = Self::fresh(config, self.seed);
    }

    pub fn status(&self) -> SessionStatus {
        if self.game_over {
            SessionStatus::GameOver
        } else if self.flying {
            SessionStatus::Flying
        } else {
            SessionStatus::Idle
        }
    }

    /// Scroll the ground strip unless the run is over
    pub fn scroll_ground(&mut self) {
        if !self.game_over {
            self.ground_scroll -= self.config.scroll_speed;
        }
        if self.ground_scroll.abs() > self.config.ground_wrap_threshold {
            self.ground_scroll = 0;
        }
    }

    /// Advance every obstacle, then drop the ones that left the screen
    pub fn advance_obstacles(&mut self) {
        let speed = self.config.scroll_speed;
        let game_over = self.game_over;
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed, game_over);
        }
        self.obstacles.retain(|o| !o.is_expired());
    }

    /// Spawn a pair if the spawner allows it
    pub fn spawn_obstacles(&mut self, now_ms: u64) {
        if let Some(spawn) = self.spawner.maybe_spawn(
            now_ms,
            self.last_spawn_ms,
            self.flying,
            self.game_over,
            &self.config,
        ) {
            self.obstacles.push(spawn.top);
            self.obstacles.push(spawn.bottom);
            self.last_spawn_ms = Some(spawn.spawned_at_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = GameSession::new(GameConfig::default(), 1);
        assert_eq!(session.status(), SessionStatus::Idle);
        assert_eq!(session.score, 0);
        assert!(session.obstacles.is_empty());
        assert_eq!(session.last_spawn_ms, None);
    }

    #[test]
    fn test_status_prefers_game_over() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        session.flying = true;
        assert_eq!(session.status(), SessionStatus::Flying);
        session.game_over = true;
        assert_eq!(session.status(), SessionStatus::GameOver);
    }

    #[test]
    fn test_ground_scroll_wraps() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        let mut seen = Vec::new();
        for _ in 0..9 {
            session.scroll_ground();
            seen.push(session.ground_scroll);
        }
        assert_eq!(seen, vec![-5, -10, -15, -20, -25, -30, -35, 0, -5]);
    }

    #[test]
    fn test_ground_scroll_freezes_on_game_over() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        session.scroll_ground();
        session.game_over = true;
        session.scroll_ground();
        assert_eq!(session.ground_scroll, -5);
    }

    #[test]
    fn test_expired_obstacles_removed_after_advance() {
        let mut session = GameSession::new(GameConfig::default(), 1);
        session.flying = true;
        session.spawn_obstacles(0);
        assert_eq!(session.obstacles.len(), 2);
        for o in &mut session.obstacles {
            o.rect.pos.x = -63;
        }
        session.advance_obstacles();
        assert_eq!(session.obstacles.len(), 2);
        session.advance_obstacles();
        assert!(session.obstacles.is_empty());
    }

    #[test]
    fn test_bad_offset_range_does_not_panic_on_spawn() {
        let config = GameConfig {
            offset_range: -5,
            ..Default::default()
        };
        let mut session = GameSession::new(config, 1);
        session.flying = true;
        session.spawn_obstacles(0);
        assert_eq!(session.obstacles.len(), 2);
    }

    #[test]
    fn test_reset_matches_fresh_session() {
        let mut session = GameSession::new(GameConfig::default(), 42);
        session.flying = true;
        session.spawn_obstacles(10);
        session.score = 6;
        session.game_over = true;
        session.ground_scroll = -20;
        session.player.velocity = 8.0;
        session.player.rect.pos.y = 564;
        session.player.frame = 2;

        session.reset();
        assert_eq!(session, GameSession::new(GameConfig::default(), 42));
    }
}
