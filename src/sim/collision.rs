//! Collision detection
//!
//! The player dies on touching any obstacle, flying above the top of the screen,
//! or reaching the ground.

use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::player::Player;

/// What the player hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Obstacle,
    Ceiling,
    Ground,
}

/// Check the player against every live obstacle and the screen bounds.
///
/// Obstacles are tested first, so a player clipping an obstacle while also
/// touching the ground reports `Obstacle`.
pub fn check(player: &Player, obstacles: &[Obstacle], ground_y: i32, ceiling_y: i32) -> Option<Collision> {
    let rect = &player.rect;
    if obstacles.iter().any(|o| rect.intersects(&o.rect)) {
        Some(Collision::Obstacle)
    } else if rect.top() < ceiling_y {
        Some(Collision::Ceiling)
    } else if rect.bottom() >= ground_y {
        Some(Collision::Ground)
    } else {
        None
    }
}

/// Boolean form of [`check`]
#[inline]
pub fn collides(player: &Player, obstacles: &[Obstacle], ground_y: i32, ceiling_y: i32) -> bool {
    check(player, obstacles, ground_y, ceiling_y).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::obstacle::ObstacleRole;

    fn setup() -> (GameConfig, Player) {
        let config = GameConfig::default();
        let player = Player::new(&config);
        (config, player)
    }

    #[test]
    fn test_clear_field_no_collision() {
        let (config, player) = setup();
        assert_eq!(check(&player, &[], config.ground_y, 0), None);
        assert!(!collides(&player, &[], config.ground_y, 0));
    }

    #[test]
    fn test_player_inside_gap_is_safe() {
        let (config, player) = setup();
        // Gap 260..400 around the player's 318..342
        let obstacles = [
            Obstacle::new(ObstacleRole::Top, 80, 330, &config),
            Obstacle::new(ObstacleRole::Bottom, 80, 330, &config),
        ];
        assert_eq!(check(&player, &obstacles, config.ground_y, 0), None);
    }

    #[test]
    fn test_hits_bottom_obstacle() {
        let (config, player) = setup();
        // Gap 200..340 overlaps the player's bottom edge at 342
        let obstacles = [Obstacle::new(ObstacleRole::Bottom, 80, 270, &config)];
        assert_eq!(
            check(&player, &obstacles, config.ground_y, 0),
            Some(Collision::Obstacle)
        );
    }

    #[test]
    fn test_hits_top_obstacle() {
        let (config, player) = setup();
        // Gap 320..460 starts below the player's top edge at 318
        let obstacles = [Obstacle::new(ObstacleRole::Top, 80, 390, &config)];
        assert!(collides(&player, &obstacles, config.ground_y, 0));
    }

    #[test]
    fn test_obstacle_ahead_does_not_collide() {
        let (config, player) = setup();
        // Left edge exactly at the player's right edge
        let obstacles = [Obstacle::new(ObstacleRole::Bottom, 117, 270, &config)];
        assert!(!collides(&player, &obstacles, config.ground_y, 0));
    }

    #[test]
    fn test_ceiling() {
        let (config, mut player) = setup();
        player.rect.pos.y = 0;
        assert_eq!(check(&player, &[], config.ground_y, 0), None);
        player.rect.pos.y = -1;
        assert_eq!(check(&player, &[], config.ground_y, 0), Some(Collision::Ceiling));
    }

    #[test]
    fn test_ground_is_inclusive() {
        let (config, mut player) = setup();
        player.rect.pos.y = config.ground_y - player.rect.size.y - 1;
        assert_eq!(check(&player, &[], config.ground_y, 0), None);
        player.rect.pos.y += 1;
        assert_eq!(check(&player, &[], config.ground_y, 0), Some(Collision::Ground));
    }
}
