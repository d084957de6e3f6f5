//! Scoring
//!
//! Each obstacle scores once, when the player's center moves past its center.
//! Top and Bottom both count, so clearing one pair is worth 2.

use super::obstacle::Obstacle;
use super::player::Player;

/// Mark newly passed obstacles and return how many were passed this call
pub fn update(player: &Player, obstacles: &mut [Obstacle]) -> u32 {
    let player_x = player.rect.center_x();
    let mut passed = 0;
    for obstacle in obstacles.iter_mut().filter(|o| !o.passed) {
        if obstacle.rect.center_x() < player_x {
            obstacle.passed = true;
            passed += 1;
        }
    }
    passed
}
