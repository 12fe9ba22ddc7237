//! Collision detection
//!
//! The player is a circle on screen but collides as its bounding square.

use super::state::{Obstacle, Player};
use crate::Rect;
use crate::consts::{OBSTACLE_WIDTH, SCREEN_HEIGHT};

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Index of the obstacle hit
    Obstacle(usize),
    /// Bottom edge reached the screen bottom
    Floor,
    /// Top edge reached y = 0
    Ceiling,
}

/// Player box against one obstacle's two solid segments
///
/// Hit iff the boxes overlap horizontally and the player's vertical span is
/// not fully inside the gap band.
pub fn hits_obstacle(player: &Rect, obstacle: &Obstacle) -> bool {
    let column = Rect::new(obstacle.x, 0.0, OBSTACLE_WIDTH, SCREEN_HEIGHT);
    if !player.overlaps_x(&column) {
        return false;
    }
    player.y < obstacle.top_height || player.bottom() > obstacle.gap_bottom()
}

/// Screen bounds test
pub fn bounds_collision(player: &Rect) -> Option<Collision> {
    if player.bottom() >= SCREEN_HEIGHT {
        Some(Collision::Floor)
    } else if player.y <= 0.0 {
        Some(Collision::Ceiling)
    } else {
        None
    }
}

/// Check every obstacle, then the screen bounds
///
/// Returns the first obstacle hit in list order; any hit at all produces a
/// `Some`, so the verdict does not depend on ordering.
pub fn detect(player: &Player, obstacles: &[Obstacle]) -> Option<Collision> {
    let bounds = player.bounds();
    obstacles
        .iter()
        .position(|o| hits_obstacle(&bounds, o))
        .map(Collision::Obstacle)
        .or_else(|| bounds_collision(&bounds))
}
