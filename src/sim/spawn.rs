//! Obstacle spawner
//!
//! New obstacles enter at the right screen edge with a randomized gap height.

use rand::Rng;

use super::state::Obstacle;
use crate::consts::*;

/// Range the top segment height is drawn from
#[inline]
pub fn top_height_span() -> f32 {
    SCREEN_HEIGHT - OBSTACLE_GAP - OBSTACLE_SPAN_MARGIN
}

/// Map a unit sample in [0, 1) to a top segment height
///
/// The top segment is always at least `OBSTACLE_MIN_TOP` tall and the bottom
/// segment keeps `OBSTACLE_SPAN_MARGIN - OBSTACLE_MIN_TOP` at the ceiling.
#[inline]
pub fn top_height_from_unit(u: f32) -> f32 {
    u * top_height_span() + OBSTACLE_MIN_TOP
}

/// Create an obstacle at the right screen edge
pub fn spawn_obstacle<R: Rng + ?Sized>(rng: &mut R) -> Obstacle {
    let u: f32 = rng.random();
    Obstacle {
        x: SCREEN_WIDTH,
        top_height: top_height_from_unit(u),
    }
}
