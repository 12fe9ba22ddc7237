//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one 60 Hz step. Nothing happens
//! outside the Running phase.

use super::collision::{self, Collision};
use super::state::{GamePhase, GameState};
use crate::consts::OBSTACLE_SPEED;

/// Advance the game state by one fixed step
///
/// Order within a step: integrate the player, scroll and recycle every
/// obstacle, then test all obstacles and the screen bounds. A crash is
/// committed once, after all of that work.
pub fn tick(state: &mut GameState) -> Option<Collision> {
    if state.phase != GamePhase::Running {
        return None;
    }

    state.step_count += 1;
    state.player.integrate();
    advance_obstacles(state);

    let collision = collision::detect(&state.player, &state.obstacles);
    if let Some(hit) = collision {
        log::debug!("Collision at step {}: {:?}", state.step_count, hit);
        state.end_run();
    }
    collision
}

/// Scroll obstacles left and replace each one that left the screen
///
/// Replacements are appended after the scroll, so they start moving on the
/// next step.
pub fn advance_obstacles(state: &mut GameState) {
    for obstacle in &mut state.obstacles {
        obstacle.x -= OBSTACLE_SPEED;
    }

    let before = state.obstacles.len();
    state.obstacles.retain(|o| !o.is_off_screen());
    let removed = before - state.obstacles.len();

    for _ in 0..removed {
        state.spawn_obstacle();
    }
}

/// Run with no input until the run ends, up to `max_steps`
///
/// Returns the step on which the run ended. Used by the headless runner.
pub fn run_untouched(state: &mut GameState, max_steps: u64) -> Option<u64> {
    for _ in 0..max_steps {
        if tick(state).is_some() {
            return Some(state.step_count);
        }
    }
    None
}
