//! Tap handling
//!
//! Mouse and touch are normalized to a single [`Tap`] in canvas space before
//! they get here. What a tap does depends only on the current phase.

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::ui;

/// A pointer-down in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tap {
    pub x: f32,
    pub y: f32,
}

impl Tap {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// What a tap ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// Start button pressed, run began
    Started,
    /// Restart button pressed, back on the start screen
    Restarted,
    /// Player jumped
    Jumped,
    /// Tap missed the active button
    Ignored,
}

/// Apply one tap to the game
///
/// Phases are checked in a fixed order so a tap landing on a transition frame
/// always resolves the same way.
pub fn apply_tap(state: &mut GameState, tap: Tap) -> TapOutcome {
    match state.phase {
        GamePhase::NotStarted => {
            if ui::start_button().contains(tap.x, tap.y) && state.start() {
                TapOutcome::Started
            } else {
                TapOutcome::Ignored
            }
        }
        GamePhase::GameOver => {
            if ui::restart_button().contains(tap.x, tap.y) {
                state.reset();
                TapOutcome::Restarted
            } else {
                TapOutcome::Ignored
            }
        }
        GamePhase::Running => {
            state.player.jump();
            TapOutcome::Jumped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{GameEvent, SoundEffect};
    use proptest::prelude::*;

    fn start_tap() -> Tap {
        let r = ui::start_button();
        Tap::new(r.x + r.w / 2.0, r.y + r.h / 2.0)
    }

    fn restart_tap() -> Tap {
        let r = ui::restart_button();
        Tap::new(r.x + r.w / 2.0, r.y + r.h / 2.0)
    }

    #[test]
    fn test_tap_outside_start_changes_nothing() {
        let mut state = GameState::new(1);
        let before = serde_json::to_string(&state).unwrap();

        assert_eq!(apply_tap(&mut state, Tap::new(10.0, 10.0)), TapOutcome::Ignored);
        // On the border is outside too
        let r = ui::start_button();
        assert_eq!(apply_tap(&mut state, Tap::new(r.x, r.y + 10.0)), TapOutcome::Ignored);

        assert_eq!(serde_json::to_string(&state).unwrap(), before);
        assert!(state.pending_events().is_empty());
    }

    #[test]
    fn test_start_tap_twice_plays_cue_once() {
        let mut state = GameState::new(1);
        assert_eq!(apply_tap(&mut state, start_tap()), TapOutcome::Started);
        assert_eq!(state.phase, GamePhase::Running);

        // Second tap lands while running: it is a jump, not another start
        assert_eq!(apply_tap(&mut state, start_tap()), TapOutcome::Jumped);

        let starts = state
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::PlaySound(SoundEffect::Start))
            .count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn test_jump_anywhere_while_running() {
        let mut state = GameState::new(1);
        apply_tap(&mut state, start_tap());
        state.player.velocity = 5.0;
        assert_eq!(apply_tap(&mut state, Tap::new(0.0, 0.0)), TapOutcome::Jumped);
        assert_eq!(state.player.velocity, JUMP_IMPULSE);
    }

    #[test]
    fn test_restart_only_inside_button() {
        let mut state = GameState::new(1);
        apply_tap(&mut state, start_tap());
        state.end_run();

        // The start button area does nothing on the game over screen
        assert_eq!(apply_tap(&mut state, Tap::new(360.0, 870.0)), TapOutcome::Ignored);
        assert_eq!(state.phase, GamePhase::GameOver);

        assert_eq!(apply_tap(&mut state, restart_tap()), TapOutcome::Restarted);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.obstacles.len(), 1);
    }

    proptest! {
        #[test]
        fn prop_jump_sets_exact_impulse(v in -50.0f32..50.0, x in 0.0f32..720.0, y in 0.0f32..1280.0) {
            let mut state = GameState::new(9);
            state.start();
            state.player.velocity = v;
            apply_tap(&mut state, Tap::new(x, y));
            prop_assert_eq!(state.player.velocity, JUMP_IMPULSE);
        }
    }
}
