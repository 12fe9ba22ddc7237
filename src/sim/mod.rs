//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Side effects leave as `GameEvent`s, never as direct platform calls
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Collision, detect};
pub use input::{Tap, TapOutcome, apply_tap};
pub use spawn::spawn_obstacle;
pub use state::{AudioFlags, GameEvent, GamePhase, GameState, Obstacle, Player, SoundEffect};
pub use tick::{advance_obstacles, run_untouched, tick};
