//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (fixed-step pacing over `requestAnimationFrame`)
//! - Input events (mouse/touch to canvas-space taps)
//! - Asset handles with explicit load state

pub mod assets;
pub mod input;
pub mod time;

pub use assets::{AssetState, ImageId, sound_path};
pub use input::{client_to_canvas, offset_to_canvas};
pub use time::FixedStep;
