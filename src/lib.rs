//! Flappy Canvas - a portrait tap-to-fly arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, spawning, game state)
//! - `renderer`: Draw-list generation and Canvas2D execution
//! - `platform`: Browser glue (input coordinates, frame pacing, assets)
//! - `ui`: Button and popup layout shared by hit-testing and drawing
//! - `audio`: Start/hit cue playback (wasm only)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod ui;

use serde::{Deserialize, Serialize};

/// Game configuration constants
///
/// Per-step values are tuned for 60 steps per second.
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the cadence the physics was tuned for)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame gap fed to the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Drawing surface (portrait)
    pub const SCREEN_WIDTH: f32 = 720.0;
    pub const SCREEN_HEIGHT: f32 = 1280.0;

    /// Player start position and size
    pub const PLAYER_START_X: f32 = 150.0;
    pub const PLAYER_START_Y: f32 = 500.0;
    /// Diameter; collision uses the square bounding box
    pub const PLAYER_SIZE: f32 = 120.0;

    /// Downward acceleration added to velocity each step
    pub const GRAVITY: f32 = 0.25;
    /// Velocity set by a jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -9.0;

    /// Obstacle geometry and scroll speed
    pub const OBSTACLE_WIDTH: f32 = 240.0;
    pub const OBSTACLE_GAP: f32 = 450.0;
    pub const OBSTACLE_SPEED: f32 = 4.0;
    /// Spawn bounds: top_height = u * (H - gap - SPAN_MARGIN) + MIN_TOP
    pub const OBSTACLE_SPAN_MARGIN: f32 = 250.0;
    pub const OBSTACLE_MIN_TOP: f32 = 60.0;

    /// UI buttons
    pub const BUTTON_WIDTH: f32 = 300.0;
    pub const BUTTON_HEIGHT: f32 = 100.0;
    /// Start button sits this far below screen centre
    pub const START_BUTTON_OFFSET: f32 = 150.0;

    /// Game over popup
    pub const POPUP_SIZE: f32 = 350.0;
    /// Popup is lifted this far above centre
    pub const POPUP_LIFT: f32 = 100.0;
    /// Gap between popup bottom and restart button
    pub const RESTART_BUTTON_MARGIN: f32 = 40.0;

    /// Watermark drawn on top of everything
    pub const WATERMARK: &str = "coded by Sachin";
    pub const WATERMARK_Y: f32 = 80.0;
}

/// Axis-aligned rectangle in screen space (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict containment: points on the border are outside
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.x && x < self.right() && y > self.y && y < self.bottom()
    }

    /// Horizontal extents overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.right() > other.x && self.x < other.right()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_strict() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(r.contains(60.0, 45.0));
        // Edges and corners are outside
        assert!(!r.contains(10.0, 45.0));
        assert!(!r.contains(110.0, 45.0));
        assert!(!r.contains(60.0, 20.0));
        assert!(!r.contains(60.0, 70.0));
        assert!(!r.contains(10.0, 20.0));
        // Just inside
        assert!(r.contains(10.001, 20.001));
    }

    #[test]
    fn test_rect_overlaps_x() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps_x(&Rect::new(5.0, 100.0, 10.0, 1.0)));
        assert!(!a.overlaps_x(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps_x(&Rect::new(-10.0, 0.0, 10.0, 10.0)));
    }
}
