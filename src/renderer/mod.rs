//! Rendering module
//!
//! `scene` describes each frame as draw commands; `canvas` paints them with
//! the browser's 2D context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCommand, Shadow, build_frame};
