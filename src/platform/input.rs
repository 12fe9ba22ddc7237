//! Pointer coordinate normalization
//!
//! Mouse events report offsets relative to the canvas element, touch events
//! report viewport coordinates. Both end up as a [`Tap`] in canvas space,
//! corrected for any CSS scaling of the element.

use crate::Rect;
use crate::sim::Tap;

/// Convert a viewport point into canvas space
///
/// `bounds` is the element's on-screen rectangle (`getBoundingClientRect`),
/// `canvas_size` its backing-store size.
pub fn client_to_canvas(client_x: f32, client_y: f32, bounds: Rect, canvas_size: (f32, f32)) -> Tap {
    let scale_x = if bounds.w > 0.0 { canvas_size.0 / bounds.w } else { 1.0 };
    let scale_y = if bounds.h > 0.0 { canvas_size.1 / bounds.h } else { 1.0 };
    Tap::new((client_x - bounds.x) * scale_x, (client_y - bounds.y) * scale_y)
}

/// Convert an element-relative offset (`offsetX/offsetY`) into canvas space
pub fn offset_to_canvas(
    offset_x: f32,
    offset_y: f32,
    display_size: (f32, f32),
    canvas_size: (f32, f32),
) -> Tap {
    let bounds = Rect::new(0.0, 0.0, display_size.0, display_size.1);
    client_to_canvas(offset_x, offset_y, bounds, canvas_size)
}
