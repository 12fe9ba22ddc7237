//! Canvas2D backend
//!
//! Executes a frame from [`build_frame`] on a `CanvasRenderingContext2d`.
//! Images that are still loading or failed to load are skipped.

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{DrawCommand, build_frame};
use crate::Rect;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::platform::ImageId;
use crate::platform::assets::ImageSet;
use crate::sim::GameState;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    images: ImageSet,
}

impl CanvasRenderer {
    /// Size the canvas to the logical surface and grab its 2D context
    pub fn new(canvas: &HtmlCanvasElement, images: ImageSet) -> Result<Self, JsValue> {
        canvas.set_width(SCREEN_WIDTH as u32);
        canvas.set_height(SCREEN_HEIGHT as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        log::info!("Canvas ready: {}x{}", canvas.width(), canvas.height());
        Ok(Self { ctx, images })
    }

    /// Redraw everything for the current state
    pub fn render(&self, state: &GameState) {
        for command in build_frame(state) {
            if let Err(e) = self.draw(&command) {
                log::warn!("Draw failed for {:?}: {:?}", command, e);
            }
        }
    }

    fn draw(&self, command: &DrawCommand) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        match command {
            DrawCommand::Image { image, dest } => self.draw_image(*image, dest),
            DrawCommand::CircleImage {
                image,
                center,
                radius,
                dest,
            } => {
                if !self.images.get(*image).state().is_ready() {
                    return Ok(());
                }
                ctx.save();
                ctx.begin_path();
                ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    *radius as f64,
                    0.0,
                    std::f64::consts::TAU,
                )?;
                ctx.clip();
                let drawn = self.draw_image(*image, dest);
                ctx.restore();
                drawn
            }
            DrawCommand::FillRect { rect, color } => {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
                Ok(())
            }
            DrawCommand::StrokeRect {
                rect,
                color,
                line_width,
            } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(*line_width as f64);
                ctx.stroke_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
                Ok(())
            }
            DrawCommand::Text {
                text,
                x,
                y,
                font,
                color,
                shadow,
            } => {
                ctx.save();
                ctx.set_font(font);
                ctx.set_fill_style_str(color);
                ctx.set_text_align("center");
                if let Some(shadow) = shadow {
                    ctx.set_shadow_color(shadow.color);
                    ctx.set_shadow_blur(shadow.blur as f64);
                }
                let drawn = ctx.fill_text(text, *x as f64, *y as f64);
                ctx.restore();
                drawn
            }
        }
    }

    fn draw_image(&self, id: ImageId, dest: &Rect) -> Result<(), JsValue> {
        let asset = self.images.get(id);
        if !asset.state().is_ready() {
            return Ok(());
        }
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            asset.element(),
            dest.x as f64,
            dest.y as f64,
            dest.w as f64,
            dest.h as f64,
        )
    }
}
