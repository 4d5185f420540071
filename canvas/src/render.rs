//! Rendering: replays the stored segments and the glyph onto a surface.
//!
//! [`draw`] is the only entry point. It reads a [`CanvasCore`] and never
//! mutates it, so drawing the same state twice yields the same picture.
//! [`ContextSurface`] is the one place that touches
//! [`web_sys::CanvasRenderingContext2d`]; everything else goes through the
//! [`Surface`] trait so the scene can be checked without a browser.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::{GLYPH_SIZE_PX, LINE_WIDTH_PX};
use crate::doc::Segment;
use crate::engine::CanvasCore;
use crate::glyph::Point;

/// Something a scene can be painted onto.
pub trait Surface {
    type Error;

    /// Wipe a `width` × `height` area back to the background.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the surface rejects the call.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Stroke one segment in its own colour.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the surface rejects the call.
    fn line(&mut self, segment: &Segment) -> Result<(), Self::Error>;

    /// Paint the `size` × `size` glyph with its top-left corner at `top_left`,
    /// turned counter-clockwise by `rotation` radians about its centre.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the surface rejects the call.
    fn glyph(&mut self, top_left: Point, size: f64, rotation: f64) -> Result<(), Self::Error>;
}

/// Draw the full scene: every segment oldest first, then the glyph on top.
///
/// # Errors
///
/// Stops at and returns the first error reported by the surface.
pub fn draw<S: Surface>(surface: &mut S, core: &CanvasCore) -> Result<(), S::Error> {
    surface.clear(f64::from(core.width), f64::from(core.height))?;

    for segment in core.doc.iter() {
        surface.line(segment)?;
    }

    surface.glyph(core.glyph.top_left(), GLYPH_SIZE_PX, core.glyph.rotation)
}

/// A [`Surface`] backed by a browser 2D context.
///
/// `glyph_image` is `None` when the image failed to load; the glyph is then
/// silently skipped.
pub struct ContextSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    glyph_image: Option<&'a HtmlImageElement>,
}

impl<'a> ContextSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, glyph_image: Option<&'a HtmlImageElement>) -> Self {
        Self { ctx, glyph_image }
    }
}

impl Surface for ContextSurface<'_> {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        self.ctx.clear_rect(0.0, 0.0, width, height);
        self.ctx.set_line_width(LINE_WIDTH_PX);
        Ok(())
    }

    fn line(&mut self, segment: &Segment) -> Result<(), JsValue> {
        self.ctx.set_stroke_style_str(&segment.colour.css());
        self.ctx.begin_path();
        self.ctx.move_to(f64::from(segment.x1), f64::from(segment.y1));
        self.ctx.line_to(f64::from(segment.x2), f64::from(segment.y2));
        self.ctx.stroke();
        Ok(())
    }

    fn glyph(&mut self, top_left: Point, size: f64, rotation: f64) -> Result<(), JsValue> {
        let Some(image) = self.glyph_image else {
            return Ok(());
        };
        // Still loading, or broken: drawing it would throw.
        if !image.complete() || image.natural_width() == 0 {
            return Ok(());
        }
        let half = size / 2.0;

        self.ctx.save();
        self.ctx.translate(f64::from(top_left.x) + half, f64::from(top_left.y) + half)?;
        // Canvas rotation is clockwise on screen; the turtle turns counter-clockwise.
        self.ctx.rotate(-rotation)?;
        let drawn = self
            .ctx
            .draw_image_with_html_image_element_and_dw_and_dh(image, -half, -half, size, size);
        self.ctx.restore();
        drawn
    }
}
