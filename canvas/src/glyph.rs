//! Glyph placement.
//!
//! The glyph is the small image that marks the turtle. It is centred on the
//! turtle's position and turned by the sum of every turn made so far.

#[cfg(test)]
#[path = "glyph_test.rs"]
mod glyph_test;

use std::f64::consts::TAU;

use crate::consts::GLYPH_OFFSET_PX;

/// A point in screen space (pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Where the turtle glyph sits and how far it has turned.
///
/// `center` is the turtle's screen position. `rotation` is the absolute
/// counter-clockwise angle in radians, kept in `[0, 2π)`. The glyph is redrawn
/// from the unrotated image every frame, so only this one angle is stored.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphTransform {
    pub center: Point,
    pub rotation: f64,
}

impl GlyphTransform {
    /// Centre the glyph on a `width` × `height` surface.
    pub fn center_in(&mut self, width: u32, height: u32) {
        self.center = Point::new(midpoint(width), midpoint(height));
    }

    /// Move the glyph so it sits over `endpoint`.
    pub fn follow(&mut self, endpoint: Point) {
        self.center = endpoint;
    }

    /// Turn the glyph counter-clockwise by `radians` on top of its current angle.
    pub fn rotate_by(&mut self, radians: f64) {
        self.rotation = (self.rotation + radians).rem_euclid(TAU);
    }

    /// Top-left corner of the glyph footprint.
    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(
            self.center.x.wrapping_sub(GLYPH_OFFSET_PX),
            self.center.y.wrapping_sub(GLYPH_OFFSET_PX),
        )
    }
}

/// Integer centre of a `len`-pixel span, saturating at `i32::MAX`.
#[must_use]
pub fn midpoint(len: u32) -> i32 {
    i32::try_from(len / 2).unwrap_or(i32::MAX)
}
