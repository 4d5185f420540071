//! Shared numeric constants for the canvas crate.

// ── Glyph ───────────────────────────────────────────────────────

/// Side length of the square glyph footprint, in screen pixels.
pub const GLYPH_SIZE_PX: f64 = 10.0;

/// Distance from the glyph's top-left corner to its centre, in screen pixels.
pub const GLYPH_OFFSET_PX: i32 = 5;

// ── Lines ───────────────────────────────────────────────────────

/// Stroke width used for every segment.
pub const LINE_WIDTH_PX: f64 = 1.0;
