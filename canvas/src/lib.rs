//! Drawing surface for the turtle tank.
//!
//! This crate owns everything on the screen side of a turtle session: the
//! ordered list of line segments the turtle has drawn, the transform of the
//! small glyph that marks the turtle, and the rendering of both. Segments are
//! kept rather than drawn once and forgotten so the surface can repaint itself
//! from scratch whenever the host asks (expose, resize, animation frame).
//!
//! The crate builds for native targets, where the tests run against
//! [`engine::CanvasCore`] and a recording [`render::Surface`], and for
//! `wasm32`, where [`engine::Engine`] mounts a `<canvas>` element in the page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::CanvasCore`], the [`engine::SharedCanvas`] handle, and the browser [`engine::Engine`] |
//! | [`doc`] | Colours, line segments, and the append-only segment store |
//! | [`glyph`] | Screen points and the glyph transform |
//! | [`render`] | The [`render::Surface`] seam and scene drawing |
//! | [`consts`] | Shared numeric constants (glyph footprint) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod glyph;
pub mod render;

pub use doc::{Colour, Segment, SegmentStore};
pub use engine::{CanvasCore, Engine, EngineError, SharedCanvas};
pub use glyph::{GlyphTransform, Point, midpoint};
pub use render::{ContextSurface, Surface};
