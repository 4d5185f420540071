//! Turtle graphics: a cursor that draws lines as it walks.
//!
//! A [`Cursor`] has a position, a heading, a pen, a pen colour, and a speed.
//! Moving it with the pen down appends a line to the [`canvas::SharedCanvas`]
//! it was built with; turning it rotates the glyph that marks it on screen.
//! After each visible step the cursor hands a short pause to its [`Pacer`] so
//! a watcher can follow the drawing; tests and browser hosts use [`NoPause`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`cursor`] | The turtle: geometry, pen state, colour, speed |
//! | [`pacing`] | Step-delay policies applied after visible moves and turns |
//! | [`config`] | Surface size, pacing base, glyph image location |
//! | [`host`] | Browser session: engine and cursor built from one config |

pub mod config;
pub mod cursor;
pub mod host;
pub mod pacing;

pub use canvas::{Colour, SharedCanvas};
pub use config::{ConfigError, TurtleConfig};
pub use cursor::{Cursor, PEN_DOWN, PEN_UP};
pub use host::Host;
pub use pacing::{NoPause, Pacer, Sleep};
