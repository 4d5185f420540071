//! Browser session wiring.
//!
//! A [`Host`] builds both halves of a session from one [`TurtleConfig`]: the
//! [`Engine`] that owns the `<canvas>` element and the glyph image, and the
//! [`Cursor`] drawing into that engine's canvas. The page drives the turtle
//! through [`Host::cursor_mut`] and calls [`Host::frame`] from its
//! `requestAnimationFrame` callback.

use canvas::{Engine, EngineError};

use crate::config::TurtleConfig;
use crate::cursor::Cursor;
use crate::pacing::NoPause;

pub struct Host {
    engine: Engine,
    cursor: Cursor,
}

impl Host {
    /// Mount a `config.width` × `config.height` canvas in the page body, load
    /// the glyph from `config.glyph_src`, and place a turtle on it.
    ///
    /// The browser cannot block, so the turtle never pauses; playback speed
    /// comes from the frame loop instead.
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the page or the new element is unusable.
    pub fn mount(config: &TurtleConfig) -> Result<Self, EngineError> {
        let engine = Engine::mount(config.width, config.height, &config.glyph_src)?;
        let cursor = Cursor::on_canvas(engine.shared(), config, NoPause);
        tracing::info!(
            width = config.width,
            height = config.height,
            glyph_src = %config.glyph_src,
            "turtle session mounted"
        );
        Ok(Self { engine, cursor })
    }

    #[must_use]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Repaint if the turtle changed anything since the last frame.
    pub fn frame(&self) -> bool {
        self.engine.frame()
    }
}
