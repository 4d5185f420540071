//! Session configuration.
//!
//! Every field has a default, so hosts only spell out what they change. A
//! browser host typically hands over a JSON object from the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_PACE_BASE_MS: u64 = 1000;
pub const DEFAULT_GLYPH_SRC: &str = "turtle.jpeg";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid turtle config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TurtleConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Pause at speed 1. Speed `n` pauses for `pace_base_ms / n`.
    pub pace_base_ms: u64,
    /// URL of the glyph image.
    pub glyph_src: String,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            pace_base_ms: DEFAULT_PACE_BASE_MS,
            glyph_src: DEFAULT_GLYPH_SRC.to_owned(),
        }
    }
}

impl TurtleConfig {
    /// Default config with a different surface size.
    #[must_use]
    pub fn sized(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Parse a JSON object; missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if `json` is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// How long to pause after a visible step at `speed` (already clamped to 1..=10).
    #[must_use]
    pub fn pace_interval(&self, speed: i32) -> Duration {
        let speed = u64::try_from(speed.max(1)).unwrap_or(1);
        Duration::from_millis(self.pace_base_ms / speed)
    }
}
