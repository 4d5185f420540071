//! The turtle.
//!
//! DESIGN
//! ======
//! Heading is whole degrees, counter-clockwise from screen-right, always kept
//! in `[0, 360)`. Screen y grows downward, so a move subtracts the sine term.
//! Positions are never clamped; a turtle may walk off the surface and back.
//!
//! A pen-down move appends one segment and then pauses. A pen-up move only
//! relocates. Every turn pauses whatever the pen is doing, and rotates the
//! glyph by the turn itself rather than resetting it to the new heading.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

use canvas::{Colour, SharedCanvas, midpoint};
use rand::Rng;

use crate::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH, TurtleConfig};
use crate::pacing::{Pacer, Sleep};

/// Pen state: moving draws a line.
pub const PEN_DOWN: bool = true;

/// Pen state: moving only relocates.
pub const PEN_UP: bool = false;

const MIN_SPEED: i32 = 1;
const MAX_SPEED: i32 = 10;

pub struct Cursor {
    x: i32,
    y: i32,
    heading: i32,
    pen_down: bool,
    colour: Colour,
    speed: i32,
    canvas: SharedCanvas,
    config: TurtleConfig,
    pacer: Box<dyn Pacer + Send>,
}

impl Cursor {
    /// A turtle in the middle of a fresh `width` × `height` canvas, facing
    /// right, pen down, black ink, slowest speed. Pauses for real after each
    /// visible step, starting with one pause here so the start is visible.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_pacer(width, height, Sleep)
    }

    /// Like [`Cursor::new`] with a chosen pacing policy.
    #[must_use]
    pub fn with_pacer(width: u32, height: u32, pacer: impl Pacer + Send + 'static) -> Self {
        Self::from_config(&TurtleConfig::sized(width, height), pacer)
    }

    /// A turtle on a fresh canvas sized by `config`.
    #[must_use]
    pub fn from_config(config: &TurtleConfig, pacer: impl Pacer + Send + 'static) -> Self {
        let canvas = SharedCanvas::new(config.width, config.height);
        Self::on_canvas(canvas, config, pacer)
    }

    /// A turtle bound to an existing canvas, e.g. one an [`canvas::Engine`]
    /// already mounted. Starts at that canvas's centre; only the pacing base
    /// is taken from `config`. The glyph is centred only on a blank canvas,
    /// otherwise it stays on the end of the last line drawn.
    #[must_use]
    pub fn on_canvas(canvas: SharedCanvas, config: &TurtleConfig, pacer: impl Pacer + Send + 'static) -> Self {
        let (width, height) = canvas.size();
        if canvas.segment_count() == 0 {
            canvas.initialize_glyph_position();
        }

        let mut cursor = Self {
            x: midpoint(width),
            y: midpoint(height),
            heading: 0,
            pen_down: PEN_DOWN,
            colour: Colour::BLACK,
            speed: MIN_SPEED,
            canvas,
            config: config.clone(),
            pacer: Box::new(pacer),
        };
        tracing::debug!(width, height, x = cursor.x, y = cursor.y, "turtle placed");
        cursor.pace();
        cursor
    }

    // --- Movement ---

    /// Walk `pixels` along the current heading.
    pub fn move_forward(&mut self, pixels: i32) {
        self.move_by(pixels);
    }

    /// Walk `pixels` against the current heading.
    pub fn move_backward(&mut self, pixels: i32) {
        self.move_by(pixels.wrapping_neg());
    }

    /// Turn counter-clockwise by `degrees`.
    pub fn turn_left(&mut self, degrees: i32) {
        self.rotate_by(degrees);
    }

    /// Turn clockwise by `degrees`.
    pub fn turn_right(&mut self, degrees: i32) {
        self.rotate_by(degrees.wrapping_neg());
    }

    fn move_by(&mut self, pixels: i32) {
        let (old_x, old_y) = (self.x, self.y);
        let (sin, cos) = f64::from(self.heading).to_radians().sin_cos();
        let distance = f64::from(pixels);

        self.x = old_x.wrapping_add(round_half_up(cos * distance));
        self.y = old_y.wrapping_sub(round_half_up(sin * distance));
        tracing::debug!(old_x, old_y, x = self.x, y = self.y, drawn = self.pen_down, "moved");

        if self.pen_down {
            self.canvas.append_segment(old_x, old_y, self.x, self.y, self.colour);
            self.pace();
        }
    }

    fn rotate_by(&mut self, degrees: i32) {
        self.heading = (self.heading + degrees.rem_euclid(360)).rem_euclid(360);
        tracing::debug!(degrees, heading = self.heading, "turned");

        self.canvas.rotate_glyph(f64::from(degrees).to_radians());
        self.pace();
    }

    fn pace(&mut self) {
        let interval = self.config.pace_interval(self.speed);
        self.pacer.pause(interval);
    }

    // --- Pen ---

    /// [`PEN_DOWN`] or [`PEN_UP`].
    #[must_use]
    pub fn pen_position(&self) -> bool {
        self.pen_down
    }

    pub fn put_pen_down(&mut self) {
        self.pen_down = PEN_DOWN;
    }

    pub fn pick_pen_up(&mut self) {
        self.pen_down = PEN_UP;
    }

    // --- Colour ---

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }

    /// Ink for lines drawn from now on. Lines already drawn keep their colour.
    pub fn set_colour(&mut self, colour: Colour) {
        self.colour = colour;
    }

    pub fn set_colour_rgb(&mut self, red: u8, green: u8, blue: u8) {
        self.set_colour(Colour::rgb(red, green, blue));
    }

    /// Pick each channel uniformly at random.
    pub fn set_random_colour(&mut self) {
        self.set_random_colour_with(&mut rand::rng());
    }

    /// [`Cursor::set_random_colour`] with a caller-supplied generator.
    pub fn set_random_colour_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.set_colour(Colour::rgb(rng.random(), rng.random(), rng.random()));
    }

    // --- Speed ---

    /// 1 (slowest) to 10 (fastest).
    #[must_use]
    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Out-of-range values are clamped to 1..=10.
    pub fn set_speed(&mut self, speed: i32) {
        let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
        if clamped != speed {
            tracing::trace!(requested = speed, clamped, "speed clamped");
        }
        self.speed = clamped;
    }

    // --- Position ---

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Heading in degrees, counter-clockwise from screen-right, in `[0, 360)`.
    #[must_use]
    pub fn angle(&self) -> i32 {
        self.heading
    }

    /// The canvas this turtle draws on.
    #[must_use]
    pub fn canvas(&self) -> &SharedCanvas {
        &self.canvas
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

/// Round to the nearest integer, halves toward positive infinity.
#[allow(clippy::cast_possible_truncation)]
fn round_half_up(value: f64) -> i32 {
    // `as` saturates on overflow.
    (value + 0.5).floor() as i32
}
