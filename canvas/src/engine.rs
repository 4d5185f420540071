use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::doc::{Colour, Segment, SegmentStore};
use crate::glyph::{GlyphTransform, Point};
use crate::render::{self, ContextSurface, Surface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Errors raised while mounting the browser surface.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element is not a canvas")]
    NotACanvas,
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Core canvas state — everything that doesn't depend on the browser.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct CanvasCore {
    pub doc: SegmentStore,
    pub glyph: GlyphTransform,
    pub width: u32,
    pub height: u32,
    revision: u64,
    redraw_pending: bool,
}

impl CanvasCore {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            doc: SegmentStore::new(),
            glyph: GlyphTransform::default(),
            width,
            height,
            revision: 0,
            redraw_pending: false,
        }
    }

    // --- Mutations ---

    /// Record a drawn line and move the glyph to its far end.
    pub fn append_segment(&mut self, segment: Segment) {
        self.doc.push(segment);
        self.glyph.follow(Point::new(segment.x2, segment.y2));
        self.request_redraw();
    }

    /// Erase every line. The glyph stays where it is.
    pub fn clear(&mut self) {
        tracing::debug!(dropped = self.doc.len(), "clearing canvas");
        self.doc.clear();
        self.request_redraw();
    }

    /// Turn the glyph by `radians` on top of its current rotation.
    pub fn rotate_glyph(&mut self, radians: f64) {
        self.glyph.rotate_by(radians);
        self.request_redraw();
    }

    /// Place the glyph at the centre of the surface.
    pub fn initialize_glyph_position(&mut self) {
        self.glyph.center_in(self.width, self.height);
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.redraw_pending = true;
    }

    // --- Redraw bookkeeping ---

    /// Returns whether a redraw was requested since the last call, and resets it.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }

    /// Number of mutations applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// Thread-safe handle to one [`CanvasCore`].
///
/// The turtle writes through it while a redraw handler (possibly on another
/// thread) reads through a clone. Each call takes the lock once, so a reader
/// always sees the state between two whole mutations.
#[derive(Debug, Clone)]
pub struct SharedCanvas {
    inner: Arc<Mutex<CanvasCore>>,
}

impl SharedCanvas {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { inner: Arc::new(Mutex::new(CanvasCore::new(width, height))) }
    }

    fn lock(&self) -> MutexGuard<'_, CanvasCore> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append_segment(&self, x1: i32, y1: i32, x2: i32, y2: i32, colour: Colour) {
        self.lock().append_segment(Segment::new(x1, y1, x2, y2, colour));
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn rotate_glyph(&self, radians: f64) {
        self.lock().rotate_glyph(radians);
    }

    pub fn initialize_glyph_position(&self) {
        self.lock().initialize_glyph_position();
    }

    /// Paint the current state onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the surface.
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::draw(surface, &self.lock())
    }

    pub fn take_redraw(&self) -> bool {
        self.lock().take_redraw()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.lock().revision()
    }

    /// Copy of every stored segment, oldest first.
    #[must_use]
    pub fn segments(&self) -> Vec<Segment> {
        self.lock().doc.as_slice().to_vec()
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.lock().doc.len()
    }

    #[must_use]
    pub fn glyph(&self) -> GlyphTransform {
        self.lock().glyph
    }

    /// Surface `(width, height)` in pixels.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        let core = self.lock();
        (core.width, core.height)
    }

    /// Run `f` against a consistent view of the whole core.
    pub fn with_core<R>(&self, f: impl FnOnce(&CanvasCore) -> R) -> R {
        f(&self.lock())
    }
}

/// The browser-side canvas. Owns the `<canvas>` element, its 2D context, and
/// the glyph image, and repaints a [`SharedCanvas`] on request.
pub struct Engine {
    element: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    glyph_image: Option<HtmlImageElement>,
    shared: SharedCanvas,
}

impl Engine {
    /// Create a `width` × `height` canvas element, append it to the page body,
    /// and bind a fresh [`SharedCanvas`] of the same size to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the page has no window, document, or body, or if
    /// the new element cannot provide a 2D context.
    pub fn mount(width: u32, height: u32, glyph_src: &str) -> Result<Self, EngineError> {
        let window = web_sys::window().ok_or(EngineError::NoWindow)?;
        let document = window.document().ok_or(EngineError::NoDocument)?;
        let body = document.body().ok_or(EngineError::NoBody)?;

        let element = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EngineError::NotACanvas)?;
        element.set_width(width);
        element.set_height(height);
        body.append_child(&element)?;

        Self::new(element, glyph_src)
    }

    /// Bind to an existing canvas element, sized from its current attributes.
    ///
    /// # Errors
    ///
    /// Returns an error if the element cannot provide a 2D context.
    pub fn new(element: HtmlCanvasElement, glyph_src: &str) -> Result<Self, EngineError> {
        let ctx = element
            .get_context("2d")?
            .ok_or(EngineError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::NoContext)?;

        let shared = SharedCanvas::new(element.width(), element.height());
        shared.initialize_glyph_position();

        Ok(Self { element, ctx, glyph_image: load_glyph(glyph_src), shared })
    }

    /// A handle to the segment store this engine paints.
    #[must_use]
    pub fn shared(&self) -> SharedCanvas {
        self.shared.clone()
    }

    #[must_use]
    pub fn element(&self) -> &HtmlCanvasElement {
        &self.element
    }

    /// Repaint everything now. Hook this to expose/resize events.
    pub fn render(&self) {
        let mut surface = ContextSurface::new(&self.ctx, self.glyph_image.as_ref());
        if let Err(e) = self.shared.render(&mut surface) {
            tracing::warn!(error = ?e, "canvas render failed");
        }
    }

    /// Repaint only if something changed since the last frame. Hook this to
    /// `requestAnimationFrame`. Returns whether a repaint happened.
    pub fn frame(&self) -> bool {
        if !self.shared.take_redraw() {
            return false;
        }
        self.render();
        true
    }
}

fn load_glyph(src: &str) -> Option<HtmlImageElement> {
    match HtmlImageElement::new() {
        Ok(image) => {
            let failed_src = src.to_owned();
            let on_error = Closure::<dyn FnMut()>::new(move || {
                tracing::warn!(src = %failed_src, "glyph image failed to load");
            });
            image.set_onerror(Some(on_error.as_ref().unchecked_ref::<js_sys::Function>()));
            // The image outlives this call; JS owns the callback from here on.
            on_error.forget();
            image.set_src(src);
            Some(image)
        }
        Err(e) => {
            tracing::warn!(error = ?e, src, "glyph image element could not be created");
            None
        }
    }
}
