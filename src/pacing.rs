//! Step-delay policies.
//!
//! The cursor never sleeps on its own; it asks a [`Pacer`] to wait for the
//! pacing interval after every visible move and every turn. Swapping the
//! pacer changes playback speed without touching the geometry.

#[cfg(test)]
#[path = "pacing_test.rs"]
mod pacing_test;

use std::thread;
use std::time::Duration;

/// Waits out the pause after a visible step.
pub trait Pacer {
    fn pause(&mut self, interval: Duration);
}

/// Blocks the calling thread for the full interval. Native playback only:
/// `wasm32` in the browser cannot block.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sleep;

impl Pacer for Sleep {
    fn pause(&mut self, interval: Duration) {
        tracing::trace!(ms = interval.as_millis(), "pacing");
        thread::sleep(interval);
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _interval: Duration) {}
}

impl<P: Pacer + ?Sized> Pacer for Box<P> {
    fn pause(&mut self, interval: Duration) {
        (**self).pause(interval);
    }
}
