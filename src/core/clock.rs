//! Frame clocks.
//!
//! The fixed-step accumulator reads wall-clock seconds through `FrameClock` so
//! tests can drive time by hand.

use std::cell::Cell;
use std::rc::Rc;

/// Source of monotonically non-decreasing time in seconds.
pub trait FrameClock {
    fn now_seconds(&self) -> f64;
}

/// Real time: `Date.now()` in the browser, `Instant` elsewhere.
pub struct WallClock {
    #[cfg(not(target_arch = "wasm32"))]
    origin: std::time::Instant,
}

impl WallClock {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            WallClock {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            WallClock { origin: std::time::Instant::now() }
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for WallClock {
    fn now_seconds(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() / 1000.0
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.origin.elapsed().as_secs_f64()
        }
    }
}

/// Hand-driven clock. Clones share the same time cell, so a test can keep one
/// handle and give the other to the session.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_seconds: f64) -> Self {
        Self { now: Rc::new(Cell::new(start_seconds)) }
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl FrameClock for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.now.get()
    }
}
