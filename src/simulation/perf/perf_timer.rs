use crate::core::{FrameClock, WallClock};

/// Stopwatch for per-phase frame timings. Reads the same wall clock the
/// session steps with, so perf numbers and physics agree on what "now" is.
pub(crate) struct PerfTimer {
    clock: WallClock,
    started_at: f64,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let clock = WallClock::new();
        let started_at = clock.now_seconds();
        PerfTimer { clock, started_at }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        ((self.clock.now_seconds() - self.started_at) * 1000.0).max(0.0)
    }
}
