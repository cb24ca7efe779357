//! Fixed-timestep accumulator.
//!
//! The first call runs exactly one step. Later calls bank the wall-clock time
//! elapsed since the previous call and run as many whole steps as it covers,
//! up to `max_substeps`; anything beyond that is dropped down to the remainder
//! of one step so a long stall does not turn into a burst of catch-up steps.

pub struct FixedStepper {
    dt: f64,
    max_substeps: u32,
    accumulator: f64,
    last_call: Option<f64>,
}

impl FixedStepper {
    pub fn new(dt: f32, max_substeps: u32) -> Self {
        Self {
            dt: dt as f64,
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
            last_call: None,
        }
    }

    /// Number of fixed steps to run for a frame observed at `now` seconds.
    pub fn advance(&mut self, now: f64) -> u32 {
        let Some(last) = self.last_call.replace(now) else {
            return 1;
        };

        // A clock that jumps backwards contributes nothing.
        self.accumulator += (now - last).max(0.0);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < self.max_substeps {
            self.accumulator -= self.dt;
            steps += 1;
        }
        if steps >= self.max_substeps {
            self.accumulator %= self.dt;
        }
        steps
    }

    /// Forget timing history; the next call behaves like the first.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
        self.last_call = None;
    }
}
