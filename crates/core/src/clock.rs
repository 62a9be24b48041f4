//! Frame clocks - the single source of elapsed time for the update step.
//!
//! The session samples a clock once per frame. Production code uses
//! [`MonotonicClock`]; tests and benchmarks inject a [`FixedClock`] so runs are
//! reproducible.

use std::time::Instant;

/// Yields the time elapsed since the previous sample, in seconds.
pub trait FrameClock {
    fn delta_secs(&mut self) -> f32;
}

/// Wall-clock time from [`Instant`].
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    last: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for MonotonicClock {
    fn delta_secs(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Returns the same delta every sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedClock {
    step_secs: f32,
}

impl FixedClock {
    pub fn new(step_secs: f32) -> Self {
        Self {
            step_secs: step_secs.max(0.0),
        }
    }

    pub fn from_millis(ms: u32) -> Self {
        Self::new(ms as f32 / 1000.0)
    }
}

impl FrameClock for FixedClock {
    fn delta_secs(&mut self) -> f32 {
        self.step_secs
    }
}
