//! RNG module - seeded draw of the treasure rock.
//!
//! A small LCG keeps sessions reproducible from a seed (handy for tests and for
//! replaying a journal); the binary seeds it from the clock by default.

use crate::types::ROCK_COUNT;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state is a fixed point of the multiply; nudge it.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in `[0, max)`.
    ///
    /// Uses multiply-shift reduction so the result depends on the high bits; the
    /// low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Pick the rock that holds the treasure.
    pub fn pick_treasure_rock(&mut self) -> usize {
        self.next_range(ROCK_COUNT as u32) as usize
    }
}
