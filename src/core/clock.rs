use std::time::Instant;

use crate::traits::Clock;

/// Wall clock - elapsed time since construction or the last reset
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Restart elapsed time from zero
    pub fn reset(&mut self) {
        self.start = Instant::now();
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn elapsed_time(&mut self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Clock whose time only moves when told to
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    time: f32,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, time: f32) {
        self.time = time;
    }

    pub fn advance(&mut self, delta: f32) {
        self.time += delta;
    }
}

impl Clock for ManualClock {
    fn elapsed_time(&mut self) -> f32 {
        self.time
    }
}

/// Synthetic clock for non-realtime runs: the k-th read returns `k * step`
#[derive(Debug, Clone, Copy)]
pub struct SteppedClock {
    step: f32,
    reads: u64,
}

impl SteppedClock {
    pub fn new(step: f32) -> Self {
        Self { step, reads: 0 }
    }
}

impl Clock for SteppedClock {
    fn elapsed_time(&mut self) -> f32 {
        // multiply rather than accumulate so long runs don't drift
        let time = self.reads as f32 * self.step;
        self.reads += 1;
        time
    }
}
