use std::time::Duration;

use crate::foundation::core::Fps;

/// Converts wall-clock time into whole reveal ticks at a fixed rate.
///
/// The fractional remainder carries over between calls, so the tick count only depends on the
/// total elapsed time, not on how it was sliced.
#[derive(Debug, Clone)]
pub struct FrameClock {
    fps: Fps,
    carry_secs: f64,
}

impl FrameClock {
    /// Create a clock ticking at `fps`.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            carry_secs: 0.0,
        }
    }

    /// Feed elapsed time; returns the number of whole ticks it completes.
    pub fn advance(&mut self, elapsed: Duration) -> u64 {
        let frame = self.fps.frame_duration_secs();
        let total = self.carry_secs + elapsed.as_secs_f64();
        // Tolerate representation error so 1/60 s slices always yield one tick each.
        let ticks = ((total + 1e-9) / frame).floor().max(0.0);
        self.carry_secs = (total - ticks * frame).max(0.0);
        ticks as u64
    }

    /// Drop any accumulated remainder.
    pub fn reset(&mut self) {
        self.carry_secs = 0.0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
