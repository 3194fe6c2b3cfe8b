//! Monotonic frame timing.

use std::time::{Duration, Instant};

use crate::model::constants::{MAX_FRAME_DT, TWINKLE_RATE};

/// One full twinkle cycle, in seconds.
pub const TWINKLE_PERIOD: f64 = std::f64::consts::TAU / TWINKLE_RATE as f64;

/// Timing of one frame, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped to `[0, MAX_FRAME_DT]`.
    pub dt: f32,
    /// Sum of every `dt` so far.
    pub total: f64,
}

impl FrameTime {
    /// `total` wrapped to one twinkle cycle, small enough to keep `f32`
    /// precision in long sessions.
    pub fn twinkle_time(&self) -> f32 {
        self.total.rem_euclid(TWINKLE_PERIOD) as f32
    }
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    total: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
            total: 0.0,
        }
    }

    /// Wall time since the clock started.
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.start)
    }

    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .as_secs_f32()
            .min(MAX_FRAME_DT);
        self.last = now;
        self.total += f64::from(dt);
        FrameTime {
            dt,
            total: self.total,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
