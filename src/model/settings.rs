//! Screensaver settings (pure Rust, no FFI).
//!
//! A `Settings` value is loaded once at startup and handed to every surface.
//! Only the settings form mutates it, and it does so in its own process mode.

use super::color::Rgb;
use super::constants::*;

/// Complete screensaver settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Stars per surface.
    pub star_count: u32,
    /// Approach speed in percent of the base rate.
    pub speed_pct: u32,
    /// Twinkle amplitude in percent.
    pub twinkle_pct: u32,
    /// Base star color.
    pub color: Rgb,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            speed_pct: DEFAULT_SPEED_PCT,
            twinkle_pct: DEFAULT_TWINKLE_PCT,
            color: Rgb::default(),
        }
    }
}

impl Settings {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.star_count = self.star_count.clamp(MIN_STAR_COUNT, MAX_STAR_COUNT);
        self.speed_pct = self.speed_pct.clamp(MIN_SPEED_PCT, MAX_SPEED_PCT);
        self.twinkle_pct = self.twinkle_pct.clamp(MIN_TWINKLE_PCT, MAX_TWINKLE_PCT);
    }

    /// Builder-style `validate`.
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }

    /// Speed as a multiplier (1.0 = 100%).
    pub fn speed_scale(&self) -> f32 {
        self.speed_pct as f32 / 100.0
    }

    /// Twinkle amplitude as a fraction.
    pub fn twinkle_scale(&self) -> f32 {
        self.twinkle_pct as f32 / 100.0
    }
}
