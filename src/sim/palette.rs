//! Intensity → color lookup, rebuilt once per frame.
//!
//! Stars are drawn with the base color scaled by their intensity. Instead of
//! computing (or allocating a brush for) each star's color, intensity is
//! quantized into a fixed number of buckets.

use crate::model::constants::{INTENSITY_BUCKETS, MAX_INTENSITY};
use crate::model::Rgb;

/// Fixed-size table of shaded colors keyed by quantized intensity.
#[derive(Debug, Clone)]
pub struct ColorTable {
    base: Rgb,
    entries: [Rgb; INTENSITY_BUCKETS],
}

impl ColorTable {
    pub fn new(base: Rgb) -> Self {
        let mut table = Self {
            base,
            entries: [Rgb::BLACK; INTENSITY_BUCKETS],
        };
        table.rebuild(base);
        table
    }

    /// Recompute every entry for `base`.
    pub fn rebuild(&mut self, base: Rgb) {
        self.base = base;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            *entry = base.scaled(bucket_intensity(i));
        }
    }

    pub fn base(&self) -> Rgb {
        self.base
    }

    /// Bucket index for `intensity`.
    pub fn bucket(intensity: f32) -> usize {
        if !intensity.is_finite() || intensity <= 0.0 {
            return 0;
        }
        let t = (intensity / MAX_INTENSITY).min(1.0);
        (t * (INTENSITY_BUCKETS - 1) as f32).round() as usize
    }

    /// Shaded color for `intensity`.
    pub fn lookup(&self, intensity: f32) -> Rgb {
        self.entries[Self::bucket(intensity)]
    }

    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }
}

/// Intensity represented by bucket `index`.
pub fn bucket_intensity(index: usize) -> f32 {
    index.min(INTENSITY_BUCKETS - 1) as f32 / (INTENSITY_BUCKETS - 1) as f32 * MAX_INTENSITY
}

/// Exact shaded color with channels normalised and clamped to `[0, 1]`.
pub fn shade(base: Rgb, intensity: f32) -> (f32, f32, f32) {
    let (r, g, b) = base.to_f32();
    let i = if intensity.is_finite() { intensity.max(0.0) } else { 0.0 };
    (
        (r * i).clamp(0.0, 1.0),
        (g * i).clamp(0.0, 1.0),
        (b * i).clamp(0.0, 1.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_edges() {
        assert_eq!(ColorTable::bucket(-1.0), 0);
        assert_eq!(ColorTable::bucket(0.0), 0);
        assert_eq!(ColorTable::bucket(f32::NAN), 0);
        assert_eq!(ColorTable::bucket(MAX_INTENSITY), INTENSITY_BUCKETS - 1);
        assert_eq!(ColorTable::bucket(100.0), INTENSITY_BUCKETS - 1);
    }

    #[test]
    fn entries_are_monotonic_per_channel() {
        let table = ColorTable::new(Rgb::new(160, 180, 255));
        for pair in table.entries().windows(2) {
            assert!(pair[0].r <= pair[1].r);
            assert!(pair[0].g <= pair[1].g);
            assert!(pair[0].b <= pair[1].b);
        }
    }

    #[test]
    fn unit_intensity_is_close_to_base() {
        let base = Rgb::new(200, 100, 50);
        let table = ColorTable::new(base);
        let c = table.lookup(1.0);
        // One bucket is MAX_INTENSITY / 63 wide.
        assert!((c.r as i32 - 200).abs() <= 4);
        assert!((c.g as i32 - 100).abs() <= 2);
        assert!((c.b as i32 - 50).abs() <= 1);
    }

    #[test]
    fn rebuild_switches_base() {
        let mut table = ColorTable::new(Rgb::new(255, 255, 255));
        table.rebuild(Rgb::new(0, 0, 255));
        assert_eq!(table.base(), Rgb::new(0, 0, 255));
        assert_eq!(table.lookup(MAX_INTENSITY), Rgb::new(0, 0, 255));
    }

    #[test]
    fn shade_clamps_channels() {
        let (r, g, b) = shade(Rgb::new(255, 128, 0), MAX_INTENSITY);
        assert_eq!(r, 1.0);
        assert!(g > 0.99 && g <= 1.0);
        assert_eq!(b, 0.0);
    }
}
