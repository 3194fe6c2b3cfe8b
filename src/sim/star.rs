//! Star particles and their per-surface population.

use std::f32::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::constants::*;
use crate::model::Size;

/// One star. Depth `z` always lies in `[DEPTH_NEAR, DEPTH_FAR)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Brightness base in `[BRIGHTNESS_MIN, BRIGHTNESS_MAX)`.
    pub base: f32,
    /// Twinkle phase in `[0, 2π)`.
    pub phase: f32,
}

impl Star {
    /// Sample a fresh star inside `bounds` with depth in `[depth_min, DEPTH_FAR)`.
    pub fn spawn<R: Rng>(bounds: Size, depth_min: f32, rng: &mut R) -> Star {
        let b = bounds.at_least_one();
        // Float sampling may round up to the exclusive bound.
        let z = rng
            .random_range(depth_min..DEPTH_FAR)
            .min(DEPTH_FAR - f32::EPSILON);
        Star {
            x: rng.random_range(0.0..b.width as f32),
            y: rng.random_range(0.0..b.height as f32),
            z,
            base: rng.random_range(BRIGHTNESS_MIN..BRIGHTNESS_MAX),
            phase: rng.random_range(0.0..TAU),
        }
    }

    /// Move the star toward the viewer. A star that reaches the near plane is
    /// reborn far away inside `bounds`. Returns true when that happened.
    pub fn advance<R: Rng>(
        &mut self,
        dt: f32,
        speed_scale: f32,
        bounds: Size,
        rng: &mut R,
    ) -> bool {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.z -= DEPTH_RATE * speed_scale.max(0.0) * dt;
        if self.z <= DEPTH_NEAR || !self.z.is_finite() {
            *self = Star::spawn(bounds, RESPAWN_DEPTH_MIN, rng);
            return true;
        }
        false
    }
}

/// Build the initial population of `count` independent stars.
pub fn initialize<R: Rng>(count: usize, bounds: Size, rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| Star::spawn(bounds, SPAWN_DEPTH_MIN, rng))
        .collect()
}

/// The stars of one surface plus the generator that respawns them.
pub struct StarField {
    stars: Vec<Star>,
    bounds: Size,
    rng: StdRng,
}

impl StarField {
    /// Field seeded from the operating system.
    pub fn new(count: usize, bounds: Size) -> Self {
        Self::with_rng(count, bounds, StdRng::from_os_rng())
    }

    /// Reproducible field for a fixed seed.
    pub fn with_seed(count: usize, bounds: Size, seed: u64) -> Self {
        Self::with_rng(count, bounds, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(count: usize, bounds: Size, mut rng: StdRng) -> Self {
        let stars = initialize(count, bounds, &mut rng);
        Self { stars, bounds, rng }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// New spawn area. Existing stars keep their positions until they respawn.
    pub fn set_bounds(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Advance every star. Returns how many respawned.
    pub fn advance(&mut self, dt: f32, speed_scale: f32) -> usize {
        let mut respawned = 0;
        for star in &mut self.stars {
            if star.advance(dt, speed_scale, self.bounds, &mut self.rng) {
                respawned += 1;
            }
        }
        respawned
    }
}
