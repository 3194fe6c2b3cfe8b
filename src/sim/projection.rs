//! Perspective projection of stars into a viewport.
//!
//! Near stars move faster across the screen and appear larger: screen
//! position is `center + (pos - center) / z`, radius grows as `1 / z`.

use crate::model::constants::*;
use crate::model::Size;

use super::star::Star;

/// Drawable area the stars are projected into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }
}

impl From<Size> for Viewport {
    fn from(size: Size) -> Self {
        Viewport::new(size.width as f32, size.height as f32)
    }
}

/// Per-frame inputs to the intensity curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shading {
    /// Seconds since the surface started drawing.
    pub time: f32,
    /// Twinkle amplitude as a fraction (0.0..=1.0).
    pub twinkle: f32,
}

/// A projected star ready to be drawn as a filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Brightness multiplier for the base color, in `[0, MAX_INTENSITY]`.
    pub intensity: f32,
}

/// `(z - near) / (far - near)`, clamped to `[0, 1]`.
pub fn normalized_depth(z: f32) -> f32 {
    ((z - DEPTH_NEAR) / (DEPTH_FAR - DEPTH_NEAR)).clamp(0.0, 1.0)
}

/// Radius in pixels, always within `[STAR_RADIUS_MIN, STAR_RADIUS_MAX]`.
pub fn star_radius(star: &Star) -> f32 {
    let z = star.z.max(DEPTH_NEAR);
    let r = (STAR_SIZE_BASE / z) * (0.6 + 0.8 * star.base);
    if r.is_finite() {
        r.clamp(STAR_RADIUS_MIN, STAR_RADIUS_MAX)
    } else {
        STAR_RADIUS_MIN
    }
}

/// Brightness multiplier: twinkle oscillation on top of the star's base,
/// dimmed with depth.
pub fn star_intensity(star: &Star, shading: &Shading) -> f32 {
    let wave = (star.phase + shading.time * TWINKLE_RATE).sin() * 0.5 + 0.5;
    let twinkle = star.base + wave * shading.twinkle.clamp(0.0, 1.0);
    let fade = 1.0 - DEPTH_FADE * normalized_depth(star.z);
    let i = twinkle * fade;
    if i.is_finite() {
        i.clamp(0.0, MAX_INTENSITY)
    } else {
        0.0
    }
}

/// Project `star` into `viewport`. Stars whose bounding box is entirely
/// outside the viewport yield `None`.
pub fn project(star: &Star, viewport: &Viewport, shading: &Shading) -> Option<Sprite> {
    let (cx, cy) = viewport.center();
    let z = star.z.max(DEPTH_NEAR);
    let x = (star.x - cx) / z + cx;
    let y = (star.y - cy) / z + cy;
    let radius = star_radius(star);

    if x + radius < 0.0
        || y + radius < 0.0
        || x - radius > viewport.width
        || y - radius > viewport.height
    {
        return None;
    }

    Some(Sprite {
        x,
        y,
        radius,
        intensity: star_intensity(star, shading),
    })
}
