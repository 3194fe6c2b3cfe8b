//! Star simulation: population, depth advance, projection and shading.
//!
//! Everything here is pure math on plain data so it can be exercised by
//! tests on any platform.

pub mod palette;
pub mod projection;
pub mod star;

pub use palette::{shade, ColorTable};
pub use projection::{normalized_depth, project, star_intensity, star_radius, Shading, Sprite, Viewport};
pub use star::{initialize, Star, StarField};
