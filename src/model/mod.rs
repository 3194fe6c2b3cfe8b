//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the settings definition, color presets and constants.
//!
//! Persistence is in `storage`.

pub mod color;
pub mod constants;
pub mod geometry;
pub mod settings;

pub use color::{ColorPreset, Rgb};
pub use constants::*;
pub use geometry::Size;
pub use settings::Settings;
