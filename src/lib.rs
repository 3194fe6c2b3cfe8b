//! Starfield screensaver.
//!
//! Pure helpers used by the app live here so they build and test on any
//! platform. Win32 and Direct2D code sits under `platform::windows`.

pub mod app;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod render;
pub mod sim;
pub mod storage;
pub mod ui;

#[cfg(target_os = "windows")]
pub mod platform;

// Re-export the types most callers need
pub use error::{Error, Result};
pub use model::{Rgb, Settings, Size};
pub use render::{Backbuffer, DrawTarget, Surface};
pub use sim::StarField;
