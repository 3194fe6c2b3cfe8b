//! UI components for Windows.

pub mod screen;
pub mod settings;

pub use screen::{run_fullscreen, run_preview};
pub use settings::run_settings;
