//! User interface logic that does not need a window system.
//!
//! ## settings/
//! - form.rs: SettingsForm, parse_field
//! - placement.rs: choose_placement

pub mod settings;

pub use settings::{choose_placement, SettingsForm, SettingsPlacement};
