//! Settings form logic shared by every platform.
//!
//! - form.rs: field parsing, color selection, commit to `Settings`
//! - placement.rs: embedded vs popup decision

pub mod form;
pub mod placement;

pub use form::{parse_field, SettingsForm, CUSTOM_LABEL, SWATCH_COUNT};
pub use placement::{centered, choose_placement, Extent, SettingsPlacement};
