//! Native settings form.

pub mod window;

pub use window::run_settings;
