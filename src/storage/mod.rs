//! Settings persistence.
//!
//! Settings live in a JSON file under the per-user config directory.

mod config;

pub use config::{default_path, ConfigStore};
