//! Windows runtime state.

pub mod state;

pub use state::*;
