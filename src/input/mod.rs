//! Input handling module.
//!
//! - gate.rs: debounce, focus and jitter rules that decide when input ends
//!   a fullscreen session

pub mod gate;

pub use gate::{GateDecision, IgnoreReason, InputEvent, InputGate};
