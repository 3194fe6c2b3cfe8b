//! Star field windows.
//!
//! - d2d.rs: Direct2D target
//! - gdi.rs: GDI blit of the CPU backbuffer
//! - target.rs: per-window strategy selection
//! - window.rs: fullscreen and preview loops

pub mod d2d;
pub mod gdi;
pub mod target;
pub mod window;

pub use target::ScreenTarget;
pub use window::{run_fullscreen, run_preview};
