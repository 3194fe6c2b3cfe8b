//! Platform-specific implementations.
//!
//! Only Windows is supported. Each platform submodule provides:
//! - Drawing targets bound to native windows
//! - Fullscreen and preview window loops
//! - The native settings form

#[cfg(target_os = "windows")]
pub mod windows;
