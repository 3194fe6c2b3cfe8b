//! Windows-specific implementation using Win32, GDI and Direct2D.
//!
//! - app/: per-thread runtime state shared with window procedures
//! - ui/screen/: drawing targets and the fullscreen/preview loops
//! - ui/settings/: the native settings form

pub mod app;
pub mod ui;

use windows::Win32::Foundation::{HWND, LPARAM};

use crate::model::Size;
use crate::render::WindowId;

/// Registry key for a native window.
pub fn window_id(hwnd: HWND) -> WindowId {
    WindowId(hwnd.0 as isize)
}

/// Client size packed in a `WM_SIZE` lparam.
pub fn size_from_lparam(lparam: LPARAM) -> Size {
    let w = (lparam.0 & 0xFFFF) as u32;
    let h = ((lparam.0 >> 16) & 0xFFFF) as u32;
    Size::new(w, h)
}

/// NUL-terminated UTF-16 for Win32 string parameters.
pub fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}
