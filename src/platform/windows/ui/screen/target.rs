//! Drawing strategy chosen per window.

use log::{info, warn};
use windows::Win32::Foundation::HWND;

use crate::error::Result;
use crate::model::{Rgb, Size};
use crate::render::{DrawTarget, Presented};

use super::d2d::D2dTarget;
use super::gdi::GdiTarget;

/// Direct2D when available, GDI backbuffer otherwise.
pub enum ScreenTarget {
    Direct2D(D2dTarget),
    Gdi(GdiTarget),
}

impl ScreenTarget {
    /// Try Direct2D first and fall back to the CPU path.
    pub fn acquire(hwnd: HWND, size: Size) -> Self {
        match D2dTarget::new(hwnd, size) {
            Ok(t) => {
                info!("window {:?}: Direct2D target {}x{}", hwnd, size.width, size.height);
                ScreenTarget::Direct2D(t)
            }
            Err(e) => {
                warn!("window {:?}: Direct2D unavailable ({}), using GDI backbuffer", hwnd, e);
                ScreenTarget::Gdi(GdiTarget::new(hwnd, size))
            }
        }
    }

    pub fn strategy(&self) -> &'static str {
        match self {
            ScreenTarget::Direct2D(_) => "direct2d",
            ScreenTarget::Gdi(_) => "gdi",
        }
    }
}

macro_rules! each {
    ($self:ident, $t:ident => $e:expr) => {
        match $self {
            ScreenTarget::Direct2D($t) => $e,
            ScreenTarget::Gdi($t) => $e,
        }
    };
}

impl DrawTarget for ScreenTarget {
    fn size(&self) -> Size {
        each!(self, t => t.size())
    }

    fn is_ready(&self) -> bool {
        each!(self, t => t.is_ready())
    }

    fn resize(&mut self, size: Size) -> Result<()> {
        each!(self, t => t.resize(size))
    }

    fn begin_frame(&mut self) {
        each!(self, t => t.begin_frame())
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        each!(self, t => t.fill_ellipse(x, y, radius, color))
    }

    fn present(&mut self) -> Result<Presented> {
        each!(self, t => t.present())
    }

    fn release(&mut self) {
        each!(self, t => t.release())
    }
}
