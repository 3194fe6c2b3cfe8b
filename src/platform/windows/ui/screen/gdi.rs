//! CPU backbuffer blitted to a window with GDI.

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    GetDC, ReleaseDC, StretchDIBits, BITMAPINFO, BITMAPINFOHEADER, BI_RGB, DIB_RGB_COLORS,
    SRCCOPY,
};

use crate::error::{Error, Result};
use crate::model::{Rgb, Size};
use crate::render::{Backbuffer, DrawTarget, Presented};

/// Software target. Frames are composed in a [`Backbuffer`] and copied to
/// the window DC in one block transfer.
pub struct GdiTarget {
    hwnd: HWND,
    buffer: Backbuffer,
}

impl GdiTarget {
    pub fn new(hwnd: HWND, size: Size) -> Self {
        Self {
            hwnd,
            buffer: Backbuffer::new(size),
        }
    }

    fn bitmap_info(&self) -> BITMAPINFO {
        BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: self.buffer.width() as i32,
                biHeight: -(self.buffer.height() as i32), // Top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

impl DrawTarget for GdiTarget {
    fn size(&self) -> Size {
        self.buffer.size()
    }

    fn is_ready(&self) -> bool {
        self.buffer.is_ready()
    }

    fn resize(&mut self, size: Size) -> Result<()> {
        self.buffer.resize(size)
    }

    fn begin_frame(&mut self) {
        self.buffer.begin_frame();
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        self.buffer.fill_ellipse(x, y, radius, color);
    }

    fn present(&mut self) -> Result<Presented> {
        if !self.buffer.is_ready() {
            return Ok(Presented::TargetLost);
        }
        let size = self.buffer.size();
        if size.is_empty() {
            return Ok(Presented::Shown);
        }
        let (w, h) = (size.width as i32, size.height as i32);
        let bmi = self.bitmap_info();
        let copied = unsafe {
            let hdc = GetDC(Some(self.hwnd));
            if hdc.is_invalid() {
                return Err(Error::Target("GetDC failed".into()));
            }
            let lines = StretchDIBits(
                hdc,
                0,
                0,
                w,
                h,
                0,
                0,
                w,
                h,
                Some(self.buffer.pixels().as_ptr() as *const _),
                &bmi,
                DIB_RGB_COLORS,
                SRCCOPY,
            );
            ReleaseDC(Some(self.hwnd), hdc);
            lines
        };
        if copied == 0 {
            return Err(Error::Target("StretchDIBits copied no lines".into()));
        }
        Ok(Presented::Shown)
    }

    fn release(&mut self) {
        self.buffer.release();
    }
}
