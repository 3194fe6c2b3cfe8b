//! CPU backbuffer: a 32-bit XRGB pixel array, top-down.
//!
//! The layout matches a top-down `BI_RGB` DIB, so the Windows GDI target can
//! block-copy it to a window as is.

use crate::error::{Error, Result};
use crate::model::{Rgb, Size};

use super::target::{DrawTarget, Presented};

/// Off-screen pixel buffer. Every draw clips to the buffer.
#[derive(Debug, Default)]
pub struct Backbuffer {
    pixels: Vec<u32>,
    size: Size,
    live: bool,
}

impl Backbuffer {
    /// Allocate a black buffer of `size`.
    pub fn new(size: Size) -> Self {
        let mut buf = Self::default();
        buf.allocate(size);
        buf
    }

    fn allocate(&mut self, size: Size) {
        self.pixels = vec![0; size.area()];
        self.size = size;
        self.live = true;
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Raw pixels, row-major, `width * height` long.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.size.width as usize + x as usize)
            .copied()
    }

    /// Fill with one color.
    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color.to_xrgb());
    }

    /// Count of pixels that are not black.
    pub fn lit_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p != 0).count()
    }
}

impl DrawTarget for Backbuffer {
    fn size(&self) -> Size {
        self.size
    }

    fn is_ready(&self) -> bool {
        self.live
    }

    fn resize(&mut self, size: Size) -> Result<()> {
        self.release();
        if size.area() > isize::MAX as usize / 4 {
            return Err(Error::Target(format!(
                "backbuffer {}x{} is too large",
                size.width, size.height
            )));
        }
        self.allocate(size);
        Ok(())
    }

    fn begin_frame(&mut self) {
        self.clear(Rgb::BLACK);
    }

    fn fill_ellipse(&mut self, x: f32, y: f32, radius: f32, color: Rgb) {
        if !self.live || radius <= 0.0 || !(x.is_finite() && y.is_finite()) {
            return;
        }
        let w = self.size.width as i64;
        let h = self.size.height as i64;
        let x0 = ((x - radius).floor() as i64).max(0);
        let x1 = ((x + radius).ceil() as i64).min(w);
        let y0 = ((y - radius).floor() as i64).max(0);
        let y1 = ((y + radius).ceil() as i64).min(h);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let r2 = radius * radius;
        let value = color.to_xrgb();
        for py in y0..y1 {
            let dy = py as f32 + 0.5 - y;
            let row = py as usize * w as usize;
            for px in x0..x1 {
                let dx = px as f32 + 0.5 - x;
                if dx * dx + dy * dy <= r2 {
                    self.pixels[row + px as usize] = value;
                }
            }
        }
    }

    fn present(&mut self) -> Result<Presented> {
        Ok(Presented::Shown)
    }

    fn release(&mut self) {
        self.pixels = Vec::new();
        self.live = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black() {
        let buf = Backbuffer::new(Size::new(8, 4));
        assert_eq!(buf.pixels().len(), 32);
        assert_eq!(buf.lit_pixels(), 0);
    }

    #[test]
    fn fill_ellipse_covers_center() {
        let mut buf = Backbuffer::new(Size::new(10, 10));
        buf.fill_ellipse(5.0, 5.0, 1.0, Rgb::new(255, 0, 0));
        assert_eq!(buf.pixel(4, 4), Some(0x00FF_0000));
        assert_eq!(buf.pixel(0, 0), Some(0));
    }

    #[test]
    fn fill_ellipse_clips_to_edges() {
        let mut buf = Backbuffer::new(Size::new(10, 10));
        buf.fill_ellipse(0.0, 0.0, 3.0, Rgb::new(1, 2, 3));
        buf.fill_ellipse(-50.0, 5.0, 3.0, Rgb::new(1, 2, 3));
        buf.fill_ellipse(9.5, 9.5, 8.0, Rgb::new(1, 2, 3));
        assert!(buf.lit_pixels() > 0);
        assert_eq!(buf.pixels().len(), 100);
    }

    #[test]
    fn release_is_idempotent() {
        let mut buf = Backbuffer::new(Size::new(4, 4));
        buf.release();
        buf.release();
        assert!(!buf.is_ready());
        buf.fill_ellipse(2.0, 2.0, 1.0, Rgb::new(9, 9, 9));
        assert!(buf.pixels().is_empty());
    }

    #[test]
    fn resize_reallocates() {
        let mut buf = Backbuffer::new(Size::new(4, 4));
        buf.resize(Size::new(6, 3)).unwrap();
        assert!(buf.is_ready());
        assert_eq!((buf.width(), buf.height()), (6, 3));
        assert_eq!(buf.pixels().len(), 18);
    }
}
