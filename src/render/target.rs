//! The drawing target seam.
//!
//! A target is the off-screen buffer a frame is composited into before it is
//! shown. Implementations: the CPU [`Backbuffer`](super::Backbuffer) here,
//! and the Direct2D / GDI targets under `platform::windows`.

use crate::error::Result;
use crate::model::{Rgb, Size};

/// Outcome of presenting a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presented {
    /// The frame reached the window.
    Shown,
    /// The device invalidated the target. It must be recreated before the
    /// next frame draws.
    TargetLost,
}

pub trait DrawTarget {
    /// Current drawable size.
    fn size(&self) -> Size;

    /// True while drawing resources are allocated.
    fn is_ready(&self) -> bool;

    /// Release the current resources and allocate new ones for `size`.
    fn resize(&mut self, size: Size) -> Result<()>;

    /// Rebuild resources at the current size.
    fn recreate(&mut self) -> Result<()> {
        let size = self.size();
        self.resize(size)
    }

    /// Start a frame cleared to black.
    fn begin_frame(&mut self);

    /// Fill a circle centered at `(x, y)`.
    fn fill_ellipse(&mut self, x: f32, y: f32, radius: f32, color: Rgb);

    /// Finish the frame and copy it to the window.
    fn present(&mut self) -> Result<Presented>;

    /// Free all drawing resources. Must be safe to call repeatedly.
    fn release(&mut self);
}
