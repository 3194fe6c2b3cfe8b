//! Pixel sizes shared by the simulator and drawing targets.

/// Drawable size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Build from signed Win32-style extents, treating negatives as zero.
    pub fn from_extent(width: i32, height: i32) -> Self {
        Self::new(width.max(0) as u32, height.max(0) as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size with each dimension raised to at least 1.
    pub fn at_least_one(&self) -> Size {
        Size::new(self.width.max(1), self.height.max(1))
    }
}
