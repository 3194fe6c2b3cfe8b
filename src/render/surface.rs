//! Presentation surface: one star field drawn into one target.

use log::{debug, warn};

use crate::error::Result;
use crate::model::{Settings, Size};
use crate::sim::{project, ColorTable, Shading, StarField, Viewport};

use super::target::{DrawTarget, Presented};

/// What a frame did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Ellipses issued (visible stars).
    pub drawn: usize,
    /// Stars reborn at the far plane this frame.
    pub respawned: usize,
    /// True when the frame reached the window.
    pub presented: bool,
}

/// Owns a drawing target and the stars drawn into it.
pub struct Surface<T: DrawTarget> {
    target: T,
    field: StarField,
    palette: ColorTable,
    settings: Settings,
    released: bool,
}

impl<T: DrawTarget> Surface<T> {
    /// Surface with an OS-seeded star field sized to the target.
    pub fn new(target: T, settings: Settings) -> Self {
        let field = StarField::new(settings.star_count as usize, target.size());
        Self::with_field(target, field, settings)
    }

    pub fn with_field(target: T, field: StarField, settings: Settings) -> Self {
        Self {
            target,
            field,
            palette: ColorTable::new(settings.color),
            settings,
            released: false,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn field(&self) -> &StarField {
        &self.field
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn size(&self) -> Size {
        self.target.size()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Recreate the target at `size`. Stars spawn inside the new bounds from
    /// now on.
    pub fn resize(&mut self, size: Size) -> Result<()> {
        self.field.set_bounds(size);
        if self.released {
            return Ok(());
        }
        debug!("surface resize to {}x{}", size.width, size.height);
        self.target.resize(size)
    }

    /// Advance the simulation by `dt` and draw one frame with the twinkle at
    /// `time` seconds into its cycle.
    pub fn render_frame(&mut self, dt: f32, time: f32) -> FrameStats {
        let mut stats = FrameStats::default();
        if self.released {
            return stats;
        }

        stats.respawned = self.field.advance(dt, self.settings.speed_scale());

        if !self.target.is_ready() {
            if let Err(e) = self.target.recreate() {
                debug!("drawing target still unavailable: {}", e);
                return stats;
            }
        }

        self.palette.rebuild(self.settings.color);
        let viewport = Viewport::from(self.target.size());
        let shading = Shading {
            time,
            twinkle: self.settings.twinkle_scale(),
        };

        self.target.begin_frame();
        for star in self.field.stars() {
            if let Some(sprite) = project(star, &viewport, &shading) {
                let color = self.palette.lookup(sprite.intensity);
                self.target
                    .fill_ellipse(sprite.x, sprite.y, sprite.radius, color);
                stats.drawn += 1;
            }
        }

        match self.target.present() {
            Ok(Presented::Shown) => stats.presented = true,
            Ok(Presented::TargetLost) => {
                debug!("drawing target lost; recreating");
                if let Err(e) = self.target.recreate() {
                    warn!("failed to recreate drawing target: {}", e);
                }
            }
            Err(e) => warn!("present failed: {}", e),
        }
        stats
    }

    /// Free the drawing resources. Later frames are no-ops.
    pub fn release(&mut self) {
        if !self.released {
            self.target.release();
            self.released = true;
        }
    }
}

impl<T: DrawTarget> Drop for Surface<T> {
    fn drop(&mut self) {
        self.release();
    }
}
