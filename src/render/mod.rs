//! Drawing: the target seam, the CPU backbuffer, per-window surfaces and
//! the registry that owns them.

pub mod backbuffer;
pub mod registry;
pub mod surface;
pub mod target;

pub use backbuffer::Backbuffer;
pub use registry::{ResizeQueue, SurfaceRegistry, WindowId};
pub use surface::{FrameStats, Surface};
pub use target::{DrawTarget, Presented};
