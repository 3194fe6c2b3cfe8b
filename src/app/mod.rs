//! Process-level pieces shared by every platform: launch mode parsing and
//! frame timing.

pub mod clock;
pub mod launch;

pub use clock::{FrameClock, FrameTime};
pub use launch::LaunchMode;
