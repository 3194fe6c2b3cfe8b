//! Configuration constants and default values.
//!
//! This module contains all application constants including settings
//! defaults, persisted key names, validation limits and simulation tuning.

// === Settings Defaults ===

/// Default number of stars per surface.
pub const DEFAULT_STAR_COUNT: u32 = 600;

/// Default speed as a percentage of the base approach rate.
pub const DEFAULT_SPEED_PCT: u32 = 60;

/// Default twinkle amplitude percentage.
pub const DEFAULT_TWINKLE_PCT: u32 = 30;

/// Default star color (R, G, B) - warm white.
pub const DEFAULT_COLOR: (u8, u8, u8) = (255, 255, 240);

// === Persisted Keys ===

/// Key for star count.
pub const PREF_STAR_COUNT: &str = "star_count";

/// Key for speed percentage.
pub const PREF_SPEED: &str = "speed_percent";

/// Key for twinkle percentage.
pub const PREF_TWINKLE: &str = "twinkle_percent";

/// Key for color red channel.
pub const PREF_COLOR_R: &str = "color_r";

/// Key for color green channel.
pub const PREF_COLOR_G: &str = "color_g";

/// Key for color blue channel.
pub const PREF_COLOR_B: &str = "color_b";

// === Validation Limits ===

/// Minimum star count.
pub const MIN_STAR_COUNT: u32 = 10;

/// Maximum star count.
pub const MAX_STAR_COUNT: u32 = 5000;

/// Minimum speed percentage.
pub const MIN_SPEED_PCT: u32 = 10;

/// Maximum speed percentage.
pub const MAX_SPEED_PCT: u32 = 300;

/// Minimum twinkle percentage.
pub const MIN_TWINKLE_PCT: u32 = 0;

/// Maximum twinkle percentage.
pub const MAX_TWINKLE_PCT: u32 = 100;

// === Depth Band ===

/// Near plane. Stars at or below this depth respawn.
pub const DEPTH_NEAR: f32 = 0.05;

/// Far plane (exclusive upper bound for sampled depth).
pub const DEPTH_FAR: f32 = 1.0;

/// Lower bound of depth for the initial population.
pub const SPAWN_DEPTH_MIN: f32 = 0.2;

/// Lower bound of depth for respawned stars, so they are reborn far away.
pub const RESPAWN_DEPTH_MIN: f32 = 0.5;

/// Depth units per second at 100% speed.
pub const DEPTH_RATE: f32 = 0.5;

// === Star Appearance ===

/// Brightness base range sampled per star.
pub const BRIGHTNESS_MIN: f32 = 0.6;
pub const BRIGHTNESS_MAX: f32 = 1.0;

/// Radius numerator before the per-star brightness factor.
pub const STAR_SIZE_BASE: f32 = 1.0;

/// Projected radius clamp, in pixels.
pub const STAR_RADIUS_MIN: f32 = 1.0;
pub const STAR_RADIUS_MAX: f32 = 8.0;

/// Twinkle angular speed, radians per second.
pub const TWINKLE_RATE: f32 = 5.0;

/// How much the farthest stars are dimmed (0 = no fade).
pub const DEPTH_FADE: f32 = 0.35;

/// Upper bound of star intensity covered by the color table.
pub const MAX_INTENSITY: f32 = 2.0;

/// Number of quantized intensity buckets in the color table.
pub const INTENSITY_BUCKETS: usize = 64;

// === Frame Timing ===

/// Largest frame delta fed to the simulation, in seconds.
pub const MAX_FRAME_DT: f32 = 0.25;

/// Sleep between fullscreen frames, in milliseconds.
pub const FULLSCREEN_FRAME_SLEEP_MS: u64 = 1;

/// Sleep between preview frames, in milliseconds.
pub const PREVIEW_FRAME_SLEEP_MS: u64 = 15;

// === Input Gate ===

/// Input is ignored for this long after fullscreen start, in milliseconds.
pub const INPUT_DEBOUNCE_MS: u64 = 2500;

/// Mouse movement below this many pixels on both axes is jitter.
pub const MOUSE_MOVE_THRESHOLD: i32 = 12;

// === Settings Placement ===

/// Smallest owner client area that can host the embedded settings form.
pub const EMBED_MIN_WIDTH: i32 = 220;
pub const EMBED_MIN_HEIGHT: i32 = 140;
