//! Tests for the model layer (Settings, colors, sizes).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use starfield::model::constants::*;
use starfield::model::{ColorPreset, Rgb, Settings, Size};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

// === Default Values Tests ===

#[test]
fn settings_default_star_count() {
    assert_eq!(Settings::default().star_count, DEFAULT_STAR_COUNT);
    assert_eq!(DEFAULT_STAR_COUNT, 600);
}

#[test]
fn settings_default_speed_and_twinkle() {
    let s = Settings::default();
    assert_eq!(s.speed_pct, 60);
    assert_eq!(s.twinkle_pct, 30);
}

#[test]
fn settings_default_color_is_warm_white() {
    let s = Settings::default();
    assert_eq!(s.color, Rgb::new(255, 255, 240));
    assert_eq!(ColorPreset::matching(s.color), Some(ColorPreset::WarmWhite));
}

// === Validation Tests ===

#[test]
fn validate_clamps_star_count() {
    let mut s = Settings::default();
    s.star_count = 0;
    s.validate();
    assert_eq!(s.star_count, MIN_STAR_COUNT);

    s.star_count = 1_000_000;
    s.validate();
    assert_eq!(s.star_count, MAX_STAR_COUNT);
}

#[test]
fn validate_clamps_speed() {
    let mut s = Settings::default();
    s.speed_pct = 1;
    s.validate();
    assert_eq!(s.speed_pct, MIN_SPEED_PCT);

    s.speed_pct = 301;
    s.validate();
    assert_eq!(s.speed_pct, MAX_SPEED_PCT);
}

#[test]
fn validate_clamps_twinkle() {
    let mut s = Settings::default();
    s.twinkle_pct = 250;
    s.validate();
    assert_eq!(s.twinkle_pct, MAX_TWINKLE_PCT);
}

#[test]
fn validate_keeps_valid_values() {
    let s = Settings {
        star_count: 1234,
        speed_pct: 150,
        twinkle_pct: 0,
        color: Rgb::new(1, 2, 3),
    };
    assert_eq!(s.validated(), s);
}

#[test]
fn scales_are_fractions() {
    let mut s = Settings::default();
    s.speed_pct = 150;
    s.twinkle_pct = 25;
    assert!(approx_eq(s.speed_scale(), 1.5));
    assert!(approx_eq(s.twinkle_scale(), 0.25));
}

// === Colors and Sizes ===

#[test]
fn presets_have_expected_colors() {
    assert_eq!(ColorPreset::CoolWhite.color(), Rgb::new(200, 200, 255));
    assert_eq!(ColorPreset::Blue.color(), Rgb::new(160, 180, 255));
    assert_eq!(ColorPreset::Yellow.color(), Rgb::new(255, 240, 180));
    assert_eq!(ColorPreset::matching(Rgb::new(10, 20, 30)), None);
}

#[test]
fn xrgb_packing() {
    assert_eq!(Rgb::new(0x12, 0x34, 0x56).to_xrgb(), 0x0012_3456);
}

#[test]
fn size_from_negative_extent_is_empty() {
    let s = Size::from_extent(-5, 10);
    assert!(s.is_empty());
    assert_eq!(s.at_least_one(), Size::new(1, 10));
}
