//! Star simulation properties.

use starfield::model::constants::*;
use starfield::model::{Rgb, Size};
use starfield::sim::{project, shade, star_radius, ColorTable, Shading, StarField, Viewport};

const DT: f32 = 1.0 / 60.0;

#[test]
fn same_seed_gives_same_field() {
    let bounds = Size::new(800, 600);
    let a = StarField::with_seed(300, bounds, 1234);
    let b = StarField::with_seed(300, bounds, 1234);
    assert_eq!(a.stars(), b.stars());

    let c = StarField::with_seed(300, bounds, 4321);
    assert_ne!(a.stars(), c.stars());
}

#[test]
fn same_seed_advances_identically() {
    let bounds = Size::new(640, 480);
    let mut a = StarField::with_seed(100, bounds, 5);
    let mut b = StarField::with_seed(100, bounds, 5);
    for _ in 0..500 {
        assert_eq!(a.advance(DT, 2.0), b.advance(DT, 2.0));
    }
    assert_eq!(a.stars(), b.stars());
}

#[test]
fn long_run_keeps_depth_in_band_and_count_constant() {
    let bounds = Size::new(1920, 1080);
    let mut field = StarField::with_seed(600, bounds, 2024);
    let mut respawned = 0;
    for _ in 0..10_000 {
        respawned += field.advance(DT, 0.6);
        assert_eq!(field.len(), 600);
    }
    assert!(respawned > 0);
    for s in field.stars() {
        assert!(s.z > DEPTH_NEAR && s.z < DEPTH_FAR, "z = {}", s.z);
        assert!((0.0..1920.0).contains(&s.x));
        assert!((0.0..1080.0).contains(&s.y));
    }
}

#[test]
fn respawned_stars_are_far() {
    let bounds = Size::new(100, 100);
    let mut field = StarField::with_seed(200, bounds, 77);
    let before: Vec<f32> = field.stars().iter().map(|s| s.z).collect();
    field.advance(MAX_FRAME_DT, 3.0);
    for (old, s) in before.iter().zip(field.stars()) {
        if s.z > *old {
            assert!(s.z >= RESPAWN_DEPTH_MIN);
        }
    }
}

#[test]
fn projected_radius_and_color_stay_bounded() {
    let vp = Viewport::new(1920.0, 1080.0);
    let table = ColorTable::new(Rgb::new(255, 255, 255));
    let mut field = StarField::with_seed(600, Size::new(1920, 1080), 9);
    for frame in 0..600 {
        field.advance(DT, 3.0);
        let shading = Shading {
            time: frame as f32 * DT,
            twinkle: 1.0,
        };
        for s in field.stars() {
            let r = star_radius(s);
            assert!((STAR_RADIUS_MIN..=STAR_RADIUS_MAX).contains(&r));
            if let Some(sprite) = project(s, &vp, &shading) {
                assert!((0.0..=MAX_INTENSITY).contains(&sprite.intensity));
                let (cr, cg, cb) = shade(table.base(), sprite.intensity);
                for c in [cr, cg, cb] {
                    assert!((0.0..=1.0).contains(&c));
                }
                let _ = table.lookup(sprite.intensity);
            }
        }
    }
}

#[test]
fn color_table_is_monotonic() {
    let table = ColorTable::new(Rgb::new(200, 150, 100));
    let entries = table.entries();
    assert_eq!(entries.len(), INTENSITY_BUCKETS);
    assert_eq!(entries[0], Rgb::BLACK);
    for pair in entries.windows(2) {
        assert!(pair[1].r >= pair[0].r);
        assert!(pair[1].g >= pair[0].g);
        assert!(pair[1].b >= pair[0].b);
    }
    assert_eq!(*entries.last().unwrap(), Rgb::new(255, 255, 200));
}
