//! Surfaces drawn into the CPU backbuffer.

use starfield::model::{Settings, Size};
use starfield::render::{Backbuffer, DrawTarget, Surface};
use starfield::sim::StarField;

fn surface(size: Size, count: usize) -> Surface<Backbuffer> {
    Surface::with_field(
        Backbuffer::new(size),
        StarField::with_seed(count, size, 11),
        Settings::default(),
    )
}

#[test]
fn frame_draws_visible_stars() {
    let mut s = surface(Size::new(320, 240), 600);
    let stats = s.render_frame(1.0 / 60.0, 0.0);
    assert!(stats.presented);
    assert!(stats.drawn > 0);
    assert!(s.target().lit_pixels() > 0);
}

#[test]
fn resize_then_render_uses_new_size() {
    let mut s = surface(Size::new(320, 240), 600);
    s.render_frame(1.0 / 60.0, 0.0);
    s.resize(Size::new(1024, 768)).unwrap();
    let stats = s.render_frame(1.0 / 60.0, 1.0 / 60.0);
    assert!(stats.presented);
    assert_eq!(s.size(), Size::new(1024, 768));
    assert_eq!(s.target().pixels().len(), 1024 * 768);
    assert_eq!(s.field().bounds(), Size::new(1024, 768));
}

#[test]
fn released_target_is_recreated_on_next_frame() {
    let mut target = Backbuffer::new(Size::new(64, 64));
    target.release();
    let mut s = Surface::with_field(
        target,
        StarField::with_seed(50, Size::new(64, 64), 3),
        Settings::default(),
    );
    let stats = s.render_frame(1.0 / 60.0, 0.0);
    assert!(stats.presented);
    assert!(s.target().is_ready());
}

#[test]
fn release_twice_is_harmless() {
    let mut s = surface(Size::new(32, 32), 10);
    s.release();
    s.release();
    assert!(!s.render_frame(0.1, 0.1).presented);
}
