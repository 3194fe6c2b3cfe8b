//! Command line and settings form helpers.

use starfield::app::LaunchMode;
use starfield::ui::settings::{choose_placement, parse_field, Extent, SettingsForm, SettingsPlacement};
use starfield::{Rgb, Settings};

fn mode(args: &[&str]) -> LaunchMode {
    LaunchMode::parse(args.iter().copied())
}

#[test]
fn screensaver_flags() {
    assert_eq!(mode(&[]), LaunchMode::Fullscreen);
    assert_eq!(mode(&["/S"]), LaunchMode::Fullscreen);
    assert_eq!(mode(&["/c"]), LaunchMode::Configure { owner: None });
    assert_eq!(mode(&["/c:263942"]), LaunchMode::Configure { owner: Some(263942) });
    assert_eq!(mode(&["/p", "263942"]), LaunchMode::Preview { parent: 263942 });
}

#[test]
fn mode_display_mentions_handle() {
    let text = mode(&["/p:0x40"]).to_string();
    assert!(text.contains("0x40"), "{}", text);
}

#[test]
fn parse_field_clamps_and_falls_back() {
    assert_eq!(parse_field("9000", 600, 10, 5000), 5000);
    assert_eq!(parse_field("x", 600, 10, 5000), 600);
}

#[test]
fn placement_popup_without_owner() {
    let form = Extent::new(320, 200);
    assert_eq!(choose_placement(None, form), SettingsPlacement::Popup);
    assert_eq!(
        choose_placement(Some(Extent::new(219, 500)), form),
        SettingsPlacement::Popup
    );
    assert!(matches!(
        choose_placement(Some(Extent::new(640, 480)), form),
        SettingsPlacement::Embedded { x: 160, y: 140 }
    ));
}

#[test]
fn form_commit_validates_everything() {
    let mut form = SettingsForm::new(Settings::default());
    form.set_color(Rgb::new(9, 8, 7));
    let s = form.commit("3", "301", "50");
    assert_eq!(s.star_count, 10);
    assert_eq!(s.speed_pct, 300);
    assert_eq!(s.twinkle_pct, 50);
    assert_eq!(s.color, Rgb::new(9, 8, 7));
}
