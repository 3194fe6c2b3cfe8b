//! State behind the settings form, free of any window handles.
//!
//! The Win32 dialog reads its edit fields as text and forwards combo and
//! color-chooser events here. `commit` produces the validated settings.

use crate::model::constants::*;
use crate::model::{ColorPreset, Rgb, Settings};

/// Label of the combo entry for a color that matches no preset.
pub const CUSTOM_LABEL: &str = "Custom";

/// Custom color slots offered by the color chooser.
pub const SWATCH_COUNT: usize = 16;

/// Parse an unsigned decimal field. Unparsable text gives `fallback`.
/// Parsed values are clamped to `[min, max]`.
pub fn parse_field(text: &str, fallback: u32, min: u32, max: u32) -> u32 {
    match text.trim().parse::<u64>() {
        Ok(v) => v.clamp(min as u64, max as u64) as u32,
        Err(_) => fallback,
    }
}

/// Color choice plus the settings the form was opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsForm {
    initial: Settings,
    color: Rgb,
    swatches: [Rgb; SWATCH_COUNT],
}

impl SettingsForm {
    pub fn new(initial: Settings) -> Self {
        Self {
            color: initial.color,
            initial,
            swatches: [Rgb::new(255, 255, 255); SWATCH_COUNT],
        }
    }

    pub fn initial(&self) -> &Settings {
        &self.initial
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Combo entries: every preset followed by `Custom`.
    pub fn combo_labels() -> impl Iterator<Item = &'static str> {
        ColorPreset::ALL
            .into_iter()
            .map(ColorPreset::label)
            .chain(std::iter::once(CUSTOM_LABEL))
    }

    pub fn custom_index() -> usize {
        ColorPreset::ALL.len()
    }

    /// Combo index for the current color.
    pub fn selected_index(&self) -> usize {
        ColorPreset::matching(self.color)
            .map(ColorPreset::index)
            .unwrap_or_else(Self::custom_index)
    }

    /// Combo selection changed. Picking `Custom` keeps the current color.
    pub fn select_index(&mut self, index: usize) {
        if let Some(preset) = ColorPreset::from_index(index) {
            self.color = preset.color();
        }
    }

    /// Color chooser returned `color`.
    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Custom colors the chooser should open with.
    pub fn swatches(&self) -> [Rgb; SWATCH_COUNT] {
        self.swatches
    }

    /// Remember the chooser's custom colors for the next pick.
    pub fn keep_swatches(&mut self, swatches: [Rgb; SWATCH_COUNT]) {
        self.swatches = swatches;
    }

    /// Build validated settings from the three edit fields. Text that does
    /// not parse keeps the value the form was opened with.
    pub fn commit(&self, stars: &str, speed: &str, twinkle: &str) -> Settings {
        Settings {
            star_count: parse_field(stars, self.initial.star_count, MIN_STAR_COUNT, MAX_STAR_COUNT),
            speed_pct: parse_field(speed, self.initial.speed_pct, MIN_SPEED_PCT, MAX_SPEED_PCT),
            twinkle_pct: parse_field(
                twinkle,
                self.initial.twinkle_pct,
                MIN_TWINKLE_PCT,
                MAX_TWINKLE_PCT,
            ),
            color: self.color,
        }
        .validated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parsing_clamps_or_falls_back() {
        assert_eq!(parse_field(" 250 ", 7, 10, 300), 250);
        assert_eq!(parse_field("5", 7, 10, 300), 10);
        assert_eq!(parse_field("99999999999999", 7, 10, 300), 300);
        assert_eq!(parse_field("", 7, 10, 300), 7);
        assert_eq!(parse_field("-3", 7, 10, 300), 7);
        assert_eq!(parse_field("abc", 7, 10, 300), 7);
    }

    #[test]
    fn commit_uses_initial_values_for_bad_text() {
        let form = SettingsForm::new(Settings {
            star_count: 900,
            speed_pct: 120,
            twinkle_pct: 45,
            color: Rgb::default(),
        });
        let s = form.commit("lots", "20000", "");
        assert_eq!(s.star_count, 900);
        assert_eq!(s.speed_pct, MAX_SPEED_PCT);
        assert_eq!(s.twinkle_pct, 45);
    }

    #[test]
    fn preset_and_custom_selection() {
        let mut form = SettingsForm::new(Settings::default());
        assert_eq!(form.selected_index(), ColorPreset::WarmWhite.index());

        form.select_index(ColorPreset::Blue.index());
        assert_eq!(form.color(), ColorPreset::Blue.color());

        form.set_color(Rgb::new(1, 2, 3));
        assert_eq!(form.selected_index(), SettingsForm::custom_index());
        form.select_index(SettingsForm::custom_index());
        assert_eq!(form.color(), Rgb::new(1, 2, 3));
        assert_eq!(form.commit("600", "60", "30").color, Rgb::new(1, 2, 3));
    }

    #[test]
    fn custom_swatches_survive_later_picks() {
        let mut form = SettingsForm::new(Settings::default());
        assert!(form.swatches().iter().all(|c| *c == Rgb::new(255, 255, 255)));

        let mut edited = form.swatches();
        edited[0] = Rgb::new(10, 20, 30);
        edited[15] = Rgb::new(40, 50, 60);
        form.keep_swatches(edited);
        form.set_color(Rgb::new(1, 1, 1));
        form.select_index(ColorPreset::Yellow.index());

        assert_eq!(form.swatches()[0], Rgb::new(10, 20, 30));
        assert_eq!(form.swatches()[15], Rgb::new(40, 50, 60));
        assert_eq!(form.commit("600", "60", "30").color, ColorPreset::Yellow.color());
    }

    #[test]
    fn combo_lists_presets_then_custom() {
        let labels: Vec<_> = SettingsForm::combo_labels().collect();
        assert_eq!(labels, ["Warm White", "Cool White", "Blue", "Yellow", "Custom"]);
    }
}
