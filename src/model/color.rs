//! Star colors and the presets offered in the settings form.

use super::constants::DEFAULT_COLOR;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels normalised to [0.0, 1.0].
    pub fn to_f32(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Scale every channel by `factor`, saturating at 255.
    pub fn scaled(self, factor: f32) -> Rgb {
        let f = if factor.is_finite() { factor.max(0.0) } else { 0.0 };
        let ch = |c: u8| (c as f32 * f).round().min(255.0) as u8;
        Rgb::new(ch(self.r), ch(self.g), ch(self.b))
    }

    /// Pack as 0x00RRGGBB, the layout of a 32-bit top-down DIB.
    pub fn to_xrgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Convert from a Win32 COLORREF value (0x00BBGGRR).
    pub fn from_colorref(value: u32) -> Rgb {
        Rgb::new(
            (value & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
        )
    }

    /// Convert to a Win32 COLORREF value (0x00BBGGRR).
    pub fn to_colorref(self) -> u32 {
        self.r as u32 | ((self.g as u32) << 8) | ((self.b as u32) << 16)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Rgb::new(DEFAULT_COLOR.0, DEFAULT_COLOR.1, DEFAULT_COLOR.2)
    }
}

/// Named colors listed in the settings combo box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPreset {
    WarmWhite,
    CoolWhite,
    Blue,
    Yellow,
}

impl ColorPreset {
    /// Presets in combo box order.
    pub const ALL: [ColorPreset; 4] = [
        ColorPreset::WarmWhite,
        ColorPreset::CoolWhite,
        ColorPreset::Blue,
        ColorPreset::Yellow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorPreset::WarmWhite => "Warm White",
            ColorPreset::CoolWhite => "Cool White",
            ColorPreset::Blue => "Blue",
            ColorPreset::Yellow => "Yellow",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            ColorPreset::WarmWhite => Rgb::new(255, 255, 240),
            ColorPreset::CoolWhite => Rgb::new(200, 200, 255),
            ColorPreset::Blue => Rgb::new(160, 180, 255),
            ColorPreset::Yellow => Rgb::new(255, 240, 180),
        }
    }

    /// The preset whose color is exactly `color`, if any.
    pub fn matching(color: Rgb) -> Option<ColorPreset> {
        Self::ALL.into_iter().find(|p| p.color() == color)
    }

    /// Combo box index of this preset.
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<ColorPreset> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_is_warm_white_preset() {
        assert_eq!(ColorPreset::matching(Rgb::default()), Some(ColorPreset::WarmWhite));
    }

    #[test]
    fn colorref_roundtrip_keeps_channel_order() {
        let c = Rgb::new(0x12, 0x34, 0x56);
        assert_eq!(c.to_colorref(), 0x0056_3412);
        assert_eq!(Rgb::from_colorref(0x0056_3412), c);
    }

    #[test]
    fn scaled_saturates_and_rejects_nan() {
        let c = Rgb::new(200, 100, 0);
        assert_eq!(c.scaled(2.0), Rgb::new(255, 200, 0));
        assert_eq!(c.scaled(f32::NAN), Rgb::BLACK);
        assert_eq!(c.scaled(-1.0), Rgb::BLACK);
    }

    #[test]
    fn preset_index_roundtrip() {
        for p in ColorPreset::ALL {
            assert_eq!(ColorPreset::from_index(p.index()), Some(p));
        }
        assert_eq!(ColorPreset::from_index(9), None);
    }
}
