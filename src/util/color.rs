//! Color types and the backdrop palette.
//!
//! Colors are stored as 8-bit sRGB so palette entries stay `const` and
//! serialize as the familiar `#RRGGBB` strings in TOML presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    /// Components scaled to `[0, 1]`.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }

    /// Attach an alpha value.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba { rgb: self, alpha }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(format!("expected #RRGGBB, got {s:?}"));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::hex)
            .map_err(|e| format!("invalid hex color {s:?}: {e}"))
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    /// Color channels.
    pub rgb: Rgb,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

impl Rgba {
    /// Components scaled to `[0, 1]`, alpha last.
    #[must_use]
    pub fn to_array(self) -> [f32; 4] {
        let [r, g, b] = self.rgb.to_array();
        [r, g, b, self.alpha]
    }
}

/// Convert HSL (all components in `[0, 1]`) to linear `[r, g, b]`.
#[must_use]
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Site palette shared by every scene element.
pub mod palette {
    use super::Rgb;

    /// Primary accent.
    pub const BLUE: Rgb = Rgb::hex(0x4EA8FF);
    /// Secondary accent.
    pub const LIME: Rgb = Rgb::hex(0xA3FF12);
    /// Tertiary accent.
    pub const CORAL: Rgb = Rgb::hex(0xFF7A59);
    /// Dark slate used by the static backdrop and the robot torso.
    pub const SLATE_900: Rgb = Rgb::hex(0x0F172A);
    /// Mid slate used by the static backdrop and the robot torso.
    pub const SLATE_800: Rgb = Rgb::hex(0x1E293B);
    /// Robot head.
    pub const SLATE_700: Rgb = Rgb::hex(0x334155);
    /// Robot limbs.
    pub const SLATE_600: Rgb = Rgb::hex(0x475569);
    /// Network connection lines.
    pub const GRAY_LINE: Rgb = Rgb::hex(0x666666);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_unpacks_channels() {
        assert_eq!(palette::BLUE, Rgb { r: 0x4E, g: 0xA8, b: 0xFF });
        assert_eq!(palette::BLUE.to_string(), "#4EA8FF");
    }

    #[test]
    fn parse_accepts_with_and_without_hash() {
        assert_eq!("#A3FF12".parse::<Rgb>(), Ok(palette::LIME));
        assert_eq!("ff7a59".parse::<Rgb>(), Ok(palette::CORAL));
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#GGGGGG".parse::<Rgb>().is_err());
    }

    #[test]
    fn grayscale_hsl_ignores_hue() {
        assert_eq!(hsl_to_rgb(0.3, 0.0, 0.9), [0.9, 0.9, 0.9]);
        assert_eq!(hsl_to_rgb(0.7, 0.0, 0.9), [0.9, 0.9, 0.9]);
    }

    #[test]
    fn saturated_hsl_primaries() {
        let red = hsl_to_rgb(0.0, 1.0, 0.5);
        assert!((red[0] - 1.0).abs() < 1e-6);
        assert!(red[1].abs() < 1e-6);
        assert!(red[2].abs() < 1e-6);

        let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
        assert!((green[1] - 1.0).abs() < 1e-5);
        assert!(green[0].abs() < 1e-5);
    }
}
