use core::str::FromStr;

use crate::{
    HexColorError, Hsla, Hsva,
    parse::{format_hex, parse_hex},
};

/// Represents a display color in the sRGB color space with an alpha channel.
///
/// Channel values are 8-bit integers (0-255); alpha is 0.0 (transparent) to
/// 1.0 (opaque).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red channel (0-255).
    pub red: u8,
    /// Green channel (0-255).
    pub green: u8,
    /// Blue channel (0-255).
    pub blue: u8,
    /// Alpha channel (0.0 = transparent, 1.0 = opaque).
    pub alpha: f32,
}

impl Rgba {
    /// Creates a new color from 8-bit channels and an alpha value.
    ///
    /// Alpha is clamped to the 0.0 to 1.0 range.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Creates a fully opaque color from 8-bit channels.
    #[must_use]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Parses a 3- or 6-digit hexadecimal string (optional leading `#`) into
    /// a fully opaque color.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError`] when the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, HexColorError> {
        let (red, green, blue) = parse_hex(hex)?;
        Ok(Self::opaque(red, green, blue))
    }

    /// Formats the color as a 6-digit lower-case hex string without a `#`.
    ///
    /// The alpha channel is not part of the hex form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format_hex(self.red, self.green, self.blue)
    }

    /// Returns a copy of this color with the provided alpha value.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.red, self.green, self.blue, alpha)
    }

    /// Converts this color to the HSV color space.
    ///
    /// Fully desaturated colors report a hue of 0.
    #[must_use]
    pub fn to_hsva(&self) -> Hsva {
        let r = f32::from(self.red) / 255.0;
        let g = f32::from(self.green) / 255.0;
        let b = f32::from(self.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = rgb_hue(r, g, b, max, delta);
        let saturation = if max == 0.0 { 0.0 } else { delta / max * 100.0 };

        Hsva::new(hue, saturation, max * 100.0, self.alpha)
    }

    /// Converts this color to the HSL color space.
    ///
    /// Fully desaturated colors report a hue of 0.
    #[must_use]
    pub fn to_hsla(&self) -> Hsla {
        let r = f32::from(self.red) / 255.0;
        let g = f32::from(self.green) / 255.0;
        let b = f32::from(self.blue) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = rgb_hue(r, g, b, max, delta);
        let lightness = (max + min) / 2.0;
        let saturation = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * lightness - 1.0).abs()) * 100.0
        };

        Hsla::new(hue, saturation, lightness * 100.0, self.alpha)
    }

    /// Picks black or white, whichever reads legibly on top of this color.
    ///
    /// Uses the YIQ luma approximation with the conventional threshold of 128.
    #[must_use]
    pub const fn contrasting_text_color(&self) -> Self {
        let luma = (299 * self.red as u32 + 587 * self.green as u32 + 114 * self.blue as u32) / 1000;
        if luma >= 128 {
            Self::opaque(0, 0, 0)
        } else {
            Self::opaque(255, 255, 255)
        }
    }
}

// Shared hue sector computation for the HSV/HSL conversions.
fn rgb_hue(r: f32, g: f32, b: f32, max: f32, delta: f32) -> f32 {
    if delta == 0.0 {
        0.0
    } else {
        match max {
            _ if max == r => 60.0 * ((g - b) / delta).rem_euclid(6.0),
            _ if max == g => 60.0 * ((b - r) / delta + 2.0),
            _ => 60.0 * ((r - g) / delta + 4.0),
        }
    }
}

impl From<(u8, u8, u8)> for Rgba {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::opaque(value.0, value.1, value.2)
    }
}

impl From<[u8; 3]> for Rgba {
    fn from(value: [u8; 3]) -> Self {
        Self::opaque(value[0], value[1], value[2])
    }
}

impl FromStr for Rgba {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
