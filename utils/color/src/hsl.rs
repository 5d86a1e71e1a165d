use crate::{Hsva, Rgba};

/// Represents a color in the HSL color space with an alpha channel.
///
/// Hue is measured in degrees, saturation and lightness in percent (0-100),
/// alpha in the 0.0 to 1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsla {
    /// Hue angle in degrees.
    pub hue: f32,
    /// Saturation in percent (0-100).
    pub saturation: f32,
    /// Lightness in percent (0-100).
    pub lightness: f32,
    /// Alpha channel (0.0 = transparent, 1.0 = opaque).
    pub alpha: f32,
}

impl Hsla {
    /// Creates a new HSL color from its components.
    ///
    /// Alpha is clamped to the 0.0 to 1.0 range.
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Converts this color to the RGB color space.
    #[must_use]
    pub fn to_rgba(&self) -> Rgba {
        // https://www.rapidtables.com/convert/color/hsl-to-rgb.html
        let h = self.hue.rem_euclid(360.0);
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r1, g1, b1) = hue_sector(h, c, x);

        Rgba::new(
            channel_u8(r1 + m),
            channel_u8(g1 + m),
            channel_u8(b1 + m),
            self.alpha,
        )
    }

    /// Converts this color to the HSV color space, preserving the hue even
    /// when the color is fully desaturated.
    #[must_use]
    pub fn to_hsva(&self) -> Hsva {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        let v = l + s * l.min(1.0 - l);
        let sv = if v == 0.0 { 0.0 } else { 2.0 * (1.0 - l / v) };

        Hsva::new(self.hue, sv * 100.0, v * 100.0, self.alpha)
    }

    /// Returns a copy of this color with the provided alpha value.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.hue, self.saturation, self.lightness, alpha)
    }
}

pub(crate) fn hue_sector(h: f32, c: f32, x: f32) -> (f32, f32, f32) {
    if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    }
}

pub(crate) fn channel_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5).floor() as u8
}
