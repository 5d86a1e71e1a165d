use crate::{
    Hsla, Rgba,
    hsl::{channel_u8, hue_sector},
};

/// Represents a color in the HSV color space with an alpha channel.
///
/// This is the picker's canonical space: hue-preserving edits (dragging
/// saturation or value while hue stays put) are plain field updates here.
/// Hue is measured in degrees, saturation and value in percent (0-100),
/// alpha in the 0.0 to 1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsva {
    /// Hue angle in degrees.
    pub hue: f32,
    /// Saturation in percent (0-100).
    pub saturation: f32,
    /// Value (brightness) in percent (0-100).
    pub value: f32,
    /// Alpha channel (0.0 = transparent, 1.0 = opaque).
    pub alpha: f32,
}

impl Hsva {
    /// Creates a new HSV color from its components.
    ///
    /// Alpha is clamped to the 0.0 to 1.0 range.
    #[must_use]
    pub const fn new(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Converts this color to the RGB color space.
    #[must_use]
    pub fn to_rgba(&self) -> Rgba {
        let h = self.hue.rem_euclid(360.0);
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let v = (self.value / 100.0).clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r1, g1, b1) = hue_sector(h, c, x);

        Rgba::new(
            channel_u8(r1 + m),
            channel_u8(g1 + m),
            channel_u8(b1 + m),
            self.alpha,
        )
    }

    /// Converts this color to the HSL color space, preserving the hue even
    /// when the color is fully desaturated.
    #[must_use]
    pub fn to_hsla(&self) -> Hsla {
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let v = (self.value / 100.0).clamp(0.0, 1.0);

        let l = v * (1.0 - s / 2.0);
        let sl = if l == 0.0 || l == 1.0 {
            0.0
        } else {
            (v - l) / l.min(1.0 - l)
        };

        Hsla::new(self.hue, sl * 100.0, l * 100.0, self.alpha)
    }

    /// Returns a copy of this color with the provided alpha value.
    #[must_use]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.hue, self.saturation, self.value, alpha)
    }
}
