//! # Color Model
//!
//! This crate provides the value types for working with a single color in the
//! four representations the picker exposes: hex string, RGB, HSL, and HSV,
//! each carrying an alpha channel.
//!
//! The canonical type is [`Color`], which stores HSV internally — the space
//! in which hue-preserving edits (dragging saturation or value while the hue
//! slider stays put) are simplest — and derives the other representations on
//! demand. [`RichColor`] bundles all four at once for consumers that render
//! swatches or labels.
//!
//! Edits arriving from input surfaces are modeled by [`ColorData`]: a
//! source-tagged payload whose fields may be partially typed, empty, or
//! malformed. The predicates on it ([`ColorData::is_complete`],
//! [`ColorData::is_valid`]) never panic; they simply report whether the
//! payload is fit to commit.

use core::fmt::{self, Display};

mod data;
pub use data::{ColorData, Field, Source};
mod hsl;
pub use hsl::Hsla;
mod hsv;
pub use hsv::Hsva;
mod rgb;
pub use rgb::Rgba;

mod parse;
pub use parse::{format_hex, is_valid_hex, parse_hex};

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexColorError {
    /// The provided string does not have 3 or 6 hexadecimal digits.
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    InvalidDigit(usize),
}

impl Display for HexColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("expected 3 or 6 hexadecimal digits"),
            Self::InvalidDigit(index) => {
                write!(f, "invalid hexadecimal digit at byte index {index}")
            }
        }
    }
}

impl core::error::Error for HexColorError {}

/// A color supplied from the outside in any of the four representations.
///
/// The representation is stated by the variant, so the precedence question of
/// loosely-typed inputs (hex over rgb over hsl/hsv) is settled by
/// construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorInput {
    /// A 3- or 6-digit hex string, optional leading `#`.
    Hex(String),
    /// An RGB color.
    Rgb(Rgba),
    /// An HSL color.
    Hsl(Hsla),
    /// An HSV color.
    Hsv(Hsva),
}

impl From<&str> for ColorInput {
    fn from(value: &str) -> Self {
        Self::Hex(value.into())
    }
}

impl From<String> for ColorInput {
    fn from(value: String) -> Self {
        Self::Hex(value)
    }
}

impl From<Rgba> for ColorInput {
    fn from(value: Rgba) -> Self {
        Self::Rgb(value)
    }
}

impl From<Hsla> for ColorInput {
    fn from(value: Hsla) -> Self {
        Self::Hsl(value)
    }
}

impl From<Hsva> for ColorInput {
    fn from(value: Hsva) -> Self {
        Self::Hsv(value)
    }
}

impl From<Color> for ColorInput {
    fn from(value: Color) -> Self {
        Self::Hsv(value.hsv())
    }
}

/// A single color, canonical in HSV, immutable once constructed.
///
/// The other representations are derived on demand; the conversions are a
/// handful of float operations, so nothing is cached. The default is the
/// widget's stock blue, `#0071a1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    hsv: Hsva,
}

impl Color {
    /// Creates a color from an HSV value, normalizing the hue into
    /// `[0, 360)` and clamping saturation, value, and alpha into range.
    #[must_use]
    pub fn new(hsv: Hsva) -> Self {
        Self {
            hsv: Hsva::new(
                normalize_hue(hsv.hue),
                hsv.saturation.clamp(0.0, 100.0),
                hsv.value.clamp(0.0, 100.0),
                hsv.alpha,
            ),
        }
    }

    /// Converts any supported input representation to a canonical color.
    ///
    /// When the input carries no usable hue — a fully desaturated hex or RGB
    /// value, or an HSL/HSV payload whose saturation is zero — the hue is
    /// taken from `fallback_hue` instead of collapsing to zero. This is what
    /// keeps the hue slider from silently jumping to red whenever saturation
    /// drops to nothing.
    ///
    /// Callers are expected to have validated the input first; a hex string
    /// that fails to parse here falls back to opaque black.
    #[must_use]
    pub fn from_input(input: &ColorInput, fallback_hue: Option<f32>) -> Self {
        let mut hsv = match input {
            ColorInput::Hex(hex) => Rgba::from_hex(hex)
                .unwrap_or(Rgba::opaque(0, 0, 0))
                .to_hsva(),
            ColorInput::Rgb(rgba) => rgba.to_hsva(),
            ColorInput::Hsl(hsla) => hsla.to_hsva(),
            ColorInput::Hsv(hsva) => *hsva,
        };

        if hsv.saturation == 0.0 {
            if let Some(hue) = fallback_hue {
                hsv.hue = hue;
            }
        }

        Self::new(hsv)
    }

    /// The canonical HSV value.
    #[must_use]
    pub const fn hsv(&self) -> Hsva {
        self.hsv
    }

    /// The color in RGB form.
    #[must_use]
    pub fn rgb(&self) -> Rgba {
        self.hsv.to_rgba()
    }

    /// The color in HSL form. The hue carries over even when fully
    /// desaturated.
    #[must_use]
    pub fn hsl(&self) -> Hsla {
        self.hsv.to_hsla()
    }

    /// The color as a 6-digit lower-case hex string without a `#`.
    #[must_use]
    pub fn hex(&self) -> String {
        self.rgb().to_hex()
    }

    /// The alpha channel.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.hsv.alpha
    }

    /// Returns a copy of this color with the provided alpha value.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self::new(self.hsv.with_alpha(alpha))
    }

    /// Resolves this color into all four representations at once.
    #[must_use]
    pub fn resolve(&self) -> RichColor {
        let rgb = self.rgb();
        RichColor {
            hex: rgb.to_hex(),
            rgb,
            hsl: self.hsl(),
            hsv: self.hsv,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(Rgba::opaque(0x00, 0x71, 0xa1).to_hsva())
    }
}

impl From<ColorInput> for Color {
    fn from(value: ColorInput) -> Self {
        Self::from_input(&value, None)
    }
}

/// A color exposed simultaneously in hex, RGB, HSL, and HSV form, for
/// consumers that need every view of it at once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RichColor {
    /// 6-digit lower-case hex, no `#`.
    pub hex: String,
    /// RGB form.
    pub rgb: Rgba,
    /// HSL form.
    pub hsl: Hsla,
    /// HSV form.
    pub hsv: Hsva,
}

pub(crate) fn normalize_hue(mut hue: f32) -> f32 {
    hue %= 360.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    hue
}
