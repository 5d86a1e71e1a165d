use core::fmt::{self, Display};

use crate::{ColorInput, Hsla, Hsva, Rgba, parse::is_valid_hex};

/// One channel value exactly as an input surface delivered it.
///
/// Sliders and pads produce numbers; text fields produce whatever was typed,
/// including the empty string and not-yet-numeric fragments. A `Field` keeps
/// that verbatim so draft echoes never "correct" the user mid-keystroke.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// Nothing entered.
    #[default]
    Empty,
    /// A numeric value from a slider, pad, or resynchronized draft.
    Number(f32),
    /// Verbatim text from an input field; may not parse as a number.
    Text(String),
}

impl Field {
    /// Returns `true` when the field holds no usable content (nothing
    /// entered, or only whitespace).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Number(_) => false,
            Self::Text(text) => text.trim().is_empty(),
        }
    }

    /// Interprets the field as a finite number, if it is one.
    #[must_use]
    pub fn as_number(&self) -> Option<f32> {
        match self {
            Self::Empty => None,
            Self::Number(n) => Some(*n).filter(|n| n.is_finite()),
            Self::Text(text) => text.trim().parse::<f32>().ok().filter(|n| n.is_finite()),
        }
    }

    /// A non-empty field passes when it parses and lands inside `0..=max`;
    /// an empty field passes vacuously (completeness is checked separately).
    fn within(&self, max: f32) -> bool {
        if self.is_empty() {
            return true;
        }
        self.as_number().is_some_and(|n| n >= 0.0 && n <= max)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<f32> for Field {
    fn from(value: f32) -> Self {
        Self::Number(value)
    }
}

impl From<u8> for Field {
    fn from(value: u8) -> Self {
        Self::Number(f32::from(value))
    }
}

impl From<i32> for Field {
    fn from(value: i32) -> Self {
        Self::Number(value as f32)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// The input group an edit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The hex text field.
    Hex,
    /// The RGB field group.
    Rgb,
    /// The HSL field group.
    Hsl,
    /// The saturation/value pad (no text surface).
    Hsv,
}

/// One edit emitted by an input surface, tagged with its source group.
///
/// Numeric fields are [`Field`]s so a payload can carry partially-typed or
/// out-of-range content; the predicates below decide whether it is fit to
/// commit. The alpha field is optional everywhere and defaults to opaque
/// when resolved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorData {
    /// A hex string edit.
    Hex {
        /// The typed hex string, with or without a leading `#`.
        hex: String,
    },
    /// An RGB field-group edit.
    Rgb {
        /// Red channel (0-255).
        r: Field,
        /// Green channel (0-255).
        g: Field,
        /// Blue channel (0-255).
        b: Field,
        /// Alpha (0-1).
        a: Field,
    },
    /// An HSL field-group edit.
    Hsl {
        /// Hue in degrees (0-360).
        h: Field,
        /// Saturation in percent (0-100).
        s: Field,
        /// Lightness in percent (0-100).
        l: Field,
        /// Alpha (0-1).
        a: Field,
    },
    /// A saturation/value pad edit.
    Hsv {
        /// Hue in degrees (0-360).
        h: Field,
        /// Saturation in percent (0-100).
        s: Field,
        /// Value in percent (0-100).
        v: Field,
        /// Alpha (0-1).
        a: Field,
    },
}

impl ColorData {
    /// Creates a hex edit.
    pub fn hex(hex: impl Into<String>) -> Self {
        Self::Hex { hex: hex.into() }
    }

    /// Creates an RGB edit with no alpha.
    pub fn rgb(r: impl Into<Field>, g: impl Into<Field>, b: impl Into<Field>) -> Self {
        Self::Rgb {
            r: r.into(),
            g: g.into(),
            b: b.into(),
            a: Field::Empty,
        }
    }

    /// Creates an HSL edit with no alpha.
    pub fn hsl(h: impl Into<Field>, s: impl Into<Field>, l: impl Into<Field>) -> Self {
        Self::Hsl {
            h: h.into(),
            s: s.into(),
            l: l.into(),
            a: Field::Empty,
        }
    }

    /// Creates an HSV edit with no alpha.
    pub fn hsv(h: impl Into<Field>, s: impl Into<Field>, v: impl Into<Field>) -> Self {
        Self::Hsv {
            h: h.into(),
            s: s.into(),
            v: v.into(),
            a: Field::Empty,
        }
    }

    /// Returns a copy of this edit carrying the provided alpha field.
    ///
    /// Hex edits have no alpha slot and are returned unchanged.
    #[must_use]
    pub fn with_alpha(mut self, alpha: impl Into<Field>) -> Self {
        match &mut self {
            Self::Hex { .. } => {}
            Self::Rgb { a, .. } | Self::Hsl { a, .. } | Self::Hsv { a, .. } => *a = alpha.into(),
        }
        self
    }

    /// The input group this edit came from.
    #[must_use]
    pub const fn source(&self) -> Source {
        match self {
            Self::Hex { .. } => Source::Hex,
            Self::Rgb { .. } => Source::Rgb,
            Self::Hsl { .. } => Source::Hsl,
            Self::Hsv { .. } => Source::Hsv,
        }
    }

    /// The explicit hue carried by this edit, used to pin the hue across a
    /// desaturating change.
    ///
    /// A hue of exactly zero counts as unpinned: the strips never report a
    /// bare zero for an intentional red, they carry saturation alongside it,
    /// and treating zero as "unset" keeps a desaturated edit from snapping
    /// the hue slider back to red.
    #[must_use]
    pub fn hue(&self) -> Option<f32> {
        match self {
            Self::Hex { .. } | Self::Rgb { .. } => None,
            Self::Hsl { h, .. } | Self::Hsv { h, .. } => {
                h.as_number().filter(|hue| *hue != 0.0)
            }
        }
    }

    /// Returns `true` when every required field for this source is present
    /// and non-empty — "the user has filled in enough to attempt
    /// validation," which is distinct from the values being correct.
    ///
    /// Alpha is never required.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Hex { hex } => !hex.trim().is_empty(),
            Self::Rgb { r, g, b, .. } => !r.is_empty() && !g.is_empty() && !b.is_empty(),
            Self::Hsl { h, s, l, .. } => !h.is_empty() && !s.is_empty() && !l.is_empty(),
            Self::Hsv { h, s, v, .. } => !h.is_empty() && !s.is_empty() && !v.is_empty(),
        }
    }

    /// Returns `true` when the declared fields hold acceptable values.
    ///
    /// Hex delegates to [`is_valid_hex`]. Numeric sources check each
    /// non-empty field on its own — parseable, non-negative, within the
    /// channel's maximum — without requiring the channels in lock-step, so a
    /// single out-of-range channel is enough to reject. Never panics.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Hex { hex } => is_valid_hex(hex),
            Self::Rgb { r, g, b, a } => {
                r.within(255.0) && g.within(255.0) && b.within(255.0) && a.within(1.0)
            }
            Self::Hsl { h, s, l, a } => {
                h.within(360.0) && s.within(100.0) && l.within(100.0) && a.within(1.0)
            }
            Self::Hsv { h, s, v, a } => {
                h.within(360.0) && s.within(100.0) && v.within(100.0) && a.within(1.0)
            }
        }
    }

    /// Resolves a complete, valid edit into a typed color input.
    ///
    /// Returns `None` when [`is_complete`](Self::is_complete) or
    /// [`is_valid`](Self::is_valid) would fail. An empty alpha resolves to
    /// fully opaque.
    #[must_use]
    pub fn to_input(&self) -> Option<ColorInput> {
        if !self.is_complete() || !self.is_valid() {
            return None;
        }

        let input = match self {
            Self::Hex { hex } => ColorInput::Hex(hex.clone()),
            Self::Rgb { r, g, b, a } => ColorInput::Rgb(Rgba::new(
                round_u8(r.as_number()?),
                round_u8(g.as_number()?),
                round_u8(b.as_number()?),
                alpha_or_opaque(a),
            )),
            Self::Hsl { h, s, l, a } => ColorInput::Hsl(Hsla::new(
                h.as_number()?,
                s.as_number()?,
                l.as_number()?,
                alpha_or_opaque(a),
            )),
            Self::Hsv { h, s, v, a } => ColorInput::Hsv(Hsva::new(
                h.as_number()?,
                s.as_number()?,
                v.as_number()?,
                alpha_or_opaque(a),
            )),
        };
        Some(input)
    }
}

fn alpha_or_opaque(a: &Field) -> f32 {
    a.as_number().unwrap_or(1.0)
}

fn round_u8(value: f32) -> u8 {
    (value.clamp(0.0, 255.0) + 0.5).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parses_numbers_and_text() {
        assert_eq!(Field::Number(42.0).as_number(), Some(42.0));
        assert_eq!(Field::from(" 42 ").as_number(), Some(42.0));
        assert_eq!(Field::from("12x").as_number(), None);
        assert_eq!(Field::Empty.as_number(), None);
        assert_eq!(Field::Number(f32::NAN).as_number(), None);
    }

    #[test]
    fn field_emptiness_treats_whitespace_as_empty() {
        assert!(Field::Empty.is_empty());
        assert!(Field::from("   ").is_empty());
        assert!(!Field::from("0").is_empty());
        assert!(!Field::Number(0.0).is_empty());
    }

    #[test]
    fn field_displays_verbatim() {
        assert_eq!(Field::from("a3").to_string(), "a3");
        assert_eq!(Field::Number(50.0).to_string(), "50");
        assert_eq!(Field::Empty.to_string(), "");
    }

    #[test]
    fn completeness_requires_every_channel_but_not_alpha() {
        assert!(ColorData::rgb(1, 2, 3).is_complete());
        assert!(!ColorData::rgb(1, 2, Field::Empty).is_complete());
        assert!(!ColorData::hex("").is_complete());
        assert!(ColorData::hsl(200.0, 50.0, 50.0).is_complete());
        assert!(!ColorData::Hsl {
            h: Field::from("200"),
            s: Field::Empty,
            l: Field::from("50"),
            a: Field::Empty,
        }
        .is_complete());
    }

    #[test]
    fn validity_rejects_per_channel() {
        assert!(ColorData::rgb(0, 128, 255).is_valid());
        assert!(!ColorData::rgb(Field::from("300"), 0, 0).is_valid());
        assert!(!ColorData::rgb(Field::from("-1"), 0, 0).is_valid());
        assert!(!ColorData::rgb(Field::from("12x"), 0, 0).is_valid());
        assert!(!ColorData::hsl(400.0, 50.0, 50.0).is_valid());
        assert!(!ColorData::hsl(200.0, 150.0, 50.0).is_valid());
        assert!(!ColorData::rgb(1, 2, 3).with_alpha(1.5).is_valid());
    }

    #[test]
    fn partially_empty_payload_can_still_be_judged() {
        // Out-of-range lightness is rejected even while hue is still empty.
        let partial = ColorData::Hsl {
            h: Field::Empty,
            s: Field::from("50"),
            l: Field::from("500"),
            a: Field::Empty,
        };
        assert!(!partial.is_valid());
        assert!(!partial.is_complete());
    }

    #[test]
    fn hex_validity_matches_the_predicate() {
        assert!(ColorData::hex("#0071a1").is_valid());
        assert!(ColorData::hex("abc").is_valid());
        assert!(!ColorData::hex("zz").is_valid());
    }

    #[test]
    fn resolution_defaults_alpha_to_opaque() {
        let Some(ColorInput::Rgb(rgba)) = ColorData::rgb(10, 20, 30).to_input() else {
            panic!("expected rgb input");
        };
        assert_eq!(rgba.alpha, 1.0);

        let Some(ColorInput::Rgb(rgba)) = ColorData::rgb(10, 20, 30).with_alpha(0.25).to_input()
        else {
            panic!("expected rgb input");
        };
        assert_eq!(rgba.alpha, 0.25);
    }

    #[test]
    fn resolution_refuses_invalid_payloads() {
        assert_eq!(ColorData::hex("zz").to_input(), None);
        assert_eq!(ColorData::rgb(Field::from("300"), 0, 0).to_input(), None);
        assert_eq!(ColorData::rgb(Field::Empty, 0, 0).to_input(), None);
    }

    #[test]
    fn hue_pin_ignores_zero() {
        assert_eq!(ColorData::hsl(200.0, 0.0, 50.0).hue(), Some(200.0));
        assert_eq!(ColorData::hsl(0.0, 0.0, 50.0).hue(), None);
        assert_eq!(ColorData::rgb(1, 2, 3).hue(), None);
        assert_eq!(ColorData::hex("0071a1").hue(), None);
    }
}
