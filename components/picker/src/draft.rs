//! Display-only snapshots of the picker's three input groups.

use tintui_color::{Color, Field};

/// The RGB input group's current contents, verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RgbDraft {
    /// Red channel field.
    pub r: Field,
    /// Green channel field.
    pub g: Field,
    /// Blue channel field.
    pub b: Field,
    /// Alpha field.
    pub a: Field,
}

/// The HSL input group's current contents, verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HslDraft {
    /// Hue field.
    pub h: Field,
    /// Saturation field.
    pub s: Field,
    /// Lightness field.
    pub l: Field,
    /// Alpha field.
    pub a: Field,
}

/// The three independent draft snapshots backing the text inputs.
///
/// Each group shows exactly what was last typed into it — possibly empty,
/// out of range, or malformed — and is never validated against the others.
/// Immediately after a successful commit all three agree with the committed
/// color; they diverge only while one group is being edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Drafts {
    /// The hex field's text, lower-cased.
    pub hex: String,
    /// The RGB group.
    pub rgb: RgbDraft,
    /// The HSL group.
    pub hsl: HslDraft,
}

impl Drafts {
    /// Builds draft snapshots that agree with `color`.
    #[must_use]
    pub fn synced_to(color: &Color) -> Self {
        let mut drafts = Self::default();
        drafts.resync(color);
        drafts
    }

    /// Overwrites every group with the committed color's values.
    ///
    /// HSL components are rounded to whole numbers for display; the
    /// committed color keeps its full precision.
    pub fn resync(&mut self, color: &Color) {
        let rgb = color.rgb();
        let hsl = color.hsl();

        self.hex = rgb.to_hex();
        self.rgb = RgbDraft {
            r: Field::from(rgb.red),
            g: Field::from(rgb.green),
            b: Field::from(rgb.blue),
            a: Field::Number(rgb.alpha),
        };
        self.hsl = HslDraft {
            h: Field::Number(hsl.hue.round()),
            s: Field::Number(hsl.saturation.round()),
            l: Field::Number(hsl.lightness.round()),
            a: Field::Number(hsl.alpha),
        };
    }
}
