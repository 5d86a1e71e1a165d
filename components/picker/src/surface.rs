//! Pointer geometry for the saturation pad and the hue/alpha strips.
//!
//! The surfaces themselves are views; what they share is the arithmetic from
//! a pointer position to a committing edit. Positions are clamped to the
//! surface bounds, so drags that leave the control keep producing edge
//! values.

use tintui_color::{ColorData, Hsla};

fn fraction(position: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        (position / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Converts a pointer position on the saturation/value pad into a committing
/// edit.
///
/// `x` and `y` are relative to the pad's top-left corner; saturation grows to
/// the right, value grows upward. The hue is pinned from `current` so the
/// drag never re-derives it, and alpha carries over.
#[must_use]
pub fn saturation_change(x: f32, y: f32, width: f32, height: f32, current: &Hsla) -> ColorData {
    let s = fraction(x, width) * 100.0;
    let v = (1.0 - fraction(y, height)) * 100.0;
    ColorData::hsv(current.hue, s, v).with_alpha(current.alpha)
}

/// Converts a pointer position on the horizontal hue strip into a committing
/// edit: 0° at the left edge, 360° at the right. Saturation, lightness, and
/// alpha carry over from `current`.
#[must_use]
pub fn hue_change(x: f32, width: f32, current: &Hsla) -> ColorData {
    let h = fraction(x, width) * 360.0;
    ColorData::hsl(h, current.saturation, current.lightness).with_alpha(current.alpha)
}

/// Converts a pointer position on the horizontal alpha strip into a
/// committing edit, with the alpha rounded to two decimals. The color
/// channels carry over from `current`.
#[must_use]
pub fn alpha_change(x: f32, width: f32, current: &Hsla) -> ColorData {
    let a = (fraction(x, width) * 100.0).round() / 100.0;
    ColorData::hsl(current.hue, current.saturation, current.lightness).with_alpha(a)
}

#[cfg(test)]
mod tests {
    use tintui_color::Field;

    use super::*;

    const CURRENT: Hsla = Hsla::new(200.0, 50.0, 50.0, 0.8);

    #[test]
    fn pad_positions_map_to_saturation_and_value() {
        let ColorData::Hsv { h, s, v, a } = saturation_change(50.0, 25.0, 100.0, 100.0, &CURRENT)
        else {
            panic!("expected an hsv edit");
        };
        assert_eq!(h, Field::Number(200.0));
        assert_eq!(s, Field::Number(50.0));
        assert_eq!(v, Field::Number(75.0));
        assert_eq!(a, Field::Number(0.8));
    }

    #[test]
    fn pad_positions_clamp_to_the_bounds() {
        let ColorData::Hsv { s, v, .. } = saturation_change(-10.0, 500.0, 100.0, 100.0, &CURRENT)
        else {
            panic!("expected an hsv edit");
        };
        assert_eq!(s, Field::Number(0.0));
        assert_eq!(v, Field::Number(0.0));

        let ColorData::Hsv { s, v, .. } = saturation_change(500.0, -10.0, 100.0, 100.0, &CURRENT)
        else {
            panic!("expected an hsv edit");
        };
        assert_eq!(s, Field::Number(100.0));
        assert_eq!(v, Field::Number(100.0));
    }

    #[test]
    fn hue_strip_spans_the_circle() {
        let ColorData::Hsl { h, s, l, a } = hue_change(120.0, 360.0, &CURRENT) else {
            panic!("expected an hsl edit");
        };
        assert_eq!(h, Field::Number(120.0));
        assert_eq!(s, Field::Number(50.0));
        assert_eq!(l, Field::Number(50.0));
        assert_eq!(a, Field::Number(0.8));
    }

    #[test]
    fn alpha_strip_rounds_to_two_decimals() {
        let ColorData::Hsl { a, .. } = alpha_change(100.0 / 3.0, 100.0, &CURRENT) else {
            panic!("expected an hsl edit");
        };
        assert_eq!(a, Field::Number(0.33));
    }

    #[test]
    fn zero_sized_surfaces_produce_edge_values() {
        let ColorData::Hsv { s, v, .. } = saturation_change(10.0, 10.0, 0.0, 0.0, &CURRENT)
        else {
            panic!("expected an hsv edit");
        };
        assert_eq!(s, Field::Number(0.0));
        assert_eq!(v, Field::Number(100.0));
    }
}
