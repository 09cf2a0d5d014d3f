//! Conversions from 8-bit sRGB colors to their HEX, HSL, and OKLCH text forms.
//!
//! OKLCH is available through two routes that do not agree numerically:
//! - [`to_oklch`] goes through linear sRGB and the OKLab matrices. This is the accurate one.
//! - [`to_oklch_approx`] goes through CIELAB (D65) and reads the LCh polar form of that
//!   as if it were OKLCH, scaled to OKLCH-like ranges. It is only an approximation.

use palette::{Hsl, IntoColor, Lab, LinSrgb, Oklab, Srgb};

/// Replaces NaN and infinities with `0.0`.
#[inline]
fn finite_or_zero(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Maps negative values (including `-0.0`) and non-finite values to `0.0`.
#[inline]
fn non_negative(value: f32) -> f32 {
    if value > 0.0 && value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Returns the angle of `(a, b)` in degrees, in `[0, 360)`.
#[inline]
fn hue_degrees(a: f32, b: f32) -> f32 {
    let hue = finite_or_zero(b.atan2(a).to_degrees()).rem_euclid(360.0);
    if hue >= 360.0 || hue <= 0.0 {
        0.0
    } else {
        hue
    }
}

/// Rounds `hue` to `decimals` places, folding a rounded `360` back to `0`.
#[inline]
fn round_hue(hue: f32, decimals: i32) -> f32 {
    let scale = 10f32.powi(decimals);
    let rounded = (hue * scale).round() / scale;
    if rounded >= 360.0 || rounded <= 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Converts a possibly out of range or non-finite channel value to a `u8`.
///
/// Non-finite values become `0`, everything else is clamped to `0.0..=255.0` and rounded.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn sanitize_channel(value: f64) -> u8 {
    if value.is_finite() {
        value.clamp(0.0, 255.0).round() as u8
    } else {
        0
    }
}

/// Creates an 8-bit sRGB color from floating point channels, see [`sanitize_channel`].
#[must_use]
pub fn srgb_from_f64(components: [f64; 3]) -> Srgb<u8> {
    let [red, green, blue] = components.map(sanitize_channel);
    Srgb::new(red, green, blue)
}

/// Formats a color as `#rrggbb` with lowercase hex digits.
#[must_use]
pub fn to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Returns the hue in whole degrees (`0..360`), and the saturation and lightness in whole percent.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_components(color: Srgb<u8>) -> (u16, u8, u8) {
    let hsl: Hsl = color.into_format::<f32>().into_color();

    let hue = round_hue(finite_or_zero(hsl.hue.into_positive_degrees()), 0);
    let percent = |v: f32| (non_negative(v) * 100.0).round().min(100.0);

    (
        hue as u16,
        percent(hsl.saturation) as u8,
        percent(hsl.lightness) as u8,
    )
}

/// Formats a color as `hsl(H, S%, L%)`.
///
/// ```
/// # use huepick::convert::to_hsl;
/// # use palette::Srgb;
/// assert_eq!(to_hsl(Srgb::new(0, 255, 0)), "hsl(120, 100%, 50%)");
/// ```
#[must_use]
pub fn to_hsl(color: Srgb<u8>) -> String {
    let (h, s, l) = hsl_components(color);
    format!("hsl({h}, {s}%, {l}%)")
}

/// Converts a color to OKLab through linear sRGB.
#[must_use]
pub fn to_oklab(color: Srgb<u8>) -> Oklab {
    let linear: LinSrgb = color.into_linear();
    linear.into_color()
}

/// Returns the OKLCH lightness, chroma, and hue (in degrees, `[0, 360)`) of a color.
///
/// All three are non-negative and finite.
#[must_use]
pub fn oklch_components(color: Srgb<u8>) -> [f32; 3] {
    let oklab = to_oklab(color);
    let (l, a, b) = (oklab.l, oklab.a, oklab.b);
    [
        non_negative(l),
        non_negative(a.hypot(b)),
        hue_degrees(finite_or_zero(a), finite_or_zero(b)),
    ]
}

/// Formats a color as `oklch(L C Hdeg)`, with `L` and `C` to three decimals and `H` to one.
#[must_use]
pub fn to_oklch(color: Srgb<u8>) -> String {
    let [l, c, h] = oklch_components(color);
    format!("oklch({l:.3} {c:.3} {:.1}deg)", round_hue(h, 1))
}

/// Converts a color to CIELAB with a D65 white point.
#[must_use]
pub fn to_lab(color: Srgb<u8>) -> Lab {
    let linear: LinSrgb = color.into_linear();
    linear.into_color()
}

/// Formats a CIELAB color as an OKLCH-shaped string.
///
/// Lightness and chroma are divided by `100` and the hue is the LCh hue angle.
/// This is only an approximation of [`to_oklch`] and the two will differ.
#[must_use]
pub fn lab_to_oklch(lab: Lab) -> String {
    let Lab { l, a, b, .. } = lab;
    let (a, b) = (finite_or_zero(a), finite_or_zero(b));

    let l = non_negative(l / 100.0);
    let c = non_negative(a.hypot(b) / 100.0);
    let h = round_hue(hue_degrees(a, b), 1);

    format!("oklch({l:.3} {c:.3} {h:.1}deg)")
}

/// Formats a color as an approximate OKLCH string by way of CIELAB.
///
/// See [`lab_to_oklch`].
#[must_use]
pub fn to_oklch_approx(color: Srgb<u8>) -> String {
    lab_to_oklch(to_lab(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    fn is_hex(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s.bytes()
                .skip(1)
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
    }

    #[test]
    fn hex_round_trips() {
        for color in test_data_1024() {
            let hex = to_hex(color);
            assert!(is_hex(&hex), "{hex}");

            let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2).unwrap_or_default(), 16);
            assert_eq!(channel(1), Ok(color.red));
            assert_eq!(channel(3), Ok(color.green));
            assert_eq!(channel(5), Ok(color.blue));
        }
    }

    #[test]
    fn hex_known_values() {
        assert_eq!(to_hex(Srgb::new(0, 0, 0)), "#000000");
        assert_eq!(to_hex(Srgb::new(255, 255, 255)), "#ffffff");
        assert_eq!(to_hex(Srgb::new(171, 205, 239)), "#abcdef");
    }

    #[test]
    fn sanitized_channels() {
        assert_eq!(sanitize_channel(f64::NAN), 0);
        assert_eq!(sanitize_channel(f64::INFINITY), 0);
        assert_eq!(sanitize_channel(-20.0), 0);
        assert_eq!(sanitize_channel(300.0), 255);
        assert_eq!(sanitize_channel(127.5), 128);
        assert_eq!(to_hex(srgb_from_f64([f64::NAN, 999.0, 15.2])), "#00ff0f");
    }

    #[test]
    fn hsl_known_values() {
        assert_eq!(to_hsl(Srgb::new(255, 0, 0)), "hsl(0, 100%, 50%)");
        assert_eq!(to_hsl(Srgb::new(0, 255, 0)), "hsl(120, 100%, 50%)");
        assert_eq!(to_hsl(Srgb::new(0, 0, 255)), "hsl(240, 100%, 50%)");
        assert_eq!(to_hsl(Srgb::new(0, 0, 0)), "hsl(0, 0%, 0%)");
        assert_eq!(to_hsl(Srgb::new(255, 255, 255)), "hsl(0, 0%, 100%)");
    }

    #[test]
    fn hsl_ranges() {
        for color in test_data_1024() {
            let (h, s, l) = hsl_components(color);
            assert!(h < 360);
            assert!(s <= 100);
            assert!(l <= 100);
        }
    }

    #[test]
    fn oklch_black_and_white() {
        assert!(to_oklch(Srgb::new(0, 0, 0)).starts_with("oklch(0.000 0.000 "));
        assert!(to_oklch(Srgb::new(255, 255, 255)).starts_with("oklch(1.000 0.000 "));
    }

    #[test]
    fn oklch_red() {
        // reference values from Björn Ottosson's OKLab definition
        let [l, c, h] = oklch_components(Srgb::new(255, 0, 0));
        assert!((l - 0.628).abs() < 1e-3, "{l}");
        assert!((c - 0.258).abs() < 1e-3, "{c}");
        assert!((h - 29.23).abs() < 0.1, "{h}");
    }

    #[test]
    fn oklch_shape() {
        for color in test_data_256() {
            let s = to_oklch(color);
            let inner = s
                .strip_prefix("oklch(")
                .and_then(|s| s.strip_suffix("deg)"))
                .unwrap_or_default();

            let parts = inner.split(' ').collect::<Vec<_>>();
            assert_eq!(parts.len(), 3, "{s}");

            let values = parts
                .iter()
                .map(|p| p.parse::<f32>().unwrap_or(-1.0))
                .collect::<Vec<_>>();
            assert!(values.iter().all(|&v| v >= 0.0), "{s}");
            assert!(values[2] < 360.0, "{s}");
            assert_eq!(parts[0].split('.').nth(1).map(str::len), Some(3));
            assert_eq!(parts[1].split('.').nth(1).map(str::len), Some(3));
            assert_eq!(parts[2].split('.').nth(1).map(str::len), Some(1));
        }
    }

    #[test]
    fn lab_white_point() {
        let white = to_lab(Srgb::new(255, 255, 255));
        assert!((white.l - 100.0).abs() < 0.01, "{}", white.l);
        assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);

        let black = to_lab(Srgb::new(0, 0, 0));
        assert!(black.l.abs() < 0.01);
    }

    #[test]
    fn approximate_oklch_differs_but_has_same_shape() {
        let red = Srgb::new(255, 0, 0);
        let approx = to_oklch_approx(red);
        assert!(approx.starts_with("oklch(0.53"), "{approx}");
        assert_ne!(approx, to_oklch(red));

        assert!(to_oklch_approx(Srgb::new(0, 0, 0)).starts_with("oklch(0.000 0.000 "));
        assert!(to_oklch_approx(Srgb::new(255, 255, 255)).starts_with("oklch(1.000 0.000 "));
    }

    #[test]
    fn hue_rounding_wraps() {
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(round_hue(359.96, 1), 0.0);
            assert_eq!(round_hue(359.6, 0), 0.0);
            assert_eq!(round_hue(12.34, 1), 12.3);
            assert_eq!(hue_degrees(1.0, -0.0), 0.0);
            assert!(hue_degrees(1.0, -0.0).is_sign_positive());
            assert_eq!(round_hue(-0.0, 1), 0.0);
        }
        assert!((hue_degrees(0.0, -1.0) - 270.0).abs() < 1e-3);
    }
}
