//! Output formats for palette colors.

use crate::{
    convert::{to_hex, to_hsl, to_oklch, to_oklch_approx},
    UnsupportedFormat,
};
use palette::Srgb;
use serde::Serialize;
use std::{fmt::Display, str::FromStr};

/// The supported textual representations of a palette color.
///
/// # Examples
/// ```
/// # use huepick::ColorFormat;
/// let format: ColorFormat = "oklch".parse().unwrap();
/// assert_eq!(format, ColorFormat::Oklch);
/// assert!("cmyk".parse::<ColorFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// `[r, g, b]` triplets of integers in `0..=255`.
    Rgb,
    /// `#rrggbb` strings with lowercase hex digits.
    #[default]
    Hex,
    /// `hsl(H, S%, L%)` strings.
    Hsl,
    /// `oklch(L C Hdeg)` strings computed through OKLab.
    Oklch,
    /// `oklch(L C Hdeg)` strings approximated through CIELAB.
    ///
    /// See [`to_oklch_approx`](crate::convert::to_oklch_approx).
    LabOklch,
}

impl ColorFormat {
    /// The names accepted by [`ColorFormat::from_str`], in variant order.
    pub const NAMES: [&'static str; 5] = ["rgb", "hex", "hsl", "oklch", "lab-oklch"];

    /// Returns the name of this format.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hex => "hex",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Oklch => "oklch",
            ColorFormat::LabOklch => "lab-oklch",
        }
    }
}

impl Display for ColorFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = UnsupportedFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rgb" => Ok(ColorFormat::Rgb),
            "hex" => Ok(ColorFormat::Hex),
            "hsl" => Ok(ColorFormat::Hsl),
            "oklch" => Ok(ColorFormat::Oklch),
            "lab-oklch" => Ok(ColorFormat::LabOklch),
            _ => Err(UnsupportedFormat(s.to_owned())),
        }
    }
}

/// A formatted palette, as returned by [`extract_colors`](crate::extract_colors).
///
/// This serializes to a JSON array of either `[r, g, b]` arrays or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormattedPalette {
    /// The palette as RGB triplets, for [`ColorFormat::Rgb`].
    Rgb(Vec<[u8; 3]>),
    /// The palette as strings, for every other [`ColorFormat`].
    Text(Vec<String>),
}

impl FormattedPalette {
    /// Returns the number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            FormattedPalette::Rgb(colors) => colors.len(),
            FormattedPalette::Text(colors) => colors.len(),
        }
    }

    /// Returns whether the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns each color on its own line, `rgb(r, g, b)` for RGB triplets.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        match self {
            FormattedPalette::Rgb(colors) => colors
                .iter()
                .map(|[r, g, b]| format!("rgb({r}, {g}, {b})"))
                .collect(),
            FormattedPalette::Text(colors) => colors.clone(),
        }
    }
}

/// Renders each color of `colors` in the given `format`, preserving order.
#[must_use]
pub fn format_palette(colors: &[Srgb<u8>], format: ColorFormat) -> FormattedPalette {
    let text =
        |f: fn(Srgb<u8>) -> String| FormattedPalette::Text(colors.iter().copied().map(f).collect());

    match format {
        ColorFormat::Rgb => {
            FormattedPalette::Rgb(colors.iter().map(|c| [c.red, c.green, c.blue]).collect())
        }
        ColorFormat::Hex => text(to_hex),
        ColorFormat::Hsl => text(to_hsl),
        ColorFormat::Oklch => text(to_oklch),
        ColorFormat::LabOklch => text(to_oklch_approx),
    }
}
