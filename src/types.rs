//! Contains various types needed across the crate.

use crate::{InvalidBufferLength, InvalidPaletteSize};
use palette::{cast::ComponentsAs, Srgba};
use std::{fmt::Display, ops::Deref};
#[cfg(feature = "image")]
use image::RgbaImage;

/// A simple new type wrapper around a slice of RGBA pixels, borrowed from an
/// interleaved `&[u8]` buffer whose length is a multiple of `4`.
///
/// # Examples
/// Use `try_into` or [`PixelSlice::from_truncated`] to create [`PixelSlice`]s.
///
/// From a raw byte slice:
/// ```
/// # use huepick::{PixelSlice, InvalidBufferLength};
/// # fn main() -> Result<(), InvalidBufferLength> {
/// let bytes = [255, 0, 0, 255, 0, 255, 0, 255];
/// let pixels = PixelSlice::try_from(bytes.as_slice())?;
/// assert_eq!(pixels.num_pixels(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct PixelSlice<'a>(&'a [Srgba<u8>]);

impl<'a> Clone for PixelSlice<'a> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a> Copy for PixelSlice<'a> {}

impl<'a> PixelSlice<'a> {
    /// Creates a [`PixelSlice`] from already separated RGBA pixels.
    #[must_use]
    pub const fn new(pixels: &'a [Srgba<u8>]) -> Self {
        Self(pixels)
    }

    /// Creates a new [`PixelSlice`] by ignoring any trailing bytes that do not form a whole pixel.
    #[must_use]
    pub fn from_truncated(bytes: &'a [u8]) -> Self {
        let len = bytes.len() - bytes.len() % 4;
        Self::new(bytes[..len].components_as())
    }

    /// Returns the number of pixels in the slice.
    #[must_use]
    pub const fn num_pixels(&self) -> usize {
        self.0.len()
    }
}

impl<'a> AsRef<[Srgba<u8>]> for PixelSlice<'a> {
    fn as_ref(&self) -> &[Srgba<u8>] {
        self
    }
}

impl<'a> Deref for PixelSlice<'a> {
    type Target = [Srgba<u8>];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a> From<PixelSlice<'a>> for &'a [Srgba<u8>] {
    fn from(val: PixelSlice<'a>) -> Self {
        val.0
    }
}

impl<'a> TryFrom<&'a [u8]> for PixelSlice<'a> {
    type Error = InvalidBufferLength;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        if bytes.len() % 4 == 0 {
            Ok(Self::new(bytes.components_as()))
        } else {
            Err(InvalidBufferLength { len: bytes.len() })
        }
    }
}

#[cfg(feature = "image")]
impl<'a> From<&'a RgbaImage> for PixelSlice<'a> {
    fn from(image: &'a RgbaImage) -> Self {
        Self::from_truncated(image.as_raw())
    }
}

/// This type is used to specify the maximum number of colors to include in a palette.
///
/// This is a simple new type wrapper around `u32` with the invariant that it must be
/// at least `1`. There is no upper bound: a palette can never hold more colors than
/// there are sampled pixels, so large sizes simply return every distinct cluster.
///
/// # Examples
/// Use `try_into` to create [`PaletteSize`]s from integers or floats,
/// or [`PaletteSize::from_clamped`] to raise a `u32` of `0` to [`PaletteSize::MIN`].
/// ```
/// # use huepick::{PaletteSize, InvalidPaletteSize};
/// # fn main() -> Result<(), InvalidPaletteSize> {
/// let size = PaletteSize::try_from(8u8)?;
/// let size: PaletteSize = 1024i64.try_into()?;
/// let size = PaletteSize::try_from(5.0f64)?;
/// assert!(PaletteSize::try_from(2.5f64).is_err());
/// assert_eq!(PaletteSize::from_clamped(0), PaletteSize::MIN);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PaletteSize(u32);

impl PaletteSize {
    /// The largest representable palette size.
    pub const MAX: Self = Self(u32::MAX);

    /// The smallest palette size, a single color.
    pub const MIN: Self = Self(1);

    /// The palette size used when none is given.
    pub const DEFAULT: Self = Self(5);

    /// Gets the inner `u32` value.
    #[must_use]
    pub const fn into_inner(self) -> u32 {
        self.0
    }

    /// Gets the inner value as a `usize` for lengths and capacities.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Creates a [`PaletteSize`] from the given `u32`, mapping `0` to [`PaletteSize::MIN`].
    #[must_use]
    pub const fn from_clamped(value: u32) -> Self {
        if value == 0 {
            Self::MIN
        } else {
            Self(value)
        }
    }
}

impl Default for PaletteSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<PaletteSize> for u32 {
    fn from(val: PaletteSize) -> Self {
        val.into_inner()
    }
}

macro_rules! palette_size_from_int {
    ($($int: ty),*) => {
        $(
            impl TryFrom<$int> for PaletteSize {
                type Error = InvalidPaletteSize;

                fn try_from(value: $int) -> Result<Self, Self::Error> {
                    match u32::try_from(value) {
                        Ok(size @ 1..) => Ok(Self(size)),
                        _ => Err(InvalidPaletteSize::new(value)),
                    }
                }
            }
        )*
    };
}

palette_size_from_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl TryFrom<f64> for PaletteSize {
    type Error = InvalidPaletteSize;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let in_range = (1.0..=f64::from(u32::MAX)).contains(&value);
        if value.is_finite() && value.fract() == 0.0 && in_range {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let size = value as u32;
            Ok(Self(size))
        } else {
            Err(InvalidPaletteSize::new(value))
        }
    }
}

impl TryFrom<f32> for PaletteSize {
    type Error = InvalidPaletteSize;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        f64::from(value)
            .try_into()
            .map_err(|_| InvalidPaletteSize::new(value))
    }
}

impl Display for PaletteSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.into_inner())
    }
}

/// The output struct returned by [`kmeans::palette`](crate::kmeans::palette).
///
/// It contains the color `palette`, alongside `counts` which has the number of
/// samples assigned to each palette color in the last assignment step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeOutput<Color> {
    /// The computed color palette, in centroid index order.
    ///
    /// The colors in the palette are not guaranteed to be unique.
    pub palette: Vec<Color>,
    /// The number of samples that were assigned to each color in `palette`.
    ///
    /// Each count is not guaranteed to be non-zero.
    pub counts: Vec<u32>,
}

impl<Color> Default for QuantizeOutput<Color> {
    fn default() -> Self {
        Self { palette: Vec::new(), counts: Vec::new() }
    }
}
