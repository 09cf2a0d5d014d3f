//! Pixel sources provide the raw RGBA buffer that palettes are extracted from.
//!
//! Decoding is not done by this crate itself. Instead, anything that can produce
//! a [`PixelBuffer`] implements [`PixelSource`]. With the `image` feature enabled,
//! encoded image bytes ([`EncodedImage`]) and decoded `image` buffers are pixel sources.

use crate::{InvalidBufferLength, PixelSlice};
use std::convert::Infallible;

#[cfg(feature = "image")]
use image::{DynamicImage, ImageError, RgbaImage};

/// An owned buffer of interleaved 8-bit RGBA samples in row-major order.
///
/// `pixels.len()` is expected to be `width * height * 4`,
/// but only a length that is a multiple of `4` is required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    /// The width of the image in pixels.
    pub width: u32,
    /// The height of the image in pixels.
    pub height: u32,
    /// The interleaved RGBA samples.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a new [`PixelBuffer`].
    #[must_use]
    pub const fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self { width, height, pixels }
    }

    /// Borrows the samples as a [`PixelSlice`].
    ///
    /// # Errors
    /// Returns an error if the number of samples is not a multiple of `4`.
    pub fn as_pixel_slice(&self) -> Result<PixelSlice<'_>, InvalidBufferLength> {
        self.pixels.as_slice().try_into()
    }
}

/// Something that can produce the RGBA pixels of an image.
///
/// [`extract_colors`](crate::extract_colors) calls [`PixelSource::into_pixels`] at most once,
/// and only after its other arguments have been validated.
/// Errors are passed on to the caller as is.
pub trait PixelSource {
    /// The error returned when no pixels could be produced.
    type Error;

    /// Produces the pixels of the image.
    ///
    /// # Errors
    /// Returns an error if the pixels could not be produced, e.g., if decoding failed.
    fn into_pixels(self) -> Result<PixelBuffer, Self::Error>;
}

impl PixelSource for PixelBuffer {
    type Error = Infallible;

    fn into_pixels(self) -> Result<PixelBuffer, Self::Error> {
        Ok(self)
    }
}

/// A [`PixelSource`] backed by a closure, see [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Creates a [`PixelSource`] that calls `f` to produce its pixels.
///
/// # Examples
/// ```
/// # use huepick::{source::from_fn, PixelBuffer, PixelSource};
/// let source = from_fn(|| Ok::<_, std::io::Error>(PixelBuffer::new(1, 1, vec![0, 0, 0, 255])));
/// assert_eq!(source.into_pixels().unwrap().pixels.len(), 4);
/// ```
pub fn from_fn<F, E>(f: F) -> FromFn<F>
where
    F: FnOnce() -> Result<PixelBuffer, E>,
{
    FromFn(f)
}

impl<F, E> PixelSource for FromFn<F>
where
    F: FnOnce() -> Result<PixelBuffer, E>,
{
    type Error = E;

    fn into_pixels(self) -> Result<PixelBuffer, Self::Error> {
        (self.0)()
    }
}

/// Encoded image bytes (e.g., the contents of a PNG or JPEG file).
///
/// The format is guessed from the bytes and the image is decoded with [`image::load_from_memory`].
#[cfg(feature = "image")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedImage<'a>(pub &'a [u8]);

#[cfg(feature = "image")]
impl<'a> PixelSource for EncodedImage<'a> {
    type Error = ImageError;

    fn into_pixels(self) -> Result<PixelBuffer, Self::Error> {
        let image = image::load_from_memory(self.0)?;
        Ok(image.into_rgba8().into())
    }
}

#[cfg(feature = "image")]
impl From<RgbaImage> for PixelBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }
}

#[cfg(feature = "image")]
impl PixelSource for RgbaImage {
    type Error = Infallible;

    fn into_pixels(self) -> Result<PixelBuffer, Self::Error> {
        Ok(self.into())
    }
}

#[cfg(feature = "image")]
impl PixelSource for DynamicImage {
    type Error = Infallible;

    fn into_pixels(self) -> Result<PixelBuffer, Self::Error> {
        Ok(self.into_rgba8().into())
    }
}
