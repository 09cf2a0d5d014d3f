//! Error types returned by validation and by [`extract_colors`](crate::extract_colors).

use std::convert::Infallible;
use thiserror::Error;

/// An error for when a requested number of palette colors is not a positive integer.
///
/// The rejected value is kept, as it was written, for the error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("max colors must be a positive integer, got {value}")]
pub struct InvalidPaletteSize {
    /// The rejected value.
    value: String,
}

impl InvalidPaletteSize {
    pub(crate) fn new(value: impl ToString) -> Self {
        Self { value: value.to_string() }
    }

    /// The rejected value as it was written.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl From<Infallible> for InvalidPaletteSize {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// An error for an output format name that is not one of
/// [`ColorFormat::NAMES`](crate::ColorFormat::NAMES).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported format: {0}")]
pub struct UnsupportedFormat(pub String);

/// An error for a pixel buffer that does not hold a whole number of RGBA samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("pixel buffer length {len} is not a multiple of 4")]
pub struct InvalidBufferLength {
    /// The length of the rejected buffer in bytes.
    pub len: usize,
}

/// The error type of [`extract_colors`](crate::extract_colors).
///
/// `E` is the error type of the [`PixelSource`](crate::PixelSource).
/// Errors from the pixel source are returned as is in [`ExtractError::Source`].
#[derive(Debug, Error)]
pub enum ExtractError<E> {
    /// The requested number of colors was invalid.
    #[error(transparent)]
    InvalidPaletteSize(#[from] InvalidPaletteSize),
    /// The requested output format is not supported.
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),
    /// The pixel source returned a malformed buffer.
    #[error(transparent)]
    InvalidBufferLength(#[from] InvalidBufferLength),
    /// The pixel source failed to produce pixels.
    #[error(transparent)]
    Source(E),
}

impl<E> ExtractError<E> {
    /// Returns the pixel source error, if this is one.
    pub fn into_source(self) -> Option<E> {
        match self {
            ExtractError::Source(err) => Some(err),
            _ => None,
        }
    }
}
