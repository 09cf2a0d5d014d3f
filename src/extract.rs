//! The palette extraction entry point.

use crate::{
    format_palette, ColorFormat, ExtractError, FormattedPalette, InvalidPaletteSize,
    PalettePipeline, PaletteSize, PixelSource, QuantizeOptions, DEFAULT_DISTANCE_THRESHOLD,
};

/// A builder struct to specify the output format and quantization parameters
/// for [`extract_colors_with`].
///
/// # Examples
/// ```
/// # use huepick::{ColorFormat, ExtractOptions, QuantizeOptions};
/// let options = ExtractOptions::new()
///     .format(ColorFormat::Oklch)
///     .distance_threshold(35.0)
///     .quantize_options(QuantizeOptions::new().seed(7));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    /// The output format.
    format: ColorFormat,
    /// The minimum distance between two palette colors.
    distance_threshold: f32,
    /// Sampling and k-means parameters.
    quantize: QuantizeOptions,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractOptions {
    /// Creates a new [`ExtractOptions`] with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            format: ColorFormat::Hex,
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            quantize: QuantizeOptions::new(),
        }
    }

    /// Sets the output format. The default is [`ColorFormat::Hex`].
    #[must_use]
    pub const fn format(mut self, format: ColorFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the minimum distance between two palette colors.
    ///
    /// The default is [`DEFAULT_DISTANCE_THRESHOLD`] (`10.0`).
    #[must_use]
    pub const fn distance_threshold(mut self, threshold: f32) -> Self {
        self.distance_threshold = threshold;
        self
    }

    /// Sets the sampling and k-means options.
    #[must_use]
    pub const fn quantize_options(mut self, options: QuantizeOptions) -> Self {
        self.quantize = options;
        self
    }
}

/// Extracts up to `max_colors` dominant colors from the pixels of `source`,
/// rendered in the format named by `format` (one of [`ColorFormat::NAMES`]).
///
/// Colors closer than `distance_threshold` to an earlier palette color are dropped.
/// An image without any visible pixels gives an empty palette.
///
/// # Errors
/// Returns an error if:
/// - `max_colors` is not a positive integer ([`ExtractError::InvalidPaletteSize`]),
/// - `format` is not a supported format name ([`ExtractError::UnsupportedFormat`]),
/// - the source fails ([`ExtractError::Source`], with the source's error unchanged),
/// - the source returns a buffer that is not a whole number of pixels
///   ([`ExtractError::InvalidBufferLength`]).
///
/// The first two are checked before the source is asked for its pixels.
///
/// # Examples
/// ```
/// # use huepick::{extract_colors, FormattedPalette, PixelBuffer};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pixels = PixelBuffer::new(1, 2, [[255, 0, 0, 255], [0, 0, 0, 0]].concat());
///
/// let palette = extract_colors(pixels.clone(), 3, "rgb", 10.0)?;
/// assert_eq!(palette, FormattedPalette::Rgb(vec![[255, 0, 0]]));
///
/// assert!(extract_colors(pixels, 0, "hex", 10.0).is_err());
/// # Ok(())
/// # }
/// ```
pub fn extract_colors<S, K>(
    source: S,
    max_colors: K,
    format: &str,
    distance_threshold: f32,
) -> Result<FormattedPalette, ExtractError<S::Error>>
where
    S: PixelSource,
    K: TryInto<PaletteSize>,
    InvalidPaletteSize: From<K::Error>,
{
    let k = max_colors.try_into().map_err(InvalidPaletteSize::from)?;
    let format = format.parse::<ColorFormat>()?;
    let options = ExtractOptions::new()
        .format(format)
        .distance_threshold(distance_threshold);

    extract(source, k, options)
}

/// Like [`extract_colors`], but with a typed format and full control over the quantization options.
///
/// # Errors
/// See [`extract_colors`]. `max_colors` is validated before the source is asked for its pixels.
pub fn extract_colors_with<S, K>(
    source: S,
    max_colors: K,
    options: ExtractOptions,
) -> Result<FormattedPalette, ExtractError<S::Error>>
where
    S: PixelSource,
    K: TryInto<PaletteSize>,
    InvalidPaletteSize: From<K::Error>,
{
    let k = max_colors.try_into().map_err(InvalidPaletteSize::from)?;
    extract(source, k, options)
}

fn extract<S: PixelSource>(
    source: S,
    k: PaletteSize,
    options: ExtractOptions,
) -> Result<FormattedPalette, ExtractError<S::Error>> {
    let ExtractOptions { format, distance_threshold, quantize } = options;

    let buffer = source.into_pixels().map_err(ExtractError::Source)?;
    tracing::debug!(width = buffer.width, height = buffer.height, "decoded pixels");

    let pixels = buffer.as_pixel_slice()?;
    let palette = PalettePipeline::new(pixels)
        .palette_size(k)
        .distance_threshold(distance_threshold)
        .quantize_options(quantize)
        .palette();

    Ok(format_palette(&palette, format))
}
