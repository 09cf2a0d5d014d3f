use crate::{
    dedup,
    kmeans::{self, Centroids},
    sample, PaletteSize, PixelSlice, QuantizeOptions, QuantizeOutput, DEFAULT_DISTANCE_THRESHOLD,
};

use palette::Srgb;
use rand::{Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

#[cfg(feature = "image")]
use image::RgbaImage;

/// The signature shared by [`kmeans::palette`] and [`kmeans::palette_par`].
type Clusterer = fn(&[Srgb<u8>], Centroids<Srgb<u8>>, u32) -> QuantizeOutput<Srgb<u8>>;

/// A builder struct to compute a palette of dominant colors from RGBA pixels.
///
/// The pipeline drops nearly transparent pixels, samples the rest, clusters them with
/// k-means, and then removes clusters that are too close to an earlier one.
///
/// # Examples
/// ```
/// # use huepick::{PalettePipeline, PaletteSize, PixelSlice, QuantizeOptions};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bytes = [[255, 0, 0, 255], [0, 255, 0, 255], [0, 0, 255, 0], [255, 0, 0, 255]].concat();
/// let pixels = PixelSlice::try_from(bytes.as_slice())?;
///
/// let palette = PalettePipeline::new(pixels)
///     .palette_size(PaletteSize::try_from(2u8)?)
///     .distance_threshold(5.0)
///     .quantize_options(QuantizeOptions::new().seed(0))
///     .palette();
///
/// assert_eq!(palette.len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PalettePipeline<'a> {
    /// The input pixels.
    pub(crate) pixels: PixelSlice<'a>,
    /// The maximum number of palette colors.
    pub(crate) k: PaletteSize,
    /// The minimum distance between two palette colors.
    pub(crate) distance_threshold: f32,
    /// Sampling and k-means parameters.
    pub(crate) options: QuantizeOptions,
}

impl<'a> PalettePipeline<'a> {
    /// Creates a new [`PalettePipeline`] with default options.
    #[must_use]
    pub fn new(pixels: PixelSlice<'a>) -> Self {
        Self {
            pixels,
            k: PaletteSize::default(),
            distance_threshold: DEFAULT_DISTANCE_THRESHOLD,
            options: QuantizeOptions::new(),
        }
    }

    /// Sets the maximum number of colors in the palette.
    ///
    /// The default is [`PaletteSize::DEFAULT`] (`5`).
    #[must_use]
    pub fn palette_size(mut self, size: PaletteSize) -> Self {
        self.k = size;
        self
    }

    /// Sets the minimum distance between two palette colors.
    ///
    /// The default is [`DEFAULT_DISTANCE_THRESHOLD`] (`10.0`).
    #[must_use]
    pub fn distance_threshold(mut self, threshold: f32) -> Self {
        self.distance_threshold = threshold;
        self
    }

    /// Sets the sampling and k-means options.
    #[must_use]
    pub fn quantize_options(mut self, options: QuantizeOptions) -> Self {
        self.options = options;
        self
    }

    /// Computes the palette.
    ///
    /// The random number generator is seeded from [`QuantizeOptions::seed`] if set.
    /// Otherwise, the thread local generator is used.
    #[must_use]
    pub fn palette(self) -> Vec<Srgb<u8>> {
        with_rng(self.options.get_seed(), |rng| self.run(rng, kmeans::palette))
    }

    /// Computes the palette, using `rng` to sample the pixels.
    ///
    /// Any seed in the [`QuantizeOptions`] is ignored.
    #[must_use]
    pub fn palette_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Srgb<u8>> {
        self.run(rng, kmeans::palette)
    }

    fn run<R: Rng + ?Sized>(self, rng: &mut R, clusterer: Clusterer) -> Vec<Srgb<u8>> {
        let Self { pixels, k, distance_threshold, options } = self;

        let mut points = sample::visible_colors(pixels, options.get_alpha_threshold());
        let visible = points.len();
        sample::sample(&mut points, options.get_max_samples(), rng);

        tracing::debug!(
            pixels = pixels.num_pixels(),
            visible,
            samples = points.len(),
            "sampled pixels"
        );

        if points.is_empty() {
            return Vec::new();
        }

        let centroids = Centroids::first_k(&points, k);
        let QuantizeOutput { palette, .. } =
            clusterer(&points, centroids, options.get_max_iterations());

        let clusters = palette.len();
        let palette = dedup::remove_similar(&palette, distance_threshold);

        tracing::debug!(clusters, kept = palette.len(), "computed palette");

        palette
    }
}

#[cfg(feature = "threads")]
impl<'a> PalettePipeline<'a> {
    /// Computes the palette in parallel.
    ///
    /// The output is the same as [`PalettePipeline::palette`] given the same seed.
    #[must_use]
    pub fn palette_par(self) -> Vec<Srgb<u8>> {
        with_rng(self.options.get_seed(), |rng| self.run(rng, kmeans::palette_par))
    }

    /// Computes the palette in parallel, using `rng` to sample the pixels.
    #[must_use]
    pub fn palette_par_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Vec<Srgb<u8>> {
        self.run(rng, kmeans::palette_par)
    }
}

#[cfg(feature = "image")]
impl<'a> From<&'a RgbaImage> for PalettePipeline<'a> {
    fn from(image: &'a RgbaImage) -> Self {
        Self::new(image.into())
    }
}

/// Calls `f` with a generator seeded from `seed`, or the thread local generator if there is none.
fn with_rng<T>(seed: Option<u64>, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
    match seed {
        Some(seed) => f(&mut Xoroshiro128PlusPlus::seed_from_u64(seed)),
        None => f(&mut rand::thread_rng()),
    }
}
