//! Contains the types and functions for the high level pipeline builder API.

mod palette_pipeline;

pub use palette_pipeline::PalettePipeline;

use crate::{DEFAULT_ALPHA_THRESHOLD, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SAMPLES};

/// A builder struct to specify the parameters for sampling and k-means.
///
/// # Examples
/// ```
/// # use huepick::QuantizeOptions;
/// let options = QuantizeOptions::new()
///     .max_samples(500)
///     .seed(42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizeOptions {
    /// Pixels with an alpha below this are skipped.
    alpha_threshold: u8,
    /// The maximum number of pixels to cluster.
    max_samples: usize,
    /// The maximum number of k-means iterations.
    max_iterations: u32,
    /// The seed value for the random number generator, if any.
    seed: Option<u64>,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantizeOptions {
    /// Creates a new [`QuantizeOptions`] with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
            max_samples: DEFAULT_MAX_SAMPLES,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }

    /// Sets the minimum alpha value for a pixel to be sampled.
    ///
    /// The default is [`DEFAULT_ALPHA_THRESHOLD`] (`16`).
    /// A threshold of `0` samples every pixel.
    #[must_use]
    pub const fn alpha_threshold(mut self, alpha_threshold: u8) -> Self {
        self.alpha_threshold = alpha_threshold;
        self
    }

    /// Sets the maximum number of visible pixels to cluster.
    ///
    /// If there are more visible pixels than this, a uniform random sample of them is taken.
    /// The default is [`DEFAULT_MAX_SAMPLES`] (`2000`).
    #[must_use]
    pub const fn max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    /// Sets the maximum number of k-means iterations.
    ///
    /// The default is [`DEFAULT_MAX_ITERATIONS`] (`10`).
    #[must_use]
    pub const fn max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the seed value for the random number generator used for sampling.
    ///
    /// By default, no seed is set and the thread local generator is used,
    /// so results may differ between runs on images with more than `max_samples` visible pixels.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the alpha threshold.
    #[must_use]
    pub const fn get_alpha_threshold(&self) -> u8 {
        self.alpha_threshold
    }

    /// Returns the maximum number of samples.
    #[must_use]
    pub const fn get_max_samples(&self) -> usize {
        self.max_samples
    }

    /// Returns the maximum number of k-means iterations.
    #[must_use]
    pub const fn get_max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Returns the seed, if one was set.
    #[must_use]
    pub const fn get_seed(&self) -> Option<u64> {
        self.seed
    }
}
