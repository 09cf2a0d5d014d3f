//! Selects the pixels that are fed into k-means.
//!
//! Nearly transparent pixels are dropped, and the remaining pixels are capped
//! to a maximum count by a uniform random sample so that clustering cost
//! stays bounded for large images.

use crate::PixelSlice;
use palette::Srgb;
use rand::{seq::SliceRandom, Rng};

/// Returns the color of every pixel whose alpha is at least `alpha_threshold`, in pixel order.
#[must_use]
pub fn visible_colors(pixels: PixelSlice, alpha_threshold: u8) -> Vec<Srgb<u8>> {
    pixels
        .iter()
        .filter(|pixel| pixel.alpha >= alpha_threshold)
        .map(|pixel| pixel.color)
        .collect()
}

/// Caps `points` to at most `max_samples` colors.
///
/// If there are more points than `max_samples`, the points are shuffled
/// (Fisher–Yates) with `rng` and truncated. Otherwise, `points` is left untouched.
pub fn sample<R: Rng + ?Sized>(points: &mut Vec<Srgb<u8>>, max_samples: usize, rng: &mut R) {
    if points.len() > max_samples {
        points.shuffle(rng);
        points.truncate(max_samples);
    }
}
