//! Removes palette colors that are visually too close to an earlier color.

use crate::distance::distance;
use palette::Srgb;

/// Returns the colors of `colors` that are at least `threshold` away from every earlier kept color.
///
/// Colors are visited in order, so the first of two similar colors wins.
/// Distances are Euclidean in 8-bit sRGB space, see [`distance`].
/// A negative or NaN `threshold` keeps every color.
///
/// # Examples
/// ```
/// # use huepick::dedup::remove_similar;
/// # use palette::Srgb;
/// let colors = [Srgb::new(250, 0, 0), Srgb::new(255, 0, 0), Srgb::new(0, 0, 255)];
/// assert_eq!(remove_similar(&colors, 10.0), vec![colors[0], colors[2]]);
/// ```
#[must_use]
pub fn remove_similar(colors: &[Srgb<u8>], threshold: f32) -> Vec<Srgb<u8>> {
    let threshold = if threshold > 0.0 { threshold } else { 0.0 };

    let mut kept: Vec<Srgb<u8>> = Vec::with_capacity(colors.len());
    for &color in colors {
        if kept.iter().all(|&other| distance(other, color) >= threshold) {
            kept.push(color);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tests::*, DEFAULT_DISTANCE_THRESHOLD, LOOSE_DISTANCE_THRESHOLD};

    #[test]
    fn empty_stays_empty() {
        assert!(remove_similar(&[], DEFAULT_DISTANCE_THRESHOLD).is_empty());
    }

    #[test]
    fn first_seen_wins() {
        let colors = [
            Srgb::new(0, 0, 0),
            Srgb::new(3, 4, 0),
            Srgb::new(100, 0, 0),
            Srgb::new(0, 0, 0),
        ];
        assert_eq!(
            remove_similar(&colors, 10.0),
            vec![Srgb::new(0, 0, 0), Srgb::new(100, 0, 0)]
        );
    }

    #[test]
    fn threshold_is_inclusive() {
        let colors = [Srgb::new(0, 0, 0), Srgb::new(3, 4, 0)];
        assert_eq!(remove_similar(&colors, 5.0), colors.to_vec());
        assert_eq!(remove_similar(&colors, 5.01), vec![colors[0]]);
    }

    #[test]
    fn non_positive_threshold_keeps_everything() {
        let colors = [Srgb::new(7, 7, 7); 4];
        assert_eq!(remove_similar(&colors, 0.0).len(), 4);
        assert_eq!(remove_similar(&colors, -3.0).len(), 4);
        assert_eq!(remove_similar(&colors, f32::NAN).len(), 4);
    }

    #[test]
    fn retained_pairs_are_far_apart() {
        let colors = test_data_1024();
        for threshold in [DEFAULT_DISTANCE_THRESHOLD, LOOSE_DISTANCE_THRESHOLD, 80.0] {
            let kept = remove_similar(&colors, threshold);
            assert!(!kept.is_empty());
            for (i, &a) in kept.iter().enumerate() {
                for &b in &kept[i + 1..] {
                    assert!(distance(a, b) >= threshold, "{a:?} {b:?}");
                }
            }
        }
    }

    #[test]
    fn result_is_an_ordered_subsequence() {
        let colors = test_data_256();
        let kept = remove_similar(&colors, LOOSE_DISTANCE_THRESHOLD);

        let mut rest = colors.iter();
        assert!(kept.iter().all(|c| rest.any(|x| x == c)));
    }
}
