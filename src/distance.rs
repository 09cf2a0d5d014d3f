//! Euclidean distance between colors in 8-bit sRGB space.
//!
//! The functions here take anything that implements [`RgbComponents`],
//! so an RGBA pixel can be compared directly against an RGB palette color
//! (its alpha component is ignored).

use palette::{Srgb, Srgba};

/// Types that can be viewed as three red, green, and blue components on the `0..=255` scale.
pub trait RgbComponents: Copy {
    /// Returns the red, green, and blue components as `f32`s.
    fn rgb_components(self) -> [f32; 3];
}

impl RgbComponents for Srgb<u8> {
    fn rgb_components(self) -> [f32; 3] {
        [self.red, self.green, self.blue].map(f32::from)
    }
}

impl RgbComponents for Srgba<u8> {
    fn rgb_components(self) -> [f32; 3] {
        self.color.rgb_components()
    }
}

impl RgbComponents for [u8; 3] {
    fn rgb_components(self) -> [f32; 3] {
        self.map(f32::from)
    }
}

impl RgbComponents for [u8; 4] {
    fn rgb_components(self) -> [f32; 3] {
        [self[0], self[1], self[2]].map(f32::from)
    }
}

impl RgbComponents for [f32; 3] {
    fn rgb_components(self) -> [f32; 3] {
        self
    }
}

#[inline]
pub(crate) fn squared_euclidean_distance<const N: usize>(a: [f32; N], b: [f32; N]) -> f32 {
    let mut dist = 0.0;
    for c in 0..N {
        let d = a[c] - b[c];
        dist += d * d;
    }
    dist
}

/// Returns the sum of the squared component differences of `a` and `b`.
///
/// Use this instead of [`distance`] when only comparing distances.
#[must_use]
pub fn squared_distance(a: impl RgbComponents, b: impl RgbComponents) -> f32 {
    squared_euclidean_distance(a.rgb_components(), b.rgb_components())
}

/// Like [`squared_distance`], but returns `f32::INFINITY` if either color is absent.
///
/// An absent color is therefore never the nearest one.
#[must_use]
pub fn squared_distance_opt<A, B>(a: Option<A>, b: Option<B>) -> f32
where
    A: RgbComponents,
    B: RgbComponents,
{
    match (a, b) {
        (Some(a), Some(b)) => squared_distance(a, b),
        _ => f32::INFINITY,
    }
}

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: impl RgbComponents, b: impl RgbComponents) -> f32 {
    squared_distance(a, b).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::*;

    #[test]
    fn distance_to_self_is_zero() {
        for color in test_data_256() {
            #[allow(clippy::float_cmp)]
            {
                assert_eq!(distance(color, color), 0.0);
            }
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let a = test_data_256();
        let b = test_data(256, 1);
        for (&a, &b) in a.iter().zip(&b) {
            #[allow(clippy::float_cmp)]
            {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn known_distances() {
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(squared_distance([0u8, 0, 0], [3u8, 4, 0]), 25.0);
            assert_eq!(distance([0u8, 0, 0], [3u8, 4, 0]), 5.0);
            assert_eq!(squared_distance([255u8, 0, 0], [0u8, 0, 0]), 65025.0);
        }
    }

    #[test]
    fn alpha_is_ignored() {
        let opaque = Srgba::new(10u8, 20, 30, 255);
        let clear = Srgba::new(10u8, 20, 30, 0);
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(distance(opaque, clear), 0.0);
            assert_eq!(distance([10u8, 20, 30, 99], Srgb::new(10u8, 20, 30)), 0.0);
        }
    }

    #[test]
    fn absent_color_is_infinitely_far() {
        let color = Srgb::new(1u8, 2, 3);
        assert!(squared_distance_opt(Some(color), None::<Srgb<u8>>).is_infinite());
        assert!(squared_distance_opt(None::<Srgb<u8>>, Some(color)).is_infinite());
        #[allow(clippy::float_cmp)]
        {
            assert_eq!(squared_distance_opt(Some(color), Some(color)), 0.0);
        }
    }
}
