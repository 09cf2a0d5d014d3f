//! Lloyd's k-means over 8-bit sRGB colors.
//!
//! Every iteration assigns each point to its nearest centroid and then moves
//! each centroid to the rounded mean of its points. A centroid that receives
//! no points keeps its position. Iteration stops early once no centroid moves.
//!
//! The result only depends on the order of the input points, since the initial
//! centroids are taken from the front of the input (see [`Centroids::first_k`]).

use crate::{distance::squared_euclidean_distance, PaletteSize, QuantizeOutput};
use palette::Srgb;

#[cfg(feature = "threads")]
use rayon::prelude::*;

/// The initial centroids for k-means.
///
/// This is a simple new type wrapper around `Vec<Color>`. The number of colors
/// is the number of clusters, and is not bounded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct Centroids<Color>(Vec<Color>);

impl<Color> Centroids<Color> {
    /// Gets the inner `Vec` of colors.
    #[must_use]
    pub fn into_inner(self) -> Vec<Color> {
        self.0
    }

    /// Returns the number of centroids.
    #[must_use]
    pub fn num_colors(&self) -> usize {
        self.0.len()
    }
}

impl<Color: Copy> Centroids<Color> {
    /// Seeds the centroids with copies of the first `k` points.
    ///
    /// If there are fewer than `k` points, there will be fewer than `k` centroids.
    #[must_use]
    pub fn first_k(points: &[Color], k: PaletteSize) -> Self {
        Self(points[..points.len().min(k.as_usize())].to_vec())
    }
}

impl<Color> From<Vec<Color>> for Centroids<Color> {
    fn from(centroids: Vec<Color>) -> Self {
        Self(centroids)
    }
}

impl<Color> From<Centroids<Color>> for Vec<Color> {
    fn from(value: Centroids<Color>) -> Self {
        value.into_inner()
    }
}

/// Returns the index of the centroid nearest to `point`.
///
/// Ties go to the lowest index.
#[inline]
fn nearest(centroids: &[[f32; 3]], point: Srgb<u8>) -> usize {
    let point = [point.red, point.green, point.blue].map(f32::from);

    let mut min_index = 0;
    let mut min_distance = f32::INFINITY;
    for (i, &centroid) in centroids.iter().enumerate() {
        let distance = squared_euclidean_distance(point, centroid);
        if distance < min_distance {
            min_distance = distance;
            min_index = i;
        }
    }

    min_index
}

/// Rounds `sum / count` to the nearest integer, with halves rounded up.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn rounded_mean(sum: u64, count: u32) -> u8 {
    let count = u64::from(count);
    ((2 * sum + count) / (2 * count)) as u8
}

struct State<'a> {
    points: &'a [Srgb<u8>],
    centroids: Vec<Srgb<u8>>,
    components: Vec<[f32; 3]>,
    assignments: Vec<usize>,
    sums: Vec<[u64; 3]>,
    counts: Vec<u32>,
}

impl<'a> State<'a> {
    fn new(points: &'a [Srgb<u8>], centroids: Vec<Srgb<u8>>) -> Self {
        let k = centroids.len();
        let mut state = Self {
            points,
            centroids,
            components: Vec::with_capacity(k),
            assignments: vec![0; points.len()],
            sums: vec![[0; 3]; k],
            counts: vec![0; k],
        };
        state.sync_components();
        state
    }

    fn sync_components(&mut self) {
        self.components.clear();
        self.components.extend(
            self.centroids
                .iter()
                .map(|c| [c.red, c.green, c.blue].map(f32::from)),
        );
    }

    fn assign(&mut self) {
        let Self { points, components, assignments, .. } = self;
        for (assignment, &point) in assignments.iter_mut().zip(points.iter()) {
            *assignment = nearest(components, point);
        }
    }

    #[cfg(feature = "threads")]
    fn assign_par(&mut self) {
        let Self { points, components, assignments, .. } = self;
        let components = &*components;
        assignments
            .par_iter_mut()
            .zip(points.par_iter())
            .for_each(|(assignment, &point)| *assignment = nearest(components, point));
    }

    /// Moves each centroid to the mean of its assigned points.
    /// Returns whether any centroid changed.
    fn update(&mut self) -> bool {
        let Self { points, centroids, assignments, sums, counts, .. } = self;

        sums.fill([0; 3]);
        counts.fill(0);

        for (&point, &i) in points.iter().zip(assignments.iter()) {
            let sum = &mut sums[i];
            sum[0] += u64::from(point.red);
            sum[1] += u64::from(point.green);
            sum[2] += u64::from(point.blue);
            counts[i] += 1;
        }

        let mut changed = false;
        for ((centroid, &sum), &count) in centroids.iter_mut().zip(sums.iter()).zip(counts.iter()) {
            if count == 0 {
                continue;
            }

            let [red, green, blue] = sum.map(|s| rounded_mean(s, count));
            let mean = Srgb::new(red, green, blue);
            if mean != *centroid {
                *centroid = mean;
                changed = true;
            }
        }

        if changed {
            self.sync_components();
        }

        changed
    }

    fn run(&mut self, max_iterations: u32, assign: impl Fn(&mut Self)) {
        for iteration in 0..max_iterations {
            assign(self);
            let changed = self.update();
            tracing::trace!(iteration, changed, "k-means iteration");
            if !changed {
                break;
            }
        }
    }

    fn into_summary(self) -> QuantizeOutput<Srgb<u8>> {
        let Self { centroids, counts, .. } = self;
        QuantizeOutput { palette: centroids, counts }
    }
}

/// Computes a color palette from `points` using k-means.
///
/// `initial_centroids` gives both the starting positions and the number of clusters.
/// At most `max_iterations` assignment and update steps are run.
///
/// The returned palette is in centroid index order. Its `counts` are the number of
/// points assigned to each centroid during the last assignment step.
/// An empty output is returned if there are no points or no centroids.
#[must_use]
pub fn palette(
    points: &[Srgb<u8>],
    initial_centroids: Centroids<Srgb<u8>>,
    max_iterations: u32,
) -> QuantizeOutput<Srgb<u8>> {
    if points.is_empty() || initial_centroids.num_colors() == 0 {
        return QuantizeOutput::default();
    }

    let mut state = State::new(points, initial_centroids.into());
    state.run(max_iterations, State::assign);
    state.into_summary()
}

/// Computes a color palette from `points` using k-means in parallel.
///
/// The assignment step is split across threads, so the output is identical to [`palette`].
#[cfg(feature = "threads")]
#[must_use]
pub fn palette_par(
    points: &[Srgb<u8>],
    initial_centroids: Centroids<Srgb<u8>>,
    max_iterations: u32,
) -> QuantizeOutput<Srgb<u8>> {
    if points.is_empty() || initial_centroids.num_colors() == 0 {
        return QuantizeOutput::default();
    }

    let mut state = State::new(points, initial_centroids.into());
    state.run(max_iterations, State::assign_par);
    state.into_summary()
}
