#[path = "../util/util.rs"]
mod util;

use util::{bench_images, opaque_colors};

use std::time::Duration;

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, Bencher, BenchmarkId, Criterion,
    SamplingMode,
};
use huepick::{
    kmeans::{self, Centroids},
    sample, PaletteSize, DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SAMPLES,
};
use palette::Srgb;
use rand::SeedableRng;
use rand_xoshiro::Xoroshiro128PlusPlus;

fn bench(
    c: &mut Criterion,
    group: &str,
    mut f: impl FnMut(&mut Bencher<WallTime>, &(PaletteSize, &[Srgb<u8>])),
) {
    let samples = bench_images()
        .iter()
        .map(|(name, image)| {
            let mut points = opaque_colors(image);
            let mut rng = Xoroshiro128PlusPlus::seed_from_u64(0);
            sample::sample(&mut points, DEFAULT_MAX_SAMPLES, &mut rng);
            (name, points)
        })
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group(group);
    group
        .sample_size(30)
        .noise_threshold(0.05)
        .sampling_mode(SamplingMode::Flat)
        .warm_up_time(Duration::from_millis(500));

    for k in [
        PaletteSize::from_clamped(256),
        PaletteSize::from_clamped(64),
        PaletteSize::from_clamped(16),
        PaletteSize::DEFAULT,
    ] {
        for (name, points) in &samples {
            group.bench_with_input(
                BenchmarkId::new(k.to_string(), name),
                &(k, points.as_slice()),
                &mut f,
            );
        }
    }
}

fn kmeans_palette_single(c: &mut Criterion) {
    bench(c, "kmeans_palette_single", |b, &(k, points)| {
        b.iter(|| kmeans::palette(points, Centroids::first_k(points, k), DEFAULT_MAX_ITERATIONS))
    })
}

fn kmeans_palette_par(c: &mut Criterion) {
    bench(c, "kmeans_palette_par", |b, &(k, points)| {
        b.iter(|| {
            kmeans::palette_par(points, Centroids::first_k(points, k), DEFAULT_MAX_ITERATIONS)
        })
    })
}

criterion_group!(benches, kmeans_palette_single, kmeans_palette_par);
criterion_main!(benches);
