#![allow(dead_code)]

use std::sync::OnceLock;

use image::{Rgba, RgbaImage};
use palette::Srgb;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

/// A few dominant colors with noise around each, in horizontal bands.
pub fn banded_image(width: u32, height: u32, seed: u64) -> RgbaImage {
    const BANDS: [[u8; 3]; 5] = [
        [230, 57, 70],
        [241, 250, 238],
        [168, 218, 220],
        [69, 123, 157],
        [29, 53, 87],
    ];

    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);
    RgbaImage::from_fn(width, height, |_, y| {
        let band = BANDS[(y as usize * BANDS.len()) / height as usize];
        let [r, g, b] = band.map(|c| c.saturating_add_signed(rng.gen_range(-12..=12)));
        let alpha = if rng.gen_ratio(1, 20) { 0 } else { u8::MAX };
        Rgba([r, g, b, alpha])
    })
}

/// Uniformly random opaque pixels.
pub fn noise_image(width: u32, height: u32, seed: u64) -> RgbaImage {
    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(seed);
    RgbaImage::from_fn(width, height, |_, _| Rgba([rng.gen(), rng.gen(), rng.gen(), u8::MAX]))
}

pub fn opaque_colors(image: &RgbaImage) -> Vec<Srgb<u8>> {
    image
        .pixels()
        .map(|&Rgba([r, g, b, _])| Srgb::new(r, g, b))
        .collect()
}

static IMAGES: OnceLock<Vec<(String, RgbaImage)>> = OnceLock::new();

pub fn bench_images() -> &'static [(String, RgbaImage)] {
    IMAGES.get_or_init(|| {
        vec![
            ("banded_256".to_owned(), banded_image(256, 256, 0)),
            ("banded_1024".to_owned(), banded_image(1024, 1024, 1)),
            ("noise_512".to_owned(), noise_image(512, 512, 2)),
        ]
    })
}
