#![cfg(feature = "image")]

use std::io::Cursor;

use huepick::{
    extract_colors, extract_colors_with, ColorFormat, EncodedImage, ExtractError, ExtractOptions,
    FormattedPalette, PixelBuffer, QuantizeOptions, LOOSE_DISTANCE_THRESHOLD,
};
use image::{ImageError, ImageFormat, Rgba, RgbaImage};
use pretty_assertions::assert_eq;

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const NAVY: Rgba<u8> = Rgba([0, 0, 128, 255]);
const CLEAR: Rgba<u8> = Rgba([0, 255, 0, 0]);

/// Left half red, right half navy, with a fully transparent green border.
fn two_tone(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
            CLEAR
        } else if x < width / 2 {
            RED
        } else {
            NAVY
        }
    })
}

fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), format).unwrap();
    bytes
}

#[test]
fn png_two_tone() {
    let png = encode(&two_tone(32, 16), ImageFormat::Png);

    let mut palette = match extract_colors(EncodedImage(&png), 4, "hex", 10.0).unwrap() {
        FormattedPalette::Text(colors) => colors,
        FormattedPalette::Rgb(_) => panic!("hex palettes are strings"),
    };
    palette.sort();
    assert_eq!(palette, vec!["#000080", "#ff0000"]);
}

#[test]
fn png_two_tone_as_json() {
    let png = encode(&two_tone(8, 8), ImageFormat::Png);
    let options = ExtractOptions::new()
        .format(ColorFormat::Rgb)
        .quantize_options(QuantizeOptions::new().seed(1));

    let palette = extract_colors_with(EncodedImage(&png), 2, options).unwrap();
    let json = serde_json::to_value(&palette).unwrap();

    let mut colors = serde_json::from_value::<Vec<[u8; 3]>>(json).unwrap();
    colors.sort_unstable();
    assert_eq!(colors, vec![[0, 0, 128], [255, 0, 0]]);
}

#[test]
fn sampled_image_is_reproducible_with_a_seed() {
    let image = RgbaImage::from_fn(100, 100, |x, y| {
        Rgba([(x * 2) as u8, (y * 2) as u8, ((x + y) % 256) as u8, 255])
    });
    let options = ExtractOptions::new()
        .format(ColorFormat::Oklch)
        .distance_threshold(LOOSE_DISTANCE_THRESHOLD)
        .quantize_options(QuantizeOptions::new().max_samples(500).seed(42));

    let a = extract_colors_with(image.clone(), 8, options).unwrap();
    let b = extract_colors_with(image, 8, options).unwrap();
    assert_eq!(a, b);
    assert!(!a.is_empty() && a.len() <= 8);
}

#[test]
fn transparent_png_gives_empty_palette() {
    let png = encode(&RgbaImage::from_pixel(4, 4, CLEAR), ImageFormat::Png);
    let palette = extract_colors(EncodedImage(&png), 5, "hsl", 10.0).unwrap();
    assert!(palette.is_empty());
}

#[test]
fn decode_errors_are_source_errors() {
    let err = extract_colors(EncodedImage(b"\x89PNG but not really"), 5, "hex", 10.0).unwrap_err();
    assert!(matches!(
        err,
        ExtractError::Source(ImageError::Decoding(_) | ImageError::Unsupported(_))
    ));
}

#[test]
fn invalid_arguments_win_over_bad_images() {
    let garbage = EncodedImage(b"garbage");
    assert!(matches!(
        extract_colors(garbage, 0, "hex", 10.0),
        Err(ExtractError::InvalidPaletteSize(_))
    ));
    assert!(matches!(
        extract_colors(garbage, 3, "cmyk", 10.0),
        Err(ExtractError::UnsupportedFormat(_))
    ));
}

#[test]
fn raw_buffer_source() {
    let pixels = [[10, 20, 30, 255], [10, 20, 30, 255], [200, 100, 0, 255]].concat();
    let palette = extract_colors(PixelBuffer::new(3, 1, pixels), 5, "rgb", 10.0).unwrap();
    assert_eq!(palette, FormattedPalette::Rgb(vec![[10, 20, 30], [200, 100, 0]]));
}
