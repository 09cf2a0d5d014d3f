#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use huepick::{
    extract_colors_with, ColorFormat, EncodedImage, ExtractOptions, PaletteSize, QuantizeOptions,
    DEFAULT_ALPHA_THRESHOLD, DEFAULT_DISTANCE_THRESHOLD, DEFAULT_MAX_ITERATIONS,
    DEFAULT_MAX_SAMPLES,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Print the dominant colors of an image.
#[derive(Parser)]
#[command(name = "huepick", version, about)]
struct Options {
    /// The image to read (PNG or JPEG)
    input: PathBuf,

    /// Maximum number of colors in the palette
    #[arg(short, long, default_value_t = PaletteSize::default(), value_parser = parse_palette_size)]
    k: PaletteSize,

    /// Output format: rgb, hex, hsl, oklch, or lab-oklch
    #[arg(short, long, default_value_t = ColorFormat::Hex)]
    format: ColorFormat,

    /// Minimum distance between two palette colors
    #[arg(short = 't', long, default_value_t = DEFAULT_DISTANCE_THRESHOLD)]
    threshold: f32,

    /// Seed for pixel sampling (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pixels with a lower alpha are ignored
    #[arg(long, default_value_t = DEFAULT_ALPHA_THRESHOLD)]
    alpha_threshold: u8,

    /// Maximum number of pixels to cluster
    #[arg(long, default_value_t = DEFAULT_MAX_SAMPLES)]
    max_samples: usize,

    /// Maximum number of k-means iterations
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    /// Print the palette as a JSON array
    #[arg(long)]
    json: bool,

    /// Log pipeline statistics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_palette_size(s: &str) -> Result<PaletteSize, String> {
    let value: u32 = s.parse().map_err(|e| format!("{e}"))?;
    value.try_into().map_err(|e| format!("{e}"))
}

fn main() -> Result<()> {
    let Options {
        input,
        k,
        format,
        threshold,
        seed,
        alpha_threshold,
        max_samples,
        max_iterations,
        json,
        verbose,
    } = Options::parse();

    let default_filter = if verbose { "huepick=debug" } else { "huepick=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let bytes = fs::read(&input).with_context(|| format!("failed to read {}", input.display()))?;

    let mut quantize = QuantizeOptions::new()
        .alpha_threshold(alpha_threshold)
        .max_samples(max_samples)
        .max_iterations(max_iterations);
    if let Some(seed) = seed {
        quantize = quantize.seed(seed);
    }

    let options = ExtractOptions::new()
        .format(format)
        .distance_threshold(threshold)
        .quantize_options(quantize);

    let palette = extract_colors_with(EncodedImage(&bytes), k, options)
        .with_context(|| format!("failed to extract colors from {}", input.display()))?;

    if json {
        println!("{}", serde_json::to_string(&palette)?);
    } else {
        for line in palette.to_lines() {
            println!("{line}");
        }
    }

    Ok(())
}
