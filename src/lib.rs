//! A library for extracting a small palette of dominant colors from raw RGBA pixel data.
//!
//! `huepick` samples the visible pixels of an image, clusters them with k-means,
//! drops clusters that are visually too close to each other, and renders the
//! resulting colors as RGB triplets, HEX, HSL, or OKLCH strings.
//!
//! # Features
//! `huepick` has several `cargo` features that can be turned off or on:
//! - `threads`: exposes a parallel version of k-means via [`rayon`].
//! - `image`: enables decoding images through the [`image`] crate as a [`PixelSource`].
//! - `cli`: builds the `huepick` command line tool.
//!
//! # High-Level API
//! Most users want [`extract_colors`], which validates its arguments, asks a
//! [`PixelSource`] for pixels, and formats the palette:
//! ```
//! # use huepick::{extract_colors, FormattedPalette, PixelBuffer};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let red = [255, 0, 0, 255];
//! let green = [0, 255, 0, 255];
//! let pixels = PixelBuffer::new(2, 1, [red, green].concat());
//!
//! let palette = extract_colors(pixels, 2, "hex", 10.0)?;
//! assert_eq!(palette.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! For more control over sampling and clustering, see [`PalettePipeline`].

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal,
    clippy::wildcard_imports
)]

mod api;
mod error;
mod extract;
mod format;
mod types;

pub mod convert;
pub mod dedup;
pub mod distance;
pub mod kmeans;
pub mod sample;
pub mod source;

pub use api::*;
pub use error::*;
pub use extract::*;
pub use format::*;
pub use source::{PixelBuffer, PixelSource};
#[cfg(feature = "image")]
pub use source::EncodedImage;
pub use types::*;

/// Pixels with an alpha value below this are considered transparent and are not sampled.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 16;

/// The maximum number of visible pixels fed into k-means.
pub const DEFAULT_MAX_SAMPLES: usize = 2000;

/// The maximum number of k-means iterations.
pub const DEFAULT_MAX_ITERATIONS: u32 = 10;

/// The minimum distance (in 8-bit sRGB units) between two palette colors.
pub const DEFAULT_DISTANCE_THRESHOLD: f32 = 10.0;

/// A looser similarity threshold, suited to palettes that are only displayed and not reused.
pub const LOOSE_DISTANCE_THRESHOLD: f32 = 35.0;
