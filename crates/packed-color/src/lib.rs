// Generated LUT literals carry full f64 precision
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

//! packed-color: packed ARGB colors and the math behind light/dark decisions
//!
//! Hosts report text colors as a single `0xAARRGGBB` word. This crate wraps
//! that word in [`Argb`] and provides the two measurements a background
//! classifier needs:
//!
//! - [`luminance`]: relative luminance of the color channels, `0.0..=1.0`
//! - [`color_distance`]: Euclidean distance in 8-bit RGB space
//!
//! # Quick Start
//!
//! ```
//! use packed_color::{is_light_by_luminance, is_similar, Argb, SIMILARITY_THRESHOLD};
//!
//! let label: Argb = "#b3ffffff".parse().unwrap();
//!
//! // Both measurements read this label as light.
//! assert!(is_light_by_luminance(label));
//! assert!(!is_similar(Argb::BLACK, label, SIMILARITY_THRESHOLD));
//! ```
//!
//! # Gamma
//!
//! Luminance is computed from linear light, not from the stored sRGB
//! values. The decode uses a 256-entry table generated by `build.rs` with
//! the IEC 61966-2-1 formula, exact for every 8-bit channel value.
//!
//! Distance, on the other hand, is measured on the raw 8-bit channels. It
//! is a coarse "is this basically black" test, kept for hosts that
//! classified that way before luminance was used.

pub mod color;
pub mod error;
pub mod math;

pub use color::{Argb, LinearRgb};
pub use error::ParseColorError;
pub use math::{
    color_distance, is_dark_by_luminance, is_light_above, is_light_by_luminance, is_similar,
    luminance, LUMINANCE_THRESHOLD, SIMILARITY_THRESHOLD,
};
