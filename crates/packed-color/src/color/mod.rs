//! Color types and conversion utilities
//!
//! - **Argb**: the packed `0xAARRGGBB` word hosts exchange. Use for I/O.
//! - **LinearRgb**: linear light intensity. Use for luminance.
//!
//! # Example
//!
//! ```
//! use packed_color::{Argb, LinearRgb};
//!
//! let label = Argb::from_rgb(0x21, 0x21, 0x21);
//! let linear = LinearRgb::from(label);
//! assert!(linear.r < 0.05);
//! ```

mod argb;
mod linear_rgb;
mod lut;

pub use argb::Argb;
pub use linear_rgb::LinearRgb;
