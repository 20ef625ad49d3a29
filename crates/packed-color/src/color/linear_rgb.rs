//! Linear RGB color type
//!
//! Luminance is a weighted sum of light intensities, which is only
//! meaningful once the sRGB gamma curve has been undone.

use super::argb::Argb;
use super::lut::channel_to_linear;

/// A color in linear RGB color space.
///
/// Values represent light intensity proportional to physical light power,
/// in the range 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl From<Argb> for LinearRgb {
    /// Decode the color channels of a packed color. Alpha is ignored.
    fn from(color: Argb) -> Self {
        Self {
            r: channel_to_linear(color.red()),
            g: channel_to_linear(color.green()),
            b: channel_to_linear(color.blue()),
        }
    }
}
