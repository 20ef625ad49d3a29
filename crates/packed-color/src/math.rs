//! Luminance and distance math on packed colors
//!
//! These are the only numeric primitives the light/dark decision needs:
//! relative luminance (Rec. 709 weights over linearized channels) and a
//! plain Euclidean distance in 8-bit RGB space.

use crate::color::{Argb, LinearRgb};

/// Luminance above which a text color counts as light.
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// RGB distance below which two colors count as similar.
pub const SIMILARITY_THRESHOLD: f64 = 180.0;

/// Relative luminance of a packed color, in `0.0..=1.0`. Alpha is ignored.
///
/// # Example
/// ```
/// use packed_color::{luminance, Argb};
/// assert!(luminance(Argb::WHITE) > 0.999);
/// assert_eq!(luminance(Argb::BLACK), 0.0);
/// ```
pub fn luminance(color: Argb) -> f64 {
    let linear = LinearRgb::from(color);
    let y = 0.2126 * linear.r + 0.7152 * linear.g + 0.0722 * linear.b;
    y.clamp(0.0, 1.0)
}

/// True when the color's luminance is strictly above `threshold`.
#[inline]
pub fn is_light_above(color: Argb, threshold: f64) -> bool {
    luminance(color) > threshold
}

/// True when `luminance(color) > 0.5`.
#[inline]
pub fn is_light_by_luminance(color: Argb) -> bool {
    is_light_above(color, LUMINANCE_THRESHOLD)
}

/// True when `luminance(color) < 0.5`.
///
/// Not the negation of [`is_light_by_luminance`]: a color sitting exactly on
/// the threshold is neither.
#[inline]
pub fn is_dark_by_luminance(color: Argb) -> bool {
    luminance(color) < LUMINANCE_THRESHOLD
}

/// Euclidean distance between two colors in 0..=255 RGB space.
///
/// Both colors are forced opaque first, so alpha never contributes.
pub fn color_distance(a: Argb, b: Argb) -> f64 {
    let a = a.opaque();
    let b = b.opaque();
    let dr = a.red() as i32 - b.red() as i32;
    let dg = a.green() as i32 - b.green() as i32;
    let db = a.blue() as i32 - b.blue() as i32;
    ((dr * dr + dg * dg + db * db) as f64).sqrt()
}

/// True when `color` lies strictly within `threshold` of `base`.
#[inline]
pub fn is_similar(base: Argb, color: Argb, threshold: f64) -> bool {
    color_distance(base, color) < threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_extremes() {
        assert!((luminance(Argb::WHITE) - 1.0).abs() < 1e-9);
        assert_eq!(luminance(Argb::BLACK), 0.0);
        // alpha is ignored
        assert_eq!(luminance(Argb(0x00FF_FFFF)), luminance(Argb::WHITE));
    }

    #[test]
    fn test_luminance_channel_weights() {
        let red = luminance(Argb::from_rgb(255, 0, 0));
        let green = luminance(Argb::from_rgb(0, 255, 0));
        let blue = luminance(Argb::from_rgb(0, 0, 255));
        assert!((red - 0.2126).abs() < 1e-9);
        assert!((green - 0.7152).abs() < 1e-9);
        assert!((blue - 0.0722).abs() < 1e-9);
    }

    #[test]
    fn test_light_classification() {
        assert!(is_light_by_luminance(Argb::WHITE));
        assert!(!is_light_by_luminance(Argb::BLACK));
        // typical secondary text on dark notifications
        assert!(is_light_by_luminance(Argb(0xB3FF_FFFF)));
        // typical material dark text
        assert!(!is_light_by_luminance(Argb(0xDE00_0000)));
        // sRGB 188 is just above linear 0.5, 187 just below
        assert!(is_light_by_luminance(Argb::from_rgb(188, 188, 188)));
        assert!(!is_light_by_luminance(Argb::from_rgb(187, 187, 187)));
    }

    #[test]
    fn test_dark_is_strict() {
        assert!(is_dark_by_luminance(Argb::BLACK));
        assert!(!is_dark_by_luminance(Argb::WHITE));
        assert!(is_dark_by_luminance(Argb::from_rgb(187, 187, 187)));
    }

    #[test]
    fn test_custom_threshold() {
        let gray = Argb::from_rgb(128, 128, 128);
        assert!(is_light_above(gray, 0.2));
        assert!(!is_light_above(gray, 0.3));
    }

    #[test]
    fn test_color_distance() {
        assert_eq!(color_distance(Argb::BLACK, Argb::BLACK), 0.0);
        let white_black = color_distance(Argb::WHITE, Argb::BLACK);
        assert!((white_black - (3.0f64 * 255.0 * 255.0).sqrt()).abs() < 1e-9);
        assert_eq!(
            color_distance(Argb::from_rgb(3, 0, 0), Argb::from_rgb(0, 4, 0)),
            5.0
        );
    }

    #[test]
    fn test_color_distance_ignores_alpha() {
        assert_eq!(color_distance(Argb(0x0000_0000), Argb::BLACK), 0.0);
        assert_eq!(color_distance(Argb(0xDE00_0000), Argb(0x8A00_0000)), 0.0);
    }

    #[test]
    fn test_similarity_to_black() {
        assert!(is_similar(Argb::BLACK, Argb(0xDE00_0000), SIMILARITY_THRESHOLD));
        assert!(is_similar(
            Argb::BLACK,
            Argb::from_rgb(0x60, 0x60, 0x60),
            SIMILARITY_THRESHOLD
        ));
        assert!(!is_similar(Argb::BLACK, Argb::WHITE, SIMILARITY_THRESHOLD));
        assert!(!is_similar(Argb::BLACK, Argb(0xB3FF_FFFF), SIMILARITY_THRESHOLD));
    }
}
