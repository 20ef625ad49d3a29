//! Gamma lookup table access
//!
//! Packed colors only ever carry 8-bit channels, so the table generated by
//! build.rs holds one exact linear value per channel value and needs no
//! interpolation.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/channel_lut.rs"));

/// Convert an 8-bit sRGB channel value to linear light (0.0..=1.0).
#[inline]
pub fn channel_to_linear(channel: u8) -> f64 {
    SRGB8_TO_LINEAR[channel as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lut_endpoints() {
        assert_eq!(channel_to_linear(0), 0.0);
        assert!((channel_to_linear(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_lut_matches_exact_formula() {
        for i in 0..=255u8 {
            let srgb = i as f64 / 255.0;
            let exact = if srgb <= 0.04045 {
                srgb / 12.92
            } else {
                ((srgb + 0.055) / 1.055).powf(2.4)
            };
            assert!(
                (channel_to_linear(i) - exact).abs() < 1e-12,
                "LUT mismatch at {i}: {} vs {exact}",
                channel_to_linear(i)
            );
        }
    }

    #[test]
    fn test_lut_is_monotonic() {
        for i in 1..=255u8 {
            assert!(channel_to_linear(i) > channel_to_linear(i - 1));
        }
    }
}
