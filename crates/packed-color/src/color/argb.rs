//! Packed ARGB color type
//!
//! Hosts hand colors around as a single 32-bit word laid out as
//! `0xAARRGGBB`. This type keeps that representation and adds channel
//! accessors, parsing and formatting on top of it.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// A color packed into one 32-bit word as `0xAARRGGBB`.
///
/// Equality and hashing compare the raw word, so two colors that differ
/// only in alpha are different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black (`#ff000000`)
    pub const BLACK: Argb = Argb(0xFF00_0000);
    /// Opaque white (`#ffffffff`)
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);

    const ALPHA_MASK: u32 = 0xFF00_0000;

    /// Create a color from its four 8-bit channels.
    ///
    /// # Example
    /// ```
    /// use packed_color::Argb;
    /// let c = Argb::from_argb(0xde, 0, 0, 0);
    /// assert_eq!(c.0, 0xde00_0000);
    /// ```
    #[inline]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// Create an opaque color from its three 8-bit color channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    /// The packed word reinterpreted as a signed integer, the form
    /// Java-flavoured hosts store colors in.
    #[inline]
    pub const fn to_i32(self) -> i32 {
        self.0 as i32
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The same color with alpha forced to `0xff`.
    #[inline]
    pub const fn opaque(self) -> Self {
        Self(self.0 | Self::ALPHA_MASK)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<i32> for Argb {
    fn from(value: i32) -> Self {
        Self(value as u32)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}

impl fmt::Display for Argb {
    /// Formats as lowercase `#aarrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

impl FromStr for Argb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - opaque color
    /// - `#AARRGGBB` - color with explicit alpha
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use packed_color::Argb;
    ///
    /// let white: Argb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Argb::WHITE);
    ///
    /// let title: Argb = "#de000000".parse().unwrap();
    /// assert_eq!(title.alpha(), 0xde);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hex = s.strip_prefix('#').ok_or(ParseColorError::MissingHash)?;
        let alpha = match hex.len() {
            6 => Self::ALPHA_MASK,
            8 => 0,
            len => return Err(ParseColorError::InvalidLength(len)),
        };

        // Digit by digit: from_str_radix would also accept a leading sign.
        let packed = hex.chars().try_fold(0u32, |acc, c| {
            c.to_digit(16)
                .map(|digit| (acc << 4) | digit)
                .ok_or(ParseColorError::InvalidDigit(c))
        })?;
        Ok(Self(packed | alpha))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Argb;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Argb {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct ArgbVisitor;

    impl Visitor<'_> for ArgbVisitor {
        type Value = Argb;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a color string like \"#RRGGBB\" or \"#AARRGGBB\", or a packed integer")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Argb, E> {
            v.parse().map_err(E::custom)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Argb, E> {
            u32::try_from(v)
                .map(Argb)
                .map_err(|_| E::custom(format!("packed color {v} does not fit in 32 bits")))
        }

        /// Accepts both the signed form and a non-negative packed word.
        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Argb, E> {
            let packed = if v >= 0 {
                u32::try_from(v).map(Argb).ok()
            } else {
                i32::try_from(v).map(Argb::from).ok()
            };
            packed.ok_or_else(|| E::custom(format!("packed color {v} does not fit in 32 bits")))
        }
    }

    impl<'de> Deserialize<'de> for Argb {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ArgbVisitor)
        }
    }
}
