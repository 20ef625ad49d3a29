//! Error types for color parsing

use std::fmt;

/// Error type for parsing hex color strings.
///
/// Returned when parsing a hex color string fails, either due to
/// invalid length or invalid hexadecimal characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// The string does not start with `#`
    MissingHash,
    /// Hex string has invalid length (must be 6 or 8 characters after stripping '#')
    InvalidLength(usize),
    /// A character other than a hex digit, including signs
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::MissingHash => write!(f, "color string must start with '#'"),
            ParseColorError::InvalidLength(len) => {
                write!(
                    f,
                    "invalid hex color length {} (expected 6 or 8 characters)",
                    len
                )
            }
            ParseColorError::InvalidDigit(c) => write!(f, "invalid hex digit {:?}", c),
        }
    }
}

impl std::error::Error for ParseColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ParseColorError::MissingHash.to_string(),
            "color string must start with '#'"
        );
        assert_eq!(
            ParseColorError::InvalidLength(4).to_string(),
            "invalid hex color length 4 (expected 6 or 8 characters)"
        );
        assert_eq!(
            ParseColorError::InvalidDigit('+').to_string(),
            "invalid hex digit '+'"
        );
    }
}
