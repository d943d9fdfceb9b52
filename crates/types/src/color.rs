use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const OPAQUE: u32 = 0xFF00_0000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color length in '{value}': expected 3, 6 or 8 digits, got {len}")]
    InvalidLength { value: String, len: usize },

    #[error("invalid hex digit in color '{value}'")]
    InvalidDigit { value: String },
}

/// A color packed as a 32-bit ARGB integer (`0xAARRGGBB`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Color(u32);

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn argb(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_opaque(self) -> bool {
        self.alpha() == 0xFF
    }

    /// Parse a hex color string with an optional leading `#`.
    ///
    /// - `RRGGBB` is opaque; the alpha byte is forced to `0xFF`.
    /// - `AARRGGBB` is taken as-is.
    /// - `RGB` is CSS shorthand: every digit is doubled and the result is opaque.
    ///
    /// Anything else is rejected rather than guessed at.
    pub fn parse_hex(s: &str) -> Result<Color, ColorError> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

        // from_str_radix tolerates a leading sign, so check the digits ourselves.
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidDigit {
                value: s.to_string(),
            });
        }

        let digits = |h: &str| {
            u32::from_str_radix(h, 16).map_err(|_| ColorError::InvalidDigit {
                value: s.to_string(),
            })
        };

        match hex.len() {
            3 => {
                let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
                Ok(Color(OPAQUE | digits(&expanded)?))
            }
            6 => Ok(Color(OPAQUE | digits(hex)?)),
            8 => Ok(Color(digits(hex)?)),
            len => Err(ColorError::InvalidLength {
                value: s.to_string(),
                len,
            }),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digits_are_opaque_with_or_without_hash() {
        let with_hash = Color::parse_hex("#FF0000").unwrap();
        let without = Color::parse_hex("FF0000").unwrap();
        assert_eq!(with_hash, without);
        assert_eq!(with_hash.argb(), 0xFFFF_0000);
        assert!(with_hash.is_opaque());
    }

    #[test]
    fn eight_digits_keep_caller_alpha() {
        let half = Color::parse_hex("80FF0000").unwrap();
        assert_eq!(half.argb(), 0x80FF_0000);
        assert_eq!(half.alpha(), 0x80);
        assert_ne!(half, Color::parse_hex("FF0000").unwrap());
    }

    #[test]
    fn three_digit_shorthand_expands() {
        let c = Color::parse_hex("#0aF").unwrap();
        assert_eq!(c.argb(), 0xFF00_AAFF);
    }

    #[test]
    fn channels() {
        let c = Color::from_argb(0x1122_3344);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(matches!(
            Color::parse_hex("#12345"),
            Err(ColorError::InvalidLength { len: 5, .. })
        ));
        assert!(matches!(
            Color::parse_hex(""),
            Err(ColorError::InvalidLength { len: 0, .. })
        ));
    }

    #[test]
    fn rejects_non_hex_and_signs() {
        assert!(matches!(
            Color::parse_hex("#GG0000"),
            Err(ColorError::InvalidDigit { .. })
        ));
        assert!(matches!(
            Color::parse_hex("+FFFFF"),
            Err(ColorError::InvalidDigit { .. })
        ));
    }

    #[test]
    fn display_is_full_argb() {
        assert_eq!(Color::parse_hex("#6200EA").unwrap().to_string(), "#FF6200EA");
        assert_eq!("#ccc".parse::<Color>().unwrap().to_string(), "#FFCCCCCC");
    }
}
