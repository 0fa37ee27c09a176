//! True-color values and their escape sequences.
//!
//! Colors can be written in a config file in two forms:
//!
//! - RGB hex: `"#f39c12"` or `"#fc1"` (3 or 6 digit)
//! - RGB tuple: `[243, 156, 18]`
//!
//! # Example
//!
//! ```rust
//! use fancy::style::{Fg, Rgb};
//!
//! let orange = Rgb::parse_string("#f39c12").unwrap();
//! assert_eq!(orange, Rgb(243, 156, 18));
//! assert_eq!(Fg(orange).to_string(), "\x1b[38;2;243;156;18m");
//! ```

use std::fmt;

use serde::{Deserialize, Deserializer};

/// A 24-bit color. Each component is confined to `0..=255` by its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parses a color from a YAML value.
    ///
    /// Supports:
    /// - Strings: hex codes
    /// - Sequences: RGB tuples `[r, g, b]`
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::String(s) => Self::parse_string(s),
            serde_yaml::Value::Sequence(seq) => Self::parse_rgb_tuple(seq),
            _ => Err(format!("Invalid color value: {:?}", value)),
        }
    }

    /// Parses a `#rgb` or `#rrggbb` hex code.
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();
        match s.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex),
            None => Err(format!("Invalid color '{}': expected #rrggbb or #rgb", s)),
        }
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid hex: {}", hex));
        }

        let component = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(|| format!("Invalid hex: {}", hex))
        };

        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(Rgb(
                component(0..1)? * 17,
                component(1..2)? * 17,
                component(2..3)? * 17,
            )),
            6 => Ok(Rgb(component(0..2)?, component(2..4)?, component(4..6)?)),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3 or 6 digits)",
                hex
            )),
        }
    }

    fn parse_rgb_tuple(seq: &[serde_yaml::Value]) -> Result<Self, String> {
        if seq.len() != 3 {
            return Err(format!(
                "RGB tuple must have exactly 3 values, got {}",
                seq.len()
            ));
        }

        let mut components = [0u8; 3];
        for (i, val) in seq.iter().enumerate() {
            let n = val
                .as_u64()
                .ok_or_else(|| format!("RGB component {} is not a number", i))?;
            components[i] =
                u8::try_from(n).map_err(|_| format!("RGB component {} out of range (0-255): {}", i, n))?;
        }

        Ok(Rgb(components[0], components[1], components[2]))
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_yaml::Value::deserialize(deserializer)?;
        Rgb::parse_value(&value).map_err(serde::de::Error::custom)
    }
}

/// Foreground application of a color: `ESC[38;2;R;G;Bm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fg(pub Rgb);

/// Background application of a color: `ESC[48;2;R;G;Bm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bg(pub Rgb);

impl fmt::Display for Fg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb(r, g, b) = self.0;
        write!(f, "\x1b[38;2;{};{};{}m", r, g, b)
    }
}

impl fmt::Display for Bg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb(r, g, b) = self.0;
        write!(f, "\x1b[48;2;{};{};{}m", r, g, b)
    }
}

/// Returns the foreground escape sequence for `rgb`.
pub fn foreground_sequence(rgb: Rgb) -> String {
    Fg(rgb).to_string()
}

/// Returns the background escape sequence for `rgb`.
pub fn background_sequence(rgb: Rgb) -> String {
    Bg(rgb).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn test_foreground_sequence() {
        assert_eq!(foreground_sequence(Rgb(1, 2, 3)), "\x1b[38;2;1;2;3m");
        assert_eq!(foreground_sequence(Rgb(255, 0, 255)), "\x1b[38;2;255;0;255m");
    }

    #[test]
    fn test_background_sequence() {
        assert_eq!(background_sequence(Rgb(0, 0, 0)), "\x1b[48;2;0;0;0m");
        assert_eq!(background_sequence(Rgb(46, 204, 113)), "\x1b[48;2;46;204;113m");
    }

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Rgb::parse_string("#ff6b35").unwrap(), Rgb(255, 107, 53));
        assert_eq!(Rgb::parse_string("#000000").unwrap(), Rgb(0, 0, 0));
        assert_eq!(Rgb::parse_string("#FFFFFF").unwrap(), Rgb(255, 255, 255));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Rgb::parse_string("#fff").unwrap(), Rgb(255, 255, 255));
        assert_eq!(Rgb::parse_string("#f80").unwrap(), Rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Rgb::parse_string("#ff").is_err());
        assert!(Rgb::parse_string("#ffff").is_err());
        assert!(Rgb::parse_string("#gggggg").is_err());
        assert!(Rgb::parse_string("orange").is_err());
        // from_str_radix alone would take the sign
        assert!(Rgb::parse_string("#+f+f+f").is_err());
        assert!(Rgb::parse_string("#+ff").is_err());
        // multi-byte input must not panic on slicing
        assert!(Rgb::parse_string("#é00").is_err());
    }

    #[test]
    fn test_parse_value_sequence() {
        let val = Value::Sequence(vec![
            Value::Number(243.into()),
            Value::Number(156.into()),
            Value::Number(18.into()),
        ]);
        assert_eq!(Rgb::parse_value(&val).unwrap(), Rgb(243, 156, 18));
    }

    #[test]
    fn test_parse_value_sequence_wrong_length() {
        let val = Value::Sequence(vec![Value::Number(255.into()), Value::Number(107.into())]);
        assert!(Rgb::parse_value(&val).is_err());
    }

    #[test]
    fn test_parse_value_sequence_out_of_range() {
        let val = Value::Sequence(vec![
            Value::Number(256.into()),
            Value::Number(107.into()),
            Value::Number(53.into()),
        ]);
        assert!(Rgb::parse_value(&val).is_err());
    }

    #[test]
    fn test_parse_value_rejects_bare_number() {
        assert!(Rgb::parse_value(&Value::Number(208.into())).is_err());
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let rgb: Rgb = serde_yaml::from_str("\"#2ecc71\"").unwrap();
        assert_eq!(rgb, Rgb(46, 204, 113));
        let rgb: Rgb = serde_yaml::from_str("[69, 170, 242]").unwrap();
        assert_eq!(rgb, Rgb(69, 170, 242));
    }
}
