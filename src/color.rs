//! Hex color handling.
//!
//! Colors travel through the toolkit as `#rrggbb` strings. Parsing is
//! total: anything that is not a 3- or 6-digit hex triplet (with or
//! without the leading `#`) reads as black.

use ratatui::style::Color;

/// An RGB triplet with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Parse `#rrggbb`, `#rgb`, or the same without `#`.
    ///
    /// Shorthand digits expand as `x * 17` (`#abc` == `#aabbcc`).
    /// Any other length, or a non-hex digit, yields black.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Rgb::BLACK;
        }

        match digits.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).unwrap_or(0) * 17;
                Rgb::new(nibble(0), nibble(1), nibble(2))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or(0);
                Rgb::new(byte(0), byte(2), byte(4))
            }
            _ => Rgb::BLACK,
        }
    }

    /// Build from signed channel values, clamping each to `[0, 255]`.
    pub fn from_channels(r: i64, g: i64, b: i64) -> Self {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        Rgb::new(clamp(r), clamp(g), clamp(b))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// Canonical lowercase `#rrggbb` form of any accepted hex input.
pub fn normalize_hex(hex: &str) -> String {
    Rgb::from_hex(hex).to_hex()
}

/// Whether `s` is a parseable hex color (3 or 6 digits, `#` optional).
pub fn is_hex(s: &str) -> bool {
    let digits = s.strip_prefix('#').unwrap_or(s);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Terminal color for a hex string.
pub fn hex_color(hex: &str) -> Color {
    Rgb::from_hex(hex).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_form() {
        assert_eq!(Rgb::from_hex("#3B82F6"), Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(Rgb::from_hex("0b0c0f"), Rgb::new(0x0b, 0x0c, 0x0f));
    }

    #[test]
    fn shorthand_expands_by_seventeen() {
        assert_eq!(Rgb::from_hex("#abc"), Rgb::new(0xaa, 0xbb, 0xcc));
        assert_eq!(Rgb::from_hex("fff"), Rgb::new(255, 255, 255));
    }

    #[test]
    fn malformed_input_is_black() {
        for bad in ["", "#", "#12", "#1234", "#12345", "#1234567", "#zzzzzz", "#ab-"] {
            assert_eq!(Rgb::from_hex(bad), Rgb::BLACK, "input {bad:?}");
        }
    }

    #[test]
    fn formats_lowercase() {
        assert_eq!(Rgb::new(0xAB, 0x0C, 0xFF).to_hex(), "#ab0cff");
        assert_eq!(normalize_hex("#ABC"), "#aabbcc");
    }

    #[test]
    fn channels_clamp() {
        assert_eq!(Rgb::from_channels(-20, 128, 999), Rgb::new(0, 128, 255));
    }

    #[test]
    fn is_hex_accepts_only_triplets() {
        assert!(is_hex("#222"));
        assert!(is_hex("ffcad4"));
        assert!(!is_hex("pink-50"));
        assert!(!is_hex("#ffff"));
    }

    #[test]
    fn converts_to_terminal_color() {
        assert_eq!(hex_color("#102030"), Color::Rgb(0x10, 0x20, 0x30));
    }
}
