use crate::errors::TagwmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGBA color.
///
/// Parsed from `#rgb`, `#rrggbb`, `#rrggbbaa` or one of a handful of color names.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

const NAMED: &[(&str, Color)] = &[
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("white", Color::rgb(0xff, 0xff, 0xff)),
    ("red", Color::rgb(0xff, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0xff, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xff)),
    ("yellow", Color::rgb(0xff, 0xff, 0x00)),
    ("cyan", Color::rgb(0x00, 0xff, 0xff)),
    ("magenta", Color::rgb(0xff, 0x00, 0xff)),
    ("gray", Color::rgb(0xbe, 0xbe, 0xbe)),
    ("grey", Color::rgb(0xbe, 0xbe, 0xbe)),
];

impl Color {
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0xff,
        }
    }

    /// Packs the color as `0xAARRGGBB`, the layout X uses for pixel values.
    pub const fn argb(self) -> u32 {
        (self.alpha as u32) << 24
            | (self.red as u32) << 16
            | (self.green as u32) << 8
            | self.blue as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl FromStr for Color {
    type Err = TagwmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TagwmError::InvalidColor(s.to_owned());
        let trimmed = s.trim();
        let Some(hex) = trimmed.strip_prefix('#') else {
            return NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(trimmed))
                .map(|(_, color)| *color)
                .ok_or_else(invalid);
        };
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let nibble = |i: usize| {
            u8::from_str_radix(&hex[i..=i], 16)
                .map(|n| n * 0x11)
                .map_err(|_| invalid())
        };
        match hex.len() {
            3 => Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self {
                alpha: byte(6)?,
                ..Self::rgb(byte(0)?, byte(2)?, byte(4)?)
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if self.alpha != 0xff {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#ff0080".parse(), Ok(Color::rgb(0xff, 0x00, 0x80)));
        assert_eq!("#f08".parse(), Ok(Color::rgb(0xff, 0x00, 0x88)));
        let translucent: Color = "#10203040".parse().unwrap();
        assert_eq!(translucent.alpha, 0x40);
        assert_eq!(translucent.to_string(), "#10203040");
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Red".parse(), Ok(Color::rgb(0xff, 0, 0)));
    }

    #[test]
    fn rejects_garbage() {
        for input in ["", "#", "#12345", "#gggggg", "not-a-color", "#ééé"] {
            assert!(input.parse::<Color>().is_err(), "{input} should not parse");
        }
    }

    #[test]
    fn argb_packs_alpha_first() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).argb(), 0xff12_3456);
    }
}
