use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// 8-bit RGBA color
///
/// Stored in config files as a hex string ("#RRGGBB" or "#RRGGBBAA").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba(0x00, 0x00, 0x00, 0xff);
    pub const WHITE: Rgba = Rgba(0xff, 0xff, 0xff, 0xff);
    pub const GRAY: Rgba = Rgba(0x88, 0x88, 0x88, 0xff);
    pub const RED: Rgba = Rgba(0xff, 0x00, 0x00, 0xff);

    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 0xff)
    }

    #[inline]
    pub fn alpha(&self) -> u8 {
        self.3
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.3 == 0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.3 == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.0, self.1, self.2, self.3)
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Parse a hex color string
/// Accepts formats: "#RRGGBBAA", "#RRGGBB", "#RGB" (leading '#' optional)
pub fn parse_hex_color(hex: &str) -> Option<Rgba> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => Some(Rgba::rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Some(Rgba::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => Some(Rgba(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
            channel(6..8)?,
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        assert_eq!(parse_hex_color("#ff5500"), Some(Rgba::rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        assert_eq!(parse_hex_color("#f50"), Some(Rgba::rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_with_alpha() {
        assert_eq!(parse_hex_color("00000000"), Some(Rgba::TRANSPARENT));
        assert_eq!(parse_hex_color("#ff000080"), Some(Rgba(255, 0, 0, 0x80)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for color in [Rgba::RED, Rgba::TRANSPARENT, Rgba(1, 2, 3, 4)] {
            assert_eq!(color.to_string().parse::<Rgba>().unwrap(), color);
        }
    }
}
