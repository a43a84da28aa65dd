//! Plain 24-bit colours for the chart palette.  Parsed from names or `#rrggbb`.

use std::{fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit in {0:?}")]
    InvalidHexDigit(String),
    #[error("colour {0:?} is neither a known name nor #RRGGBB")]
    InvalidHexLength(String),
}

// --- Rgb ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 128, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const GRAY: Self = Self::new(128, 128, 128);
    pub const ORANGE: Self = Self::new(210, 135, 10);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "red" => Ok(Self::RED),
            "green" => Ok(Self::GREEN),
            "blue" => Ok(Self::BLUE),
            "yellow" => Ok(Self::YELLOW),
            "magenta" => Ok(Self::MAGENTA),
            "cyan" => Ok(Self::CYAN),
            "gray" | "grey" => Ok(Self::GRAY),
            "orange" => Ok(Self::ORANGE),
            _ => Self::from_hex(s),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength(hex.to_owned()));
        }
        // from_str_radix alone would take a sign, e.g. `+1+2+3`
        if !h.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHexDigit(hex.to_owned()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit(hex.to_owned()))
        };
        Ok(Self::new(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The three colours a chart is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub line: Rgb,
    pub scatter: Rgb,
    pub background: Rgb,
}

/// Black line and markers on white.
pub const DEFAULT_PALETTE: Palette = Palette {
    line: Rgb::BLACK,
    scatter: Rgb::BLACK,
    background: Rgb::WHITE,
};

impl Default for Palette {
    fn default() -> Self {
        DEFAULT_PALETTE
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
