//! Display colors and the symbolic color table consulted during import.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const RED: Self = Self::opaque(255, 0, 0);
    pub const GREEN: Self = Self::opaque(0, 255, 0);
    pub const BLUE: Self = Self::opaque(0, 0, 255);
    pub const YELLOW: Self = Self::opaque(255, 255, 0);

    /// Creates a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the channels in RGBA order.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// A non-empty color token that is not present in the color table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("color not handled: {token:?}")]
pub struct UnrecognizedColor {
    pub token: String,
}

/// Immutable mapping from color names to colors.
///
/// Lookups are exact and case-sensitive. An empty token always resolves to
/// opaque black, independently of the table contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    entries: BTreeMap<String, Color>,
}

impl ColorTable {
    /// The built-in palette: black, white, red, green, blue and yellow.
    pub fn standard() -> Self {
        [
            ("black", Color::BLACK),
            ("white", Color::WHITE),
            ("red", Color::RED),
            ("green", Color::GREEN),
            ("blue", Color::BLUE),
            ("yellow", Color::YELLOW),
        ]
        .into_iter()
        .collect()
    }

    /// Looks up a color by exact name.
    pub fn get(&self, name: &str) -> Option<Color> {
        self.entries.get(name).copied()
    }

    /// Resolves a raw color token from an input row.
    pub fn resolve(&self, token: &str) -> Result<Color, UnrecognizedColor> {
        if token.is_empty() {
            return Ok(Color::BLACK);
        }
        self.get(token).ok_or_else(|| UnrecognizedColor {
            token: token.to_string(),
        })
    }

    /// Recognized names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl<S: Into<String>> FromIterator<(S, Color)> for ColorTable {
    fn from_iter<I: IntoIterator<Item = (S, Color)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, color)| (name.into(), color))
                .collect(),
        }
    }
}
