//! Stroke style attached to every shape.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_COLOR, DEFAULT_LINE_WIDTH};
use crate::error::CanvasError;

/// An opaque RGB color. Serialized as `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` notation, as accepted by Canvas2D style setters.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        let (r, g, b) = DEFAULT_COLOR;
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = CanvasError;

    /// Parse `#rrggbb` or the short form `#rgb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CanvasError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            3 => {
                let short = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
                Ok(Self { r: short(0)?, g: short(1)?, b: short(2)? })
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = CanvasError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Stroke width and color used when drawing a shape outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Line width in canvas units.
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default)]
    pub color: Color,
}

fn default_width() -> f64 {
    DEFAULT_LINE_WIDTH
}

impl Style {
    #[must_use]
    pub fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }

    /// Hit tolerance for outlines drawn with this style: half the stroke
    /// width plus [`crate::consts::HIT_TOLERANCE`].
    #[must_use]
    pub fn hit_accuracy(&self) -> f64 {
        self.width / 2.0 + crate::consts::HIT_TOLERANCE
    }
}

impl Default for Style {
    fn default() -> Self {
        Self { width: DEFAULT_LINE_WIDTH, color: Color::default() }
    }
}
