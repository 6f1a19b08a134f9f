//! RGB color value type.
//!
//! A `Color` is a plain value: two colors are the same color exactly when all
//! three channels match. Channels are `u8`, so every constructible color is
//! within 0-255.
//!
//! ## Rendering
//!
//! Presentation layers need two strings per color:
//! - `css()`: functional device notation, `rgb(R, G, B)`, for swatches
//! - `label()`: human-readable, `RGB(R, G, B)`, for option buttons
//!
//! ## Parsing
//!
//! ```
//! use color_guess::core::Color;
//!
//! let c: Color = "rgb(10, 20, 30)".parse().unwrap();
//! assert_eq!(c, Color::new(10, 20, 30));
//! assert_eq!(c.label(), "RGB(10, 20, 30)");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// An (r, g, b) triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Reference swatches shown alongside the target, with their names.
    pub const PRIMARIES: [(&'static str, Color); 3] =
        [("Red", Color::RED), ("Green", Color::GREEN), ("Blue", Color::BLUE)];

    /// Create a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as a tuple.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Device color string, e.g. `rgb(10, 20, 30)`.
    #[must_use]
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Display label, e.g. `RGB(10, 20, 30)`.
    #[must_use]
    pub fn label(self) -> String {
        format!("RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for (u8, u8, u8) {
    fn from(c: Color) -> Self {
        c.channels()
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Accepts `rgb(R, G, B)`, `RGB(R, G, B)` (any case) or a bare `R, G, B`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }

        let body = match s.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("rgb(") => s[4..]
                .strip_suffix(')')
                .ok_or_else(|| ParseColorError::Unterminated(s.to_string()))?,
            _ => s,
        };

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseColorError::ChannelCount(parts.len()));
        }

        let mut channels = [0u8; 3];
        for (slot, part) in channels.iter_mut().zip(&parts) {
            *slot = parse_channel(part)?;
        }

        Ok(Self::from(channels))
    }
}

/// Digits only: no sign, same shape as the rendered form.
fn parse_channel(part: &str) -> Result<u8, ParseColorError> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseColorError::InvalidChannel(part.to_string()));
    }
    part.parse::<u8>()
        .map_err(|_| ParseColorError::OutOfRange(part.to_string()))
}
