//! Colour value type, hex conversion and tolerance matching.

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::error::{RecolorError, Result};

/// Per-channel tolerance used when no other value is configured.
///
/// Matches the anti-aliasing and compression noise found around solid fills.
pub const DEFAULT_TOLERANCE: u8 = 5;

/// An opaque RGB colour.
///
/// The canonical text form is always derived from the channels, so the two
/// can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorValue {
    /// Create a colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats (case-insensitive):
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RRGGBB` (6 digits)
    pub fn parse_hex(s: &str) -> Result<Self> {
        let invalid = || RecolorError::InvalidColorFormat {
            input: s.to_string(),
        };

        let digits = s.strip_prefix('#').ok_or_else(invalid)?;
        let well_formed = matches!(digits.len(), 3 | 6)
            && digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(invalid());
        }

        let rgb: Srgb<u8> = digits.parse().map_err(|_| invalid())?;
        Ok(Self::rgb(rgb.red, rgb.green, rgb.blue))
    }

    /// Canonical form: lowercase, 6 digits, leading `#`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Build from an RGBA pixel, dropping alpha.
    pub fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::rgb(rgba[0], rgba[1], rgba[2])
    }

    /// Expand to an RGBA pixel with the given alpha.
    pub fn to_rgba(self, alpha: u8) -> [u8; 4] {
        [self.r, self.g, self.b, alpha]
    }

    /// True when every channel differs by at most `tolerance`.
    pub fn is_close(self, other: Self, tolerance: u8) -> bool {
        self.r.abs_diff(other.r) <= tolerance
            && self.g.abs_diff(other.g) <= tolerance
            && self.b.abs_diff(other.b) <= tolerance
    }
}

impl FromStr for ColorValue {
    type Err = RecolorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for ColorValue {
    type Error = RecolorError;

    fn try_from(s: String) -> Result<Self> {
        Self::parse_hex(&s)
    }
}

impl From<ColorValue> for String {
    fn from(colour: ColorValue) -> Self {
        colour.to_hex()
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
