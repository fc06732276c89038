//! Named colour records supplied by the host: screen colours and palette colours.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::ColorValue;

/// A named colour sampled from the original design and marked for substitution.
///
/// The set of screen colours is fixed for the lifetime of an edit session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenColor {
    pub id: String,
    pub hex: ColorValue,
    pub name: String,
}

impl ScreenColor {
    pub fn new(id: impl Into<String>, hex: ColorValue, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hex,
            name: name.into(),
        }
    }
}

/// A named, reusable replacement colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub id: String,
    pub hex: ColorValue,
    pub name: String,
}

impl PaletteColor {
    pub fn new(id: impl Into<String>, hex: ColorValue, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hex,
            name: name.into(),
        }
    }
}

/// An ordered collection of palette colours.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colours: Vec<PaletteColor>,
}

impl Palette {
    pub fn new(colours: Vec<PaletteColor>) -> Self {
        Self { colours }
    }

    /// Get a palette colour by id.
    pub fn get(&self, id: &str) -> Option<&PaletteColor> {
        self.colours.iter().find(|c| c.id == id)
    }

    /// Find the palette colour with the given hex, in any accepted notation.
    ///
    /// Returns `Ok(None)` when the hex is valid but not in the palette.
    pub fn find_by_hex(&self, hex: &str) -> Result<Option<&PaletteColor>> {
        let wanted = ColorValue::parse_hex(hex)?;
        Ok(self.colours.iter().find(|c| c.hex == wanted))
    }

    pub fn iter(&self) -> impl Iterator<Item = &PaletteColor> {
        self.colours.iter()
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl FromIterator<PaletteColor> for Palette {
    fn from_iter<I: IntoIterator<Item = PaletteColor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
