//! Core domain types for recolor.
//!
//! - `ColorValue` - RGB colours, hex conversion and tolerance matching
//! - `ScreenColor` / `PaletteColor` - named colours supplied by the host
//! - `Palette` - the replacement colours available to a session

mod colour;
mod swatch;

pub use colour::{ColorValue, DEFAULT_TOLERANCE};
pub use swatch::{Palette, PaletteColor, ScreenColor};
