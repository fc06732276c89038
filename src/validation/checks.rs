//! Validation checks for session inputs.
//!
//! Each check returns a `ValidationResult`.

use std::collections::HashMap;

use crate::raster::RasterBuffer;
use crate::types::{ColorValue, Palette, ScreenColor};

use super::warning::{Diagnostic, ValidationResult};

/// Check for screen colours sharing an id.
pub fn check_duplicate_screen_ids(screens: &[ScreenColor]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for screen in screens {
        *seen.entry(screen.id.as_str()).or_insert(0) += 1;
    }

    for screen in screens {
        if seen.remove(screen.id.as_str()).is_some_and(|n| n > 1) {
            result.push(
                Diagnostic::error(
                    "recolor::validate::duplicate-screen-id",
                    format!("Screen colour id '{}' is defined more than once", screen.id),
                )
                .with_help("Give every screen colour a unique id"),
            );
        }
    }

    result
}

/// Check for screen colours sharing a hex value.
pub fn check_duplicate_screen_hex(screens: &[ScreenColor]) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut first: HashMap<ColorValue, &str> = HashMap::new();

    for screen in screens {
        if let Some(earlier) = first.get(&screen.hex) {
            result.push(
                Diagnostic::error(
                    "recolor::validate::duplicate-screen-hex",
                    format!(
                        "Screen colours '{}' and '{}' are both {}",
                        earlier, screen.name, screen.hex
                    ),
                )
                .with_help("Each screen colour must sample a distinct colour"),
            );
        } else {
            first.insert(screen.hex, screen.name.as_str());
        }
    }

    result
}

/// Warn about distinct screen colours that fall within tolerance of each other.
///
/// Substituting one of them would also capture the other's pixels.
pub fn check_overlapping_screens(screens: &[ScreenColor], tolerance: u8) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, a) in screens.iter().enumerate() {
        for b in &screens[i + 1..] {
            if a.hex != b.hex && a.hex.is_close(b.hex, tolerance) {
                result.push(
                    Diagnostic::warning(
                        "recolor::validate::overlapping-screens",
                        format!(
                            "Screen colours '{}' ({}) and '{}' ({}) are within tolerance {}",
                            a.name, a.hex, b.name, b.hex, tolerance
                        ),
                    )
                    .with_help("Lower the tolerance or merge the two screen colours"),
                );
            }
        }
    }

    result
}

/// Warn about screen colours that match no pixel of the image.
pub fn check_screens_present(
    screens: &[ScreenColor],
    raster: &RasterBuffer,
    tolerance: u8,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut missing: Vec<&ScreenColor> = screens.iter().collect();
    for px in raster.as_bytes().chunks_exact(4) {
        if missing.is_empty() {
            break;
        }
        let colour = ColorValue::rgb(px[0], px[1], px[2]);
        missing.retain(|s| !s.hex.is_close(colour, tolerance));
    }

    for screen in missing {
        result.push(
            Diagnostic::warning(
                "recolor::validate::absent-screen",
                format!(
                    "Screen colour '{}' ({}) does not appear in the image",
                    screen.name, screen.hex
                ),
            )
            .with_help("Re-sample the colour from the design"),
        );
    }

    result
}

/// Check for palette colours sharing an id.
pub fn check_duplicate_palette_ids(palette: &Palette) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for colour in palette.iter() {
        if let Some(earlier) = seen.insert(colour.id.as_str(), colour.name.as_str()) {
            result.push(Diagnostic::error(
                "recolor::validate::duplicate-palette-id",
                format!(
                    "Palette colours '{}' and '{}' share id '{}'",
                    earlier, colour.name, colour.id
                ),
            ));
        }
    }

    result
}
