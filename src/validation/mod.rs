//! Validation of the inputs to an edit session.
//!
//! Runs a suite of checks over the screen colours, palette and base image
//! and reports errors and warnings. Used by `recolor check` and before
//! `recolor apply` edits anything.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::raster::RasterBuffer;
use crate::types::{Palette, ScreenColor};

/// Everything a session is about to be built from.
#[derive(Debug, Clone, Copy)]
pub struct SessionInputs<'a> {
    pub screen_colors: &'a [ScreenColor],
    pub palette: &'a Palette,
    pub raster: &'a RasterBuffer,
    pub tolerance: u8,
}

/// Run all validation checks.
pub fn validate_inputs(inputs: &SessionInputs<'_>) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_duplicate_screen_ids(inputs.screen_colors));
    result.merge(checks::check_duplicate_screen_hex(inputs.screen_colors));
    result.merge(checks::check_overlapping_screens(
        inputs.screen_colors,
        inputs.tolerance,
    ));
    result.merge(checks::check_screens_present(
        inputs.screen_colors,
        inputs.raster,
        inputs.tolerance,
    ));
    result.merge(checks::check_duplicate_palette_ids(inputs.palette));

    result
}

/// Print diagnostics and a one-line verdict to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        eprintln!("{}", printer.diagnostic(d));
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if result.warning_count() > 0 {
        printer.warning("Checked", &format!("passed with {}", warnings));
    } else {
        printer.success("Checked", "no problems found");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorValue, PaletteColor};

    #[test]
    fn test_validate_clean_inputs() {
        let raster = RasterBuffer::filled(2, 2, ColorValue::rgb(255, 0, 0));
        let screens = vec![ScreenColor::new("s1", ColorValue::rgb(255, 0, 0), "Red")];
        let palette = Palette::new(vec![PaletteColor::new("p1", ColorValue::BLACK, "Black")]);

        let result = validate_inputs(&SessionInputs {
            screen_colors: &screens,
            palette: &palette,
            raster: &raster,
            tolerance: 5,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_collects_all_checks() {
        let raster = RasterBuffer::filled(1, 1, ColorValue::BLACK);
        let screens = vec![
            ScreenColor::new("s1", ColorValue::rgb(255, 0, 0), "Red"),
            ScreenColor::new("s1", ColorValue::rgb(255, 0, 0), "Also red"),
        ];
        let palette = Palette::default();

        let result = validate_inputs(&SessionInputs {
            screen_colors: &screens,
            palette: &palette,
            raster: &raster,
            tolerance: 5,
        });

        // duplicate id + duplicate hex
        assert_eq!(result.error_count(), 2);
        // both absent from the all-black image
        assert_eq!(result.warning_count(), 2);
    }
}
