//! recolor - screen-colour substitution engine
//!
//! Samples colours from a design, rewrites every pixel close to a screen
//! colour with a replacement colour, and keeps an undoable ledger of which
//! screen colour currently maps to which replacement.

pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod raster;
pub mod session;
pub mod types;
pub mod validation;

pub use error::{RecolorError, Result};
pub use manifest::Manifest;
pub use raster::{load_image, substitute, substitute_colour, write_png, RasterBuffer};
pub use session::{
    summarize, ChangeLedger, ChangeRow, ChangeSummary, Commit, EditSession, HistoryStack,
    HistoryState, LedgerEntry,
};
pub use types::{ColorValue, Palette, PaletteColor, ScreenColor, DEFAULT_TOLERANCE};
pub use validation::{validate_inputs, Diagnostic, SessionInputs, Severity, ValidationResult};
