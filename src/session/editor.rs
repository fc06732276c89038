//! The edit session: the only entry point host code talks to.
//!
//! A session owns the working raster, its ledger and both history stacks.
//! Every operation is synchronous and leaves prior state untouched on error.
//! Callers that receive events from several places must serialize access to
//! a session themselves.

use crate::error::{RecolorError, Result};
use crate::raster::{substitute_colour, RasterBuffer};
use crate::types::{ColorValue, PaletteColor, ScreenColor, DEFAULT_TOLERANCE};

use super::{ChangeLedger, ChangeRow, HistoryStack, HistoryState, LedgerEntry};

/// Read-only export of a session's current state for persistence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub raster: RasterBuffer,
    pub ledger: ChangeLedger,
}

impl Commit {
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    pub fn rgba(&self) -> &[u8] {
        self.raster.as_bytes()
    }

    pub fn rows(&self) -> Vec<ChangeRow> {
        self.ledger.rows()
    }
}

/// Editing state for one design or matching.
#[derive(Debug, Clone)]
pub struct EditSession {
    original: RasterBuffer,
    raster: RasterBuffer,
    ledger: ChangeLedger,
    history: HistoryStack,
    screen_colors: Vec<ScreenColor>,
    tolerance: u8,
    unsaved: bool,
}

impl EditSession {
    /// Start editing an untouched design.
    pub fn new(original: RasterBuffer, screen_colors: Vec<ScreenColor>) -> Self {
        Self {
            raster: original.clone(),
            original,
            ledger: ChangeLedger::new(),
            history: HistoryStack::new(),
            screen_colors,
            tolerance: DEFAULT_TOLERANCE,
            unsaved: false,
        }
    }

    /// Reopen a saved matching by replaying its stored changes onto the original.
    ///
    /// The replayed state is the starting point: history starts empty and
    /// `reset` still returns to the untouched original.
    pub fn open(
        original: RasterBuffer,
        screen_colors: Vec<ScreenColor>,
        stored: impl IntoIterator<Item = LedgerEntry>,
    ) -> Result<Self> {
        Self::open_with_tolerance(original, screen_colors, stored, DEFAULT_TOLERANCE)
    }

    /// [`EditSession::open`] with a non-default tolerance used for the replay
    /// and for all later substitutions.
    pub fn open_with_tolerance(
        original: RasterBuffer,
        screen_colors: Vec<ScreenColor>,
        stored: impl IntoIterator<Item = LedgerEntry>,
        tolerance: u8,
    ) -> Result<Self> {
        let mut session = Self::new(original, screen_colors).with_tolerance(tolerance);

        // Later rows for the same screen colour chain from the earlier replacement.
        for entry in stored {
            let screen = session.screen_color(&entry.screen_color_id)?;
            let source = session.ledger.resolve(screen);
            substitute_colour(&mut session.raster, source, entry.replacement_hex, tolerance);
            session.ledger.apply(
                entry.screen_color_id,
                entry.palette_color_id,
                entry.replacement_hex,
            );
        }

        Ok(session)
    }

    /// Override the per-channel match tolerance.
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    /// Look up a configured screen colour.
    pub fn screen_color(&self, id: &str) -> Result<&ScreenColor> {
        self.screen_colors
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| RecolorError::UnknownScreenColor { id: id.to_string() })
    }

    pub fn screen_colors(&self) -> &[ScreenColor] {
        &self.screen_colors
    }

    /// The colour currently shown for a screen colour.
    pub fn current_colour(&self, screen_color_id: &str) -> Result<ColorValue> {
        let screen = self.screen_color(screen_color_id)?;
        Ok(self.ledger.resolve(screen))
    }

    /// Sample the working raster. Never mutates.
    pub fn pick_color(&self, x: i64, y: i64) -> Result<ColorValue> {
        self.raster.sample(x, y)
    }

    /// Replace whatever currently stands in for a screen colour with `new_hex`.
    ///
    /// Re-picking a screen colour replaces its current replacement, not the
    /// original hex. Returns the number of pixels rewritten.
    pub fn apply_substitution(
        &mut self,
        screen_color_id: &str,
        palette_color_id: &str,
        new_hex: &str,
    ) -> Result<usize> {
        let target = ColorValue::parse_hex(new_hex)?;
        self.apply_colour(screen_color_id, palette_color_id, target)
    }

    /// [`EditSession::apply_substitution`] with a palette record.
    pub fn apply_palette_color(
        &mut self,
        screen_color_id: &str,
        replacement: &PaletteColor,
    ) -> Result<usize> {
        self.apply_colour(screen_color_id, &replacement.id, replacement.hex)
    }

    fn apply_colour(
        &mut self,
        screen_color_id: &str,
        palette_color_id: &str,
        target: ColorValue,
    ) -> Result<usize> {
        let screen = self.screen_color(screen_color_id)?;
        let colour_to_replace = self.ledger.resolve(screen);

        self.history.record_before_edit(&self.raster, &self.ledger);
        let count = substitute_colour(&mut self.raster, colour_to_replace, target, self.tolerance);
        self.ledger.apply(screen_color_id, palette_color_id, target);
        self.unsaved = true;

        Ok(count)
    }

    pub fn undo(&mut self) -> Result<()> {
        self.history.undo(&mut self.raster, &mut self.ledger)?;
        self.unsaved = true;
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        self.history.redo(&mut self.raster, &mut self.ledger)?;
        self.unsaved = true;
        Ok(())
    }

    /// Return to the untouched original. Undoable.
    pub fn reset(&mut self) {
        self.history.record_before_edit(&self.raster, &self.ledger);
        self.raster = self.original.clone();
        self.ledger.clear();
        self.unsaved = true;
    }

    /// Export the current raster and ledger. History and the unsaved flag
    /// are left as they are.
    pub fn commit(&self) -> Commit {
        Commit {
            raster: self.raster.clone(),
            ledger: self.ledger.snapshot(),
        }
    }

    /// Acknowledge that the host persisted the last commit.
    pub fn mark_saved(&mut self) {
        self.unsaved = false;
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_state(&self) -> HistoryState {
        self.history.state()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn raster(&self) -> &RasterBuffer {
        &self.raster
    }

    pub fn original(&self) -> &RasterBuffer {
        &self.original
    }

    pub fn ledger(&self) -> &ChangeLedger {
        &self.ledger
    }
}
