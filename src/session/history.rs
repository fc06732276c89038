//! Linear undo/redo history of (raster, ledger) snapshots.
//!
//! Frames are captured *before* an edit. Depth is not capped: every frame
//! holds a full raster copy, so memory grows with the number of edits.
//! [`HistoryStack::memory_size`] reports the cost.

use std::mem;

use crate::error::{RecolorError, Result};
use crate::raster::RasterBuffer;

use super::ChangeLedger;

/// One saved (raster, ledger) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFrame {
    pub raster: RasterBuffer,
    pub ledger: ChangeLedger,
}

impl HistoryFrame {
    fn memory_size(&self) -> usize {
        self.raster.memory_size()
    }
}

/// Whether any edit can currently be undone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryState {
    /// No undo frames.
    Clean,
    /// At least one undo frame.
    Dirty,
}

/// Undo and redo stacks.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    undo: Vec<HistoryFrame>,
    redo: Vec<HistoryFrame>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Save the current state ahead of a mutation and drop any redo frames.
    pub fn record_before_edit(&mut self, raster: &RasterBuffer, ledger: &ChangeLedger) {
        self.undo.push(HistoryFrame {
            raster: raster.clone(),
            ledger: ledger.snapshot(),
        });
        self.redo.clear();
    }

    /// Step back one edit, moving the current state onto the redo stack.
    pub fn undo(&mut self, raster: &mut RasterBuffer, ledger: &mut ChangeLedger) -> Result<()> {
        let frame = self.undo.pop().ok_or(RecolorError::NothingToUndo)?;
        let current = swap_in(frame, raster, ledger);
        self.redo.push(current);
        Ok(())
    }

    /// Re-apply the most recently undone edit.
    pub fn redo(&mut self, raster: &mut RasterBuffer, ledger: &mut ChangeLedger) -> Result<()> {
        let frame = self.redo.pop().ok_or(RecolorError::NothingToRedo)?;
        let current = swap_in(frame, raster, ledger);
        self.undo.push(current);
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    pub fn state(&self) -> HistoryState {
        if self.undo.is_empty() {
            HistoryState::Clean
        } else {
            HistoryState::Dirty
        }
    }

    /// Bytes of raster memory held across both stacks.
    pub fn memory_size(&self) -> usize {
        self.undo
            .iter()
            .chain(self.redo.iter())
            .map(HistoryFrame::memory_size)
            .sum()
    }
}

/// Install `frame` as the live state and hand back what it replaced.
fn swap_in(
    frame: HistoryFrame,
    raster: &mut RasterBuffer,
    ledger: &mut ChangeLedger,
) -> HistoryFrame {
    let HistoryFrame {
        raster: frame_raster,
        ledger: frame_ledger,
    } = frame;

    HistoryFrame {
        raster: mem::replace(raster, frame_raster),
        ledger: mem::replace(ledger, frame_ledger),
    }
}
