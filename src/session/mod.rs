//! Edit session module for recolor.
//!
//! - `ChangeLedger` - which screen colour currently maps to which replacement
//! - `HistoryStack` - linear undo/redo of (raster, ledger) snapshots
//! - `EditSession` - the facade that ties them to a raster

mod editor;
mod history;
mod ledger;
mod summary;

pub use editor::{Commit, EditSession};
pub use history::{HistoryFrame, HistoryStack, HistoryState};
pub use ledger::{ChangeLedger, ChangeRow, LedgerEntry};
pub use summary::{summarize, ChangeSummary};
