//! Record of which screen colour currently maps to which replacement.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{ColorValue, ScreenColor};

/// One active substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub screen_color_id: String,
    pub palette_color_id: String,
    pub replacement_hex: ColorValue,
}

/// A persistable row: screen colour to palette colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRow {
    pub screen_color_id: String,
    pub palette_color_id: String,
}

/// Ordered mapping from screen colour id to its active replacement.
///
/// At most one entry exists per screen colour. Re-applying a screen colour
/// overwrites its entry in place, keeping its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<LedgerEntry>", into = "Vec<LedgerEntry>")]
pub struct ChangeLedger {
    entries: Vec<LedgerEntry>,
    index: HashMap<String, usize>,
}

impl ChangeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `screen_color_id`.
    pub fn apply(
        &mut self,
        screen_color_id: impl Into<String>,
        palette_color_id: impl Into<String>,
        replacement_hex: ColorValue,
    ) {
        let entry = LedgerEntry {
            screen_color_id: screen_color_id.into(),
            palette_color_id: palette_color_id.into(),
            replacement_hex,
        };

        match self.index.get(&entry.screen_color_id) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.index
                    .insert(entry.screen_color_id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// The colour currently standing in for `screen` in the working raster:
    /// its replacement if one is active, otherwise its own hex.
    pub fn resolve(&self, screen: &ScreenColor) -> ColorValue {
        self.get(&screen.id)
            .map_or(screen.hex, |entry| entry.replacement_hex)
    }

    pub fn get(&self, screen_color_id: &str) -> Option<&LedgerEntry> {
        self.index
            .get(screen_color_id)
            .map(|&slot| &self.entries[slot])
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Value copy for history frames.
    pub fn snapshot(&self) -> ChangeLedger {
        self.clone()
    }

    /// Replace all entries with those of `snapshot`.
    pub fn restore(&mut self, snapshot: ChangeLedger) {
        *self = snapshot;
    }

    /// Entries in the order their screen colours were first substituted.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Rows for relational persistence.
    pub fn rows(&self) -> Vec<ChangeRow> {
        self.entries
            .iter()
            .map(|e| ChangeRow {
                screen_color_id: e.screen_color_id.clone(),
                palette_color_id: e.palette_color_id.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<LedgerEntry>> for ChangeLedger {
    fn from(entries: Vec<LedgerEntry>) -> Self {
        let mut ledger = Self::new();
        for entry in entries {
            ledger.apply(entry.screen_color_id, entry.palette_color_id, entry.replacement_hex);
        }
        ledger
    }
}

impl From<ChangeLedger> for Vec<LedgerEntry> {
    fn from(ledger: ChangeLedger) -> Self {
        ledger.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BLUE: ColorValue = ColorValue::rgb(0, 0, 255);
    const GREEN: ColorValue = ColorValue::rgb(0, 255, 0);

    fn red_screen() -> ScreenColor {
        ScreenColor::new("s1", ColorValue::rgb(255, 0, 0), "Red")
    }

    #[test]
    fn test_resolve_falls_back_to_screen_hex() {
        let ledger = ChangeLedger::new();
        assert_eq!(ledger.resolve(&red_screen()), ColorValue::rgb(255, 0, 0));
    }

    #[test]
    fn test_apply_then_resolve() {
        let mut ledger = ChangeLedger::new();
        ledger.apply("s1", "p1", BLUE);
        assert_eq!(ledger.resolve(&red_screen()), BLUE);
        assert_eq!(ledger.get("s1").map(|e| e.palette_color_id.as_str()), Some("p1"));
    }

    #[test]
    fn test_apply_replaces_in_place() {
        let mut ledger = ChangeLedger::new();
        ledger.apply("s1", "p1", BLUE);
        ledger.apply("s2", "p1", BLUE);
        ledger.apply("s1", "p2", GREEN);

        assert_eq!(ledger.len(), 2);
        assert_eq!(
            ledger.rows(),
            vec![
                ChangeRow {
                    screen_color_id: "s1".into(),
                    palette_color_id: "p2".into()
                },
                ChangeRow {
                    screen_color_id: "s2".into(),
                    palette_color_id: "p1".into()
                },
            ]
        );
        assert_eq!(ledger.resolve(&red_screen()), GREEN);
    }

    #[test]
    fn test_clear_matches_fresh_ledger() {
        let mut ledger = ChangeLedger::new();
        ledger.apply("s1", "p1", BLUE);
        ledger.clear();
        assert!(ledger.is_empty());
        assert_eq!(ledger, ChangeLedger::new());
        assert_eq!(ledger.resolve(&red_screen()), ColorValue::rgb(255, 0, 0));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut ledger = ChangeLedger::new();
        ledger.apply("s1", "p1", BLUE);
        let snapshot = ledger.snapshot();

        ledger.apply("s1", "p2", GREEN);
        ledger.apply("s3", "p2", GREEN);
        assert_ne!(ledger, snapshot);

        ledger.restore(snapshot.clone());
        assert_eq!(ledger, snapshot);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_serde_as_entry_list() {
        let mut ledger = ChangeLedger::new();
        ledger.apply("s1", "p1", BLUE);

        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(
            json,
            r##"[{"screen_color_id":"s1","palette_color_id":"p1","replacement_hex":"#0000ff"}]"##
        );

        let back: ChangeLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
