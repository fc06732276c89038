//! Human-readable legend of applied changes, used for download captions.

use std::fmt;

use serde::Serialize;

use crate::types::{ColorValue, Palette, ScreenColor};

use super::ChangeLedger;

/// One legend line: screen colour and what replaced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    pub name: String,
    pub hex: ColorValue,
    pub new_name: String,
    pub new_hex: ColorValue,
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) → {} ({})",
            self.name, self.hex, self.new_name, self.new_hex
        )
    }
}

/// Build legend lines in ledger order.
///
/// Entries whose screen colour is not in `screens` are skipped. A palette id
/// missing from `palette` falls back to the replacement hex as its name.
pub fn summarize(
    ledger: &ChangeLedger,
    screens: &[ScreenColor],
    palette: &Palette,
) -> Vec<ChangeSummary> {
    ledger
        .entries()
        .iter()
        .filter_map(|entry| {
            let screen = screens.iter().find(|s| s.id == entry.screen_color_id)?;
            let new_name = palette
                .get(&entry.palette_color_id)
                .map_or_else(|| entry.replacement_hex.to_hex(), |c| c.name.clone());

            Some(ChangeSummary {
                name: screen.name.clone(),
                hex: screen.hex,
                new_name,
                new_hex: entry.replacement_hex,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PaletteColor;

    #[test]
    fn test_summarize_in_ledger_order() {
        let screens = vec![
            ScreenColor::new("s1", ColorValue::rgb(255, 0, 0), "Red"),
            ScreenColor::new("s2", ColorValue::WHITE, "White"),
        ];
        let palette = Palette::new(vec![PaletteColor::new(
            "p1",
            ColorValue::rgb(0, 0, 255),
            "Navy",
        )]);

        let mut ledger = ChangeLedger::new();
        ledger.apply("s2", "p1", ColorValue::rgb(0, 0, 255));
        ledger.apply("s1", "p-deleted", ColorValue::rgb(0, 255, 0));
        ledger.apply("s-gone", "p1", ColorValue::rgb(0, 0, 255));

        let lines: Vec<String> = summarize(&ledger, &screens, &palette)
            .iter()
            .map(ToString::to_string)
            .collect();

        insta::assert_snapshot!(lines.join("\n"), @r"
        White (#ffffff) → Navy (#0000ff)
        Red (#ff0000) → #00ff00 (#00ff00)
        ");
    }
}
