//! Stderr reporting for the recolor CLI.
//!
//! Every progress line is `<verb> <message>` with the verb right-aligned in a
//! fixed column and tinted by its [`Tone`]. Stdout is reserved for data the
//! caller may pipe (sampled hex values, change rows as JSON).

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use crate::types::ColorValue;
use crate::validation::{Diagnostic, Severity};

const VERB_COLUMN: usize = 12;

const SGR_RESET: &str = "\x1b[0m";
const SGR_BOLD: &str = "\x1b[1m";
const SGR_FAINT: &str = "\x1b[2m";

/// How a status line should read at a glance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Note,
    Caution,
    Failure,
}

impl Tone {
    fn sgr(self) -> &'static str {
        match self {
            Tone::Progress => "\x1b[32m",
            Tone::Note => "\x1b[36m",
            Tone::Caution => "\x1b[33m",
            Tone::Failure => "\x1b[31m",
        }
    }
}

impl From<Severity> for Tone {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Warning => Tone::Caution,
            Severity::Error => Tone::Failure,
        }
    }
}

pub struct Printer {
    ansi: bool,
}

impl Printer {
    /// Styled output when stderr is a terminal.
    pub fn new() -> Self {
        Self {
            ansi: io::stderr().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { ansi: false }
    }

    pub fn status(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    /// Final line of a command that produced its output.
    pub fn success(&self, verb: &str, message: &str) {
        self.emit(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.emit(Tone::Note, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.emit(Tone::Caution, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.emit(Tone::Failure, verb, message);
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(SGR_FAINT, text)
    }

    /// `error` / `warning` label in its severity's colour.
    pub fn severity(&self, severity: Severity) -> String {
        let label = severity.to_string();
        if self.ansi {
            format!("{SGR_BOLD}{}{label}{SGR_RESET}", Tone::from(severity).sgr())
        } else {
            label
        }
    }

    /// One indented diagnostic line: `  error[code]: message`.
    pub fn diagnostic(&self, diagnostic: &Diagnostic) -> String {
        format!(
            "  {}[{}]: {}",
            self.severity(diagnostic.severity),
            self.dim(&diagnostic.code),
            diagnostic.message
        )
    }

    /// A colour as hex, preceded by a true-colour chip on terminals.
    pub fn swatch(&self, colour: ColorValue) -> String {
        if self.ansi {
            let ColorValue { r, g, b } = colour;
            format!("\x1b[48;2;{r};{g};{b}m  {SGR_RESET} {colour}")
        } else {
            colour.to_string()
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) -> String {
        let verb = format!("{verb:>VERB_COLUMN$}");
        format!("{} {message}", self.paint_bold(tone.sgr(), &verb))
    }

    fn emit(&self, tone: Tone, verb: &str, message: &str) {
        let line = self.line(tone, verb, message);
        let _ = writeln!(io::stderr().lock(), "{line}");
    }

    fn paint(&self, sgr: &str, text: &str) -> String {
        if self.ansi {
            format!("{sgr}{text}{SGR_RESET}")
        } else {
            text.to_string()
        }
    }

    fn paint_bold(&self, sgr: &str, text: &str) -> String {
        if self.ansi {
            format!("{SGR_BOLD}{sgr}{text}{SGR_RESET}")
        } else {
            text.to_string()
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// `plural(1, "pixel", "pixels")` is "1 pixel", any other count takes `many`.
pub fn plural(n: usize, one: &str, many: &str) -> String {
    let noun = if n == 1 { one } else { many };
    format!("{n} {noun}")
}

/// `path` relative to the working directory when it lives under it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(Path::to_path_buf));

    match relative {
        Some(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Some(rel) => rel.display().to_string(),
        None => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "pixel", "pixels"), "0 pixels");
        assert_eq!(plural(1, "saved change", "saved changes"), "1 saved change");
        assert_eq!(plural(4, "pixel", "pixels"), "4 pixels");
    }

    #[test]
    fn test_plain_verb_column() {
        let printer = Printer::plain();
        assert_eq!(
            printer.line(Tone::Progress, "Replaced", "4 pixels"),
            "    Replaced 4 pixels"
        );
        assert_eq!(
            printer.line(Tone::Caution, "Skipped", "nothing to redo"),
            "     Skipped nothing to redo"
        );
    }

    #[test]
    fn test_plain_diagnostic_and_swatch() {
        let printer = Printer::plain();
        let diagnostic = Diagnostic::error("recolor::validate::x", "two screens share #ff0000");

        assert_eq!(
            printer.diagnostic(&diagnostic),
            "  error[recolor::validate::x]: two screens share #ff0000"
        );
        assert_eq!(printer.swatch(ColorValue::rgb(0, 0, 255)), "#0000ff");
    }

    #[test]
    fn test_styled_swatch_has_chip() {
        let printer = Printer { ansi: true };
        let swatch = printer.swatch(ColorValue::rgb(1, 2, 3));

        assert!(swatch.starts_with("\x1b[48;2;1;2;3m"));
        assert!(swatch.ends_with(" #010203"));
    }

    #[test]
    fn test_severity_tone() {
        assert_eq!(Tone::from(Severity::Error), Tone::Failure);
        assert_eq!(Tone::from(Severity::Warning), Tone::Caution);
        assert_eq!(Printer::plain().severity(Severity::Warning), "warning");
    }

    #[test]
    fn test_display_path_outside_cwd() {
        let p = Path::new("/nonexistent/path/to/design.png");
        assert_eq!(display_path(p), "/nonexistent/path/to/design.png");
    }
}
