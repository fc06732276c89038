//! Diagnostic types for validation results.

use std::fmt;

use crate::error::{RecolorError, Result};

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code, e.g. "recolor::validate::duplicate-screen-hex".
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    pub fn warning(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

/// Collects diagnostics from validation checks.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// True when there are no diagnostics at all.
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn merge(&mut self, other: ValidationResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Fail with the first error, if any. Warnings never fail.
    pub fn into_result(self) -> Result<()> {
        let errors = self.error_count();
        match self
            .diagnostics
            .into_iter()
            .find(|d| d.severity == Severity::Error)
        {
            Some(first) => Err(RecolorError::Validation {
                message: format!("{} ({} error(s) in total)", first.message, errors),
                help: first.help,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert!(!result.has_errors());
        assert_eq!(result.error_count(), 0);
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::warning("recolor::test", "looks off"));

        assert!(!result.is_ok());
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 1);
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_into_result_reports_first_error() {
        let mut a = ValidationResult::new();
        a.push(Diagnostic::warning("recolor::w", "minor"));
        a.push(Diagnostic::error("recolor::a", "first").with_help("fix a"));

        let mut b = ValidationResult::new();
        b.push(Diagnostic::error("recolor::b", "second"));
        a.merge(b);

        match a.into_result() {
            Err(RecolorError::Validation { message, help }) => {
                assert_eq!(message, "first (2 error(s) in total)");
                assert_eq!(help.as_deref(), Some("fix a"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::error("recolor::validate::duplicate-screen-id", "dup");
        assert_eq!(d.to_string(), "error[recolor::validate::duplicate-screen-id]: dup");
    }
}
