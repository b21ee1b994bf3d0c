//! How serious a diagnostic is.

use std::fmt;

/// Errors abort the content block of a view at the failing line. Warnings
/// flag statements that applied cleanly but changed nothing, such as a
/// relationship pattern without matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        *self == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        *self == Severity::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Diagnostic;

    #[test]
    fn test_statement_severities() {
        let unresolved = Diagnostic::error("The element/relationship \"ghost\" does not exist");
        let no_matches = Diagnostic::warning("no relationships match `web -> db`");

        assert!(unresolved.severity().is_error());
        assert!(no_matches.severity().is_warning());
        assert_eq!(no_matches.severity().to_string(), "warning");
    }
}
