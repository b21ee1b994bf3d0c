//! Failure to apply a block of view content.

use std::fmt;

use crate::error::Diagnostic;

/// The diagnostics of the line that stopped a content block.
///
/// A lexer failure carries every malformed string literal of the line. A
/// statement failure carries the single diagnostic of that statement.
#[derive(Debug)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Shows the first diagnostic and counts the rest.
impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.diagnostics.split_first() else {
            return Ok(());
        };
        write!(f, "{first}")?;
        if !rest.is_empty() {
            write!(f, " (+{} more)", rest.len())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, lexer::tokenize};

    #[test]
    fn test_statement_failure() {
        let err = ParseError::from(
            Diagnostic::error("The element/relationship \"ghost\" does not exist")
                .with_code(ErrorCode::E200),
        );

        assert_eq!(err.diagnostics().len(), 1);
        assert_eq!(
            err.to_string(),
            "error[E200]: The element/relationship \"ghost\" does not exist"
        );
    }

    #[test]
    fn test_every_bad_literal_on_a_line() {
        let err = tokenize(r#"include "web\q" "db"#, 0).unwrap_err();

        assert_eq!(err.diagnostics().len(), 2);
        assert!(err.to_string().ends_with(" (+1 more)"));
    }

    #[test]
    fn test_empty_error_displays_nothing() {
        assert_eq!(ParseError::new(Vec::new()).to_string(), "");
    }
}
