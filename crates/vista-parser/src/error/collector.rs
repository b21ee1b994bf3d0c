//! Gathers the lexer diagnostics of one content line.

use crate::error::{Diagnostic, ParseError};

/// Lets the lexer keep scanning past a bad string literal, so a line with
/// several broken literals reports all of them at once.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Fails with everything emitted if at least one diagnostic is an
    /// error; a line with only warnings tokenizes cleanly.
    pub fn finish(self) -> Result<(), ParseError> {
        if self
            .diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity().is_error())
        {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }
}
