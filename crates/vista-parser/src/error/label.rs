//! Spans of view content singled out by a diagnostic.

use crate::span::Span;

/// A message attached to part of a content block.
///
/// An unresolved identifier gets a primary label on its own token and a
/// secondary one covering the whole `include`/`exclude` statement.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Label the token that caused the diagnostic.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message.into(), true)
    }

    /// Label surrounding content, usually the enclosing statement.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message.into(), false)
    }

    fn new(span: Span, message: String, is_primary: bool) -> Self {
        Self {
            span,
            message,
            is_primary,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}
