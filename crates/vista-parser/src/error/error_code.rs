//! Error codes for the Vista diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Statement shape errors
//! - `E2xx` - Resolution errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unterminated string literal.
    ///
    /// A string was opened with a quote but never closed on the same line.
    E001,

    /// Invalid escape sequence.
    ///
    /// Only `\"` and `\\` are valid inside quoted tokens.
    E002,

    // =========================================================================
    // Statement Errors (E1xx)
    // =========================================================================
    /// Unknown statement.
    ///
    /// View content only accepts `include` and `exclude` statements.
    E100,

    /// Malformed statement.
    ///
    /// The statement has no arguments after its keyword.
    E101,

    // =========================================================================
    // Resolution Errors (E2xx)
    // =========================================================================
    /// Unresolved identifier.
    ///
    /// The identifier names neither an element nor a relationship of the model.
    E200,

    /// Element not applicable.
    ///
    /// The element exists but its type is not allowed on this type of view,
    /// e.g. a component on a container view.
    E201,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated string literal",
            ErrorCode::E002 => "invalid escape sequence",
            ErrorCode::E100 => "unknown statement",
            ErrorCode::E101 => "malformed statement",
            ErrorCode::E200 => "unresolved identifier",
            ErrorCode::E201 => "element not applicable to view",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E201.to_string(), "E201");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "unterminated string literal");
        assert_eq!(ErrorCode::E200.description(), "unresolved identifier");
        assert_eq!(
            ErrorCode::E201.description(),
            "element not applicable to view"
        );
    }
}
