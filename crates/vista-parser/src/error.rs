//! Error and diagnostic system for view content statements.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing at the offending tokens
//! - Severity levels
//! - Diagnostic collector for accumulating multiple lexer errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, source
//! locations, and help text. Diagnostics are wrapped in [`ParseError`] when
//! returned from [`apply`](crate::apply).
//!
//! # Example
//!
//! ```
//! # use vista_parser::error::{Diagnostic, ErrorCode};
//! # use vista_parser::Span;
//!
//! let diag = Diagnostic::error("The element/relationship \"teamA\" does not exist")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(8..13), "not found")
//!     .with_help("declare the identifier in the model before referencing it");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
