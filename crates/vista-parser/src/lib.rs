//! # Vista Parser
//!
//! Interpreter for the content statements of Vista views. A block of view
//! content holds one statement per line; each `include` or `exclude`
//! statement adds model elements and relationships to the view or removes
//! them.
//!
//! ## Usage
//!
//! ```
//! # use vista_core::{identifier::Id, model::{Element, Model, Relationship}, view::{View, ViewKind}};
//! # use vista_parser::{apply, ParseError, ViewContext};
//!
//! fn main() -> Result<(), ParseError> {
//!     let mut model = Model::new();
//!     let user = model.add_element(Element::person(Id::new("doc_user"), "User")).unwrap();
//!     let shop = model.add_element(Element::software_system(Id::new("doc_shop"), "Shop")).unwrap();
//!     model.add_relationship(Relationship::new(Id::new("doc_uses"), user, shop)).unwrap();
//!
//!     let mut view = View::new("landscape", ViewKind::SystemLandscape, &model).unwrap();
//!     let source = "
//!         include *
//!         include doc_user -> *
//!     ";
//!     apply(source, &mut ViewContext::new(&model, &mut view))?;
//!
//!     assert_eq!(view.elements().count(), 2);
//!     assert_eq!(view.relationships().count(), 1);
//!     Ok(())
//! }
//! ```

mod context;
pub mod error;
mod interpret;
mod lexer;
mod resolve;
mod span;
mod tokens;

pub use context::{Lookup, ViewContext};
pub use error::{Diagnostic, ErrorCode, ParseError};
pub use interpret::{InterpretConfig, RELATIONSHIP_ARROW, WILDCARD, interpret};
pub use lexer::tokenize;
pub use resolve::{Side, UnresolvedElement, resolve_relationships};
pub use span::Span;
pub use tokens::{Token, Tokens};

use log::{debug, info};

/// Apply a block of view content to the view of `context`.
///
/// Statements are applied line by line, in order. Blank lines and comments
/// are skipped. The first failing line stops the block; the lines before it
/// stay applied.
///
/// # Returns
///
/// - `Ok(warnings)` - every statement was applied
/// - `Err(ParseError)` - the diagnostics of the failing line, with spans
///   relative to `source`
///
/// # Example
///
/// ```
/// # use vista_core::{identifier::Id, model::{Element, Model}, view::{View, ViewKind}};
/// # use vista_parser::{apply, ErrorCode, ViewContext};
/// let mut model = Model::new();
/// model.add_element(Element::person(Id::new("apply_user"), "User")).unwrap();
/// let mut view = View::new("landscape", ViewKind::SystemLandscape, &model).unwrap();
///
/// let err = apply("include apply_user\ninclude apply_ghost", &mut ViewContext::new(&model, &mut view))
///     .unwrap_err();
/// assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E200));
/// assert_eq!(view.elements().count(), 1);
/// ```
pub fn apply(
    source: &str,
    context: &mut ViewContext<'_, '_>,
) -> Result<Vec<Diagnostic>, ParseError> {
    info!(view = context.view().key(); "Applying view content");

    let mut warnings = Vec::new();
    let mut offset = 0;
    let mut statements = 0usize;

    for line in source.split('\n') {
        let tokens = tokenize(line, offset)?;
        offset += line.len() + 1;

        if tokens.is_empty() {
            continue;
        }

        warnings.extend(interpret(context, &tokens)?);
        statements += 1;
    }

    debug!(
        view = context.view().key(),
        statements,
        warnings = warnings.len();
        "View content applied"
    );
    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use vista_core::{
        identifier::Id,
        model::{Element, Model, Relationship},
        view::{View, ViewKind},
    };

    use super::*;

    fn model() -> Model {
        let mut model = Model::new();
        let user = model
            .add_element(Element::person(Id::new("lib_user"), "User"))
            .unwrap();
        let shop = model
            .add_element(Element::software_system(Id::new("lib_shop"), "Shop"))
            .unwrap();
        model
            .add_element(Element::software_system(Id::new("lib_bank"), "Bank"))
            .unwrap();
        model
            .add_relationship(Relationship::new(Id::new("lib_uses"), user, shop))
            .unwrap();
        model
    }

    #[test]
    fn test_apply_in_order() {
        let model = model();
        let mut view = View::new("landscape", ViewKind::SystemLandscape, &model).unwrap();
        let source = "\
# everything but the bank
include *

exclude lib_bank
  // and the one relationship
include lib_user -> lib_shop
";

        let warnings = apply(source, &mut ViewContext::new(&model, &mut view)).unwrap();

        assert!(warnings.is_empty());
        let elements: Vec<String> = view.elements().map(|id| id.to_string()).collect();
        assert_eq!(elements, vec!["lib_user", "lib_shop"]);
        assert_eq!(view.relationships().count(), 1);
    }

    #[test]
    fn test_apply_stops_at_first_error() {
        let model = model();
        let mut view = View::new("landscape", ViewKind::SystemLandscape, &model).unwrap();
        let source = "include lib_user\ninclude teamA lib_bank\ninclude lib_shop";

        let err = apply(source, &mut ViewContext::new(&model, &mut view)).unwrap_err();

        assert_eq!(err.diagnostics().len(), 1);
        let diag = &err.diagnostics()[0];
        assert_eq!(diag.code(), Some(ErrorCode::E200));
        // Spans are relative to the whole block.
        assert_eq!(diag.labels()[0].span(), Span::new(25..30));
        assert_eq!(&source[25..30], "teamA");

        let elements: Vec<String> = view.elements().map(|id| id.to_string()).collect();
        assert_eq!(elements, vec!["lib_user"]);
    }

    #[test]
    fn test_apply_reports_lexer_errors() {
        let model = model();
        let mut view = View::new("landscape", ViewKind::SystemLandscape, &model).unwrap();

        let err = apply(
            "include lib_user\ninclude \"lib_shop",
            &mut ViewContext::new(&model, &mut view),
        )
        .unwrap_err();

        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E001));
        assert_eq!(view.elements().count(), 1);
    }

    #[test]
    fn test_apply_collects_warnings() {
        let model = model();
        let mut view = View::new("landscape", ViewKind::SystemLandscape, &model).unwrap();

        let warnings = apply(
            "include lib_bank -> *\ninclude lib_shop -> lib_user",
            &mut ViewContext::new(&model, &mut view),
        )
        .unwrap();

        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_apply_crlf_lines() {
        let model = model();
        let mut view = View::new("landscape", ViewKind::SystemLandscape, &model).unwrap();

        apply(
            "include lib_user\r\ninclude lib_shop\r\n",
            &mut ViewContext::new(&model, &mut view),
        )
        .unwrap();

        assert_eq!(view.elements().count(), 2);
    }
}
