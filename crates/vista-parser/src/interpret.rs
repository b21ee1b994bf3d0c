//! Interpretation of `include` and `exclude` statements.
//!
//! A statement is classified by its token shape, in this order:
//!
//! 1. no arguments: malformed;
//! 2. `<*|id> -> <*|id>`: relationship pattern, see [`resolve_relationships`];
//! 3. `include` with any `*` argument: the view's default elements;
//! 4. otherwise every argument names an element or a relationship.
//!
//! `exclude *` has no default-elements form. It reaches the identifier list
//! and fails because `*` names nothing.
//!
//! Effects are applied token by token. A failing token does not undo the
//! effects of the tokens before it.

use std::fmt;

use log::{debug, trace};

use vista_core::{
    model::{Element, ElementType, Relationship},
    view::ViewError,
};

use crate::{
    context::{Lookup, ViewContext},
    error::{Diagnostic, ErrorCode},
    resolve::{Side, resolve_relationships},
    span::Span,
    tokens::Tokens,
};

/// Wildcard token: every element, or every eligible element in a pattern.
pub const WILDCARD: &str = "*";

/// Separates the source and destination of a relationship pattern.
pub const RELATIONSHIP_ARROW: &str = "->";

const FIRST_IDENTIFIER_INDEX: usize = 1;
const RELATIONSHIP_ARROW_INDEX: usize = 2;
const RELATIONSHIP_DESTINATION_INDEX: usize = 3;
const RELATIONSHIP_TOKEN_COUNT: usize = 4;

/// Configuration for statement interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterpretConfig {
    /// Whether `include *` on a scoped view also adds the elements directly
    /// related to its default elements.
    pub include_neighbours: bool,
}

impl InterpretConfig {
    pub fn new(include_neighbours: bool) -> Self {
        Self { include_neighbours }
    }
}

impl Default for InterpretConfig {
    fn default() -> Self {
        Self {
            include_neighbours: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Statement {
    Include,
    Exclude,
}

impl Statement {
    fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("include") {
            Some(Statement::Include)
        } else if keyword.eq_ignore_ascii_case("exclude") {
            Some(Statement::Exclude)
        } else {
            None
        }
    }

    fn expected_form(self) -> &'static str {
        match self {
            Statement::Include => {
                "Expected: include <*|identifier> [identifier...] or include <*|identifier> -> <*|identifier>"
            }
            Statement::Exclude => {
                "Expected: exclude <identifier> [identifier...] or exclude <*|identifier> -> <*|identifier>"
            }
        }
    }

    fn not_applicable_message(self, identifier: &str) -> String {
        match self {
            Statement::Include => {
                format!("The element \"{identifier}\" can not be added to this type of view")
            }
            Statement::Exclude => {
                format!("The element \"{identifier}\" can not be added to this view")
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Include => write!(f, "include"),
            Statement::Exclude => write!(f, "exclude"),
        }
    }
}

/// Apply one statement to the view of `context`.
///
/// Blank token sequences are accepted and change nothing.
///
/// # Returns
///
/// - `Ok(warnings)` - the statement was applied; warnings flag patterns that
///   matched no relationship
/// - `Err(Diagnostic)` - the statement failed; effects of arguments before the
///   failing one are kept
pub fn interpret(
    context: &mut ViewContext<'_, '_>,
    tokens: &Tokens,
) -> Result<Vec<Diagnostic>, Diagnostic> {
    let Some(keyword) = tokens.get(0) else {
        return Ok(Vec::new());
    };

    let statement = Statement::from_keyword(keyword).ok_or_else(|| {
        Diagnostic::error(format!("unknown statement `{keyword}`"))
            .with_code(ErrorCode::E100)
            .with_label(token_span(tokens, 0), "unknown statement")
            .with_help("view content supports `include` and `exclude` statements")
    })?;

    debug!(view = context.view().key(), statement:%, tokens:%; "Interpreting statement");

    if !tokens.includes(FIRST_IDENTIFIER_INDEX) {
        return Err(Diagnostic::error(statement.expected_form())
            .with_code(ErrorCode::E101)
            .with_label(tokens.statement_span(), "missing identifiers"));
    }

    if let Some((source, destination)) = relationship_pattern(tokens) {
        apply_relationship_pattern(context, statement, tokens, source, destination)
    } else if statement == Statement::Include && tokens.contains(WILDCARD) {
        apply_default_elements(context, tokens)?;
        Ok(Vec::new())
    } else {
        apply_identifiers(context, statement, tokens)?;
        Ok(Vec::new())
    }
}

/// The `source` and `destination` of a `<keyword> <source> -> <destination>`
/// statement, or `None` for any other shape.
fn relationship_pattern(tokens: &Tokens) -> Option<(&str, &str)> {
    match (
        tokens.len(),
        tokens.get(FIRST_IDENTIFIER_INDEX),
        tokens.get(RELATIONSHIP_ARROW_INDEX),
        tokens.get(RELATIONSHIP_DESTINATION_INDEX),
    ) {
        (RELATIONSHIP_TOKEN_COUNT, Some(source), Some(RELATIONSHIP_ARROW), Some(destination)) => {
            Some((source, destination))
        }
        _ => None,
    }
}

fn apply_relationship_pattern(
    context: &mut ViewContext<'_, '_>,
    statement: Statement,
    tokens: &Tokens,
    source: &str,
    destination: &str,
) -> Result<Vec<Diagnostic>, Diagnostic> {
    let relationships = resolve_relationships(context, source, destination).map_err(|err| {
        let index = match err.side() {
            Side::Source => FIRST_IDENTIFIER_INDEX,
            Side::Destination => RELATIONSHIP_DESTINATION_INDEX,
        };
        Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E200)
            .with_label(token_span(tokens, index), format!("unknown {} element", err.side()))
            .with_help("relationship patterns name elements, or `*` for every element")
    })?;

    if relationships.is_empty() {
        return Ok(vec![
            Diagnostic::warning(format!(
                "no relationships match `{source} {RELATIONSHIP_ARROW} {destination}`"
            ))
            .with_label(tokens.statement_span(), format!("this {statement} has no effect")),
        ]);
    }

    let view = context.view_mut();
    for relationship in relationships {
        match statement {
            Statement::Include => view.add_relationship(relationship),
            Statement::Exclude => view.remove_relationship(relationship),
        };
    }

    Ok(Vec::new())
}

fn apply_default_elements(
    context: &mut ViewContext<'_, '_>,
    tokens: &Tokens,
) -> Result<(), Diagnostic> {
    let model = context.model();
    let include_neighbours = context.config().include_neighbours;

    context
        .view_mut()
        .add_default_elements(model, include_neighbours)
        .map_err(|err| {
            Diagnostic::error(err.to_string())
                .with_label(tokens.statement_span(), "while adding the default elements")
        })
}

fn apply_identifiers(
    context: &mut ViewContext<'_, '_>,
    statement: Statement,
    tokens: &Tokens,
) -> Result<(), Diagnostic> {
    for (index, token) in tokens.iter().enumerate().skip(FIRST_IDENTIFIER_INDEX) {
        let identifier = token.text();

        match context.lookup(identifier) {
            Lookup::Element(element) => {
                apply_element(context, statement, element).map_err(|err| {
                    not_applicable(statement, identifier, token.span(), err)
                })?;
            }
            Lookup::Relationship(relationship) => {
                apply_relationship(context, statement, relationship);
            }
            Lookup::NotFound => {
                return Err(Diagnostic::error(format!(
                    "The element/relationship \"{identifier}\" does not exist"
                ))
                .with_code(ErrorCode::E200)
                .with_label(token.span(), "not found")
                .with_secondary_label(tokens.statement_span(), format!("in this {statement}"))
                .with_help("identifiers must name an element or relationship of the model"));
            }
        }

        trace!(index, identifier; "Applied identifier");
    }

    Ok(())
}

fn apply_element(
    context: &mut ViewContext<'_, '_>,
    statement: Statement,
    element: &Element,
) -> Result<(), ViewError> {
    let view = context.view_mut();
    match statement {
        Statement::Include => view.add_element(element)?,
        Statement::Exclude => view.remove_element(element)?,
    };
    Ok(())
}

fn apply_relationship(
    context: &mut ViewContext<'_, '_>,
    statement: Statement,
    relationship: &Relationship,
) {
    let view = context.view_mut();
    match statement {
        Statement::Include => view.add_relationship(relationship),
        Statement::Exclude => view.remove_relationship(relationship),
    };
}

fn not_applicable(statement: Statement, identifier: &str, span: Span, err: ViewError) -> Diagnostic {
    let diagnostic = Diagnostic::error(statement.not_applicable_message(identifier))
        .with_code(ErrorCode::E201);

    match err {
        ViewError::ElementNotApplicable {
            element_type,
            view_type,
            ..
        } => {
            let diagnostic = diagnostic.with_label(
                span,
                format!("a {element_type} is not allowed on a {view_type}"),
            );
            match element_type {
                ElementType::Container => diagnostic
                    .with_help("containers can only be shown on container and component views"),
                ElementType::Component => {
                    diagnostic.with_help("components can only be shown on component views")
                }
                ElementType::Custom | ElementType::Person | ElementType::SoftwareSystem => {
                    diagnostic
                }
            }
        }
        other => diagnostic.with_label(span, other.to_string()),
    }
}

fn token_span(tokens: &Tokens, index: usize) -> Span {
    tokens
        .span(index)
        .unwrap_or_else(|| tokens.statement_span())
}
