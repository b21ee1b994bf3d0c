use thiserror::Error;

use crate::{identifier::Id, model::ElementType, view::ViewType};

/// Errors raised while creating or mutating a [`View`](super::View).
#[derive(Debug, Clone, Error)]
pub enum ViewError {
    /// The element type is not allowed on this type of view.
    #[error("element `{element}` ({element_type}) cannot be added to a {view_type}")]
    ElementNotApplicable {
        element: Id,
        element_type: ElementType,
        view_type: ViewType,
    },

    #[error("view `{view}`: a {view_type} needs a scope")]
    MissingScope { view: String, view_type: ViewType },

    #[error("view `{view}`: a {view_type} does not take a scope")]
    UnexpectedScope { view: String, view_type: ViewType },

    #[error("view `{view}`: scope `{scope}` does not exist")]
    UnknownScope { view: String, scope: Id },

    #[error("view `{view}`: scope `{scope}` must be a {expected}, found a {found}")]
    InvalidScope {
        view: String,
        scope: Id,
        expected: ElementType,
        found: ElementType,
    },
}
