use thiserror::Error;

use crate::{identifier::Id, model::ElementType};

/// Errors raised while registering entities in a [`Model`](super::Model).
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("identifier `{0}` is already used by another element or relationship")]
    DuplicateIdentifier(Id),

    #[error("parent `{parent}` of element `{element}` does not exist")]
    UnknownParent { element: Id, parent: Id },

    #[error("parent `{parent}` of element `{element}` must be a {expected}, found a {found}")]
    InvalidParent {
        element: Id,
        parent: Id,
        expected: ElementType,
        found: ElementType,
    },

    #[error("element `{endpoint}` referenced by relationship `{relationship}` does not exist")]
    UnknownEndpoint { relationship: Id, endpoint: Id },
}
