//! Relationship pattern resolution.
//!
//! A pattern `source -> destination` names each endpoint either by element
//! identifier or by the wildcard `*`. The wildcard stands for every element
//! the active view accepts.

use std::fmt;

use log::trace;
use thiserror::Error;

use vista_core::{identifier::Id, model::Relationship};

use crate::{context::ViewContext, interpret::WILDCARD};

/// Which end of a relationship pattern an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Destination => write!(f, "destination"),
        }
    }
}

/// A named pattern endpoint that is not an element of the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("The element \"{identifier}\" does not exist")]
pub struct UnresolvedElement {
    side: Side,
    identifier: String,
}

impl UnresolvedElement {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }
}

#[derive(Debug, Clone, Copy)]
enum Endpoint {
    Any,
    Element(Id),
}

impl Endpoint {
    fn resolve(
        context: &ViewContext<'_, '_>,
        pattern: &str,
        side: Side,
    ) -> Result<Self, UnresolvedElement> {
        if pattern == WILDCARD {
            return Ok(Endpoint::Any);
        }

        context
            .element(pattern)
            .map(|element| Endpoint::Element(element.id()))
            .ok_or_else(|| UnresolvedElement {
                side,
                identifier: pattern.to_string(),
            })
    }

    fn matches(self, context: &ViewContext<'_, '_>, id: Id) -> bool {
        match self {
            Endpoint::Element(expected) => expected == id,
            Endpoint::Any => context
                .model()
                .element(id)
                .is_some_and(|element| context.view().accepts(element.element_type())),
        }
    }
}

/// Find every relationship matching `source -> destination`.
///
/// Each relationship appears at most once, in model declaration order.
///
/// # Errors
///
/// Returns [`UnresolvedElement`] for the first named endpoint, source before
/// destination, that does not name an element. A relationship identifier is
/// not accepted as an endpoint.
pub fn resolve_relationships<'m>(
    context: &ViewContext<'m, '_>,
    source: &str,
    destination: &str,
) -> Result<Vec<&'m Relationship>, UnresolvedElement> {
    let source_endpoint = Endpoint::resolve(context, source, Side::Source)?;
    let destination_endpoint = Endpoint::resolve(context, destination, Side::Destination)?;

    let matched: Vec<&'m Relationship> = context
        .model()
        .relationships()
        .filter(|relationship| {
            source_endpoint.matches(context, relationship.source())
                && destination_endpoint.matches(context, relationship.destination())
        })
        .collect();

    trace!(source, destination, matched = matched.len(); "Resolved relationship pattern");
    Ok(matched)
}
