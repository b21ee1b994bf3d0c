//! Architecture model: elements, relationships and the graph that owns them.
//!
//! The [`Model`] is the single owner of every [`Element`] and [`Relationship`].
//! Element and relationship identifiers share one namespace, so an identifier
//! names at most one entity of either kind.
//!
//! # Example
//!
//! ```
//! # use vista_core::{identifier::Id, model::{Element, Model, Relationship}};
//! let mut model = Model::new();
//! let user = model.add_element(Element::person(Id::new("user"), "User")).unwrap();
//! let store = model
//!     .add_element(Element::software_system(Id::new("store"), "Online Store"))
//!     .unwrap();
//! model
//!     .add_relationship(Relationship::new(Id::new("uses"), user, store))
//!     .unwrap();
//!
//! assert_eq!(model.relationships_between(user, store).count(), 1);
//! ```

mod element;
mod error;
mod relationship;

pub use element::{Element, ElementKind, ElementType};
pub use error::ModelError;
pub use relationship::Relationship;

use indexmap::IndexMap;
use log::trace;

use crate::identifier::Id;

/// Owner of all elements and relationships of a workspace.
///
/// Entities are kept in declaration order, which is also the iteration order
/// of every query on the model.
#[derive(Debug, Default)]
pub struct Model {
    elements: IndexMap<Id, Element>,
    relationships: IndexMap<Id, Relationship>,
    next_anonymous: usize,
}

impl Model {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateIdentifier`] if the identifier is already
    /// used by an element or relationship, [`ModelError::UnknownParent`] if the
    /// parent of a container or component is not registered, and
    /// [`ModelError::InvalidParent`] if the parent has the wrong type.
    pub fn add_element(&mut self, element: Element) -> Result<Id, ModelError> {
        let id = element.id();
        self.ensure_unused(id)?;

        if let Some((parent, expected)) = element.kind().parent() {
            let Some(found) = self.elements.get(&parent) else {
                return Err(ModelError::UnknownParent {
                    element: id,
                    parent,
                });
            };
            if found.element_type() != expected {
                return Err(ModelError::InvalidParent {
                    element: id,
                    parent,
                    expected,
                    found: found.element_type(),
                });
            }
        }

        trace!(id:%, element_type:% = element.element_type(); "Registered element");
        self.elements.insert(id, element);
        Ok(id)
    }

    /// Register a relationship between two registered elements.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::DuplicateIdentifier`] if the identifier is taken
    /// and [`ModelError::UnknownEndpoint`] if either end is not an element.
    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<Id, ModelError> {
        let id = relationship.id();
        self.ensure_unused(id)?;

        for endpoint in [relationship.source(), relationship.destination()] {
            if !self.elements.contains_key(&endpoint) {
                return Err(ModelError::UnknownEndpoint {
                    relationship: id,
                    endpoint,
                });
            }
        }

        trace!(
            id:%,
            source:% = relationship.source(),
            destination:% = relationship.destination();
            "Registered relationship"
        );
        self.relationships.insert(id, relationship);
        Ok(id)
    }

    /// Register a relationship that was declared without an identifier.
    ///
    /// A fresh anonymous identifier is generated for it.
    ///
    /// # Errors
    ///
    /// Same as [`Model::add_relationship`].
    pub fn add_anonymous_relationship(
        &mut self,
        source: Id,
        destination: Id,
        description: Option<String>,
    ) -> Result<Id, ModelError> {
        let id = loop {
            let candidate = Id::from_anonymous(self.next_anonymous);
            self.next_anonymous += 1;
            if !self.contains(candidate) {
                break candidate;
            }
        };

        let mut relationship = Relationship::new(id, source, destination);
        if let Some(description) = description {
            relationship = relationship.with_description(description);
        }
        self.add_relationship(relationship)
    }

    /// Look up an element by identifier.
    pub fn element(&self, id: Id) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Look up a relationship by identifier.
    pub fn relationship(&self, id: Id) -> Option<&Relationship> {
        self.relationships.get(&id)
    }

    /// Returns `true` if the identifier names an element or a relationship.
    pub fn contains(&self, id: Id) -> bool {
        self.elements.contains_key(&id) || self.relationships.contains_key(&id)
    }

    /// Iterate over all elements in declaration order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Iterate over all relationships in declaration order.
    pub fn relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values()
    }

    /// Iterate over the direct children of `parent`.
    ///
    /// Children of a software system are its containers, children of a
    /// container are its components.
    pub fn children(&self, parent: Id) -> impl Iterator<Item = &Element> {
        self.elements
            .values()
            .filter(move |element| element.parent() == Some(parent))
    }

    /// Iterate over relationships from `source` to `destination`.
    pub fn relationships_between(
        &self,
        source: Id,
        destination: Id,
    ) -> impl Iterator<Item = &Relationship> {
        self.relationships.values().filter(move |relationship| {
            relationship.source() == source && relationship.destination() == destination
        })
    }

    /// Iterate over elements directly related to `id`, in either direction.
    ///
    /// An element related through several relationships is yielded once per
    /// relationship.
    pub fn neighbours(&self, id: Id) -> impl Iterator<Item = &Element> {
        self.relationships
            .values()
            .filter_map(move |relationship| relationship.other_end(id))
            .filter_map(|other| self.elements.get(&other))
    }

    fn ensure_unused(&self, id: Id) -> Result<(), ModelError> {
        if self.contains(id) {
            Err(ModelError::DuplicateIdentifier(id))
        } else {
            Ok(())
        }
    }
}
