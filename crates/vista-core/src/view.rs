//! Views: typed, scoped subsets of the model meant for one diagram.
//!
//! A [`View`] owns two membership sets, one of element identifiers and one of
//! relationship identifiers. Every element mutation is checked against the
//! classifier table of [`ViewType::accepts`], so a view never holds an element
//! its type forbids. Relationships are not classified.
//!
//! Membership is a set: adding a present member or removing an absent one is
//! a no-op.

mod error;
mod kind;

pub use error::ViewError;
pub use kind::{ViewKind, ViewType};

use indexmap::IndexSet;
use log::{debug, trace};

use crate::{
    identifier::Id,
    model::{Element, ElementType, Model, Relationship},
};

/// A diagram view and its current membership.
#[derive(Debug, Clone)]
pub struct View {
    key: String,
    kind: ViewKind,
    elements: IndexSet<Id>,
    relationships: IndexSet<Id>,
}

impl View {
    /// Create an empty view, checking its scope against `model`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::UnknownScope`] if the scope element does not exist
    /// and [`ViewError::InvalidScope`] if it has the wrong type.
    pub fn new(key: impl Into<String>, kind: ViewKind, model: &Model) -> Result<Self, ViewError> {
        let key = key.into();

        if let (Some(scope), Some(expected)) = (kind.scope(), kind.view_type().scope_type()) {
            let Some(element) = model.element(scope) else {
                return Err(ViewError::UnknownScope { view: key, scope });
            };
            if element.element_type() != expected {
                return Err(ViewError::InvalidScope {
                    view: key,
                    scope,
                    expected,
                    found: element.element_type(),
                });
            }
        }

        Ok(Self {
            key,
            kind,
            elements: IndexSet::new(),
            relationships: IndexSet::new(),
        })
    }

    /// Create an empty view from a view type and an optional scope.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::MissingScope`] or [`ViewError::UnexpectedScope`]
    /// when the scope does not fit the view type, otherwise the errors of
    /// [`View::new`].
    pub fn from_parts(
        key: impl Into<String>,
        view_type: ViewType,
        scope: Option<Id>,
        model: &Model,
    ) -> Result<Self, ViewError> {
        let key = key.into();
        match ViewKind::from_parts(view_type, scope) {
            Some(kind) => Self::new(key, kind, model),
            None if scope.is_some() => Err(ViewError::UnexpectedScope {
                view: key,
                view_type,
            }),
            None => Err(ViewError::MissingScope {
                view: key,
                view_type,
            }),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn view_type(&self) -> ViewType {
        self.kind.view_type()
    }

    /// Returns `true` if `element_type` may appear on this view.
    pub fn accepts(&self, element_type: ElementType) -> bool {
        self.view_type().accepts(element_type)
    }

    /// Element members, in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = Id> + '_ {
        self.elements.iter().copied()
    }

    /// Relationship members, in insertion order.
    pub fn relationships(&self) -> impl Iterator<Item = Id> + '_ {
        self.relationships.iter().copied()
    }

    pub fn contains_element(&self, id: Id) -> bool {
        self.elements.contains(&id)
    }

    pub fn contains_relationship(&self, id: Id) -> bool {
        self.relationships.contains(&id)
    }

    /// Add an element, returning `true` if it was not a member yet.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ElementNotApplicable`] if the element type is not
    /// allowed on this view.
    pub fn add_element(&mut self, element: &Element) -> Result<bool, ViewError> {
        self.check_applicable(element)?;
        let inserted = self.elements.insert(element.id());
        trace!(view = self.key, element:% = element.id(), inserted; "Add element");
        Ok(inserted)
    }

    /// Remove an element, returning `true` if it was a member.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::ElementNotApplicable`] if the element type is not
    /// allowed on this view, even when the element is absent.
    pub fn remove_element(&mut self, element: &Element) -> Result<bool, ViewError> {
        self.check_applicable(element)?;
        let removed = self.elements.shift_remove(&element.id());
        trace!(view = self.key, element:% = element.id(), removed; "Remove element");
        Ok(removed)
    }

    /// Add a relationship, returning `true` if it was not a member yet.
    pub fn add_relationship(&mut self, relationship: &Relationship) -> bool {
        let inserted = self.relationships.insert(relationship.id());
        trace!(view = self.key, relationship:% = relationship.id(), inserted; "Add relationship");
        inserted
    }

    /// Remove a relationship, returning `true` if it was a member.
    pub fn remove_relationship(&mut self, relationship: &Relationship) -> bool {
        let removed = self.relationships.shift_remove(&relationship.id());
        trace!(view = self.key, relationship:% = relationship.id(), removed; "Remove relationship");
        removed
    }

    /// Populate the view with its default elements.
    ///
    /// - system landscape: every person and software system;
    /// - system context: the scoped software system;
    /// - container: the containers of the scoped software system;
    /// - component: the components of the scoped container.
    ///
    /// With `include_neighbours`, scoped views also receive the elements
    /// directly related to that core set which the view type accepts, other
    /// than the scope itself. Custom elements, people and software systems
    /// are pulled in this way, plus containers on component views.
    ///
    /// # Errors
    ///
    /// Returns a [`ViewError`] if the model no longer contains the scope.
    pub fn add_default_elements(
        &mut self,
        model: &Model,
        include_neighbours: bool,
    ) -> Result<(), ViewError> {
        let before = self.elements.len();

        let core: Vec<&Element> = match self.kind {
            ViewKind::SystemLandscape => model
                .elements()
                .filter(|element| {
                    matches!(
                        element.element_type(),
                        ElementType::Person | ElementType::SoftwareSystem
                    )
                })
                .collect(),
            ViewKind::SystemContext { software_system } => {
                vec![self.scope_element(model, software_system)?]
            }
            ViewKind::Container { software_system } => model.children(software_system).collect(),
            ViewKind::Component { container } => model.children(container).collect(),
        };

        for element in &core {
            self.add_element(element)?;
        }

        if let Some(scope) = self.kind.scope().filter(|_| include_neighbours) {
            let neighbour_types: &[ElementType] = match self.kind {
                ViewKind::SystemLandscape => &[],
                ViewKind::SystemContext { .. } | ViewKind::Container { .. } => &[
                    ElementType::Custom,
                    ElementType::Person,
                    ElementType::SoftwareSystem,
                ],
                ViewKind::Component { .. } => &[
                    ElementType::Custom,
                    ElementType::Person,
                    ElementType::SoftwareSystem,
                    ElementType::Container,
                ],
            };

            for element in &core {
                for neighbour in model.neighbours(element.id()) {
                    if neighbour.id() != scope
                        && neighbour_types.contains(&neighbour.element_type())
                    {
                        self.add_element(neighbour)?;
                    }
                }
            }
        }

        debug!(
            view = self.key,
            view_type:% = self.view_type(),
            added = self.elements.len() - before;
            "Added default elements"
        );
        Ok(())
    }

    fn scope_element<'m>(&self, model: &'m Model, scope: Id) -> Result<&'m Element, ViewError> {
        model.element(scope).ok_or_else(|| ViewError::UnknownScope {
            view: self.key.clone(),
            scope,
        })
    }

    fn check_applicable(&self, element: &Element) -> Result<(), ViewError> {
        if self.accepts(element.element_type()) {
            Ok(())
        } else {
            Err(ViewError::ElementNotApplicable {
                element: element.id(),
                element_type: element.element_type(),
                view_type: self.view_type(),
            })
        }
    }
}
