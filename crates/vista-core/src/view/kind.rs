//! View kinds and the element classifier table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{identifier::Id, model::ElementType};

/// The type of a view, without its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    SystemLandscape,
    SystemContext,
    Container,
    Component,
}

impl ViewType {
    /// Returns `true` if elements of `element_type` may appear on views of
    /// this type.
    ///
    /// | Element type    | Legal view types     |
    /// |-----------------|----------------------|
    /// | custom element  | any                  |
    /// | person          | any                  |
    /// | software system | any                  |
    /// | container       | container, component |
    /// | component       | component            |
    pub fn accepts(self, element_type: ElementType) -> bool {
        match (element_type, self) {
            (ElementType::Custom | ElementType::Person | ElementType::SoftwareSystem, _) => true,
            (ElementType::Container, ViewType::Container | ViewType::Component) => true,
            (ElementType::Container, ViewType::SystemLandscape | ViewType::SystemContext) => false,
            (ElementType::Component, ViewType::Component) => true,
            (
                ElementType::Component,
                ViewType::SystemLandscape | ViewType::SystemContext | ViewType::Container,
            ) => false,
        }
    }

    /// The element type a view of this type must be scoped to, if any.
    pub fn scope_type(self) -> Option<ElementType> {
        match self {
            ViewType::SystemLandscape => None,
            ViewType::SystemContext | ViewType::Container => Some(ElementType::SoftwareSystem),
            ViewType::Component => Some(ElementType::Container),
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewType::SystemLandscape => write!(f, "system landscape view"),
            ViewType::SystemContext => write!(f, "system context view"),
            ViewType::Container => write!(f, "container view"),
            ViewType::Component => write!(f, "component view"),
        }
    }
}

/// A view type together with the element the view is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    SystemLandscape,
    SystemContext { software_system: Id },
    Container { software_system: Id },
    Component { container: Id },
}

impl ViewKind {
    /// Build a view kind from its type and optional scope.
    ///
    /// Returns `None` when a scope is required but missing, or given to a
    /// view type that takes none.
    pub fn from_parts(view_type: ViewType, scope: Option<Id>) -> Option<Self> {
        match (view_type, scope) {
            (ViewType::SystemLandscape, None) => Some(ViewKind::SystemLandscape),
            (ViewType::SystemContext, Some(software_system)) => {
                Some(ViewKind::SystemContext { software_system })
            }
            (ViewType::Container, Some(software_system)) => {
                Some(ViewKind::Container { software_system })
            }
            (ViewType::Component, Some(container)) => Some(ViewKind::Component { container }),
            _ => None,
        }
    }

    pub fn view_type(&self) -> ViewType {
        match self {
            ViewKind::SystemLandscape => ViewType::SystemLandscape,
            ViewKind::SystemContext { .. } => ViewType::SystemContext,
            ViewKind::Container { .. } => ViewType::Container,
            ViewKind::Component { .. } => ViewType::Component,
        }
    }

    /// The element this view is scoped to.
    pub fn scope(&self) -> Option<Id> {
        match self {
            ViewKind::SystemLandscape => None,
            ViewKind::SystemContext { software_system }
            | ViewKind::Container { software_system } => Some(*software_system),
            ViewKind::Component { container } => Some(*container),
        }
    }
}
