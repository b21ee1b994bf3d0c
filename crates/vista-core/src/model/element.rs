//! Element types of the architecture model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifier::Id;

/// The type of an element, without any type-specific data.
///
/// This is the tag used by the view classifier to decide which elements a
/// view may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    #[serde(alias = "custom_element")]
    Custom,
    Person,
    SoftwareSystem,
    Container,
    Component,
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementType::Custom => write!(f, "custom element"),
            ElementType::Person => write!(f, "person"),
            ElementType::SoftwareSystem => write!(f, "software system"),
            ElementType::Container => write!(f, "container"),
            ElementType::Component => write!(f, "component"),
        }
    }
}

/// Type-specific data of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Custom,
    Person,
    SoftwareSystem,
    /// A container always belongs to a software system.
    Container {
        software_system: Id,
    },
    /// A component always belongs to a container.
    Component {
        container: Id,
    },
}

impl ElementKind {
    /// Returns the [`ElementType`] tag of this kind.
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Custom => ElementType::Custom,
            ElementKind::Person => ElementType::Person,
            ElementKind::SoftwareSystem => ElementType::SoftwareSystem,
            ElementKind::Container { .. } => ElementType::Container,
            ElementKind::Component { .. } => ElementType::Component,
        }
    }

    /// Returns the parent identifier and the type the parent must have.
    pub fn parent(&self) -> Option<(Id, ElementType)> {
        match self {
            ElementKind::Custom | ElementKind::Person | ElementKind::SoftwareSystem => None,
            ElementKind::Container { software_system } => {
                Some((*software_system, ElementType::SoftwareSystem))
            }
            ElementKind::Component { container } => Some((*container, ElementType::Container)),
        }
    }
}

/// A node of the architecture model.
#[derive(Debug, Clone)]
pub struct Element {
    id: Id,
    name: String,
    kind: ElementKind,
}

impl Element {
    /// Create an element of the given kind.
    pub fn new(id: Id, name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
        }
    }

    /// Create a custom element.
    pub fn custom(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, ElementKind::Custom)
    }

    /// Create a person.
    pub fn person(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, ElementKind::Person)
    }

    /// Create a software system.
    pub fn software_system(id: Id, name: impl Into<String>) -> Self {
        Self::new(id, name, ElementKind::SoftwareSystem)
    }

    /// Create a container belonging to `software_system`.
    pub fn container(id: Id, name: impl Into<String>, software_system: Id) -> Self {
        Self::new(id, name, ElementKind::Container { software_system })
    }

    /// Create a component belonging to `container`.
    pub fn component(id: Id, name: impl Into<String>, container: Id) -> Self {
        Self::new(id, name, ElementKind::Component { container })
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn element_type(&self) -> ElementType {
        self.kind.element_type()
    }

    /// The parent element, for containers and components.
    pub fn parent(&self) -> Option<Id> {
        self.kind.parent().map(|(parent, _)| parent)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_type_display() {
        assert_eq!(ElementType::Custom.to_string(), "custom element");
        assert_eq!(ElementType::SoftwareSystem.to_string(), "software system");
    }

    #[test]
    fn test_kind_parent() {
        let system = Id::new("element_test_system");
        let container = Element::container(Id::new("element_test_web"), "Web", system);

        assert_eq!(container.element_type(), ElementType::Container);
        assert_eq!(
            container.kind().parent(),
            Some((system, ElementType::SoftwareSystem))
        );
        assert_eq!(Element::person(Id::new("p"), "P").parent(), None);
    }
}
