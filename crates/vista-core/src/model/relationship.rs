//! Directed relationships between model elements.

use std::fmt;

use crate::identifier::Id;

/// A directed edge from a source element to a destination element.
#[derive(Debug, Clone)]
pub struct Relationship {
    id: Id,
    source: Id,
    destination: Id,
    description: Option<String>,
}

impl Relationship {
    /// Create a relationship without description.
    pub fn new(id: Id, source: Id, destination: Id) -> Self {
        Self {
            id,
            source,
            destination,
            description: None,
        }
    }

    /// Attach a description, e.g. `"Reads from"`.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn source(&self) -> Id {
        self.source
    }

    pub fn destination(&self) -> Id {
        self.destination
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the end opposite to `element`, or `None` if `element` is not
    /// an end of this relationship.
    ///
    /// A self-relationship has no opposite end.
    pub fn other_end(&self, element: Id) -> Option<Id> {
        if self.source == self.destination {
            None
        } else if self.source == element {
            Some(self.destination)
        } else if self.destination == element {
            Some(self.source)
        } else {
            None
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_end() {
        let a = Id::new("rel_test_a");
        let b = Id::new("rel_test_b");
        let c = Id::new("rel_test_c");
        let rel = Relationship::new(Id::new("rel_test_ab"), a, b);

        assert_eq!(rel.other_end(a), Some(b));
        assert_eq!(rel.other_end(b), Some(a));
        assert_eq!(rel.other_end(c), None);

        let self_rel = Relationship::new(Id::new("rel_test_aa"), a, a);
        assert_eq!(self_rel.other_end(a), None);
    }

    #[test]
    fn test_display() {
        let rel = Relationship::new(Id::new("r"), Id::new("user"), Id::new("api"))
            .with_description("Calls");
        assert_eq!(rel.to_string(), "user -> api");
        assert_eq!(rel.description(), Some("Calls"));
    }
}
