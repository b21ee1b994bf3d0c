//! Per-statement context over the model and the view being edited.

use vista_core::{
    identifier::Id,
    model::{Element, Model, Relationship},
    view::View,
};

use crate::interpret::InterpretConfig;

/// Result of resolving a statement token against the model.
///
/// Element and relationship identifiers share one namespace in the
/// [`Model`], so a token resolves to at most one of them.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'m> {
    Element(&'m Element),
    Relationship(&'m Relationship),
    NotFound,
}

/// Borrows the model and the view that statements are applied to.
///
/// The model is shared, the view is borrowed exclusively for as long as the
/// context lives.
#[derive(Debug)]
pub struct ViewContext<'m, 'v> {
    model: &'m Model,
    view: &'v mut View,
    config: InterpretConfig,
}

impl<'m, 'v> ViewContext<'m, 'v> {
    /// Create a context with the default [`InterpretConfig`].
    pub fn new(model: &'m Model, view: &'v mut View) -> Self {
        Self {
            model,
            view,
            config: InterpretConfig::default(),
        }
    }

    pub fn with_config(mut self, config: InterpretConfig) -> Self {
        self.config = config;
        self
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    pub fn view(&self) -> &View {
        self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        self.view
    }

    pub fn config(&self) -> &InterpretConfig {
        &self.config
    }

    /// Look up an element by identifier.
    pub fn element(&self, identifier: &str) -> Option<&'m Element> {
        Id::lookup(identifier).and_then(|id| self.model.element(id))
    }

    /// Look up a relationship by identifier.
    pub fn relationship(&self, identifier: &str) -> Option<&'m Relationship> {
        Id::lookup(identifier).and_then(|id| self.model.relationship(id))
    }

    /// Resolve a token to an element, a relationship, or nothing.
    pub fn lookup(&self, identifier: &str) -> Lookup<'m> {
        let Some(id) = Id::lookup(identifier) else {
            return Lookup::NotFound;
        };

        if let Some(element) = self.model.element(id) {
            Lookup::Element(element)
        } else if let Some(relationship) = self.model.relationship(id) {
            Lookup::Relationship(relationship)
        } else {
            Lookup::NotFound
        }
    }
}

#[cfg(test)]
mod tests {
    use vista_core::view::ViewKind;

    use super::*;

    #[test]
    fn test_lookup() {
        let mut model = Model::new();
        let user = model
            .add_element(Element::person(Id::new("ctx_user"), "User"))
            .unwrap();
        let system = model
            .add_element(Element::software_system(Id::new("ctx_system"), "System"))
            .unwrap();
        model
            .add_relationship(Relationship::new(Id::new("ctx_uses"), user, system))
            .unwrap();
        let mut view = View::new("ctx", ViewKind::SystemLandscape, &model).unwrap();
        let context = ViewContext::new(&model, &mut view);

        assert!(matches!(context.lookup("ctx_user"), Lookup::Element(e) if e.id() == user));
        assert!(matches!(
            context.lookup("ctx_uses"),
            Lookup::Relationship(r) if r.source() == user
        ));
        assert!(matches!(context.lookup("ctx_unknown"), Lookup::NotFound));

        assert!(context.element("ctx_uses").is_none());
        assert!(context.relationship("ctx_user").is_none());
        assert!(context.relationship("ctx_uses").is_some());
    }
}
