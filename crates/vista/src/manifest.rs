//! Workspace manifests.
//!
//! A manifest is a TOML document declaring the elements and relationships of
//! a model and the views over it. Each view carries a block of content
//! statements that [`WorkspaceBuilder`](crate::WorkspaceBuilder) applies
//! after the model is built.
//!
//! ```toml
//! [[elements]]
//! id = "shop"
//! name = "Online Shop"
//! kind = "software_system"
//!
//! [[elements]]
//! id = "web"
//! kind = "container"
//! parent = "shop"
//!
//! [[relationships]]
//! source = "web"
//! destination = "shop"
//!
//! [[views]]
//! key = "containers"
//! kind = "container"
//! scope = "shop"
//! content = "include *"
//! ```

use std::str::FromStr;

use indexmap::IndexMap;
use log::{debug, trace};
use serde::Deserialize;
use thiserror::Error;

use vista_core::{
    identifier::Id,
    model::{Element, ElementType, Model, ModelError, Relationship},
    view::{View, ViewError, ViewType},
};
use vista_parser::{RELATIONSHIP_ARROW, WILDCARD};

/// Errors in the structure of a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("invalid manifest: {0}")]
    Syntax(#[from] toml::de::Error),

    #[error("element `{element}`: a {kind} needs a parent")]
    MissingParent { element: String, kind: ElementType },

    #[error("element `{element}`: a {kind} does not take a parent")]
    UnexpectedParent { element: String, kind: ElementType },

    #[error("`{0}` is reserved by view content statements and can not be used as an identifier")]
    ReservedIdentifier(String),

    #[error("view `{0}` is declared more than once")]
    DuplicateView(String),

    #[error(transparent)]
    View(#[from] ViewError),
}

/// The deserialized manifest, before anything is resolved.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    elements: Vec<ElementSpec>,

    #[serde(default)]
    relationships: Vec<RelationshipSpec>,

    #[serde(default)]
    views: Vec<ViewSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ElementSpec {
    id: String,
    name: Option<String>,
    kind: ElementType,
    parent: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RelationshipSpec {
    id: Option<String>,
    source: String,
    destination: String,
    description: Option<String>,
}

/// A view declaration and its unapplied content.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewSpec {
    key: String,
    kind: ViewType,
    scope: Option<String>,
    #[serde(default)]
    content: String,
}

impl ViewSpec {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl FromStr for Manifest {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

impl Manifest {
    pub fn view_specs(&self) -> &[ViewSpec] {
        &self.views
    }

    /// Build the model: elements first, in declaration order, then
    /// relationships.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Manifest`] when a parent is missing or not
    /// allowed or an identifier is a reserved token, and [`BuildError::Model`] when the model rejects an element
    /// or relationship.
    pub fn build_model(&self) -> Result<Model, BuildError> {
        let mut model = Model::new();

        for spec in &self.elements {
            let element = spec.to_element()?;
            model.add_element(element)?;
        }

        for spec in &self.relationships {
            let source = Id::new(&spec.source);
            let destination = Id::new(&spec.destination);
            match &spec.id {
                Some(id) => {
                    check_identifier(id)?;
                    let mut relationship = Relationship::new(Id::new(id), source, destination);
                    if let Some(description) = &spec.description {
                        relationship = relationship.with_description(description.clone());
                    }
                    model.add_relationship(relationship)?;
                }
                None => {
                    model.add_anonymous_relationship(
                        source,
                        destination,
                        spec.description.clone(),
                    )?;
                }
            }
        }

        debug!(
            elements = self.elements.len(),
            relationships = self.relationships.len();
            "Model built"
        );
        Ok(model)
    }

    /// Create every declared view, empty, keyed by view key.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::DuplicateView`] for a repeated key and
    /// [`ManifestError::View`] when a scope is missing, unexpected or does not
    /// name an element of the right type.
    pub fn build_views(&self, model: &Model) -> Result<IndexMap<String, View>, ManifestError> {
        let mut views = IndexMap::with_capacity(self.views.len());

        for spec in &self.views {
            if views.contains_key(&spec.key) {
                return Err(ManifestError::DuplicateView(spec.key.clone()));
            }

            let scope = spec.scope.as_deref().map(Id::new);
            let view = View::from_parts(spec.key.clone(), spec.kind, scope, model)?;
            trace!(key = spec.key, view_type:% = spec.kind; "Created view");
            views.insert(spec.key.clone(), view);
        }

        Ok(views)
    }
}

impl ElementSpec {
    fn to_element(&self) -> Result<Element, ManifestError> {
        check_identifier(&self.id)?;
        let id = Id::new(&self.id);
        let name = self.name.clone().unwrap_or_else(|| self.id.clone());

        match (self.kind, &self.parent) {
            (ElementType::Container, Some(parent)) => {
                Ok(Element::container(id, name, Id::new(parent)))
            }
            (ElementType::Component, Some(parent)) => {
                Ok(Element::component(id, name, Id::new(parent)))
            }
            (ElementType::Container | ElementType::Component, None) => {
                Err(ManifestError::MissingParent {
                    element: self.id.clone(),
                    kind: self.kind,
                })
            }
            (_, Some(_)) => Err(ManifestError::UnexpectedParent {
                element: self.id.clone(),
                kind: self.kind,
            }),
            (ElementType::Custom, None) => Ok(Element::custom(id, name)),
            (ElementType::Person, None) => Ok(Element::person(id, name)),
            (ElementType::SoftwareSystem, None) => Ok(Element::software_system(id, name)),
        }
    }
}

/// Reject identifiers that content statements read as syntax.
fn check_identifier(id: &str) -> Result<(), ManifestError> {
    if id == WILDCARD || id == RELATIONSHIP_ARROW {
        return Err(ManifestError::ReservedIdentifier(id.to_string()));
    }
    Ok(())
}

/// Errors raised while building the model of a manifest.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
