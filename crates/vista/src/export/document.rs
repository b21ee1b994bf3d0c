//! TOML membership document.
//!
//! ```toml
//! [[views]]
//! key = "containers"
//! kind = "container"
//! scope = "shop"
//! elements = ["web", "customer"]
//! relationships = ["visits"]
//! ```

use serde::Serialize;

use vista_core::view::{View, ViewType};

use super::{Error, Exporter};
use crate::Workspace;

/// Renders views as a TOML document with one `[[views]]` table per view.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlExporter;

#[derive(Serialize)]
struct Document<'a> {
    views: Vec<ViewEntry<'a>>,
}

#[derive(Serialize)]
struct ViewEntry<'a> {
    key: &'a str,
    kind: ViewType,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
    elements: Vec<String>,
    relationships: Vec<String>,
}

impl<'a> From<&'a View> for ViewEntry<'a> {
    fn from(view: &'a View) -> Self {
        Self {
            key: view.key(),
            kind: view.view_type(),
            scope: view.kind().scope().map(|scope| scope.to_string()),
            elements: view.elements().map(|id| id.to_string()).collect(),
            relationships: view.relationships().map(|id| id.to_string()).collect(),
        }
    }
}

impl Exporter for TomlExporter {
    fn export(&self, workspace: &Workspace) -> Result<String, Error> {
        let document = Document {
            views: workspace.views().map(ViewEntry::from).collect(),
        };
        Ok(toml::to_string(&document)?)
    }
}
