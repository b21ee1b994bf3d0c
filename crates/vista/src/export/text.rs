//! Human readable membership listing.
//!
//! ```text
//! [containers] container view of shop
//!   elements:
//!     - web: Web Application (container)
//!     - customer: Customer (person)
//!   relationships:
//!     - visits: customer -> web (Visits)
//! ```

use std::fmt::Write as _;

use vista_core::view::View;

use super::{Error, Exporter};
use crate::Workspace;

/// Renders views as an indented listing, one block per view.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExporter;

impl TextExporter {
    fn write_view(out: &mut String, workspace: &Workspace, view: &View) -> Result<(), Error> {
        write!(out, "[{}] {}", view.key(), view.view_type())?;
        if let Some(scope) = view.kind().scope() {
            write!(out, " of {scope}")?;
        }
        writeln!(out)?;

        let model = workspace.model();

        if view.elements().next().is_none() {
            writeln!(out, "  elements: none")?;
        } else {
            writeln!(out, "  elements:")?;
            for id in view.elements() {
                match model.element(id) {
                    Some(element) => writeln!(
                        out,
                        "    - {id}: {} ({})",
                        element.name(),
                        element.element_type()
                    )?,
                    None => writeln!(out, "    - {id}")?,
                }
            }
        }

        if view.relationships().next().is_none() {
            writeln!(out, "  relationships: none")?;
        } else {
            writeln!(out, "  relationships:")?;
            for id in view.relationships() {
                let Some(relationship) = model.relationship(id) else {
                    writeln!(out, "    - {id}")?;
                    continue;
                };
                write!(out, "    - {id}: {relationship}")?;
                if let Some(description) = relationship.description() {
                    write!(out, " ({description})")?;
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Exporter for TextExporter {
    fn export(&self, workspace: &Workspace) -> Result<String, Error> {
        let mut out = String::new();
        for (idx, view) in workspace.views().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            Self::write_view(&mut out, workspace, view)?;
        }
        Ok(out)
    }
}
