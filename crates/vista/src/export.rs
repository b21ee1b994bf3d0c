//! Export of view memberships.
//!
//! This module provides the [`Exporter`] trait, the last stage of the
//! pipeline:
//!
//! ```text
//! Manifest (TOML)
//!     ↓ build
//! Model + empty views
//!     ↓ apply view content
//! Populated views (Workspace)
//!     ↓ export (this module)
//! Membership listing
//! ```
//!
//! # Available Backends
//!
//! - [`text`] - indented listing for people, via [`text::TextExporter`]
//! - [`document`] - TOML document for tools, via [`document::TomlExporter`]

pub mod document;
pub mod text;

use thiserror::Error;

use crate::Workspace;

/// Abstraction for membership export backends.
pub trait Exporter {
    /// Render every view of `workspace`, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the listing cannot be produced.
    fn export(&self, workspace: &Workspace) -> Result<String, Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`VistaError::Export`](crate::VistaError::Export) at the
/// crate boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("render error: {0}")]
    Render(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] ::toml::ser::Error),
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::Render(err.to_string())
    }
}
