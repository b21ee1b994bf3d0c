//! Error types for Vista operations.
//!
//! This module provides the main error type [`VistaError`] which wraps the
//! error conditions of loading a manifest, applying view content and
//! exporting the result.

use std::io;

use thiserror::Error;

use vista_core::model::ModelError;
use vista_parser::ParseError;

use crate::manifest::{BuildError, ManifestError};

/// The main error type for Vista operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the content block of the failing view, so the
/// spans of its diagnostics can be rendered against it.
#[derive(Debug, Error)]
pub enum VistaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Manifest(#[from] ManifestError),

    #[error("invalid model: {0}")]
    Model(#[from] ModelError),

    #[error("view `{view}`: {err}")]
    Parse {
        err: ParseError,
        src: String,
        view: String,
    },

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl From<BuildError> for VistaError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::Manifest(err) => Self::Manifest(err),
            BuildError::Model(err) => Self::Model(err),
        }
    }
}

impl VistaError {
    /// Create a new `Parse` error for the content of `view`.
    pub fn new_parse_error(
        err: ParseError,
        src: impl Into<String>,
        view: impl Into<String>,
    ) -> Self {
        Self::Parse {
            err,
            src: src.into(),
            view: view.into(),
        }
    }
}
