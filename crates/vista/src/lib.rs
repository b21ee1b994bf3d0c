//! Vista - architecture model views driven by include/exclude statements.
//!
//! A workspace manifest declares the elements and relationships of a model
//! and the views over it. Each view lists `include` and `exclude` statements
//! that decide which elements and relationships it shows. This crate loads
//! the manifest, applies every view's statements and exports the resulting
//! memberships.

pub mod config;
pub mod export;
pub mod manifest;

mod error;

pub use vista_core::{identifier, model, view};
pub use vista_parser::{Diagnostic, ErrorCode, ParseError, Span};

pub use error::VistaError;

use indexmap::IndexMap;
use log::{debug, info, trace};

use vista_core::{model::Model, view::View};
use vista_parser::{InterpretConfig, ViewContext};

use config::{AppConfig, OutputFormat};
use export::{Exporter, document::TomlExporter, text::TextExporter};
use manifest::Manifest;

/// A warning raised while applying the content of a view.
#[derive(Debug, Clone)]
pub struct ContentWarning {
    view: String,
    src: String,
    diagnostic: Diagnostic,
}

impl ContentWarning {
    /// Key of the view whose content raised the warning.
    pub fn view(&self) -> &str {
        &self.view
    }

    /// The content block the diagnostic spans point into.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

/// A model together with its populated views.
#[derive(Debug)]
pub struct Workspace {
    model: Model,
    views: IndexMap<String, View>,
    warnings: Vec<ContentWarning>,
}

impl Workspace {
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Views in declaration order.
    pub fn views(&self) -> impl Iterator<Item = &View> {
        self.views.values()
    }

    pub fn view(&self, key: &str) -> Option<&View> {
        self.views.get(key)
    }

    pub fn warnings(&self) -> &[ContentWarning] {
        &self.warnings
    }
}

/// Builder for loading workspaces and exporting their views.
///
/// # Examples
///
/// ```rust
/// use vista::{WorkspaceBuilder, config::AppConfig};
///
/// let source = r#"
///     [[elements]]
///     id = "builder_user"
///     kind = "person"
///
///     [[views]]
///     key = "landscape"
///     kind = "system_landscape"
///     content = "include *"
/// "#;
///
/// let builder = WorkspaceBuilder::new(AppConfig::default());
/// let workspace = builder.parse(source).expect("Failed to parse");
/// let listing = builder.render(&workspace).expect("Failed to render");
///
/// assert!(listing.contains("builder_user"));
/// ```
#[derive(Debug, Default)]
pub struct WorkspaceBuilder {
    config: AppConfig,
}

impl WorkspaceBuilder {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load a manifest and apply the content of every view.
    ///
    /// Views are populated in declaration order. Warnings raised by view
    /// content are logged and kept on the [`Workspace`].
    ///
    /// # Errors
    ///
    /// Returns `VistaError` for malformed manifests, invalid models and
    /// views, and the first failing statement of any view content.
    pub fn parse(&self, source: &str) -> Result<Workspace, VistaError> {
        info!("Loading manifest");

        let manifest: Manifest = source.parse()?;
        let model = manifest.build_model()?;
        let mut views = manifest.build_views(&model)?;
        debug!(views = views.len(); "Manifest loaded");

        let interpret_config = InterpretConfig::new(self.config.views().include_neighbours());
        let mut warnings = Vec::new();

        for spec in manifest.view_specs() {
            let Some(view) = views.get_mut(spec.key()) else {
                continue;
            };

            let mut context = ViewContext::new(&model, view).with_config(interpret_config);
            let view_warnings = vista_parser::apply(spec.content(), &mut context)
                .map_err(|err| VistaError::new_parse_error(err, spec.content(), spec.key()))?;

            for diagnostic in view_warnings {
                debug!(view = spec.key(), warning:% = diagnostic; "View content warning");
                warnings.push(ContentWarning {
                    view: spec.key().to_string(),
                    src: spec.content().to_string(),
                    diagnostic,
                });
            }

            trace!(
                view = spec.key(),
                elements = view.elements().count(),
                relationships = view.relationships().count();
                "View populated"
            );
        }

        info!(views = views.len(), warnings = warnings.len(); "Views populated");
        Ok(Workspace {
            model,
            views,
            warnings,
        })
    }

    /// Export the views of `workspace` in the configured format.
    ///
    /// # Errors
    ///
    /// Returns `VistaError::Export` if the listing cannot be produced.
    pub fn render(&self, workspace: &Workspace) -> Result<String, VistaError> {
        self.render_as(workspace, self.config.output().format())
    }

    /// Export the views of `workspace` in `format`.
    ///
    /// # Errors
    ///
    /// Returns `VistaError::Export` if the listing cannot be produced.
    pub fn render_as(
        &self,
        workspace: &Workspace,
        format: OutputFormat,
    ) -> Result<String, VistaError> {
        debug!(format:%; "Exporting views");
        let output = match format {
            OutputFormat::Text => TextExporter.export(workspace)?,
            OutputFormat::Toml => TomlExporter.export(workspace)?,
        };
        Ok(output)
    }
}
