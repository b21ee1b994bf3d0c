//! CLI logic for the Vista view tool.
//!
//! Loads a workspace manifest, applies the content of every view and writes
//! the resulting memberships.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io::Write as _};

use log::{info, warn};

use vista::{VistaError, WorkspaceBuilder};

/// Run the Vista CLI application
///
/// Writes the membership listing to `args.output`, or to stdout when no
/// output path is given. View content warnings are rendered and logged.
///
/// # Errors
///
/// Returns `VistaError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Manifest and model errors
/// - View content errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), VistaError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing workspace"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(format) = args.format {
        app_config = app_config.with_format(format);
    }

    let source = fs::read_to_string(&args.input)?;

    let builder = WorkspaceBuilder::new(app_config);
    let workspace = builder.parse(&source)?;

    for warning in workspace.warnings() {
        let rendered = error_adapter::render(&error_adapter::warning_reportable(warning));
        warn!("view `{}`\n{rendered}", warning.view());
    }

    let listing = builder.render(&workspace)?;

    match &args.output {
        Some(path) => {
            fs::write(path, listing)?;
            info!(output_file = path.as_str(); "Views exported successfully");
        }
        None => {
            std::io::stdout().lock().write_all(listing.as_bytes())?;
        }
    }

    Ok(())
}
