//! Command-line argument definitions for the Vista CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the output format and logging verbosity.

use clap::Parser;

use vista::config::OutputFormat;

/// Command-line arguments for the Vista view tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the workspace manifest (TOML)
    #[arg(help = "Path to the input manifest")]
    pub input: String,

    /// Path to the output file; the listing goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format (text, toml); overrides the configuration file
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
