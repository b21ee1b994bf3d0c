//! Configuration types for applying and exporting views.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML configuration file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`ViewsConfig`] - How view content statements are applied.
//! - [`OutputConfig`] - Which [`OutputFormat`] the membership listing uses.
//!
//! # Example
//!
//! ```
//! # use vista::config::{AppConfig, OutputFormat};
//! let config: AppConfig = toml::from_str(
//!     r#"
//!     [views]
//!     include_neighbours = false
//!
//!     [output]
//!     format = "toml"
//!     "#,
//! )
//! .unwrap();
//!
//! assert!(!config.views().include_neighbours());
//! assert_eq!(config.output().format(), OutputFormat::Toml);
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    views: ViewsConfig,

    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    pub fn new(views: ViewsConfig, output: OutputConfig) -> Self {
        Self { views, output }
    }

    pub fn views(&self) -> &ViewsConfig {
        &self.views
    }

    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Replace the output format, keeping everything else.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}

/// Settings for applying view content.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewsConfig {
    /// Whether `include *` on scoped views also adds directly related
    /// elements.
    #[serde(default = "default_include_neighbours")]
    include_neighbours: bool,
}

impl ViewsConfig {
    pub fn new(include_neighbours: bool) -> Self {
        Self { include_neighbours }
    }

    pub fn include_neighbours(&self) -> bool {
        self.include_neighbours
    }
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            include_neighbours: default_include_neighbours(),
        }
    }
}

fn default_include_neighbours() -> bool {
    true
}

/// Settings for the membership listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    format: OutputFormat,
}

impl OutputConfig {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Format of the membership listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented, human readable listing.
    #[default]
    Text,
    /// A TOML document with one `[[views]]` table per view.
    Toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "toml" => Ok(OutputFormat::Toml),
            other => Err(format!(
                "unsupported output format `{other}`, expected `text` or `toml`"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Toml => write!(f, "toml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert!(config.views().include_neighbours());
        assert_eq!(config.output().format(), OutputFormat::Text);

        let empty: AppConfig = toml::from_str("").unwrap();
        assert!(empty.views().include_neighbours());
    }

    #[test]
    fn test_partial_sections() {
        let config: AppConfig = toml::from_str("[views]\n").unwrap();
        assert!(config.views().include_neighbours());

        let config: AppConfig = toml::from_str("[output]\nformat = \"toml\"\n").unwrap();
        assert_eq!(config.output().format(), OutputFormat::Toml);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("TOML".parse::<OutputFormat>(), Ok(OutputFormat::Toml));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("svg".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_with_format() {
        let config = AppConfig::default().with_format(OutputFormat::Toml);
        assert_eq!(config.output().format(), OutputFormat::Toml);
    }
}
