//! Configuration error types.

use std::path::{Path, PathBuf};

/// Error returned when a [`Config`](super::Config) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// YAML parse error.
    #[error("Failed to parse config{}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the YAML parser.
        message: String,
    },

    /// Invalid color format.
    #[error("Invalid color for role '{role}': {value}")]
    InvalidColor {
        /// Palette role where the error occurred.
        role: String,
        /// Description of the invalid value.
        value: String,
    },

    /// A `colors:` key that names no palette role.
    #[error("Unknown palette role '{role}'")]
    UnknownRole { role: String },

    /// Unknown attribute in a style definition.
    #[error("Unknown attribute '{attribute}' in style for role '{role}'")]
    UnknownAttribute { role: String, attribute: String },

    /// Invalid style definition structure.
    #[error("Invalid style for role '{role}': {message}")]
    InvalidDefinition { role: String, message: String },

    /// A time format pattern chrono cannot interpret.
    #[error("Invalid time format '{format}'")]
    InvalidTimeFormat { format: String },

    /// File loading error.
    #[error("Failed to load config: {message}")]
    Load { message: String },
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_deref()
        .map(|p: &Path| format!(" {}", p.display()))
        .unwrap_or_default()
}
