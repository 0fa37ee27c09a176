//! Renderer configuration: palette, tag labels, time format and output mode.
//!
//! A [`Config`] is built once, either programmatically or from YAML, and is
//! handed to [`Fancy::new`](crate::Fancy::new). Every field has a default, so
//! a YAML document only needs to name what it changes:
//!
//! ```rust
//! use fancy::{Config, OutputMode, Role};
//! use fancy::style::Rgb;
//!
//! let config = Config::from_yaml(r##"
//! colors:
//!   success: "#00ff00"
//!   emphasis: { fg: [255, 255, 255], bold: true }
//! labels:
//!   failure: FAIL
//! time_format: "%H:%M"
//! output: text
//! "##).unwrap();
//!
//! assert_eq!(config.palette.get(Role::Success).foreground(), Some(Rgb(0, 255, 0)));
//! assert_eq!(config.labels.failure, "FAIL");
//! assert_eq!(config.labels.success, "success");
//! assert_eq!(config.time_format.as_str(), "%H:%M");
//! assert_eq!(config.output, OutputMode::Text);
//! ```

mod error;
mod mode;

pub use error::ConfigError;
pub use mode::OutputMode;

use std::fmt;
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

use crate::palette::{Palette, Role};
use crate::style::Style;

/// Text shown inside the tag prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    pub message: String,
    pub success: String,
    pub warning: String,
    pub failure: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            message: "message".to_string(),
            success: "success".to_string(),
            warning: "warning".to_string(),
            failure: "failure".to_string(),
        }
    }
}

/// A strftime pattern that chrono is known to accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeFormat(String);

impl TimeFormat {
    pub fn new(format: impl Into<String>) -> Result<Self, ConfigError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidTimeFormat { format });
        }
        Ok(Self(format))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self("%H:%M:%S".to_string())
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a renderer needs, fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub palette: Palette,
    pub labels: Labels,
    pub time_format: TimeFormat,
    pub output: OutputMode,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    // A key present with no value (`colors:`) keeps the defaults.
    colors: Option<serde_yaml::Mapping>,
    labels: Option<Labels>,
    time_format: Option<String>,
    output: Option<OutputMode>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_style(mut self, role: Role, style: Style) -> Self {
        self.palette = self.palette.with(role, style);
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Loads a config from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let config = Self::parse(&content).map_err(|err| match err {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Creates a config from YAML content. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if parsing fails or a value is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config = Self::parse(yaml)?;
        tracing::debug!("loaded config from yaml");
        Ok(config)
    }

    fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as null; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: RawConfig = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            path: None,
            message: e.to_string(),
        })?;

        let mut palette = Palette::default();
        for (key, value) in raw.colors.iter().flatten() {
            let name = key.as_str().ok_or_else(|| ConfigError::UnknownRole {
                role: format!("{:?}", key),
            })?;
            let role = Role::from_name(name).ok_or_else(|| ConfigError::UnknownRole {
                role: name.to_string(),
            })?;
            palette = palette.with(role, Style::parse_value(value, name)?);
        }

        let time_format = match raw.time_format {
            Some(format) => TimeFormat::new(format)?,
            None => TimeFormat::default(),
        };

        Ok(Self {
            palette,
            labels: raw.labels.unwrap_or_default(),
            time_format,
            output: raw.output.unwrap_or_default(),
        })
    }
}
