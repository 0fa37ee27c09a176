//! Style codec: colors and attributes to terminal escape sequences.
//!
//! A [`Style`] is an optional foreground color, an optional background color
//! and an ordered list of [`Attribute`]s. Its `Display` output is the exact
//! escape text a true-color terminal understands. Nothing here touches a
//! stream; the renderer decides when a style is written.
//!
//! ```rust
//! use fancy::style::{Attribute, Rgb, Style};
//!
//! let style = Style::new().fg(Rgb(46, 204, 113)).bold();
//! assert_eq!(style.to_string(), "\x1b[38;2;46;204;113m\x1b[1m");
//! assert_eq!(Attribute::Reset.to_string(), "\x1b[0m");
//! ```
//!
//! In a config file a style is either a bare color or a mapping:
//!
//! ```yaml
//! success: "#2ecc71"
//! emphasis:
//!   fg: [255, 255, 255]
//!   bold: true
//!   underline: true
//! ```

mod attribute;
mod color;

pub use attribute::{attribute_sequence, Attribute};
pub use color::{background_sequence, foreground_sequence, Bg, Fg, Rgb};

use std::fmt;

use crate::config::ConfigError;

/// The escape sequence that clears all styling.
pub const RESET: &str = "\x1b[0m";

/// An immutable color/attribute combination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    attributes: Vec<Attribute>,
}

impl Style {
    /// Creates an empty style. An empty style writes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, rgb: impl Into<Rgb>) -> Self {
        self.fg = Some(rgb.into());
        self
    }

    pub fn bg(mut self, rgb: impl Into<Rgb>) -> Self {
        self.bg = Some(rgb.into());
        self
    }

    /// Appends an attribute. Attributes are written in insertion order;
    /// adding one twice has no further effect.
    pub fn attr(mut self, attribute: Attribute) -> Self {
        if !self.attributes.contains(&attribute) {
            self.attributes.push(attribute);
        }
        self
    }

    pub fn bold(self) -> Self {
        self.attr(Attribute::Bold)
    }

    pub fn italic(self) -> Self {
        self.attr(Attribute::Italic)
    }

    pub fn underline(self) -> Self {
        self.attr(Attribute::Underline)
    }

    pub fn strike(self) -> Self {
        self.attr(Attribute::Strike)
    }

    pub fn blink(self) -> Self {
        self.attr(Attribute::Blink)
    }

    pub fn blink_fast(self) -> Self {
        self.attr(Attribute::BlinkFast)
    }

    pub fn foreground(&self) -> Option<Rgb> {
        self.fg
    }

    pub fn background(&self) -> Option<Rgb> {
        self.bg
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attributes.is_empty()
    }

    /// Parses a style from a config value.
    ///
    /// A string or `[r, g, b]` sequence is a foreground color. A mapping
    /// accepts `fg`, `bg` and boolean attribute keys (`bold`, `italic`,
    /// `underline`, `strike`, `blink`, `blink_fast`).
    pub fn parse_value(value: &serde_yaml::Value, role: &str) -> Result<Self, ConfigError> {
        match value {
            serde_yaml::Value::Mapping(map) => Self::parse_mapping(map, role),
            other => Rgb::parse_value(other)
                .map(|rgb| Style::new().fg(rgb))
                .map_err(|e| ConfigError::InvalidColor {
                    role: role.to_string(),
                    value: e,
                }),
        }
    }

    fn parse_mapping(map: &serde_yaml::Mapping, role: &str) -> Result<Self, ConfigError> {
        let mut style = Style::new();

        for (key, value) in map {
            let key_str = key.as_str().ok_or_else(|| ConfigError::InvalidDefinition {
                role: role.to_string(),
                message: format!("Non-string key in style definition: {:?}", key),
            })?;

            match key_str {
                "fg" | "bg" => {
                    let rgb = Rgb::parse_value(value).map_err(|e| ConfigError::InvalidColor {
                        role: role.to_string(),
                        value: e,
                    })?;
                    style = if key_str == "fg" {
                        style.fg(rgb)
                    } else {
                        style.bg(rgb)
                    };
                }
                name => {
                    let attribute = Attribute::from_name(name)
                        .filter(|a| *a != Attribute::Reset)
                        .ok_or_else(|| ConfigError::UnknownAttribute {
                            role: role.to_string(),
                            attribute: name.to_string(),
                        })?;
                    let enabled = value.as_bool().ok_or_else(|| ConfigError::InvalidDefinition {
                        role: role.to_string(),
                        message: format!("'{}' must be true or false", name),
                    })?;
                    if enabled {
                        style = style.attr(attribute);
                    }
                }
            }
        }

        Ok(style)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(rgb) = self.fg {
            write!(f, "{}", Fg(rgb))?;
        }
        if let Some(rgb) = self.bg {
            write!(f, "{}", Bg(rgb))?;
        }
        for attribute in &self.attributes {
            write!(f, "{}", attribute)?;
        }
        Ok(())
    }
}
