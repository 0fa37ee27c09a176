//! # Fancy - Colorized Console Output for Rust Values
//!
//! `fancy` prints values of any supported type to a terminal with
//! type-driven, true-color styling. The rule used for a value is chosen from
//! its static type: strings are quoted, booleans and numbers get their own
//! colors, durations carry a unit suffix, timestamps are formatted in UTC,
//! tuples render as `{a, b}` and collections as `[a, b]`, recursively.
//!
//! ## Core Concepts
//!
//! - [`Fancy`]: a renderer built once from a [`Config`] and passed by reference
//! - [`Render`]: the trait behind every rendering rule
//! - [`Line`]: a cursor for composing one log record on a sink
//! - [`Palette`] / [`Role`]: the semantic role → [`Style`](style::Style) mapping
//! - [`style`]: the escape-sequence codec
//!
//! ## Quick Start
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use fancy::{Config, Fancy, OutputMode};
//!
//! let fancy = Fancy::new(Config::new().with_output(OutputMode::Text));
//!
//! let map = BTreeMap::from([("key1", '1'), ("key2", '2')]);
//! assert_eq!(fancy.render(&map), r#"[{"key1", '1'}, {"key2", '2'}]"#);
//!
//! let tuple = (1, 2, 3.125, "String", 'c');
//! assert_eq!(fancy.render(&tuple), r#"{1, 2, 3.125, "String", 'c'}"#);
//! ```
//!
//! ## Log Lines
//!
//! ```rust,no_run
//! use fancy::Fancy;
//!
//! # fn main() -> Result<(), fancy::FancyError> {
//! let fancy = Fancy::stdout();
//! let mut out = std::io::stdout().lock();
//! fancy.line(&mut out).log_time()?.success()?.value("Something succeeded")?.end()?;
//! fancy.line(&mut out).log_time()?.failure()?.value("Something is wrong!")?.end()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Colors, tag labels, the time format and the output mode can be loaded from
//! YAML with [`Config::from_yaml`] or [`Config::from_file`]; see [`config`].

pub mod config;
mod error;
pub mod palette;
pub mod render;
mod stream;
pub mod style;

pub use config::{Config, ConfigError, Labels, OutputMode, TimeFormat};
pub use error::FancyError;
pub use palette::{Palette, Role};
pub use render::{
    Emitter, Hours, Micros, Millis, Minutes, Nanos, Plain, Render, Seconds, Span, Unit,
};
pub use stream::{Fancy, Line, Tag};
