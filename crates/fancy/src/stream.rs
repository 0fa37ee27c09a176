//! The renderer value and the per-line cursor used to build log records.
//!
//! A [`Fancy`] holds the configuration and nothing else. Call sites borrow it
//! and either render a value to a `String` or open a [`Line`] on a sink and
//! chain writes onto it:
//!
//! ```rust
//! use fancy::{Config, Fancy, OutputMode};
//!
//! # fn main() -> Result<(), fancy::FancyError> {
//! let fancy = Fancy::new(Config::new().with_output(OutputMode::Text));
//! let mut out = Vec::new();
//!
//! fancy
//!     .line(&mut out)
//!     .success()?
//!     .value("Something succeeded")?
//!     .end()?;
//! fancy
//!     .line(&mut out)
//!     .text("SomeInts: ")?
//!     .value(&vec![1, 2, 3])?
//!     .end()?;
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "[success] \"Something succeeded\"\nSomeInts: [1, 2, 3]\n"
//! );
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::config::{Config, OutputMode};
use crate::error::FancyError;
use crate::palette::Role;
use crate::render::{Emitter, Render};

/// The four log-level tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Message,
    Success,
    Warning,
    Failure,
}

impl Tag {
    pub fn role(self) -> Role {
        match self {
            Tag::Message => Role::Info,
            Tag::Success => Role::Success,
            Tag::Warning => Role::Warning,
            Tag::Failure => Role::Failure,
        }
    }

    fn label(self, config: &Config) -> &str {
        match self {
            Tag::Message => &config.labels.message,
            Tag::Success => &config.labels.success,
            Tag::Warning => &config.labels.warning,
            Tag::Failure => &config.labels.failure,
        }
    }
}

/// A configured renderer.
///
/// Whether color is used is decided once, here, from
/// [`Config::output`](crate::Config::output).
#[derive(Debug, Clone)]
pub struct Fancy {
    config: Config,
    color: bool,
}

impl Fancy {
    pub fn new(config: Config) -> Self {
        let color = config.output.should_use_color();
        Self { config, color }
    }

    /// Default palette, color only when stdout is a color terminal.
    pub fn stdout() -> Self {
        Self::new(Config::default().with_output(OutputMode::Auto))
    }

    /// Builds a renderer from a YAML config file.
    ///
    /// # Errors
    ///
    /// Returns [`FancyError::Config`] if the file cannot be read or parsed.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self, FancyError> {
        Ok(Self::new(Config::from_file(path)?))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn uses_color(&self) -> bool {
        self.color
    }

    fn emitter(&self) -> Emitter<'_> {
        Emitter::new(&self.config, self.color)
    }

    /// Renders `value` to a string.
    pub fn render<T: Render + ?Sized>(&self, value: &T) -> String {
        let mut out = self.emitter();
        out.value(value);
        out.into_string()
    }

    /// Renders `value` with the emphasis style applied first.
    pub fn render_important<T: Render + ?Sized>(&self, value: &T) -> String {
        let mut out = self.emitter();
        self.emit_important(&mut out, value);
        out.into_string()
    }

    /// Renders `[label] ` in the tag's colors.
    pub fn render_tag(&self, tag: Tag) -> String {
        let mut out = self.emitter();
        self.emit_tag(&mut out, tag);
        out.into_string()
    }

    /// Renders `[timestamp] ` for the given instant.
    pub fn render_timestamp(&self, at: &DateTime<Utc>) -> String {
        let mut out = self.emitter();
        out.styled(Role::Brace, '[');
        out.value(at);
        out.styled(Role::Brace, "] ");
        out.reset();
        out.into_string()
    }

    /// Renders `value` and writes it to `sink` in a single write.
    pub fn write<W, T>(&self, sink: &mut W, value: &T) -> Result<(), FancyError>
    where
        W: Write + ?Sized,
        T: Render + ?Sized,
    {
        sink.write_all(self.render(value).as_bytes())?;
        Ok(())
    }

    /// Opens a cursor that appends to `sink` until [`Line::end`].
    pub fn line<'a, W: Write + ?Sized>(&'a self, sink: &'a mut W) -> Line<'a, W> {
        Line { fancy: self, sink }
    }

    fn emit_important<T: Render + ?Sized>(&self, out: &mut Emitter<'_>, value: &T) {
        out.role(Role::Emphasis);
        out.value(value);
        if !T::RESETS {
            out.reset();
        }
    }

    fn emit_tag(&self, out: &mut Emitter<'_>, tag: Tag) {
        out.styled(Role::Brace, '[');
        out.styled(tag.role(), tag.label(&self.config));
        out.styled(Role::Brace, "] ");
        out.reset();
    }
}

impl Default for Fancy {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

/// A cursor over one logical output line.
///
/// Every method writes immediately and hands the cursor back, so a record
/// is built as a chain: `line.log_time()?.warning()?.value(&x)?.end()?`.
#[must_use = "a line is only terminated by calling `end`"]
pub struct Line<'a, W: Write + ?Sized> {
    fancy: &'a Fancy,
    sink: &'a mut W,
}

impl<'a, W: Write + ?Sized> Line<'a, W> {
    fn put(self, text: &str) -> Result<Self, FancyError> {
        self.sink.write_all(text.as_bytes())?;
        Ok(self)
    }

    /// `[HH:MM:SS] ` for the current UTC time.
    pub fn log_time(self) -> Result<Self, FancyError> {
        self.log_time_at(&Utc::now())
    }

    pub fn log_time_at(self, at: &DateTime<Utc>) -> Result<Self, FancyError> {
        let text = self.fancy.render_timestamp(at);
        self.put(&text)
    }

    pub fn tag(self, tag: Tag) -> Result<Self, FancyError> {
        let text = self.fancy.render_tag(tag);
        self.put(&text)
    }

    pub fn message(self) -> Result<Self, FancyError> {
        self.tag(Tag::Message)
    }

    pub fn success(self) -> Result<Self, FancyError> {
        self.tag(Tag::Success)
    }

    pub fn warning(self) -> Result<Self, FancyError> {
        self.tag(Tag::Warning)
    }

    pub fn failure(self) -> Result<Self, FancyError> {
        self.tag(Tag::Failure)
    }

    pub fn value<T: Render + ?Sized>(self, value: &T) -> Result<Self, FancyError> {
        let text = self.fancy.render(value);
        self.put(&text)
    }

    pub fn important<T: Render + ?Sized>(self, value: &T) -> Result<Self, FancyError> {
        let text = self.fancy.render_important(value);
        self.put(&text)
    }

    /// Raw passthrough: resets any open style, then writes `text` as is.
    pub fn text(self, text: &str) -> Result<Self, FancyError> {
        let mut out = self.fancy.emitter();
        out.reset();
        out.text(text);
        let text = out.into_string();
        self.put(&text)
    }

    /// Resets, terminates the line and flushes the sink.
    pub fn end(self) -> Result<(), FancyError> {
        let line = self.text("\n")?;
        line.sink.flush()?;
        Ok(())
    }
}
