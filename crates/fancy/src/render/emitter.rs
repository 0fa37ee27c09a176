//! In-memory output buffer shared by every rendering rule.

use std::fmt::{self, Write as _};

use crate::config::{Config, TimeFormat};
use crate::palette::{Palette, Role};
use crate::style::RESET;

use super::Render;

/// Collects the text and escape sequences of one render call.
///
/// Rendering never touches the sink directly: a value is rendered into an
/// `Emitter` first and written out in one piece afterwards. When color is
/// disabled every escape sequence is dropped and only the text remains.
pub struct Emitter<'a> {
    buf: String,
    palette: &'a Palette,
    time_format: &'a TimeFormat,
    color: bool,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a Config, color: bool) -> Self {
        Self {
            buf: String::new(),
            palette: &config.palette,
            time_format: &config.time_format,
            color,
        }
    }

    /// Renders a top-level value, closing it with a reset when its rule
    /// asks for one.
    pub fn value<T: Render + ?Sized>(&mut self, value: &T) {
        value.render(self);
        if T::RESETS {
            self.reset();
        }
    }

    /// Renders a value contained in a tuple, pair or collection.
    pub fn element<T: Render + ?Sized>(&mut self, value: &T) {
        value.render_element(self);
        if T::RESETS {
            self.reset();
        }
    }

    /// Switches to the palette style of `role`.
    pub fn role(&mut self, role: Role) {
        let palette = self.palette;
        self.escape(palette.get(role));
    }

    /// Writes an escape sequence, unless color is disabled.
    pub fn escape(&mut self, sequence: impl fmt::Display) {
        if self.color {
            let _ = write!(self.buf, "{}", sequence);
        }
    }

    pub fn reset(&mut self) {
        self.escape(RESET);
    }

    pub fn text(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub fn display(&mut self, value: impl fmt::Display) {
        // Writing into a String only fails if `value` itself reports an error.
        let _ = write!(self.buf, "{}", value);
    }

    /// Switches to `role` and writes `content`. The style stays open.
    pub fn styled(&mut self, role: Role, content: impl fmt::Display) {
        self.role(role);
        self.display(content);
    }

    /// Writes `[a, b, c]` with brace-styled brackets and each item rendered
    /// as an element.
    pub fn list<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: Render,
    {
        self.styled(Role::Brace, '[');
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.separator();
            }
            self.element(&item);
        }
        self.styled(Role::Brace, ']');
    }

    pub fn separator(&mut self) {
        self.text(", ");
    }

    pub fn time_format(&self) -> &'a TimeFormat {
        self.time_format
    }

    pub fn uses_color(&self) -> bool {
        self.color
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
