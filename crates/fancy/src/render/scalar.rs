//! Leaf rules: quoted text, booleans, numbers, raw passthrough and style
//! objects.

use std::borrow::Cow;
use std::fmt;

use crate::palette::Role;
use crate::style::{Attribute, Bg, Fg, Style};

use super::{Emitter, Render};

impl Render for str {
    fn render(&self, out: &mut Emitter<'_>) {
        out.styled(Role::Quoted, '"');
        out.text(self);
        out.text("\"");
    }
}

impl Render for String {
    fn render(&self, out: &mut Emitter<'_>) {
        self.as_str().render(out);
    }
}

impl Render for Cow<'_, str> {
    fn render(&self, out: &mut Emitter<'_>) {
        self.as_ref().render(out);
    }
}

impl Render for char {
    fn render(&self, out: &mut Emitter<'_>) {
        out.styled(Role::Quoted, '\'');
        out.display(self);
        out.text("'");
    }
}

impl Render for bool {
    fn render(&self, out: &mut Emitter<'_>) {
        out.styled(Role::Boolean, if *self { "true" } else { "false" });
    }
}

macro_rules! numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, out: &mut Emitter<'_>) {
                    out.styled(Role::Numeric, self);
                }
            }
        )*
    };
}

numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Writes a value through its own `Display`, with no color and no reset.
///
/// This is the fallback for types that have a textual form but no rendering
/// rule of their own.
///
/// ```rust
/// use fancy::{Config, Fancy, Plain};
///
/// let fancy = Fancy::new(Config::default());
/// let addr: std::net::Ipv4Addr = "127.0.0.1".parse().unwrap();
/// assert_eq!(fancy.render(&Plain(addr)), "127.0.0.1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plain<T>(pub T);

impl<T: fmt::Display> Render for Plain<T> {
    const RESETS: bool = false;

    fn render(&self, out: &mut Emitter<'_>) {
        out.display(&self.0);
    }
}

macro_rules! style_object {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                const RESETS: bool = false;

                fn render(&self, out: &mut Emitter<'_>) {
                    out.escape(self);
                }
            }
        )*
    };
}

style_object!(Style, Fg, Bg, Attribute);
