//! Type-driven rendering rules.
//!
//! Every renderable type implements [`Render`], and the implementation picks
//! its rule once, at compile time:
//!
//! | Type                                           | Output                        |
//! |------------------------------------------------|-------------------------------|
//! | `char`, `str`, `String`, `Cow<str>`            | `'c'`, `"text"` (quoted)      |
//! | `bool`                                         | `true` / `false` (boolean)    |
//! | integers, floats                               | decimal form (numeric)        |
//! | [`Span<U>`], `std::time::Duration`             | `5s`, `250ms`, `12ns` ...     |
//! | `chrono::DateTime<Tz>`, `SystemTime`           | UTC, configured time format   |
//! | tuples (pairs included), map entries           | `{a, b, c}`                   |
//! | slices, arrays, `Vec`, sets, maps, ...         | `[a, b, c]`                   |
//! | [`Plain<T: Display>`](Plain)                   | `T`'s own text, uncolored     |
//!
//! Everything except [`Plain`] and the style objects themselves is closed
//! with a reset, so color never leaks into the text that follows.
//!
//! A type with no `Render` implementation is rejected by the compiler:
//!
//! ```compile_fail
//! struct Opaque;
//!
//! let fancy = fancy::Fancy::default();
//! fancy.render(&Opaque);
//! ```
//!
//! Implementing `Render` for your own type usually means delegating to an
//! existing rule:
//!
//! ```rust
//! use fancy::{Emitter, Fancy, Render};
//!
//! struct Point { x: i32, y: i32 }
//!
//! impl Render for Point {
//!     fn render(&self, out: &mut Emitter<'_>) {
//!         (self.x, self.y).render(out);
//!     }
//! }
//!
//! let fancy = Fancy::new(fancy::Config::new().with_output(fancy::OutputMode::Text));
//! assert_eq!(fancy.render(&vec![Point { x: 1, y: 2 }]), "[{1, 2}]");
//! ```

mod composite;
mod emitter;
mod scalar;
mod time;

pub use emitter::Emitter;
pub use scalar::Plain;
pub use time::{Hours, Micros, Millis, Minutes, Nanos, Seconds, Span, Unit};

/// A value the renderer knows how to print.
pub trait Render {
    /// Whether the value is closed with a reset after rendering.
    ///
    /// Only raw passthrough values and style objects opt out.
    const RESETS: bool = true;

    /// Renders the value at top level.
    fn render(&self, out: &mut Emitter<'_>);

    /// Renders the value as an item of a tuple, pair or collection.
    fn render_element(&self, out: &mut Emitter<'_>) {
        self.render(out);
    }
}

impl<T: Render + ?Sized> Render for &T {
    const RESETS: bool = T::RESETS;

    fn render(&self, out: &mut Emitter<'_>) {
        (**self).render(out);
    }

    fn render_element(&self, out: &mut Emitter<'_>) {
        (**self).render_element(out);
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    const RESETS: bool = T::RESETS;

    fn render(&self, out: &mut Emitter<'_>) {
        (**self).render(out);
    }

    fn render_element(&self, out: &mut Emitter<'_>) {
        (**self).render_element(out);
    }
}
