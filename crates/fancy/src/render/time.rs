//! Duration and timestamp rules.

use std::fmt;
use std::marker::PhantomData;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, TimeZone, Utc};

use crate::palette::Role;

use super::{Emitter, Render};

/// The resolution of a [`Span`].
///
/// A unit without a suffix renders its count as a bare number.
pub trait Unit {
    const SUFFIX: Option<&'static str> = None;
}

macro_rules! units {
    ($($(#[$meta:meta])* $name:ident => $suffix:literal, $nanos:expr;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum $name {}

            impl Unit for $name {
                const SUFFIX: Option<&'static str> = Some($suffix);
            }

            impl From<Duration> for Span<$name> {
                /// Truncates toward zero; saturates at `i64::MAX`.
                fn from(duration: Duration) -> Self {
                    let count = duration.as_nanos() / $nanos;
                    Span::new(i64::try_from(count).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

units! {
    Hours => "h", 3_600_000_000_000;
    Minutes => "m", 60_000_000_000;
    Seconds => "s", 1_000_000_000;
    Millis => "ms", 1_000_000;
    Micros => "µs", 1_000;
    Nanos => "ns", 1;
}

/// A signed count of `U` units.
///
/// ```rust
/// use fancy::{Config, Fancy, OutputMode, Millis, Seconds, Span};
///
/// let fancy = Fancy::new(Config::new().with_output(OutputMode::Text));
/// assert_eq!(fancy.render(&Span::<Seconds>::new(5)), "5s");
/// assert_eq!(
///     fancy.render(&Span::<Millis>::from(std::time::Duration::from_micros(250_900))),
///     "250ms"
/// );
/// ```
pub struct Span<U> {
    count: i64,
    unit: PhantomData<U>,
}

impl<U> Span<U> {
    pub const fn new(count: i64) -> Self {
        Self {
            count,
            unit: PhantomData,
        }
    }

    pub const fn count(&self) -> i64 {
        self.count
    }
}

// Manual impls: `U` is only a marker and need not implement anything.
impl<U> Clone for Span<U> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<U> Copy for Span<U> {}

impl<U> PartialEq for Span<U> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count
    }
}

impl<U> Eq for Span<U> {}

impl<U> fmt::Debug for Span<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Span")
            .field("count", &self.count)
            .field("unit", &std::any::type_name::<U>())
            .finish()
    }
}

impl<U: Unit> Render for Span<U> {
    fn render(&self, out: &mut Emitter<'_>) {
        out.styled(Role::Duration, self.count);
        if let Some(suffix) = U::SUFFIX {
            out.text(suffix);
        }
    }
}

/// A `std::time::Duration` is rendered at nanosecond resolution, the
/// resolution of the system clock it usually comes from.
impl Render for Duration {
    fn render(&self, out: &mut Emitter<'_>) {
        out.styled(Role::Duration, self.as_nanos());
        out.text("ns");
    }
}

impl<Tz: TimeZone> Render for DateTime<Tz> {
    fn render(&self, out: &mut Emitter<'_>) {
        let utc = self.with_timezone(&Utc);
        let format = out.time_format();
        out.styled(Role::Timestamp, utc.format(format.as_str()));
    }
}

impl Render for SystemTime {
    fn render(&self, out: &mut Emitter<'_>) {
        DateTime::<Utc>::from(*self).render(out);
    }
}
