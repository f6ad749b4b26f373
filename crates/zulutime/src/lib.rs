//! # zulutime
//!
//! Immutable UTC datetime values with calendar-aware arithmetic.
//!
//! Every [`Zulu`] is normalized to UTC offset zero at construction: timezone
//! information supplied with the input fields is used once to compute the
//! UTC-equivalent fields and then discarded. Arithmetic happens on the UTC
//! instant; localization occurs only when a value is formatted or projected
//! with [`Zulu::astimezone`].
//!
//! ## Modules
//!
//! - [`datetime`] — the [`Zulu`] value, construction/conversion factories,
//!   and calendar arithmetic (shift, start_of/end_of, span)
//! - [`delta`] — fixed-length [`Delta`] durations with closed arithmetic
//! - [`range`] — lazy frame-stepped iteration ([`Range`], [`SpanRange`])
//! - [`parser`] — multi-format datetime parsing, pattern translation,
//!   duration grammar, humanized rendering
//! - [`timezone`] — timezone identifier resolution ([`Timezone`])
//! - [`timer`] — stopwatch/countdown [`Timer`]
//! - [`error`] — error types
//!
//! ## Example
//!
//! ```
//! use zulutime::{Frame, Shift, Zulu};
//!
//! let dt = Zulu::parse("2015-02-05T12:30:15.123456Z").unwrap();
//! assert_eq!(dt.to_string(), "2015-02-05T12:30:15.123456+00:00");
//!
//! let end = dt.end_of(Frame::Month, 1).unwrap();
//! assert_eq!(end.to_string(), "2015-02-28T23:59:59.999999+00:00");
//!
//! let next = dt.shift(Shift { months: 1, ..Default::default() }).unwrap();
//! assert_eq!(next.to_string(), "2015-03-05T12:30:15.123456+00:00");
//! ```

pub mod datetime;
pub mod delta;
pub mod error;
pub mod parser;
pub mod range;
pub mod timer;
pub mod timezone;

pub use datetime::{Fields, Frame, Record, Replace, Shift, StructTime, TryIntoZulu, Zulu};
pub use delta::{Delta, DeltaFormat, DeltaParts};
pub use error::{Result, ZuluError};
pub use parser::{DateTimeFormat, DeltaStyle, Granularity};
pub use range::{Range, SpanRange};
pub use timer::Timer;
pub use timezone::Timezone;

/// Build a [`Zulu`] from named fields; alias for [`Zulu::from_fields`].
pub fn create(fields: Fields) -> Result<Zulu> {
    Zulu::from_fields(fields)
}

/// The current UTC date and time; alias for [`Zulu::now`].
pub fn now() -> Zulu {
    Zulu::now()
}

/// Parse a datetime with the default formats; alias for [`Zulu::parse`].
pub fn parse(text: &str) -> Result<Zulu> {
    Zulu::parse(text)
}

/// Parse a duration string; alias for [`Delta::parse`].
pub fn parse_delta(text: &str) -> Result<Delta> {
    Delta::parse(text)
}

/// Iterate instants from `start` to `end` stepping by one `frame` unit.
pub fn range(frame: Frame, start: impl TryIntoZulu, end: impl TryIntoZulu) -> Result<Range> {
    Range::new(frame, start, end)
}

/// Iterate contiguous `(start_of, end_of)` frame spans from `start` to `end`.
pub fn span_range(
    frame: Frame,
    start: impl TryIntoZulu,
    end: impl TryIntoZulu,
) -> Result<SpanRange> {
    SpanRange::new(frame, start, end)
}
