//! Ranged iteration over time frames.
//!
//! [`Range`] and [`SpanRange`] are lazy, finite, forward-only iterators:
//! each element is computed on demand, no history is buffered, and a second
//! pass requires building a new iterator. Dropping one early is always safe
//! since no resources are held between steps.

use crate::datetime::{Frame, Shift, TryIntoZulu, Zulu};
use crate::error::Result;

/// Instants from `start` stepping by one unit of a frame, ending before the
/// first step whose successor would pass `end`.
///
/// ```
/// use zulutime::{Frame, Range, Zulu};
///
/// let start = Zulu::new(2015, 4, 4).unwrap();
/// let end = Zulu::new(2018, 4, 4).unwrap();
/// let years: Vec<_> = Range::new(Frame::Year, start, end).unwrap().collect();
/// assert_eq!(years.len(), 3);
/// assert_eq!(years[0], start);
/// ```
#[derive(Debug, Clone)]
pub struct Range {
    next_start: Zulu,
    end: Zulu,
    step: Shift,
}

impl Range {
    /// Build a range iterator. `start` and `end` accept anything coercible
    /// to an instant (values, parseable strings, timestamps); coercion
    /// failures propagate as [`crate::ZuluError::Parse`].
    ///
    /// When `start > end` the iterator is empty, not an error.
    pub fn new<S, E>(frame: Frame, start: S, end: E) -> Result<Self>
    where
        S: TryIntoZulu,
        E: TryIntoZulu,
    {
        Ok(Range {
            next_start: start.try_into_zulu()?,
            end: end.try_into_zulu()?,
            step: frame.step(1),
        })
    }
}

impl Iterator for Range {
    type Item = Zulu;

    fn next(&mut self) -> Option<Zulu> {
        let next_end = self.next_start.shift(self.step).ok()?;
        if next_end <= self.end {
            let current = self.next_start;
            self.next_start = next_end;
            Some(current)
        } else {
            None
        }
    }
}

/// Contiguous `(start_of, end_of)` frame spans between two instants.
///
/// Each span ends exactly one microsecond before the next begins, so spans
/// never overlap even across variable-length frames.
#[derive(Debug, Clone)]
pub struct SpanRange {
    next_start: Zulu,
    end: Zulu,
    frame: Frame,
}

impl SpanRange {
    /// Build a span-range iterator; accepts the same inputs as
    /// [`Range::new`] and is likewise empty when `start > end`.
    pub fn new<S, E>(frame: Frame, start: S, end: E) -> Result<Self>
    where
        S: TryIntoZulu,
        E: TryIntoZulu,
    {
        Ok(SpanRange {
            next_start: start.try_into_zulu()?,
            end: end.try_into_zulu()?,
            frame,
        })
    }
}

impl Iterator for SpanRange {
    type Item = (Zulu, Zulu);

    fn next(&mut self) -> Option<(Zulu, Zulu)> {
        let (span_start, span_end) = self.next_start.span(self.frame, 1).ok()?;
        if span_end <= self.end {
            // Every span end sits at .999999; the next frame starts one
            // microsecond later.
            self.next_start = span_end
                .shift(Shift { microseconds: 1, ..Default::default() })
                .ok()?;
            Some((span_start, span_end))
        } else {
            None
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
