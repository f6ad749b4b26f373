//! Fixed-length durations.
//!
//! [`Delta`] owns a `chrono::TimeDelta` rather than exposing one: every
//! arithmetic operator is re-derived on the wrapper so that arithmetic over
//! durations stays closed over [`Delta`] instead of silently degrading to
//! the underlying primitive.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::parser::{self, DeltaStyle, Granularity};

const MICROS_PER_SECOND: i128 = 1_000_000;
const MICROS_PER_DAY: i128 = 86_400 * MICROS_PER_SECOND;

/// Unit quantities for building a [`Delta`].
///
/// All fields are fractional and combinable; they are summed at full
/// precision and then normalized to microsecond resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DeltaParts {
    pub weeks: f64,
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub milliseconds: f64,
    pub microseconds: f64,
}

impl DeltaParts {
    /// Total seconds represented by these parts.
    pub fn total_seconds(&self) -> f64 {
        self.weeks * 604_800.0
            + self.days * 86_400.0
            + self.hours * 3_600.0
            + self.minutes * 60.0
            + self.seconds
            + self.milliseconds / 1e3
            + self.microseconds / 1e6
    }
}

/// Options for [`Delta::format`].
#[derive(Debug, Clone, Default)]
pub struct DeltaFormat {
    /// Rendering style.
    pub style: DeltaStyle,
    /// Smallest unit that may be displayed.
    pub granularity: Granularity,
    /// Factor at which the display rounds up to the next larger unit.
    pub threshold: f64,
    /// Include `"in ..."`/`"... ago"` phrasing.
    pub add_direction: bool,
    /// Locale identifier; `None` resolves through `LC_TIME`/`LANG` with an
    /// `en_US_POSIX` fallback.
    pub locale: Option<String>,
}

impl DeltaFormat {
    fn threshold(&self) -> f64 {
        if self.threshold == 0.0 {
            0.85
        } else {
            self.threshold
        }
    }
}

/// A signed span of elapsed time with microsecond resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Delta(TimeDelta);

impl Delta {
    /// A zero-length delta.
    pub fn zero() -> Self {
        Delta(TimeDelta::zero())
    }

    /// Build a delta from unit quantities.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ZuluError::Range`] when the combined magnitude is
    /// unrepresentable.
    pub fn new(parts: DeltaParts) -> Result<Self> {
        parser::seconds_to_timedelta(parts.total_seconds()).map(Delta)
    }

    /// Build a delta from fractional seconds.
    pub fn from_seconds(seconds: f64) -> Result<Self> {
        parser::seconds_to_timedelta(seconds).map(Delta)
    }

    /// Parse a free-form duration string (see [`parser::parse_timedelta`]).
    pub fn parse(text: &str) -> Result<Self> {
        parser::parse_timedelta(text).map(Delta)
    }

    /// The smallest representable delta.
    pub fn min_value() -> Self {
        Delta(TimeDelta::MIN)
    }

    /// The largest representable delta.
    pub fn max_value() -> Self {
        Delta(TimeDelta::MAX)
    }

    /// The resolution of a delta: one microsecond.
    pub fn resolution() -> Self {
        Delta(TimeDelta::microseconds(1))
    }

    /// The underlying `chrono::TimeDelta`.
    pub fn timedelta(&self) -> TimeDelta {
        self.0
    }

    /// Whole days, rounded toward negative infinity.
    pub fn days(&self) -> i64 {
        floor_div(self.total_micros(), MICROS_PER_DAY) as i64
    }

    /// Seconds within the day, always `0..86_400`.
    pub fn seconds(&self) -> i64 {
        (mod_floor(self.total_micros(), MICROS_PER_DAY) / MICROS_PER_SECOND) as i64
    }

    /// Microseconds within the second, always `0..1_000_000`.
    pub fn microseconds(&self) -> i64 {
        mod_floor(self.total_micros(), MICROS_PER_SECOND) as i64
    }

    /// Total elapsed seconds, including fractional microseconds.
    pub fn total_seconds(&self) -> f64 {
        self.0.num_seconds() as f64 + f64::from(self.0.subsec_nanos()) / 1e9
    }

    /// Total whole seconds, truncated toward zero.
    pub fn num_seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        Delta(self.0.abs())
    }

    /// Floor division by an integer.
    pub fn floor_div(&self, divisor: i64) -> Self {
        from_micros(floor_div(self.total_micros(), i128::from(divisor)))
    }

    /// Floor quotient and remainder against another delta.
    pub fn divmod(&self, other: &Delta) -> (i64, Delta) {
        let quotient = floor_div(self.total_micros(), other.total_micros());
        (quotient as i64, *self % *other)
    }

    /// Render as a humanized single-unit string (`"1 day"`, `"in 2 hrs"`).
    pub fn format(&self, options: &DeltaFormat) -> String {
        let locale = parser::get_locale(options.locale.as_deref());
        parser::format_timedelta(
            self.0,
            options.style,
            options.granularity,
            options.threshold(),
            options.add_direction,
            &locale,
        )
    }

    fn total_micros(&self) -> i128 {
        i128::from(self.0.num_seconds()) * MICROS_PER_SECOND
            + i128::from(self.0.subsec_nanos() / 1_000)
    }
}

impl From<TimeDelta> for Delta {
    fn from(delta: TimeDelta) -> Self {
        Delta(delta)
    }
}

impl From<Delta> for TimeDelta {
    fn from(delta: Delta) -> Self {
        delta.0
    }
}

fn from_micros(micros: i128) -> Delta {
    let seconds = floor_div(micros, MICROS_PER_SECOND) as i64;
    let rem = mod_floor(micros, MICROS_PER_SECOND) as i64;
    Delta(TimeDelta::seconds(seconds) + TimeDelta::microseconds(rem))
}

/// Floor division (quotient rounded toward negative infinity).
fn floor_div(a: i128, b: i128) -> i128 {
    let quotient = a / b;
    let remainder = a % b;
    if remainder != 0 && (remainder < 0) != (b < 0) {
        quotient - 1
    } else {
        quotient
    }
}

/// Floor modulo (result has the sign of the divisor).
fn mod_floor(a: i128, b: i128) -> i128 {
    a - b * floor_div(a, b)
}

// ── Operators (all closed over Delta) ───────────────────────────────────────

impl Add for Delta {
    type Output = Delta;

    fn add(self, rhs: Delta) -> Delta {
        Delta(self.0 + rhs.0)
    }
}

impl Sub for Delta {
    type Output = Delta;

    fn sub(self, rhs: Delta) -> Delta {
        Delta(self.0 - rhs.0)
    }
}

impl Neg for Delta {
    type Output = Delta;

    fn neg(self) -> Delta {
        Delta(-self.0)
    }
}

impl Mul<i32> for Delta {
    type Output = Delta;

    fn mul(self, rhs: i32) -> Delta {
        Delta(self.0 * rhs)
    }
}

impl Mul<f64> for Delta {
    type Output = Delta;

    fn mul(self, rhs: f64) -> Delta {
        Delta::from_seconds(self.total_seconds() * rhs).expect("`Delta * f64` out of range")
    }
}

impl Div<i32> for Delta {
    type Output = Delta;

    fn div(self, rhs: i32) -> Delta {
        Delta(self.0 / rhs)
    }
}

impl Div<f64> for Delta {
    type Output = Delta;

    fn div(self, rhs: f64) -> Delta {
        Delta::from_seconds(self.total_seconds() / rhs).expect("`Delta / f64` out of range")
    }
}

impl Div<Delta> for Delta {
    type Output = f64;

    fn div(self, rhs: Delta) -> f64 {
        self.total_seconds() / rhs.total_seconds()
    }
}

impl Rem for Delta {
    type Output = Delta;

    fn rem(self, rhs: Delta) -> Delta {
        from_micros(mod_floor(self.total_micros(), rhs.total_micros()))
    }
}

impl Hash for Delta {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_micros().hash(state);
    }
}

// ── Display / serde ─────────────────────────────────────────────────────────

impl fmt::Display for Delta {
    /// `[D day[s], ]H:MM:SS[.ffffff]`; non-negative values round-trip
    /// through [`Delta::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = self.days();
        let seconds = self.seconds();
        let micros = self.microseconds();
        if days != 0 {
            let plural = if days == 1 || days == -1 { "" } else { "s" };
            write!(f, "{days} day{plural}, ")?;
        }
        write!(f, "{}:{:02}:{:02}", seconds / 3600, seconds % 3600 / 60, seconds % 60)?;
        if micros > 0 {
            write!(f, ".{micros:06}")?;
        }
        Ok(())
    }
}

impl Serialize for Delta {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.total_seconds())
    }
}

impl<'de> Deserialize<'de> for Delta {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = f64::deserialize(deserializer)?;
        Delta::from_seconds(seconds).map_err(serde::de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
