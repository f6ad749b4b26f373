//! The immutable UTC datetime value and its calendar arithmetic.
//!
//! [`Zulu`] always represents an instant at UTC offset zero. Timezone
//! information supplied at construction is used once to compute the
//! UTC-equivalent fields and is not retained; localization happens only when
//! a value is formatted or explicitly projected with [`Zulu::astimezone`].
//! Every "mutating" operation returns a new value.
//!
//! Calendar arithmetic distinguishes two models: [`Shift`] applies
//! calendar-aware year/month steps (variable length, day-of-month clamped)
//! plus a fixed-duration tail, while [`Delta`] is always a fixed-length
//! span of seconds.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, IsoWeek, Months, NaiveDate, NaiveDateTime, NaiveTime,
    TimeDelta, TimeZone, Timelike, Utc, Weekday,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::delta::{Delta, DeltaFormat};
use crate::error::{Result, ZuluError};
use crate::parser::{self, DateTimeFormat};
use crate::timezone::Timezone;

/// Microseconds from the epoch back to 0001-01-01T00:00:00.
pub(crate) const MIN_TIMESTAMP_MICROS: i64 = -62_135_596_800_000_000;
/// Microseconds from the epoch up to 9999-12-31T23:59:59.999999.
pub(crate) const MAX_TIMESTAMP_MICROS: i64 = 253_402_300_799_999_999;

// ── Construction surfaces ───────────────────────────────────────────────────

/// Named construction fields, the keyword-style constructor surface.
///
/// Defaults to the epoch fields (1970-01-01 00:00:00.000000) with no
/// timezone, so partial literals read like keyword arguments:
///
/// ```
/// use zulutime::{Fields, Zulu};
///
/// let dt = Zulu::from_fields(Fields { year: 2000, month: 6, day: 15, ..Default::default() }).unwrap();
/// assert_eq!(dt.to_string(), "2000-06-15T00:00:00+00:00");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
    /// Zone the fields are expressed in; `None` means they are already UTC.
    pub tz: Option<Timezone>,
    /// Disambiguation bit for wall-clock times that occur twice: 0 selects
    /// the earlier instant, anything else the later. Carried for API
    /// compatibility; it has no effect once the value is UTC.
    pub fold: u8,
}

impl Default for Fields {
    fn default() -> Self {
        Fields {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            microsecond: 0,
            tz: None,
            fold: 0,
        }
    }
}

/// Per-field overrides for [`Zulu::replace`]. `None` keeps the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replace {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub microsecond: Option<u32>,
    /// Reinterpret the (replaced) fields in this zone and renormalize to UTC.
    pub tz: Option<Timezone>,
    pub fold: Option<u8>,
}

/// A 9-field calendar breakdown in the shape of a C `struct tm`.
///
/// Only the six date/time fields participate in conversion; `weekday` and
/// `yearday` are derivable and ignored, and `isdst` is used by
/// [`Zulu::from_localtime`] as a disambiguation hint for repeated wall-clock
/// times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub weekday: u32,
    pub yearday: u32,
    pub isdst: i8,
}

/// A plain serializable calendar record, the explicit structured
/// serialization pair for [`Zulu`] (see [`Zulu::to_record`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
}

// ── Calendar shift ──────────────────────────────────────────────────────────

/// A calendar-aware offset.
///
/// `years` and `months` apply with calendar semantics: month overflow rolls
/// into the year and the day-of-month is clamped to the target month's
/// length (January 31 plus one month is the last day of February). The
/// remaining units apply afterwards as one fixed-length duration.
///
/// ```
/// use zulutime::{Shift, Zulu};
///
/// let dt = Zulu::new(2015, 1, 31).unwrap();
/// let next = dt.shift(Shift { months: 1, ..Default::default() }).unwrap();
/// assert_eq!(next.to_string(), "2015-02-28T00:00:00+00:00");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Shift {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub microseconds: i64,
}

impl Shift {
    /// The shift that undoes every unit of this one.
    pub fn negated(self) -> Result<Shift> {
        Ok(Shift {
            years: neg(self.years)?,
            months: neg(self.months)?,
            weeks: neg(self.weeks)?,
            days: neg(self.days)?,
            hours: neg(self.hours)?,
            minutes: neg(self.minutes)?,
            seconds: neg(self.seconds)?,
            microseconds: neg(self.microseconds)?,
        })
    }

    /// Total fixed-duration microseconds of the sub-month units.
    fn fixed_micros(&self) -> Result<i64> {
        let days = i128::from(self.weeks) * 7 + i128::from(self.days);
        let total = (days * 86_400
            + i128::from(self.hours) * 3_600
            + i128::from(self.minutes) * 60
            + i128::from(self.seconds))
            * 1_000_000
            + i128::from(self.microseconds);
        i64::try_from(total).map_err(|_| ZuluError::Range("shift magnitude overflows".to_string()))
    }
}

fn neg(value: i64) -> Result<i64> {
    value
        .checked_neg()
        .ok_or_else(|| ZuluError::Range("shift magnitude overflows".to_string()))
}

// ── Time frames ─────────────────────────────────────────────────────────────

/// A named calendar granularity for flooring, spanning, and iteration.
///
/// `week` is deliberately not a frame: weeks are a [`Shift`] unit only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Frame {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
    Decade,
    Century,
}

const FRAME_NAMES: &str = "second|minute|hour|day|month|year|decade|century";

impl Frame {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frame::Second => "second",
            Frame::Minute => "minute",
            Frame::Hour => "hour",
            Frame::Day => "day",
            Frame::Month => "month",
            Frame::Year => "year",
            Frame::Decade => "decade",
            Frame::Century => "century",
        }
    }

    /// The shift that advances by `count` of this frame. Decades and
    /// centuries renormalize to 10/100-year steps.
    pub(crate) fn step(self, count: i64) -> Shift {
        match self {
            Frame::Second => Shift { seconds: count, ..Default::default() },
            Frame::Minute => Shift { minutes: count, ..Default::default() },
            Frame::Hour => Shift { hours: count, ..Default::default() },
            Frame::Day => Shift { days: count, ..Default::default() },
            Frame::Month => Shift { months: count, ..Default::default() },
            Frame::Year => Shift { years: count, ..Default::default() },
            Frame::Decade => Shift { years: count * 10, ..Default::default() },
            Frame::Century => Shift { years: count * 100, ..Default::default() },
        }
    }
}

impl FromStr for Frame {
    type Err = ZuluError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "second" => Ok(Frame::Second),
            "minute" => Ok(Frame::Minute),
            "hour" => Ok(Frame::Hour),
            "day" => Ok(Frame::Day),
            "month" => Ok(Frame::Month),
            "year" => Ok(Frame::Year),
            "decade" => Ok(Frame::Decade),
            "century" => Ok(Frame::Century),
            other => Err(ZuluError::Frame(format!(
                "time frame must be one of {FRAME_NAMES}, not '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── The UTC instant value ───────────────────────────────────────────────────

/// An immutable datetime, always normalized to UTC offset zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Zulu(DateTime<Utc>);

impl Zulu {
    /// A date at UTC midnight.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::Construction`] for invalid calendar fields.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::from_fields(Fields { year, month, day, ..Default::default() })
    }

    /// A date and wall-clock time, assumed UTC.
    pub fn with_ymd_and_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        Self::from_fields(Fields { year, month, day, hour, minute, second, ..Default::default() })
    }

    /// Build from named fields, converting through `tz` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::Construction`] when any field is out of its
    /// valid calendar range (month 13, day 30 in February, year 0, ...) and
    /// [`ZuluError::Range`] when timezone conversion pushes the instant
    /// outside years 1-9999.
    pub fn from_fields(fields: Fields) -> Result<Self> {
        if !(1..=9999).contains(&fields.year) {
            return Err(ZuluError::Construction(format!(
                "year {} is out of range 1-9999",
                fields.year
            )));
        }
        let date = NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day).ok_or_else(|| {
            ZuluError::Construction(format!(
                "invalid calendar date {:04}-{:02}-{:02}",
                fields.year, fields.month, fields.day
            ))
        })?;
        let time = NaiveTime::from_hms_micro_opt(
            fields.hour,
            fields.minute,
            fields.second,
            fields.microsecond,
        )
        .ok_or_else(|| {
            ZuluError::Construction(format!(
                "invalid time of day {:02}:{:02}:{:02}.{:06}",
                fields.hour, fields.minute, fields.second, fields.microsecond
            ))
        })?;
        let naive = date.and_time(time);

        match &fields.tz {
            Some(tz) => Self::from_utc_checked(tz.resolve_local(naive, fields.fold)?),
            None => Ok(Zulu(Utc.from_utc_datetime(&naive))),
        }
    }

    /// The current UTC date and time from the system clock.
    pub fn now() -> Self {
        Zulu(Utc::now())
    }

    /// Adopt the instant of any timezone-aware datetime.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::Range`] when the instant is outside years 1-9999.
    pub fn from_datetime<T: TimeZone>(dt: &DateTime<T>) -> Result<Self> {
        Self::from_utc_checked(dt.with_timezone(&Utc))
    }

    /// Build from fractional POSIX seconds since the epoch.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::Range`] when the timestamp falls outside years
    /// 1-9999.
    pub fn from_timestamp(timestamp: f64) -> Result<Self> {
        if !timestamp.is_finite() {
            return Err(ZuluError::Range(format!("timestamp {timestamp} is not finite")));
        }
        let micros = (timestamp * 1_000_000.0).round();
        if micros < MIN_TIMESTAMP_MICROS as f64 || micros > MAX_TIMESTAMP_MICROS as f64 {
            return Err(ZuluError::Range(format!(
                "timestamp {timestamp} is outside years 1-9999"
            )));
        }
        let micros = micros as i64;
        let dt = DateTime::from_timestamp(
            micros.div_euclid(1_000_000),
            (micros.rem_euclid(1_000_000) * 1_000) as u32,
        )
        .ok_or_else(|| ZuluError::Range(format!("timestamp {timestamp} is unrepresentable")))?;
        Self::from_utc_checked(dt)
    }

    /// Build from a proleptic Gregorian ordinal, where day 1 is 0001-01-01.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::Range`] when the ordinal falls outside years
    /// 1-9999.
    pub fn from_ordinal(ordinal: i32) -> Result<Self> {
        let date = NaiveDate::from_num_days_from_ce_opt(ordinal)
            .ok_or_else(|| ZuluError::Range(format!("ordinal {ordinal} is unrepresentable")))?;
        Self::from_utc_checked(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
    }

    /// Build from a `struct tm`-like breakdown of UTC fields.
    pub fn from_gmtime(tm: &StructTime) -> Result<Self> {
        Self::from_fields(Fields {
            year: tm.year,
            month: tm.month,
            day: tm.day,
            hour: tm.hour,
            minute: tm.minute,
            second: tm.second,
            ..Default::default()
        })
    }

    /// Build from a `struct tm`-like breakdown interpreted in the system
    /// local timezone. `isdst` zero prefers the post-transition reading of
    /// repeated wall-clock times, matching `mktime`.
    pub fn from_localtime(tm: &StructTime) -> Result<Self> {
        Self::from_fields(Fields {
            year: tm.year,
            month: tm.month,
            day: tm.day,
            hour: tm.hour,
            minute: tm.minute,
            second: tm.second,
            tz: Some(Timezone::Local),
            fold: u8::from(tm.isdst == 0),
            ..Default::default()
        })
    }

    /// Combine the date part of one value with the time part of another.
    pub fn combine<D: Datelike, T: Timelike>(date: &D, time: &T) -> Result<Self> {
        Self::from_fields(Fields {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: time.hour(),
            minute: time.minute(),
            second: time.second(),
            microsecond: time.nanosecond() / 1_000,
            ..Default::default()
        })
    }

    /// Parse with the default formats (ISO-8601, then numeric timestamp).
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, &parser::default_formats(), None)
    }

    /// Parse with an explicit format priority list and default timezone.
    ///
    /// The first matching format wins; a parsed value that carries no UTC
    /// offset is interpreted in `default_tz` (UTC when `None`) before being
    /// normalized.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::Parse`] listing every attempted format and its
    /// failure reason when nothing matches.
    pub fn parse_with(
        text: &str,
        formats: &[DateTimeFormat],
        default_tz: Option<&Timezone>,
    ) -> Result<Self> {
        parser::parse_datetime(text, formats, default_tz).and_then(Self::from_utc_checked)
    }

    /// The minimum value, 0001-01-01T00:00:00.
    pub fn min() -> Self {
        Zulu(DateTime::UNIX_EPOCH + TimeDelta::microseconds(MIN_TIMESTAMP_MICROS))
    }

    /// The maximum value, 9999-12-31T23:59:59.999999.
    pub fn max() -> Self {
        Zulu(DateTime::UNIX_EPOCH + TimeDelta::microseconds(MAX_TIMESTAMP_MICROS))
    }

    /// The epoch, 1970-01-01T00:00:00.
    pub fn epoch() -> Self {
        Zulu(DateTime::UNIX_EPOCH)
    }

    pub(crate) fn from_utc_checked(dt: DateTime<Utc>) -> Result<Self> {
        let year = dt.year();
        if (1..=9999).contains(&year) {
            Ok(Zulu(dt))
        } else {
            Err(ZuluError::Range(format!("year {year} is outside 1-9999")))
        }
    }

    // ── Accessors and projections ─────────────────────────────────────

    /// The microsecond field, `0..1_000_000`.
    pub fn microsecond(&self) -> u32 {
        self.0.timestamp_subsec_micros()
    }

    /// The instant as a naive datetime with identical fields and no
    /// timezone, for interop with APIs that want naive values.
    pub fn naive(&self) -> NaiveDateTime {
        self.0.naive_utc()
    }

    /// The instant as a plain `chrono::DateTime<Utc>`.
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Fractional POSIX seconds since the epoch.
    pub fn timestamp(&self) -> f64 {
        (*self - Self::epoch()).total_seconds()
    }

    /// The instant expressed in another timezone.
    ///
    /// Only the returned value carries the offset; the receiver remains
    /// UTC.
    pub fn astimezone(&self, tz: &Timezone) -> DateTime<FixedOffset> {
        self.0.with_timezone(&tz.offset_at(self.0))
    }

    /// The instant expressed in the system local timezone.
    pub fn astimezone_local(&self) -> DateTime<FixedOffset> {
        self.astimezone(&Timezone::Local)
    }

    /// The calendar fields as a serializable record.
    pub fn to_record(&self) -> Record {
        Record {
            year: self.year(),
            month: self.month(),
            day: self.day(),
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
            microsecond: self.microsecond(),
        }
    }

    /// Rebuild from a [`Record`], validating every field.
    pub fn from_record(record: Record) -> Result<Self> {
        Self::from_fields(Fields {
            year: record.year,
            month: record.month,
            day: record.day,
            hour: record.hour,
            minute: record.minute,
            second: record.second,
            microsecond: record.microsecond,
            ..Default::default()
        })
    }

    /// ISO-8601 text with an explicit offset suffix; fractional seconds
    /// appear only when the microsecond field is non-zero.
    pub fn isoformat(&self) -> String {
        parser::isoformat(&self.0)
    }

    /// Render with an optional format string, optionally projected into a
    /// timezone first. See [`parser::format_datetime`] for the format
    /// vocabulary.
    pub fn format(&self, format: Option<&str>, tz: Option<&Timezone>) -> Result<String> {
        let localized = match tz {
            Some(tz) => self.astimezone(tz),
            None => self.astimezone(&Timezone::Utc),
        };
        parser::format_datetime(&localized, format)
    }

    /// Number of days in this value's month.
    pub fn days_in_month(&self) -> u32 {
        let (year, month) = (self.year(), self.month());
        let first = NaiveDate::from_ymd_opt(year, month, 1);
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        match (first, next) {
            (Some(first), Some(next)) => (next - first).num_days() as u32,
            // December 9999 has no representable successor month.
            _ => 31,
        }
    }

    /// Whether this value's year is a leap year.
    pub fn is_leap_year(&self) -> bool {
        self.0.date_naive().leap_year()
    }

    // ── Comparison helpers ────────────────────────────────────────────

    pub fn is_before(&self, other: &Zulu) -> bool {
        self < other
    }

    pub fn is_on_or_before(&self, other: &Zulu) -> bool {
        self <= other
    }

    pub fn is_after(&self, other: &Zulu) -> bool {
        self > other
    }

    pub fn is_on_or_after(&self, other: &Zulu) -> bool {
        self >= other
    }

    /// Whether this value lies in `[start, end]`, inclusive on both ends.
    pub fn is_between(&self, start: &Zulu, end: &Zulu) -> bool {
        start <= self && self <= end
    }

    // ── Humanized relative rendering ──────────────────────────────────

    /// Humanized "time ago" difference from `other` to this value.
    pub fn time_from(&self, other: &Zulu) -> String {
        (*self - *other).format(&DeltaFormat { add_direction: true, ..Default::default() })
    }

    /// Humanized "time to" difference from this value to `other`.
    pub fn time_to(&self, other: &Zulu) -> String {
        (*other - *self).format(&DeltaFormat { add_direction: true, ..Default::default() })
    }

    /// Humanized difference between this value and now.
    pub fn time_from_now(&self) -> String {
        self.time_from(&Self::now())
    }

    /// Humanized difference between now and this value.
    pub fn time_to_now(&self) -> String {
        self.time_to(&Self::now())
    }

    // ── Field replacement ─────────────────────────────────────────────

    /// Return a new value with the named fields overridden.
    ///
    /// Supplying `tz` reinterprets the (replaced) fields in that zone and
    /// renormalizes to UTC, the same path as construction.
    pub fn replace(&self, update: Replace) -> Result<Self> {
        Self::from_fields(Fields {
            year: update.year.unwrap_or_else(|| self.year()),
            month: update.month.unwrap_or_else(|| self.month()),
            day: update.day.unwrap_or_else(|| self.day()),
            hour: update.hour.unwrap_or_else(|| self.hour()),
            minute: update.minute.unwrap_or_else(|| self.minute()),
            second: update.second.unwrap_or_else(|| self.second()),
            microsecond: update.microsecond.unwrap_or_else(|| self.microsecond()),
            tz: update.tz,
            fold: update.fold.unwrap_or(0),
        })
    }

    // ── Calendar arithmetic ───────────────────────────────────────────

    /// Apply a calendar-aware shift: years and months with calendar
    /// semantics first, then the fixed-duration remainder.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::Range`] when the result leaves years 1-9999.
    pub fn shift(&self, by: Shift) -> Result<Self> {
        let months = by
            .years
            .checked_mul(12)
            .and_then(|m| m.checked_add(by.months))
            .ok_or_else(|| ZuluError::Range("shift magnitude overflows".to_string()))?;

        let mut dt = self.0;
        if months != 0 {
            let magnitude = u32::try_from(months.unsigned_abs())
                .map_err(|_| ZuluError::Range(format!("shift of {months} months overflows")))?;
            dt = if months > 0 {
                dt.checked_add_months(Months::new(magnitude))
            } else {
                dt.checked_sub_months(Months::new(magnitude))
            }
            .ok_or_else(|| ZuluError::Range(format!("shift of {months} months overflows")))?;
        }

        let micros = by.fixed_micros()?;
        if micros != 0 {
            dt = dt
                .checked_add_signed(TimeDelta::microseconds(micros))
                .ok_or_else(|| ZuluError::Range("shift result is unrepresentable".to_string()))?;
        }
        Self::from_utc_checked(dt)
    }

    /// Apply a fixed-length duration.
    pub fn shift_by(&self, delta: Delta) -> Result<Self> {
        self.0
            .checked_add_signed(delta.timedelta())
            .ok_or_else(|| ZuluError::Range("shift result is unrepresentable".to_string()))
            .and_then(Self::from_utc_checked)
    }

    /// Add calendar units; identical to [`Zulu::shift`].
    pub fn add(&self, by: Shift) -> Result<Self> {
        self.shift(by)
    }

    /// Subtract calendar units by negating every unit of `by` first.
    ///
    /// Because of the negation, passing an already-negative unit moves time
    /// forward: `subtract(Shift { days: -1, .. })` yields the next day.
    /// This double-negation is a long-standing contract and is kept as-is.
    pub fn subtract(&self, by: Shift) -> Result<Self> {
        self.shift(by.negated()?)
    }

    /// Floor to the start of the frame containing this instant.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::Construction`] when the floored year leaves the
    /// calendar (the decade/century floor of year 1-99 is year 0).
    pub fn start_of(&self, frame: Frame) -> Result<Self> {
        let zero = Replace {
            month: Some(1),
            day: Some(1),
            hour: Some(0),
            minute: Some(0),
            second: Some(0),
            microsecond: Some(0),
            ..Default::default()
        };
        match frame {
            Frame::Second => self.replace(Replace { microsecond: Some(0), ..Default::default() }),
            Frame::Minute => self.replace(Replace {
                second: Some(0),
                microsecond: Some(0),
                ..Default::default()
            }),
            Frame::Hour => self.replace(Replace {
                minute: Some(0),
                second: Some(0),
                microsecond: Some(0),
                ..Default::default()
            }),
            Frame::Day => self.replace(Replace {
                hour: Some(0),
                minute: Some(0),
                second: Some(0),
                microsecond: Some(0),
                ..Default::default()
            }),
            Frame::Month => self.replace(Replace {
                day: Some(1),
                hour: Some(0),
                minute: Some(0),
                second: Some(0),
                microsecond: Some(0),
                ..Default::default()
            }),
            Frame::Year => self.replace(zero),
            Frame::Decade => self.replace(Replace {
                year: Some(self.year() - self.year() % 10),
                ..zero
            }),
            Frame::Century => self.replace(Replace {
                year: Some(self.year() - self.year() % 100),
                ..zero
            }),
        }
    }

    /// The latest instant inside `count` frames: one microsecond before the
    /// start of the `count`-th next frame.
    pub fn end_of(&self, frame: Frame, count: i64) -> Result<Self> {
        self.start_of(frame)?
            .shift(frame.step(count))?
            .shift(Shift { microseconds: -1, ..Default::default() })
    }

    /// The `(start_of, end_of)` pair for a frame.
    pub fn span(&self, frame: Frame, count: i64) -> Result<(Self, Self)> {
        Ok((self.start_of(frame)?, self.end_of(frame, count)?))
    }
}

impl Default for Zulu {
    /// The epoch, matching construction from all-default fields.
    fn default() -> Self {
        Self::epoch()
    }
}

// ── Coercion seam ───────────────────────────────────────────────────────────

/// Inputs coercible to a [`Zulu`]: already-constructed values pass through
/// structurally, strings go through the parser, numbers are POSIX
/// timestamps, and foreign datetimes adopt the instant.
pub trait TryIntoZulu {
    fn try_into_zulu(self) -> Result<Zulu>;
}

impl TryIntoZulu for Zulu {
    fn try_into_zulu(self) -> Result<Zulu> {
        Ok(self)
    }
}

impl TryIntoZulu for &Zulu {
    fn try_into_zulu(self) -> Result<Zulu> {
        Ok(*self)
    }
}

impl TryIntoZulu for &str {
    fn try_into_zulu(self) -> Result<Zulu> {
        Zulu::parse(self)
    }
}

impl TryIntoZulu for String {
    fn try_into_zulu(self) -> Result<Zulu> {
        Zulu::parse(&self)
    }
}

impl TryIntoZulu for f64 {
    fn try_into_zulu(self) -> Result<Zulu> {
        Zulu::from_timestamp(self)
    }
}

impl TryIntoZulu for i64 {
    fn try_into_zulu(self) -> Result<Zulu> {
        Zulu::from_timestamp(self as f64)
    }
}

impl<T: TimeZone> TryIntoZulu for DateTime<T> {
    fn try_into_zulu(self) -> Result<Zulu> {
        Zulu::from_datetime(&self)
    }
}

impl<T: TimeZone> TryIntoZulu for &DateTime<T> {
    fn try_into_zulu(self) -> Result<Zulu> {
        Zulu::from_datetime(self)
    }
}

// ── Date/time-like seams ────────────────────────────────────────────────────

impl Datelike for Zulu {
    fn year(&self) -> i32 {
        self.0.year()
    }

    fn month(&self) -> u32 {
        self.0.month()
    }

    fn month0(&self) -> u32 {
        self.0.month0()
    }

    fn day(&self) -> u32 {
        self.0.day()
    }

    fn day0(&self) -> u32 {
        self.0.day0()
    }

    fn ordinal(&self) -> u32 {
        self.0.ordinal()
    }

    fn ordinal0(&self) -> u32 {
        self.0.ordinal0()
    }

    fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    fn iso_week(&self) -> IsoWeek {
        self.0.iso_week()
    }

    fn with_year(&self, year: i32) -> Option<Zulu> {
        self.0.with_year(year).and_then(|dt| Zulu::from_utc_checked(dt).ok())
    }

    fn with_month(&self, month: u32) -> Option<Zulu> {
        self.0.with_month(month).map(Zulu)
    }

    fn with_month0(&self, month0: u32) -> Option<Zulu> {
        self.0.with_month0(month0).map(Zulu)
    }

    fn with_day(&self, day: u32) -> Option<Zulu> {
        self.0.with_day(day).map(Zulu)
    }

    fn with_day0(&self, day0: u32) -> Option<Zulu> {
        self.0.with_day0(day0).map(Zulu)
    }

    fn with_ordinal(&self, ordinal: u32) -> Option<Zulu> {
        self.0.with_ordinal(ordinal).map(Zulu)
    }

    fn with_ordinal0(&self, ordinal0: u32) -> Option<Zulu> {
        self.0.with_ordinal0(ordinal0).map(Zulu)
    }
}

impl Timelike for Zulu {
    fn hour(&self) -> u32 {
        self.0.hour()
    }

    fn minute(&self) -> u32 {
        self.0.minute()
    }

    fn second(&self) -> u32 {
        self.0.second()
    }

    fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    fn with_hour(&self, hour: u32) -> Option<Zulu> {
        self.0.with_hour(hour).map(Zulu)
    }

    fn with_minute(&self, minute: u32) -> Option<Zulu> {
        self.0.with_minute(minute).map(Zulu)
    }

    fn with_second(&self, second: u32) -> Option<Zulu> {
        self.0.with_second(second).map(Zulu)
    }

    fn with_nanosecond(&self, nanosecond: u32) -> Option<Zulu> {
        self.0.with_nanosecond(nanosecond).map(Zulu)
    }
}

// ── Operators ───────────────────────────────────────────────────────────────

impl Add<Delta> for Zulu {
    type Output = Zulu;

    /// Panics when the result leaves years 1-9999; use [`Zulu::shift_by`]
    /// for a checked version.
    fn add(self, rhs: Delta) -> Zulu {
        self.shift_by(rhs).expect("`Zulu + Delta` out of range")
    }
}

impl Add<Shift> for Zulu {
    type Output = Zulu;

    /// Panics when the result leaves years 1-9999; use [`Zulu::shift`] for
    /// a checked version.
    fn add(self, rhs: Shift) -> Zulu {
        self.shift(rhs).expect("`Zulu + Shift` out of range")
    }
}

impl Add<f64> for Zulu {
    type Output = Zulu;

    /// Adds bare seconds. Panics when the result leaves years 1-9999.
    fn add(self, rhs: f64) -> Zulu {
        let delta = Delta::from_seconds(rhs).expect("`Zulu + f64` seconds out of range");
        self + delta
    }
}

impl Add<i64> for Zulu {
    type Output = Zulu;

    /// Adds bare seconds. Panics when the result leaves years 1-9999.
    fn add(self, rhs: i64) -> Zulu {
        self + Delta::from(TimeDelta::seconds(rhs))
    }
}

impl Sub<Delta> for Zulu {
    type Output = Zulu;

    /// Panics when the result leaves years 1-9999.
    fn sub(self, rhs: Delta) -> Zulu {
        self.shift_by(-rhs).expect("`Zulu - Delta` out of range")
    }
}

impl Sub for Zulu {
    type Output = Delta;

    fn sub(self, rhs: Zulu) -> Delta {
        Delta::from(self.0 - rhs.0)
    }
}

impl<T: TimeZone> Sub<DateTime<T>> for Zulu {
    type Output = Delta;

    fn sub(self, rhs: DateTime<T>) -> Delta {
        Delta::from(self.0.signed_duration_since(rhs))
    }
}

impl<T: TimeZone> PartialEq<DateTime<T>> for Zulu {
    fn eq(&self, other: &DateTime<T>) -> bool {
        self.0 == *other
    }
}

impl<T: TimeZone> PartialOrd<DateTime<T>> for Zulu {
    fn partial_cmp(&self, other: &DateTime<T>) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl Hash for Zulu {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.naive_utc().hash(state);
    }
}

// ── Display / parse / serde ─────────────────────────────────────────────────

impl fmt::Display for Zulu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.isoformat())
    }
}

impl FromStr for Zulu {
    type Err = ZuluError;

    fn from_str(s: &str) -> Result<Self> {
        Zulu::parse(s)
    }
}

impl Serialize for Zulu {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.isoformat())
    }
}

impl<'de> Deserialize<'de> for Zulu {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Zulu::parse(&text).map_err(serde::de::Error::custom)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delta::DeltaParts;

    fn zulu(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Zulu {
        Zulu::with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    // ── Construction ────────────────────────────────────────────────────

    #[test]
    fn test_default_is_epoch() {
        assert_eq!(Zulu::default(), Zulu::epoch());
        assert_eq!(Zulu::from_fields(Fields::default()).unwrap(), Zulu::epoch());
    }

    #[test]
    fn test_construction_rejects_invalid_fields() {
        assert!(matches!(Zulu::new(2000, 13, 1), Err(ZuluError::Construction(_))));
        assert!(matches!(Zulu::new(2015, 2, 30), Err(ZuluError::Construction(_))));
        assert!(matches!(Zulu::new(0, 1, 1), Err(ZuluError::Construction(_))));
        assert!(matches!(Zulu::new(10_000, 1, 1), Err(ZuluError::Construction(_))));
        assert!(matches!(
            Zulu::from_fields(Fields { hour: 24, ..Default::default() }),
            Err(ZuluError::Construction(_))
        ));
    }

    #[test]
    fn test_construction_with_tz_normalizes_to_utc() {
        let eastern = Timezone::get("America/New_York").unwrap();
        let dt = Zulu::from_fields(Fields {
            year: 2000,
            month: 1,
            day: 5,
            hour: 0,
            minute: 30,
            tz: Some(eastern),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(dt, zulu(2000, 1, 5, 5, 30, 0));
    }

    #[test]
    fn test_construction_utc_tz_equals_none() {
        let explicit = Zulu::from_fields(Fields {
            year: 2000,
            month: 6,
            day: 1,
            tz: Some(Timezone::Utc),
            ..Default::default()
        })
        .unwrap();
        let implicit = Zulu::new(2000, 6, 1).unwrap();
        assert_eq!(explicit, implicit);
    }

    #[test]
    fn test_distinguished_values() {
        assert_eq!(Zulu::min().to_string(), "0001-01-01T00:00:00+00:00");
        assert_eq!(Zulu::max().to_string(), "9999-12-31T23:59:59.999999+00:00");
        assert_eq!(Zulu::epoch().to_string(), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_from_timestamp_roundtrip() {
        let dt = zulu(2000, 1, 1, 12, 30, 45);
        assert_eq!(dt.timestamp(), 946_729_845.0);
        assert_eq!(Zulu::from_timestamp(dt.timestamp()).unwrap(), dt);
        assert_eq!(Zulu::from_timestamp(0.0).unwrap(), Zulu::epoch());
    }

    #[test]
    fn test_from_timestamp_out_of_range() {
        assert!(matches!(Zulu::from_timestamp(2.6e11), Err(ZuluError::Range(_))));
        assert!(matches!(Zulu::from_timestamp(-6.3e10), Err(ZuluError::Range(_))));
    }

    #[test]
    fn test_from_ordinal() {
        assert_eq!(Zulu::from_ordinal(1).unwrap(), Zulu::min());
        let dt = Zulu::from_ordinal(730_120).unwrap();
        assert_eq!(dt, Zulu::new(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_from_gmtime() {
        let tm = StructTime { year: 2016, month: 7, day: 11, hour: 22, minute: 10, second: 11, ..Default::default() };
        assert_eq!(Zulu::from_gmtime(&tm).unwrap(), zulu(2016, 7, 11, 22, 10, 11));
    }

    #[test]
    fn test_combine() {
        let date = Zulu::new(2000, 1, 2).unwrap();
        let time = zulu(1970, 1, 1, 12, 30, 15);
        assert_eq!(Zulu::combine(&date, &time).unwrap(), zulu(2000, 1, 2, 12, 30, 15));
    }

    #[test]
    fn test_from_datetime_adopts_instant() {
        let foreign = FixedOffset::east_opt(3600).unwrap().with_ymd_and_hms(2000, 1, 1, 1, 0, 0).unwrap();
        assert_eq!(Zulu::from_datetime(&foreign).unwrap(), Zulu::new(2000, 1, 1).unwrap());
    }

    // ── Parse / format ──────────────────────────────────────────────────

    #[test]
    fn test_parse_isoformat_roundtrip() {
        let dt = Zulu::from_fields(Fields {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 30,
            second: 45,
            microsecond: 15,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(dt.isoformat(), "2000-01-01T12:30:45.000015+00:00");
        assert_eq!(Zulu::parse(&dt.isoformat()).unwrap(), dt);
        assert_eq!(dt.isoformat().parse::<Zulu>().unwrap(), dt);
    }

    #[test]
    fn test_parse_extreme_offset() {
        assert_eq!(
            Zulu::parse("2000-01-01T12:00:00-2359").unwrap(),
            zulu(2000, 1, 2, 11, 59, 0)
        );
    }

    #[test]
    fn test_format_with_timezone() {
        let eastern = Timezone::get("America/New_York").unwrap();
        let dt = zulu(2000, 1, 5, 5, 30, 0);
        assert_eq!(
            dt.format(None, Some(&eastern)).unwrap(),
            "2000-01-05T00:30:00-05:00"
        );
        assert_eq!(dt.format(Some("dd/MM/YYYY"), None).unwrap(), "05/01/2000");
        assert_eq!(dt.format(Some("%Y-%m-%d %H:%M"), None).unwrap(), "2000-01-05 05:30");
    }

    #[test]
    fn test_astimezone_keeps_receiver_utc() {
        let eastern = Timezone::get("America/New_York").unwrap();
        let dt = zulu(2000, 1, 5, 5, 30, 0);
        let local = dt.astimezone(&eastern);
        assert_eq!(local.hour(), 0);
        assert_eq!(local.offset().local_minus_utc(), -5 * 3600);
        // The receiver still compares equal: same instant.
        assert_eq!(dt, local);
    }

    // ── Replace ─────────────────────────────────────────────────────────

    #[test]
    fn test_replace_fields() {
        let dt = zulu(2000, 1, 5, 12, 30, 15);
        let replaced = dt.replace(Replace { hour: Some(3), minute: Some(15), ..Default::default() }).unwrap();
        assert_eq!(replaced, zulu(2000, 1, 5, 3, 15, 15));
    }

    #[test]
    fn test_replace_with_tz_renormalizes() {
        let eastern = Timezone::get("America/New_York").unwrap();
        let dt = zulu(2000, 1, 5, 0, 30, 0);
        let renormalized = dt.replace(Replace { tz: Some(eastern), ..Default::default() }).unwrap();
        assert_eq!(renormalized, zulu(2000, 1, 5, 5, 30, 0));
    }

    #[test]
    fn test_replace_rejects_invalid() {
        let dt = zulu(2015, 1, 31, 0, 0, 0);
        assert!(matches!(
            dt.replace(Replace { month: Some(2), ..Default::default() }),
            Err(ZuluError::Construction(_))
        ));
    }

    // ── Shift / add / subtract ──────────────────────────────────────────

    #[test]
    fn test_shift_fixed_units() {
        let dt = zulu(2000, 1, 1, 0, 0, 0);
        assert_eq!(
            dt.shift(Shift { days: 1, hours: 2, ..Default::default() }).unwrap(),
            zulu(2000, 1, 2, 2, 0, 0)
        );
        assert_eq!(
            dt.shift(Shift { weeks: 1, ..Default::default() }).unwrap(),
            zulu(2000, 1, 8, 0, 0, 0)
        );
        assert_eq!(
            dt.shift(Shift { minutes: -1, ..Default::default() }).unwrap(),
            zulu(1999, 12, 31, 23, 59, 0)
        );
    }

    #[test]
    fn test_shift_calendar_units_clamp() {
        let dt = Zulu::new(2015, 1, 31).unwrap();
        assert_eq!(
            dt.shift(Shift { months: 1, ..Default::default() }).unwrap(),
            Zulu::new(2015, 2, 28).unwrap()
        );
        let leap = Zulu::new(2016, 2, 29).unwrap();
        assert_eq!(
            leap.shift(Shift { years: 1, ..Default::default() }).unwrap(),
            Zulu::new(2017, 2, 28).unwrap()
        );
        assert_eq!(
            dt.shift(Shift { months: 13, ..Default::default() }).unwrap(),
            Zulu::new(2016, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_shift_months_roll_into_years() {
        let dt = Zulu::new(2015, 11, 15).unwrap();
        assert_eq!(
            dt.shift(Shift { months: 3, ..Default::default() }).unwrap(),
            Zulu::new(2016, 2, 15).unwrap()
        );
        assert_eq!(
            dt.shift(Shift { months: -23, ..Default::default() }).unwrap(),
            Zulu::new(2013, 12, 15).unwrap()
        );
    }

    #[test]
    fn test_subtract_negates_units() {
        let dt = zulu(2000, 1, 2, 0, 0, 0);
        assert_eq!(
            dt.subtract(Shift { days: 1, ..Default::default() }).unwrap(),
            zulu(2000, 1, 1, 0, 0, 0)
        );
    }

    #[test]
    fn test_subtract_negative_units_moves_forward() {
        // subtract(days=-1) double-negates and moves one day forward.
        let dt = zulu(2000, 1, 2, 0, 0, 0);
        assert_eq!(
            dt.subtract(Shift { days: -1, ..Default::default() }).unwrap(),
            zulu(2000, 1, 3, 0, 0, 0)
        );
    }

    #[test]
    fn test_shift_out_of_range() {
        assert!(matches!(
            Zulu::max().shift(Shift { seconds: 1, ..Default::default() }),
            Err(ZuluError::Range(_))
        ));
        assert!(matches!(
            Zulu::min().shift(Shift { microseconds: -1, ..Default::default() }),
            Err(ZuluError::Range(_))
        ));
    }

    // ── Operators ───────────────────────────────────────────────────────

    #[test]
    fn test_add_delta_and_seconds() {
        let dt = zulu(2000, 1, 1, 0, 0, 0);
        let minute = Delta::new(DeltaParts { minutes: 1.0, ..Default::default() }).unwrap();
        assert_eq!(dt + minute, zulu(2000, 1, 1, 0, 1, 0));
        assert_eq!(dt + 90.0, zulu(2000, 1, 1, 0, 1, 30));
        assert_eq!(dt + 60i64, zulu(2000, 1, 1, 0, 1, 0));
        assert_eq!(dt - minute, zulu(1999, 12, 31, 23, 59, 0));
    }

    #[test]
    fn test_subtracting_instants_yields_delta() {
        let a = Zulu::new(2000, 1, 1).unwrap();
        let b = Zulu::new(1999, 12, 31).unwrap();
        let delta = a - b;
        assert_eq!(delta.num_seconds(), 86_400);
        assert_eq!(delta.days(), 1);
    }

    #[test]
    fn test_subtracting_foreign_datetime() {
        let a = zulu(2000, 1, 1, 1, 0, 0);
        let foreign = FixedOffset::east_opt(3600).unwrap().with_ymd_and_hms(2000, 1, 1, 1, 0, 0).unwrap();
        assert_eq!((a - foreign).num_seconds(), 3_600);
    }

    #[test]
    fn test_comparisons_against_aware_datetimes() {
        let dt = zulu(2000, 1, 1, 12, 0, 0);
        let same = FixedOffset::east_opt(3600).unwrap().with_ymd_and_hms(2000, 1, 1, 13, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 1).unwrap();
        assert_eq!(dt, same);
        assert!(dt < later);
        assert!(dt.is_before(&zulu(2000, 1, 1, 12, 0, 1)));
        assert!(dt.is_between(&zulu(2000, 1, 1, 0, 0, 0), &zulu(2000, 1, 2, 0, 0, 0)));
    }

    // ── start_of / end_of / span ────────────────────────────────────────

    #[test]
    fn test_start_of_each_frame() {
        let dt = Zulu::from_fields(Fields {
            year: 2015,
            month: 7,
            day: 15,
            hour: 12,
            minute: 30,
            second: 15,
            microsecond: 123_456,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(dt.start_of(Frame::Second).unwrap(), zulu(2015, 7, 15, 12, 30, 15));
        assert_eq!(dt.start_of(Frame::Minute).unwrap(), zulu(2015, 7, 15, 12, 30, 0));
        assert_eq!(dt.start_of(Frame::Hour).unwrap(), zulu(2015, 7, 15, 12, 0, 0));
        assert_eq!(dt.start_of(Frame::Day).unwrap(), zulu(2015, 7, 15, 0, 0, 0));
        assert_eq!(dt.start_of(Frame::Month).unwrap(), zulu(2015, 7, 1, 0, 0, 0));
        assert_eq!(dt.start_of(Frame::Year).unwrap(), zulu(2015, 1, 1, 0, 0, 0));
        assert_eq!(dt.start_of(Frame::Decade).unwrap(), zulu(2010, 1, 1, 0, 0, 0));
        assert_eq!(dt.start_of(Frame::Century).unwrap(), zulu(2000, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_start_of_is_idempotent() {
        let dt = zulu(2015, 7, 15, 12, 30, 15);
        for frame in [Frame::Second, Frame::Minute, Frame::Hour, Frame::Day, Frame::Month, Frame::Year, Frame::Decade, Frame::Century] {
            let once = dt.start_of(frame).unwrap();
            assert_eq!(once.start_of(frame).unwrap(), once, "frame {frame}");
        }
    }

    #[test]
    fn test_end_of_month() {
        let dt = Zulu::from_fields(Fields {
            year: 2015,
            month: 2,
            day: 5,
            hour: 12,
            minute: 30,
            second: 15,
            microsecond: 123_456,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            dt.end_of(Frame::Month, 1).unwrap().to_string(),
            "2015-02-28T23:59:59.999999+00:00"
        );
    }

    #[test]
    fn test_end_of_with_count() {
        let dt = zulu(2015, 2, 5, 0, 0, 0);
        assert_eq!(
            dt.end_of(Frame::Month, 2).unwrap().to_string(),
            "2015-03-31T23:59:59.999999+00:00"
        );
    }

    #[test]
    fn test_span_contiguity() {
        let dt = zulu(2015, 2, 5, 12, 30, 15);
        for frame in [Frame::Second, Frame::Minute, Frame::Hour, Frame::Day, Frame::Month, Frame::Year, Frame::Decade, Frame::Century] {
            let (start, end) = dt.span(frame, 1).unwrap();
            let next = end.shift(Shift { microseconds: 1, ..Default::default() }).unwrap();
            assert_eq!(next, start.shift(frame.step(1)).unwrap(), "frame {frame}");
        }
    }

    #[test]
    fn test_frame_parsing() {
        assert_eq!("month".parse::<Frame>().unwrap(), Frame::Month);
        assert_eq!("century".parse::<Frame>().unwrap(), Frame::Century);
        let err = "week".parse::<Frame>().unwrap_err();
        assert!(matches!(err, ZuluError::Frame(_)));
        assert!(err.to_string().contains("second|minute|hour"), "got: {err}");
        assert!(matches!("eon".parse::<Frame>(), Err(ZuluError::Frame(_))));
    }

    // ── Misc ────────────────────────────────────────────────────────────

    #[test]
    fn test_days_in_month_and_leap_years() {
        assert_eq!(Zulu::new(2015, 2, 1).unwrap().days_in_month(), 28);
        assert_eq!(Zulu::new(2016, 2, 1).unwrap().days_in_month(), 29);
        assert_eq!(Zulu::new(2015, 7, 1).unwrap().days_in_month(), 31);
        assert!(Zulu::new(2016, 1, 1).unwrap().is_leap_year());
        assert!(!Zulu::new(2015, 1, 1).unwrap().is_leap_year());
    }

    #[test]
    fn test_naive_strips_offset() {
        let dt = zulu(2000, 1, 1, 12, 30, 45);
        let naive = dt.naive();
        assert_eq!(naive.to_string(), "2000-01-01 12:30:45");
    }

    #[test]
    fn test_record_roundtrip() {
        let dt = zulu(2015, 7, 15, 12, 30, 15);
        let record = dt.to_record();
        assert_eq!(Zulu::from_record(record).unwrap(), dt);
        assert!(Zulu::from_record(Record { month: 13, ..record }).is_err());
    }

    #[test]
    fn test_serde_iso_string() {
        let dt = zulu(2000, 1, 1, 12, 0, 0);
        assert_eq!(serde_json::to_string(&dt).unwrap(), "\"2000-01-01T12:00:00+00:00\"");
        assert_eq!(serde_json::from_str::<Zulu>("\"2000-01-01T12:00:00+00:00\"").unwrap(), dt);
    }

    #[test]
    fn test_time_from_and_to() {
        let dt = zulu(2000, 1, 1, 12, 0, 0);
        let earlier = zulu(2000, 1, 1, 11, 0, 0);
        assert_eq!(dt.time_from(&earlier), "in 1 hour");
        assert_eq!(dt.time_to(&earlier), "1 hour ago");
    }

    #[test]
    fn test_try_into_zulu_coercions() {
        let dt = zulu(2000, 1, 1, 0, 0, 0);
        assert_eq!("2000-01-01".try_into_zulu().unwrap(), dt);
        assert_eq!(946_684_800.0.try_into_zulu().unwrap(), dt);
        assert_eq!(dt.try_into_zulu().unwrap(), dt);
        assert_eq!(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap().try_into_zulu().unwrap(), dt);
    }
}
