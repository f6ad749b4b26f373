//! Datetime and duration parsing and formatting.
//!
//! The datetime parser tries a priority list of formats (ISO-8601, numeric
//! POSIX timestamp, explicit pattern) and reports every attempted format with
//! its failure reason when none match. Patterns may use either native
//! strftime directives or a fixed subset of the Unicode date field symbols
//! (`YYYY`, `MMM`, `dd`, `HH`, ...) which are translated to directives before
//! use.
//!
//! The duration side provides a free-form grammar (`"1w3d2h32m"`,
//! `"2 days, 4:13:02"`, `"1.2 minutes"`) and a single-unit humanizer
//! (`"1 day"`, `"in 2 hrs"`, `"5s"`).

use std::fmt;
use std::str::FromStr;

use chrono::format::{parse as chrono_parse, Parsed, StrftimeItems};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc,
};

use crate::error::{Result, ZuluError};
use crate::timezone::Timezone;

/// Fallback locale identifier when neither an explicit locale nor the
/// environment provides one.
pub const DEFAULT_LOCALE: &str = "en_US_POSIX";

// ── Datetime formats ────────────────────────────────────────────────────────

/// A single candidate format for datetime parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeFormat {
    /// ISO-8601 text: `YYYY[-MM[-DD]]` with an optional time part separated
    /// by `T` or a space, optional fractional seconds, and an optional
    /// `Z`/`±HH[:MM]` offset suffix.
    Iso8601,
    /// The whole input as a fractional POSIX-seconds number.
    Timestamp,
    /// An explicit pattern: native strftime directives if the string
    /// contains `%`, otherwise Unicode date field symbols translated through
    /// the fixed token table.
    Pattern(String),
}

impl fmt::Display for DateTimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeFormat::Iso8601 => f.write_str("ISO8601"),
            DateTimeFormat::Timestamp => f.write_str("timestamp"),
            DateTimeFormat::Pattern(pattern) => f.write_str(pattern),
        }
    }
}

/// The default parse priority: ISO-8601 first, then numeric timestamp.
pub fn default_formats() -> [DateTimeFormat; 2] {
    [DateTimeFormat::Iso8601, DateTimeFormat::Timestamp]
}

/// Parse `text` as a UTC datetime using a list of candidate formats.
///
/// The first format that parses wins. If the parsed value carries no UTC
/// offset, `default_tz` (UTC when `None`) is attached before normalizing.
///
/// # Errors
///
/// Returns [`ZuluError::Parse`] listing every attempted format and its
/// failure reason when no format matches, and [`ZuluError::Range`] when the
/// converted instant is unrepresentable.
pub fn parse_datetime(
    text: &str,
    formats: &[DateTimeFormat],
    default_tz: Option<&Timezone>,
) -> Result<DateTime<Utc>> {
    let mut errors: Vec<(String, String)> = Vec::new();
    let mut parsed = None;

    for format in formats {
        match parse_format(text, format) {
            Ok(value) => {
                parsed = Some(value);
                break;
            }
            Err(reason) => errors.push((format.to_string(), reason)),
        }
    }

    let Some((naive, offset)) = parsed else {
        let attempted = errors
            .iter()
            .map(|(format, reason)| format!("\"{format}\" ({reason})"))
            .collect::<Vec<_>>()
            .join(", ");
        return Err(ZuluError::Parse(format!(
            "Value \"{text}\" does not match any format in [{attempted}]"
        )));
    };

    match offset {
        Some(offset) => {
            let utc = naive
                .checked_sub_signed(TimeDelta::seconds(i64::from(offset.local_minus_utc())))
                .ok_or_else(|| {
                    ZuluError::Range(format!(
                        "datetime '{text}' is unrepresentable after offset conversion"
                    ))
                })?;
            Ok(Utc.from_utc_datetime(&utc))
        }
        None => {
            let tz = default_tz.copied().unwrap_or(Timezone::Utc);
            tz.resolve_local(naive, 0)
        }
    }
}

/// Parse `text` with a single format, returning the failure reason on error.
fn parse_format(
    text: &str,
    format: &DateTimeFormat,
) -> std::result::Result<(NaiveDateTime, Option<FixedOffset>), String> {
    match format {
        DateTimeFormat::Iso8601 => parse_iso8601(text),
        DateTimeFormat::Timestamp => {
            let seconds: f64 = text
                .trim()
                .parse()
                .map_err(|_| format!("'{text}' is not a numeric timestamp"))?;
            let naive = timestamp_to_naive(seconds)?;
            Ok((naive, Some(Utc.fix())))
        }
        DateTimeFormat::Pattern(pattern) => {
            if pattern.contains('%') {
                parse_with_directives(text, pattern)
            } else {
                parse_with_directives(text, &translate_pattern(pattern, Translate::Parse))
            }
        }
    }
}

/// Convert fractional POSIX seconds to a naive UTC datetime.
fn timestamp_to_naive(seconds: f64) -> std::result::Result<NaiveDateTime, String> {
    if !seconds.is_finite() {
        return Err(format!("timestamp {seconds} is not finite"));
    }
    let micros = (seconds * 1_000_000.0).round();
    if micros < crate::datetime::MIN_TIMESTAMP_MICROS as f64
        || micros > crate::datetime::MAX_TIMESTAMP_MICROS as f64
    {
        return Err(format!("timestamp {seconds} is outside years 1-9999"));
    }
    let micros = micros as i64;
    DateTime::from_timestamp(micros.div_euclid(1_000_000), (micros.rem_euclid(1_000_000) * 1_000) as u32)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| format!("timestamp {seconds} is unrepresentable"))
}

// ── ISO-8601 ────────────────────────────────────────────────────────────────

/// Parse ISO-8601 text into naive fields plus an optional offset.
fn parse_iso8601(
    text: &str,
) -> std::result::Result<(NaiveDateTime, Option<FixedOffset>), String> {
    let s = text.trim();
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    let (date_part, time_part) = match s.find(['T', 't', ' ']) {
        Some(idx) => (&s[..idx], Some(&s[idx + 1..])),
        None => (s, None),
    };

    let date = parse_iso_date(date_part)?;
    let (time, offset) = match time_part {
        Some(t) if !t.is_empty() => parse_iso_time(t)?,
        Some(_) => return Err("missing time after separator".to_string()),
        None => (NaiveTime::MIN, None),
    };

    Ok((date.and_time(time), offset))
}

/// Parse `YYYY`, `YYYY-MM`, or `YYYY-MM-DD`.
fn parse_iso_date(part: &str) -> std::result::Result<NaiveDate, String> {
    let fields: Vec<&str> = part.split('-').collect();
    if fields.len() > 3 {
        return Err(format!("'{part}' is not an ISO 8601 date"));
    }

    if fields[0].len() != 4 || !fields[0].bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{part}' does not start with a 4 digit year"));
    }
    let year: i32 = fields[0]
        .parse()
        .map_err(|_| format!("invalid year in '{part}'"))?;
    let month: u32 = match fields.get(1) {
        Some(field) => field
            .parse()
            .map_err(|_| format!("invalid month in '{part}'"))?,
        None => 1,
    };
    let day: u32 = match fields.get(2) {
        Some(field) => field
            .parse()
            .map_err(|_| format!("invalid day in '{part}'"))?,
        None => 1,
    };

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("'{part}' is not a valid calendar date"))
}

/// Parse `HH[:MM[:SS[.ffffff]]]` with an optional trailing offset.
fn parse_iso_time(
    part: &str,
) -> std::result::Result<(NaiveTime, Option<FixedOffset>), String> {
    let (clock, offset) = split_iso_offset(part)?;

    let fields: Vec<&str> = clock.split(':').collect();
    if fields.is_empty() || fields.len() > 3 || fields[0].is_empty() {
        return Err(format!("'{part}' is not an ISO 8601 time"));
    }

    let hour: u32 = fields[0]
        .parse()
        .map_err(|_| format!("invalid hour in '{part}'"))?;
    let minute: u32 = match fields.get(1) {
        Some(field) => field
            .parse()
            .map_err(|_| format!("invalid minute in '{part}'"))?,
        None => 0,
    };
    let (second, micro) = match fields.get(2) {
        Some(field) => parse_iso_seconds(field)?,
        None => (0, 0),
    };

    let time = NaiveTime::from_hms_micro_opt(hour, minute, second, micro)
        .ok_or_else(|| format!("'{part}' is not a valid time of day"))?;
    Ok((time, offset))
}

/// Parse `SS[.ffffff]` (`,` also accepted as the fraction separator).
fn parse_iso_seconds(field: &str) -> std::result::Result<(u32, u32), String> {
    let (whole, fraction) = match field.find(['.', ',']) {
        Some(idx) => (&field[..idx], Some(&field[idx + 1..])),
        None => (field, None),
    };
    let second: u32 = whole
        .parse()
        .map_err(|_| format!("invalid second '{field}'"))?;
    let micro = match fraction {
        Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => {
            let mut padded: String = digits.chars().take(6).collect();
            while padded.len() < 6 {
                padded.push('0');
            }
            padded.parse::<u32>().map_err(|_| format!("invalid fraction '{field}'"))?
        }
        Some(_) => return Err(format!("invalid fraction '{field}'")),
        None => 0,
    };
    Ok((second, micro))
}

/// Split a trailing `Z` or `±HH[:MM]`/`±HHMM` offset off an ISO time part.
fn split_iso_offset(
    part: &str,
) -> std::result::Result<(&str, Option<FixedOffset>), String> {
    if let Some(clock) = part.strip_suffix(['Z', 'z']) {
        return Ok((clock, Some(Utc.fix())));
    }
    if let Some(idx) = part.find(['+', '-']) {
        let offset = parse_iso_utc_offset(&part[idx..])?;
        return Ok((&part[..idx], Some(offset)));
    }
    Ok((part, None))
}

fn parse_iso_utc_offset(text: &str) -> std::result::Result<FixedOffset, String> {
    let sign = if text.starts_with('-') { -1 } else { 1 };
    let digits = text[1..].replace(':', "");
    if !(digits.len() == 2 || digits.len() == 4) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("'{text}' is not a UTC offset"));
    }
    let hours: i32 = digits[..2].parse().map_err(|_| format!("invalid offset '{text}'"))?;
    let minutes: i32 = if digits.len() == 4 {
        digits[2..].parse().map_err(|_| format!("invalid offset '{text}'"))?
    } else {
        0
    };
    if minutes >= 60 {
        return Err(format!("offset minutes out of range in '{text}'"));
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| "UTC offset must be strictly between -24 and +24 hours".to_string())
}

// ── Directive parsing ───────────────────────────────────────────────────────

/// Parse `text` with strftime directives, defaulting missing fields the way
/// strptime does (1900-01-01 midnight).
fn parse_with_directives(
    text: &str,
    directives: &str,
) -> std::result::Result<(NaiveDateTime, Option<FixedOffset>), String> {
    let mut parsed = Parsed::new();
    chrono_parse(&mut parsed, text, StrftimeItems::new(directives))
        .map_err(|err| err.to_string())?;

    let year = parsed.year.unwrap_or(1900);
    let date = match (parsed.month, parsed.day) {
        (None, None) => match parsed.ordinal {
            Some(ordinal) => NaiveDate::from_yo_opt(year, ordinal),
            None => NaiveDate::from_ymd_opt(year, 1, 1),
        },
        (month, day) => NaiveDate::from_ymd_opt(year, month.unwrap_or(1), day.unwrap_or(1)),
    }
    .ok_or_else(|| format!("'{text}' is not a valid calendar date"))?;

    let hour = parsed.hour_div_12.unwrap_or(0) * 12 + parsed.hour_mod_12.unwrap_or(0);
    let micro = parsed.nanosecond.unwrap_or(0) / 1_000;
    let time = NaiveTime::from_hms_micro_opt(
        hour,
        parsed.minute.unwrap_or(0),
        parsed.second.unwrap_or(0),
        micro,
    )
    .ok_or_else(|| format!("'{text}' is not a valid time of day"))?;

    let offset = match parsed.offset {
        Some(seconds) => Some(FixedOffset::east_opt(seconds).ok_or_else(|| {
            "UTC offset must be strictly between -24 and +24 hours".to_string()
        })?),
        None => None,
    };

    Ok((date.and_time(time), offset))
}

// ── Pattern token table ─────────────────────────────────────────────────────

/// Which directive column of the token table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Translate {
    Parse,
    Format,
}

/// Fixed mapping from Unicode date field symbols to strftime directives.
///
/// The first directive of each pair is used for parsing, the second for
/// formatting (they differ only in zero-padding). Character groups with no
/// entry pass through literally.
fn pattern_token_directive(token: &str) -> Option<(&'static str, &'static str)> {
    Some(match token {
        "yyyy" | "YYYY" => ("%Y", "%Y"),
        "yy" | "YY" => ("%y", "%y"),
        "MMMM" => ("%B", "%B"),
        "MMM" => ("%b", "%b"),
        "MM" => ("%m", "%m"),
        "M" => ("%m", "%-m"),
        "DDD" | "DD" => ("%j", "%j"),
        "D" => ("%j", "%-j"),
        "dd" => ("%d", "%d"),
        "d" => ("%d", "%-d"),
        "EEEE" => ("%A", "%A"),
        "EEE" | "EE" | "E" | "eee" => ("%a", "%a"),
        "ee" | "e" => ("%w", "%w"),
        "HH" => ("%H", "%H"),
        "H" => ("%H", "%-H"),
        "hh" => ("%I", "%I"),
        "h" => ("%I", "%-I"),
        "mm" => ("%M", "%M"),
        "m" => ("%M", "%-M"),
        "ss" => ("%S", "%S"),
        "s" => ("%S", "%-S"),
        "SSSSSS" | "SSSSS" | "SSSS" => ("%6f", "%6f"),
        "SSS" | "SS" | "S" => ("%3f", "%3f"),
        "a" => ("%p", "%p"),
        "z" | "Z" => ("%z", "%z"),
        _ => return None,
    })
}

/// Group consecutive identical characters: `"YY-MM"` → `["YY", "-", "MM"]`.
fn tokenize_pattern(pattern: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = pattern.chars().peekable();
    while let Some(first) = chars.next() {
        let mut token = String::new();
        token.push(first);
        while chars.peek() == Some(&first) {
            token.push(first);
            chars.next();
        }
        tokens.push(token);
    }
    tokens
}

/// Translate a Unicode date pattern into a strftime directive string.
pub(crate) fn translate_pattern(pattern: &str, which: Translate) -> String {
    tokenize_pattern(pattern)
        .iter()
        .map(|token| match pattern_token_directive(token) {
            Some((parse, format)) => match which {
                Translate::Parse => parse.to_string(),
                Translate::Format => format.to_string(),
            },
            None => token.clone(),
        })
        .collect()
}

// ── Datetime formatting ─────────────────────────────────────────────────────

/// ISO-8601 rendering: fractional seconds only when non-zero, microsecond
/// precision, explicit offset suffix.
pub fn isoformat<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: fmt::Display,
{
    if dt.timestamp_subsec_micros() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
    }
}

/// Render `dt` with an optional format string.
///
/// `None` renders ISO-8601; a string containing `%` is used as strftime
/// directives; anything else is translated through the pattern token table.
/// Month, weekday, and AM/PM names render in English.
///
/// # Errors
///
/// Returns [`ZuluError::InvalidArgument`] when the format string contains
/// directives that cannot be rendered.
pub fn format_datetime(dt: &DateTime<FixedOffset>, format: Option<&str>) -> Result<String> {
    match format {
        None => Ok(isoformat(dt)),
        Some(f) if f.contains('%') => render(dt, f),
        Some(f) => render(dt, &translate_pattern(f, Translate::Format)),
    }
}

fn render(dt: &DateTime<FixedOffset>, directives: &str) -> Result<String> {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", dt.format(directives)).map_err(|_| {
        ZuluError::InvalidArgument(format!("cannot format datetime with '{directives}'"))
    })?;
    Ok(out)
}

// ── Duration grammar ────────────────────────────────────────────────────────

/// Parse a free-form duration string.
///
/// Accepts colon-clock forms (`"4:13"` as MM:SS, `"4:13:02.266"`,
/// `"2:04:13:02"` as D:H:M:S), unit phrases with full or abbreviated names
/// (`"1w3d2h32m"`, `"5 hours, 34 minutes"`, `"1.2 minutes"`), and
/// combinations joined by commas (`"2 days, 4:13:02"`). A leading `+`/`-`
/// signs the whole value.
///
/// # Errors
///
/// Returns [`ZuluError::Parse`] when the string matches no recognized
/// duration grammar and [`ZuluError::Range`] when the magnitude is
/// unrepresentable.
pub fn parse_timedelta(text: &str) -> Result<TimeDelta> {
    let s = text.trim();
    let (sign, body) = match s.as_bytes().first() {
        Some(b'+') => (1.0, s[1..].trim_start()),
        Some(b'-') => (-1.0, s[1..].trim_start()),
        _ => (1.0, s),
    };
    if body.is_empty() {
        return Err(not_a_duration(text));
    }

    let mut total_seconds = 0.0f64;
    for part in body.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err(not_a_duration(text));
        }

        let mut phrase = String::new();
        let mut clock = None;
        for token in part.split_whitespace() {
            if token.contains(':') {
                if clock.is_some() {
                    return Err(not_a_duration(text));
                }
                clock = Some(token);
            } else {
                if clock.is_some() {
                    // Unit text after a clock segment is not a duration.
                    return Err(not_a_duration(text));
                }
                phrase.push_str(token);
                phrase.push(' ');
            }
        }

        if !phrase.trim().is_empty() {
            total_seconds +=
                parse_unit_phrases(phrase.trim()).map_err(|_| not_a_duration(text))?;
        }
        if let Some(clock) = clock {
            total_seconds += parse_clock(clock).map_err(|_| not_a_duration(text))?;
        }
    }

    seconds_to_timedelta(sign * total_seconds)
}

fn not_a_duration(text: &str) -> ZuluError {
    ZuluError::Parse(format!("Value \"{text}\" is not a recognized duration format"))
}

/// Convert fractional seconds to a `TimeDelta` at microsecond resolution.
pub(crate) fn seconds_to_timedelta(seconds: f64) -> Result<TimeDelta> {
    if !seconds.is_finite() {
        return Err(ZuluError::Range(format!("duration of {seconds} seconds")));
    }
    let micros = (seconds * 1_000_000.0).round();
    if micros < i64::MIN as f64 || micros > i64::MAX as f64 {
        return Err(ZuluError::Range(format!(
            "duration of {seconds} seconds is unrepresentable"
        )));
    }
    Ok(TimeDelta::microseconds(micros as i64))
}

/// Parse `MM:SS`, `HH:MM:SS[.f]`, or `D:HH:MM:SS[.f]` into seconds.
fn parse_clock(clock: &str) -> std::result::Result<f64, ()> {
    let fields: Vec<&str> = clock.split(':').collect();
    if fields.len() < 2 || fields.len() > 4 {
        return Err(());
    }

    // Positional multipliers, aligned to the last field being seconds.
    let multipliers: &[f64] = match fields.len() {
        2 => &[60.0, 1.0],
        3 => &[3600.0, 60.0, 1.0],
        _ => &[86_400.0, 3600.0, 60.0, 1.0],
    };

    let mut total = 0.0;
    for (idx, field) in fields.iter().enumerate() {
        let last = idx == fields.len() - 1;
        if field.is_empty() {
            return Err(());
        }
        let valid = field
            .bytes()
            .all(|b| b.is_ascii_digit() || (last && b == b'.'));
        if !valid {
            return Err(());
        }
        let value: f64 = field.parse().map_err(|_| ())?;
        total += value * multipliers[idx];
    }
    Ok(total)
}

/// Parse concatenated `<number> <unit>` pairs into seconds.
fn parse_unit_phrases(text: &str) -> std::result::Result<f64, ()> {
    fn flush(
        number: &mut String,
        unit: &mut String,
        total: &mut f64,
    ) -> std::result::Result<(), ()> {
        if number.is_empty() {
            return Err(());
        }
        let value: f64 = number.parse().map_err(|_| ())?;
        let multiplier = if unit.is_empty() {
            // A trailing bare number counts as seconds.
            1.0
        } else {
            unit_multiplier(&unit.to_lowercase()).ok_or(())?
        };
        *total += value * multiplier;
        number.clear();
        unit.clear();
        Ok(())
    }

    let mut total = 0.0;
    let mut number = String::new();
    let mut unit = String::new();
    let mut any = false;

    for c in text.chars() {
        if c.is_ascii_digit() || c == '.' {
            if !unit.is_empty() {
                flush(&mut number, &mut unit, &mut total)?;
            }
            number.push(c);
        } else if c.is_ascii_alphabetic() {
            if number.is_empty() {
                return Err(());
            }
            unit.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            return Err(());
        }
        any = true;
    }
    if !number.is_empty() {
        flush(&mut number, &mut unit, &mut total)?;
    } else if !unit.is_empty() {
        return Err(());
    }

    if any {
        Ok(total)
    } else {
        Err(())
    }
}

fn unit_multiplier(unit: &str) -> Option<f64> {
    Some(match unit {
        "w" | "wk" | "wks" | "week" | "weeks" => 604_800.0,
        "d" | "dy" | "dys" | "day" | "days" => 86_400.0,
        "h" | "hr" | "hrs" | "hour" | "hours" => 3_600.0,
        "m" | "min" | "mins" | "minute" | "minutes" => 60.0,
        "s" | "sec" | "secs" | "second" | "seconds" => 1.0,
        "ms" | "milli" | "millis" | "millisecond" | "milliseconds" => 1e-3,
        "us" | "micro" | "micros" | "microsecond" | "microseconds" => 1e-6,
        _ => return None,
    })
}

// ── Duration humanization ───────────────────────────────────────────────────

/// Rendering style for humanized durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaStyle {
    /// `"2 days"`
    #[default]
    Long,
    /// `"2 days"` with abbreviated unit names (`"2 hrs"`, `"5 sec"`).
    Short,
    /// `"2d"`
    Narrow,
}

impl FromStr for DeltaStyle {
    type Err = ZuluError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "long" => Ok(DeltaStyle::Long),
            "short" => Ok(DeltaStyle::Short),
            "narrow" => Ok(DeltaStyle::Narrow),
            other => Err(ZuluError::InvalidArgument(format!(
                "duration format must be one of \"long\", \"short\", \"narrow\", not \"{other}\""
            ))),
        }
    }
}

/// The smallest unit a humanized duration may display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    #[default]
    Second,
}

impl FromStr for Granularity {
    type Err = ZuluError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "year" => Ok(Granularity::Year),
            "month" => Ok(Granularity::Month),
            "week" => Ok(Granularity::Week),
            "day" => Ok(Granularity::Day),
            "hour" => Ok(Granularity::Hour),
            "minute" => Ok(Granularity::Minute),
            "second" => Ok(Granularity::Second),
            other => Err(ZuluError::InvalidArgument(format!(
                "duration granularity must be one of \"year\", \"month\", \"week\", \"day\", \
                 \"hour\", \"minute\", \"second\", not \"{other}\""
            ))),
        }
    }
}

/// Nominal seconds per unit, largest first (365-day years, 30-day months).
const HUMANIZE_UNITS: [(Granularity, f64); 7] = [
    (Granularity::Year, 31_536_000.0),
    (Granularity::Month, 2_592_000.0),
    (Granularity::Week, 604_800.0),
    (Granularity::Day, 86_400.0),
    (Granularity::Hour, 3_600.0),
    (Granularity::Minute, 60.0),
    (Granularity::Second, 1.0),
];

/// Render a duration as a single humanized unit.
///
/// Walks units from years down: the first whose magnitude reaches
/// `threshold` wins (so 23 hours at threshold 0.85 rounds up to `"1 day"`);
/// `granularity` is the floor unit used when nothing reaches the threshold.
/// `add_direction` wraps the result in `"in ..."`/`"... ago"` phrasing and
/// renders a zero duration as `"now"`. The `locale` identifier is accepted
/// for API parity; rendering tables ship for English.
pub fn format_timedelta(
    delta: TimeDelta,
    style: DeltaStyle,
    granularity: Granularity,
    threshold: f64,
    add_direction: bool,
    _locale: &str,
) -> String {
    let seconds = delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9;
    if add_direction && seconds == 0.0 {
        return "now".to_string();
    }
    let future = seconds >= 0.0;
    let magnitude = seconds.abs();

    for (unit, per) in HUMANIZE_UNITS {
        let mut value = magnitude / per;
        if value >= threshold || unit == granularity {
            if unit == granularity && value > 0.0 {
                value = value.max(1.0);
            }
            let count = value.round() as i64;
            let body = unit_label(style, unit, count);
            return if add_direction {
                if future {
                    format!("in {body}")
                } else {
                    format!("{body} ago")
                }
            } else {
                body
            };
        }
    }
    String::new()
}

fn unit_label(style: DeltaStyle, unit: Granularity, count: i64) -> String {
    let one = count == 1 || count == -1;
    let name = match (style, unit) {
        (DeltaStyle::Long, Granularity::Year) => if one { "year" } else { "years" },
        (DeltaStyle::Long, Granularity::Month) => if one { "month" } else { "months" },
        (DeltaStyle::Long, Granularity::Week) => if one { "week" } else { "weeks" },
        (DeltaStyle::Long, Granularity::Day) => if one { "day" } else { "days" },
        (DeltaStyle::Long, Granularity::Hour) => if one { "hour" } else { "hours" },
        (DeltaStyle::Long, Granularity::Minute) => if one { "minute" } else { "minutes" },
        (DeltaStyle::Long, Granularity::Second) => if one { "second" } else { "seconds" },
        (DeltaStyle::Short, Granularity::Year) => if one { "yr" } else { "yrs" },
        (DeltaStyle::Short, Granularity::Month) => if one { "mth" } else { "mths" },
        (DeltaStyle::Short, Granularity::Week) => if one { "wk" } else { "wks" },
        (DeltaStyle::Short, Granularity::Day) => if one { "day" } else { "days" },
        (DeltaStyle::Short, Granularity::Hour) => "hr",
        (DeltaStyle::Short, Granularity::Minute) => "min",
        (DeltaStyle::Short, Granularity::Second) => "sec",
        (DeltaStyle::Narrow, Granularity::Year) => "y",
        (DeltaStyle::Narrow, Granularity::Month) => "mo",
        (DeltaStyle::Narrow, Granularity::Week) => "w",
        (DeltaStyle::Narrow, Granularity::Day) => "d",
        (DeltaStyle::Narrow, Granularity::Hour) => "h",
        (DeltaStyle::Narrow, Granularity::Minute) => "m",
        (DeltaStyle::Narrow, Granularity::Second) => "s",
    };
    match style {
        DeltaStyle::Narrow => format!("{count}{name}"),
        _ => format!("{count} {name}"),
    }
}

/// Resolve the locale to use for humanized rendering.
///
/// Resolution order: explicit argument, then the `LC_TIME` and `LANG`
/// environment variables, then [`DEFAULT_LOCALE`]. Resolved once at each
/// call site rather than cached globally.
pub fn get_locale(explicit: Option<&str>) -> String {
    if let Some(locale) = explicit {
        if !locale.is_empty() {
            return locale.to_string();
        }
    }
    for var in ["LC_TIME", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return value;
            }
        }
    }
    DEFAULT_LOCALE.to_string()
}

// ── Tests ───────────────────────────────────────────────────────────────────
