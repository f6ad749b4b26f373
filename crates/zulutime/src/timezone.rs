//! Timezone resolution.
//!
//! Coerces a timezone identifier — the literal `"local"`, an IANA zone name,
//! a fixed offset, or an already-resolved handle — into a [`Timezone`] that
//! can answer offset queries and convert wall-clock fields to UTC. This is a
//! leaf dependency of both datetime construction and parsing: a resolved
//! timezone is only ever used transiently to compute UTC-equivalent fields,
//! it is never stored on a datetime value.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, FixedOffset, Local, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::error::{Result, ZuluError};

/// Identifier for the system's local timezone.
pub const LOCAL: &str = "local";

/// A resolved timezone handle.
///
/// `Utc` is the default everywhere in this crate: a missing timezone always
/// means "the fields are already UTC".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timezone {
    /// UTC (offset zero).
    Utc,
    /// The system's local timezone, looked up at each query.
    Local,
    /// A fixed UTC offset with no DST rules.
    Fixed(FixedOffset),
    /// An IANA timezone with full DST rules.
    Named(Tz),
}

impl Timezone {
    /// Resolve a timezone identifier string.
    ///
    /// `"local"` resolves to the system timezone, `"UTC"`/`"utc"`/`"Z"` to
    /// UTC, and anything else is looked up as an IANA zone name.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::InvalidTimezone`] if the name is not a known
    /// IANA timezone.
    pub fn get(name: &str) -> Result<Self> {
        name.parse()
    }

    /// A fixed offset of `seconds` east of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::InvalidTimezone`] unless the offset is strictly
    /// between -24 and +24 hours.
    pub fn fixed(seconds: i32) -> Result<Self> {
        FixedOffset::east_opt(seconds).map(Timezone::Fixed).ok_or_else(|| {
            ZuluError::InvalidTimezone(format!(
                "offset {seconds}s must be strictly between -24 and +24 hours"
            ))
        })
    }

    /// The identifier this handle resolves for, for diagnostics.
    pub fn name(&self) -> String {
        match self {
            Timezone::Utc => "UTC".to_string(),
            Timezone::Local => LOCAL.to_string(),
            Timezone::Fixed(offset) => offset.to_string(),
            Timezone::Named(tz) => tz.name().to_string(),
        }
    }

    /// The UTC offset in effect in this zone at the given instant.
    pub fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        let naive = instant.naive_utc();
        match self {
            Timezone::Utc => Utc.fix(),
            Timezone::Local => Local.offset_from_utc_datetime(&naive).fix(),
            Timezone::Fixed(offset) => *offset,
            Timezone::Named(tz) => tz.offset_from_utc_datetime(&naive).fix(),
        }
    }

    /// Interpret naive wall-clock fields in this zone and convert to UTC.
    ///
    /// Ambiguous wall-clock times (the repeated hour when clocks fall back)
    /// resolve deterministically through `fold`: 0 selects the earlier
    /// instant, anything else the later one. Nonexistent wall-clock times
    /// (the skipped hour when clocks spring forward) map forward across the
    /// gap by adopting the post-transition offset.
    ///
    /// # Errors
    ///
    /// Returns [`ZuluError::Range`] only when the converted instant is
    /// unrepresentable.
    pub fn resolve_local(&self, naive: NaiveDateTime, fold: u8) -> Result<DateTime<Utc>> {
        match self {
            Timezone::Utc => Ok(Utc.from_utc_datetime(&naive)),
            Timezone::Local => resolve_in(&Local, naive, fold),
            Timezone::Fixed(offset) => resolve_in(offset, naive, fold),
            Timezone::Named(tz) => resolve_in(tz, naive, fold),
        }
    }
}

impl FromStr for Timezone {
    type Err = ZuluError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            LOCAL => Ok(Timezone::Local),
            "UTC" | "utc" | "Z" => Ok(Timezone::Utc),
            other => other
                .parse::<Tz>()
                .map(Timezone::Named)
                .map_err(|_| ZuluError::InvalidTimezone(format!("'{other}'"))),
        }
    }
}

impl From<FixedOffset> for Timezone {
    fn from(offset: FixedOffset) -> Self {
        Timezone::Fixed(offset)
    }
}

impl From<Tz> for Timezone {
    fn from(tz: Tz) -> Self {
        Timezone::Named(tz)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Convert local fields in `tz` to UTC with deterministic gap/fold handling.
fn resolve_in<T: TimeZone>(tz: &T, naive: NaiveDateTime, fold: u8) -> Result<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, later) => {
            let dt = if fold == 0 { earlier } else { later };
            Ok(dt.with_timezone(&Utc))
        }
        LocalResult::None => {
            // Skipped wall-clock time. Probe the offsets on either side of
            // the transition and apply the smaller one, which maps the
            // nonexistent local time forward across the gap.
            let first = tz.offset_from_utc_datetime(&naive).fix().local_minus_utc();
            let candidate = sub_seconds(naive, first)?;
            let second = tz
                .offset_from_utc_datetime(&candidate)
                .fix()
                .local_minus_utc();
            let chosen = first.min(second);
            Ok(Utc.from_utc_datetime(&sub_seconds(naive, chosen)?))
        }
    }
}

fn sub_seconds(naive: NaiveDateTime, seconds: i32) -> Result<NaiveDateTime> {
    naive
        .checked_sub_signed(TimeDelta::seconds(i64::from(seconds)))
        .ok_or_else(|| ZuluError::Range(format!("datetime {naive} is unrepresentable after offset conversion")))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn test_get_utc_names() {
        assert_eq!(Timezone::get("UTC").unwrap(), Timezone::Utc);
        assert_eq!(Timezone::get("utc").unwrap(), Timezone::Utc);
        assert_eq!(Timezone::get("Z").unwrap(), Timezone::Utc);
    }

    #[test]
    fn test_get_local() {
        assert_eq!(Timezone::get("local").unwrap(), Timezone::Local);
    }

    #[test]
    fn test_get_iana_name() {
        let tz = Timezone::get("America/New_York").unwrap();
        assert_eq!(tz.name(), "America/New_York");
    }

    #[test]
    fn test_get_unknown_name_fails() {
        let err = Timezone::get("Invalid/Zone").unwrap_err();
        assert!(matches!(err, ZuluError::InvalidTimezone(_)));
        assert!(err.to_string().contains("Invalid/Zone"));
    }

    #[test]
    fn test_fixed_offset_band() {
        assert!(Timezone::fixed(23 * 3600 + 59 * 60).is_ok());
        assert!(Timezone::fixed(-(23 * 3600 + 59 * 60)).is_ok());
        assert!(Timezone::fixed(24 * 3600).is_err());
        assert!(Timezone::fixed(-24 * 3600).is_err());
    }

    #[test]
    fn test_offset_at_tracks_dst() {
        let tz = Timezone::get("America/New_York").unwrap();
        let winter = Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap();
        let summer = Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap();
        assert_eq!(tz.offset_at(winter).local_minus_utc(), -5 * 3600);
        assert_eq!(tz.offset_at(summer).local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_resolve_local_unambiguous() {
        let tz = Timezone::get("America/New_York").unwrap();
        let utc = tz.resolve_local(naive(2026, 1, 15, 7, 0, 0), 0).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_resolve_local_ambiguous_uses_fold() {
        // November 1, 2026: US fall back, 1:30 AM happens twice.
        let tz = Timezone::get("America/New_York").unwrap();
        let repeated = naive(2026, 11, 1, 1, 30, 0);
        let earlier = tz.resolve_local(repeated, 0).unwrap();
        let later = tz.resolve_local(repeated, 1).unwrap();
        assert_eq!(earlier, Utc.with_ymd_and_hms(2026, 11, 1, 5, 30, 0).unwrap());
        assert_eq!(later, Utc.with_ymd_and_hms(2026, 11, 1, 6, 30, 0).unwrap());
    }

    #[test]
    fn test_resolve_local_gap_maps_forward() {
        // March 8, 2026: US spring forward, 2:30 AM does not exist.
        // The pre-transition offset (-5) applies, landing at 7:30 UTC.
        let tz = Timezone::get("America/New_York").unwrap();
        let skipped = naive(2026, 3, 8, 2, 30, 0);
        let utc = tz.resolve_local(skipped, 0).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2026, 3, 8, 7, 30, 0).unwrap());
    }

    #[test]
    fn test_resolve_fixed_offset() {
        let tz = Timezone::fixed(5 * 3600 + 30 * 60).unwrap();
        let utc = tz.resolve_local(naive(2026, 3, 1, 6, 0, 0), 0).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2026, 3, 1, 0, 30, 0).unwrap());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Timezone::Utc.to_string(), "UTC");
        assert_eq!(Timezone::get("Asia/Tokyo").unwrap().to_string(), "Asia/Tokyo");
    }
}
