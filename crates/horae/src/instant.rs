//! A calendar date combined with a clock time, optionally zone-aware.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use horae_calendar::{MAX_YEAR, MIN_YEAR};
use horae_span::Duration;

use crate::convert::from_utc;
use crate::date::Date;
use crate::error::DateTimeError;
use crate::fmt::{ctime_string, expand_format, format_clock, format_offset};
use crate::normalize::Normalized;
use crate::time::{Time, same_zone};
use crate::zone::{ZoneRef, validate_offset};

/// A host-decomposed timestamp, the shape `struct tm` takes after
/// `gmtime`/`localtime`.
///
/// The caller owns clock acquisition and decomposition; this crate only
/// ingests the result. `weekday`, `day_of_year` and `is_dst` ride along
/// for callers that have them but are not consulted: the date fields are
/// authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrokenDownTime {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    /// May be 60 for a leap second; clamped to 59 on ingestion.
    pub second: u8,
    /// Day of the week, Monday = 0 (informational).
    pub weekday: u8,
    /// Day of the year, 1-based (informational).
    pub day_of_year: u16,
    /// Positive when DST was in effect, zero when not, negative when
    /// unknown (informational).
    pub is_dst: i8,
}

/// An immutable date and clock time, optionally tagged with a zone.
///
/// Composed of a [`Date`] and a [`Time`]; the zone reference lives in
/// the time half. Without a zone the value is *naive*, with one it is
/// *aware*, and the two kinds mix only where the comparison rules below
/// allow.
#[derive(Debug, Clone)]
pub struct Instant {
    date: Date,
    time: Time,
}

impl Instant {
    /// The earliest representable instant, 0001-01-01 00:00:00, naive.
    pub const MIN: Instant = Instant {
        date: Date::MIN,
        time: Time::MIN,
    };

    /// The latest representable instant,
    /// 9999-12-31 23:59:59.999999, naive.
    pub const MAX: Instant = Instant {
        date: Date::MAX,
        time: Time::MAX,
    };

    /// Creates an instant from individual fields.
    ///
    /// # Errors
    ///
    /// Returns the relevant [`CalendarError`](horae_calendar::CalendarError)
    /// or clock-field error for any out-of-range field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        year: i64,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        microsecond: u32,
        zone: Option<ZoneRef>,
    ) -> Result<Self, DateTimeError> {
        let date = Date::new(year, month, day)?;
        let mut time = Time::new(hour, minute, second, microsecond)?;
        if let Some(zone) = zone {
            time = time.with_zone(zone);
        }
        Ok(Instant { date, time })
    }

    /// Combines a date and a time, adopting the time's zone (if any).
    pub fn combine(date: Date, time: Time) -> Self {
        Instant { date, time }
    }

    /// Builds an instant from a POSIX timestamp the host has already
    /// decomposed into broken-down fields.
    ///
    /// The fractional part of `t` supplies the microseconds (the host's
    /// integer decomposition cannot carry them) and a leap second is
    /// clamped to 59. When a zone is supplied, `parts` must be the UTC
    /// decomposition; the result is converted into the zone via
    /// [`from_utc`]. When none is, `parts` is taken at face value and the
    /// result is naive.
    ///
    /// # Errors
    ///
    /// Returns a field validation error for an out-of-range decomposition
    /// or a conversion error from [`from_utc`].
    pub fn from_timestamp(
        t: f64,
        parts: BrokenDownTime,
        zone: Option<ZoneRef>,
    ) -> Result<Self, DateTimeError> {
        let microsecond = ((t.rem_euclid(1.0) * 1e6) as u32).min(999_999);
        let second = parts.second.min(59);
        let instant = Instant::new(
            parts.year,
            parts.month,
            parts.day,
            parts.hour,
            parts.minute,
            second,
            microsecond,
            zone.clone(),
        )?;
        match zone {
            Some(_) => from_utc(&instant),
            None => Ok(instant),
        }
    }

    /// Returns the date half.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the time half with any zone reference removed.
    pub fn time(&self) -> Time {
        self.time.without_zone()
    }

    /// Returns the time half, zone reference included.
    pub fn timetz(&self) -> Time {
        self.time.clone()
    }

    /// Returns the zone reference, if any.
    pub fn zone(&self) -> Option<&ZoneRef> {
        self.time.zone()
    }

    /// Returns `true` iff this instant carries a zone reference.
    pub fn is_aware(&self) -> bool {
        self.time.is_aware()
    }

    /// Returns the year (1..=9999).
    pub fn year(&self) -> i16 {
        self.date.year()
    }

    /// Returns the month (1..=12).
    pub fn month(&self) -> u8 {
        self.date.month()
    }

    /// Returns the day of the month (1..=31).
    pub fn day(&self) -> u8 {
        self.date.day()
    }

    /// Returns the hour (0..=23).
    pub fn hour(&self) -> u8 {
        self.time.hour()
    }

    /// Returns the minute (0..=59).
    pub fn minute(&self) -> u8 {
        self.time.minute()
    }

    /// Returns the second (0..=59).
    pub fn second(&self) -> u8 {
        self.time.second()
    }

    /// Returns the microsecond (0..=999999).
    pub fn microsecond(&self) -> u32 {
        self.time.microsecond()
    }

    /// Returns the zone's validated UTC offset for this instant, or
    /// `None` when naive or unresolvable.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidOffset`] for a malformed offset.
    pub fn utc_offset(&self) -> Result<Option<Duration>, DateTimeError> {
        match self.zone() {
            None => Ok(None),
            Some(zone) => match zone.offset(Some(self)) {
                None => Ok(None),
                Some(offset) => {
                    validate_offset(offset)?;
                    Ok(Some(offset))
                }
            },
        }
    }

    /// Returns the zone's validated DST offset for this instant, or
    /// `None` when naive or unresolvable.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidOffset`] for a malformed offset.
    pub fn dst(&self) -> Result<Option<Duration>, DateTimeError> {
        match self.zone() {
            None => Ok(None),
            Some(zone) => match zone.dst_offset(Some(self)) {
                None => Ok(None),
                Some(offset) => {
                    validate_offset(offset)?;
                    Ok(Some(offset))
                }
            },
        }
    }

    /// Returns the zone's name for this instant, if any.
    pub fn zone_name(&self) -> Option<String> {
        self.zone().and_then(|z| z.name(Some(self)))
    }

    /// Adds a duration, carrying through every field; the zone is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::YearOverflow`] if the result leaves
    /// years 1..=9999.
    pub fn checked_add(&self, duration: Duration) -> Result<Self, DateTimeError> {
        let t = Normalized::new(
            i64::from(self.date.year()),
            i64::from(self.date.month()),
            i64::from(self.date.day()) + duration.days(),
            i64::from(self.time.hour()),
            i64::from(self.time.minute()),
            i64::from(self.time.second()) + i64::from(duration.seconds()),
            i64::from(self.time.microsecond()) + i64::from(duration.microseconds()),
        );
        if !(MIN_YEAR..=MAX_YEAR).contains(&t.year()) {
            return Err(DateTimeError::YearOverflow { year: t.year() });
        }
        let date = Date::new(t.year(), t.month(), t.day())?;
        let mut time = Time::new(t.hour(), t.minute(), t.second(), t.microsecond())?;
        if let Some(zone) = self.zone() {
            time = time.with_zone(Arc::clone(zone));
        }
        Ok(Instant { date, time })
    }

    /// Subtracts a duration, carrying through every field; the zone is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::YearOverflow`] if the result leaves
    /// years 1..=9999, or a [`SpanError`](horae_span::SpanError) if the
    /// duration cannot be negated.
    pub fn checked_sub(&self, duration: Duration) -> Result<Self, DateTimeError> {
        self.checked_add(duration.checked_neg()?)
    }

    /// Returns the elapsed duration from `other` to `self`.
    ///
    /// Naive/naive and identical-zone pairs subtract fields directly;
    /// two aware values in different zones subtract their UTC readings.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::MixedAwareness`] when exactly one side
    /// has a resolvable offset, or [`DateTimeError::InvalidOffset`] for a
    /// malformed one.
    pub fn since(&self, other: &Instant) -> Result<Duration, DateTimeError> {
        let (my_off, other_off) = if same_zone_ref(self, other) {
            (0, 0)
        } else {
            match (self.offset_minutes()?, other.offset_minutes()?) {
                (Some(a), Some(b)) => (a, b),
                (None, None) => (0, 0),
                _ => return Err(DateTimeError::MixedAwareness),
            }
        };
        let diff = self.epoch_microseconds(my_off) - other.epoch_microseconds(other_off);
        // Instants span under 3.7 million days, so the difference in
        // microseconds fits an i64 with room to spare.
        Ok(Duration::new(0, 0, diff as i64)?)
    }

    /// Compares two instants, failing loudly instead of inventing an
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::MixedAwareness`] when exactly one side
    /// has a resolvable offset, or [`DateTimeError::InvalidOffset`] for a
    /// malformed one.
    pub fn try_cmp(&self, other: &Instant) -> Result<Ordering, DateTimeError> {
        if same_zone_ref(self, other) {
            return Ok(self.field_key().cmp(&other.field_key()));
        }
        match (self.offset_minutes()?, other.offset_minutes()?) {
            (None, None) => Ok(self.field_key().cmp(&other.field_key())),
            (Some(mine), Some(theirs)) => Ok(self
                .epoch_microseconds(mine)
                .cmp(&other.epoch_microseconds(theirs))),
            _ => Err(DateTimeError::MixedAwareness),
        }
    }

    /// Re-expresses this instant in another zone, preserving the moment
    /// in time.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::RequiresAware`] on a naive instant,
    /// [`DateTimeError::MissingOffset`] when the current zone cannot
    /// resolve this instant's offset, or any error from [`from_utc`].
    pub fn as_timezone(&self, zone: ZoneRef) -> Result<Self, DateTimeError> {
        let own = self.zone().ok_or(DateTimeError::RequiresAware)?;
        if Arc::ptr_eq(own, &zone) {
            return Ok(self.clone());
        }
        let offset = self.utc_offset()?.ok_or(DateTimeError::MissingOffset)?;
        let utc = self.checked_sub(offset)?;
        let retagged = Instant {
            date: utc.date,
            time: utc.time.with_zone(zone),
        };
        from_utc(&retagged)
    }

    /// Returns this instant with the year replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`](horae_calendar::CalendarError) if the
    /// combination is invalid.
    pub fn with_year(&self, year: i64) -> Result<Self, DateTimeError> {
        Ok(Instant {
            date: self.date.with_year(year)?,
            time: self.time.clone(),
        })
    }

    /// Returns this instant with the month replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`](horae_calendar::CalendarError) if the
    /// combination is invalid.
    pub fn with_month(&self, month: u8) -> Result<Self, DateTimeError> {
        Ok(Instant {
            date: self.date.with_month(month)?,
            time: self.time.clone(),
        })
    }

    /// Returns this instant with the day replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`](horae_calendar::CalendarError) if the
    /// day is invalid for the month.
    pub fn with_day(&self, day: u8) -> Result<Self, DateTimeError> {
        Ok(Instant {
            date: self.date.with_day(day)?,
            time: self.time.clone(),
        })
    }

    /// Returns this instant with the hour replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidHour`] for an out-of-range hour.
    pub fn with_hour(&self, hour: u8) -> Result<Self, DateTimeError> {
        Ok(Instant {
            date: self.date,
            time: self.time.with_hour(hour)?,
        })
    }

    /// Returns this instant with the minute replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidMinute`] for an out-of-range
    /// minute.
    pub fn with_minute(&self, minute: u8) -> Result<Self, DateTimeError> {
        Ok(Instant {
            date: self.date,
            time: self.time.with_minute(minute)?,
        })
    }

    /// Returns this instant with the second replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidSecond`] for an out-of-range
    /// second.
    pub fn with_second(&self, second: u8) -> Result<Self, DateTimeError> {
        Ok(Instant {
            date: self.date,
            time: self.time.with_second(second)?,
        })
    }

    /// Returns this instant with the microsecond replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidMicrosecond`] for an out-of-range
    /// microsecond.
    pub fn with_microsecond(&self, microsecond: u32) -> Result<Self, DateTimeError> {
        Ok(Instant {
            date: self.date,
            time: self.time.with_microsecond(microsecond)?,
        })
    }

    /// Returns this instant tagged with a zone (fields unchanged, no
    /// conversion).
    pub fn with_zone(&self, zone: ZoneRef) -> Self {
        Instant {
            date: self.date,
            time: self.time.with_zone(zone),
        }
    }

    /// Returns this instant with any zone reference removed.
    pub fn without_zone(&self) -> Self {
        Instant {
            date: self.date,
            time: self.time.without_zone(),
        }
    }

    /// Returns the ISO-8601 representation with `sep` between the date
    /// and time parts: `YYYY-MM-DD<sep>HH:MM:SS[.ffffff][±HH:MM]`.
    pub fn iso_format(&self, sep: char) -> String {
        let mut s = format!(
            "{}{}{}",
            self.date.iso_format(),
            sep,
            format_clock(self.hour(), self.minute(), self.second(), self.microsecond()),
        );
        if let Ok(Some(offset)) = self.utc_offset() {
            let minutes = validate_offset(offset).expect("utc_offset already validated");
            s.push_str(&format_offset(minutes, ":"));
        }
        s
    }

    /// Returns a ctime-style string, e.g. `Sat Mar 25 14:30:00 2023`.
    pub fn ctime(&self) -> String {
        ctime_string(
            self.date.weekday(),
            self.month(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
            i64::from(self.year()),
        )
    }

    /// Substitutes `%f`, `%z` and `%Z` in a strftime-style pattern with
    /// this instant's values, leaving the rest for a host formatter.
    pub fn expand_format(&self, pattern: &str) -> String {
        expand_format(
            pattern,
            self.microsecond(),
            self.relaxed_offset_minutes(),
            self.zone_name().as_deref(),
        )
    }

    /// Returns the POSIX timestamp of the fields read as UTC.
    ///
    /// Lossy beyond float precision; exact consumers use [`since`]
    /// against a reference instant instead.
    ///
    /// [`since`]: Instant::since
    pub fn timestamp(&self) -> f64 {
        Normalized::new(
            i64::from(self.year()),
            i64::from(self.month()),
            i64::from(self.day()),
            i64::from(self.hour()),
            i64::from(self.minute()),
            i64::from(self.second()),
            i64::from(self.microsecond()),
        )
        .timestamp()
    }

    /// Microseconds since the ordinal epoch, shifted to UTC.
    fn epoch_microseconds(&self, offset_minutes: i64) -> i128 {
        let seconds = i128::from(self.hour()) * 3600
            + (i128::from(self.minute()) - i128::from(offset_minutes)) * 60
            + i128::from(self.second());
        i128::from(self.date.to_ordinal()) * 86_400_000_000
            + seconds * 1_000_000
            + i128::from(self.microsecond())
    }

    fn field_key(&self) -> (Date, (u8, u8, u8, u32)) {
        (self.date, self.time.field_tuple())
    }

    fn offset_minutes(&self) -> Result<Option<i64>, DateTimeError> {
        match self.utc_offset()? {
            None => Ok(None),
            Some(offset) => Ok(Some(validate_offset(offset)?)),
        }
    }

    /// Offset in minutes for the infallible trait impls: a malformed
    /// offset degrades to unresolvable rather than panicking.
    fn relaxed_offset_minutes(&self) -> Option<i64> {
        let offset = self.zone()?.offset(Some(self))?;
        validate_offset(offset).ok()
    }
}

fn same_zone_ref(a: &Instant, b: &Instant) -> bool {
    same_zone(&a.time.zone().cloned(), &b.time.zone().cloned())
}

impl PartialEq for Instant {
    /// Total equality: a naive and an aware instant are unequal, never an
    /// error. Aware instants in different zones compare equal when they
    /// name the same UTC reading.
    fn eq(&self, other: &Self) -> bool {
        if same_zone_ref(self, other) {
            return self.field_key() == other.field_key();
        }
        match (self.relaxed_offset_minutes(), other.relaxed_offset_minutes()) {
            (None, None) => self.field_key() == other.field_key(),
            (Some(mine), Some(theirs)) => {
                self.epoch_microseconds(mine) == other.epoch_microseconds(theirs)
            }
            _ => false,
        }
    }
}

impl Eq for Instant {}

impl PartialOrd for Instant {
    /// `None` when ordering naive against aware; use
    /// [`try_cmp`](Instant::try_cmp) to surface the error instead.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Hash for Instant {
    /// Hashes the offset-adjusted UTC reading so equal aware instants in
    /// different zones hash equal.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let offset = self.relaxed_offset_minutes().unwrap_or(0);
        self.epoch_microseconds(offset).hash(state);
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_format(' '))
    }
}
