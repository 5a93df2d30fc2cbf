//! Clock time of day with an optional zone reference.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use horae_span::Duration;

use crate::error::DateTimeError;
use crate::fmt::{format_clock, format_offset};
use crate::zone::{ZoneRef, validate_offset};

/// An immutable time of day, optionally tagged with a zone reference.
///
/// A value without a zone is *naive*; with one it is *aware*. The zone
/// is a back-reference only: the time never updates or owns the zone
/// object's state. Zone queries from a bare time pass no instant (there
/// is no date for the zone to inspect).
#[derive(Clone)]
pub struct Time {
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
    zone: Option<ZoneRef>,
}

impl Time {
    /// Midnight, naive.
    pub const MIN: Time = Time {
        hour: 0,
        minute: 0,
        second: 0,
        microsecond: 0,
        zone: None,
    };

    /// The last representable microsecond of the day, naive.
    pub const MAX: Time = Time {
        hour: 23,
        minute: 59,
        second: 59,
        microsecond: 999_999,
        zone: None,
    };

    /// Creates a naive time of day.
    ///
    /// # Errors
    ///
    /// Returns an invalid-field error for any out-of-range component.
    pub fn new(hour: u8, minute: u8, second: u8, microsecond: u32) -> Result<Self, DateTimeError> {
        check_clock_fields(hour, minute, second, microsecond)?;
        Ok(Time {
            hour,
            minute,
            second,
            microsecond,
            zone: None,
        })
    }

    /// Returns the hour (0..=23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns the microsecond (0..=999999).
    pub fn microsecond(&self) -> u32 {
        self.microsecond
    }

    /// Returns the zone reference, if any.
    pub fn zone(&self) -> Option<&ZoneRef> {
        self.zone.as_ref()
    }

    /// Returns `true` iff this time carries a zone reference.
    pub fn is_aware(&self) -> bool {
        self.zone.is_some()
    }

    /// Returns this time tagged with a zone (fields unchanged).
    pub fn with_zone(&self, zone: ZoneRef) -> Self {
        let mut t = self.clone();
        t.zone = Some(zone);
        t
    }

    /// Returns this time with any zone reference removed.
    pub fn without_zone(&self) -> Self {
        let mut t = self.clone();
        t.zone = None;
        t
    }

    /// Returns this time with the hour replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidHour`] for an out-of-range hour.
    pub fn with_hour(&self, hour: u8) -> Result<Self, DateTimeError> {
        check_clock_fields(hour, self.minute, self.second, self.microsecond)?;
        let mut t = self.clone();
        t.hour = hour;
        Ok(t)
    }

    /// Returns this time with the minute replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidMinute`] for an out-of-range minute.
    pub fn with_minute(&self, minute: u8) -> Result<Self, DateTimeError> {
        check_clock_fields(self.hour, minute, self.second, self.microsecond)?;
        let mut t = self.clone();
        t.minute = minute;
        Ok(t)
    }

    /// Returns this time with the second replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidSecond`] for an out-of-range second.
    pub fn with_second(&self, second: u8) -> Result<Self, DateTimeError> {
        check_clock_fields(self.hour, self.minute, second, self.microsecond)?;
        let mut t = self.clone();
        t.second = second;
        Ok(t)
    }

    /// Returns this time with the microsecond replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidMicrosecond`] for an out-of-range
    /// microsecond.
    pub fn with_microsecond(&self, microsecond: u32) -> Result<Self, DateTimeError> {
        check_clock_fields(self.hour, self.minute, self.second, microsecond)?;
        let mut t = self.clone();
        t.microsecond = microsecond;
        Ok(t)
    }

    /// Returns the zone's validated UTC offset, or `None` when naive or
    /// when the zone cannot answer.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidOffset`] if the zone supplies an
    /// offset that is not a whole number of minutes under 24 hours.
    pub fn utc_offset(&self) -> Result<Option<Duration>, DateTimeError> {
        match &self.zone {
            None => Ok(None),
            Some(zone) => match zone.offset(None) {
                None => Ok(None),
                Some(offset) => {
                    validate_offset(offset)?;
                    Ok(Some(offset))
                }
            },
        }
    }

    /// Returns the zone's validated DST offset, or `None` when naive or
    /// when the zone cannot answer.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidOffset`] for a malformed offset.
    pub fn dst_offset(&self) -> Result<Option<Duration>, DateTimeError> {
        match &self.zone {
            None => Ok(None),
            Some(zone) => match zone.dst_offset(None) {
                None => Ok(None),
                Some(offset) => {
                    validate_offset(offset)?;
                    Ok(Some(offset))
                }
            },
        }
    }

    /// Returns the zone's name, if any.
    pub fn zone_name(&self) -> Option<String> {
        self.zone.as_ref().and_then(|z| z.name(None))
    }

    /// Returns `true` unless the time reads as exactly midnight after
    /// shifting by its zone offset.
    pub fn is_truthy(&self) -> bool {
        let offset = self.relaxed_offset_minutes().unwrap_or(0);
        self.adjusted_tuple(offset) != (0, 0, 0)
    }

    /// Compares two times, failing loudly instead of inventing an order.
    ///
    /// Times sharing the identical zone reference (or both naive) compare
    /// by raw fields; otherwise both offsets are resolved and the
    /// comparison happens on zone-adjusted minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::MixedAwareness`] when exactly one side has
    /// a resolvable offset, and [`DateTimeError::InvalidOffset`] if a zone
    /// supplies a malformed one.
    pub fn try_cmp(&self, other: &Time) -> Result<Ordering, DateTimeError> {
        if same_zone(&self.zone, &other.zone) {
            return Ok(self.field_tuple().cmp(&other.field_tuple()));
        }
        let my_off = self.offset_minutes()?;
        let other_off = other.offset_minutes()?;
        if my_off == other_off {
            return Ok(self.field_tuple().cmp(&other.field_tuple()));
        }
        match (my_off, other_off) {
            (Some(mine), Some(theirs)) => {
                Ok(self.adjusted_tuple(mine).cmp(&other.adjusted_tuple(theirs)))
            }
            _ => Err(DateTimeError::MixedAwareness),
        }
    }

    /// Returns the ISO-8601 representation,
    /// `HH:MM:SS[.ffffff][±HH:MM]` (offset omitted when naive).
    pub fn iso_format(&self) -> String {
        let mut s = format_clock(self.hour, self.minute, self.second, self.microsecond);
        if let Ok(Some(offset)) = self.utc_offset() {
            let minutes = validate_offset(offset).expect("utc_offset already validated");
            s.push_str(&format_offset(minutes, ":"));
        }
        s
    }

    pub(crate) fn field_tuple(&self) -> (u8, u8, u8, u32) {
        (self.hour, self.minute, self.second, self.microsecond)
    }

    /// Minutes since midnight shifted to UTC, plus the finer fields.
    fn adjusted_tuple(&self, offset_minutes: i64) -> (i64, u8, u32) {
        (
            i64::from(self.hour) * 60 + i64::from(self.minute) - offset_minutes,
            self.second,
            self.microsecond,
        )
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
        let offset = self.zone.as_ref()?.offset(None)?;
        validate_offset(offset).ok()
    }
}

pub(crate) fn check_clock_fields(
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
) -> Result<(), DateTimeError> {
    if hour > 23 {
        return Err(DateTimeError::InvalidHour { hour });
    }
    if minute > 59 {
        return Err(DateTimeError::InvalidMinute { minute });
    }
    if second > 59 {
        return Err(DateTimeError::InvalidSecond { second });
    }
    if microsecond > 999_999 {
        return Err(DateTimeError::InvalidMicrosecond { microsecond });
    }
    Ok(())
}

pub(crate) fn same_zone(a: &Option<ZoneRef>, b: &Option<ZoneRef>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Arc::ptr_eq(a, b),
        _ => false,
    }
}

impl PartialEq for Time {
    /// Total equality: a naive and an aware time are unequal, never an
    /// error. Aware times in different zones compare equal when their
    /// zone-adjusted readings coincide.
    fn eq(&self, other: &Self) -> bool {
        if same_zone(&self.zone, &other.zone) {
            return self.field_tuple() == other.field_tuple();
        }
        let my_off = self.relaxed_offset_minutes();
        let other_off = other.relaxed_offset_minutes();
        if my_off == other_off {
            return self.field_tuple() == other.field_tuple();
        }
        match (my_off, other_off) {
            (Some(mine), Some(theirs)) => {
                self.adjusted_tuple(mine) == other.adjusted_tuple(theirs)
            }
            _ => false,
        }
    }
}

impl Eq for Time {}

impl PartialOrd for Time {
    /// `None` when ordering naive against aware; use
    /// [`try_cmp`](Time::try_cmp) to surface the error instead.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Hash for Time {
    /// Hashes the offset-adjusted reading so equal aware times in
    /// different zones hash equal.
    fn hash<H: Hasher>(&self, state: &mut H) {
        let offset = self.relaxed_offset_minutes().unwrap_or(0);
        self.adjusted_tuple(offset).hash(state);
    }
}

impl fmt::Debug for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Time")
            .field("hour", &self.hour)
            .field("minute", &self.minute)
            .field("second", &self.second)
            .field("microsecond", &self.microsecond)
            .field("zone", &self.zone_name())
            .finish()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::{FixedZone, utc};
    use std::collections::hash_map::DefaultHasher;

    fn fixed(minutes: i64, name: &str) -> ZoneRef {
        Arc::new(FixedZone::new(minutes, name).unwrap())
    }

    fn hash_of(t: &Time) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn new_validates_fields() {
        assert!(Time::new(23, 59, 59, 999_999).is_ok());
        assert_eq!(
            Time::new(24, 0, 0, 0).unwrap_err(),
            DateTimeError::InvalidHour { hour: 24 }
        );
        assert_eq!(
            Time::new(0, 60, 0, 0).unwrap_err(),
            DateTimeError::InvalidMinute { minute: 60 }
        );
        assert_eq!(
            Time::new(0, 0, 60, 0).unwrap_err(),
            DateTimeError::InvalidSecond { second: 60 }
        );
        assert_eq!(
            Time::new(0, 0, 0, 1_000_000).unwrap_err(),
            DateTimeError::InvalidMicrosecond {
                microsecond: 1_000_000
            }
        );
    }

    #[test]
    fn naive_comparison_by_fields() {
        let a = Time::new(10, 30, 0, 0).unwrap();
        let b = Time::new(10, 30, 0, 1).unwrap();
        assert!(a < b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn same_zone_reference_compares_fields() {
        let zone = fixed(-300, "EST");
        let a = Time::new(9, 0, 0, 0).unwrap().with_zone(Arc::clone(&zone));
        let b = Time::new(10, 0, 0, 0).unwrap().with_zone(zone);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn different_zones_compare_adjusted() {
        // 09:00 at -05:00 and 14:00 UTC name the same reading.
        let a = Time::new(9, 0, 0, 0).unwrap().with_zone(fixed(-300, "EST"));
        let b = Time::new(14, 0, 0, 0).unwrap().with_zone(utc());
        assert_eq!(a, b);
        assert_eq!(a.try_cmp(&b).unwrap(), Ordering::Equal);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn naive_aware_equality_is_false_not_an_error() {
        let naive = Time::new(9, 0, 0, 0).unwrap();
        let aware = naive.with_zone(utc());
        assert_ne!(naive, aware);
        assert_ne!(aware, naive);
    }

    #[test]
    fn naive_aware_ordering_fails_both_directions() {
        let naive = Time::new(9, 0, 0, 0).unwrap();
        let aware = Time::new(10, 0, 0, 0).unwrap().with_zone(utc());
        assert_eq!(naive.try_cmp(&aware).unwrap_err(), DateTimeError::MixedAwareness);
        assert_eq!(aware.try_cmp(&naive).unwrap_err(), DateTimeError::MixedAwareness);
        assert!(naive.partial_cmp(&aware).is_none());
        assert!(aware.partial_cmp(&naive).is_none());
    }

    #[test]
    fn malformed_offset_fails_loudly_in_try_cmp() {
        struct Broken;
        impl crate::zone::ZoneProvider for Broken {
            fn name(&self, _: Option<&crate::Instant>) -> Option<String> {
                None
            }
            fn offset(&self, _: Option<&crate::Instant>) -> Option<Duration> {
                Some(Duration::from_seconds(90).unwrap())
            }
            fn dst_offset(&self, _: Option<&crate::Instant>) -> Option<Duration> {
                Some(Duration::ZERO)
            }
        }
        let bad = Time::new(9, 0, 0, 0).unwrap().with_zone(Arc::new(Broken));
        let good = Time::new(9, 0, 0, 0).unwrap().with_zone(utc());
        assert!(matches!(
            bad.try_cmp(&good).unwrap_err(),
            DateTimeError::InvalidOffset { .. }
        ));
        // Infallible equality degrades the broken side to unresolvable.
        assert_ne!(bad, good);
    }

    #[test]
    fn replacements_revalidate() {
        let t = Time::new(10, 30, 15, 250).unwrap();
        assert_eq!(t.with_hour(11).unwrap(), Time::new(11, 30, 15, 250).unwrap());
        assert!(t.with_hour(24).is_err());
        assert!(t.with_minute(60).is_err());
        let aware = t.with_zone(utc());
        assert!(aware.with_second(5).unwrap().is_aware());
    }

    #[test]
    fn zone_queries() {
        let t = Time::new(12, 0, 0, 0).unwrap().with_zone(fixed(-300, "EST"));
        assert_eq!(
            t.utc_offset().unwrap(),
            Some(Duration::from_minutes(-300).unwrap())
        );
        assert_eq!(t.dst_offset().unwrap(), Some(Duration::ZERO));
        assert_eq!(t.zone_name(), Some("EST".to_string()));
        let naive = t.without_zone();
        assert_eq!(naive.utc_offset().unwrap(), None);
        assert_eq!(naive.zone_name(), None);
    }

    #[test]
    fn iso_format_variants() {
        assert_eq!(Time::new(4, 5, 1, 0).unwrap().iso_format(), "04:05:01");
        assert_eq!(
            Time::new(4, 5, 1, 123_456).unwrap().iso_format(),
            "04:05:01.123456"
        );
        assert_eq!(
            Time::new(4, 5, 1, 0)
                .unwrap()
                .with_zone(fixed(-300, "EST"))
                .iso_format(),
            "04:05:01-05:00"
        );
        assert_eq!(
            Time::new(4, 5, 1, 0).unwrap().with_zone(utc()).iso_format(),
            "04:05:01+00:00"
        );
    }

    #[test]
    fn truthiness_shifts_by_offset() {
        assert!(!Time::MIN.is_truthy());
        assert!(Time::new(0, 0, 0, 1).unwrap().is_truthy());
        // 05:00 at +05:00 reads as midnight UTC.
        let t = Time::new(5, 0, 0, 0).unwrap().with_zone(fixed(300, "plus5"));
        assert!(!t.is_truthy());
        assert!(t.with_minute(1).unwrap().is_truthy());
    }

    #[test]
    fn min_max_constants() {
        assert!(Time::MIN < Time::MAX);
        assert_eq!(Time::MIN.iso_format(), "00:00:00");
        assert_eq!(Time::MAX.iso_format(), "23:59:59.999999");
    }
}
