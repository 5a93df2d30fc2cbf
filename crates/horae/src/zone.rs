//! The zone capability and fixed-offset zones.
//!
//! Zone behavior is an abstract capability with three query methods, so
//! any number of concrete zone implementations can be supplied without
//! touching the core. The core never owns or mutates a zone; values hold
//! shared references and treat pointer identity as "the same zone".

use std::sync::Arc;

use horae_span::Duration;

use crate::error::DateTimeError;
use crate::instant::Instant;

/// Capability supplying a zone's name, UTC offset and DST offset.
///
/// `instant` is the value being queried, or `None` when a bare time of
/// day asks (a time carries no date for the zone to inspect). Offsets
/// are durations of whole minutes with magnitude under 24 hours east of
/// UTC (negative west); `offset` includes the DST component that
/// `dst_offset` reports separately. Returning `None` means the query is
/// unanswerable for that value.
///
/// The conversion algorithms assume query methods are referentially
/// transparent: the same instant always gets the same answer. A zone
/// violating that invalidates every invariant built on top; the core
/// performs no detection.
pub trait ZoneProvider: Send + Sync {
    /// Returns the zone's (purely informational) name for the value.
    fn name(&self, instant: Option<&Instant>) -> Option<String>;

    /// Returns the total offset east of UTC for the value.
    fn offset(&self, instant: Option<&Instant>) -> Option<Duration>;

    /// Returns the DST component of the offset (zero when DST is not in
    /// effect).
    fn dst_offset(&self, instant: Option<&Instant>) -> Option<Duration>;
}

/// Shared reference to a zone capability.
pub type ZoneRef = Arc<dyn ZoneProvider>;

/// Validates a zone-supplied offset: whole minutes, magnitude < 1440.
///
/// Returns the offset as signed minutes east of UTC.
pub(crate) fn validate_offset(offset: Duration) -> Result<i64, DateTimeError> {
    let total = offset.total_microseconds();
    if total % 60_000_000 != 0 {
        return Err(DateTimeError::InvalidOffset { offset });
    }
    let minutes = (total / 60_000_000) as i64;
    if minutes.abs() >= 1440 {
        return Err(DateTimeError::InvalidOffset { offset });
    }
    Ok(minutes)
}

/// A zone with a constant offset and no DST, like UTC itself or the
/// fixed military zones.
#[derive(Debug, Clone)]
pub struct FixedZone {
    minutes: i64,
    name: String,
}

impl FixedZone {
    /// Creates a fixed zone from an offset in minutes east of UTC.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::InvalidOffset`] if the magnitude is not
    /// under 24 hours.
    pub fn new(minutes: i64, name: impl Into<String>) -> Result<Self, DateTimeError> {
        if minutes.abs() >= 1440 {
            let offset = Duration::from_minutes(minutes)
                .unwrap_or(if minutes > 0 { Duration::MAX } else { Duration::MIN });
            return Err(DateTimeError::InvalidOffset { offset });
        }
        Ok(FixedZone {
            minutes,
            name: name.into(),
        })
    }

    /// The UTC zone: zero offset, zero DST.
    pub fn utc() -> Self {
        FixedZone {
            minutes: 0,
            name: "UTC".to_string(),
        }
    }

    /// Returns the offset in minutes east of UTC.
    pub fn minutes(&self) -> i64 {
        self.minutes
    }
}

impl ZoneProvider for FixedZone {
    fn name(&self, _instant: Option<&Instant>) -> Option<String> {
        Some(self.name.clone())
    }

    fn offset(&self, _instant: Option<&Instant>) -> Option<Duration> {
        Some(Duration::from_minutes(self.minutes).expect("offset validated at construction"))
    }

    fn dst_offset(&self, _instant: Option<&Instant>) -> Option<Duration> {
        Some(Duration::ZERO)
    }
}

/// Returns a shared reference to the UTC zone.
pub fn utc() -> ZoneRef {
    Arc::new(FixedZone::utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_whole_minutes() {
        assert_eq!(
            validate_offset(Duration::from_minutes(-300).unwrap()).unwrap(),
            -300
        );
        assert_eq!(validate_offset(Duration::ZERO).unwrap(), 0);
        assert_eq!(
            validate_offset(Duration::from_minutes(1439).unwrap()).unwrap(),
            1439
        );
    }

    #[test]
    fn rejects_fractional_minutes() {
        let offset = Duration::from_seconds(90).unwrap();
        assert_eq!(
            validate_offset(offset).unwrap_err(),
            DateTimeError::InvalidOffset { offset }
        );
    }

    #[test]
    fn rejects_full_day_offset() {
        let offset = Duration::from_minutes(1440).unwrap();
        assert_eq!(
            validate_offset(offset).unwrap_err(),
            DateTimeError::InvalidOffset { offset }
        );
        assert!(validate_offset(Duration::from_minutes(-1440).unwrap()).is_err());
    }

    #[test]
    fn fixed_zone_queries() {
        let zone = FixedZone::new(-300, "EST").unwrap();
        assert_eq!(zone.name(None), Some("EST".to_string()));
        assert_eq!(zone.offset(None), Some(Duration::from_minutes(-300).unwrap()));
        assert_eq!(zone.dst_offset(None), Some(Duration::ZERO));
    }

    #[test]
    fn fixed_zone_rejects_out_of_range() {
        assert!(FixedZone::new(1440, "bad").is_err());
        assert!(FixedZone::new(-100_000, "worse").is_err());
    }

    #[test]
    fn utc_zone() {
        let zone = utc();
        assert_eq!(zone.offset(None), Some(Duration::ZERO));
        assert_eq!(zone.name(None), Some("UTC".to_string()));
    }
}
