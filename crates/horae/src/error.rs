//! Error types for the horae core crate.

use horae_calendar::CalendarError;
use horae_span::{Duration, SpanError};

/// Error type for all fallible operations on dates, times and instants.
///
/// Calendar and duration failures from the leaf crates pass through
/// transparently; the remaining variants cover clock-field validation,
/// arithmetic range escapes, naive/aware mixing and the zone-capability
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// A calendar field (year, month, day, ordinal) was rejected.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// A duration operation left the supported range.
    #[error(transparent)]
    Span(#[from] SpanError),

    /// Returned when an hour is outside the valid range 0..=23.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour {
        /// The invalid hour that was provided.
        hour: u8,
    },

    /// Returned when a minute is outside the valid range 0..=59.
    #[error("invalid minute: {minute} (must be 0..=59)")]
    InvalidMinute {
        /// The invalid minute that was provided.
        minute: u8,
    },

    /// Returned when a second is outside the valid range 0..=59.
    #[error("invalid second: {second} (must be 0..=59)")]
    InvalidSecond {
        /// The invalid second that was provided.
        second: u8,
    },

    /// Returned when a microsecond is outside the valid range 0..=999999.
    #[error("invalid microsecond: {microsecond} (must be 0..=999999)")]
    InvalidMicrosecond {
        /// The invalid microsecond that was provided.
        microsecond: u32,
    },

    /// Returned when an arithmetic result's year escapes 1..=9999.
    #[error("arithmetic result year {year} out of range 1..=9999")]
    YearOverflow {
        /// The out-of-range year the operation would have produced.
        year: i64,
    },

    /// Returned when ordering or subtracting a naive value against an
    /// aware one (or vice versa).
    #[error("cannot mix naive and zone-aware values")]
    MixedAwareness,

    /// Returned when a zone supplies an offset that is not a whole number
    /// of minutes with magnitude under one day.
    #[error("invalid zone offset: {offset} (must be a whole number of minutes, under 24 hours)")]
    InvalidOffset {
        /// The malformed offset the zone returned.
        offset: Duration,
    },

    /// Returned when UTC conversion needs an offset the zone cannot
    /// resolve for the initial instant.
    #[error("zone cannot resolve offset and dst offset for this instant")]
    MissingOffset,

    /// Returned when a zone's dst offset becomes unresolvable partway
    /// through UTC conversion.
    #[error("zone gave inconsistent dst results during utc conversion")]
    InconsistentZone,

    /// Returned when a zone conversion is attempted on a naive value.
    #[error("operation requires a zone-aware instant")]
    RequiresAware,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_errors_pass_through() {
        let err: DateTimeError = CalendarError::InvalidMonth { month: 13 }.into();
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn span_errors_pass_through() {
        let err: DateTimeError = SpanError::DivisionByZero.into();
        assert_eq!(err.to_string(), "cannot divide a duration by zero");
    }

    #[test]
    fn field_error_messages() {
        assert_eq!(
            DateTimeError::InvalidHour { hour: 24 }.to_string(),
            "invalid hour: 24 (must be 0..=23)"
        );
        assert_eq!(
            DateTimeError::YearOverflow { year: 10000 }.to_string(),
            "arithmetic result year 10000 out of range 1..=9999"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<DateTimeError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DateTimeError>();
    }
}
