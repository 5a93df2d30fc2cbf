//! The `Duration` type and its arithmetic.

use std::fmt;

use crate::error::SpanError;

/// Microseconds per second.
pub const MICROS_PER_SECOND: i128 = 1_000_000;

/// Seconds per day.
pub const SECONDS_PER_DAY: i128 = 86_400;

/// Microseconds per day.
pub const MICROS_PER_DAY: i128 = SECONDS_PER_DAY * MICROS_PER_SECOND;

/// Largest permitted magnitude of the day component.
const MAX_DAYS: i64 = 999_999_999;

/// A signed span of time in canonical `(days, seconds, microseconds)` form.
///
/// The canonical form is unique: `seconds` is always in `0..86400`,
/// `microseconds` in `0..1_000_000`, and the sign lives entirely in
/// `days`. The derived ordering (lexicographic over the three fields)
/// therefore coincides with ordering by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    days: i64,
    seconds: i32,
    microseconds: i32,
}

impl Duration {
    /// The zero-length duration.
    pub const ZERO: Duration = Duration {
        days: 0,
        seconds: 0,
        microseconds: 0,
    };

    /// The most negative representable duration.
    pub const MIN: Duration = Duration {
        days: -MAX_DAYS,
        seconds: 0,
        microseconds: 0,
    };

    /// The most positive representable duration.
    pub const MAX: Duration = Duration {
        days: MAX_DAYS,
        seconds: 86_399,
        microseconds: 999_999,
    };

    /// The smallest nonzero duration (one microsecond).
    pub const RESOLUTION: Duration = Duration {
        days: 0,
        seconds: 0,
        microseconds: 1,
    };

    /// Creates a duration from signed day, second and microsecond counts,
    /// canonicalizing the result.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the canonical day count exceeds
    /// ±999 999 999.
    pub fn new(days: i64, seconds: i64, microseconds: i64) -> Result<Self, SpanError> {
        let total = i128::from(days) * MICROS_PER_DAY
            + i128::from(seconds) * MICROS_PER_SECOND
            + i128::from(microseconds);
        Self::from_total_micros(total)
    }

    /// Creates a duration of whole days.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if `days` exceeds ±999 999 999.
    pub fn from_days(days: i64) -> Result<Self, SpanError> {
        Self::from_total_micros(i128::from(days) * MICROS_PER_DAY)
    }

    /// Creates a duration of whole weeks.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the day count exceeds ±999 999 999.
    pub fn from_weeks(weeks: i64) -> Result<Self, SpanError> {
        Self::from_total_micros(i128::from(weeks) * 7 * MICROS_PER_DAY)
    }

    /// Creates a duration of whole hours.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the day count exceeds ±999 999 999.
    pub fn from_hours(hours: i64) -> Result<Self, SpanError> {
        Self::from_total_micros(i128::from(hours) * 3600 * MICROS_PER_SECOND)
    }

    /// Creates a duration of whole minutes.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the day count exceeds ±999 999 999.
    pub fn from_minutes(minutes: i64) -> Result<Self, SpanError> {
        Self::from_total_micros(i128::from(minutes) * 60 * MICROS_PER_SECOND)
    }

    /// Creates a duration of whole seconds.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the day count exceeds ±999 999 999.
    pub fn from_seconds(seconds: i64) -> Result<Self, SpanError> {
        Self::from_total_micros(i128::from(seconds) * MICROS_PER_SECOND)
    }

    /// Creates a duration of whole microseconds.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the day count exceeds ±999 999 999.
    pub fn from_microseconds(microseconds: i64) -> Result<Self, SpanError> {
        Self::from_total_micros(i128::from(microseconds))
    }

    fn from_total_micros(total: i128) -> Result<Self, SpanError> {
        let days = total.div_euclid(MICROS_PER_DAY);
        let rem = total.rem_euclid(MICROS_PER_DAY);
        if days.unsigned_abs() > MAX_DAYS as u128 {
            return Err(SpanError::Overflow { days });
        }
        Ok(Duration {
            days: days as i64,
            seconds: (rem / MICROS_PER_SECOND) as i32,
            microseconds: (rem % MICROS_PER_SECOND) as i32,
        })
    }

    /// Returns the day component (carries the sign).
    pub fn days(self) -> i64 {
        self.days
    }

    /// Returns the second component (0..86400).
    pub fn seconds(self) -> i32 {
        self.seconds
    }

    /// Returns the microsecond component (0..1_000_000).
    pub fn microseconds(self) -> i32 {
        self.microseconds
    }

    /// Returns `true` iff this duration is exactly zero.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Returns `true` iff this duration is negative.
    pub fn is_negative(self) -> bool {
        self.days < 0
    }

    /// Returns the exact total length in microseconds.
    pub fn total_microseconds(self) -> i128 {
        i128::from(self.days) * MICROS_PER_DAY
            + i128::from(self.seconds) * MICROS_PER_SECOND
            + i128::from(self.microseconds)
    }

    /// Returns the total length in seconds as a float.
    ///
    /// Lossy for magnitudes beyond about 2^53 microseconds; use
    /// [`total_microseconds`](Self::total_microseconds) when exactness
    /// matters.
    pub fn total_seconds_f64(self) -> f64 {
        self.total_microseconds() as f64 / MICROS_PER_SECOND as f64
    }

    /// Adds two durations.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the sum leaves the supported range.
    pub fn checked_add(self, other: Duration) -> Result<Self, SpanError> {
        Self::from_total_micros(self.total_microseconds() + other.total_microseconds())
    }

    /// Subtracts `other` from this duration.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the difference leaves the
    /// supported range.
    pub fn checked_sub(self, other: Duration) -> Result<Self, SpanError> {
        Self::from_total_micros(self.total_microseconds() - other.total_microseconds())
    }

    /// Negates this duration.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] when negation leaves the supported
    /// range (negating `MAX` lands one day past `MIN`).
    pub fn checked_neg(self) -> Result<Self, SpanError> {
        Self::from_total_micros(-self.total_microseconds())
    }

    /// Returns the absolute value of this duration.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] when the negation of a negative
    /// duration leaves the supported range.
    pub fn checked_abs(self) -> Result<Self, SpanError> {
        if self.is_negative() {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Multiplies this duration by an integer scalar.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::Overflow`] if the product leaves the supported
    /// range.
    pub fn checked_mul(self, factor: i64) -> Result<Self, SpanError> {
        let total = self.total_microseconds();
        match total.checked_mul(i128::from(factor)) {
            Some(product) => Self::from_total_micros(product),
            None => Err(SpanError::Overflow {
                days: total.saturating_mul(i128::from(factor)).div_euclid(MICROS_PER_DAY),
            }),
        }
    }

    /// Floor-divides this duration by an integer, over the exact total
    /// microsecond count.
    ///
    /// # Errors
    ///
    /// Returns [`SpanError::DivisionByZero`] if `divisor` is zero.
    pub fn div_floor(self, divisor: i64) -> Result<Self, SpanError> {
        if divisor == 0 {
            return Err(SpanError::DivisionByZero);
        }
        let total = self.total_microseconds();
        let divisor = i128::from(divisor);
        let mut quotient = total / divisor;
        if total % divisor != 0 && (total < 0) != (divisor < 0) {
            quotient -= 1;
        }
        Self::from_total_micros(quotient)
    }
}

impl fmt::Display for Duration {
    /// Formats as `[D day(s), ]H:MM:SS[.ffffff]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.days != 0 {
            let plural = if self.days.abs() != 1 { "s" } else { "" };
            write!(f, "{} day{plural}, ", self.days)?;
        }
        let minutes = self.seconds / 60;
        let (hours, minutes) = (minutes / 60, minutes % 60);
        let seconds = self.seconds % 60;
        write!(f, "{hours}:{minutes:02}:{seconds:02}")?;
        if self.microseconds != 0 {
            write!(f, ".{:06}", self.microseconds)?;
        }
        Ok(())
    }
}
