//! Field normalization: the single path all date/time arithmetic flows
//! through.
//!
//! Carries overflowed sub-fields upward (microsecond → second → minute →
//! hour → day, then month → year) using euclidean carries so negative
//! inputs borrow correctly, then repairs the day against the month
//! length. Day repairs of exactly one step are handled in place; anything
//! larger falls back to exact ordinal arithmetic.

use horae_calendar::{days_in_month, ordinal_to_ymd, ymd_to_ordinal};
use tracing::trace;

/// Ordinal of 1970-01-01, the POSIX epoch.
pub(crate) const EPOCH_ORDINAL: i64 = 719_163;

/// A normalized (year, month, day, hour, minute, second, microsecond)
/// tuple with a cached ordinal.
///
/// Construction cannot fail; the year is *not* range-checked here, so
/// callers enforcing the 1..=9999 bound check [`year`](Self::year) after
/// normalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    year: i64,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    microsecond: u32,
    ordinal: Option<i64>,
}

impl Normalized {
    /// Normalizes an arbitrary field tuple.
    ///
    /// Each field may be any distance out of range; carries are folded
    /// upward field by field and the day is repaired last, via exact
    /// ordinal arithmetic when it is more than one step out of range.
    pub fn new(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        microsecond: i64,
    ) -> Self {
        let (mut year, mut month, mut day) = (year, month, day);
        let (mut hour, mut minute, mut second, mut microsecond) =
            (hour, minute, second, microsecond);

        if !(0..=999_999).contains(&microsecond) {
            second += microsecond.div_euclid(1_000_000);
            microsecond = microsecond.rem_euclid(1_000_000);
        }
        if !(0..=59).contains(&second) {
            minute += second.div_euclid(60);
            second = second.rem_euclid(60);
        }
        if !(0..=59).contains(&minute) {
            hour += minute.div_euclid(60);
            minute = minute.rem_euclid(60);
        }
        if !(0..=23).contains(&hour) {
            day += hour.div_euclid(24);
            hour = hour.rem_euclid(24);
        }

        // The proper day range depends on the (not yet settled) month and
        // year, so the month has to come first. Twelve months to a year.
        if !(1..=12).contains(&month) {
            year += (month - 1).div_euclid(12);
            month = (month - 1).rem_euclid(12) + 1;
        }

        let mut ordinal = None;
        let dim = i64::from(
            days_in_month(year, month as u8).expect("month normalized to 1..=12"),
        );
        if !(1..=dim).contains(&day) {
            // Offsets from zone adjustments are at most one day, so a
            // single-step borrow or roll handles them without touching
            // ordinals.
            if day == 0 {
                month -= 1;
                if month > 0 {
                    day = i64::from(
                        days_in_month(year, month as u8).expect("month stays in 1..=12"),
                    );
                } else {
                    year -= 1;
                    month = 12;
                    day = 31;
                }
            } else if day == dim + 1 {
                month += 1;
                day = 1;
                if month > 12 {
                    month = 1;
                    year += 1;
                }
            } else {
                let ord = ymd_to_ordinal(year, month as u8, 1)
                    .expect("month normalized to 1..=12")
                    + (day - 1);
                trace!(year, month, day, ord, "day overflow routed through ordinal");
                let (y, m, d) = ordinal_to_ymd(ord);
                year = y;
                month = i64::from(m);
                day = i64::from(d);
                ordinal = Some(ord);
            }
        }

        Normalized {
            year,
            month: month as u8,
            day: day as u8,
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
            microsecond: microsecond as u32,
            ordinal,
        }
    }

    /// Returns the normalized year (possibly outside 1..=9999).
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Returns the normalized month (1..=12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the normalized day, valid for the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the normalized hour (0..=23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the normalized minute (0..=59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the normalized second (0..=59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Returns the normalized microsecond (0..=999999).
    pub fn microsecond(&self) -> u32 {
        self.microsecond
    }

    /// Returns the proleptic Gregorian ordinal of the date part, reusing
    /// the value cached by the ordinal fallback when one exists.
    pub fn ordinal(&self) -> i64 {
        match self.ordinal {
            Some(ord) => ord,
            None => ymd_to_ordinal(self.year, self.month, self.day)
                .expect("normalized fields form a valid date"),
        }
    }

    /// Returns the POSIX timestamp of the tuple interpreted as UTC.
    ///
    /// Lossy beyond float precision; exact consumers work from the
    /// ordinal and field values directly.
    pub fn timestamp(&self) -> f64 {
        let days = self.ordinal() - EPOCH_ORDINAL;
        let seconds = (days * 24 + i64::from(self.hour)) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second);
        seconds as f64 + f64::from(self.microsecond) / 1e6
    }
}
