//! Ordinal ↔ (year, month, day) conversion.
//!
//! Ordinals count days with 0001-01-01 = 1, the proleptic Gregorian
//! convention of Dershowitz and Reingold's "Calendrical Calculations".

use crate::error::CalendarError;
use crate::gregorian::{
    DAYS_BEFORE_MONTH, DAYS_IN_MONTH, days_before_month, days_before_year, days_in_month,
};

/// Smallest supported year for range-checked date values.
pub const MIN_YEAR: i64 = 1;

/// Largest supported year for range-checked date values.
pub const MAX_YEAR: i64 = 9999;

/// Number of days in a 400-year cycle (the leap pattern's full period).
pub const DAYS_PER_400Y: i64 = 146_097;

/// Number of days in a 100-year cycle.
pub const DAYS_PER_100Y: i64 = 36_524;

/// Number of days in a 4-year cycle.
pub const DAYS_PER_4Y: i64 = 1_461;

/// Ordinal of 0001-01-01, the smallest range-checked ordinal.
pub const MIN_ORDINAL: i64 = 1;

/// Ordinal of 9999-12-31, the largest range-checked ordinal.
pub const MAX_ORDINAL: i64 = 3_652_059;

/// Converts a (year, month, day) triple to its proleptic Gregorian ordinal.
///
/// The year is not range-checked; any `i64` year is accepted so that
/// intermediate arithmetic on wildly out-of-range values stays exact.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12 and
/// [`CalendarError::InvalidDay`] if `day` is not valid for the month.
pub fn ymd_to_ordinal(year: i64, month: u8, day: u8) -> Result<i64, CalendarError> {
    let max_day = days_in_month(year, month)?;
    if !(1..=max_day).contains(&day) {
        return Err(CalendarError::InvalidDay {
            day,
            month,
            max_day,
        });
    }
    let before_month = days_before_month(year, month).expect("month already validated");
    Ok(days_before_year(year) + i64::from(before_month) + i64::from(day))
}

/// Converts a proleptic Gregorian ordinal back to (year, month, day).
///
/// This is the exact inverse of [`ymd_to_ordinal`] for every ordinal; the
/// calendar extends indefinitely, so non-positive ordinals name dates at
/// or before year zero.
pub fn ordinal_to_ymd(ordinal: i64) -> (i64, u8, u8) {
    // Shift to a 0-based count so 400-year boundaries land on multiples
    // of DAYS_PER_400Y, then peel cycles from largest to smallest.
    let mut n = ordinal - 1;

    let n400 = n.div_euclid(DAYS_PER_400Y);
    n = n.rem_euclid(DAYS_PER_400Y);
    let mut year = n400 * 400 + 1;

    // A count of 4 here means the target day is December 31 closing a
    // 400-year (or 4-year) cycle rather than opening the next one.
    let n100 = n / DAYS_PER_100Y;
    n %= DAYS_PER_100Y;

    let n4 = n / DAYS_PER_4Y;
    n %= DAYS_PER_4Y;

    let n1 = n / 365;
    n %= 365;

    year += n100 * 100 + n4 * 4 + n1;
    if n1 == 4 || n100 == 4 {
        debug_assert_eq!(n, 0);
        return (year - 1, 12, 31);
    }

    // The estimate is exact or one month too large; correct downward.
    let leap = n1 == 3 && (n4 != 24 || n100 == 3);
    let mut month = ((n + 50) >> 5) as u8;
    let mut preceding =
        i64::from(DAYS_BEFORE_MONTH[month as usize]) + i64::from(month > 2 && leap);
    if preceding > n {
        month -= 1;
        preceding -= i64::from(DAYS_IN_MONTH[month as usize]) + i64::from(month == 2 && leap);
    }
    n -= preceding;

    (year, month, n as u8 + 1)
}
