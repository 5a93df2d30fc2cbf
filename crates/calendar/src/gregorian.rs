//! Leap years and month-length tables for the proleptic Gregorian calendar.

use crate::error::CalendarError;

/// Number of days in each month of a non-leap year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Number of days in a non-leap year preceding the first of each month
/// (index 0 unused, index 1 = January = 0, ..., index 12 = December = 334).
pub const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Returns `true` iff `year` is a leap year.
///
/// The Gregorian rule extended indefinitely in both directions: divisible
/// by 4, except century years not divisible by 400.
pub fn is_leap(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `year` (366 for leap years, else 365).
pub fn days_in_year(year: i64) -> u16 {
    365 + u16::from(is_leap(year))
}

/// Returns the number of days before January 1st of `year`.
///
/// Uses euclidean (floor) division so the count is correct for years
/// at or below zero as well.
pub fn days_before_year(year: i64) -> i64 {
    let y = year - 1;
    y * 365 + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
}

/// Returns the number of days in the given month of the given year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i64, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap(year) {
        return Ok(29);
    }
    Ok(DAYS_IN_MONTH[month as usize])
}

/// Returns the number of days in `year` preceding the first day of `month`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_before_month(year: i64, month: u8) -> Result<u16, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(DAYS_BEFORE_MONTH[month as usize] + u16::from(month > 2 && is_leap(year)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap(2000));
        assert!(!is_leap(1900));
        assert!(is_leap(2024));
        assert!(!is_leap(2023));
        assert!(is_leap(4));
        assert!(!is_leap(100));
        assert!(is_leap(400));
    }

    #[test]
    fn leap_years_nonpositive() {
        // Year 0 is divisible by 400 in the proleptic calendar.
        assert!(is_leap(0));
        assert!(is_leap(-4));
        assert!(!is_leap(-100));
        assert!(is_leap(-400));
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn days_before_year_basics() {
        assert_eq!(days_before_year(1), 0);
        assert_eq!(days_before_year(2), 365);
        // Year 4 is the first leap year, so year 5 starts after 4*365 + 1 days.
        assert_eq!(days_before_year(5), 4 * 365 + 1);
    }

    #[test]
    fn days_before_year_negative() {
        // 400-year cycles tile the negative years exactly.
        assert_eq!(days_before_year(-399), -days_before_year(401));
    }

    #[test]
    fn february_length() {
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    }

    #[test]
    fn month_lengths_non_february() {
        for (month, expected) in [(1, 31), (4, 30), (6, 30), (7, 31), (9, 30), (12, 31)] {
            assert_eq!(days_in_month(2023, month).unwrap(), expected);
        }
    }

    #[test]
    fn days_in_month_invalid() {
        assert_eq!(
            days_in_month(2000, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2000, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn days_before_month_leap_shift() {
        assert_eq!(days_before_month(2023, 3).unwrap(), 59);
        assert_eq!(days_before_month(2024, 3).unwrap(), 60);
        assert_eq!(days_before_month(2024, 2).unwrap(), 31);
    }

    #[test]
    fn table_integrity() {
        for m in 1..12usize {
            assert_eq!(
                DAYS_BEFORE_MONTH[m] + u16::from(DAYS_IN_MONTH[m]),
                DAYS_BEFORE_MONTH[m + 1],
                "DAYS_BEFORE_MONTH mismatch at month {m}"
            );
        }
        let total: u16 = DAYS_IN_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(total, 365);
    }
}
