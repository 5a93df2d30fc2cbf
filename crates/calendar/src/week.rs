//! Weekday numbering and the ISO week-1 anchor.
//!
//! 0001-01-01 (ordinal 1) is a Monday, which fixes both numbering schemes.

use crate::gregorian::days_before_year;

/// Returns the day of the week for an ordinal, with Monday = 0 .. Sunday = 6.
pub fn weekday(ordinal: i64) -> u8 {
    (ordinal + 6).rem_euclid(7) as u8
}

/// Returns the ISO day of the week for an ordinal, with Monday = 1 .. Sunday = 7.
pub fn iso_weekday(ordinal: i64) -> u8 {
    let wd = ordinal.rem_euclid(7) as u8;
    if wd == 0 { 7 } else { wd }
}

/// Returns the ordinal of the Monday starting ISO week 1 of `year`.
///
/// ISO week 1 is the Monday-to-Sunday week containing the year's first
/// Thursday. If January 1 falls after a Thursday, the week holding it
/// belongs to the previous ISO year and week 1 starts seven days later.
pub fn iso_week1_monday(year: i64) -> i64 {
    const THURSDAY: u8 = 3;
    let first_ordinal = days_before_year(year) + 1;
    let first_weekday = weekday(first_ordinal);
    let mut week1_monday = first_ordinal - i64::from(first_weekday);
    if first_weekday > THURSDAY {
        week1_monday += 7;
    }
    week1_monday
}
