//! Calendar dates in the proleptic Gregorian calendar, years 1..=9999.

use std::fmt;
use std::ops::Sub;

use horae_calendar::{
    CalendarError, MAX_ORDINAL, MAX_YEAR, MIN_ORDINAL, MIN_YEAR, days_in_month, iso_week1_monday,
    iso_weekday, ordinal_to_ymd, weekday, ymd_to_ordinal,
};
use horae_span::Duration;

use crate::error::DateTimeError;
use crate::fmt::ctime_string;
use crate::normalize::Normalized;

/// An immutable calendar date, validated at construction.
///
/// The derived ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i16,
    month: u8,
    day: u8,
}

impl Date {
    /// The earliest representable date, 0001-01-01.
    pub const MIN: Date = Date {
        year: 1,
        month: 1,
        day: 1,
    };

    /// The latest representable date, 9999-12-31.
    pub const MAX: Date = Date {
        year: 9999,
        month: 12,
        day: 31,
    };

    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside
    /// 1..=9999, [`CalendarError::InvalidMonth`] or
    /// [`CalendarError::InvalidDay`] for the other fields.
    pub fn new(year: i64, month: u8, day: u8) -> Result<Self, DateTimeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::InvalidYear { year }.into());
        }
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            }
            .into());
        }
        Ok(Date {
            year: year as i16,
            month,
            day,
        })
    }

    /// Creates a date from a proleptic Gregorian ordinal (0001-01-01 = 1).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OrdinalOutOfRange`] outside 1..=3652059.
    pub fn from_ordinal(ordinal: i64) -> Result<Self, DateTimeError> {
        if !(MIN_ORDINAL..=MAX_ORDINAL).contains(&ordinal) {
            return Err(CalendarError::OrdinalOutOfRange { ordinal }.into());
        }
        let (year, month, day) = ordinal_to_ymd(ordinal);
        Ok(Date {
            year: year as i16,
            month,
            day,
        })
    }

    /// Returns the year (1..=9999).
    pub fn year(self) -> i16 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the proleptic Gregorian ordinal of this date.
    pub fn to_ordinal(self) -> i64 {
        ymd_to_ordinal(i64::from(self.year), self.month, self.day)
            .expect("constructed dates hold valid fields")
    }

    /// Returns the day of the week, Monday = 0 .. Sunday = 6.
    pub fn weekday(self) -> u8 {
        weekday(self.to_ordinal())
    }

    /// Returns the ISO day of the week, Monday = 1 .. Sunday = 7.
    pub fn iso_weekday(self) -> u8 {
        iso_weekday(self.to_ordinal())
    }

    /// Returns the ISO-8601 (year, week, weekday) triple.
    ///
    /// Week 1 is the Monday-starting week containing the year's first
    /// Thursday, so early-January days can belong to week 52/53 of the
    /// previous ISO year and late-December days to week 1 of the next.
    pub fn iso_calendar(self) -> (i32, u8, u8) {
        let mut year = i64::from(self.year);
        let today = self.to_ordinal();
        let mut week1_monday = iso_week1_monday(year);
        let mut week = (today - week1_monday).div_euclid(7);
        let day = (today - week1_monday).rem_euclid(7);
        if week < 0 {
            year -= 1;
            week1_monday = iso_week1_monday(year);
            week = (today - week1_monday).div_euclid(7);
        } else if week >= 52 && today >= iso_week1_monday(year + 1) {
            year += 1;
            week = 0;
        }
        (year as i32, week as u8 + 1, day as u8 + 1)
    }

    /// Adds the whole-day component of a duration (seconds and
    /// microseconds are ignored for pure dates).
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::YearOverflow`] if the resulting year
    /// leaves 1..=9999.
    pub fn checked_add(self, duration: Duration) -> Result<Self, DateTimeError> {
        let t = Normalized::new(
            i64::from(self.year),
            i64::from(self.month),
            i64::from(self.day) + duration.days(),
            0,
            0,
            0,
            0,
        );
        if !(MIN_YEAR..=MAX_YEAR).contains(&t.year()) {
            return Err(DateTimeError::YearOverflow { year: t.year() });
        }
        Date::new(t.year(), t.month(), t.day())
    }

    /// Subtracts the whole-day component of a duration.
    ///
    /// # Errors
    ///
    /// Returns [`DateTimeError::YearOverflow`] if the resulting year
    /// leaves 1..=9999.
    pub fn checked_sub(self, duration: Duration) -> Result<Self, DateTimeError> {
        let negated = Duration::from_days(-duration.days())
            .expect("negated day count stays within range");
        self.checked_add(negated)
    }

    /// Returns this date with the year replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] if the combination is invalid (for
    /// example moving February 29 to a non-leap year).
    pub fn with_year(self, year: i64) -> Result<Self, DateTimeError> {
        Date::new(year, self.month, self.day)
    }

    /// Returns this date with the month replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] if the combination is invalid.
    pub fn with_month(self, month: u8) -> Result<Self, DateTimeError> {
        Date::new(i64::from(self.year), month, self.day)
    }

    /// Returns this date with the day replaced, re-validated.
    ///
    /// # Errors
    ///
    /// Returns a [`CalendarError`] if the day is invalid for the month.
    pub fn with_day(self, day: u8) -> Result<Self, DateTimeError> {
        Date::new(i64::from(self.year), self.month, day)
    }

    /// Returns the ISO-8601 representation, `YYYY-MM-DD`.
    pub fn iso_format(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// Returns a ctime-style string, e.g. `Mon Jan  1 00:00:00 2024`.
    pub fn ctime(self) -> String {
        ctime_string(
            self.weekday(),
            self.month,
            self.day,
            0,
            0,
            0,
            i64::from(self.year),
        )
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.iso_format())
    }
}

impl Sub for Date {
    type Output = Duration;

    /// Returns the signed whole-day span from `rhs` to `self`.
    fn sub(self, rhs: Date) -> Duration {
        Duration::from_days(self.to_ordinal() - rhs.to_ordinal())
            .expect("date differences are under four million days")
    }
}
