//! Error types for the horae-calendar crate.

/// Error type for all fallible operations in the horae-calendar crate.
///
/// Covers validation failures for year, month, day and ordinal values in
/// the proleptic Gregorian calendar. The year and ordinal variants are
/// only produced by range-checked entry points; the raw conversion
/// functions accept any year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a year is outside the supported range 1..=9999.
    #[error("invalid year: {year} (must be 1..=9999)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i64,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is invalid for the given year and month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when an ordinal is outside the supported date range.
    #[error("ordinal out of range: {ordinal} (must be 1..=3652059)")]
    OrdinalOutOfRange {
        /// The invalid ordinal that was provided.
        ordinal: i64,
    },
}
