//! # horae-calendar
//!
//! Pure integer math for the proleptic Gregorian calendar.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"ymd_to_ordinal()"| B["ordinal (0001-01-01 = 1)"]
//!     B -->|"ordinal_to_ymd()"| A
//!     B -->|"weekday()"| C["Mon=0 .. Sun=6"]
//!     B -->|"iso_weekday()"| D["Mon=1 .. Sun=7"]
//!     E["year"] -->|"iso_week1_monday()"| B
//!     E -->|"is_leap()"| F["bool"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use horae_calendar::{is_leap, ordinal_to_ymd, ymd_to_ordinal};
//!
//! assert!(is_leap(2000));
//! assert!(!is_leap(1900));
//!
//! let ord = ymd_to_ordinal(2024, 2, 29).unwrap();
//! assert_eq!(ordinal_to_ymd(ord), (2024, 2, 29));
//! ```
//!
//! The two ordinal conversions are exact inverses over the whole ordinal
//! range; the calendar is extended indefinitely in both directions
//! (negative ordinals name dates before 0001-01-01).
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap years and month-length tables |
//! | `ordinal` | Ordinal ↔ (year, month, day) conversion |
//! | `week` | Weekday numbering and ISO week-1 anchor |
//! | `error` | Error types |

mod error;
mod gregorian;
mod ordinal;
mod week;

pub use error::CalendarError;
pub use gregorian::{
    DAYS_BEFORE_MONTH, DAYS_IN_MONTH, days_before_month, days_before_year, days_in_month,
    days_in_year, is_leap,
};
pub use ordinal::{
    DAYS_PER_4Y, DAYS_PER_100Y, DAYS_PER_400Y, MAX_ORDINAL, MAX_YEAR, MIN_ORDINAL, MIN_YEAR,
    ordinal_to_ymd, ymd_to_ordinal,
};
pub use week::{iso_week1_monday, iso_weekday, weekday};
