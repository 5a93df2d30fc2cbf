//! # horae
//!
//! Calendar dates, clock times and zone-aware instants with exact
//! microsecond arithmetic over years 1..=9999.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     D[Date] --> I[Instant]
//!     T[Time] --> I
//!     Z["ZoneProvider (capability)"] -.-> T
//!     I -->|"checked_add / since"| N[Normalized]
//!     I -->|"as_timezone"| C["from_utc (two-step)"]
//!     N --> CAL[horae-calendar]
//!     I -->|"± Duration"| S[horae-span]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use horae::{Duration, FixedZone, Instant, utc};
//! use std::sync::Arc;
//!
//! let meeting = Instant::new(2024, 3, 15, 14, 30, 0, 0, Some(utc()))?;
//! let reminder = meeting.checked_sub(Duration::from_minutes(15)?)?;
//! assert_eq!(reminder.to_string(), "2024-03-15 14:15:00+00:00");
//!
//! let eastern = Arc::new(FixedZone::new(-300, "EST")?);
//! let local = meeting.as_timezone(eastern)?;
//! assert_eq!(local.hour(), 9);
//! assert_eq!(local, meeting);
//! # Ok::<(), horae::DateTimeError>(())
//! ```
//!
//! Values are immutable and validated at construction. A value without a
//! zone reference is *naive*, with one *aware*; equality across the two
//! kinds is `false` while ordering and subtraction fail loudly
//! ([`DateTimeError::MixedAwareness`]). Zone behavior is the
//! [`ZoneProvider`] capability; this crate ships only fixed-offset
//! zones and treats `Arc` pointer identity as "the same zone".
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Calendar dates |
//! | `time` | Clock times with optional zone |
//! | `instant` | Combined date-times, timestamp ingestion |
//! | `zone` | The zone capability and fixed zones |
//! | `convert` | UTC → local conversion |
//! | `normalize` | Field normalization behind all arithmetic |
//! | `fmt` | ISO / ctime output, `%f`/`%z`/`%Z` expansion |
//! | `pack` | Fixed-width packed byte layouts |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
mod fmt;
mod instant;
mod normalize;
mod pack;
mod time;
mod zone;

pub use convert::from_utc;
pub use date::Date;
pub use error::DateTimeError;
pub use fmt::{expand_format, format_offset};
pub use instant::{BrokenDownTime, Instant};
pub use normalize::Normalized;
pub use time::Time;
pub use zone::{FixedZone, ZoneProvider, ZoneRef, utc};

pub use horae_calendar::CalendarError;
pub use horae_span::{Duration, SpanError};
