//! # horae-span
//!
//! Canonical signed durations with exact integer arithmetic.
//!
//! A [`Duration`] is a span of time held as `(days, seconds, microseconds)`
//! in a unique canonical form: `seconds` in `0..86400`, `microseconds` in
//! `0..1_000_000`, and the sign carried entirely by `days`. Minus one
//! second is therefore `(-1 days, 86399 s, 0 µs)`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use horae_span::Duration;
//!
//! let d = Duration::new(0, -1, 0).unwrap();
//! assert_eq!((d.days(), d.seconds(), d.microseconds()), (-1, 86_399, 0));
//!
//! let sum = d.checked_add(Duration::from_hours(24).unwrap()).unwrap();
//! assert_eq!(sum, Duration::new(0, 86_399, 0).unwrap());
//! ```
//!
//! All arithmetic is exact integer math over the total microsecond count;
//! repeated operations cannot drift. Day counts beyond ±999 999 999 are
//! rejected with [`SpanError::Overflow`].
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `duration` | The `Duration` type and its arithmetic |
//! | `error` | Error types |

mod duration;
mod error;

pub use duration::{Duration, MICROS_PER_DAY, MICROS_PER_SECOND, SECONDS_PER_DAY};
pub use error::SpanError;
