//! Error types for the horae-span crate.

/// Error type for all fallible operations in the horae-span crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpanError {
    /// Returned when a duration's day count leaves the supported range.
    #[error("duration day count out of range: {days} (must be within ±999999999)")]
    Overflow {
        /// The out-of-range day count the operation would have produced.
        days: i128,
    },

    /// Returned when a duration is floor-divided by zero.
    #[error("cannot divide a duration by zero")]
    DivisionByZero,
}
