//! Usage error types.

use thiserror::Error;

/// A caller-input violation, reported synchronously to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// An index did not address an element of the sequence.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange {
        /// The index that was supplied.
        index: usize,
        /// The length of the sequence.
        len: usize,
    },

    /// A padding fill was not exactly one character long.
    #[error("fill should be exactly one character long but is {len} characters long")]
    InvalidFill {
        /// The number of characters in the supplied fill.
        len: usize,
    },

    /// A range whose minimum exceeds its maximum.
    #[error("inverted bounds: min {min} is greater than max {max}")]
    InvertedBounds {
        /// The requested minimum.
        min: i64,
        /// The requested maximum.
        max: i64,
    },

    /// An integer sum did not fit in its element type.
    #[error("sum overflowed {type_name}")]
    Overflow {
        /// The element type that overflowed.
        type_name: &'static str,
    },
}
