//! Error types for numeral conversion.

use thiserror::Error;

use super::table::{MAX_VALUE, MIN_VALUE};

/// Errors that can occur when converting to or from Roman numerals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// The number has no Roman numeral representation.
    ///
    /// Only numbers from 1 to 3999 can be written with the standard symbols.
    #[error("{0} is out of range: Roman numerals cover {MIN_VALUE} to {MAX_VALUE}")]
    OutOfRange(i64),

    /// The text could not be reduced to a number using the conversion table.
    ///
    /// Holds the text exactly as the caller passed it.
    #[error("'{0}' is not a valid Roman numeral")]
    InvalidNumeral(String),
}
