use thiserror::Error;

use crate::rounding::MAX_DECIMAL_PLACES;

/// Errors reported by the formatting API.
///
/// Every error is raised synchronously at the point of invalid input; a
/// successful [`build`](crate::FormatterBuilder::build) guarantees that
/// [`format`](crate::ByteSizeFormatter::format) can only fail on a negative
/// size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot format a negative byte size ({0})")]
    NegativeSize(i64),

    #[error("invalid number format pattern: {0}")]
    InvalidPattern(String),

    #[error("{0} decimal places exceed the supported maximum of {max}", max = MAX_DECIMAL_PLACES)]
    TooManyDecimalPlaces(u32),

    #[error("value does not fit in a signed 64-bit byte size")]
    Overflow,
}

impl Error {
    pub(crate) fn pattern<S: Into<String>>(msg: S) -> Self {
        Error::InvalidPattern(msg.into())
    }
}
