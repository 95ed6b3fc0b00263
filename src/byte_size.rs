use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::formatter::ByteSizeFormatter;

/// A byte count, carried as a signed 64-bit integer.
///
/// `ByteSize` is a transparent wrapper: equality, ordering and hashing all
/// follow the wrapped integer, and serde reads and writes it as a plain
/// number. Lossless integer conversions come through `From`; wider integers
/// go through `TryFrom` and floating-point sources through
/// [`ByteSize::from_f64`], both failing with [`Error::Overflow`] outside
/// the signed 64-bit range.
///
/// The `Display` impl renders through the default
/// [`ByteSizeFormatter`](crate::ByteSizeFormatter) and reports `fmt::Error`
/// for negative values; use [`humanize`](ByteSize::humanize) to see the
/// failure as a crate error instead.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ByteSize(i64);

impl ByteSize {
    pub const fn new(value: i64) -> Self {
        ByteSize(value)
    }

    /// The wrapped byte count.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Converts a float, truncating toward zero.
    ///
    /// Non-finite values and values whose truncation falls outside the
    /// signed 64-bit range fail with [`Error::Overflow`].
    pub fn from_f64(value: f64) -> Result<Self, Error> {
        if !value.is_finite() {
            return Err(Error::Overflow);
        }
        let truncated = value.trunc();
        // `i64::MAX as f64` rounds up to 2^63, so `>=` excludes exactly the
        // out-of-range values while keeping i64::MIN itself.
        if truncated >= i64::MAX as f64 || truncated < i64::MIN as f64 {
            return Err(Error::Overflow);
        }
        Ok(ByteSize(truncated as i64))
    }

    pub fn from_f32(value: f32) -> Result<Self, Error> {
        Self::from_f64(f64::from(value))
    }

    /// Formats this size with the default configuration.
    pub fn humanize(self) -> Result<String, Error> {
        ByteSizeFormatter::default().format(self)
    }

    /// Formats this size with an explicit formatter.
    pub fn humanize_with(self, formatter: &ByteSizeFormatter) -> Result<String, Error> {
        formatter.format(self)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ByteSize {
                fn from(value: $ty) -> Self {
                    ByteSize(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_try_from_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for ByteSize {
                type Error = Error;

                fn try_from(value: $ty) -> Result<Self, Self::Error> {
                    i64::try_from(value).map(ByteSize).map_err(|_| Error::Overflow)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);
impl_try_from_int!(u64, u128, i128, usize, isize);

impl From<ByteSize> for i64 {
    fn from(size: ByteSize) -> Self {
        size.0
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = ByteSizeFormatter::default().format(*self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
