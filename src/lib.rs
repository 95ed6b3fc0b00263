//! Human-readable formatting for byte counts.
//!
//! The crate turns a raw byte count into a string such as `"1.5 MiB"` or
//! `"2 KB"`. Unit selection, rounding, the number pattern and the unit
//! vocabulary are all configurable through [`ByteSizeFormatter`]; the
//! [`ByteSize`] wrapper carries the count itself and offers checked
//! conversions from the built-in numeric types.
//!
//! ```
//! use humanbytes::{ByteSizeFormatter, Convention, Rounding, Unit};
//!
//! assert_eq!(ByteSizeFormatter::default().format(1024)?, "1 KB");
//!
//! let formatter = ByteSizeFormatter::builder()
//!     .convention(Convention::Binary)
//!     .decimal_places(1)
//!     .rounding(Rounding::Down)
//!     .max_unit(Unit::Megabyte)
//!     .build()?;
//! assert_eq!(formatter.format(1536)?, "1.5 KiB");
//! # Ok::<(), humanbytes::Error>(())
//! ```

pub mod byte_size;
pub mod convention;
pub mod error;
pub mod formatter;
pub mod locale;
pub mod pattern;
pub mod rounding;
pub mod unit;

pub use byte_size::ByteSize;
pub use convention::Convention;
pub use error::Error;
pub use formatter::{ByteSizeFormatter, FormatterBuilder};
pub use locale::Locale;
pub use pattern::NumberPattern;
pub use rounding::Rounding;
pub use unit::Unit;
