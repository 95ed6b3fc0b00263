use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Magnitude units for byte sizes, ordered from [`Unit::Byte`] (rank 0) to
/// [`Unit::Exabyte`] (rank 6).
///
/// The rank doubles as an index into the multiplier and prefix tables of a
/// [`Convention`](crate::Convention) and as an inclusive bound for the
/// formatter's unit window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Byte,
    /// Kilobyte, or kibibyte under the binary convention.
    Kilobyte,
    /// Megabyte, or mebibyte under the binary convention.
    Megabyte,
    /// Gigabyte, or gibibyte under the binary convention.
    Gigabyte,
    /// Terabyte, or tebibyte under the binary convention.
    Terabyte,
    /// Petabyte, or pebibyte under the binary convention.
    Petabyte,
    /// Exabyte, or exbibyte under the binary convention.
    Exabyte,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::Byte,
        Unit::Kilobyte,
        Unit::Megabyte,
        Unit::Gigabyte,
        Unit::Terabyte,
        Unit::Petabyte,
        Unit::Exabyte,
    ];

    /// Ordinal rank, 0 for bytes through 6 for exabytes.
    pub const fn rank(&self) -> usize {
        *self as usize
    }

    pub fn from_rank(rank: usize) -> Option<Self> {
        Unit::ALL.get(rank).copied()
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "byte" => Some(Unit::Byte),
            "kilobyte" => Some(Unit::Kilobyte),
            "megabyte" => Some(Unit::Megabyte),
            "gigabyte" => Some(Unit::Gigabyte),
            "terabyte" => Some(Unit::Terabyte),
            "petabyte" => Some(Unit::Petabyte),
            "exabyte" => Some(Unit::Exabyte),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Byte => "byte",
            Unit::Kilobyte => "kilobyte",
            Unit::Megabyte => "megabyte",
            Unit::Gigabyte => "gigabyte",
            Unit::Terabyte => "terabyte",
            Unit::Petabyte => "petabyte",
            Unit::Exabyte => "exabyte",
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_name(s).ok_or_else(|| format!("Unknown unit '{s}'"))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
