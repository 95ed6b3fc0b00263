use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::unit::Unit;

const BINARY_MULTIPLES: [u64; 7] =
    [1, 1 << 10, 1 << 20, 1 << 30, 1 << 40, 1 << 50, 1 << 60];

const DECIMAL_MULTIPLES: [u64; 7] = [
    1,
    1_000,
    1_000_000,
    1_000_000_000,
    1_000_000_000_000,
    1_000_000_000_000_000,
    1_000_000_000_000_000_000,
];

const BINARY_PREFIXES: [&str; 7] = ["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei"];
const DECIMAL_PREFIXES: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

/// Unit naming conventions for byte sizes.
///
/// A convention picks the multiplier table (powers of 1024 or powers of
/// 1000) and the prefix table used to label each [`Unit`]. `Customary`
/// deliberately mixes the two: sizes are computed in powers of 1024 but
/// labeled with decimal-style letters, so 1024 bytes formats as `"1 KB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Binary multiples (1024), decimal prefixes (K/M/G...).
    Customary,
    /// Binary multiples (1024), binary prefixes (Ki/Mi/Gi...). Also known
    /// as IEC.
    #[serde(alias = "iec")]
    Binary,
    /// Decimal multiples (1000), decimal prefixes (K/M/G...). Also known
    /// as SI.
    #[serde(alias = "si")]
    Decimal,
}

impl Convention {
    pub const ALL: [Convention; 3] =
        [Convention::Customary, Convention::Binary, Convention::Decimal];

    /// Looks up a convention by name, accepting the alternate spellings
    /// `"iec"` for [`Convention::Binary`] and `"si"` for
    /// [`Convention::Decimal`].
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "customary" => Some(Convention::Customary),
            "binary" | "iec" => Some(Convention::Binary),
            "decimal" | "si" => Some(Convention::Decimal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::Customary => "customary",
            Convention::Binary => "binary",
            Convention::Decimal => "decimal",
        }
    }

    /// Number of bytes in one `unit` under this convention.
    pub fn multiple(&self, unit: Unit) -> u64 {
        self.multiples()[unit.rank()]
    }

    /// Prefix string for `unit` under this convention, empty for bytes.
    pub fn prefix(&self, unit: Unit) -> &'static str {
        self.prefixes()[unit.rank()]
    }

    pub(crate) fn multiples(&self) -> &'static [u64; 7] {
        match self {
            Convention::Customary | Convention::Binary => &BINARY_MULTIPLES,
            Convention::Decimal => &DECIMAL_MULTIPLES,
        }
    }

    fn prefixes(&self) -> &'static [&'static str; 7] {
        match self {
            Convention::Binary => &BINARY_PREFIXES,
            Convention::Customary | Convention::Decimal => &DECIMAL_PREFIXES,
        }
    }
}

impl FromStr for Convention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Convention::from_name(s).ok_or_else(|| format!("Unknown convention '{s}'"))
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
