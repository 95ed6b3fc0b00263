use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest supported number of decimal places.
///
/// Keeps `size * 10^decimal_places` inside `u128` for every non-negative
/// `i64` size, so [`Rounding::divide`] never overflows.
pub const MAX_DECIMAL_PLACES: u32 = 18;

/// Rounding rules for the displayed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    /// Round to the closest value; exact halves go to the even neighbor.
    Closest,
    /// Round toward zero.
    Down,
    /// Round toward positive infinity.
    Up,
}

impl Rounding {
    pub const ALL: [Rounding; 3] = [Rounding::Closest, Rounding::Down, Rounding::Up];

    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "closest" => Some(Rounding::Closest),
            "down" => Some(Rounding::Down),
            "up" => Some(Rounding::Up),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rounding::Closest => "closest",
            Rounding::Down => "down",
            Rounding::Up => "up",
        }
    }

    /// Divides `size` by `multiple` and rounds to `decimal_places`
    /// fractional digits, returning the quotient scaled by
    /// `10^decimal_places`.
    ///
    /// The arithmetic is exact: no binary floating point is involved at any
    /// step. Callers must keep `decimal_places <= MAX_DECIMAL_PLACES` and
    /// `multiple > 0`.
    pub(crate) fn divide(self, size: u64, multiple: u64, decimal_places: u32) -> u128 {
        let scaled = u128::from(size) * 10u128.pow(decimal_places);
        let multiple = u128::from(multiple);
        let quotient = scaled / multiple;
        let remainder = scaled % multiple;

        match self {
            Rounding::Down => quotient,
            Rounding::Up => {
                if remainder > 0 {
                    quotient + 1
                } else {
                    quotient
                }
            }
            Rounding::Closest => {
                let twice = remainder * 2;
                if twice > multiple || (twice == multiple && quotient % 2 == 1) {
                    quotient + 1
                } else {
                    quotient
                }
            }
        }
    }
}

impl FromStr for Rounding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rounding::from_name(s).ok_or_else(|| format!("Unknown rounding rule '{s}'"))
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_quotients_are_untouched_by_every_rule() {
        for rule in Rounding::ALL {
            assert_eq!(rule.divide(2048, 1024, 0), 2);
            assert_eq!(rule.divide(1536, 1024, 1), 15);
            assert_eq!(rule.divide(0, 1024, 2), 0);
        }
    }

    #[test]
    fn down_truncates_toward_zero() {
        // 2047 / 1024 = 1.999...
        assert_eq!(Rounding::Down.divide(2047, 1024, 0), 1);
        assert_eq!(Rounding::Down.divide(2047, 1024, 1), 19);
        assert_eq!(Rounding::Down.divide(2047, 1024, 3), 1999);
    }

    #[test]
    fn up_carries_any_remainder() {
        // 1025 / 1024 = 1.0009...
        assert_eq!(Rounding::Up.divide(1025, 1024, 0), 2);
        assert_eq!(Rounding::Up.divide(1025, 1024, 1), 11);
        assert_eq!(Rounding::Up.divide(1025, 1024, 3), 1001);
    }

    #[test]
    fn closest_rounds_to_nearest() {
        // 1433 / 1024 = 1.3994...
        assert_eq!(Rounding::Closest.divide(1433, 1024, 0), 1);
        assert_eq!(Rounding::Closest.divide(1433, 1024, 1), 14);
        // 1945 / 1024 = 1.8994...
        assert_eq!(Rounding::Closest.divide(1945, 1024, 0), 2);
    }

    #[test]
    fn closest_ties_go_to_the_even_quotient() {
        // 2.5 rounds down to 2, 3.5 rounds up to 4.
        assert_eq!(Rounding::Closest.divide(2560, 1024, 0), 2);
        assert_eq!(Rounding::Closest.divide(3584, 1024, 0), 4);
        // 0.5 rounds to 0, 1.5 rounds to 2.
        assert_eq!(Rounding::Closest.divide(512, 1024, 0), 0);
        assert_eq!(Rounding::Closest.divide(1536, 1024, 0), 2);
        // Same ties one decimal place deeper: 1.25 -> 1.2, 1.75 -> 1.8.
        assert_eq!(Rounding::Closest.divide(1280, 1024, 1), 12);
        assert_eq!(Rounding::Closest.divide(1792, 1024, 1), 18);
    }

    #[test]
    fn widest_inputs_stay_exact() {
        let size = i64::MAX as u64;
        let down = Rounding::Down.divide(size, 1, MAX_DECIMAL_PLACES);
        assert_eq!(down, u128::from(size) * 10u128.pow(MAX_DECIMAL_PLACES));
        assert_eq!(Rounding::Up.divide(size, 1 << 60, 0), 8);
    }

    #[test]
    fn names_round_trip() {
        for rule in Rounding::ALL {
            assert_eq!(Rounding::from_name(rule.as_str()), Some(rule));
        }
        assert_eq!("UP".parse::<Rounding>(), Ok(Rounding::Up));
        assert_eq!(Rounding::from_name("nearest"), None);
    }
}
