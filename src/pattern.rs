use std::borrow::Cow;

use crate::error::Error;
use crate::locale::Locale;

/// A parsed number-format pattern such as `"#,##0.###"`.
///
/// The pattern language is a small subset of the usual custom numeric
/// patterns: `#` and `0` are digit placeholders, one `.` splits the integer
/// section from the fraction section, and a `,` anywhere in the integer
/// section turns on 3-digit grouping. In the integer section the leftmost
/// `0` forces zero-padding up to its position; in the fraction section the
/// placeholder count caps the digits shown and the last `0` sets how many
/// are always shown. Any other character fails with
/// [`Error::InvalidPattern`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    raw: Cow<'static, str>,
    grouped: bool,
    min_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
}

impl NumberPattern {
    /// The default pattern: grouped, at least one integer digit, up to
    /// three fraction digits.
    pub const DEFAULT: NumberPattern = NumberPattern {
        raw: Cow::Borrowed("#,##0.###"),
        grouped: true,
        min_integer_digits: 1,
        min_fraction_digits: 0,
        max_fraction_digits: 3,
    };

    pub fn parse(pattern: &str) -> Result<Self, Error> {
        if pattern.is_empty() {
            return Err(Error::pattern("pattern is empty"));
        }

        let (integer_section, fraction_section) = match pattern.split_once('.') {
            Some((integer, fraction)) => (integer, fraction),
            None => (pattern, ""),
        };
        if fraction_section.contains('.') {
            return Err(Error::pattern(format!("more than one decimal point in '{pattern}'")));
        }

        let mut grouped = false;
        let mut integer_placeholders = Vec::new();
        for ch in integer_section.chars() {
            match ch {
                ',' => grouped = true,
                '#' | '0' => integer_placeholders.push(ch),
                other => {
                    return Err(Error::pattern(format!(
                        "unsupported character '{other}' in '{pattern}'"
                    )));
                }
            }
        }

        let mut fraction_placeholders = Vec::new();
        for ch in fraction_section.chars() {
            match ch {
                '#' | '0' => fraction_placeholders.push(ch),
                other => {
                    return Err(Error::pattern(format!(
                        "unsupported character '{other}' in '{pattern}'"
                    )));
                }
            }
        }

        if integer_placeholders.is_empty() && fraction_placeholders.is_empty() {
            return Err(Error::pattern(format!("no digit placeholder in '{pattern}'")));
        }

        let min_integer_digits = integer_placeholders
            .iter()
            .position(|&ch| ch == '0')
            .map_or(0, |first_zero| integer_placeholders.len() - first_zero);
        let min_fraction_digits = fraction_placeholders
            .iter()
            .rposition(|&ch| ch == '0')
            .map_or(0, |last_zero| last_zero + 1);

        Ok(NumberPattern {
            raw: Cow::Owned(pattern.to_string()),
            grouped,
            min_integer_digits,
            min_fraction_digits,
            max_fraction_digits: fraction_placeholders.len(),
        })
    }

    /// The pattern string this was parsed from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Renders a non-negative decimal value given as an integer scaled by
    /// `10^scale`.
    ///
    /// When the value carries more fraction digits than the pattern shows,
    /// the excess is rounded half away from zero. Trailing fraction zeros
    /// are trimmed down to the pattern's minimum.
    pub(crate) fn render(&self, scaled: u128, scale: u32, locale: &Locale) -> String {
        let mut scaled = scaled;
        let mut scale = scale;
        if scale > self.max_fraction_digits as u32 {
            let drop = 10u128.pow(scale - self.max_fraction_digits as u32);
            scaled = (scaled + drop / 2) / drop;
            scale = self.max_fraction_digits as u32;
        }

        let pow = 10u128.pow(scale);
        let integer = scaled / pow;
        let fraction = scaled % pow;

        let mut fraction_digits = if scale == 0 {
            String::new()
        } else {
            format!("{fraction:0width$}", width = scale as usize)
        };
        while fraction_digits.len() > self.min_fraction_digits && fraction_digits.ends_with('0') {
            fraction_digits.pop();
        }
        while fraction_digits.len() < self.min_fraction_digits {
            fraction_digits.push('0');
        }

        let mut integer_digits = integer.to_string();
        if integer == 0 && self.min_integer_digits == 0 {
            integer_digits.clear();
        }
        while integer_digits.len() < self.min_integer_digits {
            integer_digits.insert(0, '0');
        }

        let mut rendered = if self.grouped {
            group_by_thousands(&integer_digits, locale.group_separator())
        } else {
            integer_digits
        };
        if !fraction_digits.is_empty() {
            rendered.push(locale.decimal_separator());
            rendered.push_str(&fraction_digits);
        }
        if rendered.is_empty() {
            rendered.push('0');
        }
        rendered
    }
}

fn group_by_thousands(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
