use crate::byte_size::ByteSize;
use crate::convention::Convention;
use crate::error::Error;
use crate::locale::Locale;
use crate::pattern::NumberPattern;
use crate::rounding::{MAX_DECIMAL_PLACES, Rounding};
use crate::unit::Unit;

/// Converts byte counts into human-readable strings.
///
/// A formatter is an immutable bundle of display choices: the unit
/// [`Convention`], the unit window, the number of decimal places, the
/// rounding rule, the number pattern and the [`Locale`]. Build one through
/// [`ByteSizeFormatter::builder`] and reuse it for any number of
/// [`format`](ByteSizeFormatter::format) calls; formatting is a pure
/// function of the size and this configuration.
///
/// ```
/// use humanbytes::{ByteSizeFormatter, Convention};
///
/// assert_eq!(ByteSizeFormatter::default().format(1024)?, "1 KB");
///
/// let formatter = ByteSizeFormatter::builder()
///     .convention(Convention::Binary)
///     .decimal_places(1)
///     .build()?;
/// assert_eq!(formatter.format(1536)?, "1.5 KiB");
/// # Ok::<(), humanbytes::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteSizeFormatter {
    convention: Convention,
    locale: Locale,
    decimal_places: u32,
    pattern: NumberPattern,
    min_unit: Unit,
    max_unit: Unit,
    rounding: Rounding,
    full_byte_words: bool,
}

impl ByteSizeFormatter {
    pub fn builder() -> FormatterBuilder {
        FormatterBuilder::new()
    }

    /// Copies this configuration back into a builder for modification.
    pub fn to_builder(&self) -> FormatterBuilder {
        FormatterBuilder {
            convention: self.convention,
            locale: self.locale.clone(),
            decimal_places: self.decimal_places,
            number_format: self.pattern.as_str().to_string(),
            min_unit: self.min_unit,
            max_unit: self.max_unit,
            rounding: self.rounding,
            full_byte_words: self.full_byte_words,
        }
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn decimal_places(&self) -> u32 {
        self.decimal_places
    }

    pub fn number_format(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn min_unit(&self) -> Unit {
        self.min_unit
    }

    pub fn max_unit(&self) -> Unit {
        self.max_unit
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    pub fn full_byte_words(&self) -> bool {
        self.full_byte_words
    }

    /// Formats `size` as a human-readable string.
    ///
    /// The unit is the largest one inside the configured window whose
    /// multiplier does not exceed the size, so a size sitting exactly on a
    /// multiplier takes that unit: 1024 bytes under a binary table is
    /// `"1 KB"`, not `"1,024 bytes"`. Fails with [`Error::NegativeSize`]
    /// for negative input.
    pub fn format(&self, size: impl Into<ByteSize>) -> Result<String, Error> {
        let raw = size.into().value();
        if raw < 0 {
            return Err(Error::NegativeSize(raw));
        }
        let size = raw as u64;

        let mut selected = self.min_unit;
        for rank in self.min_unit.rank()..=self.max_unit.rank() {
            let unit = Unit::ALL[rank];
            if size < self.convention.multiple(unit) {
                break;
            }
            selected = unit;
        }

        let multiple = self.convention.multiple(selected);
        let scaled = self.rounding.divide(size, multiple, self.decimal_places);
        let number = self.pattern.render(scaled, self.decimal_places, &self.locale);

        // The plural check looks at the original size, not the rounded
        // display value.
        let mut rendered = number;
        rendered.push(' ');
        if selected == Unit::Byte && self.full_byte_words {
            rendered.push_str(if size == 1 {
                self.locale.byte_word()
            } else {
                self.locale.bytes_word()
            });
        } else {
            rendered.push_str(self.convention.prefix(selected));
            rendered.push_str(self.locale.byte_symbol());
        }
        Ok(rendered)
    }
}

impl Default for ByteSizeFormatter {
    fn default() -> Self {
        ByteSizeFormatter {
            convention: Convention::Customary,
            locale: Locale::ENGLISH,
            decimal_places: 0,
            pattern: NumberPattern::DEFAULT,
            min_unit: Unit::Byte,
            max_unit: Unit::Exabyte,
            rounding: Rounding::Closest,
            full_byte_words: true,
        }
    }
}

/// Builder for [`ByteSizeFormatter`].
///
/// The min/max unit setters keep `min_unit <= max_unit` by dragging the
/// other bound along, so the outcome of setting both depends on the order
/// of the calls. Validation that can fail (the decimal-place cap, the
/// number pattern) happens once in [`build`](FormatterBuilder::build).
#[derive(Debug, Clone)]
pub struct FormatterBuilder {
    convention: Convention,
    locale: Locale,
    decimal_places: u32,
    number_format: String,
    min_unit: Unit,
    max_unit: Unit,
    rounding: Rounding,
    full_byte_words: bool,
}

impl FormatterBuilder {
    pub fn new() -> Self {
        FormatterBuilder {
            convention: Convention::Customary,
            locale: Locale::ENGLISH,
            decimal_places: 0,
            number_format: NumberPattern::DEFAULT.as_str().to_string(),
            min_unit: Unit::Byte,
            max_unit: Unit::Exabyte,
            rounding: Rounding::Closest,
            full_byte_words: true,
        }
    }

    pub fn convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Number of fractional digits kept by the rounding rule. Values above
    /// [`MAX_DECIMAL_PLACES`](crate::rounding::MAX_DECIMAL_PLACES) are
    /// rejected by [`build`](FormatterBuilder::build).
    pub fn decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = places;
        self
    }

    /// Number-format pattern, e.g. `"#,##0.###"` or `"0.00"`. Parsed and
    /// validated by [`build`](FormatterBuilder::build).
    pub fn number_format(mut self, pattern: impl Into<String>) -> Self {
        self.number_format = pattern.into();
        self
    }

    /// Sets the smallest unit, dragging `max_unit` up if it would fall
    /// below.
    pub fn min_unit(mut self, unit: Unit) -> Self {
        self.min_unit = unit;
        if self.max_unit < unit {
            self.max_unit = unit;
        }
        self
    }

    /// Sets the largest unit, dragging `min_unit` down if it would rise
    /// above.
    pub fn max_unit(mut self, unit: Unit) -> Self {
        self.max_unit = unit;
        if self.min_unit > unit {
            self.min_unit = unit;
        }
        self
    }

    pub fn rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Whether sizes that stay in the byte rank use the full byte word
    /// (`"1 byte"`, `"2 bytes"`) instead of the symbol (`"2 B"`).
    pub fn full_byte_words(mut self, enabled: bool) -> Self {
        self.full_byte_words = enabled;
        self
    }

    pub fn build(self) -> Result<ByteSizeFormatter, Error> {
        if self.decimal_places > MAX_DECIMAL_PLACES {
            return Err(Error::TooManyDecimalPlaces(self.decimal_places));
        }
        let pattern = NumberPattern::parse(&self.number_format)?;
        Ok(ByteSizeFormatter {
            convention: self.convention,
            locale: self.locale,
            decimal_places: self.decimal_places,
            pattern,
            min_unit: self.min_unit,
            max_unit: self.max_unit,
            rounding: self.rounding,
            full_byte_words: self.full_byte_words,
        })
    }
}

impl Default for FormatterBuilder {
    fn default() -> Self {
        FormatterBuilder::new()
    }
}
