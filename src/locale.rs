use std::borrow::Cow;

/// Localized strings and separators consumed by the formatter.
///
/// A locale supplies the three unit strings (the short byte symbol, the
/// singular byte word and the plural byte word) together with the decimal
/// and grouping separators for the number pattern. The formatter never
/// consults any ambient locale state; whatever is needed travels in this
/// value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    byte_symbol: Cow<'static, str>,
    byte_word: Cow<'static, str>,
    bytes_word: Cow<'static, str>,
    decimal_separator: char,
    group_separator: char,
}

impl Locale {
    /// Invariant English strings, the default.
    pub const ENGLISH: Locale = Locale {
        byte_symbol: Cow::Borrowed("B"),
        byte_word: Cow::Borrowed("byte"),
        bytes_word: Cow::Borrowed("bytes"),
        decimal_separator: '.',
        group_separator: ',',
    };

    /// French strings: `"o"`/`"octet"`/`"octets"`, comma decimal separator
    /// and narrow no-break space grouping.
    pub const FRENCH: Locale = Locale {
        byte_symbol: Cow::Borrowed("o"),
        byte_word: Cow::Borrowed("octet"),
        bytes_word: Cow::Borrowed("octets"),
        decimal_separator: ',',
        group_separator: '\u{202f}',
    };

    /// Builds a custom locale with English separators; override them with
    /// [`with_separators`](Locale::with_separators).
    pub fn new(
        byte_symbol: impl Into<String>,
        byte_word: impl Into<String>,
        bytes_word: impl Into<String>,
    ) -> Self {
        Locale {
            byte_symbol: Cow::Owned(byte_symbol.into()),
            byte_word: Cow::Owned(byte_word.into()),
            bytes_word: Cow::Owned(bytes_word.into()),
            decimal_separator: '.',
            group_separator: ',',
        }
    }

    pub fn with_separators(mut self, decimal: char, group: char) -> Self {
        self.decimal_separator = decimal;
        self.group_separator = group;
        self
    }

    pub fn byte_symbol(&self) -> &str {
        &self.byte_symbol
    }

    pub fn byte_word(&self) -> &str {
        &self.byte_word
    }

    pub fn bytes_word(&self) -> &str {
        &self.bytes_word
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ENGLISH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_english() {
        let locale = Locale::default();
        assert_eq!(locale, Locale::ENGLISH);
        assert_eq!(locale.byte_symbol(), "B");
        assert_eq!(locale.bytes_word(), "bytes");
        assert_eq!(locale.decimal_separator(), '.');
    }

    #[test]
    fn custom_locales_carry_their_own_strings() {
        let locale = Locale::new("o", "oktett", "oktetter").with_separators(',', '.');
        assert_eq!(locale.byte_word(), "oktett");
        assert_eq!(locale.group_separator(), '.');
    }
}
