//! Formatting options and configuration.

use crate::locale::Locale;

/// Digit set used for numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Digits {
    /// ASCII 0-9
    #[default]
    Western,
    /// Extended Arabic-Indic digits as written in Persian
    Persian,
}

/// Options for formatting and reading dates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// The digits to write numbers with. Reading accepts every digit set.
    pub digits: Digits,
    /// The locale for month and weekday names.
    pub locale: Locale,
}

impl FormatOptions {
    /// Persian names written with Persian digits.
    pub fn persian() -> Self {
        FormatOptions {
            digits: Digits::Persian,
            locale: Locale::persian(),
        }
    }

    /// English names written with Western digits.
    pub fn english() -> Self {
        FormatOptions {
            digits: Digits::Western,
            locale: Locale::english(),
        }
    }

    pub fn with_digits(mut self, digits: Digits) -> Self {
        self.digits = digits;
        self
    }
}
