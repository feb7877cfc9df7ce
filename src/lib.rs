//! taqvim - Persian, Hijri and Gregorian calendar conversion
//!
//! This crate converts dates between the Persian (Solar Hijri), tabular
//! Hijri and proleptic Gregorian calendars through the Julian Day Number,
//! and builds date and date-time arithmetic, formatting and parsing on top.
//!
//! The free functions in [`persian`], [`hijri`], [`gregorian`] and
//! [`convert`] work on plain `(year, month, day)` tuples and never
//! validate. [`Date`] is the validated value type.
//!
//! ```
//! use taqvim::{persian_to_gregorian, PersianDate, Weekday};
//!
//! assert_eq!(persian_to_gregorian(1403, 1, 1), (2024, 3, 20));
//!
//! let date: PersianDate = "۱۴۰۳/۱۰/۱۵".parse().unwrap();
//! assert_eq!(date.day_of_week(), Weekday::Shanbe);
//! assert_eq!(date.plus_days(1).unwrap().to_string(), "1403/10/16");
//! ```

pub mod ast;
pub mod builtin_patterns;
pub mod calendar;
pub mod convert;
pub mod date;
pub mod datetime;
pub mod error;
pub mod gregorian;
pub mod hijri;
pub mod math;
pub mod numerals;
pub mod options;
pub mod parser;
pub mod persian;
pub mod relative;
pub mod temporal;

mod cache;
mod formatter;
mod locale;
mod scanner;

pub use ast::{DateField, DatePattern, PatternPart};
pub use builtin_patterns::pattern_from_name;
pub use calendar::{Calendar, CalendarType, Gregorian, Hijri, Persian};
pub use convert::{
    add_days_to_gregorian, add_days_to_hijri, add_days_to_persian, days_between_gregorian,
    days_between_hijri, days_between_persian, gregorian_to_hijri, gregorian_to_persian,
    hijri_to_gregorian, hijri_to_persian, persian_to_gregorian, persian_to_hijri,
};
pub use date::{Date, GregorianDate, HijriDate, PersianDate};
pub use datetime::{DateTime, GregorianDateTime, HijriDateTime, PersianDateTime, TimeOfDay};
pub use error::{DateError, ParseError};
pub use gregorian::{gregorian_to_jdn, jdn_to_gregorian};
pub use hijri::{
    hijri_day_of_week, hijri_month_length, hijri_to_jdn, is_hijri_leap_year, jdn_to_hijri,
};
pub use locale::Locale;
pub use options::{Digits, FormatOptions};
pub use persian::{
    is_persian_leap_year, jdn_to_persian, persian_day_of_week, persian_month_length,
    persian_to_jdn,
};
pub use temporal::{GregorianMonth, HijriMonth, PersianMonth, Season, Weekday};

/// Parse a date pattern, using a cache for repeated patterns.
///
/// # Examples
/// ```
/// use taqvim::{parse_pattern, FormatOptions, PersianDate};
///
/// let pattern = parse_pattern("d MMMM yyyy").unwrap();
/// let date = PersianDate::new(1403, 1, 15).unwrap();
/// assert_eq!(pattern.format(&date, &FormatOptions::default()), "15 فروردین 1403");
/// ```
pub fn parse_pattern(pattern: &str) -> Result<DatePattern, ParseError> {
    cache::get_or_parse(pattern)
}

/// Format a date using a pattern string.
///
/// Convenience function that parses the pattern (with caching) and formats
/// the date.
pub fn format<C: Calendar>(
    date: &Date<C>,
    pattern: &str,
    opts: &FormatOptions,
) -> Result<String, ParseError> {
    let parsed = cache::get_or_parse(pattern)?;
    Ok(parsed.format(date, opts))
}

/// Format a date with the default options.
pub fn format_default<C: Calendar>(date: &Date<C>, pattern: &str) -> Result<String, ParseError> {
    format(date, pattern, &FormatOptions::default())
}
