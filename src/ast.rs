//! AST types for parsed date and time patterns.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::datetime::{DateTime, TimeOfDay};
use crate::error::ParseError;
use crate::options::FormatOptions;

/// A single date component referenced by a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    /// y - year with no padding
    Year,
    /// yy - last two digits of the year
    Year2,
    /// yyyy - year padded to four digits
    Year4,
    /// M - month number
    Month,
    /// MM - month number padded to two digits
    Month2,
    /// MMM - abbreviated month name
    MonthAbbr,
    /// MMMM - full month name
    MonthFull,
    /// d - day of month
    Day,
    /// dd - day of month padded to two digits
    Day2,
    /// E, EE, EEE - abbreviated weekday name
    WeekdayShort,
    /// EEEE - full weekday name
    WeekdayFull,
    /// D, DD, DDD - day of year padded to the run length
    DayOfYear(u8),
    /// Q - quarter of the year
    Quarter,
    /// H - hour of the day, 0-23
    Hour,
    /// HH - hour padded to two digits
    Hour2,
    /// m - minute
    Minute,
    /// mm - minute padded to two digits
    Minute2,
    /// s - second
    Second,
    /// ss - second padded to two digits
    Second2,
}

impl DateField {
    /// Whether this field renders as a number.
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            DateField::MonthAbbr
                | DateField::MonthFull
                | DateField::WeekdayShort
                | DateField::WeekdayFull
        )
    }

    /// Whether this field reads the time of day rather than the date.
    pub fn is_time(&self) -> bool {
        matches!(
            self,
            DateField::Hour
                | DateField::Hour2
                | DateField::Minute
                | DateField::Minute2
                | DateField::Second
                | DateField::Second2
        )
    }

    /// Exact digit count when reading, for zero-padded fields.
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            DateField::Year2
            | DateField::Month2
            | DateField::Day2
            | DateField::Hour2
            | DateField::Minute2
            | DateField::Second2 => Some(2),
            DateField::Year4 => Some(4),
            DateField::DayOfYear(width) if *width > 1 => Some(*width as usize),
            _ => None,
        }
    }
}

/// One piece of a date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    Field(DateField),
    Literal(String),
}

/// A parsed pattern such as `yyyy/MM/dd`, `EEEE d MMMM yyyy` or
/// `yyyy/MM/dd HH:mm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    pub parts: Vec<PatternPart>,
}

impl DatePattern {
    /// Parse a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, ParseError> {
        crate::parser::parse(pattern)
    }

    /// Render `date` through this pattern. Time fields render as midnight.
    pub fn format<C: Calendar>(&self, date: &Date<C>, options: &FormatOptions) -> String {
        crate::formatter::format_date(self, date, TimeOfDay::MIDNIGHT, options)
    }

    /// Render a date and time through this pattern.
    pub fn format_date_time<C: Calendar>(
        &self,
        date_time: &DateTime<C>,
        options: &FormatOptions,
    ) -> String {
        crate::formatter::format_date(self, &date_time.date(), date_time.time(), options)
    }

    /// Read a date from `text` laid out as this pattern.
    ///
    /// Time fields in the pattern must still hold a valid time; the time
    /// itself is dropped.
    pub fn parse_date<C: Calendar>(
        &self,
        text: &str,
        options: &FormatOptions,
    ) -> Result<Date<C>, ParseError> {
        Ok(crate::scanner::scan(self, text, options)?.date())
    }

    /// Read a date and time from `text` laid out as this pattern. Missing
    /// time fields default to zero.
    pub fn parse_date_time<C: Calendar>(
        &self,
        text: &str,
        options: &FormatOptions,
    ) -> Result<DateTime<C>, ParseError> {
        crate::scanner::scan(self, text, options)
    }

    /// The fields this pattern contains, in order.
    pub fn fields(&self) -> impl Iterator<Item = DateField> + '_ {
        self.parts.iter().filter_map(|part| match part {
            PatternPart::Field(field) => Some(*field),
            PatternPart::Literal(_) => None,
        })
    }
}
