//! Calendar marker types.
//!
//! A [`Calendar`] is a zero-sized type that ties a [`Date`](crate::Date) to
//! one of the conversion engines. Dates in different calendars are
//! different types, so mixing them up is a compile error, and
//! `date.to::<Hijri>()` converts through the Julian Day Number.

use std::fmt::{self, Debug};
use std::hash::Hash;

use crate::{gregorian, hijri, persian};

/// Runtime tag for the supported calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarType {
    Persian,
    Hijri,
    Gregorian,
}

impl CalendarType {
    pub fn english_name(self) -> &'static str {
        match self {
            CalendarType::Persian => "Persian",
            CalendarType::Hijri => "Hijri",
            CalendarType::Gregorian => "Gregorian",
        }
    }

    pub fn persian_name(self) -> &'static str {
        match self {
            CalendarType::Persian => "شمسی",
            CalendarType::Hijri => "قمری",
            CalendarType::Gregorian => "میلادی",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CalendarType::Persian => "Solar Hijri calendar, the official calendar of Iran",
            CalendarType::Hijri => "Tabular Islamic lunar calendar",
            CalendarType::Gregorian => "Proleptic Gregorian calendar",
        }
    }

    pub fn is_solar(self) -> bool {
        !self.is_lunar()
    }

    pub fn is_lunar(self) -> bool {
        self == CalendarType::Hijri
    }
}

impl fmt::Display for CalendarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.persian_name())
    }
}

/// A calendar system that maps `(year, month, day)` to and from a Julian
/// Day Number.
///
/// Implementations must be exact inverses: `from_jdn(to_jdn(y, m, d))`
/// returns `(y, m, d)` for every valid date.
pub trait Calendar: Copy + Debug + Eq + Ord + Hash + Send + Sync + 'static {
    const KIND: CalendarType;

    fn to_jdn(year: i32, month: u32, day: u32) -> i64;

    fn from_jdn(jdn: i64) -> (i32, u32, u32);

    fn is_leap_year(year: i32) -> bool;

    /// Days in `month`; 0 when the month is outside 1-12.
    fn month_length(year: i32, month: u32) -> u32;

    fn year_length(year: i32) -> u32;

    fn day_of_year(year: i32, month: u32, day: u32) -> u32;
}

/// Persian (Solar Hijri) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Persian;

/// Tabular Islamic calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hijri;

/// Proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Gregorian;

impl Calendar for Persian {
    const KIND: CalendarType = CalendarType::Persian;

    #[inline]
    fn to_jdn(year: i32, month: u32, day: u32) -> i64 {
        persian::persian_to_jdn(year, month, day)
    }

    #[inline]
    fn from_jdn(jdn: i64) -> (i32, u32, u32) {
        persian::jdn_to_persian(jdn)
    }

    fn is_leap_year(year: i32) -> bool {
        persian::is_persian_leap_year(year)
    }

    fn month_length(year: i32, month: u32) -> u32 {
        persian::persian_month_length(year, month)
    }

    fn year_length(year: i32) -> u32 {
        persian::persian_year_length(year)
    }

    fn day_of_year(_year: i32, month: u32, day: u32) -> u32 {
        persian::persian_day_of_year(month, day)
    }
}

impl Calendar for Hijri {
    const KIND: CalendarType = CalendarType::Hijri;

    #[inline]
    fn to_jdn(year: i32, month: u32, day: u32) -> i64 {
        hijri::hijri_to_jdn(year, month, day)
    }

    #[inline]
    fn from_jdn(jdn: i64) -> (i32, u32, u32) {
        hijri::jdn_to_hijri(jdn)
    }

    fn is_leap_year(year: i32) -> bool {
        hijri::is_hijri_leap_year(year)
    }

    fn month_length(year: i32, month: u32) -> u32 {
        hijri::hijri_month_length(year, month)
    }

    fn year_length(year: i32) -> u32 {
        hijri::hijri_year_length(year)
    }

    fn day_of_year(_year: i32, month: u32, day: u32) -> u32 {
        hijri::hijri_day_of_year(month, day)
    }
}

impl Calendar for Gregorian {
    const KIND: CalendarType = CalendarType::Gregorian;

    #[inline]
    fn to_jdn(year: i32, month: u32, day: u32) -> i64 {
        gregorian::gregorian_to_jdn(year, month, day)
    }

    #[inline]
    fn from_jdn(jdn: i64) -> (i32, u32, u32) {
        gregorian::jdn_to_gregorian(jdn)
    }

    fn is_leap_year(year: i32) -> bool {
        gregorian::is_gregorian_leap_year(year)
    }

    fn month_length(year: i32, month: u32) -> u32 {
        gregorian::gregorian_month_length(year, month)
    }

    fn year_length(year: i32) -> u32 {
        gregorian::gregorian_year_length(year)
    }

    fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
        gregorian::gregorian_day_of_year(year, month, day)
    }
}
