//! Proleptic Gregorian calendar conversion.
//!
//! Uses the Fliegel-Van Flandern integer formulas, valid for every JDN
//! including dates before the 1582 reform (no Julian switch-over).

use crate::math::{floor_div, saturate_u32};

/// JDN of Gregorian 0001-01-01.
pub const GREGORIAN_EPOCH: i64 = 1_721_426;

/// JDN of 1970-01-01, the Unix epoch.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Convert a Gregorian date to a Julian Day Number.
///
/// # Arguments
/// * `year` - Gregorian year (astronomical numbering, year 0 exists)
/// * `month` - Gregorian month (1-12)
/// * `day` - Gregorian day (1-31)
pub const fn gregorian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let a = (14 - month as i64) / 12;
    let y = year as i64 + 4800 - a;
    let m = month as i64 + 12 * a - 3;

    day as i64 + floor_div(153 * m + 2, 5) + 365 * y + floor_div(y, 4) - floor_div(y, 100)
        + floor_div(y, 400)
        - 32045
}

/// Convert a Julian Day Number to a Gregorian date.
///
/// # Returns
/// A tuple of (year, month, day)
pub const fn jdn_to_gregorian(jdn: i64) -> (i32, u32, u32) {
    let a = jdn + 32044;
    let b = floor_div(4 * a + 3, 146_097);
    let c = a - floor_div(146_097 * b, 4);
    let d = floor_div(4 * c + 3, 1461);
    let e = c - floor_div(1461 * d, 4);
    let m = floor_div(5 * e + 2, 153);

    let day = e - floor_div(153 * m + 2, 5) + 1;
    let month = m + 3 - 12 * floor_div(m, 10);
    let year = 100 * b + d - 4800 + floor_div(m, 10);

    (year as i32, month as u32, day as u32)
}

/// Whether a Gregorian year has 366 days.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month; 0 for a month outside 1-12.
pub const fn gregorian_month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in a Gregorian year.
pub const fn gregorian_year_length(year: i32) -> u32 {
    if is_gregorian_leap_year(year) {
        366
    } else {
        365
    }
}

/// 1-based ordinal of a day within its Gregorian year.
///
/// Months outside 1-12 extrapolate; an ordinal before 1 January
/// saturates to 0.
pub const fn gregorian_day_of_year(year: i32, month: u32, day: u32) -> u32 {
    saturate_u32(gregorian_to_jdn(year, month, day) - gregorian_to_jdn(year, 1, 1) + 1)
}

/// ISO weekday of a JDN: Monday=1 .. Sunday=7.
pub const fn iso_weekday(jdn: i64) -> u32 {
    jdn.rem_euclid(7) as u32 + 1
}
