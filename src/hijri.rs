//! Hijri (Islamic) calendar conversion
//!
//! This module implements the tabular Islamic calendar: a 30-year cycle
//! of 10 631 days with 11 leap years. Odd months have 30 days, even months
//! 29, and Dhu al-Hijjah gains a 30th day in leap years.
//!
//! ## Accuracy
//!
//! The tabular calendar is an arithmetical approximation. The religious
//! calendar starts each month on the sighting of the new crescent, so real
//! month starts can differ from these by one or two days. The civil epoch
//! (Friday, 16 July 622 Julian) is used throughout.

use crate::math::{floor_div, floor_mod, saturate_u32};

/// JDN of Hijri 1/01/01 (civil epoch).
pub const HIJRI_EPOCH: i64 = 1_948_440;

/// Positions of the leap years inside each 30-year cycle.
pub const HIJRI_LEAP_YEARS: [i64; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Convert a Hijri date to a Julian Day Number.
///
/// # Arguments
/// * `year` - Hijri year
/// * `month` - Hijri month (1-12)
/// * `day` - Hijri day (1-30)
pub const fn hijri_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;

    // floor((59k + 1) / 2) is ceil(29.5 * k)
    day as i64 + floor_div(59 * (m - 1) + 1, 2) + (y - 1) * 354 + floor_div(3 + 11 * y, 30)
        + HIJRI_EPOCH
        - 1
}

/// Convert a Julian Day Number to a Hijri date using the Kuwaiti algorithm.
///
/// # Returns
/// A tuple of (hijri_year, hijri_month, hijri_day)
pub const fn jdn_to_hijri(jdn: i64) -> (i32, u32, u32) {
    let l = jdn - HIJRI_EPOCH + 10_632;
    let n = floor_div(l - 1, 10_631);
    let l = l - 10_631 * n + 354;

    // Year within the 30-year cycle
    let j = floor_div(10_985 - l, 5316) * floor_div(50 * l, 17_719)
        + floor_div(l, 5670) * floor_div(43 * l, 15_238);
    let l = l - floor_div(30 - j, 15) * floor_div(17_719 * j, 50)
        - floor_div(j, 16) * floor_div(15_238 * j, 43)
        + 29;

    let month = floor_div(24 * l, 709);
    let day = l - floor_div(709 * month, 24);
    let year = 30 * n + j - 30;

    (year as i32, month as u32, day as u32)
}

/// Whether a Hijri year has 355 days.
pub const fn is_hijri_leap_year(year: i32) -> bool {
    floor_mod(11 * year as i64 + 14, 30) < 11
}

/// Number of days in a Hijri month; 0 for a month outside 1-12.
pub const fn hijri_month_length(year: i32, month: u32) -> u32 {
    match month {
        12 if is_hijri_leap_year(year) => 30,
        1..=12 if month % 2 == 1 => 30,
        1..=12 => 29,
        _ => 0,
    }
}

/// Number of days in a Hijri year.
pub const fn hijri_year_length(year: i32) -> u32 {
    if is_hijri_leap_year(year) {
        355
    } else {
        354
    }
}

/// 1-based ordinal of a day within its Hijri year.
///
/// Months outside 1-12 extrapolate; an ordinal before 1 Muharram
/// saturates to 0.
pub const fn hijri_day_of_year(month: u32, day: u32) -> u32 {
    // ceil(29.5 * (month - 1))
    saturate_u32(floor_div(59 * (month as i64 - 1) + 1, 2) + day as i64)
}

/// Day of week of a Hijri date, Saturday=1 .. Friday=7.
pub const fn hijri_day_of_week(year: i32, month: u32, day: u32) -> u32 {
    floor_mod(hijri_to_jdn(year, month, day) + 2, 7) as u32 + 1
}
