//! Persian (Solar Hijri, Jalali) calendar conversion
//!
//! The Persian year starts at Nowruz, the March equinox. This module uses
//! the arithmetical form of the calendar: a 33-year sub-cycle holding eight
//! leap years at fixed positions. Months 1-6 have 31 days, months 7-11 have
//! 30 days and Esfand (month 12) has 29 days, or 30 in a leap year.
//!
//! ## Accuracy
//!
//! The 33-year arithmetic agrees with the astronomical calendar for the
//! Solar Hijri centuries in civil use. It is extended proleptically in both
//! directions, including year 0 and negative years.

use crate::gregorian::iso_weekday;
use crate::math::{floor_div, floor_mod, saturate_u32};

/// JDN of Persian 1/01/01 (622-03-21 proleptic Gregorian).
pub const PERSIAN_EPOCH: i64 = 1_948_320;

/// Positions of the leap years inside each 33-year sub-cycle.
pub const PERSIAN_LEAP_YEARS: [i64; 8] = [1, 5, 9, 13, 17, 22, 26, 30];

const CYCLE_YEARS: i64 = 33;
const CYCLE_DAYS: i64 = 12_053;

/// Number of leap years in `1..=n`.
const fn leap_years_through(n: i64) -> i64 {
    floor_div(8 * n + 29, CYCLE_YEARS)
}

/// Days from the epoch to the first day of year `years + 1`.
const fn days_in_years(years: i64) -> i64 {
    365 * years + leap_years_through(years)
}

/// Days before the first day of `month`.
const fn days_before_month(month: u32) -> i64 {
    if month <= 7 {
        (month as i64 - 1) * 31
    } else {
        (month as i64 - 1) * 30 + 6
    }
}

/// Convert a Persian date to a Julian Day Number.
///
/// No validation is done; out-of-range months and days extrapolate.
pub const fn persian_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    PERSIAN_EPOCH - 1 + days_in_years(year as i64 - 1) + days_before_month(month) + day as i64
}

/// Convert a Julian Day Number to a Persian date.
///
/// # Returns
/// A tuple of (year, month, day)
pub const fn jdn_to_persian(jdn: i64) -> (i32, u32, u32) {
    let days = jdn - PERSIAN_EPOCH;
    let cycle = floor_div(days, CYCLE_DAYS);
    let rem = floor_mod(days, CYCLE_DAYS);

    // Year within the sub-cycle, 0..=32
    let k = (CYCLE_YEARS * rem + 3) / CYCLE_DAYS;
    let year = CYCLE_YEARS * cycle + k + 1;
    let doy = rem - days_in_years(k) + 1;

    let month = if doy <= 186 {
        (doy + 30) / 31
    } else {
        (doy + 23) / 30
    };
    let day = doy - days_before_month(month as u32);

    (year as i32, month as u32, day as u32)
}

/// Whether a Persian year has 366 days.
pub const fn is_persian_leap_year(year: i32) -> bool {
    let position = floor_mod(year as i64 - 1, CYCLE_YEARS) + 1;
    let mut i = 0;
    while i < PERSIAN_LEAP_YEARS.len() {
        if PERSIAN_LEAP_YEARS[i] == position {
            return true;
        }
        i += 1;
    }
    false
}

/// The first leap year after `year`, or `None` past `i32::MAX`.
pub const fn next_persian_leap_year(year: i32) -> Option<i32> {
    let mut candidate = year;
    loop {
        candidate = match candidate.checked_add(1) {
            Some(next) => next,
            None => return None,
        };
        if is_persian_leap_year(candidate) {
            return Some(candidate);
        }
    }
}

/// The last leap year before `year`, or `None` past `i32::MIN`.
pub const fn previous_persian_leap_year(year: i32) -> Option<i32> {
    let mut candidate = year;
    loop {
        candidate = match candidate.checked_sub(1) {
            Some(previous) => previous,
            None => return None,
        };
        if is_persian_leap_year(candidate) {
            return Some(candidate);
        }
    }
}

/// Leap years in `start..=end`, in order.
pub fn persian_leap_years_in_range(start: i32, end: i32) -> impl Iterator<Item = i32> {
    (start..=end).filter(|&year| is_persian_leap_year(year))
}

/// Number of days in a Persian month; 0 for a month outside 1-12.
pub const fn persian_month_length(year: i32, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_persian_leap_year(year) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Number of days in a Persian year.
pub const fn persian_year_length(year: i32) -> u32 {
    if is_persian_leap_year(year) {
        366
    } else {
        365
    }
}

/// 1-based ordinal of a day within its Persian year.
///
/// Months outside 1-12 extrapolate; an ordinal before the first of
/// Farvardin saturates to 0.
pub const fn persian_day_of_year(month: u32, day: u32) -> u32 {
    saturate_u32(days_before_month(month) + day as i64)
}

/// Day of week of a Persian date, Saturday=1 .. Friday=7.
pub const fn persian_day_of_week(year: i32, month: u32, day: u32) -> u32 {
    let iso = iso_weekday(persian_to_jdn(year, month, day));
    match (iso + 2) % 7 {
        0 => 7,
        n => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_table_matches_day_counts() {
        for year in -200..1500 {
            let span = persian_to_jdn(year + 1, 1, 1) - persian_to_jdn(year, 1, 1);
            assert_eq!(span, persian_year_length(year) as i64, "year {}", year);
        }
    }

    #[test]
    fn test_day_of_year_offsets() {
        assert_eq!(days_before_month(7), 186);
        assert_eq!(days_before_month(8), 216);
        assert_eq!(days_before_month(12), 336);
        assert_eq!(persian_day_of_year(12, 30), 366);
    }

    #[test]
    fn test_epoch() {
        assert_eq!(persian_to_jdn(1, 1, 1), PERSIAN_EPOCH);
        assert_eq!(jdn_to_persian(PERSIAN_EPOCH), (1, 1, 1));
        assert_eq!(jdn_to_persian(PERSIAN_EPOCH - 1), (0, 12, 29));
    }
}
