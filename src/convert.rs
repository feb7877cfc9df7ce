//! Conversions between the three calendars.
//!
//! Every conversion takes two hops through the Julian Day Number: the
//! source calendar maps its date to a JDN and the target calendar maps the
//! JDN back to a date. None of these functions validate their input.

use crate::gregorian::{gregorian_to_jdn, jdn_to_gregorian};
use crate::hijri::{hijri_to_jdn, jdn_to_hijri};
use crate::persian::{jdn_to_persian, persian_to_jdn};

/// A `(year, month, day)` triple in some calendar.
pub type Ymd = (i32, u32, u32);

pub const fn persian_to_gregorian(year: i32, month: u32, day: u32) -> Ymd {
    jdn_to_gregorian(persian_to_jdn(year, month, day))
}

pub const fn gregorian_to_persian(year: i32, month: u32, day: u32) -> Ymd {
    jdn_to_persian(gregorian_to_jdn(year, month, day))
}

pub const fn persian_to_hijri(year: i32, month: u32, day: u32) -> Ymd {
    jdn_to_hijri(persian_to_jdn(year, month, day))
}

pub const fn hijri_to_persian(year: i32, month: u32, day: u32) -> Ymd {
    jdn_to_persian(hijri_to_jdn(year, month, day))
}

pub const fn gregorian_to_hijri(year: i32, month: u32, day: u32) -> Ymd {
    jdn_to_hijri(gregorian_to_jdn(year, month, day))
}

pub const fn hijri_to_gregorian(year: i32, month: u32, day: u32) -> Ymd {
    jdn_to_gregorian(hijri_to_jdn(year, month, day))
}

/// Shift a Persian date by `days` (negative moves backwards).
pub const fn add_days_to_persian(date: Ymd, days: i64) -> Ymd {
    jdn_to_persian(persian_to_jdn(date.0, date.1, date.2) + days)
}

/// Signed number of days from `from` to `to`.
pub const fn days_between_persian(from: Ymd, to: Ymd) -> i64 {
    persian_to_jdn(to.0, to.1, to.2) - persian_to_jdn(from.0, from.1, from.2)
}

pub const fn add_days_to_hijri(date: Ymd, days: i64) -> Ymd {
    jdn_to_hijri(hijri_to_jdn(date.0, date.1, date.2) + days)
}

pub const fn days_between_hijri(from: Ymd, to: Ymd) -> i64 {
    hijri_to_jdn(to.0, to.1, to.2) - hijri_to_jdn(from.0, from.1, from.2)
}

pub const fn add_days_to_gregorian(date: Ymd, days: i64) -> Ymd {
    jdn_to_gregorian(gregorian_to_jdn(date.0, date.1, date.2) + days)
}

pub const fn days_between_gregorian(from: Ymd, to: Ymd) -> i64 {
    gregorian_to_jdn(to.0, to.1, to.2) - gregorian_to_jdn(from.0, from.1, from.2)
}
