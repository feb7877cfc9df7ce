//! Relative phrases such as "دیروز", "3 weeks ago" or "۵ دقیقه پیش".
//!
//! For dates the distance is measured in whole days from `date` to
//! `reference`. Under a week it is spoken in days, under 30 days in weeks,
//! under a year in 30-day months and beyond that in 365-day years, always
//! rounding down. Date-times under a minute apart read as "now", then
//! minutes and hours up to a day; past that they read as their dates.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::datetime::{DateTime, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::locale::Locale;
use crate::numerals::to_persian_digits;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Day,
    Week,
    Month,
    Year,
}

/// Split a non-zero day distance into an amount and its unit.
fn magnitude(days: i64) -> (i64, Unit) {
    let days = days.abs();
    if days < 7 {
        (days, Unit::Day)
    } else if days < 30 {
        (days / 7, Unit::Week)
    } else if days < 365 {
        (days / 30, Unit::Month)
    } else {
        (days / 365, Unit::Year)
    }
}

/// Describe `date` relative to `reference` in the given locale.
///
/// `date` before `reference` reads as the past ("۳ روز پیش"), after it as
/// the future ("in 3 days").
pub fn describe<C: Calendar, D: Calendar>(
    date: &Date<C>,
    reference: &Date<D>,
    locale: &Locale,
) -> String {
    let days = date.days_until(reference);
    if locale.is_persian() {
        describe_persian(days)
    } else {
        describe_english(days)
    }
}

/// Describe `date` relative to today's date.
#[cfg(feature = "chrono")]
pub fn describe_from_today<C: Calendar>(date: &Date<C>, locale: &Locale) -> String {
    describe(date, &Date::<C>::today(), locale)
}

/// Describe `date_time` relative to `reference`, down to the minute.
///
/// Within a minute either way this reads "همین الان" / "just now"; within
/// an hour in minutes, within a day in hours. Further apart, the dates are
/// compared as [`describe`] does.
pub fn describe_date_time<C: Calendar, D: Calendar>(
    date_time: &DateTime<C>,
    reference: &DateTime<D>,
    locale: &Locale,
) -> String {
    let seconds = date_time.seconds_until(reference);
    if seconds.abs() < SECONDS_PER_MINUTE {
        return if locale.is_persian() {
            "همین الان".to_string()
        } else {
            "just now".to_string()
        };
    }

    let minutes = seconds / SECONDS_PER_MINUTE;
    let hours = seconds / SECONDS_PER_HOUR;
    let (amount, persian_unit, english_unit) = if minutes.abs() < 60 {
        (minutes, "دقیقه", "minute")
    } else if hours.abs() < 24 {
        (hours, "ساعت", "hour")
    } else {
        return describe(&date_time.date(), &reference.date(), locale);
    };

    if locale.is_persian() {
        let direction = if amount > 0 { "پیش" } else { "دیگر" };
        let digits = to_persian_digits(&amount.abs().to_string());
        format!("{} {} {}", digits, persian_unit, direction)
    } else {
        let plural = if amount.abs() == 1 { "" } else { "s" };
        if amount > 0 {
            format!("{} {}{} ago", amount, english_unit, plural)
        } else {
            format!("in {} {}{}", -amount, english_unit, plural)
        }
    }
}

/// Describe `date_time` relative to the current local time.
#[cfg(feature = "chrono")]
pub fn describe_date_time_from_now<C: Calendar>(date_time: &DateTime<C>, locale: &Locale) -> String {
    describe_date_time(date_time, &DateTime::<C>::now(), locale)
}

fn describe_persian(days: i64) -> String {
    match days {
        0 => return "امروز".to_string(),
        1 => return "دیروز".to_string(),
        -1 => return "فردا".to_string(),
        2 => return "پریروز".to_string(),
        -2 => return "پس‌فردا".to_string(),
        _ => {}
    }

    let (amount, unit) = magnitude(days);
    let unit = match unit {
        Unit::Day => "روز",
        Unit::Week => "هفته",
        Unit::Month => "ماه",
        Unit::Year => "سال",
    };
    let direction = if days > 0 { "پیش" } else { "دیگر" };
    format!("{} {} {}", to_persian_digits(&amount.to_string()), unit, direction)
}

fn describe_english(days: i64) -> String {
    match days {
        0 => return "today".to_string(),
        1 => return "yesterday".to_string(),
        -1 => return "tomorrow".to_string(),
        _ => {}
    }

    let (amount, unit) = magnitude(days);
    let unit = match unit {
        Unit::Day => "day",
        Unit::Week => "week",
        Unit::Month => "month",
        Unit::Year => "year",
    };
    let plural = if amount == 1 { "" } else { "s" };
    if days > 0 {
        format!("{} {}{} ago", amount, unit, plural)
    } else {
        format!("in {} {}{}", amount, unit, plural)
    }
}

/// Compact Persian form: `۳ر` for three days ago, `+۲ه` for two weeks
/// ahead. The unit letters are ر (day), ه (week), م (month) and س (year).
pub fn describe_short<C: Calendar, D: Calendar>(date: &Date<C>, reference: &Date<D>) -> String {
    let days = date.days_until(reference);
    match days {
        0 => return "امروز".to_string(),
        1 => return "دیروز".to_string(),
        -1 => return "فردا".to_string(),
        _ => {}
    }

    let (amount, unit) = magnitude(days);
    let letter = match unit {
        Unit::Day => 'ر',
        Unit::Week => 'ه',
        Unit::Month => 'م',
        Unit::Year => 'س',
    };
    let sign = if days < 0 { "+" } else { "" };
    format!("{}{}{}", sign, to_persian_digits(&amount.to_string()), letter)
}
