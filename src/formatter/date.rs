//! Date and time formatting

use crate::ast::{DateField, DatePattern, PatternPart};
use crate::calendar::Calendar;
use crate::date::Date;
use crate::datetime::TimeOfDay;
use crate::formatter::format_number;
use crate::math::floor_mod;
use crate::options::FormatOptions;

/// Format a date and time of day using the given pattern.
pub fn format_date<C: Calendar>(
    pattern: &DatePattern,
    date: &Date<C>,
    time: TimeOfDay,
    opts: &FormatOptions,
) -> String {
    let mut result = String::new();

    for part in &pattern.parts {
        match part {
            PatternPart::Field(field) => {
                result.push_str(&format_date_part(*field, date, time, opts))
            }
            PatternPart::Literal(s) => result.push_str(s),
        }
    }

    result
}

/// Format a single date part.
fn format_date_part<C: Calendar>(
    field: DateField,
    date: &Date<C>,
    time: TimeOfDay,
    opts: &FormatOptions,
) -> String {
    let locale = &opts.locale;
    let number = |value: i64, width: usize| format_number(value, width, opts.digits);
    let month_index = (date.month() - 1) as usize;
    let weekday_index = (date.day_of_week().number() - 1) as usize;

    match field {
        // Year formatting
        DateField::Year => number(date.year() as i64, 1),
        DateField::Year2 => number(floor_mod(date.year() as i64, 100), 2),
        DateField::Year4 => number(date.year() as i64, 4),

        // Month formatting
        DateField::Month => number(date.month() as i64, 1),
        DateField::Month2 => number(date.month() as i64, 2),
        DateField::MonthAbbr => locale.month_names_short(C::KIND)[month_index].to_string(),
        DateField::MonthFull => locale.month_names(C::KIND)[month_index].to_string(),

        // Day formatting
        DateField::Day => number(date.day() as i64, 1),
        DateField::Day2 => number(date.day() as i64, 2),
        DateField::DayOfYear(width) => number(date.day_of_year() as i64, width as usize),

        // Weekday formatting
        DateField::WeekdayShort => locale.day_names_short[weekday_index].to_string(),
        DateField::WeekdayFull => locale.day_names_full[weekday_index].to_string(),

        DateField::Quarter => number(date.quarter() as i64, 1),

        // Time formatting
        DateField::Hour => number(time.hour() as i64, 1),
        DateField::Hour2 => number(time.hour() as i64, 2),
        DateField::Minute => number(time.minute() as i64, 1),
        DateField::Minute2 => number(time.minute() as i64, 2),
        DateField::Second => number(time.second() as i64, 1),
        DateField::Second2 => number(time.second() as i64, 2),
    }
}
