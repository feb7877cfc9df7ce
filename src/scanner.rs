//! Reading dates and times from text through a pattern.
//!
//! Numeric fields accept Western, Persian and Arabic-Indic digits no matter
//! which digit set the options format with. Month and weekday names are
//! matched against both built-in locales so Persian and English text read
//! the same way.

use crate::ast::{DateField, DatePattern, PatternPart};
use crate::calendar::{Calendar, CalendarType};
use crate::date::Date;
use crate::datetime::{DateTime, TimeOfDay};
use crate::error::{DateError, ParseError};
use crate::locale::Locale;
use crate::numerals::digit_value;
use crate::options::FormatOptions;

/// Widest run of digits a variable-width field reads.
const MAX_DIGITS: usize = 9;

/// Two-digit years below this value land in the later century.
const TWO_DIGIT_PIVOT: i64 = 50;

#[derive(Debug, Default)]
struct Fields {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    day_of_year: Option<i64>,
    quarter: Option<i64>,
    weekday: Option<u32>,
    hour: Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
}

/// Read a date and time from `text` laid out exactly as `pattern`.
pub fn scan<C: Calendar>(
    pattern: &DatePattern,
    text: &str,
    opts: &FormatOptions,
) -> Result<DateTime<C>, ParseError> {
    let invalid = || {
        #[cfg(feature = "log")]
        log::debug!("text {:?} does not match the date pattern", text);
        ParseError::InvalidInput {
            input: text.to_string(),
        }
    };

    let locales = [opts.locale.clone(), Locale::persian(), Locale::english()];
    let mut rest = text.trim();
    let mut fields = Fields::default();

    for part in &pattern.parts {
        match part {
            PatternPart::Literal(literal) => {
                rest = rest.strip_prefix(literal.as_str()).ok_or_else(invalid)?;
            }
            PatternPart::Field(field) if field.is_numeric() => {
                let (value, remaining) = read_number(rest, field.fixed_width()).ok_or_else(invalid)?;
                rest = remaining;
                match field {
                    DateField::Year | DateField::Year4 => fields.year = Some(value),
                    DateField::Year2 => fields.year = Some(expand_two_digit_year(C::KIND, value)),
                    DateField::Month | DateField::Month2 => fields.month = Some(value),
                    DateField::Day | DateField::Day2 => fields.day = Some(value),
                    DateField::DayOfYear(_) => fields.day_of_year = Some(value),
                    DateField::Quarter => fields.quarter = Some(value),
                    DateField::Hour | DateField::Hour2 => fields.hour = Some(value),
                    DateField::Minute | DateField::Minute2 => fields.minute = Some(value),
                    DateField::Second | DateField::Second2 => fields.second = Some(value),
                    _ => {}
                }
            }
            PatternPart::Field(DateField::MonthAbbr | DateField::MonthFull) => {
                let (index, remaining) =
                    read_name(rest, &locales, |locale| month_names(locale, C::KIND))
                        .ok_or_else(invalid)?;
                fields.month = Some((index % 12) as i64 + 1);
                rest = remaining;
            }
            PatternPart::Field(_) => {
                let (index, remaining) = read_name(rest, &locales, |locale| {
                    let mut names = locale.day_names_full.to_vec();
                    names.extend_from_slice(&locale.day_names_short);
                    names
                })
                .ok_or_else(invalid)?;
                fields.weekday = Some((index % 7) as u32 + 1);
                rest = remaining;
            }
        }
    }

    if !rest.trim().is_empty() {
        return Err(invalid());
    }

    let date = build_date::<C>(&fields).map_err(|err| match err {
        Some(date_err) => ParseError::Date(date_err),
        None => invalid(),
    })?;

    // A weekday in the text must agree with the date it names
    if let Some(weekday) = fields.weekday {
        if date.day_of_week().number() != weekday {
            return Err(invalid());
        }
    }

    let time = build_time(&fields)?;
    Ok(date.and_time(time))
}

/// Assemble the time of day; missing fields are zero.
fn build_time(fields: &Fields) -> Result<TimeOfDay, DateError> {
    let narrow = |value: Option<i64>| u32::try_from(value.unwrap_or(0)).unwrap_or(u32::MAX);
    TimeOfDay::new(
        narrow(fields.hour),
        narrow(fields.minute),
        narrow(fields.second),
    )
}

/// Assemble the date; `Err(None)` means the text did not carry a year.
fn build_date<C: Calendar>(fields: &Fields) -> Result<Date<C>, Option<DateError>> {
    let year = fields.year.ok_or(None::<DateError>)?;
    let year = i32::try_from(year).map_err(|_| Some(DateError::YearOutOfRange { year }))?;

    if let (Some(doy), None, None) = (fields.day_of_year, fields.month, fields.day) {
        let doy = u32::try_from(doy).unwrap_or(0);
        return Date::from_day_of_year(year, doy).map_err(Some);
    }

    let month = match (fields.month, fields.quarter) {
        (Some(month), _) => month,
        (None, Some(quarter)) => (quarter - 1) * 3 + 1,
        (None, None) => 1,
    };
    let day = fields.day.unwrap_or(1);
    let month = u32::try_from(month).unwrap_or(0);
    let day = u32::try_from(day).unwrap_or(0);
    Date::new(year, month, day).map_err(Some)
}

/// Resolve a two-digit year to the century in current use.
fn expand_two_digit_year(kind: CalendarType, value: i64) -> i64 {
    let (earlier, later) = match kind {
        CalendarType::Persian | CalendarType::Hijri => (1300, 1400),
        CalendarType::Gregorian => (1900, 2000),
    };
    if value < TWO_DIGIT_PIVOT {
        later + value
    } else {
        earlier + value
    }
}

/// Read digits from the front of `text`: exactly `width` of them when
/// given, otherwise as many as are present.
fn read_number(text: &str, width: Option<usize>) -> Option<(i64, &str)> {
    let limit = width.unwrap_or(MAX_DIGITS);
    let mut value: i64 = 0;
    let mut count = 0;
    let mut end = 0;

    for (offset, ch) in text.char_indices() {
        if count == limit {
            break;
        }
        match digit_value(ch) {
            Some(d) => {
                value = value * 10 + d as i64;
                count += 1;
                end = offset + ch.len_utf8();
            }
            None => break,
        }
    }

    let complete = match width {
        Some(w) => count == w,
        None => count > 0,
    };
    complete.then(|| (value, &text[end..]))
}

fn month_names(locale: &Locale, kind: CalendarType) -> Vec<&'static str> {
    let mut names = locale.month_names(kind).to_vec();
    names.extend_from_slice(locale.month_names_short(kind));
    names
}

/// Find the longest name at the front of `text` across `locales`.
/// Returns its index in the name list and the remaining text.
fn read_name<'t, F>(text: &'t str, locales: &[Locale], names_for: F) -> Option<(usize, &'t str)>
where
    F: Fn(&Locale) -> Vec<&'static str>,
{
    let mut best: Option<(usize, usize)> = None;

    for locale in locales {
        for (index, name) in names_for(locale).iter().enumerate() {
            let matches = text
                .get(..name.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name));
            if matches && best.map_or(true, |(_, len)| name.len() > len) {
                best = Some((index, name.len()));
            }
        }
    }

    best.map(|(index, len)| (index, &text[len..]))
}
