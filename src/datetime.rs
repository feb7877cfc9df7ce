//! Dates with a time of day.
//!
//! [`DateTime<C>`] pairs a [`Date<C>`] with a [`TimeOfDay`] at whole-second
//! precision. It carries no time zone: the value is wall-clock time, and
//! converting it to another calendar keeps the time as it is.
//!
//! ```
//! use taqvim::{PersianDate, PersianDateTime};
//!
//! let start = PersianDate::new(1403, 12, 30).unwrap().and_hms(23, 30, 0).unwrap();
//! let later = start.plus_hours(1).unwrap();
//! assert_eq!(later.to_string(), "1404/01/01 00:30:00");
//! assert_eq!(later - start, 3600);
//!
//! let parsed: PersianDateTime = "۱۴۰۴/۰۱/۰۱ ۰۰:۳۰".parse().unwrap();
//! assert_eq!(parsed, later);
//! ```

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cache;
use crate::calendar::{Calendar, Gregorian, Hijri, Persian};
use crate::date::Date;
use crate::error::{DateError, ParseError};
use crate::math::{floor_div, floor_mod};
use crate::numerals::{digit_value, parse_int};
use crate::options::FormatOptions;
use crate::temporal::Weekday;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// A time of day from 00:00:00 to 23:59:59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
    second: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// 23:59:59
    pub const LAST_SECOND: TimeOfDay = TimeOfDay {
        hour: 23,
        minute: 59,
        second: 59,
    };

    /// # Errors
    /// [`DateError::InvalidTime`] when a field is out of range.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, DateError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(DateError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(TimeOfDay {
            hour,
            minute,
            second,
        })
    }

    /// The time `seconds` after midnight.
    pub fn from_second_of_day(seconds: u32) -> Result<Self, DateError> {
        Self::new(seconds / 3600, seconds / 60 % 60, seconds % 60)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Seconds since midnight.
    pub fn second_of_day(&self) -> u32 {
        self.hour * 3600 + self.minute * 60 + self.second
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    /// Reads `HH:mm` or `HH:mm:ss` in any supported digit set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidInput {
            input: s.to_string(),
        };

        let mut values = [0u32; 3];
        let mut count = 0;
        for part in s.trim().split(':') {
            if count == values.len()
                || part.is_empty()
                || !part.chars().all(|ch| digit_value(ch).is_some())
            {
                return Err(invalid());
            }
            values[count] = u32::try_from(parse_int(part)?).unwrap_or(u32::MAX);
            count += 1;
        }
        if count < 2 {
            return Err(invalid());
        }

        let [hour, minute, second] = values;
        Ok(Self::new(hour, minute, second)?)
    }
}

/// A date in calendar `C` with a time of day.
///
/// Ordering is chronological: by date, then by time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime<C: Calendar> {
    date: Date<C>,
    time: TimeOfDay,
}

/// A Persian date with a time of day.
pub type PersianDateTime = DateTime<Persian>;
/// A Hijri date with a time of day.
pub type HijriDateTime = DateTime<Hijri>;
/// A Gregorian date with a time of day.
pub type GregorianDateTime = DateTime<Gregorian>;

impl<C: Calendar> DateTime<C> {
    pub fn new(date: Date<C>, time: TimeOfDay) -> Self {
        DateTime { date, time }
    }

    /// Build from fields, validating each of them.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateError> {
        Ok(Self::new(
            Date::new(year, month, day)?,
            TimeOfDay::new(hour, minute, second)?,
        ))
    }

    /// The date-time `seconds` after 1970-01-01 00:00:00.
    pub fn from_epoch_second(seconds: i64) -> Result<Self, DateError> {
        let date = Date::from_epoch_day(floor_div(seconds, SECONDS_PER_DAY))?;
        let time = TimeOfDay::from_second_of_day(floor_mod(seconds, SECONDS_PER_DAY) as u32)?;
        Ok(Self::new(date, time))
    }

    /// The current local date and time.
    #[cfg(feature = "chrono")]
    pub fn now() -> Self {
        use chrono::{Datelike, Timelike};

        let now = chrono::Local::now().naive_local();
        let jdn = crate::gregorian::gregorian_to_jdn(now.year(), now.month(), now.day());
        let (year, month, day) = C::from_jdn(jdn);
        DateTime {
            date: Date::from_parts(year, month, day),
            time: TimeOfDay {
                hour: now.hour(),
                minute: now.minute(),
                second: now.second().min(59),
            },
        }
    }

    pub fn date(&self) -> Date<C> {
        self.date
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn hour(&self) -> u32 {
        self.time.hour
    }

    pub fn minute(&self) -> u32 {
        self.time.minute
    }

    pub fn second(&self) -> u32 {
        self.time.second
    }

    pub fn day_of_week(&self) -> Weekday {
        self.date.day_of_week()
    }

    /// Seconds since 1970-01-01 00:00:00, reading this value as UTC.
    pub fn epoch_second(&self) -> i64 {
        self.date.epoch_day() * SECONDS_PER_DAY + self.time.second_of_day() as i64
    }

    /// The same moment in calendar `D`.
    pub fn to<D: Calendar>(&self) -> Result<DateTime<D>, DateError> {
        Ok(DateTime::new(self.date.to()?, self.time))
    }

    pub fn to_persian(&self) -> Result<PersianDateTime, DateError> {
        self.to()
    }

    pub fn to_hijri(&self) -> Result<HijriDateTime, DateError> {
        self.to()
    }

    pub fn to_gregorian(&self) -> Result<GregorianDateTime, DateError> {
        self.to()
    }

    pub fn plus_seconds(&self, seconds: i64) -> Result<Self, DateError> {
        Self::from_epoch_second(self.epoch_second().saturating_add(seconds))
    }

    pub fn minus_seconds(&self, seconds: i64) -> Result<Self, DateError> {
        self.plus_seconds(seconds.saturating_neg())
    }

    pub fn plus_minutes(&self, minutes: i64) -> Result<Self, DateError> {
        self.plus_seconds(minutes.saturating_mul(SECONDS_PER_MINUTE))
    }

    pub fn minus_minutes(&self, minutes: i64) -> Result<Self, DateError> {
        self.plus_minutes(minutes.saturating_neg())
    }

    pub fn plus_hours(&self, hours: i64) -> Result<Self, DateError> {
        self.plus_seconds(hours.saturating_mul(SECONDS_PER_HOUR))
    }

    pub fn minus_hours(&self, hours: i64) -> Result<Self, DateError> {
        self.plus_hours(hours.saturating_neg())
    }

    pub fn plus_days(&self, days: i64) -> Result<Self, DateError> {
        Ok(Self::new(self.date.plus_days(days)?, self.time))
    }

    pub fn minus_days(&self, days: i64) -> Result<Self, DateError> {
        Ok(Self::new(self.date.minus_days(days)?, self.time))
    }

    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        Ok(Self::new(self.date.plus_weeks(weeks)?, self.time))
    }

    pub fn minus_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        Ok(Self::new(self.date.minus_weeks(weeks)?, self.time))
    }

    /// Add calendar months, clamping the day as [`Date::plus_months`] does.
    pub fn plus_months(&self, months: i64) -> Result<Self, DateError> {
        Ok(Self::new(self.date.plus_months(months)?, self.time))
    }

    pub fn minus_months(&self, months: i64) -> Result<Self, DateError> {
        Ok(Self::new(self.date.minus_months(months)?, self.time))
    }

    pub fn plus_years(&self, years: i64) -> Result<Self, DateError> {
        Ok(Self::new(self.date.plus_years(years)?, self.time))
    }

    pub fn minus_years(&self, years: i64) -> Result<Self, DateError> {
        Ok(Self::new(self.date.minus_years(years)?, self.time))
    }

    pub fn with_date(&self, date: Date<C>) -> Self {
        Self::new(date, self.time)
    }

    pub fn with_time(&self, time: TimeOfDay) -> Self {
        Self::new(self.date, time)
    }

    pub fn with_hour(&self, hour: u32) -> Result<Self, DateError> {
        Ok(self.with_time(TimeOfDay::new(hour, self.time.minute, self.time.second)?))
    }

    pub fn with_minute(&self, minute: u32) -> Result<Self, DateError> {
        Ok(self.with_time(TimeOfDay::new(self.time.hour, minute, self.time.second)?))
    }

    pub fn with_second(&self, second: u32) -> Result<Self, DateError> {
        Ok(self.with_time(TimeOfDay::new(self.time.hour, self.time.minute, second)?))
    }

    /// Midnight on the same day.
    pub fn start_of_day(&self) -> Self {
        self.with_time(TimeOfDay::MIDNIGHT)
    }

    /// 23:59:59 on the same day.
    pub fn end_of_day(&self) -> Self {
        self.with_time(TimeOfDay::LAST_SECOND)
    }

    /// Signed number of seconds from this value to `other`, which may be in
    /// any calendar.
    pub fn seconds_until<D: Calendar>(&self, other: &DateTime<D>) -> i64 {
        other.epoch_second() - self.epoch_second()
    }

    /// Whether this value falls in `[start, end]`.
    pub fn is_between(&self, start: &Self, end: &Self) -> bool {
        start <= self && self <= end
    }

    /// Render through a pattern such as `"yyyy/MM/dd HH:mm"` with the
    /// default options.
    pub fn format(&self, pattern: &str) -> Result<String, ParseError> {
        self.format_with(pattern, &FormatOptions::default())
    }

    pub fn format_with(&self, pattern: &str, options: &FormatOptions) -> Result<String, ParseError> {
        Ok(cache::get_or_parse(pattern)?.format_date_time(self, options))
    }

    /// Read a date-time laid out as `pattern`.
    pub fn parse_with_pattern(text: &str, pattern: &str) -> Result<Self, ParseError> {
        cache::get_or_parse(pattern)?.parse_date_time(text, &FormatOptions::default())
    }
}

impl<C: Calendar> Date<C> {
    /// This date at `time`.
    pub fn and_time(&self, time: TimeOfDay) -> DateTime<C> {
        DateTime::new(*self, time)
    }

    /// This date at `hour:minute:second`.
    pub fn and_hms(&self, hour: u32, minute: u32, second: u32) -> Result<DateTime<C>, DateError> {
        Ok(self.and_time(TimeOfDay::new(hour, minute, second)?))
    }

    /// Midnight at the start of this date.
    pub fn at_start_of_day(&self) -> DateTime<C> {
        self.and_time(TimeOfDay::MIDNIGHT)
    }
}

impl<C: Calendar> Sub for DateTime<C> {
    type Output = i64;

    /// Seconds from `rhs` to `self`.
    fn sub(self, rhs: Self) -> i64 {
        self.epoch_second() - rhs.epoch_second()
    }
}

impl<C: Calendar> fmt::Display for DateTime<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

impl<C: Calendar> FromStr for DateTime<C> {
    type Err = ParseError;

    /// Reads a date as [`Date`]'s `FromStr` does, whitespace, then
    /// `HH:mm` or `HH:mm:ss`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date, time) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| ParseError::InvalidInput {
                input: s.to_string(),
            })?;
        Ok(Self::new(date.parse()?, time.parse()?))
    }
}

#[cfg(feature = "chrono")]
impl<C: Calendar> TryFrom<chrono::NaiveDateTime> for DateTime<C> {
    type Error = DateError;

    fn try_from(value: chrono::NaiveDateTime) -> Result<Self, Self::Error> {
        use chrono::Timelike;

        let date = Date::try_from(value.date())?;
        let time = TimeOfDay::new(value.hour(), value.minute(), value.second())?;
        Ok(Self::new(date, time))
    }
}

#[cfg(feature = "chrono")]
impl<C: Calendar> DateTime<C> {
    /// The same wall-clock time as a `chrono::NaiveDateTime`.
    pub fn to_naive_date_time(&self) -> Option<chrono::NaiveDateTime> {
        self.date
            .to_naive_date()?
            .and_hms_opt(self.time.hour, self.time.minute, self.time.second)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<C: Calendar> Serialize for DateTime<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: Calendar> Deserialize<'de> for DateTime<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
