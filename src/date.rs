//! Validated calendar dates.
//!
//! [`Date<C>`] is a `(year, month, day)` triple that is known to exist in
//! calendar `C`. Construction validates the fields; every other operation
//! either preserves validity or returns a [`DateError`].
//!
//! ```
//! use taqvim::{GregorianDate, PersianDate};
//!
//! let nowruz = PersianDate::new(1403, 1, 1).unwrap();
//! let g: GregorianDate = nowruz.to().unwrap();
//! assert_eq!(g.to_string(), "2024/03/20");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Sub;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::cache;
use crate::calendar::{Calendar, CalendarType, Gregorian, Hijri, Persian};
use crate::error::{DateError, ParseError};
use crate::gregorian::UNIX_EPOCH_JDN;
use crate::locale::Locale;
use crate::math::{floor_div, floor_mod};
use crate::numerals::digit_value;
use crate::options::FormatOptions;
use crate::temporal::{GregorianMonth, HijriMonth, PersianMonth, Season, Weekday};

/// Smallest year a [`Date`] can hold.
pub const MIN_YEAR: i32 = 1;
/// Largest year a [`Date`] can hold.
pub const MAX_YEAR: i32 = 9999;

// JDN window accepted by `from_jdn`; roughly 4713 BCE to 22 666 CE.
const MIN_JDN: i64 = 0;
const MAX_JDN: i64 = 10_000_000;

/// A valid date in calendar `C`.
///
/// Ordering compares `(year, month, day)`, which matches chronological
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date<C: Calendar> {
    year: i32,
    month: u32,
    day: u32,
    calendar: PhantomData<C>,
}

/// A date in the Persian (Solar Hijri) calendar.
pub type PersianDate = Date<Persian>;
/// A date in the tabular Hijri calendar.
pub type HijriDate = Date<Hijri>;
/// A date in the proleptic Gregorian calendar.
pub type GregorianDate = Date<Gregorian>;

fn check_year(year: i64) -> Result<i32, DateError> {
    if (MIN_YEAR as i64..=MAX_YEAR as i64).contains(&year) {
        Ok(year as i32)
    } else {
        Err(DateError::YearOutOfRange { year })
    }
}

impl<C: Calendar> Date<C> {
    /// Create a date, validating every field.
    ///
    /// # Errors
    /// [`DateError::YearOutOfRange`] when the year is outside 1-9999 and
    /// [`DateError::InvalidDate`] when the month or day does not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        check_year(year as i64)?;
        if !(1..=12).contains(&month) || day < 1 || day > C::month_length(year, month) {
            return Err(DateError::InvalidDate { year, month, day });
        }
        Ok(Self::from_parts(year, month, day))
    }

    /// Whether `new(year, month, day)` would succeed.
    pub fn is_valid(year: i32, month: u32, day: u32) -> bool {
        Self::new(year, month, day).is_ok()
    }

    pub(crate) fn from_parts(year: i32, month: u32, day: u32) -> Self {
        Date {
            year,
            month,
            day,
            calendar: PhantomData,
        }
    }

    /// The date with the given Julian Day Number.
    pub fn from_jdn(jdn: i64) -> Result<Self, DateError> {
        if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
            return Err(DateError::JdnOutOfRange { jdn });
        }
        let (year, month, day) = C::from_jdn(jdn);
        check_year(year as i64)?;
        Ok(Self::from_parts(year, month, day))
    }

    /// The `day_of_year`-th day (1-based) of `year`.
    pub fn from_day_of_year(year: i32, day_of_year: u32) -> Result<Self, DateError> {
        check_year(year as i64)?;
        if day_of_year < 1 || day_of_year > C::year_length(year) {
            return Err(DateError::InvalidDate {
                year,
                month: 1,
                day: day_of_year,
            });
        }
        Self::from_jdn(C::to_jdn(year, 1, 1) + day_of_year as i64 - 1)
    }

    /// Date from a count of days since 1970-01-01.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        Self::from_jdn(epoch_day.saturating_add(UNIX_EPOCH_JDN))
    }

    /// Today's date from the local system clock.
    #[cfg(feature = "chrono")]
    pub fn today() -> Self {
        use chrono::Datelike;

        let now = chrono::Local::now().date_naive();
        let jdn = crate::gregorian::gregorian_to_jdn(now.year(), now.month(), now.day());
        let (year, month, day) = C::from_jdn(jdn);
        Self::from_parts(year, month, day)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn calendar_type(&self) -> CalendarType {
        C::KIND
    }

    /// Julian Day Number of this date.
    pub fn jdn(&self) -> i64 {
        C::to_jdn(self.year, self.month, self.day)
    }

    /// Days since 1970-01-01 (negative before).
    pub fn epoch_day(&self) -> i64 {
        self.jdn() - UNIX_EPOCH_JDN
    }

    pub fn day_of_year(&self) -> u32 {
        C::day_of_year(self.year, self.month, self.day)
    }

    pub fn day_of_week(&self) -> Weekday {
        Weekday::ALL[floor_mod(self.jdn() + 2, 7) as usize]
    }

    pub fn length_of_month(&self) -> u32 {
        C::month_length(self.year, self.month)
    }

    pub fn length_of_year(&self) -> u32 {
        C::year_length(self.year)
    }

    pub fn is_leap_year(&self) -> bool {
        C::is_leap_year(self.year)
    }

    /// Quarter of the year, 1-4.
    pub fn quarter(&self) -> u32 {
        (self.month - 1) / 3 + 1
    }

    /// Week of the year, counting Saturday-started weeks from 1.
    pub fn week_of_year(&self) -> u32 {
        let first = Weekday::ALL[floor_mod(C::to_jdn(self.year, 1, 1) + 2, 7) as usize];
        (self.day_of_year() + first.number() - 2) / 7 + 1
    }

    /// Name of the month in the given locale.
    pub fn month_name(&self, locale: &Locale) -> &'static str {
        locale.month_names(C::KIND)[(self.month - 1) as usize]
    }

    /// The same day in calendar `D`.
    pub fn to<D: Calendar>(&self) -> Result<Date<D>, DateError> {
        let (year, month, day) = D::from_jdn(self.jdn());
        check_year(year as i64)?;
        Ok(Date::from_parts(year, month, day))
    }

    pub fn to_persian(&self) -> Result<PersianDate, DateError> {
        self.to()
    }

    pub fn to_hijri(&self) -> Result<HijriDate, DateError> {
        self.to()
    }

    pub fn to_gregorian(&self) -> Result<GregorianDate, DateError> {
        self.to()
    }

    pub fn plus_days(&self, days: i64) -> Result<Self, DateError> {
        Self::from_jdn(self.jdn().saturating_add(days))
    }

    pub fn minus_days(&self, days: i64) -> Result<Self, DateError> {
        self.plus_days(days.saturating_neg())
    }

    pub fn plus_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        self.plus_days(weeks.saturating_mul(7))
    }

    pub fn minus_weeks(&self, weeks: i64) -> Result<Self, DateError> {
        self.plus_days(weeks.saturating_mul(-7))
    }

    /// Add calendar months, clamping the day to the target month's length.
    pub fn plus_months(&self, months: i64) -> Result<Self, DateError> {
        let total = (self.year as i64 * 12 + self.month as i64 - 1).saturating_add(months);
        let year = check_year(floor_div(total, 12))?;
        let month = floor_mod(total, 12) as u32 + 1;
        let day = self.day.min(C::month_length(year, month));
        Ok(Self::from_parts(year, month, day))
    }

    pub fn minus_months(&self, months: i64) -> Result<Self, DateError> {
        self.plus_months(months.saturating_neg())
    }

    /// Add years, clamping the day when the month is shorter in the target
    /// year (Esfand 30 becomes Esfand 29).
    pub fn plus_years(&self, years: i64) -> Result<Self, DateError> {
        let year = check_year((self.year as i64).saturating_add(years))?;
        let day = self.day.min(C::month_length(year, self.month));
        Ok(Self::from_parts(year, self.month, day))
    }

    pub fn minus_years(&self, years: i64) -> Result<Self, DateError> {
        self.plus_years(years.saturating_neg())
    }

    /// Signed number of days from this date to `other`, which may be in any
    /// calendar.
    pub fn days_until<D: Calendar>(&self, other: &Date<D>) -> i64 {
        other.jdn() - self.jdn()
    }

    /// Whole months from this date to `other`; a partial month counts as zero.
    pub fn months_until(&self, other: &Self) -> i64 {
        let mut months = (other.year as i64 - self.year as i64) * 12 + other.month as i64
            - self.month as i64;
        if months > 0 && other.day < self.day {
            months -= 1;
        } else if months < 0 && other.day > self.day {
            months += 1;
        }
        months
    }

    pub fn years_until(&self, other: &Self) -> i64 {
        self.months_until(other) / 12
    }

    /// Whether this date falls in `[start, end]`.
    pub fn is_between(&self, start: &Self, end: &Self) -> bool {
        start <= self && self <= end
    }

    /// Replace the year, clamping the day if needed.
    pub fn with_year(&self, year: i32) -> Result<Self, DateError> {
        self.plus_years(year as i64 - self.year as i64)
    }

    /// Replace the month, clamping the day if needed.
    pub fn with_month(&self, month: u32) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidDate {
                year: self.year,
                month,
                day: self.day,
            });
        }
        let day = self.day.min(C::month_length(self.year, month));
        Ok(Self::from_parts(self.year, month, day))
    }

    pub fn with_day(&self, day: u32) -> Result<Self, DateError> {
        Self::new(self.year, self.month, day)
    }

    pub fn start_of_month(&self) -> Self {
        Self::from_parts(self.year, self.month, 1)
    }

    pub fn end_of_month(&self) -> Self {
        Self::from_parts(self.year, self.month, self.length_of_month())
    }

    pub fn start_of_year(&self) -> Self {
        Self::from_parts(self.year, 1, 1)
    }

    pub fn end_of_year(&self) -> Self {
        Self::from_parts(self.year, 12, C::month_length(self.year, 12))
    }

    pub fn start_of_quarter(&self) -> Self {
        Self::from_parts(self.year, (self.quarter() - 1) * 3 + 1, 1)
    }

    pub fn end_of_quarter(&self) -> Self {
        let month = self.quarter() * 3;
        Self::from_parts(self.year, month, C::month_length(self.year, month))
    }

    /// The Saturday on or before this date.
    pub fn start_of_week(&self) -> Result<Self, DateError> {
        self.minus_days(self.day_of_week().number() as i64 - 1)
    }

    /// The Friday on or after this date.
    pub fn end_of_week(&self) -> Result<Self, DateError> {
        self.plus_days(7 - self.day_of_week().number() as i64)
    }

    pub fn is_weekend(&self) -> bool {
        self.day_of_week().is_weekend()
    }

    pub fn is_workday(&self) -> bool {
        self.day_of_week().is_workday()
    }

    /// The first workday after this date.
    pub fn next_workday(&self) -> Result<Self, DateError> {
        let mut date = self.plus_days(1)?;
        while date.is_weekend() {
            date = date.plus_days(1)?;
        }
        Ok(date)
    }

    /// The last workday before this date.
    pub fn previous_workday(&self) -> Result<Self, DateError> {
        let mut date = self.minus_days(1)?;
        while date.is_weekend() {
            date = date.minus_days(1)?;
        }
        Ok(date)
    }

    /// Workdays in `[self, other)`, negated when `other` is earlier.
    pub fn workdays_until(&self, other: &Self) -> i64 {
        let (start, end, sign) = match self.cmp(other) {
            Ordering::Equal => return 0,
            Ordering::Less => (self.jdn(), other.jdn(), 1),
            Ordering::Greater => (other.jdn(), self.jdn(), -1),
        };
        let days = end - start;
        let full_weeks = days / 7;
        let mut count = full_weeks * 6;
        // Fridays are the only weekend day: weekday number 7
        let mut weekday = floor_mod(start + 2, 7) + 1;
        for _ in 0..days % 7 {
            if weekday != 7 {
                count += 1;
            }
            weekday = weekday % 7 + 1;
        }
        sign * count
    }

    /// Every day of this date's month, in order.
    pub fn dates_of_month(&self) -> impl Iterator<Item = Self> {
        let (year, month) = (self.year, self.month);
        (1..=self.length_of_month()).map(move |day| Self::from_parts(year, month, day))
    }

    /// Render through a date pattern such as `"yyyy/MM/dd"` with the
    /// default options.
    pub fn format(&self, pattern: &str) -> Result<String, ParseError> {
        self.format_with(pattern, &FormatOptions::default())
    }

    pub fn format_with(&self, pattern: &str, options: &FormatOptions) -> Result<String, ParseError> {
        Ok(cache::get_or_parse(pattern)?.format(self, options))
    }

    /// Read a date laid out as `pattern`.
    pub fn parse_with_pattern(text: &str, pattern: &str) -> Result<Self, ParseError> {
        cache::get_or_parse(pattern)?.parse_date(text, &FormatOptions::default())
    }

    /// Inclusive range of years a `Date` can hold.
    pub fn year_range() -> (i32, i32) {
        (MIN_YEAR, MAX_YEAR)
    }
}

impl Date<Persian> {
    pub fn persian_month(&self) -> PersianMonth {
        PersianMonth::ALL[(self.month - 1) as usize]
    }

    pub fn season(&self) -> Season {
        self.persian_month().season()
    }

    /// Nowruz, the first day of `year`.
    pub fn nowruz(year: i32) -> Result<Self, DateError> {
        Self::new(year, 1, 1)
    }

    pub fn is_nowruz(&self) -> bool {
        self.month == 1 && self.day == 1
    }

    /// The first Nowruz strictly after this date.
    pub fn next_nowruz(&self) -> Result<Self, DateError> {
        Self::nowruz(self.year + 1)
    }
}

impl Date<Hijri> {
    pub fn hijri_month(&self) -> HijriMonth {
        HijriMonth::ALL[(self.month - 1) as usize]
    }

    /// 1 Ramadan of `year`.
    pub fn start_of_ramadan(year: i32) -> Result<Self, DateError> {
        Self::new(year, 9, 1)
    }

    /// Last day of Ramadan of `year`.
    pub fn end_of_ramadan(year: i32) -> Result<Self, DateError> {
        Self::new(year, 9, Hijri::month_length(year, 9))
    }

    /// 1 Shawwal of `year`.
    pub fn eid_al_fitr(year: i32) -> Result<Self, DateError> {
        Self::new(year, 10, 1)
    }

    /// 10 Dhu al-Hijjah of `year`.
    pub fn eid_al_adha(year: i32) -> Result<Self, DateError> {
        Self::new(year, 12, 10)
    }

    pub fn is_ramadan(&self) -> bool {
        self.month == 9
    }

    pub fn is_sacred_month(&self) -> bool {
        self.hijri_month().is_sacred()
    }
}

impl Date<Gregorian> {
    pub fn gregorian_month(&self) -> GregorianMonth {
        GregorianMonth::ALL[(self.month - 1) as usize]
    }
}

impl<C: Calendar> Sub for Date<C> {
    type Output = i64;

    /// Days from `rhs` to `self`.
    fn sub(self, rhs: Self) -> i64 {
        self.jdn() - rhs.jdn()
    }
}

impl<C: Calendar> fmt::Display for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl<C: Calendar> FromStr for Date<C> {
    type Err = ParseError;

    /// Reads `year/month/day` or `year-month-day` with Western, Persian or
    /// Arabic-Indic digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidInput {
            input: s.to_string(),
        };
        let trimmed = s.trim();
        let separator = if trimmed.contains('/') { '/' } else { '-' };

        let mut fields = [0i64; 3];
        let mut parts = trimmed.split(separator);
        for field in fields.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            if part.is_empty() || !part.chars().all(|ch| digit_value(ch).is_some()) {
                #[cfg(feature = "log")]
                log::debug!("rejected date text {:?}", s);
                return Err(invalid());
            }
            *field = crate::numerals::parse_int(part)?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        let [year, month, day] = fields;
        let year = check_year(year)?;
        if month > 12 || day > 31 {
            return Err(DateError::InvalidDate {
                year,
                month: month.min(u32::MAX as i64) as u32,
                day: day.min(u32::MAX as i64) as u32,
            }
            .into());
        }
        Ok(Self::new(year, month as u32, day as u32)?)
    }
}

#[cfg(feature = "chrono")]
impl<C: Calendar> TryFrom<chrono::NaiveDate> for Date<C> {
    type Error = DateError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        use chrono::Datelike;

        let jdn = crate::gregorian::gregorian_to_jdn(date.year(), date.month(), date.day());
        Self::from_jdn(jdn)
    }
}

#[cfg(feature = "chrono")]
impl<C: Calendar> Date<C> {
    /// The same day as a `chrono::NaiveDate`.
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        let (year, month, day) = crate::gregorian::jdn_to_gregorian(self.jdn());
        chrono::NaiveDate::from_ymd_opt(year, month, day)
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<C: Calendar> Serialize for Date<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: Calendar> Deserialize<'de> for Date<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_of_year_starts_at_one() {
        let first = PersianDate::new(1403, 1, 1).unwrap();
        assert_eq!(first.week_of_year(), 1);
        // 1403/01/01 is a Wednesday, so the first Saturday opens week 2
        let saturday = PersianDate::new(1403, 1, 4).unwrap();
        assert_eq!(saturday.day_of_week(), Weekday::Shanbe);
        assert_eq!(saturday.week_of_year(), 2);
    }

    #[test]
    fn test_from_jdn_rejects_far_values() {
        assert_eq!(
            PersianDate::from_jdn(i64::MAX),
            Err(DateError::JdnOutOfRange { jdn: i64::MAX })
        );
    }
}
