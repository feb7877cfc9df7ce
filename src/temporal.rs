//! Named calendar fields: months, weekdays and seasons.

use std::fmt;

use crate::locale::{
    GREGORIAN_MONTHS_EN, GREGORIAN_MONTHS_FA, HIJRI_MONTHS_AR, HIJRI_MONTHS_EN, HIJRI_MONTHS_FA,
    PERSIAN_MONTHS_EN, PERSIAN_MONTHS_FA, WEEKDAYS_EN, WEEKDAYS_FA,
};

/// Months of the Persian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PersianMonth {
    Farvardin = 1,
    Ordibehesht,
    Khordad,
    Tir,
    Mordad,
    Shahrivar,
    Mehr,
    Aban,
    Azar,
    Dey,
    Bahman,
    Esfand,
}

impl PersianMonth {
    pub const ALL: [PersianMonth; 12] = [
        PersianMonth::Farvardin,
        PersianMonth::Ordibehesht,
        PersianMonth::Khordad,
        PersianMonth::Tir,
        PersianMonth::Mordad,
        PersianMonth::Shahrivar,
        PersianMonth::Mehr,
        PersianMonth::Aban,
        PersianMonth::Azar,
        PersianMonth::Dey,
        PersianMonth::Bahman,
        PersianMonth::Esfand,
    ];

    /// Month number, 1-12.
    pub const fn number(self) -> u32 {
        self as u32
    }

    pub fn from_number(month: u32) -> Option<Self> {
        Self::ALL.get((month as usize).checked_sub(1)?).copied()
    }

    pub fn persian_name(self) -> &'static str {
        PERSIAN_MONTHS_FA[self as usize - 1]
    }

    pub fn english_name(self) -> &'static str {
        PERSIAN_MONTHS_EN[self as usize - 1]
    }

    /// Length in a common year.
    pub const fn default_length(self) -> u32 {
        self.length(false)
    }

    pub const fn length(self, leap_year: bool) -> u32 {
        match self as u32 {
            1..=6 => 31,
            7..=11 => 30,
            _ if leap_year => 30,
            _ => 29,
        }
    }

    /// Day of year on which this month starts.
    pub const fn first_day_of_year(self) -> u32 {
        crate::persian::persian_day_of_year(self as u32, 1)
    }

    /// Quarter of the year, 1-4.
    pub const fn quarter(self) -> u32 {
        (self as u32 - 1) / 3 + 1
    }

    pub fn season(self) -> Season {
        Season::from_persian_month(self)
    }

    pub fn plus(self, months: i64) -> Self {
        Self::ALL[(self as i64 - 1 + months).rem_euclid(12) as usize]
    }
}

impl fmt::Display for PersianMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.persian_name())
    }
}

/// Months of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HijriMonth {
    Muharram = 1,
    Safar,
    RabiAlAwwal,
    RabiAlThani,
    JumadaAlAwwal,
    JumadaAlThani,
    Rajab,
    Shaban,
    Ramadan,
    Shawwal,
    DhuAlQidah,
    DhuAlHijjah,
}

impl HijriMonth {
    pub const ALL: [HijriMonth; 12] = [
        HijriMonth::Muharram,
        HijriMonth::Safar,
        HijriMonth::RabiAlAwwal,
        HijriMonth::RabiAlThani,
        HijriMonth::JumadaAlAwwal,
        HijriMonth::JumadaAlThani,
        HijriMonth::Rajab,
        HijriMonth::Shaban,
        HijriMonth::Ramadan,
        HijriMonth::Shawwal,
        HijriMonth::DhuAlQidah,
        HijriMonth::DhuAlHijjah,
    ];

    pub const fn number(self) -> u32 {
        self as u32
    }

    pub fn from_number(month: u32) -> Option<Self> {
        Self::ALL.get((month as usize).checked_sub(1)?).copied()
    }

    pub fn persian_name(self) -> &'static str {
        HIJRI_MONTHS_FA[self as usize - 1]
    }

    pub fn arabic_name(self) -> &'static str {
        HIJRI_MONTHS_AR[self as usize - 1]
    }

    pub fn english_name(self) -> &'static str {
        HIJRI_MONTHS_EN[self as usize - 1]
    }

    pub const fn default_length(self) -> u32 {
        self.length(false)
    }

    pub const fn length(self, leap_year: bool) -> u32 {
        if self as u32 % 2 == 1 || (leap_year && self as u32 == 12) {
            30
        } else {
            29
        }
    }

    /// Muharram, Rajab, Dhu al-Qi'dah and Dhu al-Hijjah, in which fighting
    /// is traditionally forbidden.
    pub const fn is_sacred(self) -> bool {
        matches!(
            self,
            HijriMonth::Muharram | HijriMonth::Rajab | HijriMonth::DhuAlQidah | HijriMonth::DhuAlHijjah
        )
    }
}

impl fmt::Display for HijriMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.persian_name())
    }
}

/// Months of the Gregorian year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GregorianMonth {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl GregorianMonth {
    pub const ALL: [GregorianMonth; 12] = [
        GregorianMonth::January,
        GregorianMonth::February,
        GregorianMonth::March,
        GregorianMonth::April,
        GregorianMonth::May,
        GregorianMonth::June,
        GregorianMonth::July,
        GregorianMonth::August,
        GregorianMonth::September,
        GregorianMonth::October,
        GregorianMonth::November,
        GregorianMonth::December,
    ];

    pub const fn number(self) -> u32 {
        self as u32
    }

    pub fn from_number(month: u32) -> Option<Self> {
        Self::ALL.get((month as usize).checked_sub(1)?).copied()
    }

    pub fn persian_name(self) -> &'static str {
        GREGORIAN_MONTHS_FA[self as usize - 1]
    }

    pub fn english_name(self) -> &'static str {
        GREGORIAN_MONTHS_EN[self as usize - 1]
    }

    pub const fn default_length(self) -> u32 {
        self.length(false)
    }

    pub const fn length(self, leap_year: bool) -> u32 {
        match self {
            GregorianMonth::February if leap_year => 29,
            GregorianMonth::February => 28,
            GregorianMonth::April
            | GregorianMonth::June
            | GregorianMonth::September
            | GregorianMonth::November => 30,
            _ => 31,
        }
    }
}

impl fmt::Display for GregorianMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Day of the week, numbered from Saturday as in Iran.
///
/// Friday is the weekly day off; every other day is a workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Shanbe = 1,
    Yekshanbe,
    Doshanbe,
    Seshanbe,
    Chaharshanbe,
    Panjshanbe,
    Jomeh,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Shanbe,
        Weekday::Yekshanbe,
        Weekday::Doshanbe,
        Weekday::Seshanbe,
        Weekday::Chaharshanbe,
        Weekday::Panjshanbe,
        Weekday::Jomeh,
    ];

    /// Position in the week, Saturday=1 .. Friday=7.
    pub const fn number(self) -> u32 {
        self as u32
    }

    pub fn from_number(day: u32) -> Option<Self> {
        Self::ALL.get((day as usize).checked_sub(1)?).copied()
    }

    /// From an ISO weekday, Monday=1 .. Sunday=7.
    pub fn from_iso(iso: u32) -> Option<Self> {
        if !(1..=7).contains(&iso) {
            return None;
        }
        Some(Self::ALL[((iso + 1) % 7) as usize])
    }

    /// ISO weekday, Monday=1 .. Sunday=7.
    pub const fn to_iso(self) -> u32 {
        (self as u32 + 4) % 7 + 1
    }

    pub fn persian_name(self) -> &'static str {
        WEEKDAYS_FA[self as usize - 1]
    }

    pub fn english_name(self) -> &'static str {
        WEEKDAYS_EN[self as usize - 1]
    }

    pub const fn is_weekend(self) -> bool {
        matches!(self, Weekday::Jomeh)
    }

    pub const fn is_workday(self) -> bool {
        !self.is_weekend()
    }

    /// The weekday `days` after this one (negative goes back).
    pub fn plus(self, days: i64) -> Self {
        Self::ALL[(self as i64 - 1 + days).rem_euclid(7) as usize]
    }

    pub fn minus(self, days: i64) -> Self {
        self.plus(-days)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.persian_name())
    }
}

/// Seasons of the Persian year, three months each starting at Nowruz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Spring = 1,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn from_persian_month(month: PersianMonth) -> Self {
        Self::ALL[(month.number() as usize - 1) / 3]
    }

    pub fn first_month(self) -> PersianMonth {
        PersianMonth::ALL[(self as usize - 1) * 3]
    }

    pub fn last_month(self) -> PersianMonth {
        PersianMonth::ALL[(self as usize - 1) * 3 + 2]
    }

    pub fn next(self) -> Self {
        Self::ALL[self as usize % 4]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }

    pub fn persian_name(self) -> &'static str {
        match self {
            Season::Spring => "بهار",
            Season::Summer => "تابستان",
            Season::Autumn => "پاییز",
            Season::Winter => "زمستان",
        }
    }

    pub fn english_name(self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.persian_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_iso_mapping() {
        assert_eq!(Weekday::from_iso(6), Some(Weekday::Shanbe));
        assert_eq!(Weekday::from_iso(7), Some(Weekday::Yekshanbe));
        assert_eq!(Weekday::from_iso(5), Some(Weekday::Jomeh));
        assert_eq!(Weekday::from_iso(0), None);
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_iso(day.to_iso()), Some(day));
        }
    }

    #[test]
    fn test_season_cycle() {
        assert_eq!(Season::Winter.next(), Season::Spring);
        assert_eq!(Season::Spring.previous(), Season::Winter);
        assert_eq!(Season::Autumn.first_month(), PersianMonth::Mehr);
        assert_eq!(Season::Winter.last_month(), PersianMonth::Esfand);
    }
}
