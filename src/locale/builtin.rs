//! Built-in locale data.

use crate::calendar::CalendarType;

pub(crate) const PERSIAN_MONTHS_FA: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

pub(crate) const PERSIAN_MONTHS_EN: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

pub(crate) const HIJRI_MONTHS_FA: [&str; 12] = [
    "محرم",
    "صفر",
    "ربیع‌الاول",
    "ربیع‌الثانی",
    "جمادی‌الاول",
    "جمادی‌الثانی",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذی‌القعده",
    "ذی‌الحجه",
];

pub(crate) const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

pub(crate) const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

pub(crate) const GREGORIAN_MONTHS_FA: [&str; 12] = [
    "ژانویه",
    "فوریه",
    "مارس",
    "آوریل",
    "مه",
    "ژوئن",
    "ژوئیه",
    "اوت",
    "سپتامبر",
    "اکتبر",
    "نوامبر",
    "دسامبر",
];

pub(crate) const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Saturday first.
pub(crate) const WEEKDAYS_FA: [&str; 7] = [
    "شنبه",
    "یکشنبه",
    "دوشنبه",
    "سه‌شنبه",
    "چهارشنبه",
    "پنج‌شنبه",
    "جمعه",
];

pub(crate) const WEEKDAYS_EN: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];

/// Text used when rendering and reading dates.
///
/// Weekday arrays are Saturday first, month arrays are indexed by
/// `month - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub name: &'static str,
    pub persian_month_names: [&'static str; 12],
    pub persian_month_names_short: [&'static str; 12],
    pub hijri_month_names: [&'static str; 12],
    pub hijri_month_names_short: [&'static str; 12],
    pub gregorian_month_names: [&'static str; 12],
    pub gregorian_month_names_short: [&'static str; 12],
    pub day_names_full: [&'static str; 7],
    pub day_names_short: [&'static str; 7],
}

impl Default for Locale {
    fn default() -> Self {
        Self::persian()
    }
}

impl Locale {
    /// Persian (Farsi) locale.
    ///
    /// Short month names are the first three letters of the full name and
    /// short weekday names the first two, so some Hijri and Gregorian
    /// abbreviations coincide (ربی, جما, ژوئ).
    pub fn persian() -> Self {
        Locale {
            name: "fa",
            persian_month_names: PERSIAN_MONTHS_FA,
            persian_month_names_short: [
                "فرو", "ارد", "خرد", "تیر", "مرد", "شهر", "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
            ],
            hijri_month_names: HIJRI_MONTHS_FA,
            hijri_month_names_short: [
                "محر", "صفر", "ربی", "ربی", "جما", "جما", "رجب", "شعب", "رمض", "شوا", "ذی", "ذی",
            ],
            gregorian_month_names: GREGORIAN_MONTHS_FA,
            gregorian_month_names_short: [
                "ژان", "فور", "مار", "آور", "مه", "ژوئ", "ژوئ", "اوت", "سپت", "اکت", "نوا", "دسا",
            ],
            day_names_full: WEEKDAYS_FA,
            day_names_short: ["شن", "یک", "دو", "سه", "چه", "پن", "جم"],
        }
    }

    /// English locale with transliterated month names.
    pub fn english() -> Self {
        Locale {
            name: "en",
            persian_month_names: PERSIAN_MONTHS_EN,
            persian_month_names_short: [
                "Far", "Ord", "Kho", "Tir", "Mor", "Sha", "Meh", "Aba", "Aza", "Dey", "Bah", "Esf",
            ],
            hijri_month_names: HIJRI_MONTHS_EN,
            hijri_month_names_short: [
                "Muh", "Saf", "Rab1", "Rab2", "Jum1", "Jum2", "Raj", "Sha", "Ram", "Shw", "Dhq",
                "Dhh",
            ],
            gregorian_month_names: GREGORIAN_MONTHS_EN,
            gregorian_month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            day_names_full: WEEKDAYS_EN,
            day_names_short: ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"],
        }
    }

    /// Whether this locale writes Persian text.
    pub fn is_persian(&self) -> bool {
        self.name == "fa"
    }

    /// Full month names for a calendar.
    pub fn month_names(&self, kind: CalendarType) -> &[&'static str; 12] {
        match kind {
            CalendarType::Persian => &self.persian_month_names,
            CalendarType::Hijri => &self.hijri_month_names,
            CalendarType::Gregorian => &self.gregorian_month_names,
        }
    }

    /// Abbreviated month names for a calendar.
    pub fn month_names_short(&self, kind: CalendarType) -> &[&'static str; 12] {
        match kind {
            CalendarType::Persian => &self.persian_month_names_short,
            CalendarType::Hijri => &self.hijri_month_names_short,
            CalendarType::Gregorian => &self.gregorian_month_names_short,
        }
    }
}
