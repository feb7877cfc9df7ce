use taqvim::{
    Calendar, CalendarType, Gregorian, GregorianMonth, Hijri, HijriMonth, Persian, PersianMonth,
    Season, Weekday,
};

#[test]
fn test_persian_month_properties() {
    assert_eq!(PersianMonth::from_number(1), Some(PersianMonth::Farvardin));
    assert_eq!(PersianMonth::from_number(0), None);
    assert_eq!(PersianMonth::from_number(13), None);
    assert_eq!(PersianMonth::Mehr.number(), 7);
    assert_eq!(PersianMonth::Mehr.persian_name(), "مهر");
    assert_eq!(PersianMonth::Ordibehesht.english_name(), "Ordibehesht");
    assert_eq!(PersianMonth::Shahrivar.default_length(), 31);
    assert_eq!(PersianMonth::Mehr.default_length(), 30);
    assert_eq!(PersianMonth::Esfand.length(true), 30);
    assert_eq!(PersianMonth::Esfand.default_length(), 29);
    assert_eq!(PersianMonth::Tir.quarter(), 2);
    assert_eq!(PersianMonth::Azar.season(), Season::Autumn);
    assert_eq!(PersianMonth::Mehr.first_day_of_year(), 187);
    assert_eq!(PersianMonth::Esfand.plus(1), PersianMonth::Farvardin);
    assert_eq!(PersianMonth::Farvardin.plus(-1), PersianMonth::Esfand);
    assert_eq!(PersianMonth::Dey.to_string(), "دی");
}

#[test]
fn test_hijri_month_properties() {
    assert_eq!(HijriMonth::from_number(9), Some(HijriMonth::Ramadan));
    assert_eq!(HijriMonth::Ramadan.english_name(), "Ramadan");
    assert_eq!(HijriMonth::DhuAlHijjah.persian_name(), "ذی‌الحجه");
    assert_eq!(HijriMonth::DhuAlHijjah.arabic_name(), "ذو الحجة");
    assert_eq!(HijriMonth::Muharram.default_length(), 30);
    assert_eq!(HijriMonth::Safar.default_length(), 29);
    assert_eq!(HijriMonth::DhuAlHijjah.length(true), 30);
    let sacred: Vec<u32> = HijriMonth::ALL
        .iter()
        .filter(|m| m.is_sacred())
        .map(|m| m.number())
        .collect();
    assert_eq!(sacred, vec![1, 7, 11, 12]);
}

#[test]
fn test_gregorian_month_properties() {
    assert_eq!(GregorianMonth::February.length(true), 29);
    assert_eq!(GregorianMonth::February.default_length(), 28);
    assert_eq!(GregorianMonth::September.default_length(), 30);
    assert_eq!(GregorianMonth::March.persian_name(), "مارس");
}

#[test]
fn test_weekday_properties() {
    assert_eq!(Weekday::Shanbe.number(), 1);
    assert_eq!(Weekday::Jomeh.number(), 7);
    assert!(Weekday::Jomeh.is_weekend());
    assert!(Weekday::Panjshanbe.is_workday());
    assert_eq!(Weekday::Jomeh.plus(1), Weekday::Shanbe);
    assert_eq!(Weekday::Shanbe.minus(1), Weekday::Jomeh);
    assert_eq!(Weekday::Seshanbe.persian_name(), "سه‌شنبه");
    assert_eq!(Weekday::Seshanbe.english_name(), "Tuesday");
    assert_eq!(Weekday::Shanbe.to_iso(), 6);
    assert_eq!(Weekday::from_number(8), None);
}

#[test]
fn test_season_properties() {
    assert_eq!(Season::from_persian_month(PersianMonth::Farvardin), Season::Spring);
    assert_eq!(Season::from_persian_month(PersianMonth::Esfand), Season::Winter);
    assert_eq!(Season::Summer.first_month(), PersianMonth::Tir);
    assert_eq!(Season::Summer.last_month(), PersianMonth::Shahrivar);
    assert_eq!(Season::Autumn.next(), Season::Winter);
    assert_eq!(Season::Summer.previous(), Season::Spring);
    assert_eq!(Season::Spring.persian_name(), "بهار");
    assert_eq!(Season::Autumn.english_name(), "Autumn");
}

#[test]
fn test_calendar_types() {
    assert_eq!(Persian::KIND, CalendarType::Persian);
    assert_eq!(Hijri::KIND, CalendarType::Hijri);
    assert_eq!(Gregorian::KIND, CalendarType::Gregorian);
    assert!(CalendarType::Hijri.is_lunar());
    assert!(CalendarType::Persian.is_solar());
    assert!(CalendarType::Gregorian.is_solar());
    assert_eq!(CalendarType::Persian.to_string(), "شمسی");
    assert_eq!(CalendarType::Hijri.english_name(), "Hijri");
}

#[test]
fn test_calendar_trait_dispatch() {
    assert_eq!(Persian::to_jdn(1403, 1, 1), Gregorian::to_jdn(2024, 3, 20));
    assert_eq!(Hijri::from_jdn(Gregorian::to_jdn(2025, 3, 1)), (1446, 9, 1));
    assert_eq!(Persian::year_length(1403), 366);
    assert_eq!(Hijri::year_length(1446), 354);
    assert_eq!(Gregorian::day_of_year(2024, 3, 1), 61);
    assert_eq!(Persian::day_of_year(1403, 7, 1), 187);
    assert_eq!(Hijri::day_of_year(1446, 2, 1), 31);
}
