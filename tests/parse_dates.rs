use taqvim::builtin_patterns::{
    BASIC_DATE, DATE_TIME, DATE_TIME_FULL, FULL_DATE, LONG_DATE, MONTH_YEAR, SHORT_DATE,
};
use taqvim::{
    DateError, DatePattern, FormatOptions, GregorianDate, HijriDate, ParseError, PersianDate,
    PersianDateTime,
};

fn pd(year: i32, month: u32, day: u32) -> PersianDate {
    PersianDate::new(year, month, day).unwrap()
}

#[test]
fn test_from_str_separators() {
    assert_eq!("1403/01/15".parse::<PersianDate>().unwrap(), pd(1403, 1, 15));
    assert_eq!("1403-1-5".parse::<PersianDate>().unwrap(), pd(1403, 1, 5));
    assert_eq!(" 1403/12/30 ".parse::<PersianDate>().unwrap(), pd(1403, 12, 30));
}

#[test]
fn test_from_str_native_digits() {
    assert_eq!("۱۴۰۳/۰۱/۱۵".parse::<PersianDate>().unwrap(), pd(1403, 1, 15));
    assert_eq!("١٤٠٣/٠١/١٥".parse::<PersianDate>().unwrap(), pd(1403, 1, 15));
}

#[test]
fn test_from_str_rejects_invalid_dates() {
    assert_eq!(
        "1402/12/30".parse::<PersianDate>(),
        Err(ParseError::Date(DateError::InvalidDate {
            year: 1402,
            month: 12,
            day: 30
        }))
    );
    assert!(matches!(
        "1403/13/01".parse::<PersianDate>(),
        Err(ParseError::Date(DateError::InvalidDate { month: 13, .. }))
    ));
    assert!(matches!(
        "0/01/01".parse::<PersianDate>(),
        Err(ParseError::Date(DateError::YearOutOfRange { year: 0 }))
    ));
}

#[test]
fn test_from_str_rejects_malformed_text() {
    for text in ["", "1403/01", "1403/01/15/1", "abcd", "1403/x1/15", "1403//15", "+1403/01/01"] {
        assert!(
            matches!(text.parse::<PersianDate>(), Err(ParseError::InvalidInput { .. })),
            "{:?}",
            text
        );
    }
}

#[test]
fn test_display_parse_round_trip() {
    let date = pd(1399, 12, 30);
    assert_eq!(date.to_string().parse::<PersianDate>().unwrap(), date);
    let hijri = HijriDate::new(1445, 12, 30).unwrap();
    assert_eq!(hijri.to_string().parse::<HijriDate>().unwrap(), hijri);
}

#[test]
fn test_parse_with_named_month() {
    assert_eq!(
        PersianDate::parse_with_pattern("15 فروردین 1403", LONG_DATE).unwrap(),
        pd(1403, 1, 15)
    );
    assert_eq!(
        PersianDate::parse_with_pattern("15 Farvardin 1403", LONG_DATE).unwrap(),
        pd(1403, 1, 15)
    );
    assert_eq!(
        PersianDate::parse_with_pattern("۱۵ اسفند ۱۴۰۳", LONG_DATE).unwrap(),
        pd(1403, 12, 15)
    );
    assert_eq!(
        PersianDate::parse_with_pattern("اسفند 1403", MONTH_YEAR).unwrap(),
        pd(1403, 12, 1)
    );
}

#[test]
fn test_parse_fixed_width() {
    assert_eq!(
        PersianDate::parse_with_pattern("14030115", BASIC_DATE).unwrap(),
        pd(1403, 1, 15)
    );
    assert_eq!(
        PersianDate::parse_with_pattern("03/01/15", SHORT_DATE).unwrap(),
        pd(1403, 1, 15)
    );
    assert_eq!(
        PersianDate::parse_with_pattern("99/12/30", SHORT_DATE).unwrap(),
        pd(1399, 12, 30)
    );
    assert!(PersianDate::parse_with_pattern("1403015", BASIC_DATE).is_err());
}

#[test]
fn test_parse_checks_weekday() {
    assert_eq!(
        PersianDate::parse_with_pattern("چهارشنبه 15 فروردین 1403", FULL_DATE).unwrap(),
        pd(1403, 1, 15)
    );
    assert!(matches!(
        PersianDate::parse_with_pattern("شنبه 15 فروردین 1403", FULL_DATE),
        Err(ParseError::InvalidInput { .. })
    ));
}

#[test]
fn test_parse_day_of_year() {
    assert_eq!(
        PersianDate::parse_with_pattern("1403-291", "yyyy-DDD").unwrap(),
        pd(1403, 10, 15)
    );
}

#[test]
fn test_parse_gregorian_and_hijri() {
    let pattern = DatePattern::parse("MMM d, yyyy").unwrap();
    let opts = FormatOptions::english();
    let date: GregorianDate = pattern.parse_date("Mar 20, 2024", &opts).unwrap();
    assert_eq!(date, GregorianDate::new(2024, 3, 20).unwrap());

    let ramadan: HijriDate = DatePattern::parse(LONG_DATE)
        .unwrap()
        .parse_date("1 رمضان 1446", &opts)
        .unwrap();
    assert_eq!(ramadan, HijriDate::new(1446, 9, 1).unwrap());
}

#[test]
fn test_parse_rejects_leftover_text() {
    assert!(PersianDate::parse_with_pattern("1403/01/15 extra", "yyyy/MM/dd").is_err());
    assert!(PersianDate::parse_with_pattern("1403.01.15", "yyyy/MM/dd").is_err());
    assert!(PersianDate::parse_with_pattern("01/15", "MM/dd").is_err());
}

#[test]
fn test_format_then_parse() {
    let opts = FormatOptions::persian();
    let pattern = DatePattern::parse(FULL_DATE).unwrap();
    let date = pd(1404, 7, 8);
    let text = pattern.format(&date, &opts);
    assert_eq!(pattern.parse_date::<taqvim::Persian>(&text, &opts).unwrap(), date);
}

#[test]
fn test_parse_date_time_pattern() {
    let value = PersianDateTime::parse_with_pattern("1403/01/15 14:05", DATE_TIME).unwrap();
    assert_eq!(value, pd(1403, 1, 15).and_hms(14, 5, 0).unwrap());

    let value =
        PersianDateTime::parse_with_pattern("۱۴۰۳/۰۱/۱۵ ۰۸:۳۰:۴۵", DATE_TIME_FULL).unwrap();
    assert_eq!(value, pd(1403, 1, 15).and_hms(8, 30, 45).unwrap());

    let midnight = PersianDateTime::parse_with_pattern("1403/01/15", "yyyy/MM/dd").unwrap();
    assert_eq!(midnight, pd(1403, 1, 15).at_start_of_day());
}

#[test]
fn test_parse_date_time_rejects_bad_time() {
    assert_eq!(
        PersianDateTime::parse_with_pattern("1403/01/15 24:00", DATE_TIME),
        Err(ParseError::Date(DateError::InvalidTime {
            hour: 24,
            minute: 0,
            second: 0
        }))
    );
    assert!(PersianDateTime::parse_with_pattern("1403/01/15 9:00", DATE_TIME).is_err());
}

#[test]
fn test_parse_date_ignores_time_fields() {
    assert_eq!(
        PersianDate::parse_with_pattern("1403/01/15 14:05", DATE_TIME).unwrap(),
        pd(1403, 1, 15)
    );
}

#[test]
fn test_parse_persian_abbreviations() {
    let opts = FormatOptions::persian();
    let pattern = DatePattern::parse("EEE d MMM yyyy").unwrap();
    let date: PersianDate = pattern.parse_date("چه ۱۵ فرو ۱۴۰۳", &opts).unwrap();
    assert_eq!(date, pd(1403, 1, 15));
}
