use taqvim::builtin_patterns::{
    BASIC_DATE, DATE_TIME, DATE_TIME_FULL, DAY_MONTH, FULL_DATE, ISO_DATE, ISO_DATE_DASH,
    LONG_DATE, MONTH_YEAR, SHORT_DATE, TIME_LONG, TIME_SHORT,
};
use taqvim::{DatePattern, Digits, FormatOptions, GregorianDate, HijriDate, PersianDate};

fn nowruz_15() -> PersianDate {
    PersianDate::new(1403, 1, 15).unwrap()
}

#[test]
fn test_format_numeric_patterns() {
    let date = nowruz_15();
    assert_eq!(date.format(ISO_DATE).unwrap(), "1403/01/15");
    assert_eq!(date.format(ISO_DATE_DASH).unwrap(), "1403-01-15");
    assert_eq!(date.format(BASIC_DATE).unwrap(), "14030115");
    assert_eq!(date.format(SHORT_DATE).unwrap(), "03/01/15");
    assert_eq!(date.format("y/M/d").unwrap(), "1403/1/15");
}

#[test]
fn test_format_persian_names() {
    let date = nowruz_15();
    assert_eq!(date.format(LONG_DATE).unwrap(), "15 فروردین 1403");
    assert_eq!(date.format(FULL_DATE).unwrap(), "چهارشنبه 15 فروردین 1403");
    assert_eq!(date.format(DAY_MONTH).unwrap(), "15 فروردین");
    assert_eq!(date.format(MONTH_YEAR).unwrap(), "فروردین 1403");
    assert_eq!(date.format("EEE").unwrap(), "چه");
}

#[test]
fn test_format_persian_digits() {
    let opts = FormatOptions::persian();
    let date = nowruz_15();
    assert_eq!(date.format_with(ISO_DATE, &opts).unwrap(), "۱۴۰۳/۰۱/۱۵");
    assert_eq!(
        date.format_with(FULL_DATE, &opts).unwrap(),
        "چهارشنبه ۱۵ فروردین ۱۴۰۳"
    );
}

#[test]
fn test_format_english() {
    let opts = FormatOptions::english();
    let date = nowruz_15();
    assert_eq!(
        date.format_with(FULL_DATE, &opts).unwrap(),
        "Wednesday 15 Farvardin 1403"
    );
    assert_eq!(date.format_with("EEE, MMM d", &opts).unwrap(), "Wed, Far 15");
}

#[test]
fn test_format_hijri() {
    let date = HijriDate::new(1446, 9, 1).unwrap();
    assert_eq!(date.format(LONG_DATE).unwrap(), "1 رمضان 1446");
    assert_eq!(
        date.format_with(LONG_DATE, &FormatOptions::english()).unwrap(),
        "1 Ramadan 1446"
    );
}

#[test]
fn test_format_gregorian() {
    let date = GregorianDate::new(2024, 3, 20).unwrap();
    let opts = FormatOptions::english();
    assert_eq!(date.format_with("MMM d, yyyy", &opts).unwrap(), "Mar 20, 2024");
    assert_eq!(date.format_with("EEEE", &opts).unwrap(), "Wednesday");
    assert_eq!(date.format(LONG_DATE).unwrap(), "20 مارس 2024");
}

#[test]
fn test_format_day_of_year_and_quarter() {
    let date = nowruz_15();
    assert_eq!(date.format("DDD").unwrap(), "015");
    assert_eq!(date.format("D").unwrap(), "15");
    assert_eq!(date.format("'Q'Q yyyy").unwrap(), "Q1 1403");
    let winter = PersianDate::new(1403, 10, 15).unwrap();
    assert_eq!(winter.format("yyyy-DDD Q").unwrap(), "1403-291 4");
}

#[test]
fn test_format_quoted_literals() {
    let date = nowruz_15();
    assert_eq!(date.format("'year' yyyy").unwrap(), "year 1403");
    assert_eq!(date.format("d''MM").unwrap(), "15'01");
    assert_eq!(date.format("\\d d").unwrap(), "d 15");
}

#[test]
fn test_format_invalid_pattern() {
    let date = nowruz_15();
    assert!(date.format("").is_err());
    assert!(date.format("yyy").is_err());
    assert!(date.format("'open").is_err());
}

#[test]
fn test_pattern_format_directly() {
    let pattern = DatePattern::parse("yyyy/MM/dd").unwrap();
    let opts = FormatOptions::default().with_digits(Digits::Persian);
    assert_eq!(pattern.format(&nowruz_15(), &opts), "۱۴۰۳/۰۱/۱۵");
}

#[test]
fn test_format_convenience() {
    let opts = FormatOptions::default();
    let date = nowruz_15();
    assert_eq!(taqvim::format(&date, "yyyy.MM.dd", &opts).unwrap(), "1403.01.15");
    assert_eq!(taqvim::format_default(&date, "dd").unwrap(), "15");
    assert!(taqvim::format(&date, "", &opts).is_err());
}

#[test]
fn test_format_persian_abbreviations() {
    let opts = FormatOptions::persian();
    let date = nowruz_15();
    assert_eq!(date.format_with("MMM", &opts).unwrap(), "فرو");
    assert_eq!(date.format_with("EEE", &opts).unwrap(), "چه");
    assert_eq!(date.format_with("EEE d MMM", &opts).unwrap(), "چه ۱۵ فرو");

    let ramadan = HijriDate::new(1446, 9, 1).unwrap();
    assert_eq!(ramadan.format_with("MMM", &opts).unwrap(), "رمض");
    let march = GregorianDate::new(2024, 3, 20).unwrap();
    assert_eq!(march.format_with("MMM", &opts).unwrap(), "مار");
}

#[test]
fn test_format_time_fields() {
    let value = nowruz_15().and_hms(14, 5, 9).unwrap();
    assert_eq!(value.format(DATE_TIME).unwrap(), "1403/01/15 14:05");
    assert_eq!(value.format(DATE_TIME_FULL).unwrap(), "1403/01/15 14:05:09");
    assert_eq!(value.format(TIME_SHORT).unwrap(), "14:05");
    assert_eq!(value.format(TIME_LONG).unwrap(), "14:05:09");
    assert_eq!(value.format("H:m:s").unwrap(), "14:5:9");
    assert_eq!(
        value.format_with(DATE_TIME_FULL, &FormatOptions::persian()).unwrap(),
        "۱۴۰۳/۰۱/۱۵ ۱۴:۰۵:۰۹"
    );
}

#[test]
fn test_date_formats_time_fields_as_midnight() {
    assert_eq!(nowruz_15().format(DATE_TIME).unwrap(), "1403/01/15 00:00");
}
