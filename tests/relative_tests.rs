use taqvim::relative::{describe, describe_date_time, describe_short};
use taqvim::{HijriDate, Locale, PersianDate, PersianDateTime};

fn pd(year: i32, month: u32, day: u32) -> PersianDate {
    PersianDate::new(year, month, day).unwrap()
}

#[test]
fn test_persian_near_days() {
    let reference = pd(1403, 1, 10);
    let fa = Locale::persian();
    assert_eq!(describe(&reference, &reference, &fa), "امروز");
    assert_eq!(describe(&pd(1403, 1, 9), &reference, &fa), "دیروز");
    assert_eq!(describe(&pd(1403, 1, 11), &reference, &fa), "فردا");
    assert_eq!(describe(&pd(1403, 1, 8), &reference, &fa), "پریروز");
    assert_eq!(describe(&pd(1403, 1, 12), &reference, &fa), "پس‌فردا");
}

#[test]
fn test_persian_larger_distances() {
    let reference = pd(1403, 6, 1);
    let fa = Locale::persian();
    assert_eq!(describe(&pd(1403, 5, 29), &reference, &fa), "۳ روز پیش");
    assert_eq!(describe(&pd(1403, 6, 11), &reference, &fa), "۱ هفته دیگر");
    assert_eq!(describe(&pd(1403, 4, 16), &reference, &fa), "۱ ماه پیش");
    assert_eq!(describe(&pd(1401, 6, 1), &reference, &fa), "۲ سال پیش");
}

#[test]
fn test_english_phrases() {
    let reference = pd(1403, 6, 1);
    let en = Locale::english();
    assert_eq!(describe(&reference, &reference, &en), "today");
    assert_eq!(describe(&pd(1403, 5, 31), &reference, &en), "yesterday");
    assert_eq!(describe(&pd(1403, 6, 2), &reference, &en), "tomorrow");
    assert_eq!(describe(&pd(1403, 5, 29), &reference, &en), "3 days ago");
    assert_eq!(describe(&pd(1403, 6, 21), &reference, &en), "in 2 weeks");
    assert_eq!(describe(&pd(1404, 6, 1), &reference, &en), "in 1 year");
}

#[test]
fn test_mixed_calendars() {
    // 1 Ramadan 1446 is 1403/12/11
    let ramadan = HijriDate::new(1446, 9, 1).unwrap();
    let reference = pd(1403, 12, 11);
    assert_eq!(describe(&ramadan, &reference, &Locale::english()), "today");
}

#[test]
fn test_short_form() {
    let reference = pd(1403, 6, 1);
    assert_eq!(describe_short(&reference, &reference), "امروز");
    assert_eq!(describe_short(&pd(1403, 5, 29), &reference), "۳ر");
    assert_eq!(describe_short(&pd(1403, 6, 15), &reference), "+۲ه");
    assert_eq!(describe_short(&pd(1402, 6, 1), &reference), "۱س");
}

fn pdt(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> PersianDateTime {
    PersianDateTime::from_ymd_hms(year, month, day, hour, minute, 0).unwrap()
}

#[test]
fn test_date_time_within_a_day() {
    let reference = pdt(1403, 6, 1, 12, 0);
    let fa = Locale::persian();
    let just_before = reference.minus_seconds(30).unwrap();
    assert_eq!(describe_date_time(&just_before, &reference, &fa), "همین الان");
    assert_eq!(describe_date_time(&pdt(1403, 6, 1, 11, 55), &reference, &fa), "۵ دقیقه پیش");
    assert_eq!(describe_date_time(&pdt(1403, 6, 1, 12, 10), &reference, &fa), "۱۰ دقیقه دیگر");
    assert_eq!(describe_date_time(&pdt(1403, 6, 1, 9, 0), &reference, &fa), "۳ ساعت پیش");
}

#[test]
fn test_date_time_english() {
    let reference = pdt(1403, 6, 1, 12, 0);
    let en = Locale::english();
    assert_eq!(describe_date_time(&reference, &reference, &en), "just now");
    assert_eq!(describe_date_time(&pdt(1403, 6, 1, 11, 59), &reference, &en), "1 minute ago");
    assert_eq!(describe_date_time(&pdt(1403, 6, 1, 12, 10), &reference, &en), "in 10 minutes");
    assert_eq!(describe_date_time(&pdt(1403, 6, 1, 11, 0), &reference, &en), "1 hour ago");
    assert_eq!(describe_date_time(&pdt(1403, 6, 1, 15, 0), &reference, &en), "in 3 hours");
}

#[test]
fn test_date_time_falls_back_to_days() {
    let reference = pdt(1403, 6, 1, 12, 0);
    assert_eq!(
        describe_date_time(&pdt(1403, 5, 31, 10, 0), &reference, &Locale::persian()),
        "دیروز"
    );
    assert_eq!(
        describe_date_time(&pdt(1403, 5, 20, 12, 0), &reference, &Locale::english()),
        "1 week ago"
    );
}
