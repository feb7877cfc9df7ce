//! Predefined date and time patterns and their names.
//!
//! These cover the layouts commonly used for Persian dates: slash or dash
//! separated numerals, compact numerals, written-out month names and a
//! 24-hour clock.

/// `1403/01/15`
pub const ISO_DATE: &str = "yyyy/MM/dd";
/// `1403-01-15`
pub const ISO_DATE_DASH: &str = "yyyy-MM-dd";
/// `14030115`
pub const BASIC_DATE: &str = "yyyyMMdd";
/// `03/01/15`
pub const SHORT_DATE: &str = "yy/MM/dd";
/// `15 فروردین 1403`
pub const LONG_DATE: &str = "d MMMM yyyy";
/// `چهارشنبه 15 فروردین 1403`
pub const FULL_DATE: &str = "EEEE d MMMM yyyy";
/// `15 فروردین`
pub const DAY_MONTH: &str = "d MMMM";
/// `فروردین 1403`
pub const MONTH_YEAR: &str = "MMMM yyyy";
/// `14:05`
pub const TIME_SHORT: &str = "HH:mm";
/// `14:05:09`
pub const TIME_LONG: &str = "HH:mm:ss";
/// `1403/01/15 14:05`
pub const DATE_TIME: &str = "yyyy/MM/dd HH:mm";
/// `1403/01/15 14:05:09`
pub const DATE_TIME_FULL: &str = "yyyy/MM/dd HH:mm:ss";

/// Get the pattern string for a predefined pattern name.
///
/// Names are matched case-insensitively.
///
/// # Examples
/// ```
/// use taqvim::pattern_from_name;
///
/// assert_eq!(pattern_from_name("iso_date"), Some("yyyy/MM/dd"));
/// assert_eq!(pattern_from_name("FULL_DATE"), Some("EEEE d MMMM yyyy"));
/// assert_eq!(pattern_from_name("date_time"), Some("yyyy/MM/dd HH:mm"));
/// assert_eq!(pattern_from_name("unknown"), None);
/// ```
pub fn pattern_from_name(name: &str) -> Option<&'static str> {
    let pattern = match name.to_ascii_uppercase().as_str() {
        "ISO_DATE" => ISO_DATE,
        "ISO_DATE_DASH" => ISO_DATE_DASH,
        "BASIC_DATE" => BASIC_DATE,
        "SHORT_DATE" => SHORT_DATE,
        "LONG_DATE" => LONG_DATE,
        "FULL_DATE" => FULL_DATE,
        "DAY_MONTH" => DAY_MONTH,
        "MONTH_YEAR" => MONTH_YEAR,
        "TIME_SHORT" => TIME_SHORT,
        "TIME_LONG" => TIME_LONG,
        "DATE_TIME" => DATE_TIME,
        "DATE_TIME_FULL" => DATE_TIME_FULL,
        _ => return None,
    };
    Some(pattern)
}

/// All predefined patterns, in the order listed above.
pub const ALL_PATTERNS: [&str; 12] = [
    ISO_DATE,
    ISO_DATE_DASH,
    BASIC_DATE,
    SHORT_DATE,
    LONG_DATE,
    FULL_DATE,
    DAY_MONTH,
    MONTH_YEAR,
    TIME_SHORT,
    TIME_LONG,
    DATE_TIME,
    DATE_TIME_FULL,
];
