//! Persian and Arabic-Indic digit handling.
//!
//! Persian text uses the Extended Arabic-Indic digits U+06F0..U+06F9;
//! Arabic text uses U+0660..U+0669. Both are accepted wherever this crate
//! reads numbers.

use crate::error::ParseError;

const PERSIAN_ZERO: u32 = 0x06F0;
const ARABIC_ZERO: u32 = 0x0660;

/// Value of a Western, Persian or Arabic-Indic digit.
pub fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        '\u{06F0}'..='\u{06F9}' => Some(ch as u32 - PERSIAN_ZERO),
        '\u{0660}'..='\u{0669}' => Some(ch as u32 - ARABIC_ZERO),
        _ => None,
    }
}

fn persian_digit(value: u32) -> char {
    char::from_u32(PERSIAN_ZERO + value).unwrap_or('?')
}

/// Replace Western and Arabic-Indic digits with Persian digits.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|ch| match digit_value(ch) {
            Some(v) => persian_digit(v),
            None => ch,
        })
        .collect()
}

/// Replace Persian and Arabic-Indic digits with ASCII digits.
pub fn to_western_digits(text: &str) -> String {
    text.chars()
        .map(|ch| match digit_value(ch) {
            Some(v) => char::from(b'0' + v as u8),
            None => ch,
        })
        .collect()
}

pub fn contains_persian_digits(text: &str) -> bool {
    text.chars().any(|ch| ('\u{06F0}'..='\u{06F9}').contains(&ch))
}

pub fn contains_arabic_digits(text: &str) -> bool {
    text.chars().any(|ch| ('\u{0660}'..='\u{0669}').contains(&ch))
}

/// Zero-pad `value` to `width` digits and write it with Persian digits.
pub fn pad_persian(value: i64, width: usize) -> String {
    to_persian_digits(&format!("{:0width$}", value, width = width))
}

/// Parse an optionally signed integer written in any supported digit set.
pub fn parse_int(text: &str) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidNumber {
        input: text.to_string(),
    };
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() {
        return Err(invalid());
    }

    let mut value: i64 = 0;
    for ch in digits.chars() {
        let d = digit_value(ch).ok_or_else(invalid)?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(d as i64))
            .ok_or_else(invalid)?;
    }
    Ok(if negative { -value } else { value })
}

const ONES: [&str; 20] = [
    "", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه", "ده", "یازده", "دوازده",
    "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
];

const TENS: [&str; 10] = [
    "", "", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود",
];

const HUNDREDS: [&str; 10] = [
    "", "یکصد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
];

/// Scale words for each group of three digits.
const SCALES: [&str; 7] = [
    "",
    "هزار",
    "میلیون",
    "میلیارد",
    "تریلیون",
    "تریلیارد",
    "کوادریلیون",
];

/// Write `value` out in Persian words.
///
/// ```
/// use taqvim::numerals::to_words;
///
/// assert_eq!(to_words(1403), "یکهزار و چهارصد و سه");
/// assert_eq!(to_words(-21), "منفی بیست و یک");
/// ```
pub fn to_words(value: i64) -> String {
    if value == 0 {
        return "صفر".to_string();
    }
    let words = magnitude_words(value.unsigned_abs());
    if value < 0 {
        format!("منفی {}", words)
    } else {
        words
    }
}

fn magnitude_words(mut value: u64) -> String {
    let mut groups = Vec::new();
    let mut scale = 0;
    while value > 0 {
        let group = (value % 1000) as usize;
        if group > 0 {
            groups.push(match (group, scale) {
                (_, 0) => below_thousand(group),
                (1, 1) => "یکهزار".to_string(),
                _ => format!("{} {}", below_thousand(group), SCALES[scale]),
            });
        }
        value /= 1000;
        scale += 1;
    }
    groups.reverse();
    groups.join(" و ")
}

fn below_thousand(value: usize) -> String {
    let mut parts = Vec::new();
    if value >= 100 {
        parts.push(HUNDREDS[value / 100]);
    }
    let rest = value % 100;
    if rest >= 20 {
        parts.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            parts.push(ONES[rest % 10]);
        }
    } else if rest > 0 {
        parts.push(ONES[rest]);
    }
    parts.join(" و ")
}

/// Persian ordinal word: اول, دوم, سوم, چهارم, ..., بیست و سوم.
pub fn to_ordinal(value: u32) -> String {
    match value {
        1 => return "اول".to_string(),
        2 => return "دوم".to_string(),
        3 => return "سوم".to_string(),
        _ => {}
    }

    let words = to_words(value as i64);
    if let Some(stem) = words.strip_suffix("سه") {
        format!("{}سوم", stem)
    } else if words.ends_with('ی') {
        // سی takes a joined ام
        format!("{}\u{200c}ام", words)
    } else {
        format!("{}م", words)
    }
}
