//! Date and time rendering engine

mod date;

pub(crate) use date::format_date;

use crate::numerals::to_persian_digits;
use crate::options::Digits;

/// Write `value` zero-padded to `width` digits in the chosen digit set.
///
/// Negative values keep their sign in front of the padding.
pub(crate) fn format_number(value: i64, width: usize, digits: Digits) -> String {
    let text = if value < 0 {
        format!("-{:0width$}", value.unsigned_abs(), width = width)
    } else {
        format!("{:0width$}", value, width = width)
    };
    match digits {
        Digits::Western => text,
        Digits::Persian => to_persian_digits(&text),
    }
}
