//! Floor division helpers.
//!
//! Calendar arithmetic must round towards negative infinity so that dates
//! before an epoch (negative day counts) land in the right cycle. Rust's
//! `/` and `%` truncate towards zero, so every division in the conversion
//! engine goes through these two functions.

/// Returns `floor(a / b)` for `b > 0`.
#[inline]
pub const fn floor_div(a: i64, b: i64) -> i64 {
    a.div_euclid(b)
}

/// Returns the remainder of `a / b` in `[0, b)` for `b > 0`.
#[inline]
pub const fn floor_mod(a: i64, b: i64) -> i64 {
    a.rem_euclid(b)
}

/// Narrows a day count to `u32`, saturating at both ends.
#[inline]
pub const fn saturate_u32(value: i64) -> u32 {
    if value < 0 {
        0
    } else if value > u32::MAX as i64 {
        u32::MAX
    } else {
        value as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div_negative() {
        assert_eq!(floor_div(7, 2), 3);
        assert_eq!(floor_div(-7, 2), -4);
        assert_eq!(floor_div(-1, 33), -1);
        assert_eq!(floor_div(0, 5), 0);
    }

    #[test]
    fn test_floor_mod_range() {
        assert_eq!(floor_mod(7, 3), 1);
        assert_eq!(floor_mod(-7, 3), 2);
        assert_eq!(floor_mod(-33, 33), 0);
        for a in -100..100 {
            let r = floor_mod(a, 7);
            assert!((0..7).contains(&r));
            assert_eq!(floor_div(a, 7) * 7 + r, a);
        }
    }

    #[test]
    fn test_saturate_u32() {
        assert_eq!(saturate_u32(-30), 0);
        assert_eq!(saturate_u32(367), 367);
        assert_eq!(saturate_u32(i64::MAX), u32::MAX);
    }
}
