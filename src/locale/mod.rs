//! Locale data for month and weekday names.

mod builtin;

pub use builtin::Locale;
pub(crate) use builtin::{
    GREGORIAN_MONTHS_EN, GREGORIAN_MONTHS_FA, HIJRI_MONTHS_AR, HIJRI_MONTHS_EN, HIJRI_MONTHS_FA,
    PERSIAN_MONTHS_EN, PERSIAN_MONTHS_FA, WEEKDAYS_EN, WEEKDAYS_FA,
};
