//! Error types for date construction and parsing.

use thiserror::Error;

/// Errors raised when a date or time cannot be built from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date: {year}/{month}/{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("year {year} out of range (1-9999)")]
    YearOutOfRange { year: i64 },

    #[error("invalid time: {hour}:{minute}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: u32 },

    #[error("julian day number {jdn} out of range")]
    JdnOutOfRange { jdn: i64 },
}

/// Errors that can occur when parsing a date pattern or date text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("unexpected character at position {position}: found '{found}'")]
    UnexpectedChar { position: usize, found: char },

    #[error("unterminated quote at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("invalid pattern field at position {position}: {count} x '{letter}'")]
    InvalidPatternField {
        position: usize,
        letter: char,
        count: usize,
    },

    #[error("empty pattern")]
    EmptyPattern,

    #[error("cannot parse date from '{input}'")]
    InvalidInput { input: String },

    #[error("invalid number: '{input}'")]
    InvalidNumber { input: String },

    #[error(transparent)]
    Date(#[from] DateError),
}
