//! Token types for the date and time pattern lexer.

/// A token in a date pattern string.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Literal(char),
    EscapedChar(char),
    QuotedString(String),

    // Field letters, with the length of the run
    Year(usize),      // y
    Month(usize),     // M
    Day(usize),       // d
    Weekday(usize),   // E
    DayOfYear(usize), // D
    Quarter(usize),   // Q
    Hour(usize),      // H
    Minute(usize),    // m
    Second(usize),    // s

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
