//! Parser for date and time pattern strings.

pub mod lexer;
pub mod tokens;

use crate::ast::{DateField, DatePattern, PatternPart};
use crate::error::ParseError;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Parse a pattern string into a DatePattern.
pub fn parse(pattern: &str) -> Result<DatePattern, ParseError> {
    if pattern.is_empty() {
        return Err(ParseError::EmptyPattern);
    }

    let tokens = Lexer::new(pattern).tokenize()?;
    let mut parts: Vec<PatternPart> = Vec::new();

    for spanned in &tokens {
        let text = match &spanned.token {
            Token::Eof => break,
            Token::Literal(ch) | Token::EscapedChar(ch) => ch.to_string(),
            Token::QuotedString(s) => s.clone(),
            _ => {
                parts.push(PatternPart::Field(field_for(pattern, spanned)?));
                continue;
            }
        };

        // Adjacent literals merge into one part
        match parts.last_mut() {
            Some(PatternPart::Literal(prev)) => prev.push_str(&text),
            _ if text.is_empty() => {}
            _ => parts.push(PatternPart::Literal(text)),
        }
    }

    Ok(DatePattern { parts })
}

/// Map a field-letter run to its field, rejecting unsupported lengths.
fn field_for(pattern: &str, spanned: &SpannedToken) -> Result<DateField, ParseError> {
    let invalid = |letter: char, count: usize| ParseError::InvalidPatternField {
        position: spanned.start,
        letter,
        count,
    };

    match spanned.token {
        Token::Year(1) => Ok(DateField::Year),
        Token::Year(2) => Ok(DateField::Year2),
        Token::Year(4) => Ok(DateField::Year4),
        Token::Year(n) => Err(invalid('y', n)),

        Token::Month(1) => Ok(DateField::Month),
        Token::Month(2) => Ok(DateField::Month2),
        Token::Month(3) => Ok(DateField::MonthAbbr),
        Token::Month(4) => Ok(DateField::MonthFull),
        Token::Month(n) => Err(invalid('M', n)),

        Token::Day(1) => Ok(DateField::Day),
        Token::Day(2) => Ok(DateField::Day2),
        Token::Day(n) => Err(invalid('d', n)),

        Token::Weekday(1..=3) => Ok(DateField::WeekdayShort),
        Token::Weekday(4) => Ok(DateField::WeekdayFull),
        Token::Weekday(n) => Err(invalid('E', n)),

        Token::DayOfYear(n @ 1..=3) => Ok(DateField::DayOfYear(n as u8)),
        Token::DayOfYear(n) => Err(invalid('D', n)),

        Token::Quarter(1) => Ok(DateField::Quarter),
        Token::Quarter(n) => Err(invalid('Q', n)),

        Token::Hour(1) => Ok(DateField::Hour),
        Token::Hour(2) => Ok(DateField::Hour2),
        Token::Hour(n) => Err(invalid('H', n)),

        Token::Minute(1) => Ok(DateField::Minute),
        Token::Minute(2) => Ok(DateField::Minute2),
        Token::Minute(n) => Err(invalid('m', n)),

        Token::Second(1) => Ok(DateField::Second),
        Token::Second(2) => Ok(DateField::Second2),
        Token::Second(n) => Err(invalid('s', n)),

        _ => Err(ParseError::UnexpectedChar {
            position: spanned.start,
            found: pattern[spanned.start..].chars().next().unwrap_or('\0'),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_fields() {
        let pattern = parse("HH:mm:s").unwrap();
        assert_eq!(
            pattern.parts,
            vec![
                PatternPart::Field(DateField::Hour2),
                PatternPart::Literal(":".to_string()),
                PatternPart::Field(DateField::Minute2),
                PatternPart::Literal(":".to_string()),
                PatternPart::Field(DateField::Second),
            ]
        );
        assert!(parse("HHH").is_err());
    }

    #[test]
    fn test_literals_merge() {
        let pattern = parse("dd 'of' MMMM").unwrap();
        assert_eq!(
            pattern.parts,
            vec![
                PatternPart::Field(DateField::Day2),
                PatternPart::Literal(" of ".to_string()),
                PatternPart::Field(DateField::MonthFull),
            ]
        );
    }
}
