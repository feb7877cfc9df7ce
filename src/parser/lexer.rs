//! Lexer for tokenizing date and time pattern strings.
//!
//! Runs of the same field letter (`yyyy`, `MM`, `HH`) become one token carrying
//! the run length. Other special cases:
//! - Quoted text ('de') becomes a QuotedString token; '' inside or outside
//!   quotes is a literal apostrophe
//! - Escaped characters (\y) become EscapedChar tokens
//! - Every other character is a literal

use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        let start = self.position;
        let ch = match self.current_char() {
            Some(ch) => ch,
            None => {
                return Ok(SpannedToken {
                    token: Token::Eof,
                    start,
                    end: start,
                })
            }
        };

        let token = match ch {
            '\'' => self.lex_quoted_string()?,
            '\\' => self.lex_escaped_char()?,

            'y' => Token::Year(self.count_run(ch)),
            'M' => Token::Month(self.count_run(ch)),
            'd' => Token::Day(self.count_run(ch)),
            'E' => Token::Weekday(self.count_run(ch)),
            'D' => Token::DayOfYear(self.count_run(ch)),
            'Q' => Token::Quarter(self.count_run(ch)),
            'H' => Token::Hour(self.count_run(ch)),
            'm' => Token::Minute(self.count_run(ch)),
            's' => Token::Second(self.count_run(ch)),

            // Everything else is a literal
            _ => {
                self.advance();
                Token::Literal(ch)
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive copies of `letter`.
    /// Returns the count (always >= 1 since the current char matches).
    fn count_run(&mut self, letter: char) -> usize {
        let mut count = 0;
        while self.current_char() == Some(letter) {
            count += 1;
            self.advance();
        }
        count
    }

    /// Lexes quoted text ('...'). A doubled quote is an apostrophe.
    fn lex_quoted_string(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        // '' outside quotes
        if self.current_char() == Some('\'') {
            self.advance();
            return Ok(Token::Literal('\''));
        }

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('\'') => {
                    self.advance();
                    if self.current_char() == Some('\'') {
                        content.push('\'');
                        self.advance();
                    } else {
                        return Ok(Token::QuotedString(content));
                    }
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(ParseError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Lexes an escaped character (\x).
    fn lex_escaped_char(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        self.advance(); // Skip the backslash

        match self.current_char() {
            Some(ch) => {
                self.advance();
                Ok(Token::EscapedChar(ch))
            }
            None => Err(ParseError::UnexpectedChar {
                position: start,
                found: '\\',
            }),
        }
    }

    /// Returns all remaining tokens as a vector.
    /// This consumes the lexer.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.token, Token::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let mut lexer = Lexer::new("");
        assert!(matches!(lexer.next_token().unwrap().token, Token::Eof));
    }

    #[test]
    fn test_run_span() {
        let mut lexer = Lexer::new("yyyy/");
        let token = lexer.next_token().unwrap();
        assert_eq!(token.token, Token::Year(4));
        assert_eq!((token.start, token.end), (0, 4));
    }

    #[test]
    fn test_doubled_quote_inside_text() {
        let mut lexer = Lexer::new("'o''clock'");
        assert_eq!(
            lexer.next_token().unwrap().token,
            Token::QuotedString("o'clock".to_string())
        );
    }
}
