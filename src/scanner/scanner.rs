use std::iter::Peekable;
use std::str::Chars;

use crate::util::{is_operator_char, Location, BINARY_OPERATORS};

use super::result::{ScanErr, ScanErrKind, ScanResult, ScanTokensResult};
use super::token::{Token, TokenWithLocation};

/// Create a scanner from the specified text, scan the text, and return
/// the resulting tokens or error.
pub fn scan_text(text: &str) -> ScanTokensResult {
    let scanner = Scanner::new(text);
    scanner.collect()
}

/// Scans a formula left to right, producing tokens on demand. The only
/// state is the scan position.
pub struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    /// Number of chars consumed so far. The location of the next char
    /// is one past this.
    col: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { chars: text.chars().peekable(), col: 0 }
    }

    /// Scan the next token. `Ok(None)` signals end of input.
    fn next_token(&mut self) -> Result<Option<TokenWithLocation>, ScanErr> {
        self.consume_whitespace();

        let start = self.location();

        let token = match self.next_char() {
            Some('(') => Token::LParen,
            Some(')') => Token::RParen,
            Some(c @ '0'..='9') => {
                let digits = self.read_digits(c);
                let value = digits.parse::<i64>().map_err(|_| {
                    ScanErr::new(ScanErrKind::IntLiteralOutOfRange(digits), start)
                })?;
                Token::Int(value)
            }
            Some(c) if is_operator_char(c) => {
                let symbol = self.read_operator(c);
                match BINARY_OPERATORS.get(symbol.as_str()) {
                    Some(op) => Token::Op(*op),
                    None => {
                        return Err(ScanErr::new(
                            ScanErrKind::UnknownOperator(symbol),
                            start,
                        ));
                    }
                }
            }
            Some(c) => {
                return Err(ScanErr::new(ScanErrKind::UnexpectedCharacter(c), start));
            }
            None => return Ok(None),
        };

        let token = TokenWithLocation::new(token, start, Location::new(self.col));
        log::trace!("TOKEN: {token}");
        Ok(Some(token))
    }

    /// Location of the next char (or of end of input).
    pub fn location(&self) -> Location {
        Location::new(self.col + 1)
    }

    /// Consume and return the next character.
    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.col += 1;
        Some(c)
    }

    /// Consume and return the next character if it matches the
    /// specified condition.
    fn next_char_if(&mut self, func: impl FnOnce(&char) -> bool) -> Option<char> {
        let c = self.chars.next_if(func)?;
        self.col += 1;
        Some(c)
    }

    /// Consume contiguous spaces. Other whitespace is *not* skipped.
    fn consume_whitespace(&mut self) {
        while self.next_char_if(|&c| c == ' ').is_some() {}
    }

    /// Read the maximal run of decimal digits starting with the
    /// specified digit.
    fn read_digits(&mut self, first_digit: char) -> String {
        let mut digits = first_digit.to_string();
        while let Some(digit) = self.next_char_if(|c| c.is_ascii_digit()) {
            digits.push(digit);
        }
        digits
    }

    /// Read the maximal run of operator chars starting with the
    /// specified char. The run may or may not be a known operator.
    fn read_operator(&mut self, first_char: char) -> String {
        let mut symbol = first_char.to_string();
        while let Some(c) = self.next_char_if(|&c| is_operator_char(c)) {
            symbol.push(c);
        }
        symbol
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScanResult;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
