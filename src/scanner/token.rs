use std::fmt;

use crate::util::{BinaryOperator, Location};

/// Formula tokens. End of input isn't a token; the scanner signals it
/// by returning `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    LParen, // (
    RParen, // )

    Int(i64), // 1, 555, 123456789

    Op(BinaryOperator), // * / + -
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Op(op) => write!(f, "{}", op.as_str()),
        }
    }
}

// A token with its start and end locations in the formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenWithLocation {
    pub token: Token,
    pub start: Location,
    pub end: Location,
}

impl TokenWithLocation {
    pub fn new(token: Token, start: Location, end: Location) -> Self {
        Self { token, start, end }
    }
}

impl fmt::Display for TokenWithLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {} -> {}", self.token, self.start.col, self.end.col)
    }
}
