use std::fmt;

use crate::ast::Expr;
use crate::scanner::ScanErr;
use crate::util::Location;

pub type ParseResult = Result<Expr, ParseErr>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErr {
    pub kind: ParseErrKind,
    pub location: Location,
}

impl ParseErr {
    pub fn new(kind: ParseErrKind, location: Location) -> Self {
        Self { kind, location }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrKind {
    ScanErr(ScanErr),
    TwoNumbersInARow,
    TwoOperatorsInARow,
    OperatorAtEnd,
    EmptyGroup,
    UnclosedParen,
    UnexpectedClosingParen,
}

impl fmt::Display for ParseErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrKind::ScanErr(err) => write!(f, "{err}"),
            kind => write!(f, "{kind} at {}", self.location),
        }
    }
}

impl fmt::Display for ParseErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ScanErr(err) => return write!(f, "{}", err.kind),
            Self::TwoNumbersInARow => "Two numbers in a row",
            Self::TwoOperatorsInARow => "Two operators in a row",
            Self::OperatorAtEnd => "Operator at end of formula",
            Self::EmptyGroup => "Expected an expression",
            Self::UnclosedParen => "Unclosed parenthesis",
            Self::UnexpectedClosingParen => {
                "Closing parenthesis without opening parenthesis"
            }
        };
        write!(f, "{msg}")
    }
}
