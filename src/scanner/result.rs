use std::fmt;

use crate::util::Location;

use super::TokenWithLocation;

pub type ScanResult = Result<TokenWithLocation, ScanErr>;
pub type ScanTokensResult = Result<Vec<TokenWithLocation>, ScanErr>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanErr {
    pub kind: ScanErrKind,
    pub location: Location,
}

impl ScanErr {
    pub fn new(kind: ScanErrKind, location: Location) -> Self {
        Self { kind, location }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanErrKind {
    UnexpectedCharacter(char),
    UnknownOperator(String),
    IntLiteralOutOfRange(String),
}

impl fmt::Display for ScanErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.location)
    }
}

impl fmt::Display for ScanErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ScanErrKind::*;
        let msg = match self {
            UnexpectedCharacter(c) => format!("Unexpected character: {c:?}"),
            UnknownOperator(symbol) => format!("Unknown operator: {symbol}"),
            IntLiteralOutOfRange(digits) => {
                format!("Integer literal out of range: {digits}")
            }
        };
        write!(f, "{msg}")
    }
}
