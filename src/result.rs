use std::fmt;

use crate::evaluator::{EvalErr, EvalErrKind};
use crate::parser::{ParseErr, ParseErrKind};
use crate::scanner::ScanErr;
use crate::util::BinaryOperator;

/// Result type used by the top level `solve` function.
pub type FormulaResult = Result<i64, FormulaErr>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormulaErr {
    pub kind: FormulaErrKind,
}

impl FormulaErr {
    pub fn new(kind: FormulaErrKind) -> Self {
        Self { kind }
    }

    /// Return the exit code a process should use when it fails with
    /// this error.
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            FormulaErrKind::InvalidToken(_) => 1,
            FormulaErrKind::MalformedFormula(_) => 2,
            FormulaErrKind::DivisionByZero => 3,
            FormulaErrKind::Overflow(..) => 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormulaErrKind {
    /// A char that can't start a token or an unknown operator symbol.
    InvalidToken(ScanErr),
    /// Input that doesn't follow the formula grammar.
    MalformedFormula(ParseErr),
    DivisionByZero,
    /// lhs, operator, rhs
    Overflow(i64, BinaryOperator, i64),
}

impl From<ParseErr> for FormulaErr {
    fn from(err: ParseErr) -> Self {
        let kind = match err.kind {
            ParseErrKind::ScanErr(scan_err) => FormulaErrKind::InvalidToken(scan_err),
            _ => FormulaErrKind::MalformedFormula(err),
        };
        Self::new(kind)
    }
}

impl From<EvalErr> for FormulaErr {
    fn from(err: EvalErr) -> Self {
        let kind = match err.kind {
            EvalErrKind::DivisionByZero => FormulaErrKind::DivisionByZero,
            EvalErrKind::Overflow(lhs, op, rhs) => FormulaErrKind::Overflow(lhs, op, rhs),
        };
        Self::new(kind)
    }
}

impl fmt::Display for FormulaErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for FormulaErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use FormulaErrKind::*;
        let msg = match self {
            InvalidToken(err) => format!("Invalid token: {err}"),
            MalformedFormula(err) => format!("Malformed formula: {err}"),
            DivisionByZero => "Division by zero".to_owned(),
            Overflow(lhs, op, rhs) => format!("Integer overflow: {lhs} {op} {rhs}"),
        };
        write!(f, "{msg}")
    }
}
