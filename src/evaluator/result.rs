use std::fmt;

use crate::util::BinaryOperator;

pub type EvalResult = Result<i64, EvalErr>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalErr {
    pub kind: EvalErrKind,
}

impl EvalErr {
    pub fn new(kind: EvalErrKind) -> Self {
        Self { kind }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrKind {
    DivisionByZero,
    /// lhs, operator, rhs
    Overflow(i64, BinaryOperator, i64),
}

impl fmt::Display for EvalErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl fmt::Display for EvalErrKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow(lhs, op, rhs) => {
                write!(f, "Integer overflow: {lhs} {op} {rhs}")
            }
        }
    }
}
