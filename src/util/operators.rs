//! Binary operators used in the scanner, parser, and evaluator along
//! with the symbol table used to look them up.
use std::collections::HashMap;
use std::fmt;
use std::str;

use once_cell::sync::Lazy;

/// Lowest binding precedence. Precedence levels run from 1 (binds
/// tightest) up to and including this value.
pub const MAX_PRECEDENCE: u8 = 2;

/// Chars that may appear in an operator symbol. A contiguous run of
/// these is scanned as a single symbol.
pub const OPERATOR_CHARS: [char; 4] = ['+', '-', '*', '/'];

/// Map of operator symbols to their respective operators. Built once
/// and never modified afterwards.
pub static BINARY_OPERATORS: Lazy<HashMap<&'static str, BinaryOperator>> =
    Lazy::new(|| {
        use BinaryOperator::*;
        [Mul, Div, Add, Sub].iter().map(|op| (op.as_str(), *op)).collect()
    });

pub fn is_operator_char(c: char) -> bool {
    OPERATOR_CHARS.contains(&c)
}

/// Binary operators.
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub enum BinaryOperator {
    Mul,
    Div,
    Add,
    Sub,
}

impl BinaryOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
        }
    }

    #[rustfmt::skip]
    /// Return the precedence of the operator. Lower numbers bind more
    /// tightly.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Mul            // a * b
            | Self::Div => 1,    // a / b (truncating)
            Self::Add            // a + b
            | Self::Sub => 2,    // a - b
        }
    }

    /// Apply the operator to the specified operands. `None` indicates
    /// overflow or, for division, a zero divisor.
    pub fn apply(&self, a: i64, b: i64) -> Option<i64> {
        match self {
            Self::Mul => a.checked_mul(b),
            Self::Div => a.checked_div(b),
            Self::Add => a.checked_add(b),
            Self::Sub => a.checked_sub(b),
        }
    }
}

impl str::FromStr for BinaryOperator {
    type Err = String;

    fn from_str(op: &str) -> Result<Self, Self::Err> {
        match BINARY_OPERATORS.get(op) {
            Some(op) => Ok(*op),
            None => Err(format!("Unknown binary operator: {op}")),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
