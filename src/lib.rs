//! # Formula
//!
//! Evaluates integer arithmetic formulas such as `(4 + 5) * 6 / 3`.
//!
//! - Operators: `*`, `/` (truncating), `+`, `-`. `*` and `/` bind more
//!   tightly than `+` and `-`. Operators at the same level are
//!   left-associative.
//! - Parentheses group sub-formulas to any depth.
//! - Operands are non-negative decimal literals that fit in an `i64`.
//!   There's no unary minus; `-1` is malformed.
//! - Spaces between tokens are ignored.
//!
//! ```
//! assert_eq!(formula::solve("4 + 5 * 6 / 3"), Ok(14));
//! assert!(formula::solve("1 +").is_err());
//! ```
pub use result::{FormulaErr, FormulaErrKind, FormulaResult};

pub mod ast;
pub mod driver;
pub mod evaluator;
pub mod parser;
pub mod repl;
pub mod result;
pub mod scanner;
pub mod util;


/// Scan, parse, and evaluate the specified formula.
pub fn solve(text: &str) -> FormulaResult {
    let expr = parser::parse_text(text)?;
    let value = evaluator::evaluate(&expr)?;
    Ok(value)
}
