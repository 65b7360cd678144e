use crate::ast::Expr;
use crate::util::BinaryOperator;

use super::{EvalErr, EvalErrKind, EvalResult};

/// Evaluate an expression tree. Evaluation has no side effects, so the
/// same tree always produces the same result.
pub fn evaluate(expr: &Expr) -> EvalResult {
    match expr {
        Expr::Int(value) => Ok(*value),
        Expr::BinaryOp(lhs, op, rhs) => {
            let lhs = evaluate(lhs)?;
            let rhs = evaluate(rhs)?;
            apply(lhs, *op, rhs)
        }
    }
}

fn apply(lhs: i64, op: BinaryOperator, rhs: i64) -> EvalResult {
    if op == BinaryOperator::Div && rhs == 0 {
        return Err(EvalErr::new(EvalErrKind::DivisionByZero));
    }
    op.apply(lhs, rhs)
        .ok_or_else(|| EvalErr::new(EvalErrKind::Overflow(lhs, op, rhs)))
}
