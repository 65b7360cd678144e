use crate::ast::Expr;
use crate::parser::parse_text;
use crate::util::BinaryOperator;

use super::*;

fn eval_text(text: &str) -> EvalResult {
    match parse_text(text) {
        Ok(expr) => evaluate(&expr),
        Err(err) => panic!("Parse failed unexpectedly: {:?}", err),
    }
}

#[test]
fn eval_int() {
    assert_eq!(evaluate(&Expr::new_int(42)), Ok(42));
}

#[test]
fn eval_binary_op() {
    let expr = Expr::new_binary_op(
        Expr::new_int(77),
        BinaryOperator::Div,
        Expr::new_int(7),
    );
    assert_eq!(evaluate(&expr), Ok(11));
}

#[test]
fn eval_left_to_right() {
    assert_eq!(eval_text("8 - 3 - 2"), Ok(3));
    assert_eq!(eval_text("64 / 4 / 2"), Ok(8));
}

#[test]
fn eval_precedence() {
    assert_eq!(eval_text("4 + 5 * 6 / 3"), Ok(14));
    assert_eq!(eval_text("(4 + 5) * 6 / 3"), Ok(18));
}

#[test]
fn eval_truncating_division() {
    assert_eq!(eval_text("7/2"), Ok(3));
    assert_eq!(eval_text("(0 - 7) / 2"), Ok(-3));
    assert_eq!(eval_text("7 / (0 - 2)"), Ok(-3));
}

#[test]
fn eval_division_by_zero() {
    let err = EvalErr::new(EvalErrKind::DivisionByZero);
    assert_eq!(eval_text("5/0"), Err(err.clone()));
    assert_eq!(eval_text("0/0"), Err(err.clone()));
    assert_eq!(eval_text("1 / (3 - 3)"), Err(err));
}

#[test]
fn eval_division_by_zero_in_unused_looking_branch() {
    // Both sides are always evaluated.
    let err = EvalErr::new(EvalErrKind::DivisionByZero);
    assert_eq!(eval_text("0 * (1 / 0)"), Err(err));
}

#[test]
fn eval_overflow() {
    let err = EvalErr::new(EvalErrKind::Overflow(
        i64::MAX,
        BinaryOperator::Add,
        1,
    ));
    assert_eq!(eval_text("9223372036854775807 + 1"), Err(err));
}

#[test]
fn eval_min_value_divided_by_negative_one() {
    let result = eval_text("(0 - 9223372036854775807 - 1) / (0 - 1)");
    assert_eq!(
        result,
        Err(EvalErr::new(EvalErrKind::Overflow(i64::MIN, BinaryOperator::Div, -1)))
    );
}
