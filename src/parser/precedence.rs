use std::mem;

use crate::ast::Expr;
use crate::util::{BinaryOperator, Location, MAX_PRECEDENCE};

use super::{ParseErr, ParseErrKind, ParseResult};

/// The operands of a single group (a parenthesized span or the whole
/// formula) along with the operators between them, collected in order
/// before precedence is resolved.
///
/// Once a push succeeds, there is exactly one more operand than there
/// are operators.
pub(super) struct Chain {
    operands: Vec<Expr>,
    operators: Vec<BinaryOperator>,
}

impl Chain {
    pub fn new() -> Self {
        Self { operands: vec![], operators: vec![] }
    }

    fn is_balanced(&self) -> bool {
        self.operators.len() + 1 == self.operands.len()
    }

    /// Add an operand. Fails if the previous item was also an operand.
    pub fn push_operand(&mut self, expr: Expr, location: Location) -> Result<(), ParseErr> {
        self.operands.push(expr);
        if self.is_balanced() {
            Ok(())
        } else {
            Err(ParseErr::new(ParseErrKind::TwoNumbersInARow, location))
        }
    }

    /// Add an operator. Fails if the previous item was also an operator
    /// or if there's no previous item.
    pub fn push_operator(
        &mut self,
        op: BinaryOperator,
        location: Location,
    ) -> Result<(), ParseErr> {
        self.operators.push(op);
        if self.operators.len() == self.operands.len() {
            Ok(())
        } else {
            Err(ParseErr::new(ParseErrKind::TwoOperatorsInARow, location))
        }
    }

    /// Combine the collected operands into a single expression tree,
    /// binding the tightest operators first. `end` is where the group
    /// ended and is used for error reporting.
    pub fn resolve(mut self, end: Location) -> ParseResult {
        if self.operands.is_empty() {
            return Err(ParseErr::new(ParseErrKind::EmptyGroup, end));
        }
        if !self.is_balanced() {
            return Err(ParseErr::new(ParseErrKind::OperatorAtEnd, end));
        }

        for precedence in 1..=MAX_PRECEDENCE {
            self.reduce(precedence);
        }

        debug_assert!(self.operators.is_empty());
        match self.operands.pop() {
            Some(expr) if self.operands.is_empty() => Ok(expr),
            _ => unreachable!("Operands remain after resolving all precedence levels"),
        }
    }

    /// Make one left to right pass over the chain, replacing each
    /// `lhs op rhs` where `op` has the specified precedence with a
    /// single binary op node. Scanning left to right makes operators at
    /// the same level left-associative: `8 - 3 - 2` => `(8 - 3) - 2`.
    fn reduce(&mut self, precedence: u8) {
        let operators = mem::take(&mut self.operators);
        let mut operands = mem::take(&mut self.operands).into_iter();

        let mut lhs = match operands.next() {
            Some(expr) => expr,
            None => return,
        };

        for (op, rhs) in operators.into_iter().zip(operands) {
            if op.precedence() == precedence {
                lhs = Expr::new_binary_op(lhs, op, rhs);
            } else {
                self.operands.push(lhs);
                self.operators.push(op);
                lhs = rhs;
            }
        }

        self.operands.push(lhs);
    }
}
