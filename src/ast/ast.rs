use crate::util::BinaryOperator;

/// An expression tree. Each binary op exclusively owns both of its
/// operands, so a tree has no sharing and no cycles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Int(i64),
    BinaryOp(Box<Expr>, BinaryOperator, Box<Expr>),
}

impl Expr {
    pub fn new_int(value: i64) -> Self {
        Self::Int(value)
    }

    pub fn new_binary_op(lhs: Expr, op: BinaryOperator, rhs: Expr) -> Self {
        Self::BinaryOp(Box::new(lhs), op, Box::new(rhs))
    }

    /// Return the number of nodes in the tree (leaves included).
    pub fn size(&self) -> usize {
        match self {
            Self::Int(_) => 1,
            Self::BinaryOp(lhs, _, rhs) => 1 + lhs.size() + rhs.size(),
        }
    }

    /// Return the depth of the tree. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Int(_) => 1,
            Self::BinaryOp(lhs, _, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }
}
