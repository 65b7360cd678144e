pub use location::Location;
pub use operators::{
    is_operator_char, BinaryOperator, BINARY_OPERATORS, MAX_PRECEDENCE,
    OPERATOR_CHARS,
};

mod location;
mod operators;
