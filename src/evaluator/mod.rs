pub use evaluator::evaluate;
pub use result::{EvalErr, EvalErrKind, EvalResult};

mod evaluator;
mod result;

#[cfg(test)]
mod tests;
