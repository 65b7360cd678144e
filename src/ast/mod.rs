pub use ast::Expr;

mod ast;
