pub mod ast;
pub mod printer;

pub use ast::{Ast, BinaryOperator, Expr, Literal, UnaryOperator};
pub use printer::Source;
