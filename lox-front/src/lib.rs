//! Lexer and expression parser for Lox source.
//!
//! Source text goes through the [`Lexer`], which yields line-tagged tokens
//! and reports bad input as error tokens without stopping. The [`Parser`]
//! pulls those tokens and builds an [`Ast`] of expressions, stopping at the
//! first [`ParseError`]. Rendering the AST with `Display` gives the
//! parenthesized prefix form.

pub mod error;
pub mod ir;
pub mod parser;
pub mod span;

pub use error::{FrontendError, LexError, ParseError};
pub use ir::{Ast, BinaryOperator, Expr, Literal, Source, UnaryOperator};
pub use parser::{
    Lexer, Parser, StreamConfig, Token, TokenKind, TokenStream, parse, parse_concurrent,
    tokenize,
};
pub use span::Span;
