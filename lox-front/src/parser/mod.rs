pub mod lexer;
pub mod parser;
pub mod precedence;
pub mod stream;
pub mod token;

use crate::error::{FrontendError, ParseError};
use crate::ir::ast;

pub use lexer::{Lexer, tokenize};
pub use parser::{Parser, parse_tokens};
pub use stream::{StreamConfig, TokenStream};
pub use token::{Token, TokenKind};

/// Main entry point: source text to AST, with the lexer driven on demand.
pub fn parse(source: &str) -> Result<ast::Ast, ParseError> {
    Parser::new(Lexer::new(source)).parse()
}

/// Same result as [`parse`], with the lexer running on its own thread.
pub fn parse_concurrent(source: &str, config: StreamConfig) -> Result<ast::Ast, FrontendError> {
    let tokens = stream::spawn(source.to_owned(), config)?;
    let program = Parser::new(tokens).parse()?;
    Ok(program)
}
