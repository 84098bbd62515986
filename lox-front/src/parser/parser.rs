use tracing::debug;

use super::precedence;
use super::token::{Token, TokenKind};
use crate::error::ParseError;
use crate::ir::ast::{Ast, BinaryOperator, Expr, Literal, UnaryOperator};

pub fn parse_tokens<I>(tokens: I) -> Result<Ast, ParseError>
where
    I: IntoIterator<Item = Token>,
{
    Parser::new(tokens.into_iter()).parse()
}

/// Recursive-descent expression parser over any token source.
///
/// Tokens are pulled one at a time; a single put-back slot lets a token that
/// ended one parsing path be read again by the caller.
pub struct Parser<I> {
    tokens: I,
    peeked: Option<Token>,
    /// Line of the last token read, used if the source dries up without EOF.
    line: usize,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Self {
            tokens,
            peeked: None,
            line: 1,
        }
    }

    pub fn parse(mut self) -> Result<Ast, ParseError> {
        self.parse_program().inspect_err(|error| {
            debug!(line = error.line(), %error, "parse failed");
        })
    }

    fn parse_program(&mut self) -> Result<Ast, ParseError> {
        let mut nodes = Vec::new();

        loop {
            let token = self.next_token()?;
            if token.is_eof() {
                return Ok(Ast::new(nodes));
            }
            self.put_back(token);
            nodes.push(self.parse_expression()?);
        }
    }

    /// Called after `(` was consumed.
    fn parse_group(&mut self) -> Result<Expr, ParseError> {
        let mut children = Vec::new();

        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::RightParen if children.is_empty() => {
                    return Err(ParseError::EmptyGroup { line: token.line() });
                }
                TokenKind::RightParen => return Ok(Expr::Group(children)),
                TokenKind::Eof => {
                    return Err(ParseError::UnmatchedParen { line: token.line() });
                }
                _ => {
                    self.put_back(token);
                    children.push(self.parse_expression()?);
                }
            }
        }
    }

    /// Parses until `)` or EOF, both of which are left for the caller.
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut current: Option<Expr> = None;

        loop {
            let token = self.next_token()?;
            match token.kind {
                TokenKind::RightParen | TokenKind::Eof => {
                    let Some(expr) = current else {
                        return Err(unexpected(&token));
                    };
                    self.put_back(token);
                    return Ok(expr);
                }
                TokenKind::LeftParen if current.is_none() => {
                    current = Some(self.parse_group()?);
                }
                TokenKind::Bang | TokenKind::Minus if current.is_none() => {
                    let Some(op) = UnaryOperator::from_kind(token.kind) else {
                        return Err(unexpected(&token));
                    };
                    let operand = self.parse_expression()?;
                    current = Some(precedence::unary(op, operand));
                }
                kind => {
                    if let Some(op) = BinaryOperator::from_kind(kind) {
                        let Some(left) = current.take() else {
                            return Err(unexpected(&token));
                        };
                        let right = self.parse_expression()?;
                        current = Some(precedence::binary(op, left, right));
                    } else {
                        match Literal::from_token(&token) {
                            Some(leaf) if current.is_none() => current = Some(Expr::Literal(leaf)),
                            _ => return Err(unexpected(&token)),
                        }
                    }
                }
            }
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let token = match self.peeked.take() {
            Some(token) => token,
            // a source that dries up without EOF is treated as ending here
            None => self.tokens.next().unwrap_or_else(|| Token::eof(self.line, 0)),
        };

        if let Some(error) = &token.error {
            return Err(error.clone().into());
        }
        self.line = token.line();
        Ok(token)
    }

    fn put_back(&mut self, token: Token) {
        debug_assert!(self.peeked.is_none(), "put-back slot already taken");
        self.peeked = Some(token);
    }
}

fn unexpected(token: &Token) -> ParseError {
    match token.kind {
        TokenKind::Eof => ParseError::UnexpectedEof { line: token.line() },
        _ => ParseError::UnexpectedToken {
            line: token.line(),
            lexeme: token.lexeme.clone(),
        },
    }
}
