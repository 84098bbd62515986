use std::fmt;

use strum::{AsRefStr, Display};

use crate::error::LexError;
use crate::span::Span;

/// Token kinds. `Display` gives the upper-snake name used by the token
/// listing, e.g. `LEFT_PAREN` or `EOF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,

    /// Kind carried by error tokens; means nothing on its own.
    Invalid,
}

impl TokenKind {
    /// Reserved word lookup for an identifier-shaped run.
    pub fn keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "and" => Self::And,
            "class" => Self::Class,
            "else" => Self::Else,
            "false" => Self::False,
            "for" => Self::For,
            "fun" => Self::Fun,
            "if" => Self::If,
            "nil" => Self::Nil,
            "or" => Self::Or,
            "print" => Self::Print,
            "return" => Self::Return,
            "super" => Self::Super,
            "this" => Self::This,
            "true" => Self::True,
            "var" => Self::Var,
            "while" => Self::While,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::And
                | Self::Class
                | Self::Else
                | Self::False
                | Self::For
                | Self::Fun
                | Self::If
                | Self::Nil
                | Self::Or
                | Self::Print
                | Self::Return
                | Self::Super
                | Self::This
                | Self::True
                | Self::Var
                | Self::While
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the token.
    pub lexeme: String,
    pub span: Span,
    /// Normalized value of STRING and NUMBER tokens.
    pub literal: Option<String>,
    /// Set only on tokens standing for unlexable input.
    pub error: Option<LexError>,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
            literal: None,
            error: None,
        }
    }

    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    pub fn error(error: LexError, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind: TokenKind::Invalid,
            lexeme: lexeme.into(),
            span,
            literal: None,
            error: Some(error),
        }
    }

    pub fn eof(line: usize, offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(line, offset, offset))
    }

    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn is_eof(&self) -> bool {
        self.error.is_none() && self.kind == TokenKind::Eof
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// One line of the token listing: `KIND lexeme literal`, with `null` for
/// tokens that carry no literal.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "{error}");
        }
        let literal = self.literal.as_deref().unwrap_or("null");
        write!(f, "{} {} {}", self.kind, self.lexeme, literal)
    }
}
