use crate::parser::token::{Token, TokenKind};

/// Parser output: top-level expressions in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ast {
    pub nodes: Vec<Expr>,
}

impl Ast {
    pub fn new(nodes: Vec<Expr>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Literal(Literal),
    /// `( ... )`, never empty
    Group(Vec<Expr>),
    /// -x, !x
    Unary {
        op: UnaryOperator,
        operand: Box<Expr>,
    },
    /// a + b
    Binary {
        left: Box<Expr>,
        op: BinaryOperator,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Normalized text, always with a decimal point: `61.0`, `3.5`
    Number(String),
    /// Contents without the quotes
    String(String),
    /// Keywords and identifiers, as written
    Keyword(String),
}

impl Literal {
    /// Leaf for tokens that stand on their own; `None` for operators and
    /// punctuation.
    pub fn from_token(token: &Token) -> Option<Self> {
        let literal = || token.literal.clone().unwrap_or_default();
        match token.kind {
            TokenKind::Number => Some(Self::Number(literal())),
            TokenKind::String => Some(Self::String(literal())),
            TokenKind::Identifier => Some(Self::Keyword(token.lexeme.clone())),
            kind if kind.is_keyword() => Some(Self::Keyword(token.lexeme.clone())),
            _ => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Number(text) | Self::String(text) | Self::Keyword(text) => text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate, // -
    Not,    // !
}

impl UnaryOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(Self::Negate),
            TokenKind::Bang => Some(Self::Not),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,          // +
    Subtract,     // -
    Multiply,     // *
    Divide,       // /
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=
    Equal,        // ==
    NotEqual,     // !=
}

impl BinaryOperator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Subtract,
            TokenKind::Star => Self::Multiply,
            TokenKind::Slash => Self::Divide,
            TokenKind::Less => Self::Less,
            TokenKind::LessEqual => Self::LessEqual,
            TokenKind::Greater => Self::Greater,
            TokenKind::GreaterEqual => Self::GreaterEqual,
            TokenKind::EqualEqual => Self::Equal,
            TokenKind::BangEqual => Self::NotEqual,
            _ => return None,
        };
        Some(op)
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Binding strength; higher binds tighter. All levels are
    /// left-associative.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Equal | Self::NotEqual => 1,
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual => 2,
            Self::Add | Self::Subtract => 3,
            Self::Multiply | Self::Divide => 4,
        }
    }
}

impl Expr {
    pub fn number(text: impl Into<String>) -> Self {
        Self::Literal(Literal::Number(text.into()))
    }

    pub fn string(text: impl Into<String>) -> Self {
        Self::Literal(Literal::String(text.into()))
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Self::Literal(Literal::Keyword(text.into()))
    }
}
