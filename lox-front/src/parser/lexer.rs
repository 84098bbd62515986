use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

use tracing::{debug, trace};

use super::token::{Token, TokenKind};
use crate::error::LexError;
use crate::span::Span;

/// Scans everything up front. Lexical errors stay in the returned vector as
/// error tokens.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Pull-based scanner: every `next()` scans exactly one token. The sequence
/// ends with a single EOF token and is exhausted afterwards.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    /// Byte offset where the current token starts.
    start: usize,
    line: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            start: 0,
            line: 1,
            finished: false,
        }
    }

    /// The line the scanner is currently on.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Scans from the already consumed `ch`. Returns `None` for input that
    /// produces no token (whitespace, newlines, comments).
    fn scan_token(&mut self, ch: char) -> Option<Token> {
        let token = match ch {
            '(' => self.make(TokenKind::LeftParen),
            ')' => self.make(TokenKind::RightParen),
            '{' => self.make(TokenKind::LeftBrace),
            '}' => self.make(TokenKind::RightBrace),
            ',' => self.make(TokenKind::Comma),
            '.' => self.make(TokenKind::Dot),
            '-' => self.make(TokenKind::Minus),
            '+' => self.make(TokenKind::Plus),
            ';' => self.make(TokenKind::Semicolon),
            '*' => self.make(TokenKind::Star),
            '!' => self.make_pair('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.make_pair('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.make_pair('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.make_pair('=', TokenKind::GreaterEqual, TokenKind::Greater),
            '/' => {
                if self.matches('/') {
                    // comment runs up to the newline, which is left for the main loop
                    while self.chars.next_if(|&(_, c)| c != '\n').is_some() {}
                    return None;
                }
                self.make(TokenKind::Slash)
            }
            ' ' | '\t' | '\r' => return None,
            '\n' => {
                self.line += 1;
                return None;
            }
            '"' => self.string(),
            '0'..='9' => self.number(),
            c if is_alpha(c) => self.identifier(),
            c => self.error(format!("Unexpected character: {c}")),
        };
        Some(token)
    }

    fn string(&mut self) -> Token {
        let start_line = self.line;
        loop {
            match self.advance() {
                Some('"') => break,
                Some('\n') => self.line += 1,
                Some(_) => {}
                None => return self.error("Unterminated string."),
            }
        }

        let lexeme = self.lexeme();
        let content = &lexeme[1..lexeme.len() - 1];
        Token::new(TokenKind::String, lexeme, self.span(start_line)).with_literal(content)
    }

    fn number(&mut self) -> Token {
        self.advance_digits();
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.advance_digits();
        }

        let lexeme = self.lexeme();
        Token::new(TokenKind::Number, lexeme, self.span(self.line))
            .with_literal(normalize_number(lexeme))
    }

    fn identifier(&mut self) -> Token {
        while self.chars.next_if(|&(_, c)| is_alpha_numeric(c)).is_some() {}
        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make(kind)
    }

    fn advance(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn advance_digits(&mut self) {
        while self.chars.next_if(|&(_, c)| c.is_ascii_digit()).is_some() {}
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut ahead = self.chars.clone();
        ahead.next();
        ahead.next().map(|(_, c)| c)
    }

    fn matches(&mut self, expected: char) -> bool {
        self.chars.next_if(|&(_, c)| c == expected).is_some()
    }

    /// Byte offset of the next unconsumed character.
    fn offset(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.source.len(), |&(index, _)| index)
    }

    fn lexeme(&mut self) -> &'a str {
        let source = self.source;
        let end = self.offset();
        &source[self.start..end]
    }

    fn span(&mut self, line: usize) -> Span {
        let end = self.offset();
        Span::new(line, self.start, end)
    }

    fn make(&mut self, kind: TokenKind) -> Token {
        let lexeme = self.lexeme();
        Token::new(kind, lexeme, self.span(self.line))
    }

    fn make_pair(&mut self, second: char, pair: TokenKind, single: TokenKind) -> Token {
        if self.matches(second) {
            self.make(pair)
        } else {
            self.make(single)
        }
    }

    fn error(&mut self, message: impl Into<String>) -> Token {
        let error = LexError::new(self.line, message);
        debug!(line = error.line, message = %error.message, "lexical error");
        let lexeme = self.lexeme();
        Token::error(error, lexeme, self.span(self.line))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        loop {
            self.start = self.offset();
            let Some(ch) = self.advance() else {
                self.finished = true;
                trace!(line = self.line, "end of input");
                return Some(Token::eof(self.line, self.source.len()));
            };

            if let Some(token) = self.scan_token(ch) {
                trace!(kind = %token.kind, line = token.line(), lexeme = %token.lexeme, "token");
                return Some(token);
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Number literal text always has a decimal point and no trailing zero
/// digits past the first one: `61` -> `61.0`, `61.900` -> `61.9`.
pub fn normalize_number(lexeme: &str) -> String {
    match lexeme.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                format!("{whole}.0")
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => format!("{lexeme}.0"),
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_alpha_numeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}
