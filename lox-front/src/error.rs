use thiserror::Error;

/// A problem found while scanning. Lexical errors never stop the lexer,
/// they travel inside error-tagged tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[line {line}] Error: {message}")]
pub struct LexError {
    pub line: usize,
    pub message: String,
}

impl LexError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// The first error met while parsing. Parsing stops right there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("[line {line}] Error: empty group")]
    EmptyGroup { line: usize },

    #[error("[line {line}] Error: unmatched '('")]
    UnmatchedParen { line: usize },

    #[error("[line {line}] Error: unexpected {lexeme}")]
    UnexpectedToken { line: usize, lexeme: String },

    #[error("[line {line}] Error: unexpected EOF")]
    UnexpectedEof { line: usize },

    /// An error-tagged token reached the parser.
    #[error(transparent)]
    Lexical(#[from] LexError),
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            Self::EmptyGroup { line }
            | Self::UnmatchedParen { line }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEof { line } => *line,
            Self::Lexical(error) => error.line,
        }
    }
}

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("Error reading file: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Scanning finished but reported this many lexical errors.
    #[error("{count} lexical error(s)")]
    Lexical { count: usize },
}

impl FrontendError {
    /// Process exit code for the command-line driver.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::IoError { .. } => 1,
            Self::Parse(_) | Self::Lexical { .. } => 65,
        }
    }
}
