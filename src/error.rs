use thiserror::Error;

use crate::lex::TokenKind;

/// An error that occurred while splitting the input into tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {character:?} at {position}")]
    UnexpectedCharacter { character: char, position: usize },
}

/// An error that occurred while matching the token stream against the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("unexpected {found} `{text}` at {position}, expected {expected}")]
    UnexpectedToken {
        found: TokenKind,
        text: String,
        position: usize,
        expected: &'static str,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },
    #[error("parentheses nested deeper than {limit} levels at {position}")]
    NestingTooDeep { position: usize, limit: usize },
}

impl SyntaxError {
    /// Position of the offending token, `None` if the input ended prematurely.
    pub fn position(&self) -> Option<usize> {
        match self {
            SyntaxError::UnexpectedToken { position, .. }
            | SyntaxError::NestingTooDeep { position, .. } => Some(*position),
            SyntaxError::UnexpectedEnd { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An error that occurred during tokenization.
    #[error("failed to tokenize: {0}")]
    Lex(#[from] LexError),

    /// An error that occurred during parsing.
    #[error("failed to parse: {0}")]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// Whether the input was tokenized but did not match the grammar.
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    /// Whether the input contained a character that starts no token.
    pub fn is_lex_error(&self) -> bool {
        matches!(self, Error::Lex(_))
    }
}
