//! Splits a formula into tokens.
//!
//! Only the five punctuation symbols `(`, `)`, `!`, `&`, and `|` are reserved.
//! Every other run of non-whitespace characters is a variable, except for a bare `T` or `F` which denote the constants.

use std::{
    fmt::Display,
    iter::Peekable,
    str::CharIndices,
};

use crate::error::LexError;

const PUNCTUATION: [char; 5] = ['(', ')', '!', '&', '|'];

/// The kind of a [Token].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A variable name
    Variable,
    /// The constant `T`
    True,
    /// The constant `F`
    False,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `!`
    Not,
    /// `&`
    And,
    /// `|`
    Or,
}

impl TokenKind {
    fn punctuation(c: char) -> Option<Self> {
        match c {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '!' => Some(TokenKind::Not),
            '&' => Some(TokenKind::And),
            '|' => Some(TokenKind::Or),
            _ => None,
        }
    }

    fn constant(c: char) -> Option<Self> {
        match c {
            'T' => Some(TokenKind::True),
            'F' => Some(TokenKind::False),
            _ => None,
        }
    }
}

/// A token of the input.
/// The text is a slice of the input and the position is the byte offset of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub position: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, position: usize) -> Self {
        Self {
            kind,
            text,
            position,
        }
    }
}

/// Determines how a `T` or `F` that is not followed by a delimiter is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    /// The constant is only recognized if followed by whitespace, punctuation, or the end of the input.
    /// Otherwise the whole run is a variable (`TFA` is one variable).
    #[default]
    Permissive,
    /// A `T` or `F` starting a token is always a constant (`TFA` is `T`, `F`, `A`).
    Strict,
}

/// Returns true if `c` ends a variable name.
fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION.contains(&c)
}

/// An iterator over the tokens of a string.
/// Whitespace is skipped and never yields a token.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    mode: LexMode,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, mode: LexMode) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            mode,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn at_delimiter(&mut self) -> bool {
        match self.chars.peek() {
            Some(&(_, c)) => is_delimiter(c),
            None => true,
        }
    }

    /// Consumes the longest run of variable characters starting at `start`.
    /// The first character has already been consumed.
    fn variable(&mut self, start: usize, first: char) -> Token<'a> {
        let mut end = start + first.len_utf8();
        while let Some((i, c)) = self
            .chars
            .next_if(|&(_, c)| !is_delimiter(c) && !c.is_control())
        {
            end = i + c.len_utf8();
        }
        Token::new(TokenKind::Variable, &self.input[start..end], start)
    }

    fn scan(&mut self) -> Option<Result<Token<'a>, LexError>> {
        self.skip_whitespace();
        let (start, c) = self.chars.next()?;
        let single = &self.input[start..start + c.len_utf8()];

        if let Some(kind) = TokenKind::punctuation(c) {
            return Some(Ok(Token::new(kind, single, start)));
        }
        if let Some(kind) = TokenKind::constant(c) {
            if self.mode == LexMode::Strict || self.at_delimiter() {
                return Some(Ok(Token::new(kind, single, start)));
            }
        }
        if c.is_control() {
            return Some(Err(LexError::UnexpectedCharacter {
                character: c,
                position: start,
            }));
        }
        Some(Ok(self.variable(start, c)))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.scan()?;
        match &next {
            Ok(token) => log::trace!("{} {:?} at {}", token.kind, token.text, token.position),
            Err(err) => log::trace!("Tokenizer stopped: {}", err),
        }
        Some(next)
    }
}

/// Splits the input into tokens using the permissive [LexMode].
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    tokenize_with(input, LexMode::default())
}

/// Splits the input into tokens using the given [LexMode].
/// Fails on the first character that cannot be part of any token.
pub fn tokenize_with(input: &str, mode: LexMode) -> Result<Vec<Token<'_>>, LexError> {
    let tokens = Lexer::new(input, mode).collect::<Result<Vec<_>, _>>()?;
    log::trace!("Tokenized {:?} into {} tokens", input, tokens.len());
    Ok(tokens)
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Variable => write!(f, "variable"),
            TokenKind::True => write!(f, "true constant"),
            TokenKind::False => write!(f, "false constant"),
            TokenKind::LParen => write!(f, "left parenthesis"),
            TokenKind::RParen => write!(f, "right parenthesis"),
            TokenKind::Not => write!(f, "negation"),
            TokenKind::And => write!(f, "conjunction"),
            TokenKind::Or => write!(f, "disjunction"),
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
