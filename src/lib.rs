//! Parsing of propositional formulas and their conversion into disjunctive normal form.
//!
//! The pipeline consists of three pure stages:
//! - [tokenize] splits the input into [Token]s,
//! - [parse] builds an [AstNode] tree,
//! - [normalize] rewrites a tree into an equivalent tree in disjunctive normal form.

pub mod ast;
pub mod error;
pub mod lex;
pub mod normal;
mod options;
pub mod parse;

pub use ast::{equivalent, Assignment, AstNode};
pub use error::{Error, LexError, SyntaxError};
pub use lex::{tokenize, tokenize_with, LexMode, Lexer, Token, TokenKind};
pub use normal::{normalize, Normalizer};
pub use options::Options;
pub use parse::{parse, parse_tokens, parse_with, Parser};
