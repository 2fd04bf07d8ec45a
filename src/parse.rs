//! Recursive-descent parser for propositional formulas.
//!
//! The grammar, from the loosest to the tightest binding operator:
//!
//! ```text
//! Expression  := Disjunction
//! Disjunction := Conjunction ( '|' Conjunction )*
//! Conjunction := Negation ( '&' Negation )*
//! Negation    := '!' Negation | Atom
//! Atom        := 'T' | 'F' | VARIABLE | '(' Expression ')'
//! ```
//!
//! Runs of `!` are read in a loop, so their length is unbounded.
//! Parentheses are parsed recursively and may nest at most [MAX_NESTING] levels deep.

use crate::{
    ast::AstNode,
    error::{Error, SyntaxError},
    lex::{tokenize_with, Token, TokenKind},
    options::Options,
};

const EXPECTED_OPERAND: &str = "a variable, a constant, `!`, or `(`";
const EXPECTED_RPAREN: &str = "`)`";
const EXPECTED_END: &str = "`&`, `|`, or end of input";

/// The maximum nesting depth of parentheses.
pub const MAX_NESTING: usize = 256;

/// A cursor over a token sequence.
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parses the whole token sequence as a single expression.
    /// Fails if tokens remain after the expression.
    pub fn parse(mut self) -> Result<AstNode, SyntaxError> {
        let node = self.expression()?;
        match self.peek() {
            None => Ok(node),
            Some(token) => Err(unexpected(token, EXPECTED_END)),
        }
    }

    fn peek(&self) -> Option<&'t Token<'a>> {
        self.tokens.get(self.pos)
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        match self.peek() {
            Some(t) if t.kind == kind => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn expression(&mut self) -> Result<AstNode, SyntaxError> {
        self.disjunction()
    }

    fn disjunction(&mut self) -> Result<AstNode, SyntaxError> {
        let mut terms = vec![self.conjunction()?];
        while self.eat(TokenKind::Or) {
            terms.push(self.conjunction()?);
        }
        Ok(AstNode::disjunct(terms))
    }

    fn conjunction(&mut self) -> Result<AstNode, SyntaxError> {
        let mut terms = vec![self.negation()?];
        while self.eat(TokenKind::And) {
            terms.push(self.negation()?);
        }
        Ok(AstNode::conjunct(terms))
    }

    fn negation(&mut self) -> Result<AstNode, SyntaxError> {
        let mut level = 0;
        while self.eat(TokenKind::Not) {
            level += 1;
        }
        let mut node = self.atom()?;
        for _ in 0..level {
            node = AstNode::negation(node);
        }
        Ok(node)
    }

    fn atom(&mut self) -> Result<AstNode, SyntaxError> {
        let token = self.peek().ok_or(SyntaxError::UnexpectedEnd {
            expected: EXPECTED_OPERAND,
        })?;
        let node = match token.kind {
            TokenKind::True => AstNode::ttrue(),
            TokenKind::False => AstNode::ffalse(),
            TokenKind::Variable => AstNode::variable(token.text),
            TokenKind::LParen => {
                if self.depth == MAX_NESTING {
                    return Err(SyntaxError::NestingTooDeep {
                        position: token.position,
                        limit: MAX_NESTING,
                    });
                }
                self.pos += 1;
                self.depth += 1;
                let inner = self.expression()?;
                self.depth -= 1;
                return match self.peek() {
                    Some(t) if t.kind == TokenKind::RParen => {
                        self.pos += 1;
                        Ok(inner)
                    }
                    Some(t) => Err(unexpected(t, EXPECTED_RPAREN)),
                    None => Err(SyntaxError::UnexpectedEnd {
                        expected: EXPECTED_RPAREN,
                    }),
                };
            }
            TokenKind::RParen | TokenKind::Not | TokenKind::And | TokenKind::Or => {
                return Err(unexpected(token, EXPECTED_OPERAND))
            }
        };
        self.pos += 1;
        Ok(node)
    }
}

fn unexpected(token: &Token<'_>, expected: &'static str) -> SyntaxError {
    SyntaxError::UnexpectedToken {
        found: token.kind,
        text: token.text.to_owned(),
        position: token.position,
        expected,
    }
}

/// Parses a token sequence into a tree.
pub fn parse_tokens(tokens: &[Token<'_>]) -> Result<AstNode, SyntaxError> {
    Parser::new(tokens).parse()
}

/// Tokenizes and parses the input with the default [Options].
pub fn parse(input: &str) -> Result<AstNode, Error> {
    parse_with(input, &Options::default())
}

/// Tokenizes and parses the input.
/// Returns the first error encountered, either while tokenizing or while parsing.
/// Parentheses nested deeper than [MAX_NESTING] are rejected with [SyntaxError::NestingTooDeep].
pub fn parse_with(input: &str, options: &Options) -> Result<AstNode, Error> {
    let tokens = tokenize_with(input, options.lex_mode())?;
    let node = parse_tokens(&tokens)?;
    log::trace!("Parsed {:?} into {:?}", input, node);
    Ok(node)
}
