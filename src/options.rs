use crate::lex::LexMode;

const DEFAULT_STRICT_CONSTANTS: bool = false;
const DEFAULT_FOLD_IDENTITIES: bool = false;

#[derive(Debug, Clone)]
pub struct Options {
    /// Whether a `T` or `F` at the start of a token is always read as a constant.
    /// If `false`, the constant is only recognized if it is followed by whitespace, a punctuation symbol, or the end of the input.
    /// Otherwise the whole run is read as a variable, e.g. `TFA` is the variable named `TFA`.
    /// If `true`, `TFA` is read as the tokens `T`, `F`, and `A`, which the parser rejects.
    pub strict_constants: bool,
    /// Whether to drop identity constants during normalization.
    /// That is, `F` is removed from disjunctions and `T` is removed from conjunctions.
    /// Annihilating constants (`T` in a disjunction, `F` in a conjunction) are always folded.
    pub fold_identities: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict_constants: DEFAULT_STRICT_CONSTANTS,
            fold_identities: DEFAULT_FOLD_IDENTITIES,
        }
    }
}

impl Options {
    /// The lexer mode selected by these options.
    pub fn lex_mode(&self) -> LexMode {
        if self.strict_constants {
            LexMode::Strict
        } else {
            LexMode::Permissive
        }
    }
}
