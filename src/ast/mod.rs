//! Representation of propositional formulas.

use std::fmt::Display;

use indexmap::IndexSet;

mod arbitrary;
pub mod eval;

pub use eval::{counterexample, equivalent, Assignment};

/// A propositional formula.
/// A formula is inductively defined as follows:
/// - A constant `T` or `F` ([AstNode::Constant]) is a formula
/// - A variable ([AstNode::Variable]) is a formula
/// - If `f` is a formula, then `!f` ([AstNode::Negation]) is a formula
/// - If `f1, ..., fn` are formulas, then `f1 & ... & fn` ([AstNode::Conjunct]) and `f1 | ... | fn` ([AstNode::Disjunct]) are formulas
///
/// The variants [AstNode::Disjunct] and [AstNode::Conjunct] should not be constructed directly but instead with [AstNode::disjunct] and [AstNode::conjunct], respectively.
/// These guarantee that every disjunction and conjunction has at least two terms and that no term has the same kind as its parent.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AstNode {
    /// A disjunction of at least two terms, none of which is a disjunction
    Disjunct(Vec<AstNode>),
    /// A conjunction of at least two terms, none of which is a conjunction
    Conjunct(Vec<AstNode>),
    /// A negation
    Negation(Box<AstNode>),
    /// The constant `T` or `F`
    Constant(bool),
    /// A free variable
    Variable(String),
}

impl AstNode {
    /// Returns the constant `T`
    pub fn ttrue() -> Self {
        Self::Constant(true)
    }

    /// Returns the constant `F`
    pub fn ffalse() -> Self {
        Self::Constant(false)
    }

    /// Returns the constant with the given value
    pub fn constant(value: bool) -> Self {
        Self::Constant(value)
    }

    /// Creates a variable with the given name
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates the negation of the given node.
    /// Double negations are kept.
    pub fn negation(node: AstNode) -> Self {
        Self::Negation(Box::new(node))
    }

    /// Creates the disjunction of the given nodes.
    /// - If one of the nodes is a disjunction, adds its terms (i.e. flattens the node)
    /// - If only a single term remains, returns that term
    /// - If no term is given, returns `F`
    pub fn disjunct(terms: Vec<AstNode>) -> Self {
        let mut disj = Vec::with_capacity(terms.len());
        for t in terms {
            match t {
                AstNode::Disjunct(ts) => disj.extend(ts),
                t => disj.push(t),
            }
        }
        match disj.len() {
            0 => Self::ffalse(),
            1 => disj.pop().unwrap_or_else(Self::ffalse),
            _ => Self::Disjunct(disj),
        }
    }

    /// Creates the conjunction of the given nodes.
    /// - If one of the nodes is a conjunction, adds its terms (i.e. flattens the node)
    /// - If only a single term remains, returns that term
    /// - If no term is given, returns `T`
    pub fn conjunct(terms: Vec<AstNode>) -> Self {
        let mut conj = Vec::with_capacity(terms.len());
        for t in terms {
            match t {
                AstNode::Conjunct(ts) => conj.extend(ts),
                t => conj.push(t),
            }
        }
        match conj.len() {
            0 => Self::ttrue(),
            1 => conj.pop().unwrap_or_else(Self::ttrue),
            _ => Self::Conjunct(conj),
        }
    }

    pub fn is_true(&self) -> bool {
        matches!(self, AstNode::Constant(true))
    }

    pub fn is_false(&self) -> bool {
        matches!(self, AstNode::Constant(false))
    }

    /// Returns true if this node is a literal, i.e., a constant, a variable, or a negated variable.
    pub fn is_literal(&self) -> bool {
        match self {
            AstNode::Constant(_) | AstNode::Variable(_) => true,
            AstNode::Negation(n) => matches!(**n, AstNode::Variable(_)),
            AstNode::Disjunct(_) | AstNode::Conjunct(_) => false,
        }
    }

    /// Returns true if this node is a literal or a conjunction of literals.
    pub fn is_clause(&self) -> bool {
        match self {
            AstNode::Conjunct(ts) => ts.iter().all(Self::is_literal),
            n => n.is_literal(),
        }
    }

    /// Returns true if this node is in disjunctive normal form.
    /// That is, it is a clause or a disjunction of clauses.
    pub fn is_dnf(&self) -> bool {
        match self {
            AstNode::Disjunct(ts) => ts.iter().all(Self::is_clause),
            n => n.is_clause(),
        }
    }

    /// Returns true if no disjunction or conjunction in this tree has fewer than two terms or a term of its own kind.
    pub fn is_flat(&self) -> bool {
        match self {
            AstNode::Disjunct(ts) => {
                ts.len() >= 2
                    && ts
                        .iter()
                        .all(|t| !matches!(t, AstNode::Disjunct(_)) && t.is_flat())
            }
            AstNode::Conjunct(ts) => {
                ts.len() >= 2
                    && ts
                        .iter()
                        .all(|t| !matches!(t, AstNode::Conjunct(_)) && t.is_flat())
            }
            AstNode::Negation(n) => n.is_flat(),
            AstNode::Constant(_) | AstNode::Variable(_) => true,
        }
    }

    /// Returns the names of the variables occurring in this tree, in order of their first occurrence.
    pub fn variables(&self) -> IndexSet<&str> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables<'a>(&'a self, vars: &mut IndexSet<&'a str>) {
        match self {
            AstNode::Disjunct(ts) | AstNode::Conjunct(ts) => {
                ts.iter().for_each(|t| t.collect_variables(vars))
            }
            AstNode::Negation(n) => n.collect_variables(vars),
            AstNode::Constant(_) => {}
            AstNode::Variable(v) => {
                vars.insert(v.as_str());
            }
        }
    }

    /// Counts the nodes in this tree.
    pub fn size(&self) -> usize {
        match self {
            AstNode::Disjunct(ts) | AstNode::Conjunct(ts) => {
                1 + ts.iter().map(Self::size).sum::<usize>()
            }
            AstNode::Negation(n) => 1 + n.size(),
            AstNode::Constant(_) | AstNode::Variable(_) => 1,
        }
    }
}

/* Pretty Printing */

impl AstNode {
    /// Writes `self` as an operand of an operator binding tighter than a disjunction.
    fn fmt_operand(&self, f: &mut std::fmt::Formatter<'_>, parent_is_and: bool) -> std::fmt::Result {
        let needs_parens = match self {
            AstNode::Disjunct(_) => true,
            AstNode::Conjunct(_) => !parent_is_and,
            _ => false,
        };
        if needs_parens {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

/// Renders the formula in the input syntax, with as few parentheses as the precedences allow.
/// Parsing the rendering of a flat tree yields the same tree.
impl Display for AstNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AstNode::Disjunct(ts) => {
                let mut first = true;
                for t in ts {
                    if !first {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", t)?;
                    first = false;
                }
                Ok(())
            }
            AstNode::Conjunct(ts) => {
                let mut first = true;
                for t in ts {
                    if !first {
                        write!(f, " & ")?;
                    }
                    t.fmt_operand(f, true)?;
                    first = false;
                }
                Ok(())
            }
            AstNode::Negation(n) => {
                write!(f, "!")?;
                n.fmt_operand(f, false)
            }
            AstNode::Constant(true) => write!(f, "T"),
            AstNode::Constant(false) => write!(f, "F"),
            AstNode::Variable(v) => write!(f, "{}", v),
        }
    }
}
