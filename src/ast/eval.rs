//! Evaluation of formulas under (partial) assignments.

use std::{collections::HashMap, fmt::Display};

use indexmap::IndexSet;
use itertools::Itertools;

use super::AstNode;

/// An assignment of truth values to variable names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment {
    assignments: HashMap<String, bool>,
    defaults: bool,
}

impl Assignment {
    /// Create a new assignment that maps all variables to `false` unless set otherwise
    pub fn with_defaults() -> Self {
        Self {
            assignments: HashMap::new(),
            defaults: true,
        }
    }

    /// Create a new assignment that maps no variables
    pub fn empty() -> Self {
        Self {
            assignments: HashMap::new(),
            defaults: false,
        }
    }

    /// Set the value of a variable, overwriting any previous value
    pub fn set(&mut self, var: &str, value: bool) {
        self.assignments.insert(var.to_owned(), value);
    }

    /// Get the value of a variable
    pub fn get(&self, var: &str) -> Option<bool> {
        match self.assignments.get(var) {
            Some(v) => Some(*v),
            None if self.defaults => Some(false),
            None => None,
        }
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Assignment {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            defaults: false,
        }
    }
}

impl AstNode {
    /// Evaluate the formula under the given assignment.
    /// Returns None if the assignment is partial and the value of the formula depends on the missing assignments.
    pub fn evaluate(&self, assignment: &Assignment) -> Option<bool> {
        match self {
            AstNode::Disjunct(ts) => ts
                .iter()
                .map(|t| t.evaluate(assignment))
                .fold(Some(false), |acc, x| match (acc, x) {
                    (Some(true), _) | (_, Some(true)) => Some(true),
                    (Some(false), Some(false)) => Some(false),
                    _ => None,
                }),
            AstNode::Conjunct(ts) => ts
                .iter()
                .map(|t| t.evaluate(assignment))
                .fold(Some(true), |acc, x| match (acc, x) {
                    (Some(false), _) | (_, Some(false)) => Some(false),
                    (Some(true), Some(true)) => Some(true),
                    _ => None,
                }),
            AstNode::Negation(n) => n.evaluate(assignment).map(|b| !b),
            AstNode::Constant(b) => Some(*b),
            AstNode::Variable(v) => assignment.get(v),
        }
    }
}

/// Searches for an assignment of the variables of both formulas under which they evaluate differently.
/// Enumerates all `2^n` assignments of the `n` variables in the worst case.
pub fn counterexample(lhs: &AstNode, rhs: &AstNode) -> Option<Assignment> {
    let vars: IndexSet<&str> = lhs.variables().union(&rhs.variables()).copied().collect();
    let vars = vars.into_iter().collect_vec();
    let mut assignment = Assignment::empty();
    if search(&vars, &mut assignment, &mut |a: &Assignment| {
        lhs.evaluate(a) != rhs.evaluate(a)
    }) {
        Some(assignment)
    } else {
        None
    }
}

/// Returns true if both formulas evaluate to the same value under every assignment.
pub fn equivalent(lhs: &AstNode, rhs: &AstNode) -> bool {
    counterexample(lhs, rhs).is_none()
}

/// Extends `assignment` over `vars` until `found` holds.
/// On success, `assignment` is the witness.
fn search(
    vars: &[&str],
    assignment: &mut Assignment,
    found: &mut impl FnMut(&Assignment) -> bool,
) -> bool {
    match vars.split_first() {
        None => found(assignment),
        Some((var, rest)) => [false, true].into_iter().any(|value| {
            assignment.set(var, value);
            search(rest, assignment, found)
        }),
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .assignments
            .iter()
            .sorted()
            .map(|(var, val)| format!("{}: {}", var, if *val { "T" } else { "F" }))
            .join(", ");
        write!(f, "[{}]", entries)
    }
}
