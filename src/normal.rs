//! Transforms formulas into disjunctive normal form (DNF).
//! A formula is in DNF if it is a disjunction of conjunctions of literals.
//!
//! Negations are pushed down to the variables (De Morgan), double negations are removed, and constants are folded wherever they annihilate their parent.
//! Conjunctions over disjunctions are then distributed.
//! Distribution is inherently exponential: a conjunction of `k` disjunctions with `m` terms each yields `m^k` clauses.
//! No limit is imposed on the size of the result.

use itertools::Itertools;

use crate::{ast::AstNode, options::Options};

/// Converts trees into DNF.
/// Input trees are never modified, every call builds a new tree.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    fold_identities: bool,
}

impl Normalizer {
    pub fn new(options: &Options) -> Self {
        Self {
            fold_identities: options.fold_identities,
        }
    }

    /// Returns a tree in DNF that is equivalent to the given tree.
    pub fn normalize(&self, node: &AstNode) -> AstNode {
        match node {
            AstNode::Disjunct(ts) => self.or(ts.iter().map(|t| self.normalize(t)).collect()),
            AstNode::Conjunct(ts) => self.and(ts.iter().map(|t| self.normalize(t)).collect()),
            AstNode::Negation(n) => match strip_negations(n) {
                (inner, true) => self.normalize(inner),
                (inner, false) => self.negate(inner),
            },
            AstNode::Constant(_) | AstNode::Variable(_) => node.clone(),
        }
    }

    /// Returns the DNF of the negation of `node`.
    fn negate(&self, node: &AstNode) -> AstNode {
        match node {
            AstNode::Constant(b) => AstNode::constant(!b),
            AstNode::Negation(n) => match strip_negations(n) {
                (inner, true) => self.negate(inner),
                (inner, false) => self.normalize(inner),
            },
            AstNode::Variable(_) => AstNode::negation(node.clone()),
            AstNode::Conjunct(ts) => self.or(ts.iter().map(|t| self.negate(t)).collect()),
            AstNode::Disjunct(ts) => self.and(ts.iter().map(|t| self.negate(t)).collect()),
        }
    }

    /// Disjunction of terms that are already in DNF.
    fn or(&self, terms: Vec<AstNode>) -> AstNode {
        if terms.iter().any(AstNode::is_true) {
            return AstNode::ttrue();
        }
        let mut flat = Vec::with_capacity(terms.len());
        for t in terms {
            match t {
                AstNode::Disjunct(ts) => flat.extend(ts),
                t => flat.push(t),
            }
        }
        if self.fold_identities {
            flat.retain(|t| !t.is_false());
        }
        AstNode::disjunct(flat)
    }

    /// Conjunction of terms that are already in DNF.
    /// Distributes over the disjunctions among the terms.
    fn and(&self, terms: Vec<AstNode>) -> AstNode {
        if terms.iter().any(AstNode::is_false) {
            return AstNode::ffalse();
        }
        let mut flat = Vec::with_capacity(terms.len());
        for t in terms {
            match t {
                AstNode::Conjunct(ts) => flat.extend(ts),
                t => flat.push(t),
            }
        }
        if self.fold_identities {
            flat.retain(|t| !t.is_true());
        }

        let disjuncts = flat
            .iter()
            .filter_map(|t| match t {
                AstNode::Disjunct(ts) => Some(ts),
                _ => None,
            })
            .collect_vec();
        if disjuncts.is_empty() {
            return AstNode::conjunct(flat);
        }
        log::debug!(
            "Distributing over {} disjunctions ({} clauses)",
            disjuncts.len(),
            disjuncts.iter().map(|ts| ts.len()).product::<usize>()
        );

        // Each clause picks one term of every disjunction, keeping the order of the conjunction.
        let clauses = disjuncts
            .into_iter()
            .map(|ts| ts.iter())
            .multi_cartesian_product()
            .map(|choice| {
                let mut choice = choice.into_iter();
                let terms = flat
                    .iter()
                    .filter_map(|t| match t {
                        AstNode::Disjunct(_) => choice.next(),
                        t => Some(t),
                    })
                    .cloned()
                    .collect();
                self.and(terms)
            })
            .collect();
        self.or(clauses)
    }
}

/// Skips the negations at the root of `node`.
/// Returns the first node that is not a negation and whether an odd number of negations was skipped.
fn strip_negations(mut node: &AstNode) -> (&AstNode, bool) {
    let mut odd = false;
    while let AstNode::Negation(n) = node {
        node = n.as_ref();
        odd = !odd;
    }
    (node, odd)
}

/// Converts the tree into DNF using the default [Options].
pub fn normalize(node: &AstNode) -> AstNode {
    Normalizer::default().normalize(node)
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::{ast::equivalent, parse::parse};

    fn v(name: &str) -> AstNode {
        AstNode::variable(name)
    }

    fn not(node: AstNode) -> AstNode {
        AstNode::negation(node)
    }

    fn any(terms: Vec<AstNode>) -> AstNode {
        AstNode::Disjunct(terms)
    }

    fn all(terms: Vec<AstNode>) -> AstNode {
        AstNode::Conjunct(terms)
    }

    fn dnf(input: &str) -> AstNode {
        normalize(&parse(input).unwrap())
    }

    fn dnf_folded(input: &str) -> AstNode {
        let options = Options {
            fold_identities: true,
            ..Options::default()
        };
        Normalizer::new(&options).normalize(&parse(input).unwrap())
    }

    #[test]
    fn atoms_unchanged() {
        assert_eq!(dnf("A"), v("A"));
        assert_eq!(dnf("T"), AstNode::ttrue());
        assert_eq!(dnf("F"), AstNode::ffalse());
        assert_eq!(dnf("!A"), not(v("A")));
    }

    #[test]
    fn negated_constants() {
        assert_eq!(dnf("!T"), AstNode::ffalse());
        assert_eq!(dnf("!F"), AstNode::ttrue());
        assert_eq!(dnf("!!!T"), AstNode::ffalse());
    }

    #[test]
    fn double_negation() {
        assert_eq!(dnf("!!A"), v("A"));
        assert_eq!(dnf("!!!A"), not(v("A")));
        assert_eq!(dnf("!!(A & B)"), all(vec![v("A"), v("B")]));
    }

    #[test]
    fn long_negation_chains() {
        let even = parse(&format!("{}A", "!".repeat(10_000))).unwrap();
        let odd = parse(&format!("{}(A & B)", "!".repeat(10_001))).unwrap();
        assert_eq!(normalize(&even), v("A"));
        assert_eq!(normalize(&odd), any(vec![not(v("A")), not(v("B"))]));
        for mut node in [even, odd] {
            while let AstNode::Negation(inner) = node {
                node = *inner;
            }
        }
    }

    #[test]
    fn de_morgan() {
        assert_eq!(dnf("!(A & B)"), any(vec![not(v("A")), not(v("B"))]));
        assert_eq!(dnf("!(A | B)"), all(vec![not(v("A")), not(v("B"))]));
        assert_eq!(dnf("!(A | !B)"), all(vec![not(v("A")), v("B")]));
    }

    #[test]
    fn de_morgan_with_distribution() {
        // !((A | B) & C) = (!A & !B) | !C
        assert_eq!(
            dnf("!((A | B) & C)"),
            any(vec![all(vec![not(v("A")), not(v("B"))]), not(v("C"))])
        );
        // !((A & B) | (C & D)) = (!A | !B) & (!C | !D)
        assert_eq!(
            dnf("!(A & B | C & D)"),
            any(vec![
                all(vec![not(v("A")), not(v("C"))]),
                all(vec![not(v("A")), not(v("D"))]),
                all(vec![not(v("B")), not(v("C"))]),
                all(vec![not(v("B")), not(v("D"))]),
            ])
        );
    }

    #[test]
    fn distribute_single() {
        assert_eq!(
            dnf("A & (B | C)"),
            any(vec![all(vec![v("A"), v("B")]), all(vec![v("A"), v("C")])])
        );
        assert_eq!(
            dnf("(B | C) & A"),
            any(vec![all(vec![v("B"), v("A")]), all(vec![v("C"), v("A")])])
        );
    }

    #[test]
    fn distribute_product() {
        let result = dnf("(A | B) & (C | D) & (E | G)");
        match &result {
            AstNode::Disjunct(clauses) => {
                assert_eq!(clauses.len(), 8);
                assert_eq!(clauses[0], all(vec![v("A"), v("C"), v("E")]));
                assert_eq!(clauses[7], all(vec![v("B"), v("D"), v("G")]));
            }
            other => panic!("expected a disjunction, got {}", other),
        }
    }

    #[test]
    fn distribute_nested_clauses() {
        // (A & B | C) & D = A & B & D | C & D
        assert_eq!(
            dnf("(A & B | C) & D"),
            any(vec![all(vec![v("A"), v("B"), v("D")]), all(vec![v("C"), v("D")])])
        );
    }

    #[test]
    fn annihilation() {
        assert_eq!(dnf("A & F"), AstNode::ffalse());
        assert_eq!(dnf("A | T"), AstNode::ttrue());
        assert_eq!(dnf("A & (B | !F)"), all(vec![v("A"), AstNode::ttrue()]));
        assert_eq!(dnf("!(A | T)"), AstNode::ffalse());
        assert_eq!(dnf("(A | B) & !T"), AstNode::ffalse());
    }

    #[test]
    fn annihilation_after_distribution() {
        // a & (b | T) & (c | F) = a & T & c | a & T & F = a & T & c | F
        assert_eq!(
            dnf("a & (b | T) & (c | F)"),
            any(vec![all(vec![v("a"), AstNode::ttrue(), v("c")]), AstNode::ffalse()])
        );
    }

    #[test]
    fn identities_are_kept_by_default() {
        assert_eq!(dnf("A | F"), any(vec![v("A"), AstNode::ffalse()]));
        assert_eq!(dnf("A & T"), all(vec![v("A"), AstNode::ttrue()]));
    }

    #[test]
    fn identities_folded() {
        assert_eq!(dnf_folded("A | F"), v("A"));
        assert_eq!(dnf_folded("A & T"), v("A"));
        assert_eq!(dnf_folded("A & (B | !F)"), v("A"));
        assert_eq!(dnf_folded("F | F"), AstNode::ffalse());
        assert_eq!(dnf_folded("T & T"), AstNode::ttrue());
        assert_eq!(
            dnf_folded("a & (b | T) & (c | F)"),
            all(vec![v("a"), v("c")])
        );
        assert_eq!(dnf_folded("(A | T) & (B | T)"), AstNode::ttrue());
    }

    #[test]
    fn flattens_disjunctions() {
        assert_eq!(
            dnf("A | !(B & C)"),
            any(vec![v("A"), not(v("B")), not(v("C"))])
        );
    }

    #[test]
    fn input_is_not_modified() {
        let input = parse("!(A & (B | C)) & D").unwrap();
        let copy = input.clone();
        let _ = normalize(&input);
        assert_eq!(input, copy);
    }

    #[quickcheck]
    fn normalize_is_idempotent(node: AstNode) -> bool {
        let once = normalize(&node);
        normalize(&once) == once
    }

    #[quickcheck]
    fn normalize_folded_is_idempotent(node: AstNode) -> bool {
        let normalizer = Normalizer::new(&Options {
            fold_identities: true,
            ..Options::default()
        });
        let once = normalizer.normalize(&node);
        normalizer.normalize(&once) == once
    }

    #[quickcheck]
    fn normalize_preserves_semantics(node: AstNode) -> bool {
        equivalent(&node, &normalize(&node))
    }

    #[quickcheck]
    fn normalize_folded_preserves_semantics(node: AstNode) -> bool {
        let normalizer = Normalizer::new(&Options {
            fold_identities: true,
            ..Options::default()
        });
        equivalent(&node, &normalizer.normalize(&node))
    }

    #[quickcheck]
    fn normalize_yields_flat_dnf(node: AstNode) -> bool {
        let nf = normalize(&node);
        nf.is_dnf() && nf.is_flat()
    }
}
