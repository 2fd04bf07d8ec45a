use quickcheck::{Arbitrary, Gen};

use super::AstNode;

/// Variables of generated formulas. Kept small so that truth tables stay cheap.
const VARIABLES: [&str; 4] = ["a", "b", "c", "x1"];
/// Maximal nesting of generated formulas.
const MAX_DEPTH: usize = 3;

fn arbitrary_leaf(g: &mut Gen) -> AstNode {
    match g.choose(&[0, 1, 2]) {
        Some(0) => AstNode::constant(bool::arbitrary(g)),
        _ => AstNode::variable(*g.choose(&VARIABLES).unwrap_or(&"a")),
    }
}

fn arbitrary_terms(g: &mut Gen, depth: usize) -> Vec<AstNode> {
    let len = 2 + usize::arbitrary(g) % 2;
    (0..len).map(|_| arbitrary_node(g, depth - 1)).collect()
}

fn arbitrary_node(g: &mut Gen, depth: usize) -> AstNode {
    if depth == 0 {
        return arbitrary_leaf(g);
    }
    match g.choose(&[0, 1, 2, 3]) {
        Some(1) => AstNode::negation(arbitrary_node(g, depth - 1)),
        Some(2) => AstNode::disjunct(arbitrary_terms(g, depth)),
        Some(3) => AstNode::conjunct(arbitrary_terms(g, depth)),
        _ => arbitrary_leaf(g),
    }
}

/* Arbitrary */

impl Arbitrary for AstNode {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = g.size().min(MAX_DEPTH);
        arbitrary_node(g, depth)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match self {
            AstNode::Disjunct(ts) | AstNode::Conjunct(ts) => Box::new(ts.clone().into_iter()),
            AstNode::Negation(n) => Box::new(std::iter::once((**n).clone())),
            AstNode::Constant(_) | AstNode::Variable(_) => quickcheck::empty_shrinker(),
        }
    }
}
