use propdnf::{normalize, parse, tokenize, AstNode, Error, SyntaxError, TokenKind};

fn v(name: &str) -> AstNode {
    AstNode::variable(name)
}

#[test]
fn parse_true() {
    assert_eq!(parse("T").unwrap(), AstNode::Constant(true));
}

#[test]
fn parse_disjunction_of_conjunction() {
    assert_eq!(
        parse("A | (B & C)").unwrap(),
        AstNode::Disjunct(vec![v("A"), AstNode::Conjunct(vec![v("B"), v("C")])])
    );
}

#[test]
fn normalize_negated_conjunction() {
    assert_eq!(
        normalize(&parse("!(A & B)").unwrap()),
        AstNode::Disjunct(vec![
            AstNode::Negation(Box::new(v("A"))),
            AstNode::Negation(Box::new(v("B")))
        ])
    );
}

#[test]
fn normalize_distributes() {
    assert_eq!(
        normalize(&parse("A & (B | C)").unwrap()),
        AstNode::Disjunct(vec![
            AstNode::Conjunct(vec![v("A"), v("B")]),
            AstNode::Conjunct(vec![v("A"), v("C")])
        ])
    );
}

#[test]
fn normalize_annihilates() {
    assert_eq!(
        normalize(&parse("A & F").unwrap()),
        AstNode::Constant(false)
    );
}

#[test]
fn syntax_errors() {
    for input in ["(", ")(", "A || B"] {
        assert!(matches!(parse(input), Err(Error::Syntax(_))), "{:?}", input);
    }
    let err = parse(")(").unwrap_err();
    assert_eq!(
        err,
        Error::Syntax(SyntaxError::UnexpectedToken {
            found: TokenKind::RParen,
            text: ")".to_string(),
            position: 0,
            expected: "a variable, a constant, `!`, or `(`",
        })
    );
    assert_eq!(
        err.to_string(),
        "failed to parse: unexpected right parenthesis `)` at 0, expected a variable, a constant, `!`, or `(`"
    );
}

#[test]
fn tokens_cover_input() {
    let input = "!(alpha & T)|beta";
    let tokens = tokenize(input).unwrap();
    let text: String = tokens.iter().map(|t| t.text).collect();
    assert_eq!(text, input.replace(' ', ""));
    for t in &tokens {
        assert_eq!(&input[t.position..t.position + t.text.len()], t.text);
    }
}
