//! End-to-end parses through the public API.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use sift_parse::grammar::{keyword, rule, space};
use sift_parse::{parse, Bound, ErrorTag, FailureKind, Grammar, Name, NodeKind, Parser, Position};

fn if_grammar() -> Grammar {
    Grammar::builder()
        .with_default_lexemes()
        .sequence("root", vec![keyword("if"), space(), rule("number")])
        .pattern("number", "[0-9]+")
        .build()
        .unwrap()
}

#[test]
fn if_statement_is_accepted() {
    let grammar = if_grammar();
    let node = parse(&grammar, "if 42");

    assert!(node.accepted());
    assert_eq!(node.rule(), Name::ROOT);
    let children = node.children();
    assert_eq!(children.len(), 3);
    assert!(matches!(children[0].kind(), NodeKind::TextOrError(Ok("if"))));
    assert!(matches!(children[1].kind(), NodeKind::Text(" ")));
    assert!(matches!(children[2].kind(), NodeKind::Text("42")));
    assert!(children.iter().all(|child| child.accepted()));
    assert_eq!(node.full_text(), "if 42");
}

#[test]
fn misspelled_keyword_surfaces_bad_keyword() {
    let grammar = if_grammar();
    let node = parse(&grammar, "iff 42");

    assert!(!node.accepted());
    let error = node.deepest_error().unwrap();
    assert_eq!(error.failure_kind(), Some(FailureKind::BadKeyword));
    assert_eq!(error.error_tag().unwrap().message(grammar.names()), "Bad keyword");
    assert_eq!(error.position(), Position::new(0));
    assert_eq!(error.wrapped().and_then(|token| token.text()), Some("iff"));
}

#[test]
fn furthest_alternative_is_surfaced() {
    // A := B | C where B fails at 2 and C at 5.
    let grammar = Grammar::from_source(
        "root ::= b | c ; b ::= ab q ; c ::= abcde q ; ab = /ab/ ; abcde = /abcde/ ; q = /q/ ;",
    )
    .unwrap();
    let node = parse(&grammar, "abcdefg");

    assert!(!node.accepted());
    assert_eq!(node.index(), 1);
    let error = node.deepest_error().unwrap();
    assert_eq!(error.position(), Position::new(5));
    assert_eq!(grammar.rule_name(error.rule()), "q");
    assert_eq!(error.error_tag(), Some(ErrorTag::RegexNotMatched));
}

#[test]
fn shallow_item_failure_short_circuits() {
    let grammar = Grammar::builder()
        .sequence("root", vec![rule("x").bounded(Bound::new(1, 3)), rule("y")])
        .pattern("x", "x")
        .pattern("y", "y")
        .build()
        .unwrap();
    let node = parse(&grammar, "y");
    assert!(!node.accepted());
    assert_eq!(node.children().len(), 1);
    assert_eq!(grammar.rule_name(node.children()[0].rule()), "x");
}

#[test]
fn optional_item_failure_is_kept() {
    let grammar = Grammar::builder()
        .sequence("root", vec![rule("x").bounded(Bound::new(0, 3)), rule("y")])
        .pattern("x", "x")
        .pattern("y", "y")
        .build()
        .unwrap();
    let node = parse(&grammar, "y");
    assert!(node.accepted());
    let children = node.children();
    assert_eq!(children.len(), 2);
    assert!(!children[0].accepted());
    assert_eq!(grammar.rule_name(children[0].rule()), "x");
    assert!(children[1].accepted());
}

#[test]
fn grammar_is_shared_across_threads() {
    let grammar = if_grammar();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let grammar = &grammar;
                scope.spawn(move || {
                    let input = format!("if {i}");
                    let accepted = Parser::new(grammar).parse(&input).accepted();
                    accepted
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}
