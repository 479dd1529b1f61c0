use pretty_assertions::assert_eq;
use sift_ir::{Bound, ErrorTag, FailureKind, Name, Node, Position};

use crate::grammar::{fail, keyword, keyword_via, rule, space, Grammar};
use crate::{ParseConfig, Parser};

fn pos(offset: usize) -> Position {
    Position::new(offset)
}

fn name(grammar: &Grammar, rule: &str) -> Name {
    grammar.names().get(rule).unwrap()
}

/// `root ::= (ab q | abcde q)`: the alternatives fail at 2 and 5.
fn furthest_failure_grammar(long_first: bool) -> Grammar {
    let short = vec![rule("ab"), rule("q")];
    let long = vec![rule("abcde"), rule("q")];
    let alternatives = if long_first { vec![long, short] } else { vec![short, long] };
    Grammar::builder()
        .choice("root", alternatives)
        .pattern("ab", "ab")
        .pattern("abcde", "abcde")
        .pattern("q", "q")
        .build()
        .unwrap()
}

// === Terminals and keywords ===

#[test]
fn keyword_space_number() {
    let grammar = Grammar::builder()
        .with_default_lexemes()
        .sequence("root", vec![keyword("if"), space(), rule("number")])
        .pattern("number", "[0-9]+")
        .build()
        .unwrap();
    let number = name(&grammar, "number");

    let node = Parser::new(&grammar).parse("if 42");
    let expected = Node::list(
        Name::ROOT,
        0,
        pos(0),
        vec![
            Node::text_or_error(Name::KEYWORD, pos(0), Ok("if")),
            Node::matched(Name::SPACE, pos(2), " "),
            Node::matched(number, pos(3), "42"),
        ],
        true,
    );
    assert_eq!(node, expected);
    assert_eq!(node.full_text(), "if 42");
}

#[test]
fn keyword_mismatch_keeps_the_token() {
    let grammar = Grammar::builder()
        .with_default_lexemes()
        .sequence("root", vec![keyword("if"), space(), rule("number")])
        .pattern("number", "[0-9]+")
        .build()
        .unwrap();

    let (node, end) = Parser::new(&grammar).parse_prefix("iff 42");
    let bad_keyword = Node::wrap(
        Name::ERROR,
        0,
        pos(0),
        ErrorTag::BadKeyword,
        Node::text_or_error(Name::KEYWORD, pos(0), Ok("iff")),
    );
    assert_eq!(node, Node::list(Name::ROOT, 0, pos(0), vec![bad_keyword.clone()], false));
    assert_eq!(node.deepest_error(), Some(&bad_keyword));
    assert_eq!(node.failure_kind(), Some(FailureKind::SequenceBoundViolated));
    assert_eq!(end, pos(0));
}

#[test]
fn keyword_with_custom_lexer() {
    let grammar = Grammar::builder()
        .sequence("root", vec![keyword_via("==", "op")])
        .token("op", "[=<>!]+")
        .build()
        .unwrap();
    let op = name(&grammar, "op");
    let parser = Parser::new(&grammar);

    assert_eq!(
        parser.parse("== x").children(),
        &[Node::text_or_error(op, pos(0), Ok("=="))]
    );

    let short = parser.parse("= x");
    let error = short.deepest_error().unwrap();
    assert_eq!(error.error_tag(), Some(ErrorTag::BadKeyword));
    assert_eq!(error.wrapped().and_then(Node::text), Some("="));
}

#[test]
fn token_failure_is_a_token_node() {
    let grammar = Grammar::builder()
        .sequence("root", vec![rule("word")])
        .token("word", "[a-z]+")
        .build()
        .unwrap();
    let word = name(&grammar, "word");
    let node = Parser::new(&grammar).parse("42");
    assert_eq!(
        node.children(),
        &[Node::text_or_error(word, pos(0), Err(ErrorTag::RegexNotMatched))]
    );
}

#[test]
fn explicit_failure_reports_its_message() {
    let grammar = Grammar::builder()
        .with_default_lexemes()
        .choice(
            "root",
            vec![vec![keyword("a")], vec![rule("word"), fail("unexpected word")]],
        )
        .pattern("word", "[a-z]+")
        .build()
        .unwrap();

    let node = Parser::new(&grammar).parse("bc");
    assert_eq!(node.index(), 1);
    let error = node.deepest_error().unwrap();
    assert_eq!(error.position(), pos(2));
    assert_eq!(error.rule(), Name::ERROR);
    assert_eq!(error.failure_kind(), Some(FailureKind::Explicit));
    assert_eq!(error.error_tag().unwrap().message(grammar.names()), "unexpected word");
}

// === Ordered choice ===

#[test]
fn choice_reports_furthest_failure() {
    for long_first in [false, true] {
        let grammar = furthest_failure_grammar(long_first);
        let node = Parser::new(&grammar).parse("abcdefg");
        assert!(!node.accepted());
        assert_eq!(node.index(), usize::from(!long_first));
        assert_eq!(node.position(), pos(5));

        let error = node.deepest_error().unwrap();
        assert_eq!(error.rule(), name(&grammar, "q"));
        assert_eq!(error.failure_kind(), Some(FailureKind::PatternNotMatched));
    }
}

#[test]
fn choice_ties_keep_the_earlier_alternative() {
    let grammar = Grammar::builder()
        .choice("root", vec![vec![rule("ab"), rule("q")], vec![rule("ab"), rule("z")]])
        .pattern("ab", "ab")
        .pattern("q", "q")
        .pattern("z", "z")
        .build()
        .unwrap();
    let node = Parser::new(&grammar).parse("abx");
    assert_eq!(node.index(), 0);
    assert_eq!(node.deepest_error().unwrap().rule(), name(&grammar, "q"));
}

#[test]
fn first_accepted_alternative_wins() {
    let grammar = Grammar::builder()
        .choice("root", vec![vec![rule("letter")], vec![rule("word")]])
        .pattern("letter", "[a-z]")
        .pattern("word", "[a-z]+")
        .build()
        .unwrap();
    let (node, end) = Parser::new(&grammar).parse_prefix("abc");
    assert_eq!(node.index(), 0);
    assert_eq!(node.full_text(), "a");
    assert_eq!(end, pos(1));
}

#[test]
fn failed_alternatives_are_undone() {
    let grammar = Grammar::builder()
        .choice("root", vec![vec![rule("abcde"), rule("q")], vec![rule("word")]])
        .pattern("abcde", "abcde")
        .pattern("q", "q")
        .pattern("word", "[a-z]+")
        .build()
        .unwrap();
    let (node, end) = Parser::new(&grammar).parse_prefix("abcdefg");
    assert_eq!(node.index(), 1);
    assert_eq!(node.children(), &[Node::matched(name(&grammar, "word"), pos(0), "abcdefg")]);
    assert_eq!(end, pos(7));
}

#[test]
fn empty_choice_matches_nothing() {
    let grammar = Grammar::builder().choice("root", vec![]).build().unwrap();
    let node = Parser::new(&grammar).parse("anything");
    assert_eq!(node, Node::error(Name::ROOT, pos(0), ErrorTag::NothingMatched));
    assert_eq!(node.failure_kind(), Some(FailureKind::NoAlternativeMatched));
}

#[test]
fn empty_sequence_always_matches() {
    let grammar = Grammar::builder().choice("root", vec![vec![]]).build().unwrap();
    let node = Parser::new(&grammar).parse("anything");
    assert_eq!(node, Node::list(Name::ROOT, 0, pos(0), vec![], true));
}

// === Sequences ===

#[test]
fn repetition_keeps_the_final_probe() {
    let grammar = Grammar::builder()
        .sequence("root", vec![rule("letter").zero_or_more()])
        .pattern("letter", "[a-z]")
        .build()
        .unwrap();
    let letter = name(&grammar, "letter");

    let (node, end) = Parser::new(&grammar).parse_prefix("ab1");
    assert_eq!(
        node,
        Node::list(
            Name::ROOT,
            0,
            pos(0),
            vec![
                Node::matched(letter, pos(0), "a"),
                Node::matched(letter, pos(1), "b"),
                Node::error(letter, pos(2), ErrorTag::RegexNotMatched),
            ],
            true,
        )
    );
    assert_eq!(node.full_text(), "ab");
    assert_eq!(end, pos(2));
}

#[test]
fn lower_bound_violation_rejects() {
    let grammar = Grammar::builder()
        .sequence("root", vec![rule("letter").bounded(Bound::new(3, 4))])
        .pattern("letter", "[a-z]")
        .build()
        .unwrap();
    let node = Parser::new(&grammar).parse("ab1");
    assert!(!node.accepted());
    assert_eq!(node.children().len(), 3);
    assert_eq!(node.failure_kind(), Some(FailureKind::SequenceBoundViolated));
    assert_eq!(node.deepest_error().unwrap().position(), pos(2));
}

#[test]
fn upper_bound_stops_without_probing() {
    let grammar = Grammar::builder()
        .sequence("root", vec![rule("letter").bounded(Bound::new(1, 2))])
        .pattern("letter", "[a-z]")
        .build()
        .unwrap();
    let (node, end) = Parser::new(&grammar).parse_prefix("abc");
    assert!(node.accepted());
    assert_eq!(node.children().len(), 2);
    assert_eq!(end, pos(2));
}

#[test]
fn optional_keyword_is_tolerated() {
    let grammar = Grammar::builder()
        .with_default_lexemes()
        .sequence("root", vec![keyword("let").maybe(), space(), rule("number")])
        .pattern("number", "[0-9]+")
        .build()
        .unwrap();
    let parser = Parser::new(&grammar);

    let bare = parser.parse("42");
    assert!(bare.accepted());
    assert_eq!(bare.children().len(), 3);
    assert_eq!(bare.children()[0].failure_kind(), Some(FailureKind::BadKeyword));
    assert_eq!(bare.full_text(), "42");

    let with_keyword = parser.parse("let 42");
    assert!(with_keyword.accepted());
    assert_eq!(with_keyword.full_text(), "let 42");

    // `lets` is consumed by the keyword lexer, rejected, and rolled back.
    let wrong = parser.parse("lets 42");
    assert!(!wrong.accepted());
    let error = wrong.deepest_error().unwrap();
    assert_eq!(error.rule(), name(&grammar, "number"));
    assert_eq!(error.position(), pos(0));
}

#[test]
fn zero_width_repetition_terminates() {
    let grammar = Grammar::builder()
        .sequence("root", vec![rule("blank").zero_or_more(), rule("x")])
        .pattern("blank", " *")
        .pattern("x", "x")
        .build()
        .unwrap();
    let node = Parser::new(&grammar).parse("x");
    assert_eq!(
        node,
        Node::list(
            Name::ROOT,
            0,
            pos(0),
            vec![
                Node::matched(name(&grammar, "blank"), pos(0), ""),
                Node::matched(name(&grammar, "x"), pos(0), "x"),
            ],
            true,
        )
    );
}

#[test]
fn zero_width_repetition_meets_its_lower_bound() {
    let grammar = Grammar::builder()
        .sequence(
            "root",
            vec![rule("empty").bounded(Bound::new(3, 3)), rule("empty").bounded(Bound::new(2, 5))],
        )
        .pattern("empty", "")
        .build()
        .unwrap();
    let empty = name(&grammar, "empty");
    let node = Parser::new(&grammar).parse("");
    assert!(node.accepted());
    // Three for the fixed count, then two before the open upper bound stops it.
    assert_eq!(node.children(), vec![Node::matched(empty, pos(0), ""); 5].as_slice());
}

#[test]
fn sequence_stops_at_first_violated_item() {
    let grammar = Grammar::builder()
        .sequence("root", vec![rule("x"), rule("y"), rule("z")])
        .pattern("x", "x")
        .pattern("y", "y")
        .pattern("z", "z")
        .build()
        .unwrap();
    let node = Parser::new(&grammar).parse("xqz");
    assert_eq!(node.children().len(), 2);
    assert_eq!(node.position(), pos(1));
}

// === Sequence wrapping ===

#[test]
fn wrapped_sequence_failures() {
    let grammar = furthest_failure_grammar(false);
    let parser = Parser::with_config(&grammar, ParseConfig::new().with_sequence_wrapping(true));

    let node = parser.parse("abcdefg");
    assert_eq!(node.error_tag(), Some(ErrorTag::LongestBadMatch));
    assert_eq!(node.index(), 1);
    assert_eq!(node.position(), pos(5));
    assert_eq!(node.wrapped().map(Node::index), Some(1));
    assert_eq!(node.deepest_error().unwrap().rule(), name(&grammar, "q"));
}

#[test]
fn accepted_sequences_are_never_wrapped() {
    let grammar = Grammar::builder()
        .sequence("root", vec![rule("x")])
        .pattern("x", "x")
        .build()
        .unwrap();
    let parser = Parser::with_config(&grammar, ParseConfig::new().with_sequence_wrapping(true));
    assert!(parser.parse("x").accepted());
}

// === Recursion ===

#[test]
fn deep_nesting_grows_the_stack() {
    let grammar = Grammar::builder()
        .choice(
            "root",
            vec![vec![keyword_via("(", "paren"), rule("root"), keyword_via(")", "paren")], vec![]],
        )
        .token("paren", "[()]")
        .build()
        .unwrap();
    let depth = 20_000;
    let input = format!("{}{}", "(".repeat(depth), ")".repeat(depth));

    let (node, end) = Parser::new(&grammar).parse_prefix(&input);
    assert!(node.accepted());
    assert_eq!(end, pos(input.len()));
    assert_eq!(node.full_text(), input);
}

#[test]
fn parsing_is_deterministic() {
    let grammar = furthest_failure_grammar(false);
    let parser = Parser::new(&grammar);
    assert_eq!(parser.parse("abcdefg"), parser.parse("abcdefg"));
}
