//! The grammar of grammar files, built with the builder API.

use crate::grammar::{keyword_via, rule, space, Grammar, ItemSpec};
use crate::GrammarError;

fn punct(literal: &str) -> ItemSpec {
    keyword_via(literal, "punct")
}

/// ```text
/// root        ::= _ definition* end ;
/// definition  ::= name _ "::="@punct _ sequence alternative* ";"@punct _
///               | name _ "="@punct _ "@"@punct? regex _ ";"@punct _ ;
/// alternative ::= "|"@punct _ sequence ;
/// sequence    ::= item* ;
/// item        ::= term suffix? _ ;
/// term        ::= "!"@punct string | string lexer? | name ;
/// lexer       ::= _ "@"@punct _ name ;
/// ```
///
/// The alternative index of `definition` and `term` nodes tells the
/// lowering pass which form it is looking at.
pub(super) fn meta_grammar() -> Result<Grammar, GrammarError> {
    Grammar::builder()
        .sequence("root", vec![space(), rule("definition").zero_or_more(), rule("end")])
        .choice(
            "definition",
            vec![
                vec![
                    rule("name"),
                    space(),
                    punct("::="),
                    space(),
                    rule("sequence"),
                    rule("alternative").zero_or_more(),
                    punct(";"),
                    space(),
                ],
                vec![
                    rule("name"),
                    space(),
                    punct("="),
                    space(),
                    punct("@").maybe(),
                    rule("regex"),
                    space(),
                    punct(";"),
                    space(),
                ],
            ],
        )
        .sequence("alternative", vec![punct("|"), space(), rule("sequence")])
        .sequence("sequence", vec![rule("item").zero_or_more()])
        .sequence("item", vec![rule("term"), rule("suffix").maybe(), space()])
        .choice(
            "term",
            vec![
                vec![punct("!"), rule("string")],
                vec![rule("string"), rule("lexer").maybe()],
                vec![rule("name")],
            ],
        )
        .sequence("lexer", vec![space(), punct("@"), space(), rule("name")])
        .pattern("space", r"(?:\s|#[^\n]*)*")
        .token("name", r"[A-Za-z_][A-Za-z0-9_]*")
        .token("punct", r"::=|[=|;@!]")
        .token("string", r#""(?:[^"\\]|\\.)*""#)
        .token("regex", r"/(?:[^/\\\n]|\\.)*/")
        .pattern("suffix", r"[?*+]")
        .pattern("end", r"\z")
        .build()
}
