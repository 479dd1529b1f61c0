//! Grammar files.
//!
//! ```text
//! # comment to end of line
//! root      ::= _ statement* ;
//! statement ::= "let" _ name _ "=" @ punct _ value
//!             | value ;
//! value     = /[0-9]+/ ;
//! name      = @/[a-z]+/ ;
//! punct     = @/[=;]/ ;
//! ```
//!
//! `::=` defines a choice over sequences, `= /re/` a pattern rule and
//! `= @/re/` a token rule. Items are rule names, `_` for whitespace,
//! `"literal"` keywords (optionally `@ lexer`), and `!"message"` failures,
//! each with an optional `?`, `*` or `+` suffix.
//!
//! Grammar files are parsed by this engine with a grammar built through
//! [`GrammarBuilder`](crate::GrammarBuilder), then lowered into another
//! builder.

mod lower;
mod meta;

use sift_ir::Node;
use tracing::debug;

use crate::grammar::Grammar;
use crate::{GrammarError, Parser};

impl Grammar {
    /// Load a grammar from its textual form.
    ///
    /// `space` and `keyword` are supplied unless the text defines them, and
    /// parsing starts from `root`.
    pub fn from_source(source: &str) -> Result<Grammar, GrammarError> {
        let meta = meta::meta_grammar()?;
        let tree = Parser::new(&meta).parse(source);
        if !tree.accepted() {
            let error = tree.furthest_error().unwrap_or(&tree);
            return Err(GrammarError::Syntax {
                message: describe(error, source),
                offset: error.position().offset(),
            });
        }
        let builder = lower::Lowering::new(&meta).lower(&tree)?;
        debug!(source_len = source.len(), "grammar source parsed");
        builder.build()
    }
}

fn describe(error: &Node<'_>, source: &str) -> String {
    let rest = source.get(error.position().offset()..).unwrap_or_default();
    let found = match error.wrapped().and_then(Node::text) {
        Some(text) if !text.is_empty() => text,
        _ => rest
            .char_indices()
            .nth(1)
            .and_then(|(end, _)| rest.get(..end))
            .unwrap_or(rest),
    };
    if found.is_empty() {
        "unexpected end of grammar".to_owned()
    } else {
        format!("unexpected `{}`", found.escape_debug())
    }
}
