//! Parse entry points.

use sift_ir::{Node, Position};
use tracing::debug;

use crate::engine::Engine;
use crate::grammar::Grammar;
use crate::Cursor;

/// Options for a parse run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseConfig {
    /// Wrap every failed sequence in a `Longest bad match` error. The
    /// wrapper sits at the position the sequence reached, so diagnostics
    /// can name the alternative that got furthest.
    pub wrap_sequence_failures: bool,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sequence_wrapping(mut self, enabled: bool) -> Self {
        self.wrap_sequence_failures = enabled;
        self
    }
}

/// Parses input with a grammar. Borrowing the grammar lets any number of
/// parsers share one, on any thread.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    config: ParseConfig,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self::with_config(grammar, ParseConfig::default())
    }

    pub fn with_config(grammar: &'g Grammar, config: ParseConfig) -> Self {
        Parser { grammar, config }
    }

    #[inline]
    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    #[inline]
    pub fn config(&self) -> ParseConfig {
        self.config
    }

    /// Parse `input` from the root rule.
    ///
    /// The result is the root rule's node: accepted if the root matched a
    /// prefix of the input, otherwise the best failure. Trailing input is
    /// not an error unless the grammar says so (for example with a final
    /// `/\z/` pattern).
    pub fn parse<'src>(&self, input: &'src str) -> Node<'src> {
        self.parse_prefix(input).0
    }

    /// Like [`parse`](Self::parse), also returning where the cursor ended.
    #[tracing::instrument(level = "debug", skip_all, fields(input_len = input.len()))]
    pub fn parse_prefix<'src>(&self, input: &'src str) -> (Node<'src>, Position) {
        let mut cursor = Cursor::new(input);
        let node = Engine::new(self.grammar, self.config).parse_rule(self.grammar.root(), &mut cursor);
        debug!(
            accepted = node.accepted(),
            consumed = cursor.position().offset(),
            nodes = node.node_count(),
            "parse finished"
        );
        (node, cursor.position())
    }
}

/// Parse `input` with `grammar` and default options.
pub fn parse<'src>(grammar: &Grammar, input: &'src str) -> Node<'src> {
    Parser::new(grammar).parse(input)
}
