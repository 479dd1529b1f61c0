//! Rule engine.
//!
//! A direct recursive-descent interpreter over a [`Grammar`]: every rule
//! resolution produces exactly one [`Node`], accepted or rejected, and the
//! [`Cursor`] is the only mutable state. Combinators that reject an attempt
//! restore the cursor to where the attempt began.
//!
//! - `terminal`: patterns, tokens, keywords and explicit failures
//! - `sequence`: bounded repetition of items
//! - `choice`: ordered choice with furthest-failure selection

mod choice;
mod sequence;
mod terminal;

use sift_ir::Node;
use sift_stack::ensure_sufficient_stack;

use crate::grammar::{Grammar, RuleBody, RuleId, Term};
use crate::{Cursor, ParseConfig};

/// One parse run over a grammar.
pub(crate) struct Engine<'g> {
    grammar: &'g Grammar,
    config: ParseConfig,
}

impl<'g> Engine<'g> {
    pub(crate) fn new(grammar: &'g Grammar, config: ParseConfig) -> Self {
        Engine { grammar, config }
    }

    /// Resolve rule `id` at the cursor.
    pub(crate) fn parse_rule<'src>(&self, id: RuleId, cursor: &mut Cursor<'src>) -> Node<'src> {
        // Nesting depth follows the input, not the grammar.
        ensure_sufficient_stack(|| {
            let rule = self.grammar.rule(id);
            match rule.body() {
                RuleBody::Choice(alternatives) => self.parse_choice(rule.name(), alternatives, cursor),
                RuleBody::Pattern(pattern) => Self::parse_pattern(rule.name(), pattern, cursor),
                RuleBody::Token(pattern) => Self::parse_token(rule.name(), pattern, cursor),
            }
        })
    }

    fn parse_term<'src>(&self, term: &Term, cursor: &mut Cursor<'src>) -> Node<'src> {
        match term {
            Term::Ref(id) => self.parse_rule(*id, cursor),
            Term::Keyword { literal, lexer } => self.parse_keyword(literal, *lexer, cursor),
            Term::Fail(message) => Self::fail(*message, cursor),
        }
    }

    fn rule_name(&self, name: sift_ir::Name) -> &str {
        self.grammar.rule_name(name)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
