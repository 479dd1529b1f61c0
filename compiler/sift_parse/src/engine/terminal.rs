use sift_ir::{ErrorTag, Name, Node};
use tracing::trace;

use super::Engine;
use crate::grammar::{Pattern, RuleId};
use crate::Cursor;

impl Engine<'_> {
    /// Match a pattern rule, producing text or a `RegexNotMatched` error.
    pub(super) fn parse_pattern<'src>(rule: Name, pattern: &Pattern, cursor: &mut Cursor<'src>) -> Node<'src> {
        let pos = cursor.position();
        match pattern.match_len(cursor.rest()) {
            Some(len) => Node::matched(rule, pos, cursor.advance(len)),
            None => Node::error(rule, pos, ErrorTag::RegexNotMatched),
        }
    }

    /// Match a token rule. Success and failure share the token variant.
    pub(super) fn parse_token<'src>(rule: Name, pattern: &Pattern, cursor: &mut Cursor<'src>) -> Node<'src> {
        let pos = cursor.position();
        let result = match pattern.match_len(cursor.rest()) {
            Some(len) => Ok(cursor.advance(len)),
            None => Err(ErrorTag::RegexNotMatched),
        };
        Node::text_or_error(rule, pos, result)
    }

    /// Run the keyword's lexer and compare what it matched with `literal`.
    ///
    /// On success the lexer's own node is returned. On mismatch the lexer's
    /// node is kept inside a `BadKeyword` error at the starting position;
    /// whatever it consumed is restored by the enclosing combinator.
    pub(super) fn parse_keyword<'src>(
        &self,
        literal: &str,
        lexer: RuleId,
        cursor: &mut Cursor<'src>,
    ) -> Node<'src> {
        let pos = cursor.position();
        let token = self.parse_rule(lexer, cursor);
        if token.accepted() && token.full_text() == literal {
            return token;
        }
        trace!(
            expected = literal,
            found = %token.full_text(),
            at = pos.offset(),
            "keyword mismatch"
        );
        Node::wrap(Name::ERROR, 0, pos, ErrorTag::BadKeyword, token)
    }

    /// An unconditional failure carrying the grammar's message.
    pub(super) fn fail<'src>(message: Name, cursor: &Cursor<'src>) -> Node<'src> {
        Node::error(Name::ERROR, cursor.position(), ErrorTag::Custom(message))
    }
}
