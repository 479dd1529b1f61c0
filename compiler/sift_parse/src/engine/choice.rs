use sift_ir::{ErrorTag, Name, Node};
use tracing::trace;

use super::Engine;
use crate::grammar::Sequence;
use crate::Cursor;

impl Engine<'_> {
    /// Try `alternatives` in order; the first accepted one wins.
    ///
    /// When all fail, the result is the failure that got furthest into the
    /// input, the earliest alternative on ties. Every rejected attempt is
    /// undone before the next one starts.
    pub(super) fn parse_choice<'src>(
        &self,
        rule: Name,
        alternatives: &[Sequence],
        cursor: &mut Cursor<'src>,
    ) -> Node<'src> {
        let start = cursor.snapshot();
        let mut best: Option<Node<'src>> = None;

        for (index, sequence) in alternatives.iter().enumerate() {
            let attempt = self.parse_sequence(rule, index, sequence, cursor);
            if attempt.accepted() {
                trace!(rule = self.rule_name(rule), index, "alternative accepted");
                return attempt;
            }
            cursor.restore(start);
            best = match best {
                Some(current) if !attempt.supersedes(&current) => Some(current),
                _ => Some(attempt),
            };
        }

        trace!(
            rule = self.rule_name(rule),
            alternatives = alternatives.len(),
            "no alternative accepted"
        );
        best.unwrap_or_else(|| Node::error(rule, start, ErrorTag::NothingMatched))
    }
}
