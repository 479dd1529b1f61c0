use sift_ir::{ErrorTag, Name, Node};
use tracing::trace;

use super::Engine;
use crate::grammar::{Item, Sequence};
use crate::Cursor;

impl Engine<'_> {
    /// Match `sequence` as alternative `index` of `rule`.
    ///
    /// The resulting list keeps every attempt in order, including the failed
    /// attempt that ended each repeated item. It is accepted iff every item
    /// met its lower bound.
    pub(super) fn parse_sequence<'src>(
        &self,
        rule: Name,
        index: usize,
        sequence: &Sequence,
        cursor: &mut Cursor<'src>,
    ) -> Node<'src> {
        let start = cursor.position();
        let mut children = Vec::with_capacity(sequence.items().len());
        let accepted = self.match_items(rule, sequence.items(), &mut children, cursor);
        let list = Node::list(rule, index, start, children, accepted);
        if accepted || !self.config.wrap_sequence_failures {
            return list;
        }
        let pos = list.position();
        Node::wrap(rule, index, pos, ErrorTag::LongestBadMatch, list)
    }

    /// Returns whether every item was satisfied. Stops at the first item
    /// that falls short of its lower bound.
    fn match_items<'src>(
        &self,
        rule: Name,
        items: &[Item],
        children: &mut Vec<Node<'src>>,
        cursor: &mut Cursor<'src>,
    ) -> bool {
        for item in items {
            let mut matched = 0;
            while matched < item.bound.most {
                let before = cursor.snapshot();
                let attempt = self.parse_term(&item.term, cursor);
                let accepted = attempt.accepted();
                children.push(attempt);

                if !accepted {
                    if matched < item.bound.least {
                        trace!(
                            rule = self.rule_name(rule),
                            matched,
                            least = item.bound.least,
                            "sequence bound violated"
                        );
                        return false;
                    }
                    // Tolerated failure: it stays in the tree but consumed nothing.
                    cursor.restore(before);
                    break;
                }

                matched += 1;
                // Past the lower bound, another zero-width match would repeat
                // forever at the same position.
                if cursor.position() == before && matched >= item.bound.least {
                    break;
                }
            }
        }
        true
    }
}
