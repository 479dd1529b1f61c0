//! Parse-tree nodes.
//!
//! Every rule resolution produces exactly one [`Node`]. Accepted and
//! rejected results share the type so that ordered choice and sequence can
//! keep, compare and discard them uniformly.
//!
//! # Ownership
//!
//! A list owns its children and an error owns the partial attempt it wraps.
//! A node is moved exactly once when it is attached to a parent; a node that
//! loses a choice is dropped by the combinator that rejected it. There is no
//! sharing, so the tree is acyclic by construction.

use std::borrow::Cow;

use sift_stack::ensure_sufficient_stack;

use crate::{ErrorTag, FailureKind, Name, Position};

/// A parse result: the rule that produced it, its grammar site and position,
/// and a variant payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node<'src> {
    rule: Name,
    index: usize,
    pos: Position,
    kind: NodeKind<'src>,
}

/// Variant payload of a [`Node`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind<'src> {
    /// Result of a sequence: every attempt made, in order.
    ///
    /// `accepted` is decided by the sequence itself (every item met its
    /// lower bound); it is not derived from the children, because a
    /// successful sequence keeps the failed probe that ended each optional
    /// or repeated item.
    List {
        children: Vec<Node<'src>>,
        accepted: bool,
    },
    /// Text matched by a pattern terminal.
    Text(&'src str),
    /// Result of a token terminal: matched text or the reason it failed.
    TextOrError(Result<&'src str, ErrorTag>),
    /// A failure, optionally wrapping the discarded attempt that caused it.
    Error {
        tag: ErrorTag,
        wrapped: Option<Box<Node<'src>>>,
    },
}

impl<'src> Node<'src> {
    // === Constructors ===

    /// A sequence result.
    pub fn list(
        rule: Name,
        index: usize,
        start: Position,
        children: Vec<Node<'src>>,
        accepted: bool,
    ) -> Self {
        Node {
            rule,
            index,
            pos: start,
            kind: NodeKind::List { children, accepted },
        }
    }

    /// Text matched at `pos`.
    pub fn matched(rule: Name, pos: Position, text: &'src str) -> Self {
        Node {
            rule,
            index: 0,
            pos,
            kind: NodeKind::Text(text),
        }
    }

    /// A token result at `pos`.
    pub fn text_or_error(rule: Name, pos: Position, result: Result<&'src str, ErrorTag>) -> Self {
        Node {
            rule,
            index: 0,
            pos,
            kind: NodeKind::TextOrError(result),
        }
    }

    /// A failure at `pos`.
    pub fn error(rule: Name, pos: Position, tag: ErrorTag) -> Self {
        Node {
            rule,
            index: 0,
            pos,
            kind: NodeKind::Error { tag, wrapped: None },
        }
    }

    /// A failure at `pos` that keeps `attempt` for diagnostics.
    pub fn wrap(rule: Name, index: usize, pos: Position, tag: ErrorTag, attempt: Node<'src>) -> Self {
        Node {
            rule,
            index,
            pos,
            kind: NodeKind::Error {
                tag,
                wrapped: Some(Box::new(attempt)),
            },
        }
    }

    // === Accessors ===

    /// The rule that produced this node.
    #[inline]
    pub fn rule(&self) -> Name {
        self.rule
    }

    /// Grammar-site index: which alternative of the producing choice built
    /// this node. Zero for leaves.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The position recorded when the node was created.
    ///
    /// For lists this is where the sequence started; for every other
    /// variant it equals [`position`](Self::position).
    #[inline]
    pub fn start(&self) -> Position {
        self.pos
    }

    /// Where this node settled.
    ///
    /// Leaves and errors report the position they were attempted at. A list
    /// reports the position of its last child (where matching stopped), or
    /// its start if it has none. This is the value failures are ranked by.
    pub fn position(&self) -> Position {
        let mut current = self;
        while let Some(last) = current.children().last() {
            current = last;
        }
        current.pos
    }

    #[inline]
    pub fn kind(&self) -> &NodeKind<'src> {
        &self.kind
    }

    /// Whether the producing rule succeeded.
    pub fn accepted(&self) -> bool {
        match &self.kind {
            NodeKind::List { accepted, .. } => *accepted,
            NodeKind::Text(_) => true,
            NodeKind::TextOrError(result) => result.is_ok(),
            NodeKind::Error { .. } => false,
        }
    }

    /// Whether the node's content is insignificant for display.
    ///
    /// Zero-width and whitespace-only text is empty, as is a list whose
    /// children are all empty. Failures are never empty.
    pub fn is_empty(&self) -> bool {
        match &self.kind {
            NodeKind::Text(text) | NodeKind::TextOrError(Ok(text)) => text.trim().is_empty(),
            NodeKind::TextOrError(Err(_)) | NodeKind::Error { .. } => false,
            NodeKind::List { children, .. } => {
                ensure_sufficient_stack(|| children.iter().all(Node::is_empty))
            }
        }
    }

    /// Matched text of an accepted leaf.
    pub fn text(&self) -> Option<&'src str> {
        match self.kind {
            NodeKind::Text(text) | NodeKind::TextOrError(Ok(text)) => Some(text),
            _ => None,
        }
    }

    /// All text spanned by accepted leaves below this node, in order.
    ///
    /// Children a list kept only for diagnostics (failed attempts) add
    /// nothing, so for an accepted node this is exactly the consumed input.
    pub fn full_text(&self) -> Cow<'src, str> {
        match &self.kind {
            NodeKind::Text(text) | NodeKind::TextOrError(Ok(text)) => Cow::Borrowed(*text),
            NodeKind::TextOrError(Err(_)) | NodeKind::Error { .. } => Cow::Borrowed(""),
            NodeKind::List { .. } => {
                let mut out = String::new();
                self.collect_text(&mut out);
                Cow::Owned(out)
            }
        }
    }

    fn collect_text(&self, out: &mut String) {
        match &self.kind {
            NodeKind::Text(text) | NodeKind::TextOrError(Ok(text)) => out.push_str(text),
            NodeKind::TextOrError(Err(_)) | NodeKind::Error { .. } => {}
            NodeKind::List { children, .. } => {
                ensure_sufficient_stack(|| {
                    for child in children.iter().filter(|child| child.accepted()) {
                        child.collect_text(out);
                    }
                });
            }
        }
    }

    /// Children of a list; empty for every other variant.
    pub fn children(&self) -> &[Node<'src>] {
        match &self.kind {
            NodeKind::List { children, .. } => children,
            _ => &[],
        }
    }

    /// The failure tag of an error or failed token.
    pub fn error_tag(&self) -> Option<ErrorTag> {
        match self.kind {
            NodeKind::Error { tag, .. } | NodeKind::TextOrError(Err(tag)) => Some(tag),
            _ => None,
        }
    }

    /// The discarded attempt an error keeps for diagnostics.
    pub fn wrapped(&self) -> Option<&Node<'src>> {
        match &self.kind {
            NodeKind::Error { wrapped, .. } => wrapped.as_deref(),
            _ => None,
        }
    }

    /// Why this node was rejected; `None` if it was accepted.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match &self.kind {
            NodeKind::List { accepted: false, .. } => Some(FailureKind::SequenceBoundViolated),
            NodeKind::TextOrError(Err(tag)) | NodeKind::Error { tag, .. } => Some((*tag).into()),
            _ => None,
        }
    }

    /// The rejected leaf that decides this node's position.
    ///
    /// Follows the last child of failed lists and looks through
    /// longest-bad-match wrappers. `None` for accepted nodes.
    pub fn deepest_error(&self) -> Option<&Node<'src>> {
        if self.accepted() {
            return None;
        }
        let mut current = self;
        loop {
            let below = match &current.kind {
                NodeKind::List { children, .. } => children.last(),
                NodeKind::Error {
                    tag: ErrorTag::LongestBadMatch,
                    wrapped: Some(attempt),
                } => Some(&**attempt),
                _ => None,
            };
            match below.filter(|node| !node.accepted()) {
                Some(node) => current = node,
                None => return Some(current),
            }
        }
    }

    /// The rejected leaf that got furthest anywhere in this subtree.
    ///
    /// Unlike [`deepest_error`](Self::deepest_error) this also searches the
    /// failed probes an accepted list kept, so it finds where input stopped
    /// making sense even when an optional item swallowed the real failure.
    /// Ties keep the earliest.
    pub fn furthest_error(&self) -> Option<&Node<'src>> {
        match &self.kind {
            NodeKind::Text(_) | NodeKind::TextOrError(Ok(_)) => None,
            NodeKind::List { children, .. } => {
                ensure_sufficient_stack(|| {
                    let mut best: Option<&Node<'src>> = None;
                    for found in children.iter().filter_map(Node::furthest_error) {
                        match best {
                            Some(current) if found.position() <= current.position() => {}
                            _ => best = Some(found),
                        }
                    }
                    best
                })
            }
            NodeKind::Error {
                tag: ErrorTag::LongestBadMatch,
                wrapped: Some(attempt),
            } => attempt.furthest_error().or(Some(self)),
            NodeKind::TextOrError(Err(_)) | NodeKind::Error { .. } => Some(self),
        }
    }

    /// Whether `self` should replace `other` as the best result of an
    /// ordered choice: it was accepted, or it got strictly further.
    pub fn supersedes(&self, other: &Node<'_>) -> bool {
        self.accepted() || self.position() > other.position()
    }

    /// Number of nodes in this subtree, wrapped attempts included.
    pub fn node_count(&self) -> usize {
        1 + ensure_sufficient_stack(|| match &self.kind {
            NodeKind::List { children, .. } => children.iter().map(Node::node_count).sum(),
            NodeKind::Error {
                wrapped: Some(attempt),
                ..
            } => attempt.node_count(),
            _ => 0,
        })
    }

    /// Move this node's owned subnodes into `pending`.
    fn detach_into(&mut self, pending: &mut Vec<Node<'src>>) {
        match &mut self.kind {
            NodeKind::List { children, .. } => pending.append(children),
            NodeKind::Error { wrapped, .. } => {
                if let Some(attempt) = wrapped.take() {
                    pending.push(*attempt);
                }
            }
            NodeKind::Text(_) | NodeKind::TextOrError(_) => {}
        }
    }
}

// Trees as deep as the input's nesting would otherwise be dropped through
// one native frame per level.
impl Drop for Node<'_> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_into(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_into(&mut pending);
        }
    }
}
