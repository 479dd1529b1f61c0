//! The generic render walk.

use std::io::{self, Write};

use sift_ir::{Node, NodeKind, StringInterner};
use sift_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{RenderOptions, RenderPolicy, Sink};

/// Walks node trees, driving a [`RenderPolicy`].
///
/// `names` must be the interner of the grammar that produced the trees;
/// rule names and custom failure messages are resolved through it.
pub struct Renderer<'n, P> {
    names: &'n StringInterner,
    policy: P,
}

impl<'n, P: RenderPolicy> Renderer<'n, P> {
    pub fn new(names: &'n StringInterner, policy: P) -> Self {
        Renderer { names, policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn into_policy(self) -> P {
        self.policy
    }

    /// Render `node` to `writer`.
    pub fn render(&mut self, node: &Node<'_>, writer: &mut dyn Write) -> io::Result<()> {
        let options = self.policy.options();
        trace!(
            verbose = options.verbose,
            compact = options.compact,
            "render session"
        );
        let mut sink = Sink::new(writer);
        self.walk(node, options, &mut sink)?;
        sink.flush()
    }

    /// Render `node` into a string.
    pub fn render_to_string(&mut self, node: &Node<'_>) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.render(node, &mut buffer)?;
        String::from_utf8(buffer).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    fn walk(&mut self, node: &Node<'_>, options: RenderOptions, out: &mut Sink<'_>) -> io::Result<()> {
        // Output nesting follows the tree, which follows the input.
        ensure_sufficient_stack(|| {
            self.policy.put_main_begin(out)?;
            self.policy.put_name(out, self.names.lookup(node.rule()))?;
            self.policy.put_index(out, node.index())?;

            match node.kind() {
                NodeKind::List { children, .. } => self.walk_children(children, options, out)?,
                NodeKind::Text(text) | NodeKind::TextOrError(Ok(text)) => {
                    self.policy.put_begin(out)?;
                    self.policy.put_text(out, text)?;
                    self.policy.put_end(out)?;
                }
                NodeKind::TextOrError(Err(tag)) | NodeKind::Error { tag, .. } => {
                    self.policy.put_begin(out)?;
                    self.policy.put_error(out, tag.message(self.names))?;
                    self.policy.put_end(out)?;
                }
            }

            self.policy.put_main_end(out)
        })
    }

    fn walk_children(
        &mut self,
        children: &[Node<'_>],
        options: RenderOptions,
        out: &mut Sink<'_>,
    ) -> io::Result<()> {
        let kept: Vec<&Node<'_>> = children
            .iter()
            .filter(|child| (options.verbose || !child.is_empty()) && self.policy.keeps(child))
            .collect();

        if let [only] = kept.as_slice() {
            if options.compact {
                self.policy.put_begin(out)?;
                self.walk(only, options, out)?;
                return self.policy.put_end(out);
            }
        }

        self.policy.put_placeholder(out)?;
        self.policy.put_ln_begin(out)?;
        out.enter();
        for (i, child) in kept.iter().enumerate() {
            self.policy.put_ln(out, i == 0)?;
            self.walk(child, options, out)?;
        }
        out.leave();
        self.policy.put_ln_end(out)
    }
}
