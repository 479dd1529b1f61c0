//! Extension points of the render walk.

use std::io;

use sift_ir::Node;

use crate::Sink;

/// Per-session switches of the render walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Keep children whose content is empty (whitespace, zero-width).
    pub verbose: bool,
    /// Render a list with exactly one remaining child inline, collapsing
    /// wrapper productions.
    pub compact: bool,
}

impl RenderOptions {
    pub const fn new(verbose: bool, compact: bool) -> Self {
        RenderOptions { verbose, compact }
    }

    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub const fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }
}

/// An output format, expressed as the bodies of the walk's hooks.
///
/// For every node the walk calls, in order: `put_main_begin`, `put_name`,
/// `put_index`, then the payload, then `put_main_end`. A leaf payload is
/// `put_begin`, `put_text` or `put_error`, `put_end`. A list payload is
/// either `put_begin`, the single child, `put_end` (compact lists), or
/// `put_placeholder`, `put_ln_begin`, `put_ln` before each child, and
/// `put_ln_end`.
///
/// Every hook defaults to writing nothing.
#[expect(unused_variables, reason = "default hook bodies ignore their arguments")]
pub trait RenderPolicy {
    fn options(&self) -> RenderOptions;

    /// Whether a list child is rendered at all. Applied after the
    /// verbosity filter.
    fn keeps(&self, child: &Node<'_>) -> bool {
        true
    }

    fn put_main_begin(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        Ok(())
    }

    fn put_name(&mut self, out: &mut Sink<'_>, name: &str) -> io::Result<()> {
        Ok(())
    }

    /// The node's grammar-site index.
    fn put_index(&mut self, out: &mut Sink<'_>, index: usize) -> io::Result<()> {
        Ok(())
    }

    fn put_begin(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        Ok(())
    }

    fn put_text(&mut self, out: &mut Sink<'_>, text: &str) -> io::Result<()> {
        Ok(())
    }

    fn put_error(&mut self, out: &mut Sink<'_>, message: &str) -> io::Result<()> {
        Ok(())
    }

    fn put_end(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        Ok(())
    }

    /// Marks a list that opens a child block.
    fn put_placeholder(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        Ok(())
    }

    fn put_ln_begin(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        Ok(())
    }

    /// Separator before each child; `first` is set for the first one.
    fn put_ln(&mut self, out: &mut Sink<'_>, first: bool) -> io::Result<()> {
        Ok(())
    }

    fn put_ln_end(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        Ok(())
    }

    fn put_main_end(&mut self, out: &mut Sink<'_>) -> io::Result<()> {
        Ok(())
    }
}
