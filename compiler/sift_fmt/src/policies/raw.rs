use std::io;

use sift_ir::Node;

use crate::{RenderOptions, RenderPolicy, Sink};

/// Reassembles the consumed input: accepted leaf text, concatenated.
///
/// Failed attempts a list kept for diagnostics are skipped, so rendering an
/// accepted parse reproduces exactly the text it consumed.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawText;

impl RenderPolicy for RawText {
    fn options(&self) -> RenderOptions {
        RenderOptions::new(true, false)
    }

    fn keeps(&self, child: &Node<'_>) -> bool {
        child.accepted()
    }

    fn put_text(&mut self, out: &mut Sink<'_>, text: &str) -> io::Result<()> {
        out.put(text)
    }
}
