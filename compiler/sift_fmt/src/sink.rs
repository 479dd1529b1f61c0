//! Output sink handed to policy hooks.

use std::io::{self, Write};

/// Indentation unit for tree layouts.
pub const INDENT: &str = "    ";

/// The writer a render session targets, plus the walk's nesting depth.
pub struct Sink<'w> {
    writer: &'w mut dyn Write,
    depth: usize,
}

impl<'w> Sink<'w> {
    pub(crate) fn new(writer: &'w mut dyn Write) -> Self {
        Sink { writer, depth: 0 }
    }

    /// Number of child blocks the walk is currently inside.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn put(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    /// Start a new line indented to the current depth.
    pub fn newline(&mut self) -> io::Result<()> {
        self.newline_at(self.depth)
    }

    /// Start a new line indented `level` times.
    pub fn newline_at(&mut self, level: usize) -> io::Result<()> {
        self.put("\n")?;
        for _ in 0..level {
            self.put(INDENT)?;
        }
        Ok(())
    }

    pub(crate) fn enter(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl Write for Sink<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
