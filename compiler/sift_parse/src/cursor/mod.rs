//! Input cursor.
//!
//! Tracks the byte position the rule engine has reached. Backtracking is a
//! `snapshot()` before an attempt and a `restore()` after it fails.

use sift_ir::Position;
use tracing::trace;

/// Position in the parse input, advanced as terminals match.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    input: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `input`.
    pub fn new(input: &'src str) -> Self {
        Cursor { input, pos: 0 }
    }

    /// The whole input.
    #[inline]
    pub fn input(&self) -> &'src str {
        self.input
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.pos)
    }

    /// The unconsumed remainder of the input.
    #[inline]
    pub fn rest(&self) -> &'src str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Consume `len` bytes, returning them.
    ///
    /// `len` must end on a character boundary; terminals only ever pass the
    /// length of a match found in [`rest`](Self::rest).
    pub fn advance(&mut self, len: usize) -> &'src str {
        let end = self.pos + len;
        debug_assert!(
            self.input.is_char_boundary(end),
            "cursor advanced to {end}, which is not a character boundary"
        );
        let taken = self.input.get(self.pos..end).unwrap_or_default();
        self.pos += taken.len();
        taken
    }

    /// Record the current position for a later [`restore`](Self::restore).
    #[inline]
    pub fn snapshot(&self) -> Position {
        self.position()
    }

    /// Roll back to a position taken with [`snapshot`](Self::snapshot).
    pub fn restore(&mut self, snapshot: Position) {
        debug_assert!(
            snapshot.offset() <= self.input.len(),
            "cursor restored to {snapshot:?}, past the end of the input"
        );
        if snapshot.offset() != self.pos {
            trace!(from = self.pos, to = snapshot.offset(), "cursor restored");
        }
        self.pos = snapshot.offset();
    }
}
