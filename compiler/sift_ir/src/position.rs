//! Input positions.

use std::fmt;

/// Byte offset into the parse input.
///
/// Positions are totally ordered so that "how far did this attempt get"
/// is a plain comparison.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Position(usize);

impl Position {
    /// The start of the input.
    pub const START: Position = Position(0);

    #[inline]
    pub const fn new(offset: usize) -> Self {
        Position(offset)
    }

    /// Byte offset from the start of the input.
    #[inline]
    pub const fn offset(self) -> usize {
        self.0
    }

    /// The position `len` bytes further on.
    #[inline]
    #[must_use]
    pub const fn advanced(self, len: usize) -> Self {
        Position(self.0 + len)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Position {
    fn from(offset: usize) -> Self {
        Position(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_order_by_offset() {
        assert!(Position::new(2) < Position::new(5));
        assert_eq!(Position::START, Position::new(0));
        assert_eq!(Position::new(3).advanced(4), Position::new(7));
        assert_eq!(Position::new(3).advanced(4).offset(), 7);
    }

    #[test]
    fn position_formatting() {
        assert_eq!(format!("{:?}", Position::new(12)), "@12");
        assert_eq!(Position::new(12).to_string(), "12");
    }
}
