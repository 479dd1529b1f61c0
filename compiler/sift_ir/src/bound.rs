//! Repetition bounds for sequence items.

use std::fmt;

/// How many times a sequence item may and must match: `[least, most]`.
///
/// An item is attempted up to `most` times; the sequence fails if fewer
/// than `least` attempts succeed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bound {
    pub least: usize,
    pub most: usize,
}

impl Bound {
    /// Exactly once.
    pub const NORMAL: Bound = Bound::new(1, 1);
    /// Optional (`?`).
    pub const MAYBE: Bound = Bound::new(0, 1);
    /// Any number of times (`*`).
    pub const ZERO_OR_MORE: Bound = Bound::new(0, usize::MAX);
    /// At least once (`+`).
    pub const ONE_OR_MORE: Bound = Bound::new(1, usize::MAX);

    #[inline]
    pub const fn new(least: usize, most: usize) -> Self {
        Bound { least, most }
    }

    /// A bound is usable if at least one attempt is allowed and the
    /// minimum does not exceed the maximum.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.most >= 1 && self.least <= self.most
    }

    #[inline]
    pub const fn is_unbounded(self) -> bool {
        self.most == usize::MAX
    }
}

impl Default for Bound {
    fn default() -> Self {
        Bound::NORMAL
    }
}

/// Formats as the grammar-file suffix.
impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Bound::NORMAL => Ok(()),
            Bound::MAYBE => f.write_str("?"),
            Bound::ZERO_OR_MORE => f.write_str("*"),
            Bound::ONE_OR_MORE => f.write_str("+"),
            Bound { least, .. } if self.is_unbounded() => write!(f, "{{{least},}}"),
            Bound { least, most } => write!(f, "{{{least},{most}}}"),
        }
    }
}
