//! Interned rule names.

use std::fmt;

/// Handle to a string held by a [`StringInterner`](crate::StringInterner).
///
/// Nodes carry the name of the rule that produced them as a `Name`; the
/// string is looked up through the grammar's interner when rendering. The
/// builtin rule names are pre-interned at fixed handles.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// `root`: the default entry rule.
    pub const ROOT: Name = Name(0);
    /// `space`: the rule referenced by space items.
    pub const SPACE: Name = Name(1);
    /// `keyword`: the default lexer for keyword items.
    pub const KEYWORD: Name = Name(2);
    /// `error`: the name carried by keyword mismatches and explicit failures.
    pub const ERROR: Name = Name(3);

    /// Strings pre-interned at the handles above, in handle order.
    pub(crate) const BUILTINS: [&'static str; 4] = ["root", "space", "keyword", "error"];

    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        Name(index)
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Name::BUILTINS.get(self.index()) {
            Some(builtin) => write!(f, "Name({builtin})"),
            None => write!(f, "Name(#{})", self.0),
        }
    }
}
