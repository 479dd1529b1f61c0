//! Failure messages carried by rejected nodes.

use crate::{Name, StringInterner};

/// The fixed message attached to an error node.
///
/// Every builtin failure condition has its own tag; grammar authors can
/// add their own through unconditional-failure items, whose message is
/// interned in the grammar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorTag {
    /// An ordered choice had no alternatives to try.
    NothingMatched,
    /// A pattern terminal did not match at the cursor.
    RegexNotMatched,
    /// A keyword's underlying token was not the expected literal.
    BadKeyword,
    /// Summary wrapper around a failed sequence.
    LongestBadMatch,
    /// Message supplied by the grammar.
    Custom(Name),
}

impl ErrorTag {
    /// The message for builtin tags; `None` for [`ErrorTag::Custom`].
    pub const fn builtin_message(self) -> Option<&'static str> {
        match self {
            ErrorTag::NothingMatched => Some("Nothing matched"),
            ErrorTag::RegexNotMatched => Some("Regex not matched"),
            ErrorTag::BadKeyword => Some("Bad keyword"),
            ErrorTag::LongestBadMatch => Some("Longest bad match"),
            ErrorTag::Custom(_) => None,
        }
    }

    /// The message text, resolving custom messages through `names`.
    pub fn message(self, names: &StringInterner) -> &str {
        match self {
            ErrorTag::Custom(message) => names.lookup(message),
            builtin => builtin.builtin_message().unwrap_or_default(),
        }
    }
}

/// Why a node was rejected.
///
/// This is the failure taxonomy of the engine as a value; it is derived
/// from the node itself rather than stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Every alternative of an ordered choice failed, or it had none.
    NoAlternativeMatched,
    /// A pattern terminal did not match.
    PatternNotMatched,
    /// A keyword's underlying token differed from the literal.
    BadKeyword,
    /// A sequence item matched fewer times than its lower bound.
    SequenceBoundViolated,
    /// A failed sequence wrapped with a summary diagnostic.
    LongestBadMatch,
    /// An unconditional-failure item was reached.
    Explicit,
}

impl From<ErrorTag> for FailureKind {
    fn from(tag: ErrorTag) -> Self {
        match tag {
            ErrorTag::NothingMatched => FailureKind::NoAlternativeMatched,
            ErrorTag::RegexNotMatched => FailureKind::PatternNotMatched,
            ErrorTag::BadKeyword => FailureKind::BadKeyword,
            ErrorTag::LongestBadMatch => FailureKind::LongestBadMatch,
            ErrorTag::Custom(_) => FailureKind::Explicit,
        }
    }
}
