//! Compiled grammars.
//!
//! A [`Grammar`] is an immutable table of rules built by a
//! [`GrammarBuilder`]. Rules refer to each other by [`RuleId`], so
//! recursive and mutually recursive grammars need no shared ownership.
//! Once built, a grammar can be shared across threads and used for any
//! number of parses.

mod builder;

pub use builder::{
    fail, keyword, keyword_via, rule, space, GrammarBuilder, ItemSpec, DEFAULT_KEYWORD, DEFAULT_SPACE,
};

use std::fmt;

use regex::Regex;
use sift_ir::{Bound, Name, StringInterner};

/// Index of a rule in its [`Grammar`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(u32);

impl RuleId {
    /// # Panics
    /// Panics if `index` does not fit in `u32`.
    pub(crate) fn new(index: usize) -> Self {
        RuleId(u32::try_from(index).unwrap_or_else(|_| panic!("rule table overflow: {index}")))
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named rule.
#[derive(Debug)]
pub struct RuleDef {
    name: Name,
    body: RuleBody,
}

impl RuleDef {
    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    #[inline]
    pub fn body(&self) -> &RuleBody {
        &self.body
    }
}

/// What a rule matches.
#[derive(Debug)]
pub enum RuleBody {
    /// Ordered choice over sequences. A single-alternative choice is a plain
    /// sequence rule.
    Choice(Vec<Sequence>),
    /// Pattern terminal producing a text node.
    Pattern(Pattern),
    /// Pattern terminal producing a token node (text or failure).
    Token(Pattern),
}

/// One alternative of a choice.
#[derive(Debug)]
pub struct Sequence {
    items: Vec<Item>,
}

impl Sequence {
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Sequence { items }
    }

    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// A sequence item: what to match and how many times.
#[derive(Debug)]
pub struct Item {
    pub term: Term,
    pub bound: Bound,
}

#[derive(Debug)]
pub enum Term {
    /// Another rule, by reference.
    Ref(RuleId),
    /// A literal matched by running `lexer` and comparing its text.
    Keyword { literal: Box<str>, lexer: RuleId },
    /// Unconditional failure with a grammar-supplied message.
    Fail(Name),
}

/// A compiled pattern, anchored at the cursor.
pub struct Pattern {
    source: Box<str>,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` so that it only matches at the start of the
    /// remaining input.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!(r"\A(?:{source})"))?;
        Ok(Pattern {
            source: source.into(),
            regex,
        })
    }

    /// The pattern as written.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Length in bytes of the match at the start of `haystack`.
    ///
    /// A source that closes the anchor's group early can still match
    /// further in; such matches are not at the cursor and are refused.
    pub fn match_len(&self, haystack: &str) -> Option<usize> {
        self.regex
            .find(haystack)
            .filter(|found| found.start() == 0)
            .map(|found| found.end())
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pattern(/{}/)", self.source)
    }
}

/// An immutable, validated rule table.
#[derive(Debug)]
pub struct Grammar {
    names: StringInterner,
    rules: Vec<RuleDef>,
    root: RuleId,
}

impl Grammar {
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    pub(crate) fn new(names: StringInterner, rules: Vec<RuleDef>, root: RuleId) -> Self {
        Grammar { names, rules, root }
    }

    /// Rule names and custom failure messages.
    #[inline]
    pub fn names(&self) -> &StringInterner {
        &self.names
    }

    /// The rule a parse starts from.
    #[inline]
    pub fn root(&self) -> RuleId {
        self.root
    }

    /// Look up a rule. Ids only come from this grammar, so lookup cannot miss.
    #[inline]
    pub fn rule(&self, id: RuleId) -> &RuleDef {
        &self.rules[id.index()]
    }

    /// The rule called `name`, if any.
    pub fn find(&self, name: &str) -> Option<RuleId> {
        let name = self.names.get(name)?;
        self.rules
            .iter()
            .position(|rule| rule.name == name)
            .map(RuleId::new)
    }

    /// Resolve a node's rule name to text.
    #[inline]
    pub fn rule_name(&self, name: Name) -> &str {
        self.names.lookup(name)
    }

    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &RuleDef)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(index, rule)| (RuleId::new(index), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
