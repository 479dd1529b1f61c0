//! Programmatic grammar construction.
//!
//! Rules are declared by name in any order; references are resolved and
//! validated by [`GrammarBuilder::build`], which is the only way to obtain
//! a [`Grammar`].

use rustc_hash::FxHashMap;
use sift_ir::{Bound, Name, StringInterner};
use tracing::debug;

use super::{Grammar, Item, Pattern, RuleBody, RuleDef, RuleId, Sequence, Term};
use crate::GrammarError;

/// Default whitespace rule installed by [`GrammarBuilder::with_default_lexemes`].
pub const DEFAULT_SPACE: &str = r"[ \t\r\n]*";

/// Default keyword lexer installed by [`GrammarBuilder::with_default_lexemes`].
pub const DEFAULT_KEYWORD: &str = r"[A-Za-z_][A-Za-z0-9_]*";

/// An unresolved sequence item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemSpec {
    term: TermSpec,
    bound: Bound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum TermSpec {
    Ref(String),
    Keyword { literal: String, lexer: Option<String> },
    Fail(String),
}

/// Reference to the rule called `name`.
pub fn rule(name: &str) -> ItemSpec {
    ItemSpec::new(TermSpec::Ref(name.to_owned()))
}

/// The whitespace rule (`space`).
pub fn space() -> ItemSpec {
    rule("space")
}

/// `literal`, tokenized by the grammar's `keyword` rule.
pub fn keyword(literal: &str) -> ItemSpec {
    ItemSpec::new(TermSpec::Keyword {
        literal: literal.to_owned(),
        lexer: None,
    })
}

/// `literal`, tokenized by the rule called `lexer`.
pub fn keyword_via(literal: &str, lexer: &str) -> ItemSpec {
    ItemSpec::new(TermSpec::Keyword {
        literal: literal.to_owned(),
        lexer: Some(lexer.to_owned()),
    })
}

/// Fail unconditionally with `message`.
pub fn fail(message: &str) -> ItemSpec {
    ItemSpec::new(TermSpec::Fail(message.to_owned()))
}

impl ItemSpec {
    fn new(term: TermSpec) -> Self {
        ItemSpec {
            term,
            bound: Bound::NORMAL,
        }
    }

    /// Match zero or one time.
    #[must_use]
    pub fn maybe(self) -> Self {
        self.bounded(Bound::MAYBE)
    }

    #[must_use]
    pub fn zero_or_more(self) -> Self {
        self.bounded(Bound::ZERO_OR_MORE)
    }

    #[must_use]
    pub fn one_or_more(self) -> Self {
        self.bounded(Bound::ONE_OR_MORE)
    }

    #[must_use]
    pub fn bounded(mut self, bound: Bound) -> Self {
        self.bound = bound;
        self
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }
}

#[derive(Debug)]
enum BodySpec {
    Choice(Vec<Vec<ItemSpec>>),
    Pattern(String),
    Token(String),
}

/// Collects rule definitions and validates them into a [`Grammar`].
#[derive(Debug)]
pub struct GrammarBuilder {
    names: StringInterner,
    root: Name,
    default_lexemes: bool,
    rules: Vec<(Name, BodySpec)>,
}

impl Default for GrammarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarBuilder {
    /// An empty builder whose root rule is `root`.
    pub fn new() -> Self {
        GrammarBuilder {
            names: StringInterner::new(),
            root: Name::ROOT,
            default_lexemes: false,
            rules: Vec::new(),
        }
    }

    /// Start parsing from `name` instead of `root`.
    #[must_use]
    pub fn root(mut self, name: &str) -> Self {
        self.root = self.names.intern(name);
        self
    }

    /// Define `space` and `keyword` unless the grammar defines them itself.
    #[must_use]
    pub fn with_default_lexemes(mut self) -> Self {
        self.default_lexemes = true;
        self
    }

    /// Ordered choice over `alternatives`. A single alternative makes a
    /// plain sequence rule; none makes a rule that always fails.
    #[must_use]
    pub fn choice(self, name: &str, alternatives: Vec<Vec<ItemSpec>>) -> Self {
        self.define(name, BodySpec::Choice(alternatives))
    }

    #[must_use]
    pub fn sequence(self, name: &str, items: Vec<ItemSpec>) -> Self {
        self.choice(name, vec![items])
    }

    /// Pattern terminal producing text nodes.
    #[must_use]
    pub fn pattern(self, name: &str, source: &str) -> Self {
        self.define(name, BodySpec::Pattern(source.to_owned()))
    }

    /// Pattern terminal producing token nodes.
    #[must_use]
    pub fn token(self, name: &str, source: &str) -> Self {
        self.define(name, BodySpec::Token(source.to_owned()))
    }

    fn define(mut self, name: &str, body: BodySpec) -> Self {
        let name = self.names.intern(name);
        self.rules.push((name, body));
        self
    }

    /// Resolve references, compile patterns and check bounds.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        let GrammarBuilder {
            mut names,
            root,
            default_lexemes,
            mut rules,
        } = self;

        if default_lexemes {
            for (name, source) in [(Name::SPACE, DEFAULT_SPACE), (Name::KEYWORD, DEFAULT_KEYWORD)] {
                if !rules.iter().any(|(defined, _)| *defined == name) {
                    let body = if name == Name::KEYWORD {
                        BodySpec::Token(source.to_owned())
                    } else {
                        BodySpec::Pattern(source.to_owned())
                    };
                    rules.push((name, body));
                }
            }
        }

        let mut ids: FxHashMap<Name, RuleId> = FxHashMap::default();
        for (index, (name, _)) in rules.iter().enumerate() {
            if ids.insert(*name, RuleId::new(index)).is_some() {
                return Err(GrammarError::DuplicateRule(names.lookup(*name).to_owned()));
            }
        }
        let root_id = *ids
            .get(&root)
            .ok_or_else(|| GrammarError::MissingRoot(names.lookup(root).to_owned()))?;

        let mut defs = Vec::with_capacity(rules.len());
        for (name, spec) in rules {
            let rule_text = names.lookup(name).to_owned();
            let body = match spec {
                BodySpec::Choice(alternatives) => {
                    let mut sequences = Vec::with_capacity(alternatives.len());
                    for items in alternatives {
                        let items = items
                            .into_iter()
                            .map(|item| resolve_item(item, &rule_text, &ids, &mut names))
                            .collect::<Result<Vec<_>, _>>()?;
                        sequences.push(Sequence::new(items));
                    }
                    RuleBody::Choice(sequences)
                }
                BodySpec::Pattern(source) => RuleBody::Pattern(compile(&rule_text, &source)?),
                BodySpec::Token(source) => RuleBody::Token(compile(&rule_text, &source)?),
            };
            defs.push(RuleDef { name, body });
        }

        debug!(rules = defs.len(), root = names.lookup(root), "grammar built");
        Ok(Grammar::new(names, defs, root_id))
    }
}

fn compile(rule: &str, source: &str) -> Result<Pattern, GrammarError> {
    Pattern::new(source).map_err(|source| GrammarError::InvalidPattern {
        rule: rule.to_owned(),
        source,
    })
}

fn resolve_item(
    item: ItemSpec,
    rule: &str,
    ids: &FxHashMap<Name, RuleId>,
    names: &mut StringInterner,
) -> Result<Item, GrammarError> {
    let ItemSpec { term, bound } = item;
    if !bound.is_valid() {
        return Err(GrammarError::InvalidBound {
            rule: rule.to_owned(),
            least: bound.least,
            most: bound.most,
        });
    }
    let lookup = |target: &str| {
        names
            .get(target)
            .and_then(|name| ids.get(&name).copied())
            .ok_or_else(|| GrammarError::UnknownRule {
                rule: rule.to_owned(),
                target: target.to_owned(),
            })
    };
    let term = match term {
        TermSpec::Ref(target) => Term::Ref(lookup(&target)?),
        TermSpec::Keyword { literal, lexer } => {
            let lexer = lookup(lexer.as_deref().unwrap_or("keyword"))?;
            Term::Keyword {
                literal: literal.into_boxed_str(),
                lexer,
            }
        }
        TermSpec::Fail(message) => Term::Fail(names.intern(&message)),
    };
    Ok(Item { term, bound })
}
