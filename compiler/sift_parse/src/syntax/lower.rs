//! Lowering a parsed grammar file into a [`GrammarBuilder`].

use sift_ir::Node;

use crate::grammar::{fail, keyword, keyword_via, rule, space, Grammar, GrammarBuilder, ItemSpec};
use crate::GrammarError;

/// Walks an accepted parse of a grammar file.
pub(super) struct Lowering<'m> {
    meta: &'m Grammar,
}

impl<'m> Lowering<'m> {
    pub(super) fn new(meta: &'m Grammar) -> Self {
        Lowering { meta }
    }

    /// Accepted children of `node` produced by `rule`.
    fn named<'n, 'src>(
        &'n self,
        node: &'n Node<'src>,
        rule: &'n str,
    ) -> impl Iterator<Item = &'n Node<'src>> + 'n {
        let meta: &'n Grammar = self.meta;
        node.children()
            .iter()
            .filter(move |child| child.accepted() && meta.rule_name(child.rule()) == rule)
    }

    fn first<'n, 'src>(&'n self, node: &'n Node<'src>, rule: &'n str) -> Option<&'n Node<'src>> {
        self.named(node, rule).next()
    }

    pub(super) fn lower(&self, tree: &Node<'_>) -> Result<GrammarBuilder, GrammarError> {
        let mut builder = Grammar::builder().with_default_lexemes();
        for definition in self.named(tree, "definition") {
            let Some(name) = self.first(definition, "name").and_then(Node::text) else {
                continue;
            };
            builder = if definition.index() == 0 {
                let mut alternatives = Vec::new();
                for child in definition.children().iter().filter(|child| child.accepted()) {
                    let sequence = match self.meta.rule_name(child.rule()) {
                        "sequence" => Some(child),
                        "alternative" => self.first(child, "sequence"),
                        _ => None,
                    };
                    if let Some(sequence) = sequence {
                        alternatives.push(self.lower_sequence(sequence)?);
                    }
                }
                builder.choice(name, alternatives)
            } else {
                let source = self
                    .first(definition, "regex")
                    .and_then(Node::text)
                    .map(pattern_source)
                    .unwrap_or_default();
                let is_token = self.named(definition, "punct").any(|punct| punct.text() == Some("@"));
                if is_token {
                    builder.token(name, &source)
                } else {
                    builder.pattern(name, &source)
                }
            };
        }
        Ok(builder)
    }

    fn lower_sequence(&self, sequence: &Node<'_>) -> Result<Vec<ItemSpec>, GrammarError> {
        let mut items = Vec::new();
        for item in self.named(sequence, "item") {
            let Some(term) = self.first(item, "term") else {
                continue;
            };
            let spec = match term.index() {
                0 => match self.first(term, "string") {
                    Some(message) => fail(&unescape(message)?),
                    None => continue,
                },
                1 => {
                    let Some(literal) = self.first(term, "string") else {
                        continue;
                    };
                    let literal = unescape(literal)?;
                    let lexer = self
                        .first(term, "lexer")
                        .and_then(|lexer| self.first(lexer, "name"))
                        .and_then(Node::text);
                    match lexer {
                        Some(lexer) => keyword_via(&literal, lexer),
                        None => keyword(&literal),
                    }
                }
                _ => match self.first(term, "name").and_then(Node::text) {
                    Some("_") => space(),
                    Some(target) => rule(target),
                    None => continue,
                },
            };
            let spec = match self.first(item, "suffix").and_then(Node::text) {
                Some("?") => spec.maybe(),
                Some("*") => spec.zero_or_more(),
                Some("+") => spec.one_or_more(),
                _ => spec,
            };
            items.push(spec);
        }
        Ok(items)
    }
}

/// Decode a quoted literal.
fn unescape(literal: &Node<'_>) -> Result<String, GrammarError> {
    let text = literal.text().unwrap_or_default();
    let inner = text
        .strip_prefix('"')
        .and_then(|text| text.strip_suffix('"'))
        .unwrap_or(text);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        out.push(match chars.next() {
            Some('n') => '\n',
            Some('t') => '\t',
            Some('r') => '\r',
            Some('"') => '"',
            Some('\\') => '\\',
            other => {
                return Err(GrammarError::Syntax {
                    message: format!("unknown escape `\\{}` in literal", other.unwrap_or(' ')),
                    offset: literal.position().offset(),
                })
            }
        });
    }
    Ok(out)
}

/// Strip the slashes around a pattern and unescape `\/`. Every other escape
/// belongs to the regex.
fn pattern_source(literal: &str) -> String {
    let inner = literal
        .strip_prefix('/')
        .and_then(|text| text.strip_suffix('/'))
        .unwrap_or(literal);
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('/') => out.push('/'),
            Some(escaped) => {
                out.push('\\');
                out.push(escaped);
            }
            None => out.push('\\'),
        }
    }
    out
}
