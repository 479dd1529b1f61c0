//! Errors raised while building a grammar.
//!
//! Parsing itself never errors: a failed parse is a rejected [`Node`]
//! carrying its own diagnostics. Everything here is a defect in the grammar.
//!
//! [`Node`]: sift_ir::Node

use thiserror::Error;

/// A grammar could not be built.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("rule `{0}` is defined more than once")]
    DuplicateRule(String),

    #[error("rule `{rule}` refers to undefined rule `{target}`")]
    UnknownRule { rule: String, target: String },

    #[error("rule `{rule}` has an invalid pattern")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule `{rule}` has an unusable repetition bound {{{least},{most}}}")]
    InvalidBound {
        rule: String,
        least: usize,
        most: usize,
    },

    #[error("root rule `{0}` is not defined")]
    MissingRoot(String),

    #[error("grammar source is malformed at byte {offset}: {message}")]
    Syntax { message: String, offset: usize },
}

impl GrammarError {
    /// The rule the error is about, if it concerns one.
    pub fn rule(&self) -> Option<&str> {
        match self {
            GrammarError::DuplicateRule(rule)
            | GrammarError::MissingRoot(rule)
            | GrammarError::UnknownRule { rule, .. }
            | GrammarError::InvalidPattern { rule, .. }
            | GrammarError::InvalidBound { rule, .. } => Some(rule),
            GrammarError::Syntax { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn messages() {
        let unknown = GrammarError::UnknownRule {
            rule: "root".into(),
            target: "expr".into(),
        };
        assert_eq!(unknown.to_string(), "rule `root` refers to undefined rule `expr`");
        assert_eq!(unknown.rule(), Some("root"));

        let bound = GrammarError::InvalidBound {
            rule: "list".into(),
            least: 3,
            most: 1,
        };
        assert_eq!(
            bound.to_string(),
            "rule `list` has an unusable repetition bound {3,1}"
        );

        let syntax = GrammarError::Syntax {
            message: "expected `;`".into(),
            offset: 12,
        };
        assert_eq!(
            syntax.to_string(),
            "grammar source is malformed at byte 12: expected `;`"
        );
        assert_eq!(syntax.rule(), None);
    }
}
