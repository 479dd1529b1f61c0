//! Recursive-descent PEG engine.
//!
//! Build a [`Grammar`] with [`GrammarBuilder`] or from text with
//! [`Grammar::from_source`], then [`parse`] input into a [`Node`] tree.
//! A parse never errors: a rejected root node carries its own diagnostics,
//! see [`Node::deepest_error`].
//!
//! ```text
//! root ::= "if" _ number ;
//! number = /[0-9]+/ ;
//! ```

mod cursor;
mod engine;
mod error;
pub mod grammar;
mod parser;
mod syntax;

pub use cursor::Cursor;
pub use error::GrammarError;
pub use grammar::{Grammar, GrammarBuilder, ItemSpec, RuleId};
pub use parser::{parse, ParseConfig, Parser};

pub use sift_ir::{Bound, ErrorTag, FailureKind, Name, Node, NodeKind, Position};
